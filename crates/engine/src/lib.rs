mod ast;
mod parsers;
mod render;

pub mod error;
pub mod lexer;
pub mod session;

use chumsky::Parser as _;

use error::{CalcError, CalcResult};
use lexer::{source_span, tokenize};
use parsers::parser;

pub use ast::{Eval, Expr, Op};
pub use render::render_numeric;

/// Parses source text into an expression tree.
///
/// Fails with a parse error carrying the input text and a description of
/// the first syntax problem; never yields a partial tree.
pub fn parse(input: &str) -> CalcResult<Expr> {
    let lexicon = tokenize(input).map_err(|err| err.contextualize(input))?;
    let tokens = lexicon
        .iter()
        .map(|(token, _)| token.clone())
        .collect::<Vec<_>>();

    match parser().parse(&tokens).into_result() {
        Ok(expr) => Ok(expr),
        Err(errs) => {
            let (msg, span) = errs
                .first()
                .map(|err| (err.to_string(), err.span().into_range()))
                .unwrap_or_else(|| ("incomplete expression".into(), 0..0));
            Err(CalcError::parser(source_span(&lexicon, &span), msg).contextualize(input))
        }
    }
}

/// Evaluates an expression string down to its numeric value.
pub fn evaluate_value(input: &str) -> CalcResult<f64> {
    parse(input)?.eval()
}

/// Evaluates an expression string and renders the result for display.
pub fn evaluate(input: &str) -> CalcResult<String> {
    Ok(render_numeric(evaluate_value(input)?))
}
