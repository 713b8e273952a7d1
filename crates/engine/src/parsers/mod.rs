use chumsky::prelude::*;

use crate::ast::Expr;
use crate::lexer::Token;

mod atoms;
mod expressions;

pub(crate) type CalcExtra<'src> = extra::Err<Rich<'src, Token>>;

/// Parses a complete expression: one arithmetic expression spanning the
/// whole token stream.
pub fn parser<'src>() -> impl Parser<'src, &'src [Token], Expr, CalcExtra<'src>> + Clone {
    expressions::arithmetic().then_ignore(end())
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::lexer::quick_tokens;

    fn parse_line(source: &str) -> String {
        let tokens = quick_tokens(source);
        match parser().parse(&tokens).into_result() {
            Ok(expr) => format!("{expr}"),
            Err(errs) => format!("{errs:?}"),
        }
    }

    #[test]
    fn parse_full_expression() {
        assert_eq!("((1 + 2) - 3)", parse_line("1 + 2 - 3"));
        assert_eq!("((2 + 3) * 4)", parse_line("(2 + 3) * 4"));
    }

    #[test]
    fn parse_rejects_trailing_tokens() {
        // No implicit multiplication
        let output = parse_line("(1 + 2)(3)");
        assert!(output.contains("found 'LParens'"), "{output}");

        let output = parse_line("2 3");
        assert!(output.contains("found 'Number(3.0)'"), "{output}");
    }

    #[test]
    fn parse_rejects_empty_input() {
        let output = parse_line("");
        assert!(output.contains("found end of input"), "{output}");
    }
}
