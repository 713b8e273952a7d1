use chumsky::{pratt::*, prelude::*};

use super::{CalcExtra, atoms};
use crate::ast::{Expr, Op};
use crate::lexer::Token;

/// Infix arithmetic with the conventional precedence levels: `* / %` bind
/// tighter than `+ -`, all left associative, parentheses grouping freely.
pub fn arithmetic<'src>() -> impl Parser<'src, &'src [Token], Expr, CalcExtra<'src>> + Clone {
    recursive(|arith| {
        let term = atoms::number().or(arith
            .delimited_by(just(Token::LParens), just(Token::RParens))
            .map(|inner| Expr::Grouped(Box::new(inner))));
        term.pratt((
            // Multiplication, Division, and Modulus
            infix(left(2), atoms::op(Token::Asterisk), fold_infix),
            infix(left(2), atoms::op(Token::Slash), fold_infix),
            infix(left(2), atoms::op(Token::Modulo), fold_infix),
            // Addition and Subtraction
            infix(left(1), atoms::op(Token::Plus), fold_infix),
            infix(left(1), atoms::op(Token::Minus), fold_infix),
        ))
    })
    .boxed()
    .labelled("Arithmetic Expression")
    .as_context()
}

fn fold_infix<'src>(
    lhs: Expr,
    op: Op,
    rhs: Expr,
    _extra: &mut chumsky::input::MapExtra<'src, '_, &'src [Token], CalcExtra<'src>>,
) -> Expr {
    Expr::Binary(op, Box::new(lhs), Box::new(rhs))
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::lexer::quick_tokens;

    fn parse_arithmetic(source: &str) -> String {
        let tokens = quick_tokens(source);
        match arithmetic().parse(&tokens[..]).into_result() {
            Ok(expr) => format!("{expr}"),
            Err(errs) => format!("{errs:?}"),
        }
    }

    #[test]
    fn parse_literals() {
        assert_eq!("1", parse_arithmetic("1"));
        assert_eq!("7.9", parse_arithmetic("7.9"));
        assert_eq!("0.5", parse_arithmetic(".5"));
    }

    #[test]
    fn parse_precedence() {
        assert_eq!("(2 + (3 * 4))", parse_arithmetic("2 + 3 * 4"));
        assert_eq!("((2 * 3) + 4)", parse_arithmetic("2 * 3 + 4"));
        assert_eq!("((10 - (4 / 2)) + (6 % 4))", parse_arithmetic("10 - 4 / 2 + 6 % 4"));
    }

    #[test]
    fn parse_left_associativity() {
        assert_eq!("((1 - 2) - 3)", parse_arithmetic("1 - 2 - 3"));
        assert_eq!("((24 / 4) / 2)", parse_arithmetic("24 / 4 / 2"));
        assert_eq!("((7 % 4) % 2)", parse_arithmetic("7 % 4 % 2"));
    }

    #[test]
    fn parse_parentheses() {
        assert_eq!("((2 + 3) * 4)", parse_arithmetic("(2 + 3) * 4"));
        assert_eq!("(2 * ((1 + (2 * 3)) + 4))", parse_arithmetic("2 * (1 + 2 * 3 + 4)"));
        assert_eq!("1", parse_arithmetic("((1))"));
    }

    #[test]
    fn parse_grouped_nodes_survive() {
        let tokens = quick_tokens("(1)");
        let output = arithmetic().parse(&tokens[..]).into_result();
        assert_eq!(Ok(Expr::Grouped(Box::new(Expr::Literal(1.0)))), output);
    }

    #[test]
    fn parse_missing_operand() {
        let output = parse_arithmetic("1 +");
        assert!(output.contains("found end of input"), "{output}");
    }

    #[test]
    fn parse_unbalanced_parens() {
        let output = parse_arithmetic("(1 + 2");
        assert!(output.contains("found end of input"), "{output}");

        let output = parse_arithmetic("()");
        assert!(output.contains("found 'RParens'"), "{output}");
    }

    #[test]
    fn parse_no_unary_minus() {
        let output = parse_arithmetic("-3");
        assert!(output.contains("found 'Minus'"), "{output}");
    }
}
