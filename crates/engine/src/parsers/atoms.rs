use chumsky::prelude::*;

use super::CalcExtra;
use crate::ast::{Expr, Op};
use crate::lexer::Token;

impl From<Token> for Op {
    fn from(value: Token) -> Self {
        match value {
            Token::Plus => Op::Add,
            Token::Minus => Op::Sub,
            Token::Asterisk => Op::Mul,
            Token::Slash => Op::Div,
            Token::Modulo => Op::Mod,
            _ => unreachable!(),
        }
    }
}

pub fn op<'src>(token: Token) -> impl Parser<'src, &'src [Token], Op, CalcExtra<'src>> + Clone {
    just(token).map(Op::from).labelled("Arithmetic Operator")
}

pub fn number<'src>() -> impl Parser<'src, &'src [Token], Expr, CalcExtra<'src>> + Clone {
    let number = select! { Token::Number(value) => Expr::Literal(value) };
    number.labelled("Number")
}
