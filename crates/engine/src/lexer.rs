use std::cmp::min;
use std::fmt::Display;
use std::ops::Range;

use logos::{Lexer, Logos, Span};

use crate::error::{CalcError, CalcResult};

fn number(lex: &mut Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// All the tokens the calculator grammar recognizes
#[rustfmt::skip]
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"[ \t\r\n]+")]
pub enum Token {
    #[regex(r"\d+\.?\d*", number)]
    #[regex(r"\.\d+", number)]
    Number(f64),

    // Operators
    #[token("+")]   Plus,
    #[token("-")]   Minus,
    #[token("*")]   Asterisk,
    #[token("/")]   Slash,
    #[token("%")]   Modulo,

    // Brackets
    #[token("(")]   LParens,
    #[token(")")]   RParens,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

pub type Lexicon = Vec<(Token, Span)>;

/// Lexes the source string into a vector of tokens, ignoring any lexical errors.
pub fn quick_tokens(source: &str) -> Vec<Token> {
    Token::lexer(source).flatten().collect()
}

/// Lexes the source string into a vector of tokens paired with their
/// source spans. Stops at the first piece of text no token matches.
pub fn tokenize(source: &str) -> CalcResult<Lexicon> {
    let mut lex = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(token) = lex.next() {
        let span = lex.span();
        match token {
            Ok(token) => tokens.push((token, span)),
            Err(()) => {
                return Err(CalcError::parser(
                    span.clone(),
                    format!("unknown token '{}'", &source[span]),
                ));
            }
        }
    }

    Ok(tokens)
}

/// Maps a token-index span reported by the parser back to the character
/// span it covers in the source string.
pub fn source_span(lexicon: &Lexicon, span: &Range<usize>) -> Range<usize> {
    if lexicon.is_empty() {
        0..0
    } else {
        let start = min(span.start, lexicon.len().saturating_sub(1));
        let end = min(
            span.end.saturating_sub(1),
            lexicon.len().saturating_sub(1),
        );
        lexicon[start].1.start..lexicon[end].1.end
    }
}
