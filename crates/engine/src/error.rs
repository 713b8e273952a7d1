use std::fmt::Display;
use std::ops::Range;

pub type CalcResult<T> = Result<T, CalcError>;

/// An error from one of the calculator's stages, with a character span
/// pointing back into the source text.
#[derive(Debug, Clone, PartialEq)]
pub struct CalcError {
    pub kind: CalcErrorKind,
    pub span: Range<usize>,
    pub msg: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcErrorKind {
    Parse,
    Eval,
}

impl CalcError {
    pub fn parser(span: Range<usize>, msg: String) -> Self {
        Self {
            kind: CalcErrorKind::Parse,
            span,
            msg,
        }
    }

    pub fn evaluator(span: Range<usize>, msg: String) -> Self {
        Self {
            kind: CalcErrorKind::Eval,
            span,
            msg,
        }
    }

    /// Wraps the message with the source text that produced it.
    #[must_use]
    pub fn contextualize(self, source: &str) -> Self {
        Self {
            msg: format!("failed to parse '{source}': {}", self.msg),
            ..self
        }
    }
}

impl Display for CalcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.msg)
    }
}

impl std::error::Error for CalcError {}
