//! The line-oriented session protocol shared by both invocation modes.

use crate::error::CalcResult;

const EXIT_WORDS: [&str; 2] = ["exit", "quit"];

/// What the driver should do with one line of input.
#[derive(Debug, PartialEq)]
pub enum Reply {
    /// Blank line: print nothing, read the next line.
    Skip,
    /// The line began with an exit word: end the session.
    Quit,
    /// The rendered result, or a single-line error report.
    Output(String),
}

/// Applies the per-line contract to one line of raw input: trim it, skip it
/// if empty, quit on an exit word, otherwise evaluate and render.
pub fn respond(line: &str) -> Reply {
    let line = line.trim();
    if line.is_empty() {
        return Reply::Skip;
    }
    if EXIT_WORDS.iter().any(|word| line.starts_with(word)) {
        return Reply::Quit;
    }
    match crate::evaluate(line) {
        Ok(value) => Reply::Output(value),
        Err(err) => Reply::Output(format!("ERROR: {err}")),
    }
}

/// Joins batch argument tokens into one expression and evaluates it.
pub fn batch(tokens: &[String]) -> CalcResult<String> {
    crate::evaluate(&tokens.join(" "))
}
