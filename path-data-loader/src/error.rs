//--------------------------------------------------------------------
// error.rs
//--------------------------------------------------------------------
// The single error kind of the path data loader
//--------------------------------------------------------------------

use std::fmt;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MalformedReason {
    UnexpectedCharacter,
    WrongArgumentCount,
    MissingInitialMoveTo,
    UnterminatedNumber,
    // Only one subpath per path: no second moveto, nothing after a close
    MultipleSubpaths
}

impl fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            MalformedReason::UnexpectedCharacter => "unexpected character",
            MalformedReason::WrongArgumentCount => "wrong argument count",
            MalformedReason::MissingInitialMoveTo => "missing initial moveto",
            MalformedReason::UnterminatedNumber => "unterminated number",
            MalformedReason::MultipleSubpaths => "multiple subpaths"
        };
        f.write_str(text)
    }
}

/// Parsing is all or nothing: this is all that comes out of a failed parse.
/// `offset` is a byte offset into the path data, `token` the index of the
/// token being scanned or built when the failure happened.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("malformed path: {reason} at offset {offset} (token {token})")]
pub struct MalformedPath {
    pub reason: MalformedReason,
    pub offset: usize,
    pub token: usize
}

impl MalformedPath {
    pub fn new(reason: MalformedReason, offset: usize, token: usize) -> MalformedPath {
        MalformedPath { reason, offset, token }
    }
}
