use crate::Move;
use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParseError;

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Parse error")
    }
}

impl Error for ParseError {}

/// Recoverable move failures. None of them end the session.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// Malformed arguments to `Move::encode`.
    #[error("invalid move encoding")]
    InvalidMove,
    /// Well-formed, but not in the position's legal set.
    #[error("illegal move {0}")]
    IllegalMove(Move),
    #[error("unrecognized promotion piece {0:?}, expected one of q, r, b, n")]
    AmbiguousPromotionInput(String),
}
