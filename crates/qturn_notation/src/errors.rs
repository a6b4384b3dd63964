//! Notation errors.

use thiserror::Error;

/// Error produced when parsing a canonical move token.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseMoveError {
    /// No face letter where one was expected (including the empty string).
    #[error("missing face letter")]
    MissingFace,
    /// Unrecognized face letter.
    #[error("unrecognized face letter {0:?}")]
    BadFace(char),
    /// Layer number does not fit in a layer index.
    #[error("layer number out of range")]
    BadLayerNumber,
    /// A `-` in a numbered prefix without a number on both sides.
    #[error("malformed layer range")]
    MalformedRange,
    /// Input continues past the end of the move token.
    #[error("unexpected {0:?}")]
    UnexpectedChar(char),
}

/// Error produced when interpreting user input for a specific puzzle size.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    /// The move is not expressible on this puzzle size.
    #[error("move {0:?} is not available on this puzzle")]
    UnsupportedMove(String),
    /// The translated token failed to parse.
    #[error(transparent)]
    Parse(#[from] ParseMoveError),
}
