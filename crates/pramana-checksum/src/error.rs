//! Unified error model for check digit generation
use thiserror::Error;

/// Why a generator refused its input.
///
/// Validators never surface this; they return `false` instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChecksumError {
    #[error("CHECKSUM/EMPTY: input has no characters")]
    Empty,

    #[error("CHECKSUM/LENGTH: expected {expected} characters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("CHECKSUM/CHAR: {character:?} at position {position} is not allowed")]
    InvalidCharacter { character: char, position: usize },
}
