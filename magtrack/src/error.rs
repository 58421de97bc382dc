// magtrack-rs/magtrack/src/error.rs

use thiserror::Error;

/// Errors reported by the strict parsing entry points.
///
/// The lenient `TrackOne::parse` path never produces these; a swipe that does
/// not match is represented by an empty `TrackOne` instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// No track 1 format B record in the input.
    #[error("input does not match track 1 format B")]
    NoMatch,

    /// A field value has the wrong number of characters.
    #[error("invalid {field} length: expected {expected}, got {actual}")]
    InvalidLength {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A numeric field contains a non-digit.
    #[error("invalid character in {field}: {found:?}")]
    InvalidCharacter { field: &'static str, found: char },

    /// Expiration month outside 1 to 12.
    #[error("invalid expiration month: {0}")]
    InvalidMonth(u8),

    /// A required field is empty or blank.
    #[error("{0} is empty")]
    Empty(&'static str),
}

/// Result alias using the crate [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
