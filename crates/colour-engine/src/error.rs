//! Error type for strict parsing.
//!
//! The engine's conversion functions are total and never fail; this type is
//! only produced by the `FromStr` implementations, for callers that need to
//! tell a malformed value apart from a legitimate black.

use thiserror::Error;

/// Error returned when a string cannot be parsed into one of the engine's
/// value types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Hex string has invalid length (must be 3 or 6 digits after stripping '#')
    #[error("invalid hex colour length (expected 3 or 6 digits)")]
    InvalidLength,

    /// A non-hexadecimal character was found
    #[error("invalid hex character in {0:?}")]
    InvalidHex(String),

    /// Unknown colour-vision-deficiency name
    #[error("unknown colour vision deficiency type: {0}")]
    UnknownCvdType(String),

    /// Unknown harmony name
    #[error("unknown harmony type: {0}")]
    UnknownHarmony(String),

    /// Unknown scale generation method
    #[error("unknown scale method: {0}")]
    UnknownScaleMethod(String),

    /// Unknown colour role
    #[error("unknown colour role: {0}")]
    UnknownRole(String),

    /// Category names must contain at least one non-whitespace character
    #[error("category name cannot be empty")]
    EmptyCategory,

    /// Warning key is not of the form `{kind}:{id1}:{id2}:{cvd}`
    #[error("malformed warning key: {0}")]
    InvalidWarningKey(String),
}
