//! Errors raised on parsing the osu! beatmap format.

use thiserror::Error;

use super::mixin::LineMixin;

/// The shape of a value expected in a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ValueKind {
    /// Free text.
    String,
    /// A signed integer.
    Integer,
    /// A finite decimal number.
    Decimal,
    /// A flag.
    Boolean,
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Decimal => "decimal",
            Self::Boolean => "boolean",
        })
    }
}

/// An error occurred when parsing a line of a section.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ParseErrorKind {
    /// A key-value line lacks a colon, or a comma-delimited line has an unexpected field count.
    #[error("malformed line: {0}")]
    MalformedLine(String),
    /// A numeric field failed to parse.
    #[error("invalid number `{value}`, expected {expected}")]
    InvalidNumber {
        /// The text found.
        value: String,
        /// What the expected is.
        expected: ValueKind,
    },
    /// A hit object could not be decoded.
    #[error("malformed hit object: {0}")]
    MalformedHitObject(String),
    /// An inherited timing point has no uninherited one before it to scale.
    #[error("inherited timing point appears before any uninherited one")]
    OrphanInheritedTimingPoint,
    /// An uninherited timing point has zero beat length, so BPM is undefined.
    #[error("beat length must be positive, but got `{0}`")]
    NonPositiveBeatLength(String),
}

/// A [`ParseErrorKind`] with the section and line it came from.
pub type LineError = LineMixin<ParseErrorKind>;

/// Type alias of `core::result::Result<T, LineError>`, used by the section parsers.
pub type Result<T> = core::result::Result<T, LineError>;

/// An error occurred when parsing a beatmap.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ParseError {
    /// Reading the beatmap file failed.
    #[error("failed to read beatmap: {0}")]
    Io(#[from] std::io::Error),
    /// A section contained an invalid line.
    #[error("parse: {0}")]
    Syntax(#[from] LineError),
}

impl ParseError {
    /// Returns the positioned syntax error, if it is.
    #[must_use]
    pub const fn as_syntax(&self) -> Option<&LineError> {
        match self {
            Self::Syntax(err) => Some(err),
            Self::Io(_) => None,
        }
    }
}
