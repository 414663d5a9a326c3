//! Parsing the sections of a beatmap from its [`Line`]s.
//!
//! Each section has a parser implementing [`SectionParser`]. They are pure functions of the lines given, and fail fast on the first invalid line.

pub mod colours;
pub mod difficulty;
pub mod editor;
pub mod events;
pub mod general;
pub mod hit_object;
pub mod key_value;
pub mod metadata;
pub mod timing;

use std::str::FromStr;

use super::{
    error::{ParseErrorKind, Result, ValueKind},
    lex::Line,
    prompt::{ParseConfig, Prompter},
};

/// A parser of one section into its output.
pub trait SectionParser {
    /// The parsed result of the section.
    type Output;

    /// Parses the lines of the section, excluding its header.
    ///
    /// # Errors
    ///
    /// Returns the error of the first line failed to parse, located at that line.
    fn parse<P: Prompter>(
        &self,
        lines: &[Line<'_>],
        config: &ParseConfig<P>,
    ) -> Result<Self::Output>;
}

/// Parses an integer field.
pub(crate) fn parse_integer<T: FromStr>(text: &str) -> core::result::Result<T, ParseErrorKind> {
    text.parse().map_err(|_| ParseErrorKind::InvalidNumber {
        value: text.to_string(),
        expected: ValueKind::Integer,
    })
}

/// Parses a finite decimal field.
pub(crate) fn parse_decimal(text: &str) -> core::result::Result<f64, ParseErrorKind> {
    text.parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| ParseErrorKind::InvalidNumber {
            value: text.to_string(),
            expected: ValueKind::Decimal,
        })
}
