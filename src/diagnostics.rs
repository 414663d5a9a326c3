//! Fancy diagnostics support using `ariadne`.
//!
//! This module provides convenient methods to convert errors carrying a [`LineMixin`](crate::osu::mixin::LineMixin) (such as [`LineError`] and the aggregated [`ParseError`]) to `ariadne::Report`.
//!
//! Since the mixin contains the byte range of the offending line, this module lets ariadne automatically handle row/column calculations for display purposes.
//!
//! # Usage Example
//!
//! ```rust
//! use osu_rs::{diagnostics::emit_parse_error, osu::parse_osu};
//!
//! let source = "osu file format v14\n\n[Difficulty]\nCircleSize: big\n";
//! if let Err(err) = parse_osu(source) {
//!     emit_parse_error("test.osu", source, &err);
//! }
//! ```

use ariadne::{Color, Label, Report, ReportKind, Source};

use crate::osu::error::{LineError, ParseError};

/// Simple source container that holds the filename and source text.
/// Ariadne will automatically handle row/column calculations from byte offsets.
///
/// # Usage Example
///
/// ```rust
/// use osu_rs::diagnostics::SimpleSource;
///
/// let source_text = "osu file format v14\n";
/// let source = SimpleSource::new("test.osu", source_text);
///
/// assert_eq!(source.text(), source_text);
/// ```
pub struct SimpleSource<'a> {
    /// Name of the source file.
    name: &'a str,
    /// Source text content.
    text: &'a str,
}

impl<'a> SimpleSource<'a> {
    /// Create a new source container instance.
    #[must_use]
    pub const fn new(name: &'a str, text: &'a str) -> Self {
        Self { name, text }
    }

    /// Get source text content.
    #[must_use]
    pub const fn text(&self) -> &'a str {
        self.text
    }

    /// Get source file name.
    #[must_use]
    pub const fn name(&self) -> &'a str {
        self.name
    }
}

/// Trait for converting positioned errors to `ariadne::Report`.
pub trait ToAriadne {
    /// Convert error to ariadne Report.
    ///
    /// # Parameters
    /// * `src` - Source file container (used for filename, ariadne handles row/column calculation)
    fn to_report<'a>(&self, src: &SimpleSource<'a>)
    -> Report<'a, (String, std::ops::Range<usize>)>;
}

impl ToAriadne for LineError {
    fn to_report<'a>(
        &self,
        src: &SimpleSource<'a>,
    ) -> Report<'a, (String, std::ops::Range<usize>)> {
        let filename = src.name().to_string();
        let range = self.range();
        let title = match self.section() {
            Some(section) => format!("parse: invalid line in {section}"),
            None => "parse: invalid line".to_string(),
        };
        Report::build(ReportKind::Error, (filename.clone(), range.clone()))
            .with_message(title)
            .with_label(
                Label::new((filename, range))
                    .with_message(self.content().to_string())
                    .with_color(Color::Red),
            )
            .finish()
    }
}

/// Collect the `ariadne::Report` for a [`ParseError`] without printing.
///
/// Returns `None` for I/O errors, which have no position in the source.
#[must_use]
pub fn collect_parse_report<'a>(
    name: &'a str,
    source: &'a str,
    error: &ParseError,
) -> Option<Report<'a, (String, std::ops::Range<usize>)>> {
    let simple = SimpleSource::new(name, source);
    error.as_syntax().map(|err| err.to_report(&simple))
}

/// Convenience method: render a [`ParseError`] to stderr.
///
/// # Parameters
/// * `name` - Name of the source file, used for display in diagnostic information
/// * `source` - Complete beatmap source text
/// * `error` - The error to display
pub fn emit_parse_error(name: &str, source: &str, error: &ParseError) {
    match collect_parse_report(name, source, error) {
        Some(report) => {
            let _ = report.eprint((name.to_string(), Source::from(source)));
        }
        None => eprintln!("{name}: {error}"),
    }
}
