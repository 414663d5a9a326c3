//! Line normalizer of osu! beatmap format.
//!
//! Raw [String] == [normalize] ==> [`Line`]s == [`section::Section::lines_in`] ==> per-section slices == [`crate::osu::parse`] ==> [`crate::osu::model::Beatmap`]

pub mod section;

use std::ops::Range;

/// The marker starting a line comment.
pub const COMMENT_PREFIX: &str = "//";

/// A trimmed line of the source, remembering where it came from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Line<'a> {
    /// The line number, starts with 1.
    pub number: usize,
    /// Byte range of the trimmed text in the source.
    pub range: Range<usize>,
    /// The trimmed text.
    pub text: &'a str,
}

impl<'a> Line<'a> {
    /// Whether the line has no content. Blank lines terminate sections.
    #[must_use]
    pub const fn is_blank(&self) -> bool {
        self.text.is_empty()
    }

    /// Whether the line is a `//` comment.
    #[must_use]
    pub fn is_comment(&self) -> bool {
        self.text.starts_with(COMMENT_PREFIX)
    }

    /// Whether the line is a `[Name]` section header.
    #[must_use]
    pub fn is_section_header(&self) -> bool {
        self.text.len() >= 2 && self.text.starts_with('[') && self.text.ends_with(']')
    }
}

/// Splits the source into trimmed lines, keeping order and blank lines.
///
/// Comment lines are kept too, so that parsers relying on comment markers (such as `//Break Periods` in `[Events]`) can see them. Use [`entries`] to iterate the lines which carry data.
#[must_use]
pub fn normalize(source: &str) -> Vec<Line<'_>> {
    let body = source.strip_prefix('\u{feff}').unwrap_or(source);
    let mut offset = source.len() - body.len();
    let mut lines = vec![];
    for (idx, raw) in body.split('\n').enumerate() {
        let leading = raw.len() - raw.trim_start().len();
        let text = raw.trim();
        let start = offset + leading;
        lines.push(Line {
            number: idx + 1,
            range: start..start + text.len(),
            text,
        });
        offset += raw.len() + 1;
    }
    lines
}

/// Iterates the lines which are neither blank nor comments.
pub fn entries<'s, 'a>(lines: &'s [Line<'a>]) -> impl Iterator<Item = &'s Line<'a>> {
    lines
        .iter()
        .filter(|line| !line.is_blank() && !line.is_comment())
}
