//! Section splitter.

use super::Line;

/// A section of the osu! beatmap format, introduced by a `[Name]` header line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Section {
    /// `[General]`
    General,
    /// `[Editor]`
    Editor,
    /// `[Metadata]`
    Metadata,
    /// `[Difficulty]`
    Difficulty,
    /// `[Events]`
    Events,
    /// `[TimingPoints]`
    TimingPoints,
    /// `[Colours]`
    Colours,
    /// `[HitObjects]`
    HitObjects,
}

impl Section {
    /// All the sections, in the order they appear in a usual file.
    pub const ALL: [Self; 8] = [
        Self::General,
        Self::Editor,
        Self::Metadata,
        Self::Difficulty,
        Self::Events,
        Self::TimingPoints,
        Self::Colours,
        Self::HitObjects,
    ];

    /// The header line introducing the section, such as `[General]`.
    #[must_use]
    pub const fn marker(self) -> &'static str {
        match self {
            Self::General => "[General]",
            Self::Editor => "[Editor]",
            Self::Metadata => "[Metadata]",
            Self::Difficulty => "[Difficulty]",
            Self::Events => "[Events]",
            Self::TimingPoints => "[TimingPoints]",
            Self::Colours => "[Colours]",
            Self::HitObjects => "[HitObjects]",
        }
    }

    /// Returns the lines strictly between the section header and the next blank line.
    ///
    /// The range also stops at the next section header or at the end of input, so a file missing the blank line between sections is still accepted. If the header is absent, an empty slice is returned.
    #[must_use]
    pub fn lines_in<'s, 'a>(self, lines: &'s [Line<'a>]) -> &'s [Line<'a>] {
        let marker = self.marker();
        let Some(header) = lines.iter().position(|line| line.text == marker) else {
            return &[];
        };
        let body = lines.get(header + 1..).unwrap_or_default();
        let len = body
            .iter()
            .position(|line| line.is_blank() || line.is_section_header())
            .unwrap_or(body.len());
        body.split_at(len).0
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.marker())
    }
}
