//! This module handles the `[Metadata]` section:
//!
//! - `Title`, `TitleUnicode`, `Artist`, `ArtistUnicode`, `Creator`, `Version`, `Source` - Texts.
//! - `Tags: a b c` - Whitespace separated search terms.
//! - `BeatmapID: n`, `BeatmapSetID: n` - Online identifiers.

use super::{
    SectionParser,
    key_value::{Schema, parse_key_values},
};
use crate::osu::{
    error::{Result, ValueKind},
    lex::Line,
    model::metadata::Metadata,
    prompt::{ParseConfig, Prompter},
};

const SCHEMA: &Schema = &[
    ("Title", ValueKind::String),
    ("TitleUnicode", ValueKind::String),
    ("Artist", ValueKind::String),
    ("ArtistUnicode", ValueKind::String),
    ("Creator", ValueKind::String),
    ("Version", ValueKind::String),
    ("Source", ValueKind::String),
    ("Tags", ValueKind::String),
    ("BeatmapID", ValueKind::Integer),
    ("BeatmapSetID", ValueKind::Integer),
];

/// It processes the `[Metadata]` section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MetadataParser;

impl SectionParser for MetadataParser {
    type Output = Metadata;

    fn parse<P: Prompter>(&self, lines: &[Line<'_>], config: &ParseConfig<P>) -> Result<Metadata> {
        let kv = parse_key_values(lines, SCHEMA, config.booleans)?;
        Ok(Metadata {
            title: kv.string("Title"),
            title_unicode: kv.string("TitleUnicode"),
            artist: kv.string("Artist"),
            artist_unicode: kv.string("ArtistUnicode"),
            creator: kv.string("Creator"),
            version: kv.string("Version"),
            source: kv.string("Source"),
            tags: kv
                .string("Tags")
                .map(|tags| tags.split_whitespace().map(str::to_string).collect()),
            beatmap_id: kv.integer("BeatmapID"),
            beatmap_set_id: kv.integer("BeatmapSetID"),
        })
    }
}
