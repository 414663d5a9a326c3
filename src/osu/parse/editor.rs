//! This module handles the `[Editor]` section:
//!
//! - `Bookmarks: a,b,c` - Comma separated time offsets of bookmarks.
//! - `DistanceSpacing: x`, `BeatDivisor: n`, `GridSize: n`, `TimelineZoom: x` - Editor settings.

use super::{
    SectionParser,
    key_value::{Schema, parse_key_values, split_key_value},
    parse_integer,
};
use crate::osu::{
    error::{ParseErrorKind, Result, ValueKind},
    lex::{Line, entries},
    mixin::{LineMixin, LineMixinExt},
    model::editor::Editor,
    prompt::{ParseConfig, Prompter},
};

const SCHEMA: &Schema = &[
    ("Bookmarks", ValueKind::String),
    ("DistanceSpacing", ValueKind::Decimal),
    ("BeatDivisor", ValueKind::Integer),
    ("GridSize", ValueKind::Integer),
    ("TimelineZoom", ValueKind::Decimal),
];

fn parse_bookmarks(list: &str) -> core::result::Result<Vec<i32>, ParseErrorKind> {
    list.split(',')
        .map(str::trim)
        .filter(|offset| !offset.is_empty())
        .map(parse_integer)
        .collect()
}

/// It processes the `[Editor]` section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EditorParser;

impl SectionParser for EditorParser {
    type Output = Editor;

    fn parse<P: Prompter>(&self, lines: &[Line<'_>], config: &ParseConfig<P>) -> Result<Editor> {
        let kv = parse_key_values(lines, SCHEMA, config.booleans)?;
        let bookmarks = match kv.string("Bookmarks") {
            Some(list) => Some(parse_bookmarks(&list).map_err(|err| {
                // the last `Bookmarks` line is the one kept
                let line = entries(lines)
                    .filter(|line| matches!(split_key_value(line), Ok(("Bookmarks", _))))
                    .last();
                match line {
                    Some(line) => err.at_line(line),
                    None => LineMixin::new(err, 0, 0..0),
                }
            })?),
            None => None,
        };
        Ok(Editor {
            bookmarks,
            distance_spacing: kv.decimal("DistanceSpacing"),
            beat_divisor: kv.integer("BeatDivisor"),
            grid_size: kv.integer("GridSize"),
            timeline_zoom: kv.decimal("TimelineZoom"),
        })
    }
}
