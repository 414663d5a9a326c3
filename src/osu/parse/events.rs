//! This module handles the `[Events]` section:
//!
//! - `0,0,"filename",xOffset,yOffset` - Background image.
//! - `2,start,end` - Break period, listed between the `//Break Periods` and `//Storyboard Layer 0 (Background)` comment markers.
//!
//! Storyboard commands are not decoded.

use itertools::Itertools;

use super::{SectionParser, parse_integer};
use crate::osu::{
    error::{ParseErrorKind, Result},
    lex::{Line, entries},
    mixin::LineMixinExt,
    model::events::{Background, BreakPeriod, Events},
    prompt::{ParseConfig, Prompter},
};

/// The comment line starting the list of break periods.
pub const BREAK_PERIODS_MARKER: &str = "//Break Periods";
/// The comment line ending the list of break periods.
pub const BACKGROUND_LAYER_MARKER: &str = "//Storyboard Layer 0 (Background)";

/// It processes the `[Events]` section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EventsParser;

impl SectionParser for EventsParser {
    type Output = Events;

    fn parse<P: Prompter>(&self, lines: &[Line<'_>], _: &ParseConfig<P>) -> Result<Events> {
        Ok(Events {
            breaks: parse_breaks(lines)?,
            background: parse_background(lines)?,
        })
    }
}

/// Lines strictly between the break markers, or empty if either is missing.
fn break_lines<'s, 'a>(lines: &'s [Line<'a>]) -> &'s [Line<'a>] {
    let Some(start) = lines
        .iter()
        .position(|line| line.text == BREAK_PERIODS_MARKER)
    else {
        return &[];
    };
    let body = lines.get(start + 1..).unwrap_or_default();
    match body
        .iter()
        .position(|line| line.text == BACKGROUND_LAYER_MARKER)
    {
        Some(end) => body.split_at(end).0,
        None => &[],
    }
}

fn parse_breaks(lines: &[Line<'_>]) -> Result<Vec<BreakPeriod>> {
    entries(break_lines(lines))
        .map(|line| {
            let (_, start, end) = line
                .text
                .split(',')
                .map(str::trim)
                .collect_tuple()
                .ok_or_else(|| {
                    ParseErrorKind::MalformedLine(format!(
                        "expected `type,start,end` for a break period, but found `{}`",
                        line.text
                    ))
                    .at_line(line)
                })?;
            Ok(BreakPeriod {
                start: parse_integer(start).map_err(|e| e.at_line(line))?,
                end: parse_integer(end).map_err(|e| e.at_line(line))?,
            })
        })
        .collect()
}

fn parse_background(lines: &[Line<'_>]) -> Result<Option<Background>> {
    let Some(line) = entries(lines).find(|line| line.text.split(',').next() == Some("0")) else {
        return Ok(None);
    };
    let mut fields = line.text.split(',').map(str::trim).skip(2);
    let filename = fields.next().filter(|name| !name.is_empty()).ok_or_else(|| {
        ParseErrorKind::MalformedLine(format!(
            "expected a filename for the background, but found `{}`",
            line.text
        ))
        .at_line(line)
    })?;
    let mut offset = || -> Result<i32> {
        match fields.next().filter(|offset| !offset.is_empty()) {
            Some(offset) => parse_integer(offset).map_err(|e| e.at_line(line)),
            None => Ok(0),
        }
    };
    Ok(Some(Background {
        filename: filename.trim_matches('"').to_string(),
        x_offset: offset()?,
        y_offset: offset()?,
    }))
}
