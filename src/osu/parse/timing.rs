//! This module handles the `[TimingPoints]` section, whose lines are:
//!
//! `time,beatLength,meter,sampleSet,sampleIndex,volume,uninherited,effects`
//!
//! A negative `beatLength` marks an inherited point, whose value is a slider velocity multiplier `-100 / beatLength` applied to the last uninherited beat length. Files of old format versions may omit the fields after `beatLength`.

use super::{SectionParser, parse_decimal, parse_integer};
use crate::osu::{
    error::{ParseErrorKind, Result, ValueKind},
    lex::{Line, entries},
    mixin::LineMixinExt,
    model::timing::{KIAI_EFFECT, TimingPoint, bpm_from_ms_per_beat},
    prompt::{ParseConfig, Prompter},
};

/// Beats per measure when the `meter` field is omitted.
pub const DEFAULT_METER: i32 = 4;

const MAX_FIELDS: usize = 8;

/// It processes the `[TimingPoints]` section, resolving inherited points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimingPointsParser;

impl SectionParser for TimingPointsParser {
    type Output = Vec<TimingPoint>;

    fn parse<P: Prompter>(
        &self,
        lines: &[Line<'_>],
        _: &ParseConfig<P>,
    ) -> Result<Vec<TimingPoint>> {
        let mut last_uninherited = 0.0;
        let mut points = vec![];
        for line in entries(lines) {
            let point = parse_timing_point(line.text, &mut last_uninherited)
                .map_err(|e| e.at_line(line))?;
            points.push(point);
        }
        Ok(points)
    }
}

fn optional_field<T: std::str::FromStr>(
    fields: &[&str],
    idx: usize,
) -> core::result::Result<Option<T>, ParseErrorKind> {
    fields
        .get(idx)
        .filter(|field| !field.is_empty())
        .map(|field| parse_integer(field))
        .transpose()
}

fn parse_timing_point(
    text: &str,
    last_uninherited: &mut f64,
) -> core::result::Result<TimingPoint, ParseErrorKind> {
    let fields: Vec<_> = text.split(',').map(str::trim).collect();
    let [offset, beat_length, ..] = fields.as_slice() else {
        return Err(ParseErrorKind::MalformedLine(format!(
            "expected at least `time,beatLength` for a timing point, but found `{text}`"
        )));
    };
    if MAX_FIELDS < fields.len() {
        return Err(ParseErrorKind::MalformedLine(format!(
            "expected at most {MAX_FIELDS} fields for a timing point, but found {}",
            fields.len()
        )));
    }
    let time = parse_decimal(offset)?;
    let raw = parse_decimal(beat_length)?;
    let inherited = raw < 0.0;
    let ms_per_beat = if inherited {
        if *last_uninherited <= 0.0 {
            return Err(ParseErrorKind::OrphanInheritedTimingPoint);
        }
        *last_uninherited * (-100.0 / raw)
    } else if 0.0 < raw {
        *last_uninherited = raw;
        raw
    } else {
        return Err(ParseErrorKind::NonPositiveBeatLength(
            (*beat_length).to_string(),
        ));
    };
    let bpm = bpm_from_ms_per_beat(ms_per_beat);
    if !ms_per_beat.is_finite() || !bpm.is_finite() {
        return Err(ParseErrorKind::InvalidNumber {
            value: (*beat_length).to_string(),
            expected: ValueKind::Decimal,
        });
    }
    let effects: u8 = optional_field(&fields, 7)?.unwrap_or(0);
    Ok(TimingPoint {
        time,
        ms_per_beat,
        bpm,
        meter: optional_field(&fields, 2)?.unwrap_or(DEFAULT_METER),
        inherited,
        volume: optional_field(&fields, 5)?,
        kiai: effects & KIAI_EFFECT != 0,
    })
}
