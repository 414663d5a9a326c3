//! This module handles the `[HitObjects]` section, whose lines are:
//!
//! `x,y,time,type,hitSound,objectParams,hitSample`
//!
//! The first five fields are common. The rest are kept together as extras, because slider curves contain their own `|` and `:` separators:
//!
//! - Slider: `curveType|curvePoints,slides,length,edgeSounds,edgeSets,hitSample`, where a point is `x:y`.
//! - Spinner: `endTime,hitSample`.

use std::str::FromStr;

use itertools::Itertools;

use super::{SectionParser, parse_decimal};
use crate::osu::{
    error::{ParseErrorKind, Result},
    lex::{Line, entries},
    mixin::LineMixinExt,
    model::hit_object::{
        ControlPoint, CurveType, HitObject, HitObjectKind, ObjectTypeFlags, Slider, Spinner,
    },
    prompt::{MalformedWorkaround, ParseConfig, Prompter},
};

/// It processes the `[HitObjects]` section.
///
/// A line failed to decode is passed to [`Prompter::handle_malformed_hit_object`], which decides whether to skip it or to halt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HitObjectsParser;

impl SectionParser for HitObjectsParser {
    type Output = Vec<HitObject>;

    fn parse<P: Prompter>(
        &self,
        lines: &[Line<'_>],
        config: &ParseConfig<P>,
    ) -> Result<Vec<HitObject>> {
        let mut objects = vec![];
        for line in entries(lines) {
            match parse_hit_object(line.text) {
                Ok(object) => objects.push(object),
                Err(err) => {
                    let err = err.at_line(line);
                    match config.prompter.handle_malformed_hit_object(&err) {
                        MalformedWorkaround::Skip => {}
                        MalformedWorkaround::Halt => return Err(err),
                    }
                }
            }
        }
        Ok(objects)
    }
}

fn malformed(reason: impl Into<String>) -> ParseErrorKind {
    ParseErrorKind::MalformedHitObject(reason.into())
}

fn field<T: FromStr>(name: &str, text: &str) -> core::result::Result<T, ParseErrorKind> {
    text.trim()
        .parse()
        .map_err(|_| malformed(format!("invalid {name} `{text}`")))
}

/// Decodes a hit object line.
///
/// # Errors
///
/// Returns [`ParseErrorKind::MalformedHitObject`] if the line has less than five fields, a field is not numeric, or the slider curve is broken.
pub fn parse_hit_object(text: &str) -> core::result::Result<HitObject, ParseErrorKind> {
    let mut fields = text.splitn(6, ',');
    let (x, y, time, type_byte, hit_sounds) = fields
        .by_ref()
        .take(5)
        .collect_tuple()
        .ok_or_else(|| malformed(format!("expected at least 5 fields, but found `{text}`")))?;
    let extras = fields.next().unwrap_or("").trim();

    let x = field("x", x)?;
    let y = field("y", y)?;
    let flags = ObjectTypeFlags(field("type", type_byte)?);
    let kind = if flags.is_spinner() {
        HitObjectKind::Spinner(parse_spinner(extras)?)
    } else if flags.is_slider() {
        HitObjectKind::Slider(parse_slider(extras, x, y)?)
    } else {
        HitObjectKind::Circle
    };
    Ok(HitObject {
        x,
        y,
        time: field("time", time)?,
        new_combo: flags.is_new_combo(),
        combo_skip: flags.combo_skip(),
        hit_sounds: field("hitSound", hit_sounds)?,
        kind,
    })
}

fn parse_spinner(extras: &str) -> core::result::Result<Spinner, ParseErrorKind> {
    let end_time = extras
        .split(',')
        .next()
        .map(str::trim)
        .filter(|end| !end.is_empty())
        .map(|end| field("endTime", end))
        .transpose()?;
    Ok(Spinner {
        end_time,
        extras: extras.to_string(),
    })
}

fn parse_curve_type(code: &str) -> core::result::Result<CurveType, ParseErrorKind> {
    code.chars()
        .exactly_one()
        .ok()
        .and_then(CurveType::from_code)
        .ok_or_else(|| malformed(format!("unknown curve type `{code}`")))
}

fn parse_control_point(point: &str) -> core::result::Result<ControlPoint, ParseErrorKind> {
    let (x, y) = point
        .split_once(':')
        .ok_or_else(|| malformed(format!("expected `x:y` for a control point, but found `{point}`")))?;
    Ok(ControlPoint {
        x: field("control point x", x)?,
        y: field("control point y", y)?,
    })
}

fn parse_slider(extras: &str, x: i32, y: i32) -> core::result::Result<Slider, ParseErrorKind> {
    let (curve, slides, length) = extras
        .split(',')
        .map(str::trim)
        .next_tuple()
        .ok_or_else(|| {
            malformed(format!(
                "expected `curve,slides,length` for a slider, but found `{extras}`"
            ))
        })?;
    let mut curve = curve.split('|');
    let curve_type = parse_curve_type(curve.next().unwrap_or(""))?;
    let control_points = curve
        .map(parse_control_point)
        .collect::<core::result::Result<Vec<_>, _>>()?;
    let repeat_count = field::<i32>("slides", slides)?
        .checked_sub(1)
        .ok_or_else(|| malformed(format!("invalid slides `{slides}`")))?;
    let pixel_length =
        parse_decimal(length).map_err(|_| malformed(format!("invalid length `{length}`")))?;

    // an even number of repeats finishes at the tail, an odd one back at the head
    let (end_x, end_y) = if repeat_count.rem_euclid(2) == 0 {
        let last = control_points
            .last()
            .ok_or_else(|| malformed("slider has no control points"))?;
        (last.x, last.y)
    } else {
        (x, y)
    };
    Ok(Slider {
        curve_type,
        control_points,
        repeat_count,
        pixel_length,
        end_x,
        end_y,
    })
}
