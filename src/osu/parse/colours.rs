//! This module handles the `[Colours]` section:
//!
//! - `ComboN : r,g,b` - Combo colours, ordered by `N`.
//! - `SliderTrackOverride : r,g,b` - Slider body colour.
//! - `SliderBorder : r,g,b` - Slider border colour.

use itertools::Itertools;

use super::{SectionParser, key_value::split_key_value, parse_integer};
use crate::osu::{
    error::{ParseErrorKind, Result},
    lex::{Line, entries},
    mixin::LineMixinExt,
    model::colours::{Colours, Rgb},
    prompt::{ParseConfig, Prompter},
};

/// It processes the `[Colours]` section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColoursParser;

impl SectionParser for ColoursParser {
    type Output = Colours;

    fn parse<P: Prompter>(&self, lines: &[Line<'_>], _: &ParseConfig<P>) -> Result<Colours> {
        let mut colours = Colours::default();
        let mut combos = vec![];
        for line in entries(lines) {
            let (key, value) = split_key_value(line)?;
            if let Some(number) = key.strip_prefix("Combo") {
                let number: u32 = parse_integer(number).map_err(|e| e.at_line(line))?;
                combos.push((number, parse_rgb(value).map_err(|e| e.at_line(line))?));
                continue;
            }
            match key {
                "SliderTrackOverride" => {
                    colours.slider_track_override =
                        Some(parse_rgb(value).map_err(|e| e.at_line(line))?);
                }
                "SliderBorder" => {
                    colours.slider_border = Some(parse_rgb(value).map_err(|e| e.at_line(line))?);
                }
                _ => {}
            }
        }
        colours.combos = combos
            .into_iter()
            .sorted_by_key(|&(number, _)| number)
            .map(|(_, rgb)| rgb)
            .collect();
        Ok(colours)
    }
}

/// Parses `r,g,b`. An alpha channel following is ignored.
fn parse_rgb(value: &str) -> core::result::Result<Rgb, ParseErrorKind> {
    let channels: Vec<_> = value.split(',').map(str::trim).collect();
    let [r, g, b, rest @ ..] = channels.as_slice() else {
        return Err(ParseErrorKind::MalformedLine(format!(
            "expected `r,g,b` for a colour, but found `{value}`"
        )));
    };
    if 1 < rest.len() {
        return Err(ParseErrorKind::MalformedLine(format!(
            "too many channels for a colour: `{value}`"
        )));
    }
    Ok(Rgb {
        r: parse_integer(r)?,
        g: parse_integer(g)?,
        b: parse_integer(b)?,
    })
}
