//! This module handles the `[Difficulty]` section, whose every field is a decimal:
//!
//! - `HPDrainRate`, `CircleSize`, `OverallDifficulty`, `ApproachRate` - Difficulty settings from 0 to 10.
//! - `SliderMultiplier`, `SliderTickRate` - Slider velocity and tick rate.

use super::{
    SectionParser,
    key_value::{Schema, parse_key_values},
};
use crate::osu::{
    error::{Result, ValueKind},
    lex::Line,
    model::difficulty::Difficulty,
    prompt::{ParseConfig, Prompter},
};

const SCHEMA: &Schema = &[
    ("HPDrainRate", ValueKind::Decimal),
    ("CircleSize", ValueKind::Decimal),
    ("OverallDifficulty", ValueKind::Decimal),
    ("ApproachRate", ValueKind::Decimal),
    ("SliderMultiplier", ValueKind::Decimal),
    ("SliderTickRate", ValueKind::Decimal),
];

/// It processes the `[Difficulty]` section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DifficultyParser;

impl SectionParser for DifficultyParser {
    type Output = Difficulty;

    fn parse<P: Prompter>(
        &self,
        lines: &[Line<'_>],
        config: &ParseConfig<P>,
    ) -> Result<Difficulty> {
        let kv = parse_key_values(lines, SCHEMA, config.booleans)?;
        Ok(Difficulty {
            hp_drain_rate: kv.decimal("HPDrainRate"),
            circle_size: kv.decimal("CircleSize"),
            overall_difficulty: kv.decimal("OverallDifficulty"),
            approach_rate: kv.decimal("ApproachRate"),
            slider_multiplier: kv.decimal("SliderMultiplier"),
            slider_tick_rate: kv.decimal("SliderTickRate"),
        })
    }
}
