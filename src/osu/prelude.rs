//! Prelude module for the osu! beatmap module.
//!
//! This module re-exports all public types from the osu module for convenient access.
//! You can use `use osu_rs::osu::prelude::*;` to import all of them at once.

pub use super::{
    error::{LineError, ParseError, ParseErrorKind, ValueKind},
    lex::{Line, entries, normalize, section::Section},
    mixin::{LineMixin, LineMixinExt},
    model::{
        Beatmap, ObjectCounts,
        colours::{Colours, Rgb},
        difficulty::Difficulty,
        editor::Editor,
        events::{Background, BreakPeriod, Events},
        general::General,
        hit_object::{
            ControlPoint, CurveType, HitObject, HitObjectKind, ObjectTypeFlags, Slider, Spinner,
        },
        metadata::Metadata,
        timing::{TimingPoint, bpm_from_ms_per_beat},
    },
    parse::{
        SectionParser,
        colours::ColoursParser,
        difficulty::DifficultyParser,
        editor::EditorParser,
        events::EventsParser,
        general::GeneralParser,
        hit_object::{HitObjectsParser, parse_hit_object},
        key_value::{KeyValues, Schema, Value, parse_key_values},
        metadata::MetadataParser,
        timing::TimingPointsParser,
    },
    parse_osu, parse_osu_file, parse_osu_with_config,
    prompt::{
        AlwaysHalt, AlwaysSkip, BooleanCoercion, MalformedWorkaround, ParseConfig, Prompter,
        default_config,
    },
};

#[cfg(feature = "diagnostics")]
pub use crate::diagnostics::{SimpleSource, ToAriadne, emit_parse_error};
