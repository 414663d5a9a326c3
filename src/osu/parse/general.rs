//! This module handles the `[General]` section:
//!
//! - `AudioFilename: audio.mp3` - Audio file of the song.
//! - `AudioLeadIn: n` - Silence in milliseconds before the audio starts.
//! - `PreviewTime: n` - Start of the song preview in milliseconds.
//! - `Countdown: 0|1` - Whether to show the countdown.
//! - `SampleSet: Normal|Soft|Drum` - Default sample set.
//! - `StackLeniency: x` - Stacking threshold multiplier.
//! - `Mode: 0-3` - Game mode.
//! - `LetterboxInBreaks`, `UseSkinSprites`, `EpilepsyWarning`, `SpecialStyle`, `WidescreenStoryboard`, `SamplesMatchPlaybackRate` - Flags.
//! - `SkinPreference: name` - Preferred skin.

use super::{
    SectionParser,
    key_value::{Schema, parse_key_values},
};
use crate::osu::{
    error::{Result, ValueKind},
    lex::Line,
    model::general::General,
    prompt::{ParseConfig, Prompter},
};

const SCHEMA: &Schema = &[
    ("AudioFilename", ValueKind::String),
    ("AudioLeadIn", ValueKind::Integer),
    ("PreviewTime", ValueKind::Integer),
    ("Countdown", ValueKind::Boolean),
    ("SampleSet", ValueKind::String),
    ("StackLeniency", ValueKind::Decimal),
    ("Mode", ValueKind::Integer),
    ("LetterboxInBreaks", ValueKind::Boolean),
    ("UseSkinSprites", ValueKind::Boolean),
    ("SkinPreference", ValueKind::String),
    ("EpilepsyWarning", ValueKind::Boolean),
    ("SpecialStyle", ValueKind::Boolean),
    ("WidescreenStoryboard", ValueKind::Boolean),
    ("SamplesMatchPlaybackRate", ValueKind::Boolean),
];

/// It processes the `[General]` section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GeneralParser;

impl SectionParser for GeneralParser {
    type Output = General;

    fn parse<P: Prompter>(&self, lines: &[Line<'_>], config: &ParseConfig<P>) -> Result<General> {
        let kv = parse_key_values(lines, SCHEMA, config.booleans)?;
        Ok(General {
            audio_filename: kv.string("AudioFilename"),
            audio_lead_in: kv.integer("AudioLeadIn"),
            preview_time: kv.integer("PreviewTime"),
            countdown: kv.boolean("Countdown"),
            sample_set: kv.string("SampleSet"),
            stack_leniency: kv.decimal("StackLeniency"),
            mode: kv.integer("Mode"),
            letterbox_in_breaks: kv.boolean("LetterboxInBreaks"),
            use_skin_sprites: kv.boolean("UseSkinSprites"),
            skin_preference: kv.string("SkinPreference"),
            epilepsy_warning: kv.boolean("EpilepsyWarning"),
            special_style: kv.boolean("SpecialStyle"),
            widescreen_storyboard: kv.boolean("WidescreenStoryboard"),
            samples_match_playback_rate: kv.boolean("SamplesMatchPlaybackRate"),
        })
    }
}
