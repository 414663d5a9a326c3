//! The parser module of osu! beatmap (.osu) file.
//!
//! This module consists of three phases: normalizing lines, splitting sections and parsing each section.
//!
//! `lex` module provides the line normalizer and the section splitter. Lines keep their line numbers and byte ranges, so that errors can point at the source.
//!
//! `parse` module provides a parser per section. Each of them implements [`parse::SectionParser`] and knows nothing about the others.
//!
//! `model` module provides definitions of the parsed [`Beatmap`].
//!
//! In detail, our policies are:
//!
//! - Support only UTF-8 (as required `&str` to input).
//! - No section is required. A missing section leaves its fields unset or empty.
//! - Fail on the first invalid line, except hit objects for which [`prompt::Prompter`] decides.
//! - Do not support storyboard commands.

pub mod error;
pub mod lex;
pub mod mixin;
pub mod model;
pub mod parse;
pub mod prelude;
pub mod prompt;

use std::{path::Path, str::FromStr};

use tracing::{debug, trace};

use self::{
    error::ParseError,
    lex::{Line, normalize, section::Section},
    model::{Beatmap, events::Events},
    parse::{
        SectionParser, colours::ColoursParser, difficulty::DifficultyParser, editor::EditorParser,
        events::EventsParser, general::GeneralParser, hit_object::HitObjectsParser,
        metadata::MetadataParser, timing::TimingPointsParser,
    },
    prompt::{ParseConfig, Prompter, default_config},
};

/// Parse a beatmap from source text.
///
/// This function provides a convenient way to parse a beatmap in one step, with [`default_config`].
///
/// # Example
///
/// ```
/// use osu_rs::osu::parse_osu;
///
/// let source = "osu file format v14\n\n[Difficulty]\nCircleSize:4\n";
/// let beatmap = parse_osu(source).unwrap();
/// assert_eq!(beatmap.difficulty.circle_size, Some(4.0));
/// assert!(beatmap.hit_objects.is_empty());
/// ```
///
/// # Errors
///
/// Returns [`ParseError::Syntax`] with the first invalid line found.
pub fn parse_osu(source: &str) -> Result<Beatmap, ParseError> {
    parse_osu_with_config(source, default_config())
}

/// Parse a beatmap from source text with the configuration.
///
/// A step of [`parse_osu`]
///
/// # Errors
///
/// Returns [`ParseError::Syntax`] with the first invalid line found, which is annotated with its section.
pub fn parse_osu_with_config<P: Prompter>(
    source: &str,
    config: ParseConfig<P>,
) -> Result<Beatmap, ParseError> {
    let lines = normalize(source);
    let file_version = lines
        .first()
        .map(|line| line.text.to_string())
        .unwrap_or_default();

    let general = parse_section(&lines, Section::General, &GeneralParser, &config)?;
    let editor = parse_section(&lines, Section::Editor, &EditorParser, &config)?;
    let metadata = parse_section(&lines, Section::Metadata, &MetadataParser, &config)?;
    let difficulty = parse_section(&lines, Section::Difficulty, &DifficultyParser, &config)?;
    let Events { breaks, background } =
        parse_section(&lines, Section::Events, &EventsParser, &config)?;
    let timing_points =
        parse_section(&lines, Section::TimingPoints, &TimingPointsParser, &config)?;
    let colours = parse_section(&lines, Section::Colours, &ColoursParser, &config)?;
    let hit_objects = parse_section(&lines, Section::HitObjects, &HitObjectsParser, &config)?;

    let beatmap = Beatmap {
        file_version,
        general,
        editor,
        metadata,
        difficulty,
        breaks,
        background,
        timing_points,
        colours,
        hit_objects,
    };
    debug!(
        version = %beatmap.file_version,
        timing_points = beatmap.timing_points.len(),
        hit_objects = beatmap.hit_objects.len(),
        "parsed beatmap"
    );
    Ok(beatmap)
}

/// Read and parse a beatmap file as UTF-8 text.
///
/// # Errors
///
/// - [`ParseError::Io`] if the file could not be read.
/// - [`ParseError::Syntax`] as [`parse_osu`].
pub fn parse_osu_file(path: impl AsRef<Path>) -> Result<Beatmap, ParseError> {
    let path = path.as_ref();
    debug!(path = %path.display(), "reading beatmap");
    let source = std::fs::read_to_string(path)?;
    parse_osu(&source)
}

fn parse_section<S: SectionParser, P: Prompter>(
    lines: &[Line<'_>],
    section: Section,
    parser: &S,
    config: &ParseConfig<P>,
) -> Result<S::Output, ParseError> {
    let body = section.lines_in(lines);
    trace!(%section, lines = body.len(), "located section");
    parser
        .parse(body, config)
        .map_err(|err| ParseError::Syntax(err.in_section(section)))
}

impl FromStr for Beatmap {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_osu(s)
    }
}
