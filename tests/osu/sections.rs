use osu_rs::osu::prelude::*;
use pretty_assertions::assert_eq;

use super::{beatmap_source, parse_ok};

#[test]
fn sections_without_blank_lines() {
    let source = "osu file format v14\n[General]\nMode: 1\n[Metadata]\nTitle: Packed\n[Difficulty]\nCircleSize: 3";
    let beatmap = parse_ok(source);
    assert_eq!(beatmap.general.mode, Some(1));
    assert_eq!(beatmap.metadata.title.as_deref(), Some("Packed"));
    assert_eq!(beatmap.difficulty.circle_size, Some(3.0));
}

#[test]
fn sections_in_any_order() {
    let source = beatmap_source(&[
        ("[Difficulty]", "SliderMultiplier: 1.4"),
        ("[General]", "AudioFilename: song.ogg"),
    ]);
    let beatmap = parse_ok(&source);
    assert_eq!(beatmap.general.audio_filename.as_deref(), Some("song.ogg"));
    assert_eq!(beatmap.difficulty.slider_multiplier, Some(1.4));
}

#[test]
fn comments_are_ignored_in_sections() {
    let source = beatmap_source(&[
        ("[General]", "// written by hand\nMode: 3"),
        ("[HitObjects]", "// the only note\n64,192,500,1,0"),
    ]);
    let beatmap = parse_ok(&source);
    assert_eq!(beatmap.general.mode, Some(3));
    assert_eq!(beatmap.hit_objects.len(), 1);
}

#[test]
fn crlf_line_endings() {
    let source = "osu file format v14\r\n\r\n[Metadata]\r\nTitle:Windows\r\nBeatmapID:5\r\n";
    let beatmap = parse_ok(source);
    assert_eq!(beatmap.file_version, "osu file format v14");
    assert_eq!(beatmap.metadata.title.as_deref(), Some("Windows"));
    assert_eq!(beatmap.metadata.beatmap_id, Some(5));
}

#[test]
fn unknown_keys_are_ignored() {
    let source = beatmap_source(&[("[General]", "FutureKey: 42\nMode: 2")]);
    let beatmap = parse_ok(&source);
    assert_eq!(beatmap.general.mode, Some(2));
}

#[test]
fn error_is_annotated_with_section_and_line() {
    let source = beatmap_source(&[
        ("[General]", "Mode: 0"),
        ("[Difficulty]", "HPDrainRate: 5\nCircleSize: large"),
    ]);
    let err = parse_osu(&source).unwrap_err();
    let err = err.as_syntax().expect("must be a syntax error");
    assert_eq!(err.section(), Some(Section::Difficulty));
    assert_eq!(err.line(), 8);
    assert_eq!(&source[err.range()], "CircleSize: large");
    assert_eq!(
        err.content(),
        &ParseErrorKind::InvalidNumber {
            value: "large".into(),
            expected: ValueKind::Decimal,
        }
    );
}

#[test]
fn key_value_line_without_colon() {
    let source = beatmap_source(&[("[Metadata]", "Title Broken")]);
    let err = parse_osu(&source).unwrap_err();
    assert!(matches!(
        err.as_syntax().map(LineMixin::content),
        Some(ParseErrorKind::MalformedLine(_))
    ));
}

#[test]
fn malformed_hit_object_aborts() {
    let source = beatmap_source(&[("[HitObjects]", "0,0,0,1,0\n0,0,500,2,0,B,1,100")]);
    let err = parse_osu(&source).unwrap_err();
    let err = err.as_syntax().expect("must be a syntax error");
    assert_eq!(err.section(), Some(Section::HitObjects));
    assert_eq!(err.line(), 5);
    assert!(matches!(
        err.content(),
        ParseErrorKind::MalformedHitObject(_)
    ));
}

#[test]
fn from_str() {
    let beatmap: Beatmap = "osu file format v9\n\n[General]\nMode: 0"
        .parse()
        .expect("must be parsed");
    assert_eq!(beatmap.format_version(), Some(9));
}
