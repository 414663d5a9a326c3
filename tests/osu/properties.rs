use osu_rs::osu::prelude::*;
use pretty_assertions::assert_eq;

use super::{beatmap_source, parse_ok};

#[test]
fn uninherited_beat_lengths_are_kept_exactly() {
    let source = beatmap_source(&[(
        "[TimingPoints]",
        "0,500,4,2,1,60,1,0\n1000,428.571428571429,4,2,1,60,1,0\n2000,300,7,2,1,60,1,0",
    )]);
    let beatmap = parse_ok(&source);
    let beat_lengths: Vec<_> = beatmap
        .timing_points
        .iter()
        .map(|point| point.ms_per_beat)
        .collect();
    assert_eq!(beat_lengths, vec![500.0, 428.571428571429, 300.0]);
    for point in &beatmap.timing_points {
        assert_eq!(point.bpm, bpm_from_ms_per_beat(point.ms_per_beat));
        assert!(!point.inherited);
    }
    assert_eq!(beatmap.timing_points[1].bpm, 140.0);
    assert_eq!(beatmap.timing_points[2].bpm, 200.0);
}

#[test]
fn inherited_point_resolves_against_previous() {
    let source = beatmap_source(&[(
        "[TimingPoints]",
        "0,500,4,2,1,60,1,0\n500,-50,4,2,1,60,0,0",
    )]);
    let beatmap = parse_ok(&source);
    let inherited = &beatmap.timing_points[1];
    assert!(inherited.inherited);
    assert_eq!(inherited.ms_per_beat, 1000.0);
    assert_eq!(inherited.bpm, 60.0);
}

#[test]
fn slider_endpoint_parity() {
    let source = beatmap_source(&[(
        "[HitObjects]",
        "0,0,100,2,0,B|10:10|20:20|30:30,2,100\n0,0,200,2,0,B|10:10|20:20|30:30,1,100",
    )]);
    let beatmap = parse_ok(&source);
    let ends: Vec<_> = beatmap
        .hit_objects
        .iter()
        .map(|object| match &object.kind {
            HitObjectKind::Slider(slider) => (slider.repeat_count, slider.end_x, slider.end_y),
            other => panic!("expected slider, but found {other:?}"),
        })
        .collect();
    assert_eq!(ends, vec![(1, 0, 0), (0, 30, 30)]);
}

#[test]
fn spinner_bit_wins_over_slider_bit() {
    let source = beatmap_source(&[("[HitObjects]", "256,192,1000,10,0,2000")]);
    let beatmap = parse_ok(&source);
    assert!(matches!(
        beatmap.hit_objects[0].kind,
        HitObjectKind::Spinner(_)
    ));
}

#[test]
fn parse_is_pure() {
    let source = include_str!("../files/sample.osu");
    assert_eq!(parse_ok(source), parse_ok(source));
}

#[test]
fn missing_editor_leaves_fields_unset() {
    let source = beatmap_source(&[("[General]", "Mode: 0")]);
    let beatmap = parse_ok(&source);
    assert_eq!(beatmap.editor, Editor::default());
    assert_eq!(beatmap.editor.bookmarks, None);
    assert_eq!(beatmap.editor.beat_divisor, None);
}

#[test]
fn tags_are_split_in_order() {
    let source = beatmap_source(&[("[Metadata]", "Tags: rhythm game test")]);
    let beatmap = parse_ok(&source);
    assert_eq!(
        beatmap.metadata.tags,
        Some(vec!["rhythm".to_string(), "game".into(), "test".into()])
    );
}

#[test]
fn single_break_period() {
    let source = beatmap_source(&[(
        "[Events]",
        "//Break Periods\n2,1000,2000\n//Storyboard Layer 0 (Background)",
    )]);
    let beatmap = parse_ok(&source);
    assert_eq!(
        beatmap.breaks,
        vec![BreakPeriod {
            start: 1000,
            end: 2000
        }]
    );
}

#[test]
fn empty_input_yields_empty_beatmap() {
    let beatmap = parse_ok("");
    assert_eq!(beatmap, Beatmap::default());

    let only_version = parse_ok("osu file format v14");
    assert_eq!(only_version.file_version, "osu file format v14");
    assert_eq!(
        only_version,
        Beatmap {
            file_version: "osu file format v14".into(),
            ..Default::default()
        }
    );
}
