use osu_rs::osu::prelude::*;
use pretty_assertions::assert_eq;
use rayon::prelude::*;

const SAMPLE_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/files/sample.osu");

fn sample() -> Beatmap {
    parse_osu_file(SAMPLE_PATH).expect("sample must be parsed")
}

#[test]
fn sample_header_sections() {
    let beatmap = sample();
    assert_eq!(beatmap.file_version, "osu file format v14");
    assert_eq!(beatmap.format_version(), Some(14));
    assert_eq!(
        beatmap.general,
        General {
            audio_filename: Some("audio.mp3".into()),
            audio_lead_in: Some(0),
            preview_time: Some(48721),
            countdown: Some(false),
            sample_set: Some("Soft".into()),
            stack_leniency: Some(0.7),
            mode: Some(0),
            letterbox_in_breaks: Some(false),
            widescreen_storyboard: Some(true),
            ..Default::default()
        }
    );
    assert_eq!(
        beatmap.editor,
        Editor {
            bookmarks: Some(vec![12000, 24000, 48000]),
            distance_spacing: Some(1.1),
            beat_divisor: Some(4),
            grid_size: Some(32),
            timeline_zoom: Some(1.4),
        }
    );
    assert_eq!(beatmap.metadata.title_unicode.as_deref(), Some("サンプル"));
    assert_eq!(beatmap.metadata.source.as_deref(), Some(""));
    assert_eq!(beatmap.metadata.beatmap_set_id, Some(654321));
    assert_eq!(beatmap.difficulty.slider_multiplier, Some(1.8));
}

#[test]
fn sample_events_and_colours() {
    let beatmap = sample();
    assert_eq!(
        beatmap.breaks,
        vec![BreakPeriod {
            start: 20000,
            end: 26000
        }]
    );
    assert_eq!(
        beatmap.background.as_ref().map(|bg| bg.filename.as_str()),
        Some("background.jpg")
    );
    assert_eq!(
        beatmap.colours.combos,
        vec![
            Rgb {
                r: 255,
                g: 128,
                b: 64
            },
            Rgb {
                r: 64,
                g: 128,
                b: 255
            },
        ]
    );
    assert_eq!(beatmap.colours.slider_track_override, None);
}

#[test]
fn sample_timing_points() {
    let beatmap = sample();
    let resolved: Vec<_> = beatmap
        .timing_points
        .iter()
        .map(|point| (point.time, point.ms_per_beat, point.bpm, point.meter, point.inherited))
        .collect();
    assert_eq!(
        resolved,
        vec![
            (1000.0, 500.0, 120.0, 4, false),
            (5000.0, 1000.0, 60.0, 4, true),
            (12000.0, 500.0, 120.0, 4, true),
            (30000.0, 375.0, 160.0, 3, false),
            (32000.0, 187.5, 320.0, 3, true),
        ]
    );
    assert!(beatmap.timing_points[2].kiai);
    assert_eq!(beatmap.uninherited_timing_points().count(), 2);
    assert_eq!(
        beatmap.timing_point_at(13000.0).map(|point| point.time),
        Some(12000.0)
    );
    assert_eq!(beatmap.timing_point_at(0.0), None);
}

#[test]
fn sample_hit_objects() {
    let beatmap = sample();
    assert_eq!(
        beatmap.object_counts(),
        ObjectCounts {
            circles: 2,
            sliders: 2,
            spinners: 1,
        }
    );
    assert_eq!(
        beatmap.hit_objects[1],
        HitObject {
            x: 100,
            y: 100,
            time: 1500,
            new_combo: false,
            combo_skip: 0,
            hit_sounds: 0,
            kind: HitObjectKind::Slider(Slider {
                curve_type: CurveType::Bezier,
                control_points: vec![
                    ControlPoint { x: 150, y: 150 },
                    ControlPoint { x: 200, y: 100 },
                ],
                repeat_count: 0,
                pixel_length: 140.0,
                end_x: 200,
                end_y: 100,
            }),
        }
    );
    let HitObjectKind::Slider(returning) = &beatmap.hit_objects[2].kind else {
        panic!("expected slider");
    };
    assert_eq!(returning.curve_type.code(), 'L');
    assert_eq!((returning.end_x, returning.end_y), (300, 300));
    assert!(beatmap.hit_objects[2].new_combo);
    assert_eq!(beatmap.hit_objects[3].end_time(), 5000);
    assert_eq!(beatmap.hit_objects[4].hit_sounds, 8);
}

#[test]
fn missing_file_is_io_error() {
    let err = parse_osu_file("tests/files/does_not_exist.osu").unwrap_err();
    assert!(matches!(err, ParseError::Io(_)));
    assert!(err.as_syntax().is_none());
}

#[test]
fn serde_round_trip_for_caching() {
    let beatmap = sample();
    let json = serde_json::to_string(&beatmap).expect("must be serialized");
    let restored: Beatmap = serde_json::from_str(&json).expect("must be deserialized");
    assert_eq!(restored, beatmap);
}

#[test]
fn parallel_parsing() {
    let source = include_str!("../files/sample.osu");
    let expected = super::parse_ok(source);
    let parsed: Vec<_> = (0..32)
        .into_par_iter()
        .map(|_| parse_osu(source).expect("sample must be parsed"))
        .collect();
    assert!(parsed.iter().all(|beatmap| *beatmap == expected));
}
