use std::cell::RefCell;

use osu_rs::osu::prelude::*;
use pretty_assertions::assert_eq;

use super::beatmap_source;

const BROKEN_OBJECTS: &str = "0,0,100,1,0\n0,0,200,2,0,Q|1:1,1,10\n0,0,300,1,0\nnot an object";

#[test]
fn skip_malformed_hit_objects() {
    let source = beatmap_source(&[("[HitObjects]", BROKEN_OBJECTS)]);
    let beatmap = parse_osu_with_config(&source, default_config().prompter(AlwaysSkip))
        .expect("malformed objects must be skipped");
    let times: Vec<_> = beatmap.hit_objects.iter().map(|object| object.time).collect();
    assert_eq!(times, vec![100, 300]);
}

#[test]
fn halt_on_malformed_hit_objects() {
    let source = beatmap_source(&[("[HitObjects]", BROKEN_OBJECTS)]);
    let err = parse_osu_with_config(&source, default_config().prompter(AlwaysHalt)).unwrap_err();
    assert_eq!(err.as_syntax().map(LineMixin::line), Some(5));
}

#[test]
fn custom_prompter_sees_every_malformed_line() {
    let seen = RefCell::new(vec![]);
    let source = beatmap_source(&[("[HitObjects]", BROKEN_OBJECTS)]);
    let prompter = |err: &LineError| {
        seen.borrow_mut().push(err.line());
        MalformedWorkaround::Skip
    };
    let beatmap = parse_osu_with_config(&source, default_config().prompter(prompter))
        .expect("malformed objects must be skipped");
    assert_eq!(beatmap.hit_objects.len(), 2);
    assert_eq!(seen.into_inner(), vec![5, 7]);
}

#[test]
fn boolean_coercion() {
    let source = beatmap_source(&[("[General]", "Countdown: 0\nLetterboxInBreaks: 1")]);

    let conventional = parse_osu(&source).expect("must be parsed");
    assert_eq!(conventional.general.countdown, Some(false));
    assert_eq!(conventional.general.letterbox_in_breaks, Some(true));

    let loose = parse_osu_with_config(&source, default_config().booleans(BooleanCoercion::Loose))
        .expect("must be parsed");
    assert_eq!(loose.general.countdown, Some(true));
    assert_eq!(loose.general.letterbox_in_breaks, Some(true));
}
