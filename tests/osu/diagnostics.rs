use osu_rs::{diagnostics::collect_parse_report, osu::prelude::*};

use super::beatmap_source;

#[test]
fn report_for_syntax_error() {
    let source = beatmap_source(&[("[Difficulty]", "CircleSize: big")]);
    let err = parse_osu(&source).unwrap_err();
    let report = collect_parse_report("test.osu", &source, &err);
    assert!(report.is_some());

    let mut rendered = Vec::new();
    report
        .expect("report must be built")
        .write(
            ("test.osu".to_string(), ariadne::Source::from(source.as_str())),
            &mut rendered,
        )
        .expect("report must be rendered");
    let rendered = String::from_utf8_lossy(&rendered);
    assert!(rendered.contains("Difficulty"));
    assert!(rendered.contains("invalid number"));
}

#[test]
fn no_report_for_io_error() {
    let err = parse_osu_file("tests/files/does_not_exist.osu").unwrap_err();
    assert!(collect_parse_report("does_not_exist.osu", "", &err).is_none());
}
