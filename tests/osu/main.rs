//! Tests for `osu_rs::osu`.

mod config;
#[cfg(feature = "diagnostics")]
mod diagnostics;
mod files;
mod properties;
mod sections;

use osu_rs::osu::prelude::*;

/// Wraps section bodies into a minimal beatmap source.
pub fn beatmap_source(sections: &[(&str, &str)]) -> String {
    let mut source = String::from("osu file format v14\n");
    for (header, body) in sections {
        source.push('\n');
        source.push_str(header);
        source.push('\n');
        source.push_str(body);
        source.push('\n');
    }
    source
}

/// Parses the source, which must succeed.
pub fn parse_ok(source: &str) -> Beatmap {
    match parse_osu(source) {
        Ok(beatmap) => beatmap,
        Err(e) => panic!("parse failed: {e}"),
    }
}
