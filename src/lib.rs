//! The osu! beatmap format parser.
//!
//! [osu!](https://osu.ppy.sh) stores its charts in `.osu` files. They are line-oriented text files divided into sections such as `[General]`, `[TimingPoints]` and `[HitObjects]`. This crate reads one of them into a strongly-typed [`osu::model::Beatmap`].
//!
//! # Usage
//!
//! ```
//! use osu_rs::osu::prelude::*;
//!
//! let source = "osu file format v14\n\n[Metadata]\nTitle:Test Song\nTags: rhythm game test\n";
//! let beatmap = parse_osu(source).expect("must be parsed");
//! assert_eq!(beatmap.metadata.title.as_deref(), Some("Test Song"));
//! assert_eq!(beatmap.format_version(), Some(14));
//! ```
//!
//! # Features
//!
//! - `serde`: Derives `Serialize` and `Deserialize` for every model type, so parsed beatmaps can be cached by your application.
//! - `diagnostics`: Renders parse errors against the source text with [`ariadne`](https://docs.rs/ariadne).
#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

#[cfg(feature = "diagnostics")]
pub mod diagnostics;
pub mod osu;

pub use osu::{parse_osu as parse, parse_osu_file as parse_file};
