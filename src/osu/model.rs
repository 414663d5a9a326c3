//! Definitions of the parsed beatmap.

pub mod colours;
pub mod difficulty;
pub mod editor;
pub mod events;
pub mod general;
pub mod hit_object;
pub mod metadata;
pub mod timing;

use self::{
    colours::Colours,
    difficulty::Difficulty,
    editor::Editor,
    events::{Background, BreakPeriod},
    general::General,
    hit_object::{HitObject, HitObjectKind},
    metadata::Metadata,
    timing::TimingPoint,
};

/// A parsed osu! beatmap.
#[derive(Debug, Default, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Beatmap {
    /// The first line of the file verbatim, such as `osu file format v14`.
    pub file_version: String,
    /// `[General]` section.
    pub general: General,
    /// `[Editor]` section.
    pub editor: Editor,
    /// `[Metadata]` section.
    pub metadata: Metadata,
    /// `[Difficulty]` section.
    pub difficulty: Difficulty,
    /// Break periods declared in `[Events]`.
    pub breaks: Vec<BreakPeriod>,
    /// Background image declared in `[Events]`.
    pub background: Option<Background>,
    /// Timing points in file order, which is ascending by time by convention.
    pub timing_points: Vec<TimingPoint>,
    /// `[Colours]` section.
    pub colours: Colours,
    /// Hit objects in file order, which is ascending by time by convention.
    pub hit_objects: Vec<HitObject>,
}

/// Numbers of hit objects by their variant.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObjectCounts {
    /// Number of hit circles.
    pub circles: usize,
    /// Number of sliders.
    pub sliders: usize,
    /// Number of spinners.
    pub spinners: usize,
}

impl Beatmap {
    /// The format version number from [`Self::file_version`], such as `14` from `osu file format v14`.
    #[must_use]
    pub fn format_version(&self) -> Option<u32> {
        self.file_version
            .trim()
            .strip_prefix("osu file format v")?
            .parse()
            .ok()
    }

    /// Iterates the timing points which set an absolute tempo.
    pub fn uninherited_timing_points(&self) -> impl Iterator<Item = &TimingPoint> {
        self.timing_points.iter().filter(|point| !point.inherited)
    }

    /// Finds the timing point in effect at `time`, that is the latest one starting at or before it.
    ///
    /// The points need not be sorted. Among points sharing the same time, the later one in the file wins.
    #[must_use]
    pub fn timing_point_at(&self, time: f64) -> Option<&TimingPoint> {
        self.timing_points
            .iter()
            .filter(|point| point.time <= time)
            .max_by(|a, b| a.time.total_cmp(&b.time))
    }

    /// Counts the hit objects by their variant.
    #[must_use]
    pub fn object_counts(&self) -> ObjectCounts {
        self.hit_objects
            .iter()
            .fold(ObjectCounts::default(), |mut counts, object| {
                match object.kind {
                    HitObjectKind::Circle => counts.circles += 1,
                    HitObjectKind::Slider(_) => counts.sliders += 1,
                    HitObjectKind::Spinner(_) => counts.spinners += 1,
                }
                counts
            })
    }
}
