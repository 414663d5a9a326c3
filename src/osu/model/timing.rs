//! Definitions of the `[TimingPoints]` section.

/// Bit of the effects field which enables kiai time.
pub const KIAI_EFFECT: u8 = 0b0000_0001;

/// A tempo directive in effect from its offset onward.
///
/// `ms_per_beat` is always resolved to a positive beat duration: inherited points are multiplied out against the last uninherited one when parsed.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimingPoint {
    /// Start time in milliseconds.
    pub time: f64,
    /// Duration of a beat in milliseconds, after resolving inheritance.
    pub ms_per_beat: f64,
    /// Beats per minute derived from `ms_per_beat`, rounded to 2 fractional digits.
    pub bpm: f64,
    /// Amount of beats in a measure.
    pub meter: i32,
    /// Whether the source line encoded a negative (slider velocity) multiplier.
    pub inherited: bool,
    /// Volume percentage for hit objects, if given.
    pub volume: Option<i32>,
    /// Whether kiai time is enabled.
    pub kiai: bool,
}

/// Converts a beat duration into BPM rounded to 2 fractional digits.
#[must_use]
pub fn bpm_from_ms_per_beat(ms_per_beat: f64) -> f64 {
    (60_000.0 / ms_per_beat * 100.0).round() / 100.0
}
