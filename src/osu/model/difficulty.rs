//! Definitions of the `[Difficulty]` section.

/// Difficulty settings of the beatmap.
#[derive(Debug, Default, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Difficulty {
    /// HP setting (0 to 10).
    pub hp_drain_rate: Option<f64>,
    /// CS setting (0 to 10).
    pub circle_size: Option<f64>,
    /// OD setting (0 to 10).
    pub overall_difficulty: Option<f64>,
    /// AR setting (0 to 10).
    pub approach_rate: Option<f64>,
    /// Base slider velocity in hundreds of osu! pixels per beat.
    pub slider_multiplier: Option<f64>,
    /// Amount of slider ticks per beat.
    pub slider_tick_rate: Option<f64>,
}
