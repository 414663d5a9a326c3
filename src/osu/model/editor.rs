//! Definitions of the `[Editor]` section.

/// Saved settings of the beatmap editor.
#[derive(Debug, Default, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Editor {
    /// Time offsets of bookmarks in milliseconds.
    pub bookmarks: Option<Vec<i32>>,
    /// Distance snap multiplier.
    pub distance_spacing: Option<f64>,
    /// Beat snap divisor.
    pub beat_divisor: Option<i32>,
    /// Grid size.
    pub grid_size: Option<i32>,
    /// Scale factor for the object timeline.
    pub timeline_zoom: Option<f64>,
}
