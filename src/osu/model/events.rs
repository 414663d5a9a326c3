//! Definitions of the `[Events]` section.

/// Extracted contents of the `[Events]` section.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Events {
    /// Break periods, in file order.
    pub breaks: Vec<BreakPeriod>,
    /// The background image, if declared.
    pub background: Option<Background>,
}

/// A period where no hit object has to be played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BreakPeriod {
    /// Start time in milliseconds.
    pub start: i32,
    /// End time in milliseconds.
    pub end: i32,
}

impl BreakPeriod {
    /// Length of the break in milliseconds.
    #[must_use]
    pub const fn duration(&self) -> i32 {
        self.end - self.start
    }
}

/// The background image event, `0,0,"filename",xOffset,yOffset`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Background {
    /// Location of the image relative to the beatmap folder, without quotes.
    pub filename: String,
    /// Offset in osu! pixels from the centre of the screen.
    pub x_offset: i32,
    /// Offset in osu! pixels from the centre of the screen.
    pub y_offset: i32,
}
