//! Definitions of the `[Colours]` section.

/// A colour with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

/// Colours used by the beatmap.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Colours {
    /// Combo colours, ordered by their `ComboN` number.
    pub combos: Vec<Rgb>,
    /// Override of the slider track colour.
    pub slider_track_override: Option<Rgb>,
    /// Slider border colour.
    pub slider_border: Option<Rgb>,
}
