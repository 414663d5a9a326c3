//! Definitions of the `[HitObjects]` section.
//!
//! The type of a hit object is encoded as bit flags in a byte:
//!
//! | Bit | Value  | Meaning                                |
//! |-----|--------|----------------------------------------|
//! | 0   | `0x01` | Hit circle                             |
//! | 1   | `0x02` | Slider                                 |
//! | 2   | `0x04` | New combo                              |
//! | 3   | `0x08` | Spinner                                |
//! | 4-6 | `0x70` | Amount of combo colours to skip        |
//! | 7   | `0x80` | osu!mania hold note                    |

/// Bit flags of the hit object type byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObjectTypeFlags(pub u8);

impl ObjectTypeFlags {
    /// Hit circle bit.
    pub const CIRCLE: u8 = 0b0000_0001;
    /// Slider bit.
    pub const SLIDER: u8 = 0b0000_0010;
    /// New combo bit.
    pub const NEW_COMBO: u8 = 0b0000_0100;
    /// Spinner bit.
    pub const SPINNER: u8 = 0b0000_1000;
    /// Mask of the combo colour skip count.
    pub const COMBO_SKIP_MASK: u8 = 0b0111_0000;
    /// osu!mania hold note bit.
    pub const MANIA_HOLD: u8 = 0b1000_0000;

    const fn has(self, bit: u8) -> bool {
        self.0 & bit != 0
    }

    /// Whether the spinner bit is set.
    #[must_use]
    pub const fn is_spinner(self) -> bool {
        self.has(Self::SPINNER)
    }

    /// Whether the slider bit is set.
    #[must_use]
    pub const fn is_slider(self) -> bool {
        self.has(Self::SLIDER)
    }

    /// Whether the new combo bit is set.
    #[must_use]
    pub const fn is_new_combo(self) -> bool {
        self.has(Self::NEW_COMBO)
    }

    /// Amount of combo colours to skip, from 0 to 7.
    #[must_use]
    pub const fn combo_skip(self) -> u8 {
        (self.0 & Self::COMBO_SKIP_MASK) >> 4
    }
}

/// A playable element placed on the play field.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HitObject {
    /// Horizontal position in osu! pixels, from 0 to 512.
    pub x: i32,
    /// Vertical position in osu! pixels, from 0 to 384.
    pub y: i32,
    /// Time when the object is to be hit, in milliseconds.
    pub time: i32,
    /// Whether the object starts a new combo.
    pub new_combo: bool,
    /// Amount of combo colours to skip when starting a new combo.
    pub combo_skip: u8,
    /// Bit flags of the hitsounds applied to the object.
    pub hit_sounds: i32,
    /// The variant and its own fields.
    pub kind: HitObjectKind,
}

impl HitObject {
    /// Whether the object starts a new combo.
    #[must_use]
    pub const fn is_new_combo(&self) -> bool {
        self.new_combo
    }

    /// Time when the object ends, in milliseconds.
    ///
    /// It is the hit time except for spinners declaring an end time.
    #[must_use]
    pub fn end_time(&self) -> i32 {
        match &self.kind {
            HitObjectKind::Spinner(Spinner {
                end_time: Some(end),
                ..
            }) => *end,
            _ => self.time,
        }
    }
}

/// The variant of a hit object.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HitObjectKind {
    /// A hit circle.
    Circle,
    /// A slider.
    Slider(Slider),
    /// A spinner.
    Spinner(Spinner),
}

/// The type of a slider curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CurveType {
    /// `B`: bézier.
    Bezier,
    /// `C`: centripetal catmull-rom.
    Catmull,
    /// `L`: linear.
    Linear,
    /// `P`: perfect circle.
    PerfectCircle,
}

impl CurveType {
    /// The character code of the curve type in the format.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Bezier => 'B',
            Self::Catmull => 'C',
            Self::Linear => 'L',
            Self::PerfectCircle => 'P',
        }
    }

    /// Reads the curve type from its character code.
    #[must_use]
    pub const fn from_code(code: char) -> Option<Self> {
        Some(match code {
            'B' => Self::Bezier,
            'C' => Self::Catmull,
            'L' => Self::Linear,
            'P' => Self::PerfectCircle,
            _ => return None,
        })
    }
}

/// A point of a slider path in osu! pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ControlPoint {
    /// Horizontal position.
    pub x: i32,
    /// Vertical position.
    pub y: i32,
}

/// Fields specific to sliders.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Slider {
    /// The type of the curve.
    pub curve_type: CurveType,
    /// Points of the path, excluding the anchor of the object itself.
    pub control_points: Vec<ControlPoint>,
    /// Number of traversals beyond the first, that is the `slides` field minus one.
    pub repeat_count: i32,
    /// Visual length in osu! pixels.
    pub pixel_length: f64,
    /// Horizontal position where the slider finishes.
    pub end_x: i32,
    /// Vertical position where the slider finishes.
    pub end_y: i32,
}

/// Fields specific to spinners.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Spinner {
    /// End time in milliseconds, if the extras carry it.
    pub end_time: Option<i32>,
    /// The raw trailing fields after `hitSound`.
    pub extras: String,
}
