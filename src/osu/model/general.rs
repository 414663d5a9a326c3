//! Definitions of the `[General]` section.

/// Overall settings of the beatmap, from the `[General]` section.
///
/// Each field is `None` when its key is absent from the file.
#[derive(Debug, Default, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct General {
    /// Location of the audio file relative to the beatmap folder.
    pub audio_filename: Option<String>,
    /// Milliseconds of silence before the audio starts playing.
    pub audio_lead_in: Option<i32>,
    /// Time in milliseconds when the audio preview should start.
    pub preview_time: Option<i32>,
    /// Whether a countdown is shown before the first hit object.
    pub countdown: Option<bool>,
    /// Sample set used when timing points do not override it, such as `Normal` or `Soft`.
    pub sample_set: Option<String>,
    /// Multiplier for the threshold in time where hit objects placed close together stack.
    pub stack_leniency: Option<f64>,
    /// Game mode: 0 = osu!, 1 = osu!taiko, 2 = osu!catch, 3 = osu!mania.
    pub mode: Option<i32>,
    /// Whether breaks have a letterboxing effect.
    pub letterbox_in_breaks: Option<bool>,
    /// Whether the storyboard can use the user's skin images.
    pub use_skin_sprites: Option<bool>,
    /// Preferred skin to use during gameplay.
    pub skin_preference: Option<String>,
    /// Whether a warning about flashing colours is shown at the beginning.
    pub epilepsy_warning: Option<bool>,
    /// Whether the N+1 key layout is used in osu!mania.
    pub special_style: Option<bool>,
    /// Whether the storyboard is displayed in widescreen.
    pub widescreen_storyboard: Option<bool>,
    /// Whether sound samples change rate when playing with speed-changing mods.
    pub samples_match_playback_rate: Option<bool>,
}
