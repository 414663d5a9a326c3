//! Prompting interface and parse configuration.
//!
//! An object implementing [`Prompter`] is held by [`ParseConfig`]. It is used to decide what to do with a hit object which cannot be decoded, because skipping the line or aborting the whole file both make sense depending on the application.

use tracing::warn;

use super::error::LineError;

/// An interface to prompt about handling recoverable problems on the beatmap file.
pub trait Prompter {
    /// Determines a [`MalformedWorkaround`] for a hit object line failed to decode.
    fn handle_malformed_hit_object(&self, error: &LineError) -> MalformedWorkaround;
}

/// A choice to handle the malformed entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum MalformedWorkaround {
    /// Choose to drop the entry and continue.
    Skip,
    /// Choose to interrupt this parsing.
    Halt,
}

/// The strategy that always halts parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AlwaysHalt;

impl Prompter for AlwaysHalt {
    fn handle_malformed_hit_object(&self, _: &LineError) -> MalformedWorkaround {
        MalformedWorkaround::Halt
    }
}

/// The strategy that always skips the malformed entry, reporting it as a warning log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AlwaysSkip;

impl Prompter for AlwaysSkip {
    fn handle_malformed_hit_object(&self, error: &LineError) -> MalformedWorkaround {
        warn!(line = error.line(), "skipping hit object: {}", error.content());
        MalformedWorkaround::Skip
    }
}

impl<F: Fn(&LineError) -> MalformedWorkaround> Prompter for F {
    fn handle_malformed_hit_object(&self, error: &LineError) -> MalformedWorkaround {
        self(error)
    }
}

/// How a boolean field is read from its text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BooleanCoercion {
    /// `""` and `"0"` are false, anything else is true. Matches the `0`/`1` encoding of the format.
    #[default]
    Conventional,
    /// Only `""` is false, any other text is true, even `"0"`.
    Loose,
}

impl BooleanCoercion {
    /// Reads the flag from the trimmed value text.
    #[must_use]
    pub fn coerce(self, value: &str) -> bool {
        match self {
            Self::Conventional => !(value.is_empty() || value == "0"),
            Self::Loose => !value.is_empty(),
        }
    }
}

/// Configuration of parsing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParseConfig<P> {
    pub(crate) prompter: P,
    pub(crate) booleans: BooleanCoercion,
}

/// Creates the default configuration, which halts on any malformed entry and reads booleans conventionally.
#[must_use]
pub const fn default_config() -> ParseConfig<AlwaysHalt> {
    ParseConfig {
        prompter: AlwaysHalt,
        booleans: BooleanCoercion::Conventional,
    }
}

impl Default for ParseConfig<AlwaysHalt> {
    fn default() -> Self {
        default_config()
    }
}

impl<P> ParseConfig<P> {
    /// Replaces the prompter.
    pub fn prompter<P2: Prompter>(self, prompter: P2) -> ParseConfig<P2> {
        ParseConfig {
            prompter,
            booleans: self.booleans,
        }
    }

    /// Replaces the boolean coercion rule.
    #[must_use]
    pub fn booleans(mut self, booleans: BooleanCoercion) -> Self {
        self.booleans = booleans;
        self
    }

    /// Returns the prompter.
    pub const fn prompter_ref(&self) -> &P {
        &self.prompter
    }

    /// Returns the boolean coercion rule.
    pub const fn boolean_coercion(&self) -> BooleanCoercion {
        self.booleans
    }
}
