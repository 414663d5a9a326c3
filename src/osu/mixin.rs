//! Mixin types for structures.
//!
//! - `LineMixin` is a generic wrapper that attaches the originating section and line to a value.
//! - `LineMixinExt` is a trait that provides extension methods to create `LineMixin` instances from a [`Line`].

use std::ops::Range;

use super::lex::{Line, section::Section};

/// A generic wrapper that attaches source position information to a value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LineMixin<T> {
    /// Wrapped content value
    content: T,
    /// The section which the line belongs to, if known.
    section: Option<Section>,
    /// The line number, starts with 1.
    line: usize,
    /// Byte range of the line in the source string.
    range: Range<usize>,
}

impl<T> LineMixin<T> {
    /// Instances a new `LineMixin`.
    pub const fn new(content: T, line: usize, range: Range<usize>) -> Self {
        Self {
            content,
            section: None,
            line,
            range,
        }
    }

    /// Attaches the originating section.
    #[must_use]
    pub fn in_section(mut self, section: Section) -> Self {
        self.section = Some(section);
        self
    }

    /// Returns the wrapped content.
    pub const fn content(&self) -> &T {
        &self.content
    }

    /// Leans the content out of the wrapper.
    pub fn into_content(self) -> T {
        self.content
    }

    /// Returns the originating section, if known.
    pub const fn section(&self) -> Option<Section> {
        self.section
    }

    /// Returns the line number, starts with 1.
    pub const fn line(&self) -> usize {
        self.line
    }

    /// Returns the byte range of the line in the source.
    pub fn range(&self) -> Range<usize> {
        self.range.clone()
    }

    /// Maps the content of the wrapper.
    pub fn map<U, F>(self, f: F) -> LineMixin<U>
    where
        F: FnOnce(T) -> U,
    {
        LineMixin {
            content: f(self.content),
            section: self.section,
            line: self.line,
            range: self.range,
        }
    }
}

impl<T: std::fmt::Display> std::fmt::Display for LineMixin<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.section {
            Some(section) => write!(f, "{} in {} at line {}", self.content, section, self.line),
            None => write!(f, "{} at line {}", self.content, self.line),
        }
    }
}

impl<T: std::error::Error + 'static> std::error::Error for LineMixin<T> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.content)
    }
}

/// Extension methods for `LineMixin`.
pub trait LineMixinExt {
    /// Instances a new `LineMixin` located at the given line.
    fn at_line(self, line: &Line<'_>) -> LineMixin<Self>
    where
        Self: Sized,
    {
        LineMixin::new(self, line.number, line.range.clone())
    }
}

impl<T> LineMixinExt for T {}
