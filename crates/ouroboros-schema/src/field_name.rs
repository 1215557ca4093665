//! Paths locating values and messages inside nested data

use std::fmt;

/// Separator used when rendering a path for humans
pub const SEPARATOR: &str = "->";

/// Ordered path of named segments, outermost first
///
/// `FieldName` is an immutable value: [`FieldName::push`] returns a new path
/// one level deeper. Empty segments are kept (unnamed processors such as
/// array items contribute them) but are skipped when rendering, so two paths
/// are considered the same location when their rendered forms match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FieldName {
    segments: Vec<String>,
}

impl FieldName {
    /// Create a path with a single segment
    pub fn new(segment: impl Into<String>) -> Self {
        Self {
            segments: vec![segment.into()],
        }
    }

    /// The empty root path
    pub fn root() -> Self {
        Self::default()
    }

    /// Build a path from outermost-to-innermost segments
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    /// Return a new path with `segment` appended as the innermost level
    pub fn push(&self, segment: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment.into());
        Self { segments }
    }

    /// All segments, including empty ones
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Human readable form, e.g. `pet->tags->1`
    pub fn rendered(&self) -> String {
        self.segments
            .iter()
            .filter(|s| !s.is_empty())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(SEPARATOR)
    }

    /// Whether messages located at both paths may be combined
    pub fn is_mergeable(&self, other: &FieldName) -> bool {
        self.rendered() == other.rendered()
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.rendered())
    }
}
