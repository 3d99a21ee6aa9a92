// SPDX-License-Identifier: MPL-2.0
//! Displayable image references.

/// Bundled image shown when a record has no resolvable path.
pub const PLACEHOLDER_IMAGE: &str = "images/liked.jpg";

/// What the gallery renders for a record: the resolved location of the
/// image, or the placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DisplayRef {
    Resolved(String),
    Placeholder,
}

impl DisplayRef {
    /// Builds a reference from a resolver outcome. Empty paths count as absent.
    #[must_use]
    pub fn from_resolved(path: Option<String>) -> Self {
        match path {
            Some(path) if !path.trim().is_empty() => DisplayRef::Resolved(path),
            _ => DisplayRef::Placeholder,
        }
    }

    /// Returns the reference as a string, the placeholder path included.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            DisplayRef::Resolved(path) => path,
            DisplayRef::Placeholder => PLACEHOLDER_IMAGE,
        }
    }

    /// Returns the resolved location, or `None` for the placeholder.
    #[must_use]
    pub fn resolved(&self) -> Option<&str> {
        match self {
            DisplayRef::Resolved(path) => Some(path),
            DisplayRef::Placeholder => None,
        }
    }

    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        matches!(self, DisplayRef::Placeholder)
    }
}
