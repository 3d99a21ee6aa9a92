// SPDX-License-Identifier: MPL-2.0
//! Image records as served by the remote store.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Identifier of an image in the remote store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageId(String);

impl ImageId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ImageId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// One image of the gallery.
///
/// Records are owned by the remote store; the client never mutates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRecord {
    pub id: ImageId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Path of the image inside the storage bucket.
    #[serde(default, alias = "image_path")]
    pub storage_path: String,
}

impl ImageRecord {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        storage_path: impl Into<String>,
    ) -> Self {
        Self {
            id: ImageId::new(id),
            title: title.into(),
            description: description.into(),
            storage_path: storage_path.into(),
        }
    }
}

/// Identifiers of the images the current user has liked.
///
/// The authoritative copy lives remotely; this is the last known snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LikedSet {
    ids: HashSet<ImageId>,
}

impl LikedSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn contains(&self, id: &ImageId) -> bool {
        self.ids.contains(id)
    }

    /// Records the remote outcome of a like or unlike.
    pub fn set(&mut self, id: ImageId, liked: bool) {
        if liked {
            self.ids.insert(id);
        } else {
            self.ids.remove(&id);
        }
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl FromIterator<ImageId> for LikedSet {
    fn from_iter<T: IntoIterator<Item = ImageId>>(iter: T) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}
