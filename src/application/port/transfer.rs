// SPDX-License-Identifier: MPL-2.0
//! Transfer ports: fetching image bytes and saving them for the user.

use super::ActionFuture;
use crate::error::ActionError;
use std::path::{Path, PathBuf};

/// Retrieves the binary payload behind a remote location.
pub trait BinaryFetcher: Send + Sync {
    fn fetch(&self, url: String) -> ActionFuture<Vec<u8>>;
}

/// Persists a staged download to a user-facing location.
///
/// `staged` points at a transient file owned by the caller; implementations
/// copy from it and must not keep it around. Returns the final path.
pub trait LocalSaver: Send + Sync {
    fn save(&self, staged: &Path, file_name: &str) -> Result<PathBuf, ActionError>;
}
