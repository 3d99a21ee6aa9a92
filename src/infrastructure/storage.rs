// SPDX-License-Identifier: MPL-2.0
//! Resolves storage paths against a public bucket URL.

use crate::application::port::ImagePathResolver;
use crate::config::ServerConfig;
use crate::domain::gallery::ImageRecord;

/// Builds `{storage_url}/{bucket}/{storage_path}` locations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicStorageResolver {
    storage_url: Option<String>,
    bucket: String,
}

impl PublicStorageResolver {
    pub fn new(storage_url: Option<String>, bucket: impl Into<String>) -> Self {
        let storage_url = storage_url
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty());
        let bucket = bucket.into().trim_matches('/').to_string();
        Self {
            storage_url,
            bucket,
        }
    }

    #[must_use]
    pub fn from_config(server: &ServerConfig) -> Self {
        Self::new(server.storage_url.clone(), server.bucket.clone())
    }
}

impl ImagePathResolver for PublicStorageResolver {
    fn resolve(&self, record: &ImageRecord) -> Option<String> {
        let base = self.storage_url.as_deref()?;
        let path = record.storage_path.trim().trim_start_matches('/');
        if path.is_empty() {
            return None;
        }
        if self.bucket.is_empty() {
            return Some(format!("{base}/{path}"));
        }
        Some(format!("{base}/{}/{path}", self.bucket))
    }
}
