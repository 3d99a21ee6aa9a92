// SPDX-License-Identifier: MPL-2.0
//! Image download pipeline.
//!
//! A download goes through four steps, any of which may fail:
//!
//! 1. ask the backend for a downloadable location of the record
//! 2. fetch the bytes behind that location
//! 3. stage them in a [`TransientObject`]
//! 4. hand the staged file to the [`LocalSaver`], then release it
//!
//! The transient object is released on every path, including failures of
//! the save step.

use crate::application::port::{BinaryFetcher, ImageActions, LocalSaver};
use crate::domain::gallery::ImageRecord;
use crate::error::ActionError;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::NamedTempFile;

/// Extension used when neither the location nor the storage path has one.
const FALLBACK_EXTENSION: &str = "jpg";

/// Longest accepted extension, to reject query noise like `.php?x=...`.
const MAX_EXTENSION_LEN: usize = 5;

/// Collaborators needed by the pipeline.
#[derive(Clone)]
pub struct DownloadPorts {
    pub images: Arc<dyn ImageActions>,
    pub fetcher: Arc<dyn BinaryFetcher>,
    pub saver: Arc<dyn LocalSaver>,
}

/// A locally staged copy of downloaded bytes.
///
/// Created from the fetched payload, used by the saver, then released. The
/// backing file is removed by [`TransientObject::release`] or, failing an
/// explicit release, when the value is dropped.
#[derive(Debug)]
pub struct TransientObject {
    file: NamedTempFile,
}

impl TransientObject {
    /// Stages `bytes` in a fresh temporary file.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the temporary file cannot be created or written.
    pub fn create(bytes: &[u8]) -> std::io::Result<Self> {
        let mut file = tempfile::Builder::new().prefix("pictury-").tempfile()?;
        file.write_all(bytes)?;
        file.flush()?;
        Ok(Self { file })
    }

    /// Location of the staged bytes.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Removes the staged file.
    pub fn release(self) {
        let path = self.file.path().to_path_buf();
        if let Err(err) = self.file.close() {
            tracing::warn!("failed to release {}: {err}", path.display());
        }
    }
}

/// Runs the whole download pipeline for one record.
///
/// # Errors
///
/// Returns the first failing step's [`ActionError`]; no step is retried.
pub async fn download_image(
    ports: DownloadPorts,
    record: ImageRecord,
) -> Result<PathBuf, ActionError> {
    tracing::info!(id = %record.id, "starting download");

    let location = ports.images.download_reference(&record).await?;
    let bytes = ports.fetcher.fetch(location.clone()).await?;
    tracing::debug!(id = %record.id, size = bytes.len(), "fetched image payload");

    let object = TransientObject::create(&bytes)?;
    let file_name = suggested_file_name(&record, &location);
    let saver = Arc::clone(&ports.saver);

    let saved = tokio::task::spawn_blocking(move || {
        let result = saver.save(object.path(), &file_name);
        object.release();
        result
    })
    .await
    .map_err(|err| {
        tracing::error!("save task failed: {err}");
        ActionError::unknown()
    })??;

    tracing::info!(id = %record.id, path = %saved.display(), "image downloaded");
    Ok(saved)
}

/// Builds a file name for the saved image from its title and the extension
/// of the download location (or of the storage path).
#[must_use]
pub fn suggested_file_name(record: &ImageRecord, location: &str) -> String {
    let stem = sanitize_stem(&record.title)
        .or_else(|| sanitize_stem(record.id.as_str()))
        .unwrap_or_else(|| "image".to_string());

    let extension = extension_of(location)
        .or_else(|| extension_of(&record.storage_path))
        .unwrap_or_else(|| FALLBACK_EXTENSION.to_string());

    format!("{stem}.{extension}")
}

fn sanitize_stem(raw: &str) -> Option<String> {
    let cleaned: String = raw
        .trim()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' || c == ' ' {
                c
            } else {
                '_'
            }
        })
        .collect();
    let cleaned = cleaned.trim().trim_matches('_').to_string();
    (!cleaned.is_empty()).then_some(cleaned)
}

fn extension_of(location: &str) -> Option<String> {
    let without_query = location.split(['?', '#']).next().unwrap_or_default();
    let last_segment = without_query.rsplit('/').next().unwrap_or_default();
    let (_, extension) = last_segment.rsplit_once('.')?;

    let valid = !extension.is_empty()
        && extension.len() <= MAX_EXTENSION_LEN
        && extension.chars().all(|c| c.is_ascii_alphanumeric());
    valid.then(|| extension.to_ascii_lowercase())
}
