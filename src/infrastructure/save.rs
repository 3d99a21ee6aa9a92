// SPDX-License-Identifier: MPL-2.0
//! Saves downloaded images into the user's downloads directory.

use crate::application::port::LocalSaver;
use crate::error::ActionError;
use std::fs::{self, File, OpenOptions};
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

/// Upper bound on `name (n).ext` attempts before giving up.
const MAX_COLLISION_ATTEMPTS: u32 = 10_000;

/// Copies staged downloads into a directory without overwriting anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadsDirSaver {
    directory: PathBuf,
}

impl DownloadsDirSaver {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    /// Target names in order: `name.ext`, `name (1).ext`, `name (2).ext`, ...
    fn candidates<'a>(&'a self, file_name: &'a str) -> impl Iterator<Item = PathBuf> + 'a {
        let (stem, extension) = match file_name.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() => (stem, Some(ext)),
            _ => (file_name, None),
        };

        std::iter::once(self.directory.join(file_name)).chain((1..=MAX_COLLISION_ATTEMPTS).map(
            move |n| match extension {
                Some(ext) => self.directory.join(format!("{stem} ({n}).{ext}")),
                None => self.directory.join(format!("{stem} ({n})")),
            },
        ))
    }

    /// Creates the first candidate that does not exist yet. Creation fails
    /// on existing files, so concurrent saves never claim the same name.
    fn create_free_file(&self, file_name: &str) -> Result<(PathBuf, File), ActionError> {
        for candidate in self.candidates(file_name) {
            match OpenOptions::new().write(true).create_new(true).open(&candidate) {
                Ok(file) => return Ok((candidate, file)),
                Err(err) if err.kind() == ErrorKind::AlreadyExists => continue,
                Err(err) => return Err(err.into()),
            }
        }
        tracing::warn!(
            "no free file name for {file_name} in {}",
            self.directory.display()
        );
        Err(ActionError::unknown())
    }
}

impl LocalSaver for DownloadsDirSaver {
    fn save(&self, staged: &Path, file_name: &str) -> Result<PathBuf, ActionError> {
        fs::create_dir_all(&self.directory)?;
        let mut source = File::open(staged)?;

        let (target, mut file) = self.create_free_file(file_name)?;
        if let Err(err) = io::copy(&mut source, &mut file) {
            drop(file);
            if let Err(cleanup) = fs::remove_file(&target) {
                tracing::warn!("failed to remove partial download {}: {cleanup}", target.display());
            }
            return Err(err.into());
        }

        tracing::debug!("saved download to {}", target.display());
        Ok(target)
    }
}
