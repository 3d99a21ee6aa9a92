// SPDX-License-Identifier: MPL-2.0
//! Scripted in-memory ports shared by the integration tests.
#![allow(dead_code)]

use futures_util::future::{ready, FutureExt};
use pictury::application::port::{
    ActionFuture, AuthActions, BinaryFetcher, ImageActions, LocalSaver,
};
use pictury::domain::auth::{Credentials, User};
use pictury::domain::gallery::{ImageId, ImageRecord};
use pictury::error::ActionError;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Records every call as `name` or `name:arg`.
#[derive(Debug, Default)]
pub struct CallLog(Mutex<Vec<String>>);

impl CallLog {
    pub fn push(&self, call: impl Into<String>) {
        self.0.lock().unwrap().push(call.into());
    }

    pub fn all(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }

    pub fn count(&self, prefix: &str) -> usize {
        self.all().iter().filter(|call| call.starts_with(prefix)).count()
    }
}

/// Image backend with a scripted download reference.
#[derive(Debug)]
pub struct FakeImages {
    pub reference: Result<String, ActionError>,
    pub log: Arc<CallLog>,
}

impl ImageActions for FakeImages {
    fn list_images(&self) -> ActionFuture<Vec<ImageRecord>> {
        self.log.push("list_images");
        ready(Ok(Vec::new())).boxed()
    }

    fn liked_ids(&self) -> ActionFuture<Vec<ImageId>> {
        self.log.push("liked_ids");
        ready(Ok(Vec::new())).boxed()
    }

    fn set_liked(&self, id: ImageId, liked: bool) -> ActionFuture<()> {
        self.log.push(format!("set_liked:{id}:{liked}"));
        ready(Ok(())).boxed()
    }

    fn download_reference(&self, record: &ImageRecord) -> ActionFuture<String> {
        self.log.push(format!("download_reference:{}", record.id));
        ready(self.reference.clone()).boxed()
    }
}

/// Fetcher returning scripted bytes.
#[derive(Debug)]
pub struct FakeFetcher {
    pub bytes: Result<Vec<u8>, ActionError>,
    pub log: Arc<CallLog>,
}

impl BinaryFetcher for FakeFetcher {
    fn fetch(&self, url: String) -> ActionFuture<Vec<u8>> {
        self.log.push(format!("fetch:{url}"));
        ready(self.bytes.clone()).boxed()
    }
}

/// Saver that remembers the staged path it was handed.
#[derive(Debug)]
pub struct FakeSaver {
    pub fail_with: Option<ActionError>,
    pub staged: Mutex<Option<(PathBuf, Vec<u8>)>>,
    pub log: Arc<CallLog>,
}

impl LocalSaver for FakeSaver {
    fn save(&self, staged: &Path, file_name: &str) -> Result<PathBuf, ActionError> {
        self.log.push(format!("save:{file_name}"));
        let contents = std::fs::read(staged)?;
        *self.staged.lock().unwrap() = Some((staged.to_path_buf(), contents));
        match &self.fail_with {
            Some(err) => Err(err.clone()),
            None => Ok(PathBuf::from("/saved").join(file_name)),
        }
    }
}

/// Account backend with a scripted result for sign-in and sign-up.
#[derive(Debug)]
pub struct FakeAuth {
    pub result: Result<(), ActionError>,
    pub log: Arc<CallLog>,
}

impl AuthActions for FakeAuth {
    fn sign_in(&self, credentials: Credentials) -> ActionFuture<()> {
        self.log.push(format!("sign_in:{}", credentials.email()));
        ready(self.result.clone()).boxed()
    }

    fn sign_up(&self, credentials: Credentials) -> ActionFuture<()> {
        self.log.push(format!("sign_up:{}", credentials.email()));
        ready(self.result.clone()).boxed()
    }

    fn sign_out(&self) -> ActionFuture<()> {
        self.log.push("sign_out");
        ready(Ok(())).boxed()
    }

    fn current_user(&self) -> ActionFuture<Option<User>> {
        self.log.push("current_user");
        ready(Ok(None)).boxed()
    }
}

pub fn record(id: &str, title: &str) -> ImageRecord {
    ImageRecord::new(id, title, "", format!("u1/{id}.jpg"))
}
