// SPDX-License-Identifier: MPL-2.0
//! In-memory port fakes for unit tests.
//!
//! A single [`FakeBackend`] implements every port. Results are scripted per
//! action and each call is recorded by name so tests can assert on dispatch.

use crate::application::port::{
    ActionFuture, AuthActions, BinaryFetcher, ImageActions, ImagePathResolver, LocalSaver, Ports,
};
use crate::domain::auth::{Credentials, User};
use crate::domain::gallery::{ImageId, ImageRecord};
use crate::error::ActionError;
use futures_util::future::{ready, FutureExt};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

#[derive(Debug)]
pub struct FakeBackend {
    pub auth_result: Mutex<Result<(), ActionError>>,
    pub user: Mutex<Option<User>>,
    pub records: Mutex<Vec<ImageRecord>>,
    calls: Mutex<Vec<String>>,
}

impl Default for FakeBackend {
    fn default() -> Self {
        Self {
            auth_result: Mutex::new(Ok(())),
            user: Mutex::new(None),
            records: Mutex::new(Vec::new()),
            calls: Mutex::new(Vec::new()),
        }
    }
}

impl FakeBackend {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Wires this backend into every port.
    pub fn ports(self: &Arc<Self>) -> Ports {
        Ports {
            resolver: self.clone(),
            images: self.clone(),
            auth: self.clone(),
            fetcher: self.clone(),
            saver: self.clone(),
        }
    }

    pub fn fail_auth(&self, message: &str) {
        *self.auth_result.lock().unwrap() = Err(ActionError::new(message));
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: impl Into<String>) {
        self.calls.lock().unwrap().push(call.into());
    }
}

pub fn signed_in_user() -> User {
    User {
        id: "u-1".to_string(),
        email: Some("ada@example.com".to_string()),
    }
}

pub fn record(id: &str) -> ImageRecord {
    ImageRecord::new(id, format!("Image {id}"), "", format!("u1/{id}.jpg"))
}

impl ImagePathResolver for FakeBackend {
    fn resolve(&self, record: &ImageRecord) -> Option<String> {
        (!record.storage_path.is_empty()).then(|| format!("https://cdn.test/{}", record.storage_path))
    }
}

impl AuthActions for FakeBackend {
    fn sign_in(&self, credentials: Credentials) -> ActionFuture<()> {
        self.record(format!("sign_in:{}", credentials.email()));
        ready(self.auth_result.lock().unwrap().clone()).boxed()
    }

    fn sign_up(&self, credentials: Credentials) -> ActionFuture<()> {
        self.record(format!("sign_up:{}", credentials.email()));
        ready(self.auth_result.lock().unwrap().clone()).boxed()
    }

    fn sign_out(&self) -> ActionFuture<()> {
        self.record("sign_out");
        ready(Ok(())).boxed()
    }

    fn current_user(&self) -> ActionFuture<Option<User>> {
        self.record("current_user");
        ready(Ok(self.user.lock().unwrap().clone())).boxed()
    }
}

impl ImageActions for FakeBackend {
    fn list_images(&self) -> ActionFuture<Vec<ImageRecord>> {
        self.record("list_images");
        ready(Ok(self.records.lock().unwrap().clone())).boxed()
    }

    fn liked_ids(&self) -> ActionFuture<Vec<ImageId>> {
        self.record("liked_ids");
        ready(Ok(Vec::new())).boxed()
    }

    fn set_liked(&self, id: ImageId, liked: bool) -> ActionFuture<()> {
        self.record(format!("set_liked:{id}:{liked}"));
        ready(Ok(())).boxed()
    }

    fn download_reference(&self, record: &ImageRecord) -> ActionFuture<String> {
        self.record(format!("download_reference:{}", record.id));
        ready(Ok(format!("https://signed.test/{}", record.storage_path))).boxed()
    }
}

impl BinaryFetcher for FakeBackend {
    fn fetch(&self, url: String) -> ActionFuture<Vec<u8>> {
        self.record(format!("fetch:{url}"));
        ready(Ok(vec![0u8; 4])).boxed()
    }
}

impl LocalSaver for FakeBackend {
    fn save(&self, _staged: &Path, file_name: &str) -> Result<PathBuf, ActionError> {
        self.record(format!("save:{file_name}"));
        Ok(PathBuf::from("/downloads").join(file_name))
    }
}
