// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for the remote collaborators.
//!
//! Every piece of real work (authentication, likes, image storage, download
//! URLs) happens on the backend. These traits are the narrow contracts the
//! client talks to; infrastructure adapters implement them and tests swap in
//! in-memory fakes.
//!
//! # Available Ports
//!
//! - [`gallery`]: Image listing, likes, download references, path resolution
//! - [`auth`]: Sign-in, sign-up, sign-out and the current-user lookup
//! - [`transfer`]: Binary fetch and local save of downloaded images
//!
//! # Design Notes
//!
//! - Remote calls return [`ActionFuture`]s that own their data (`'static`),
//!   so callers can hand them straight to `iced::Task::perform`
//! - Every failure is an [`ActionError`] carrying the backend's message, if any
//! - Traits are `Send + Sync` and shared as `Arc<dyn _>` through [`Ports`]

pub mod auth;
pub mod gallery;
pub mod transfer;

pub use auth::AuthActions;
pub use gallery::{ImageActions, ImagePathResolver};
pub use transfer::{BinaryFetcher, LocalSaver};

use crate::error::ActionError;
use futures_util::future::BoxFuture;
use std::sync::Arc;

/// Future returned by every remote action.
pub type ActionFuture<T> = BoxFuture<'static, Result<T, ActionError>>;

/// The set of collaborators the application shell is wired with.
#[derive(Clone)]
pub struct Ports {
    pub resolver: Arc<dyn ImagePathResolver>,
    pub images: Arc<dyn ImageActions>,
    pub auth: Arc<dyn AuthActions>,
    pub fetcher: Arc<dyn BinaryFetcher>,
    pub saver: Arc<dyn LocalSaver>,
}

impl std::fmt::Debug for Ports {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ports").finish_non_exhaustive()
    }
}
