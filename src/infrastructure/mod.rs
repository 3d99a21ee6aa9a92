// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! Concrete implementations of the port traits defined in
//! `application::port`, wrapping the network and the filesystem.
//!
//! # Available Adapters
//!
//! - [`http`]: Backend JSON API (implements [`AuthActions`], [`ImageActions`], [`BinaryFetcher`])
//! - [`storage`]: Public bucket URLs (implements [`ImagePathResolver`])
//! - [`save`]: Downloads directory (implements [`LocalSaver`])
//!
//! [`AuthActions`]: crate::application::port::AuthActions
//! [`ImageActions`]: crate::application::port::ImageActions
//! [`BinaryFetcher`]: crate::application::port::BinaryFetcher
//! [`ImagePathResolver`]: crate::application::port::ImagePathResolver
//! [`LocalSaver`]: crate::application::port::LocalSaver

pub mod http;
pub mod save;
pub mod storage;

pub use http::ApiClient;
pub use save::DownloadsDirSaver;
pub use storage::PublicStorageResolver;

use crate::app::paths;
use crate::application::port::Ports;
use crate::config::Config;
use crate::error::{Error, Result};
use std::sync::Arc;

/// Wires the production adapters from the loaded configuration.
///
/// # Errors
///
/// Fails when the API URL is invalid, the HTTP client cannot be built or no
/// downloads directory can be determined.
pub fn production_ports(config: &Config) -> Result<Ports> {
    let api = Arc::new(ApiClient::new(&config.server)?);
    let downloads = paths::get_downloads_dir(config.downloads.directory.clone())
        .ok_or_else(|| Error::Config("no downloads directory available".to_string()))?;

    tracing::info!(
        api = %api.base_url(),
        downloads = %downloads.display(),
        "backend adapters ready"
    );

    Ok(Ports {
        resolver: Arc::new(PublicStorageResolver::from_config(&config.server)),
        images: api.clone(),
        auth: api.clone(),
        fetcher: api,
        saver: Arc::new(DownloadsDirSaver::new(downloads)),
    })
}
