// SPDX-License-Identifier: MPL-2.0
//! Tracing subscriber setup.
//!
//! Log verbosity follows `RUST_LOG`; without it only this crate logs, at
//! `info`. TLS internals are silenced either way.

use tracing_subscriber::EnvFilter;

const DEFAULT_DIRECTIVES: &str = "pictury=info";

/// Installs the global subscriber. Calling it twice is harmless.
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));
    let filter = match "rustls=off".parse() {
        Ok(directive) => filter.add_directive(directive),
        Err(_) => filter,
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}
