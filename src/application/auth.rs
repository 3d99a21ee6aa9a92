// SPDX-License-Identifier: MPL-2.0
//! Account form submission.

use crate::application::port::{ActionFuture, AuthActions};
use crate::domain::auth::{AuthMode, Credentials};
use std::sync::Arc;

/// Sends validated credentials to the action selected by `mode`.
///
/// This is the only place sign-in and sign-up diverge; validation and result
/// handling are shared by both modes.
pub fn submit(
    auth: &Arc<dyn AuthActions>,
    mode: AuthMode,
    credentials: Credentials,
) -> ActionFuture<()> {
    tracing::info!(mode = mode.as_str(), email = credentials.email(), "submitting account form");
    match mode {
        AuthMode::SignIn => auth.sign_in(credentials),
        AuthMode::SignUp => auth.sign_up(credentials),
    }
}
