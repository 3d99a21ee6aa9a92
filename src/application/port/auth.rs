// SPDX-License-Identifier: MPL-2.0
//! Account port.

use super::ActionFuture;
use crate::domain::auth::{Credentials, User};

/// Remote account actions.
///
/// Sign-in and sign-up fail with a human-readable message (invalid
/// credentials, account not confirmed, email already registered, ...).
pub trait AuthActions: Send + Sync {
    fn sign_in(&self, credentials: Credentials) -> ActionFuture<()>;

    fn sign_up(&self, credentials: Credentials) -> ActionFuture<()>;

    fn sign_out(&self) -> ActionFuture<()>;

    /// Returns the signed-in user, or `None` for an anonymous session.
    fn current_user(&self) -> ActionFuture<Option<User>>;
}
