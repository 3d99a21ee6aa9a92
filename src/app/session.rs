// SPDX-License-Identifier: MPL-2.0
//! Account session as seen by the client.

use crate::domain::auth::User;

/// Who is signed in, plus the sign-out request state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    user: Option<User>,
    signing_out: bool,
}

impl Session {
    /// The signed-in user, if any.
    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn set_user(&mut self, user: Option<User>) {
        self.user = user;
    }

    /// Marks a sign-out as started. Returns `false` if one already is.
    pub fn begin_sign_out(&mut self) -> bool {
        !std::mem::replace(&mut self.signing_out, true)
    }

    /// Ends the sign-out request; the user is forgotten when it succeeded.
    pub fn finish_sign_out(&mut self, succeeded: bool) {
        self.signing_out = false;
        if succeeded {
            self.user = None;
        }
    }

    #[must_use]
    pub fn is_signing_out(&self) -> bool {
        self.signing_out
    }
}
