// SPDX-License-Identifier: MPL-2.0
//! Sign-in / sign-up mode of the account form.

/// Which account action the form submits to.
///
/// Both modes share one form; the mode is dispatched once at submit time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    SignIn,
    SignUp,
}

impl AuthMode {
    /// Maps the `is_sign_in` flag used by the modal state transitions.
    #[must_use]
    pub fn from_sign_in(is_sign_in: bool) -> Self {
        if is_sign_in {
            AuthMode::SignIn
        } else {
            AuthMode::SignUp
        }
    }

    #[must_use]
    pub fn is_sign_in(self) -> bool {
        matches!(self, AuthMode::SignIn)
    }

    /// The other mode, as offered by the mode-switch control.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            AuthMode::SignIn => AuthMode::SignUp,
            AuthMode::SignUp => AuthMode::SignIn,
        }
    }

    /// i18n key of the success notification for this mode.
    #[must_use]
    pub fn success_key(self) -> &'static str {
        match self {
            AuthMode::SignIn => "notification-sign-in-success",
            AuthMode::SignUp => "notification-sign-up-success",
        }
    }

    /// Short name used in logs.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            AuthMode::SignIn => "sign-in",
            AuthMode::SignUp => "sign-up",
        }
    }
}
