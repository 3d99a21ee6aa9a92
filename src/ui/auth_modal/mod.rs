// SPDX-License-Identifier: MPL-2.0
//! Account dialog: the shared modal state and the sign-in / sign-up form.

pub mod form;
pub mod view;

pub use form::{Form, FormPhase};
pub use view::ViewContext;

use crate::domain::auth::AuthMode;

/// Whether the account dialog is shown, and in which mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModalState {
    open: bool,
    mode: AuthMode,
}

impl ModalState {
    pub fn open(&mut self, mode: AuthMode) {
        self.open = true;
        self.mode = mode;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Switches between sign-in (`true`) and sign-up (`false`).
    pub fn change_mode(&mut self, is_sign_in: bool) {
        self.mode = AuthMode::from_sign_in(is_sign_in);
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub fn mode(&self) -> AuthMode {
        self.mode
    }
}
