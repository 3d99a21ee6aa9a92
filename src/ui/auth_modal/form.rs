// SPDX-License-Identifier: MPL-2.0
//! Account form controller shared by sign-in and sign-up.
//!
//! The form validates its input against the credentials schema, hands valid
//! credentials to the shell as [`Effect::Submit`] and tracks the submission
//! until its settlement comes back. A form instance is bound to one
//! [`AuthMode`]; switching mode replaces the whole instance.

use crate::domain::auth::{check_email, check_password, validate, AuthMode, Credentials, FieldErrors};
use crate::error::ActionError;
use crate::ui::notifications::Notification;
use crate::ui::state::{Pending, Ticket};

/// Where a form stands in its submission cycle.
///
/// Validation runs synchronously inside [`Form::handle`], so it never shows
/// up as a phase of its own: invalid input leaves the form `Idle` with field
/// errors, valid input moves it to `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Idle,
    Pending,
}

#[derive(Debug, Clone)]
pub enum Message {
    EmailChanged(String),
    PasswordChanged(String),
    Submit,
    SwitchMode,
    Close,
    /// The remote action finished for the submission `ticket`.
    Settled {
        ticket: Ticket,
        result: Result<(), ActionError>,
    },
}

#[derive(Debug, Clone)]
pub enum Effect {
    None,
    /// Send `credentials` to the action selected by `mode`.
    Submit {
        ticket: Ticket,
        mode: AuthMode,
        credentials: Credentials,
    },
    /// Replace this form with a fresh one in `AuthMode`.
    SwitchMode(AuthMode),
    Close,
    /// The submission succeeded; fields are already cleared.
    Succeeded(AuthMode),
    Notify(Notification),
}

#[derive(Debug, Clone, Default)]
pub struct Form {
    mode: AuthMode,
    email: String,
    password: String,
    field_errors: FieldErrors,
    root_error: Option<ActionError>,
    submission: Pending,
    /// Fields are re-validated on every edit once a submit was attempted.
    attempted: bool,
}

impl Form {
    #[must_use]
    pub fn new(mode: AuthMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn mode(&self) -> AuthMode {
        self.mode
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }

    #[must_use]
    pub fn field_errors(&self) -> &FieldErrors {
        &self.field_errors
    }

    #[must_use]
    pub fn root_error(&self) -> Option<&ActionError> {
        self.root_error.as_ref()
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.submission.is_pending()
    }

    #[must_use]
    pub fn phase(&self) -> FormPhase {
        if self.submission.is_pending() {
            FormPhase::Pending
        } else {
            FormPhase::Idle
        }
    }

    /// Ticket of the submission in flight, if any.
    #[must_use]
    pub fn pending_ticket(&self) -> Option<Ticket> {
        self.submission.ticket()
    }

    pub fn handle(&mut self, message: Message) -> Effect {
        match message {
            Message::EmailChanged(email) => {
                if self.attempted {
                    self.field_errors.email = check_email(&email);
                }
                self.email = email;
                Effect::None
            }
            Message::PasswordChanged(password) => {
                if self.attempted {
                    self.field_errors.password = check_password(&password);
                }
                self.password = password;
                Effect::None
            }
            Message::Submit => self.submit(),
            Message::SwitchMode => Effect::SwitchMode(self.mode.toggled()),
            Message::Close => Effect::Close,
            Message::Settled { ticket, result } => self.settle(ticket, result),
        }
    }

    fn submit(&mut self) -> Effect {
        if self.submission.is_pending() {
            tracing::debug!(mode = self.mode.as_str(), "submit ignored, already pending");
            return Effect::None;
        }
        self.attempted = true;

        let credentials = match validate(&self.email, &self.password) {
            Ok(credentials) => credentials,
            Err(errors) => {
                tracing::debug!(mode = self.mode.as_str(), ?errors, "form input rejected");
                self.field_errors = errors;
                return Effect::None;
            }
        };
        self.field_errors = FieldErrors::default();

        match self.submission.begin() {
            Some(ticket) => Effect::Submit {
                ticket,
                mode: self.mode,
                credentials,
            },
            None => Effect::None,
        }
    }

    fn settle(&mut self, ticket: Ticket, result: Result<(), ActionError>) -> Effect {
        if !self.submission.settle(ticket) {
            tracing::debug!(mode = self.mode.as_str(), "dropping stale form settlement");
            return Effect::None;
        }

        match result {
            Ok(()) => {
                self.email.clear();
                self.password.clear();
                self.field_errors = FieldErrors::default();
                self.root_error = None;
                self.attempted = false;
                Effect::Succeeded(self.mode)
            }
            Err(err) => {
                let notification = Notification::error_text(err.user_message());
                self.root_error = Some(err);
                Effect::Notify(notification)
            }
        }
    }
}
