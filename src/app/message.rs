// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::domain::auth::{AuthMode, User};
use crate::domain::gallery::{ImageId, ImageRecord};
use crate::error::ActionError;
use crate::ui::auth_modal::form;
use crate::ui::gallery;
use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::state::Ticket;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Gallery(gallery::Message),
    AuthForm(form::Message),
    Notification(notifications::NotificationMessage),
    ImagesLoaded(Result<Vec<ImageRecord>, ActionError>),
    LikedLoaded(Result<Vec<ImageId>, ActionError>),
    UserLoaded(Result<Option<User>, ActionError>),
    /// A like or unlike request finished; `liked` is the requested state.
    LikeSettled {
        id: ImageId,
        ticket: Ticket,
        liked: bool,
        result: Result<(), ActionError>,
    },
    /// A sign-in or sign-up request finished.
    AuthSettled {
        ticket: Ticket,
        mode: AuthMode,
        result: Result<(), ActionError>,
    },
    SignedOut(Result<(), ActionError>),
    Tick(Instant), // Periodic tick for toasts and spinners
    EscapePressed,
}

/// Runtime flags passed in from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `PICTURY_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional backend API URL, overriding `[server] api_url`.
    pub api_url: Option<String>,
}
