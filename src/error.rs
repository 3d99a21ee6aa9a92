// SPDX-License-Identifier: MPL-2.0
use std::fmt;

/// Message shown when a failed remote action carries no message of its own.
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong";

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Http(String),
    Gui(String),
}

/// Failure of a remote action (sign-in, download reference, like, ...).
///
/// Carries the human-readable message reported by the remote side when there
/// is one. Transport failures are folded into the same type so the handling
/// site never has to tell them apart.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ActionError {
    message: Option<String>,
}

impl ActionError {
    /// Creates an error carrying a human-readable message.
    ///
    /// Blank messages are treated as absent.
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        let trimmed = message.trim();
        Self {
            message: (!trimmed.is_empty()).then(|| trimmed.to_string()),
        }
    }

    /// Creates an error without any message.
    #[must_use]
    pub fn unknown() -> Self {
        Self::default()
    }

    /// Returns the remote message, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Returns the message to show the user, falling back to the generic text.
    #[must_use]
    pub fn user_message(&self) -> &str {
        self.message().unwrap_or(GENERIC_FAILURE_MESSAGE)
    }
}

impl fmt::Display for ActionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.user_message())
    }
}

impl std::error::Error for ActionError {}

impl From<reqwest::Error> for ActionError {
    fn from(err: reqwest::Error) -> Self {
        // Transport details are logged at the adapter; the user sees the fallback.
        tracing::debug!("transport error: {err}");
        ActionError::unknown()
    }
}

impl From<std::io::Error> for ActionError {
    fn from(err: std::io::Error) -> Self {
        ActionError::new(err.to_string())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Http(e) => write!(f, "HTTP Error: {}", e),
            Error::Gui(e) => write!(f, "GUI Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err.to_string())
    }
}

impl From<iced::Error> for Error {
    fn from(err: iced::Error) -> Self {
        Error::Gui(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
