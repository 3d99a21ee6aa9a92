// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::{Duration, Instant};

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Severity level determines display duration and visual styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// Operation completed successfully (green, 3s duration).
    #[default]
    Success,
    /// Warning that doesn't block operation (orange, 5s duration).
    Warning,
    /// Error requiring attention (red, 8s duration).
    Error,
}

impl Severity {
    /// Returns the primary color for this severity level.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }

    /// Returns the auto-dismiss duration for this severity.
    #[must_use]
    pub fn auto_dismiss_duration(&self) -> Duration {
        match self {
            Severity::Success => Duration::from_secs(3),
            Severity::Warning => Duration::from_secs(5),
            Severity::Error => Duration::from_secs(8),
        }
    }
}

/// What a notification says.
///
/// Client-side messages are i18n keys resolved at render time; messages
/// reported by the backend are shown verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    Key {
        key: String,
        args: Vec<(String, String)>,
    },
    Text(String),
}

/// A notification to be displayed to the user.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    content: Content,
    created_at: Instant,
    /// Custom auto-dismiss duration (overrides severity default).
    custom_dismiss_duration: Option<Duration>,
}

impl Notification {
    /// Creates a new notification with the given severity and i18n message key.
    pub fn new(severity: Severity, message_key: impl Into<String>) -> Self {
        Self::with_content(
            severity,
            Content::Key {
                key: message_key.into(),
                args: Vec::new(),
            },
        )
    }

    /// Creates a notification showing `text` as-is, without translation.
    pub fn text(severity: Severity, text: impl Into<String>) -> Self {
        Self::with_content(severity, Content::Text(text.into()))
    }

    fn with_content(severity: Severity, content: Content) -> Self {
        Self {
            id: NotificationId::new(),
            severity,
            content,
            created_at: Instant::now(),
            custom_dismiss_duration: None,
        }
    }

    /// Creates a success notification.
    pub fn success(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Success, message_key)
    }

    /// Creates a warning notification.
    pub fn warning(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message_key)
    }

    /// Creates an error notification showing a backend message verbatim.
    pub fn error_text(text: impl Into<String>) -> Self {
        Self::text(Severity::Error, text)
    }

    /// Adds an argument for message interpolation. Ignored for verbatim text.
    #[must_use]
    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        if let Content::Key { args, .. } = &mut self.content {
            args.push((key.into(), value.into()));
        }
        self
    }

    /// Sets a custom auto-dismiss duration, overriding the severity default.
    #[must_use]
    pub fn auto_dismiss(mut self, duration: Duration) -> Self {
        self.custom_dismiss_duration = Some(duration);
        self
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn content(&self) -> &Content {
        &self.content
    }

    /// Returns the i18n key, or `None` for verbatim text.
    #[must_use]
    pub fn message_key(&self) -> Option<&str> {
        match &self.content {
            Content::Key { key, .. } => Some(key),
            Content::Text(_) => None,
        }
    }

    /// Returns the verbatim text, or `None` for translated messages.
    #[must_use]
    pub fn message_text(&self) -> Option<&str> {
        match &self.content {
            Content::Text(text) => Some(text),
            Content::Key { .. } => None,
        }
    }

    /// Returns the message arguments for interpolation.
    #[must_use]
    pub fn message_args(&self) -> &[(String, String)] {
        match &self.content {
            Content::Key { args, .. } => args,
            Content::Text(_) => &[],
        }
    }

    /// Key or text, whichever the notification carries. Used for logging.
    #[must_use]
    pub fn raw_message(&self) -> &str {
        match &self.content {
            Content::Key { key, .. } => key,
            Content::Text(text) => text,
        }
    }

    /// Same severity and same message, ignoring identity and age.
    #[must_use]
    pub fn says_the_same_as(&self, other: &Notification) -> bool {
        self.severity == other.severity && self.content == other.content
    }

    /// Restarts the auto-dismiss countdown.
    pub(super) fn restart(&mut self) {
        self.created_at = Instant::now();
    }

    #[must_use]
    pub fn age(&self) -> Duration {
        self.created_at.elapsed()
    }

    /// Returns whether this notification has been visible long enough.
    #[must_use]
    pub fn should_auto_dismiss(&self) -> bool {
        let duration = self
            .custom_dismiss_duration
            .unwrap_or_else(|| self.severity.auto_dismiss_duration());
        self.age() >= duration
    }
}
