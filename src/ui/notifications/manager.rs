// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle: display slots, overflow queue, merging and expiry.
//!
//! A burst of identical outcomes (several downloads failing with the same
//! backend message, say) shows up as one toast whose countdown restarts,
//! not as a stack of copies.

use super::notification::{Notification, NotificationId, Severity};
use std::collections::VecDeque;

/// Toasts shown at once; the rest wait in the queue.
const MAX_VISIBLE: usize = 3;

#[derive(Debug, Clone)]
pub enum Message {
    Dismiss(NotificationId),
}

#[derive(Debug, Default)]
pub struct Manager {
    /// Newest first.
    shown: VecDeque<Notification>,
    waiting: VecDeque<Notification>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a toast, or refreshes an identical one already pending.
    pub fn push(&mut self, notification: Notification) {
        log_outcome(&notification);

        if let Some(pos) = self
            .shown
            .iter()
            .position(|existing| existing.says_the_same_as(&notification))
        {
            if let Some(mut existing) = self.shown.remove(pos) {
                existing.restart();
                self.shown.push_front(existing);
            }
            return;
        }
        if self
            .waiting
            .iter()
            .any(|existing| existing.says_the_same_as(&notification))
        {
            return;
        }

        if self.shown.len() < MAX_VISIBLE {
            self.shown.push_front(notification);
        } else {
            self.waiting.push_back(notification);
        }
    }

    /// Removes a toast. Returns `false` when `id` is unknown.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if let Some(pos) = self.shown.iter().position(|n| n.id() == id) {
            self.shown.remove(pos);
            self.fill_free_slots();
            true
        } else if let Some(pos) = self.waiting.iter().position(|n| n.id() == id) {
            self.waiting.remove(pos);
            true
        } else {
            false
        }
    }

    /// Drops expired toasts; queued ones take their slots.
    pub fn tick(&mut self) {
        let before = self.shown.len();
        self.shown.retain(|n| !n.should_auto_dismiss());
        if self.shown.len() != before {
            self.fill_free_slots();
        }
    }

    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
        }
    }

    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.shown.iter()
    }

    /// Shown toasts first, then the queue.
    pub fn all(&self) -> impl Iterator<Item = &Notification> {
        self.shown.iter().chain(self.waiting.iter())
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.shown.len()
    }

    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.waiting.len()
    }

    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.shown.is_empty() || !self.waiting.is_empty()
    }

    fn fill_free_slots(&mut self) {
        while self.shown.len() < MAX_VISIBLE {
            let Some(next) = self.waiting.pop_front() else {
                break;
            };
            self.shown.push_back(next);
        }
    }
}

fn log_outcome(notification: &Notification) {
    let message = notification.raw_message();
    match notification.severity() {
        Severity::Error => tracing::error!(text = message, "user notified"),
        Severity::Warning => tracing::warn!(text = message, "user notified"),
        Severity::Success => tracing::debug!(text = message, "user notified"),
    }
}
