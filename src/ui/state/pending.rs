// SPDX-License-Identifier: MPL-2.0
//! Single-flight tracking of an asynchronous action.
//!
//! A controller starts an action with [`Pending::begin`], which hands out a
//! [`Ticket`]. The settlement message carries the ticket back, and
//! [`Pending::settle`] accepts it only if it matches the action in flight.
//! Settlements for a replaced controller or an earlier action are dropped.

use std::sync::atomic::{AtomicU64, Ordering};

/// Identifies one invocation of an asynchronous action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

impl Ticket {
    /// Returns a ticket never handed out before in this process.
    fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// Pending flag of one action, at most one invocation in flight.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pending {
    in_flight: Option<Ticket>,
}

impl Pending {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the action as started.
    ///
    /// Returns `None` when an invocation is already in flight.
    pub fn begin(&mut self) -> Option<Ticket> {
        if self.in_flight.is_some() {
            return None;
        }
        let ticket = Ticket::next();
        self.in_flight = Some(ticket);
        Some(ticket)
    }

    /// Clears the flag if `ticket` is the one in flight.
    ///
    /// Returns `false` for stale tickets, leaving the state untouched.
    pub fn settle(&mut self, ticket: Ticket) -> bool {
        if self.in_flight == Some(ticket) {
            self.in_flight = None;
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.in_flight.is_some()
    }

    #[must_use]
    pub fn ticket(&self) -> Option<Ticket> {
        self.in_flight
    }
}
