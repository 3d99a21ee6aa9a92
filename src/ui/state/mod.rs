// SPDX-License-Identifier: MPL-2.0
//! UI state shared by the controllers.
//!
//! Kept apart from the widgets so the state transitions can be tested
//! without rendering anything.

pub mod pending;

pub use pending::{Pending, Ticket};
