// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern: controllers own their state,
//! handle their messages and return effects for the application shell to run.
//!
//! # Components
//!
//! - [`gallery`] - Image grid, per-item controller (like, download) and the preview lightbox
//! - [`auth_modal`] - Sign-in / sign-up dialog and its form controller
//! - [`navbar`] - Navigation bar with the account controls
//! - [`notifications`] - Toast notification system for user feedback
//!
//! # Shared Infrastructure
//!
//! - [`state`] - Single-flight tracking of remote requests
//! - [`widgets`] - Custom Iced widgets (spinner)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod auth_modal;
pub mod design_tokens;
pub mod gallery;
pub mod navbar;
pub mod notifications;
pub mod state;
pub mod styles;
pub mod theming;
pub mod widgets;
