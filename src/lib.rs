// SPDX-License-Identifier: MPL-2.0
//! `pictury` is an image gallery client built with the Iced GUI framework.
//!
//! Visitors browse the gallery and preview images; signed-in users can also
//! like and download them. Account actions, likes and download locations are
//! served by a remote backend reached through the ports in
//! [`application::port`].

#![doc(html_root_url = "https://docs.rs/pictury/0.1.0")]

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod logging;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
