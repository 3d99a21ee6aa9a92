// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core types and rules of the gallery client.
//!
//! This module contains value objects and validation rules that are
//! independent of the GUI toolkit and of the remote backend.
//!
//! # Modules
//!
//! - [`gallery`]: Image records and likes ([`ImageRecord`](gallery::ImageRecord),
//!   [`LikedSet`](gallery::LikedSet), [`DisplayRef`](gallery::DisplayRef))
//! - [`auth`]: Account types and the credentials schema
//!   ([`AuthMode`](auth::AuthMode), [`Credentials`](auth::Credentials), [`User`](auth::User))

pub mod auth;
pub mod gallery;
