// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! - [`port`]: Trait definitions (interfaces) for the remote collaborators
//! - [`download`]: The image download pipeline
//! - [`auth`]: Dispatch of account form submissions
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer (`ui`, `app`) calls into the use cases

pub mod auth;
pub mod download;
pub mod port;
