// SPDX-License-Identifier: MPL-2.0
//! Gallery domain types.

pub mod display;
pub mod types;

pub use display::{DisplayRef, PLACEHOLDER_IMAGE};
pub use types::{ImageId, ImageRecord, LikedSet};
