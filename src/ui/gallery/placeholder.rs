// SPDX-License-Identifier: MPL-2.0
//! Bundled placeholder image for records without a usable picture.

use crate::domain::gallery::PLACEHOLDER_IMAGE;
use iced::widget::image::Handle;
use rust_embed::RustEmbed;
use std::sync::LazyLock;

#[derive(RustEmbed)]
#[folder = "assets/images/"]
#[prefix = "images/"]
struct Images;

// One handle for the whole process so the renderer decodes it once.
static HANDLE: LazyLock<Option<Handle>> = LazyLock::new(|| {
    let Some(file) = Images::get(PLACEHOLDER_IMAGE) else {
        tracing::warn!(path = PLACEHOLDER_IMAGE, "placeholder image is not bundled");
        return None;
    };
    Some(Handle::from_bytes(file.data.into_owned()))
});

/// Handle of the placeholder image, `None` if it is missing from the bundle.
#[must_use]
pub fn handle() -> Option<&'static Handle> {
    HANDLE.as_ref()
}
