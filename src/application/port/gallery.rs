// SPDX-License-Identifier: MPL-2.0
//! Gallery ports: image listing, likes and download references.

use super::ActionFuture;
use crate::domain::gallery::{ImageId, ImageRecord};

/// Resolves the storage reference of a record into a displayable location.
///
/// Returns `None` when the record cannot be resolved; callers then show the
/// placeholder image.
pub trait ImagePathResolver: Send + Sync {
    fn resolve(&self, record: &ImageRecord) -> Option<String>;
}

/// Remote actions on gallery images.
pub trait ImageActions: Send + Sync {
    /// Lists the images of the gallery.
    fn list_images(&self) -> ActionFuture<Vec<ImageRecord>>;

    /// Lists the images the current user has liked.
    fn liked_ids(&self) -> ActionFuture<Vec<ImageId>>;

    /// Likes (`liked = true`) or unlikes an image for the current user.
    fn set_liked(&self, id: ImageId, liked: bool) -> ActionFuture<()>;

    /// Requests a short-lived downloadable location for the record.
    ///
    /// # Errors
    ///
    /// Fails with the backend's message when the user may not download the
    /// image or the storage refuses to sign a location.
    fn download_reference(&self, record: &ImageRecord) -> ActionFuture<String>;
}
