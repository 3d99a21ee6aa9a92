// SPDX-License-Identifier: MPL-2.0
//! Gallery grid: the list of item controllers plus the image cache they
//! render from.
//!
//! Image bytes are fetched by the shell through the binary fetcher and handed
//! back as [`Message::ImageLoaded`]; decoded handles are kept in an LRU cache
//! keyed by display location.

pub mod item;
pub mod placeholder;
pub mod preview;

use crate::application::port::ImagePathResolver;
use crate::config::DEFAULT_THUMBNAIL_CACHE_SIZE;
use crate::domain::auth::User;
use crate::domain::gallery::{ImageId, ImageRecord, LikedSet};
use crate::error::ActionError;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::state::{Pending, Ticket};
use crate::ui::widgets::AnimatedSpinner;
use iced::widget::image::Handle;
use iced::widget::{scrollable, Container, Row, Text};
use iced::{alignment, Element, Length};
use lru::LruCache;
use std::collections::{HashMap, HashSet};
use std::num::NonZeroUsize;

pub use item::{Effect, ItemContext, Picture};

/// Messages for the gallery.
#[derive(Debug, Clone)]
pub enum Message {
    Item(ImageId, item::Message),
    ImageLoaded {
        location: String,
        result: Result<Vec<u8>, ActionError>,
    },
}

/// External state shared by every item.
#[derive(Debug, Clone, Copy)]
pub struct Context<'a> {
    pub liked: &'a LikedSet,
    pub user: Option<&'a User>,
}

/// Gallery state.
pub struct State {
    items: Vec<item::State>,
    images: LruCache<String, Handle>,
    /// Smallest capacity of `images`; it grows to hold every listed item.
    min_cache_size: usize,
    /// Locations fetched or being fetched.
    requested: HashSet<String>,
    /// Locations whose fetch failed. Their cards show the placeholder.
    failed: HashSet<String>,
    likes_in_flight: HashMap<ImageId, Pending>,
    loaded: bool,
}

impl std::fmt::Debug for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("State")
            .field("items", &self.items.len())
            .field("cached_images", &self.images.len())
            .field("failed_images", &self.failed.len())
            .field("likes_in_flight", &self.likes_in_flight)
            .field("loaded", &self.loaded)
            .finish()
    }
}

impl Default for State {
    fn default() -> Self {
        Self::with_cache_size(DEFAULT_THUMBNAIL_CACHE_SIZE)
    }
}

impl State {
    #[must_use]
    pub fn with_cache_size(size: usize) -> Self {
        let capacity = NonZeroUsize::new(size).unwrap_or(NonZeroUsize::MIN);
        Self {
            items: Vec::new(),
            images: LruCache::new(capacity),
            min_cache_size: capacity.get(),
            requested: HashSet::new(),
            failed: HashSet::new(),
            likes_in_flight: HashMap::new(),
            loaded: false,
        }
    }

    /// Replaces the listed images. Pending downloads of the previous items
    /// are forgotten; their settlements will be dropped.
    ///
    /// The image cache grows to hold one image per item: locations are only
    /// fetched once per listing, so an evicted card would never render.
    pub fn set_records(&mut self, records: Vec<ImageRecord>, resolver: &dyn ImagePathResolver) {
        self.items = records
            .into_iter()
            .map(|record| item::State::new(record, resolver))
            .collect();
        let wanted = self.items.len().max(self.min_cache_size);
        if let Some(capacity) = NonZeroUsize::new(wanted) {
            if capacity > self.images.cap() {
                tracing::debug!(capacity = capacity.get(), "growing the image cache");
                self.images.resize(capacity);
            }
        }
        self.loaded = true;
    }

    /// Marks the listing as finished without any image (listing failed).
    pub fn mark_loaded(&mut self) {
        self.loaded = true;
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    #[must_use]
    pub fn items(&self) -> &[item::State] {
        &self.items
    }

    /// Item whose lightbox is open.
    #[must_use]
    pub fn previewing(&self) -> Option<&item::State> {
        self.items.iter().find(|item| item.is_preview_open())
    }

    /// Whether any item has a download in flight.
    #[must_use]
    pub fn has_pending_downloads(&self) -> bool {
        self.items.iter().any(item::State::is_download_pending)
    }

    /// Closes the lightbox. Returns `false` if none was open.
    pub fn close_preview(&mut self) -> bool {
        self.items
            .iter_mut()
            .fold(false, |closed, item| item.close_preview() || closed)
    }

    /// Marks a like request for `id` as in flight. Returns `None` if one
    /// already is.
    pub fn begin_like(&mut self, id: &ImageId) -> Option<Ticket> {
        self.likes_in_flight.entry(id.clone()).or_default().begin()
    }

    /// Ends the like request for `id`. Returns `false` for a stale ticket:
    /// the request was forgotten or replaced and its outcome must be dropped.
    pub fn finish_like(&mut self, id: &ImageId, ticket: Ticket) -> bool {
        let settled = self
            .likes_in_flight
            .get_mut(id)
            .is_some_and(|pending| pending.settle(ticket));
        if settled {
            self.likes_in_flight.remove(id);
        }
        settled
    }

    /// Forgets every like request in flight (the session that started them
    /// ended).
    pub fn forget_likes(&mut self) {
        self.likes_in_flight.clear();
    }

    #[must_use]
    pub fn is_like_in_flight(&self, id: &ImageId) -> bool {
        self.likes_in_flight.get(id).is_some_and(Pending::is_pending)
    }

    #[cfg(test)]
    pub(crate) fn like_ticket(&self, id: &ImageId) -> Option<Ticket> {
        self.likes_in_flight.get(id).and_then(Pending::ticket)
    }

    /// Resolved locations that still need fetching. Each location is
    /// returned once.
    pub fn take_image_requests(&mut self) -> Vec<String> {
        let mut requests = Vec::new();
        for item in &self.items {
            let Some(location) = item.display().resolved() else {
                continue;
            };
            if self.images.contains(location) || self.requested.contains(location) {
                continue;
            }
            self.requested.insert(location.to_string());
            requests.push(location.to_string());
        }
        requests
    }

    /// What fills the picture slot of `item`.
    #[must_use]
    pub fn picture(&self, item: &item::State) -> Picture<'_> {
        let Some(location) = item.display().resolved() else {
            return Picture::Placeholder;
        };
        match self.images.peek(location) {
            Some(handle) => Picture::Loaded(handle),
            None if self.failed.contains(location) => Picture::Placeholder,
            None => Picture::Loading,
        }
    }

    pub fn handle(&mut self, message: Message, ctx: Context<'_>) -> Effect {
        match message {
            Message::Item(id, message) => {
                if matches!(message, item::Message::OpenPreview) {
                    self.close_preview();
                }
                let disabled = self.is_like_in_flight(&id);
                let Some(item) = self.items.iter_mut().find(|item| item.id() == &id) else {
                    tracing::debug!(%id, "message for an item no longer listed");
                    return Effect::None;
                };
                item.handle(
                    message,
                    &ItemContext {
                        liked: ctx.liked,
                        disabled,
                        user: ctx.user,
                    },
                )
            }
            Message::ImageLoaded { location, result } => {
                match result {
                    Ok(bytes) => {
                        self.failed.remove(&location);
                        // Evicted locations can be requested again.
                        if let Some((evicted, _)) =
                            self.images.push(location.clone(), Handle::from_bytes(bytes))
                        {
                            if evicted != location {
                                self.requested.remove(&evicted);
                            }
                        }
                    }
                    Err(err) => {
                        tracing::warn!(%location, "failed to load image: {err}");
                        self.failed.insert(location);
                    }
                }
                Effect::None
            }
        }
    }
}

/// Contextual data needed to render the gallery.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub context: Context<'a>,
    pub spinner_rotation: f32,
}

impl State {
    fn item_view_context<'a>(&'a self, item: &item::State, ctx: &ViewContext<'a>) -> item::ViewContext<'a> {
        item::ViewContext {
            i18n: ctx.i18n,
            item: ItemContext {
                liked: ctx.context.liked,
                disabled: self.is_like_in_flight(item.id()),
                user: ctx.context.user,
            },
            picture: self.picture(item),
            spinner_rotation: ctx.spinner_rotation,
        }
    }

    /// Renders the grid of cards.
    pub fn view<'a>(&'a self, ctx: &ViewContext<'a>) -> Element<'a, Message> {
        if !self.loaded {
            return centered(
                AnimatedSpinner::new(palette::PRIMARY_500, ctx.spinner_rotation)
                    .size(sizing::ICON_XL)
                    .into_element(),
            );
        }

        if self.items.is_empty() {
            return centered(Text::new(ctx.i18n.tr("gallery-empty")).size(typography::BODY).into());
        }

        let cards = self.items.iter().map(|item| {
            let id = item.id().clone();
            item::view_card(item, &self.item_view_context(item, ctx))
                .map(move |message| Message::Item(id.clone(), message))
        });

        let grid = Row::with_children(cards)
            .spacing(spacing::MD)
            .wrap()
            .vertical_spacing(spacing::MD);

        scrollable(Container::new(grid).width(Length::Fill).padding(spacing::LG))
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// Renders the lightbox of the previewed item, if any.
    pub fn view_preview<'a>(&'a self, ctx: &ViewContext<'a>) -> Option<Element<'a, Message>> {
        let item = self.previewing()?;
        let id = item.id().clone();
        Some(
            preview::view(item, &self.item_view_context(item, ctx))
                .map(move |message| Message::Item(id.clone(), message)),
        )
    }
}

fn centered<'a>(content: Element<'a, Message>) -> Element<'a, Message> {
    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
