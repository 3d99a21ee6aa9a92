// SPDX-License-Identifier: MPL-2.0
//! Gallery item controller.
//!
//! Presents one image record as a card and in the preview lightbox, and
//! owns the item's download pending flag. Likes are not stored here: the
//! controller reads the liked set it is given and reports the pre-toggle
//! state to the parent through [`Effect::ToggleLike`].

use crate::application::port::ImagePathResolver;
use crate::domain::auth::User;
use crate::domain::gallery::{DisplayRef, ImageId, ImageRecord, LikedSet};
use crate::error::ActionError;
use crate::i18n::fluent::I18n;
use super::placeholder;
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::notifications::Notification;
use crate::ui::state::{Pending, Ticket};
use crate::ui::styles;
use iced::widget::image::Handle;
use iced::widget::{button, Column, Container, Image, Row, Stack, Text};
use iced::{alignment, ContentFit, Element, Length};
use std::path::PathBuf;

/// External state the item reads but never mutates.
#[derive(Debug, Clone, Copy)]
pub struct ItemContext<'a> {
    pub liked: &'a LikedSet,
    /// Makes the like control inert (a like request for this item is in flight).
    pub disabled: bool,
    /// The signed-in user, if any. Downloads are only offered to users.
    pub user: Option<&'a User>,
}

impl ItemContext<'_> {
    #[must_use]
    pub fn can_download(&self) -> bool {
        self.user.is_some()
    }
}

/// Messages handled by one gallery item.
#[derive(Debug, Clone)]
pub enum Message {
    ToggleLike,
    Download,
    OpenPreview,
    ClosePreview,
    /// The download pipeline finished for the invocation `ticket`.
    DownloadSettled {
        ticket: Ticket,
        result: Result<PathBuf, ActionError>,
    },
}

/// Effects produced by an item, handled by the application shell.
#[derive(Debug, Clone)]
pub enum Effect {
    None,
    /// Flip the like state; `is_liked` is the state *before* the toggle.
    ToggleLike { id: ImageId, is_liked: bool },
    /// Run the download pipeline and report back with `ticket`.
    Download { ticket: Ticket, record: ImageRecord },
    Notify(Notification),
}

/// Resolves the location an item is displayed from.
#[must_use]
pub fn display_ref(record: &ImageRecord, resolver: &dyn ImagePathResolver) -> DisplayRef {
    DisplayRef::from_resolved(resolver.resolve(record))
}

/// State of one gallery item.
#[derive(Debug, Clone)]
pub struct State {
    record: ImageRecord,
    display: DisplayRef,
    download: Pending,
    preview_open: bool,
}

impl State {
    pub fn new(record: ImageRecord, resolver: &dyn ImagePathResolver) -> Self {
        let display = display_ref(&record, resolver);
        Self {
            record,
            display,
            download: Pending::new(),
            preview_open: false,
        }
    }

    #[must_use]
    pub fn id(&self) -> &ImageId {
        &self.record.id
    }

    #[must_use]
    pub fn record(&self) -> &ImageRecord {
        &self.record
    }

    #[must_use]
    pub fn display(&self) -> &DisplayRef {
        &self.display
    }

    #[must_use]
    pub fn is_download_pending(&self) -> bool {
        self.download.is_pending()
    }

    #[must_use]
    pub fn is_preview_open(&self) -> bool {
        self.preview_open
    }

    /// Closes the lightbox. Returns whether it was open.
    pub fn close_preview(&mut self) -> bool {
        std::mem::replace(&mut self.preview_open, false)
    }

    pub fn handle(&mut self, message: Message, ctx: &ItemContext<'_>) -> Effect {
        match message {
            Message::ToggleLike => {
                if ctx.disabled {
                    return Effect::None;
                }
                Effect::ToggleLike {
                    id: self.record.id.clone(),
                    is_liked: ctx.liked.contains(&self.record.id),
                }
            }
            Message::Download => {
                if !ctx.can_download() {
                    tracing::debug!(id = %self.record.id, "download requested without a user");
                    return Effect::None;
                }
                match self.download.begin() {
                    Some(ticket) => Effect::Download {
                        ticket,
                        record: self.record.clone(),
                    },
                    None => {
                        tracing::debug!(id = %self.record.id, "download already in progress");
                        Effect::None
                    }
                }
            }
            Message::OpenPreview => {
                self.preview_open = true;
                Effect::None
            }
            Message::ClosePreview => {
                self.close_preview();
                Effect::None
            }
            Message::DownloadSettled { ticket, result } => {
                if !self.download.settle(ticket) {
                    tracing::debug!(id = %self.record.id, "dropping stale download settlement");
                    return Effect::None;
                }
                match result {
                    Ok(path) => Effect::Notify(
                        Notification::success("notification-download-success")
                            .with_arg("path", path.display().to_string()),
                    ),
                    Err(err) => Effect::Notify(Notification::error_text(err.user_message())),
                }
            }
        }
    }
}

/// Contextual data needed to render an item.
/// What fills an item's picture slot.
#[derive(Debug, Clone, Copy)]
pub enum Picture<'a> {
    Loaded(&'a Handle),
    Loading,
    /// The bundled placeholder: no resolvable path, or the fetch failed.
    Placeholder,
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub item: ItemContext<'a>,
    pub picture: Picture<'a>,
    pub spinner_rotation: f32,
}

/// Renders the gallery card.
pub fn view_card<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let picture = picture(
        ctx.picture,
        ctx.i18n,
        ContentFit::Cover,
        Length::Fixed(sizing::THUMBNAIL),
    );

    let preview_button = button(Text::new("⤢").size(typography::BODY))
        .on_press(Message::OpenPreview)
        .padding(spacing::XXS)
        .style(styles::button::overlay(
            palette::WHITE,
            opacity::OVERLAY_MEDIUM,
            opacity::OVERLAY_HOVER,
        ));

    let picture_with_controls = Stack::new().push(picture).push(
        Container::new(preview_button)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Right)
            .padding(spacing::XS),
    );

    let title_row = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(
            Text::new(state.record.title.as_str())
                .size(typography::BODY)
                .width(Length::Fill),
        )
        .push(like_button(state, &ctx.item));

    let mut content = Column::new()
        .spacing(spacing::XS)
        .push(picture_with_controls)
        .push(title_row);

    if !state.record.description.trim().is_empty() {
        content = content.push(Text::new(state.record.description.as_str()).size(typography::CAPTION));
    }

    Container::new(content)
        .width(Length::Fixed(sizing::CARD_WIDTH))
        .padding(spacing::SM)
        .style(styles::container::card)
        .into()
}

fn like_button<'a>(state: &State, ctx: &ItemContext<'_>) -> Element<'a, Message> {
    let is_liked = ctx.liked.contains(&state.record.id);
    let glyph = if is_liked { "♥" } else { "♡" };

    button(Text::new(glyph).size(sizing::ICON_SM))
        .on_press_maybe((!ctx.disabled).then_some(Message::ToggleLike))
        .padding(spacing::XXS)
        .style(styles::button::like(is_liked))
        .into()
}

/// The image itself, or a themed stand-in while it is missing.
pub(super) fn picture<'a, M: 'a>(
    picture: Picture<'_>,
    i18n: &I18n,
    fit: ContentFit,
    height: Length,
) -> Element<'a, M> {
    let handle = match picture {
        Picture::Loaded(handle) => Some(handle),
        Picture::Placeholder => placeholder::handle(),
        Picture::Loading => None,
    };
    if let Some(handle) = handle {
        return Image::new(handle.clone())
            .content_fit(fit)
            .width(Length::Fill)
            .height(height)
            .into();
    }

    let label = match picture {
        Picture::Loading => i18n.tr("gallery-image-loading"),
        _ => i18n.tr("gallery-image-unavailable"),
    };
    Container::new(Text::new(label).size(typography::CAPTION))
        .width(Length::Fill)
        .height(height)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::placeholder)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gallery::PLACEHOLDER_IMAGE;
    use crate::ui::notifications::Severity;

    struct MapResolver;

    impl ImagePathResolver for MapResolver {
        fn resolve(&self, record: &ImageRecord) -> Option<String> {
            (!record.storage_path.is_empty())
                .then(|| format!("https://cdn.test/{}", record.storage_path))
        }
    }

    fn item(path: &str) -> State {
        State::new(ImageRecord::new("img-1", "Cat", "", path), &MapResolver)
    }

    fn user() -> User {
        User {
            id: "u1".to_string(),
            email: Some("a@b.co".to_string()),
        }
    }

    #[test]
    fn resolved_path_is_displayed() {
        assert_eq!(item("cat.jpg").display().as_str(), "https://cdn.test/cat.jpg");
    }

    #[test]
    fn unresolvable_path_falls_back_to_placeholder() {
        let state = item("");
        assert!(state.display().is_placeholder());
        assert_eq!(state.display().as_str(), PLACEHOLDER_IMAGE);
    }

    #[test]
    fn like_reports_pre_toggle_state() {
        let mut state = item("cat.jpg");
        let mut liked = LikedSet::new();
        let ctx = ItemContext {
            liked: &liked,
            disabled: false,
            user: None,
        };
        match state.handle(Message::ToggleLike, &ctx) {
            Effect::ToggleLike { id, is_liked } => {
                assert_eq!(id.as_str(), "img-1");
                assert!(!is_liked);
            }
            other => panic!("expected ToggleLike, got {other:?}"),
        }

        liked.set(ImageId::new("img-1"), true);
        let ctx = ItemContext {
            liked: &liked,
            disabled: false,
            user: None,
        };
        assert!(matches!(
            state.handle(Message::ToggleLike, &ctx),
            Effect::ToggleLike { is_liked: true, .. }
        ));
    }

    #[test]
    fn disabled_like_is_inert() {
        let mut state = item("cat.jpg");
        let liked = LikedSet::new();
        let ctx = ItemContext {
            liked: &liked,
            disabled: true,
            user: None,
        };
        assert!(matches!(state.handle(Message::ToggleLike, &ctx), Effect::None));
    }

    #[test]
    fn download_requires_a_user() {
        let mut state = item("cat.jpg");
        let liked = LikedSet::new();
        let ctx = ItemContext {
            liked: &liked,
            disabled: false,
            user: None,
        };
        assert!(matches!(state.handle(Message::Download, &ctx), Effect::None));
        assert!(!state.is_download_pending());
    }

    #[test]
    fn pending_spans_invocation_to_settlement() {
        let mut state = item("cat.jpg");
        let liked = LikedSet::new();
        let user = user();
        let ctx = ItemContext {
            liked: &liked,
            disabled: false,
            user: Some(&user),
        };
        assert!(!state.is_download_pending());

        let ticket = match state.handle(Message::Download, &ctx) {
            Effect::Download { ticket, record } => {
                assert_eq!(record.id.as_str(), "img-1");
                ticket
            }
            other => panic!("expected Download, got {other:?}"),
        };
        assert!(state.is_download_pending());

        // Single flight: a second click while pending does nothing.
        assert!(matches!(state.handle(Message::Download, &ctx), Effect::None));

        let effect = state.handle(
            Message::DownloadSettled {
                ticket,
                result: Ok(PathBuf::from("/tmp/Cat.jpg")),
            },
            &ctx,
        );
        assert!(!state.is_download_pending());
        match effect {
            Effect::Notify(n) => {
                assert_eq!(n.severity(), Severity::Success);
                assert_eq!(n.message_key(), Some("notification-download-success"));
            }
            other => panic!("expected Notify, got {other:?}"),
        }
    }

    #[test]
    fn failed_download_clears_pending_and_reports_message() {
        let mut state = item("cat.jpg");
        let liked = LikedSet::new();
        let user = user();
        let ctx = ItemContext {
            liked: &liked,
            disabled: false,
            user: Some(&user),
        };
        let Effect::Download { ticket, .. } = state.handle(Message::Download, &ctx) else {
            panic!("expected Download");
        };

        let effect = state.handle(
            Message::DownloadSettled {
                ticket,
                result: Err(ActionError::unknown()),
            },
            &ctx,
        );
        assert!(!state.is_download_pending());
        match effect {
            Effect::Notify(n) => {
                assert_eq!(n.severity(), Severity::Error);
                assert_eq!(n.message_text(), Some("Something went wrong"));
            }
            other => panic!("expected Notify, got {other:?}"),
        }
    }

    #[test]
    fn stale_settlement_is_dropped() {
        let mut old = item("cat.jpg");
        let liked = LikedSet::new();
        let user = user();
        let ctx = ItemContext {
            liked: &liked,
            disabled: false,
            user: Some(&user),
        };
        let Effect::Download { ticket, .. } = old.handle(Message::Download, &ctx) else {
            panic!("expected Download");
        };

        let mut replacement = item("cat.jpg");
        let effect = replacement.handle(
            Message::DownloadSettled {
                ticket,
                result: Ok(PathBuf::from("/tmp/x.jpg")),
            },
            &ctx,
        );
        assert!(matches!(effect, Effect::None));
    }

    #[test]
    fn preview_opens_and_closes() {
        let mut state = item("cat.jpg");
        let liked = LikedSet::new();
        let ctx = ItemContext {
            liked: &liked,
            disabled: false,
            user: None,
        };
        state.handle(Message::OpenPreview, &ctx);
        assert!(state.is_preview_open());
        state.handle(Message::ClosePreview, &ctx);
        assert!(!state.is_preview_open());
    }
}
