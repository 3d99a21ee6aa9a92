// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The gallery page sits under the navbar; the lightbox, the account dialog
//! and the toasts are stacked on top of it in that order.

use super::session::Session;
use super::Message;
use crate::domain::gallery::LikedSet;
use crate::i18n::fluent::I18n;
use crate::ui::auth_modal::{self, Form, ModalState};
use crate::ui::gallery::{self, Context as GalleryContext, ViewContext as GalleryViewContext};
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::notifications::{self, Toast};
use iced::widget::{Column, Container, Stack};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub session: &'a Session,
    pub liked: &'a LikedSet,
    pub gallery: &'a gallery::State,
    pub modal: &'a ModalState,
    pub auth_form: &'a Form,
    pub notifications: &'a notifications::Manager,
    pub spinner_rotation: f32,
}

/// Renders the page and its overlays.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let navbar_view = navbar::view(NavbarViewContext {
        i18n: ctx.i18n,
        user: ctx.session.user(),
        signing_out: ctx.session.is_signing_out(),
        spinner_rotation: ctx.spinner_rotation,
    })
    .map(Message::Navbar);

    let gallery_ctx = GalleryViewContext {
        i18n: ctx.i18n,
        context: GalleryContext {
            liked: ctx.liked,
            user: ctx.session.user(),
        },
        spinner_rotation: ctx.spinner_rotation,
    };

    let page = Column::new()
        .push(navbar_view)
        .push(ctx.gallery.view(&gallery_ctx).map(Message::Gallery))
        .width(Length::Fill)
        .height(Length::Fill);

    let mut stack = Stack::new().push(
        Container::new(page)
            .width(Length::Fill)
            .height(Length::Fill),
    );

    if let Some(preview) = ctx.gallery.view_preview(&gallery_ctx) {
        stack = stack.push(preview.map(Message::Gallery));
    }

    if ctx.modal.is_open() {
        let dialog = auth_modal::view::view(
            ctx.auth_form,
            &auth_modal::ViewContext {
                i18n: ctx.i18n,
                spinner_rotation: ctx.spinner_rotation,
            },
        );
        stack = stack.push(dialog.map(Message::AuthForm));
    }

    stack
        .push(Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
