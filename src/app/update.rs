// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Component controllers return effects; the handlers here turn them into
//! remote calls (`Task::perform`) and into changes of the state the shell
//! owns: session, liked set, modal and notifications.

use super::session::Session;
use super::Message;
use crate::application::auth;
use crate::application::download::{self, DownloadPorts};
use crate::application::port::Ports;
use crate::domain::auth::{AuthMode, User};
use crate::domain::gallery::{ImageId, ImageRecord, LikedSet};
use crate::error::ActionError;
use crate::ui::auth_modal::{form, Form, ModalState};
use crate::ui::gallery::{self, item};
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::notifications::{self, Notification};
use crate::ui::state::Ticket;
use crate::ui::widgets::animated_spinner;
use iced::Task;
use std::sync::Arc;

/// Mutable view of the application state handed to the handlers.
pub struct UpdateContext<'a> {
    pub ports: &'a Ports,
    pub session: &'a mut Session,
    pub liked: &'a mut LikedSet,
    pub gallery: &'a mut gallery::State,
    pub modal: &'a mut ModalState,
    pub auth_form: &'a mut Form,
    pub notifications: &'a mut notifications::Manager,
    pub spinner_rotation: &'a mut f32,
}

// =============================================================================
// Remote calls
// =============================================================================

/// Loads the session, the gallery and the liked ids concurrently.
pub fn load_everything(ports: &Ports) -> Task<Message> {
    Task::batch([
        refresh_session(ports),
        Task::perform(ports.images.list_images(), Message::ImagesLoaded),
    ])
}

/// Re-reads the current user and the liked ids.
pub fn refresh_session(ports: &Ports) -> Task<Message> {
    Task::batch([
        Task::perform(ports.auth.current_user(), Message::UserLoaded),
        Task::perform(ports.images.liked_ids(), Message::LikedLoaded),
    ])
}

fn fetch_images(ports: &Ports, locations: Vec<String>) -> Task<Message> {
    Task::batch(locations.into_iter().map(|location| {
        let fetch = ports.fetcher.fetch(location.clone());
        Task::perform(fetch, move |result| {
            Message::Gallery(gallery::Message::ImageLoaded { location, result })
        })
    }))
}

fn start_download(ports: &Ports, ticket: Ticket, record: ImageRecord) -> Task<Message> {
    let download_ports = DownloadPorts {
        images: Arc::clone(&ports.images),
        fetcher: Arc::clone(&ports.fetcher),
        saver: Arc::clone(&ports.saver),
    };
    let id = record.id.clone();
    Task::perform(download::download_image(download_ports, record), move |result| {
        Message::Gallery(gallery::Message::Item(
            id,
            item::Message::DownloadSettled { ticket, result },
        ))
    })
}

// =============================================================================
// Shared transitions
// =============================================================================

/// Shows the account dialog in `mode`. A form left in another mode is
/// replaced; one in the same mode keeps what the user typed.
pub fn open_auth_modal(ctx: &mut UpdateContext<'_>, mode: AuthMode) {
    if ctx.auth_form.mode() != mode {
        *ctx.auth_form = Form::new(mode);
    }
    ctx.modal.open(mode);
}

// =============================================================================
// Component messages
// =============================================================================

pub fn handle_navbar_message(ctx: &mut UpdateContext<'_>, message: navbar::Message) -> Task<Message> {
    match navbar::update(message) {
        NavbarEvent::OpenAuth(mode) => {
            open_auth_modal(ctx, mode);
            Task::none()
        }
        NavbarEvent::SignOut => {
            if !ctx.session.begin_sign_out() {
                return Task::none();
            }
            tracing::info!("signing out");
            Task::perform(ctx.ports.auth.sign_out(), Message::SignedOut)
        }
    }
}

pub fn handle_gallery_message(
    ctx: &mut UpdateContext<'_>,
    message: gallery::Message,
) -> Task<Message> {
    let effect = ctx.gallery.handle(
        message,
        gallery::Context {
            liked: ctx.liked,
            user: ctx.session.user(),
        },
    );
    apply_item_effect(ctx, effect)
}

fn apply_item_effect(ctx: &mut UpdateContext<'_>, effect: item::Effect) -> Task<Message> {
    match effect {
        item::Effect::None => Task::none(),
        item::Effect::ToggleLike { id, is_liked } => toggle_like(ctx, id, is_liked),
        item::Effect::Download { ticket, record } => start_download(ctx.ports, ticket, record),
        item::Effect::Notify(notification) => {
            ctx.notifications.push(notification);
            Task::none()
        }
    }
}

fn toggle_like(ctx: &mut UpdateContext<'_>, id: ImageId, is_liked: bool) -> Task<Message> {
    if !ctx.session.is_signed_in() {
        open_auth_modal(ctx, AuthMode::SignIn);
        return Task::none();
    }
    let Some(ticket) = ctx.gallery.begin_like(&id) else {
        return Task::none();
    };

    let liked = !is_liked;
    tracing::info!(%id, liked, "updating like");
    let request = ctx.ports.images.set_liked(id.clone(), liked);
    Task::perform(request, move |result| Message::LikeSettled {
        id,
        ticket,
        liked,
        result,
    })
}

pub fn handle_auth_form_message(ctx: &mut UpdateContext<'_>, message: form::Message) -> Task<Message> {
    let effect = ctx.auth_form.handle(message);
    apply_form_effect(ctx, effect)
}

fn apply_form_effect(ctx: &mut UpdateContext<'_>, effect: form::Effect) -> Task<Message> {
    match effect {
        form::Effect::None => Task::none(),
        form::Effect::Submit {
            ticket,
            mode,
            credentials,
        } => Task::perform(auth::submit(&ctx.ports.auth, mode, credentials), move |result| {
            Message::AuthSettled {
                ticket,
                mode,
                result,
            }
        }),
        form::Effect::SwitchMode(mode) => {
            ctx.modal.change_mode(mode.is_sign_in());
            *ctx.auth_form = Form::new(ctx.modal.mode());
            Task::none()
        }
        form::Effect::Close => {
            ctx.modal.close();
            Task::none()
        }
        form::Effect::Succeeded(mode) => {
            tracing::info!(mode = mode.as_str(), "account action succeeded");
            ctx.modal.close();
            ctx.notifications.push(Notification::success(mode.success_key()));
            Task::none()
        }
        form::Effect::Notify(notification) => {
            ctx.notifications.push(notification);
            Task::none()
        }
    }
}

// =============================================================================
// Settlements
// =============================================================================

pub fn handle_images_loaded(
    ctx: &mut UpdateContext<'_>,
    result: Result<Vec<ImageRecord>, ActionError>,
) -> Task<Message> {
    match result {
        Ok(records) => {
            tracing::info!(count = records.len(), "gallery loaded");
            ctx.gallery.set_records(records, ctx.ports.resolver.as_ref());
            let locations = ctx.gallery.take_image_requests();
            fetch_images(ctx.ports, locations)
        }
        Err(err) => {
            ctx.gallery.mark_loaded();
            ctx.notifications.push(Notification::error_text(err.user_message()));
            Task::none()
        }
    }
}

pub fn handle_liked_loaded(ctx: &mut UpdateContext<'_>, result: Result<Vec<ImageId>, ActionError>) {
    match result {
        Ok(ids) => *ctx.liked = ids.into_iter().collect(),
        Err(err) => tracing::warn!("failed to load liked images: {err}"),
    }
}

pub fn handle_user_loaded(ctx: &mut UpdateContext<'_>, result: Result<Option<User>, ActionError>) {
    match result {
        Ok(user) => {
            if user.is_none() {
                ctx.liked.clear();
                ctx.gallery.forget_likes();
            }
            ctx.session.set_user(user);
        }
        Err(err) => tracing::warn!("failed to load the current user: {err}"),
    }
}

/// Applies a like outcome. Requests forgotten at sign-out are dropped, so
/// a signed-out user never sees a like land.
pub fn handle_like_settled(
    ctx: &mut UpdateContext<'_>,
    id: ImageId,
    ticket: Ticket,
    liked: bool,
    result: Result<(), ActionError>,
) {
    if !ctx.gallery.finish_like(&id, ticket) {
        tracing::debug!(%id, "dropping stale like settlement");
        return;
    }
    match result {
        Ok(()) => ctx.liked.set(id, liked),
        Err(err) => {
            ctx.notifications.push(Notification::error_text(err.user_message()));
        }
    }
}

/// Routes an account settlement to the form that submitted it.
///
/// When that form has been replaced (the user switched mode while the
/// request was in flight) only its local state is gone: a success still
/// refreshes the session, closes the dialog and shows the success toast for
/// `mode`, and a failure still shows the error toast.
pub fn handle_auth_settled(
    ctx: &mut UpdateContext<'_>,
    ticket: Ticket,
    mode: AuthMode,
    result: Result<(), ActionError>,
) -> Task<Message> {
    let refresh = if result.is_ok() {
        refresh_session(ctx.ports)
    } else {
        Task::none()
    };
    let effect = if ctx.auth_form.pending_ticket() == Some(ticket) {
        ctx.auth_form.handle(form::Message::Settled { ticket, result })
    } else {
        tracing::debug!(mode = mode.as_str(), "settlement for a replaced form");
        match result {
            Ok(()) => form::Effect::Succeeded(mode),
            Err(err) => form::Effect::Notify(Notification::error_text(err.user_message())),
        }
    };
    Task::batch([refresh, apply_form_effect(ctx, effect)])
}

pub fn handle_signed_out(ctx: &mut UpdateContext<'_>, result: Result<(), ActionError>) {
    match result {
        Ok(()) => {
            ctx.session.finish_sign_out(true);
            ctx.liked.clear();
            ctx.gallery.forget_likes();
            ctx.notifications
                .push(Notification::success("notification-sign-out-success"));
        }
        Err(err) => {
            ctx.session.finish_sign_out(false);
            ctx.notifications.push(Notification::error_text(err.user_message()));
        }
    }
}

// =============================================================================
// Runtime events
// =============================================================================

/// Escape closes the account dialog first, then the lightbox.
pub fn handle_escape(ctx: &mut UpdateContext<'_>) {
    if ctx.modal.is_open() {
        ctx.modal.close();
    } else {
        ctx.gallery.close_preview();
    }
}

pub fn handle_tick(ctx: &mut UpdateContext<'_>) {
    ctx.notifications.tick();
    *ctx.spinner_rotation = animated_spinner::next_rotation(*ctx.spinner_rotation);
}
