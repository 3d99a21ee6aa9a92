// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the gallery and the
//! account dialog.
//!
//! The `App` struct owns the session, the liked set and the component
//! states, and translates component effects into remote calls. Remote work
//! goes through the [`Ports`] wired at startup, so the whole shell can run
//! against in-memory fakes.

mod message;
pub mod paths;
mod session;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use session::Session;

use crate::application::port::Ports;
use crate::config::{self, Config};
use crate::domain::gallery::LikedSet;
use crate::error::Result;
use crate::i18n::fluent::I18n;
use crate::infrastructure;
use crate::ui::auth_modal::{Form, ModalState};
use crate::ui::gallery;
use crate::ui::notifications;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    theme_mode: ThemeMode,
    ports: Ports,
    session: Session,
    /// Ids the current user has liked.
    liked: LikedSet,
    gallery: gallery::State,
    modal: ModalState,
    auth_form: Form,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
    spinner_rotation: f32,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("signed_in", &self.session.is_signed_in())
            .field("images", &self.gallery.items().len())
            .field("modal_open", &self.modal.is_open())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1024;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 520;

/// Everything `App::new` needs, resolved before the event loop starts.
#[derive(Debug, Clone)]
pub struct Startup {
    pub config: Config,
    /// i18n key of a config loading warning to show once the window is up.
    pub config_warning: Option<String>,
    pub lang: Option<String>,
    pub ports: Ports,
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
///
/// # Errors
///
/// Fails when the backend adapters cannot be built from the configuration
/// or when the windowing runtime reports an error.
pub fn run(flags: Flags) -> Result<()> {
    let (mut config, config_warning) = config::load();
    if let Some(api_url) = flags.api_url.clone() {
        config.server.api_url = api_url;
    }
    let ports = infrastructure::production_ports(&config)?;

    let startup = Startup {
        config,
        config_warning,
        lang: flags.lang,
        ports,
    };

    // iced 0.14 requires an `Fn` boot function
    let boot = move || App::new(startup.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()?;
    Ok(())
}

impl App {
    /// Initializes application state and starts loading the session and the
    /// gallery.
    pub fn new(startup: Startup) -> (Self, Task<Message>) {
        let Startup {
            config,
            config_warning,
            lang,
            ports,
        } = startup;

        let mut app = App {
            i18n: I18n::new(lang, &config),
            theme_mode: config.general.theme_mode,
            ports,
            session: Session::default(),
            liked: LikedSet::new(),
            gallery: gallery::State::default(),
            modal: ModalState::default(),
            auth_form: Form::default(),
            notifications: notifications::Manager::new(),
            spinner_rotation: 0.0,
        };

        if let Some(key) = config_warning {
            app.notifications
                .push(notifications::Notification::warning(&key));
        }

        let task = update::load_everything(&app.ports);
        (app, task)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    /// Whether anything on screen animates or expires.
    fn needs_tick(&self) -> bool {
        self.notifications.has_notifications()
            || !self.gallery.is_loaded()
            || self.gallery.has_pending_downloads()
            || self.auth_form.is_pending()
            || self.session.is_signing_out()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(self.needs_tick()),
        ])
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            ports: &self.ports,
            session: &mut self.session,
            liked: &mut self.liked,
            gallery: &mut self.gallery,
            modal: &mut self.modal,
            auth_form: &mut self.auth_form,
            notifications: &mut self.notifications,
            spinner_rotation: &mut self.spinner_rotation,
        };

        match message {
            Message::Navbar(navbar_message) => update::handle_navbar_message(&mut ctx, navbar_message),
            Message::Gallery(gallery_message) => {
                update::handle_gallery_message(&mut ctx, gallery_message)
            }
            Message::AuthForm(form_message) => {
                update::handle_auth_form_message(&mut ctx, form_message)
            }
            Message::Notification(notification_message) => {
                ctx.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::ImagesLoaded(result) => update::handle_images_loaded(&mut ctx, result),
            Message::LikedLoaded(result) => {
                update::handle_liked_loaded(&mut ctx, result);
                Task::none()
            }
            Message::UserLoaded(result) => {
                update::handle_user_loaded(&mut ctx, result);
                Task::none()
            }
            Message::LikeSettled {
                id,
                ticket,
                liked,
                result,
            } => {
                update::handle_like_settled(&mut ctx, id, ticket, liked, result);
                Task::none()
            }
            Message::AuthSettled {
                ticket,
                mode,
                result,
            } => update::handle_auth_settled(&mut ctx, ticket, mode, result),
            Message::SignedOut(result) => {
                update::handle_signed_out(&mut ctx, result);
                Task::none()
            }
            Message::Tick(_now) => {
                update::handle_tick(&mut ctx);
                Task::none()
            }
            Message::EscapePressed => {
                update::handle_escape(&mut ctx);
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            session: &self.session,
            liked: &self.liked,
            gallery: &self.gallery,
            modal: &self.modal,
            auth_form: &self.auth_form,
            notifications: &self.notifications,
            spinner_rotation: self.spinner_rotation,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::auth::AuthMode;
    use crate::error::ActionError;
    use crate::test_utils::{record, signed_in_user, FakeBackend};
    use crate::ui::auth_modal::form;
    use crate::ui::gallery::item;
    use crate::ui::navbar;
    use crate::ui::notifications::Severity;
    use std::sync::Arc;

    fn app_with(backend: &Arc<FakeBackend>) -> App {
        let (app, _task) = App::new(Startup {
            config: Config::default(),
            config_warning: None,
            lang: Some("en-US".to_string()),
            ports: backend.ports(),
        });
        app
    }

    fn fill_and_submit(app: &mut App, email: &str, password: &str) {
        let _ = app.update(Message::AuthForm(form::Message::EmailChanged(email.to_string())));
        let _ = app.update(Message::AuthForm(form::Message::PasswordChanged(password.to_string())));
        let _ = app.update(Message::AuthForm(form::Message::Submit));
    }

    fn settle_auth(app: &mut App, result: std::result::Result<(), ActionError>) {
        let ticket = app.auth_form.pending_ticket().expect("submission in flight");
        let mode = app.auth_form.mode();
        let _ = app.update(Message::AuthSettled {
            ticket,
            mode,
            result,
        });
    }

    fn toggle_like(app: &mut App, id: &str) {
        let _ = app.update(Message::Gallery(gallery::Message::Item(
            id.into(),
            item::Message::ToggleLike,
        )));
    }

    #[test]
    fn startup_requests_session_and_gallery() {
        let backend = FakeBackend::new();
        let _app = app_with(&backend);
        let calls = backend.calls();
        assert!(calls.contains(&"current_user".to_string()));
        assert!(calls.contains(&"list_images".to_string()));
        assert!(calls.contains(&"liked_ids".to_string()));
    }

    #[test]
    fn config_warning_is_shown_as_a_toast() {
        let backend = FakeBackend::new();
        let (app, _task) = App::new(Startup {
            config: Config::default(),
            config_warning: Some("notification-config-load-error".to_string()),
            lang: None,
            ports: backend.ports(),
        });
        let shown: Vec<_> = app.notifications.all().collect();
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].severity(), Severity::Warning);
    }

    #[test]
    fn successful_sign_in_closes_the_dialog_with_one_success_toast() {
        let backend = FakeBackend::new();
        let mut app = app_with(&backend);

        let _ = app.update(Message::Navbar(navbar::Message::OpenSignIn));
        assert!(app.modal.is_open());
        fill_and_submit(&mut app, "ada@example.com", "12345678");
        assert!(backend.calls().contains(&"sign_in:ada@example.com".to_string()));

        settle_auth(&mut app, Ok(()));

        assert!(!app.modal.is_open());
        assert_eq!(app.auth_form.email(), "");
        assert_eq!(app.auth_form.password(), "");
        let shown: Vec<_> = app.notifications.all().collect();
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].severity(), Severity::Success);
        assert_eq!(shown[0].message_key(), Some("notification-sign-in-success"));
    }

    #[test]
    fn sign_up_dispatches_to_the_sign_up_action() {
        let backend = FakeBackend::new();
        let mut app = app_with(&backend);

        let _ = app.update(Message::Navbar(navbar::Message::OpenSignUp));
        fill_and_submit(&mut app, "new@example.com", "12345678");

        assert!(backend.calls().contains(&"sign_up:new@example.com".to_string()));
        settle_auth(&mut app, Ok(()));
        let shown: Vec<_> = app.notifications.all().collect();
        assert_eq!(shown[0].message_key(), Some("notification-sign-up-success"));
    }

    #[test]
    fn failed_sign_in_keeps_the_dialog_open_with_the_error() {
        let backend = FakeBackend::new();
        backend.fail_auth("Invalid credentials");
        let mut app = app_with(&backend);

        let _ = app.update(Message::Navbar(navbar::Message::OpenSignIn));
        fill_and_submit(&mut app, "ada@example.com", "12345678");
        settle_auth(&mut app, Err(ActionError::new("Invalid credentials")));

        assert!(app.modal.is_open());
        assert_eq!(
            app.auth_form.root_error().and_then(ActionError::message),
            Some("Invalid credentials")
        );
        assert_eq!(app.auth_form.email(), "ada@example.com");
        let shown: Vec<_> = app.notifications.all().collect();
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].severity(), Severity::Error);
        assert_eq!(shown[0].message_text(), Some("Invalid credentials"));
    }

    #[test]
    fn invalid_input_never_reaches_the_backend() {
        let backend = FakeBackend::new();
        let mut app = app_with(&backend);

        let _ = app.update(Message::Navbar(navbar::Message::OpenSignIn));
        fill_and_submit(&mut app, "not-an-email", "short");

        assert!(!backend.calls().iter().any(|call| call.starts_with("sign_in")));
        assert!(!app.auth_form.is_pending());
    }

    #[test]
    fn switching_mode_clears_the_root_error() {
        let backend = FakeBackend::new();
        let mut app = app_with(&backend);

        let _ = app.update(Message::Navbar(navbar::Message::OpenSignIn));
        fill_and_submit(&mut app, "ada@example.com", "12345678");
        settle_auth(&mut app, Err(ActionError::new("Invalid credentials")));
        assert!(app.auth_form.root_error().is_some());

        let _ = app.update(Message::AuthForm(form::Message::SwitchMode));

        assert_eq!(app.modal.mode(), AuthMode::SignUp);
        assert_eq!(app.auth_form.mode(), AuthMode::SignUp);
        assert!(app.auth_form.root_error().is_none());
        assert!(app.modal.is_open());
    }

    #[test]
    fn liking_without_a_session_opens_the_sign_in_dialog() {
        let backend = FakeBackend::new();
        let mut app = app_with(&backend);
        let _ = app.update(Message::ImagesLoaded(Ok(vec![record("1")])));

        let _ = app.update(Message::Gallery(gallery::Message::Item(
            "1".into(),
            item::Message::ToggleLike,
        )));

        assert!(app.modal.is_open());
        assert_eq!(app.modal.mode(), AuthMode::SignIn);
        assert!(!backend.calls().iter().any(|call| call.starts_with("set_liked")));
    }

    #[test]
    fn liking_with_a_session_updates_the_liked_set_on_success() {
        let backend = FakeBackend::new();
        let mut app = app_with(&backend);
        let _ = app.update(Message::UserLoaded(Ok(Some(signed_in_user()))));
        let _ = app.update(Message::ImagesLoaded(Ok(vec![record("1")])));

        toggle_like(&mut app, "1");
        assert!(backend.calls().contains(&"set_liked:1:true".to_string()));
        let ticket = app.gallery.like_ticket(&"1".into()).expect("like in flight");

        let _ = app.update(Message::LikeSettled {
            id: "1".into(),
            ticket,
            liked: true,
            result: Ok(()),
        });
        assert!(app.liked.contains(&"1".into()));
        assert!(!app.gallery.is_like_in_flight(&"1".into()));
    }

    #[test]
    fn like_settling_after_sign_out_is_dropped() {
        let backend = FakeBackend::new();
        let mut app = app_with(&backend);
        let _ = app.update(Message::UserLoaded(Ok(Some(signed_in_user()))));
        let _ = app.update(Message::ImagesLoaded(Ok(vec![record("1")])));

        toggle_like(&mut app, "1");
        let ticket = app.gallery.like_ticket(&"1".into()).expect("like in flight");
        let _ = app.update(Message::Navbar(navbar::Message::SignOut));
        let _ = app.update(Message::SignedOut(Ok(())));
        assert!(!app.gallery.is_like_in_flight(&"1".into()));

        let _ = app.update(Message::LikeSettled {
            id: "1".into(),
            ticket,
            liked: true,
            result: Ok(()),
        });

        assert!(app.liked.is_empty());
        let shown: Vec<_> = app.notifications.all().collect();
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].message_key(), Some("notification-sign-out-success"));
    }

    #[test]
    fn switching_mode_mid_submission_still_reports_the_outcome() {
        let backend = FakeBackend::new();
        let mut app = app_with(&backend);

        let _ = app.update(Message::Navbar(navbar::Message::OpenSignIn));
        fill_and_submit(&mut app, "ada@example.com", "12345678");
        let ticket = app.auth_form.pending_ticket().expect("submission in flight");
        let _ = app.update(Message::AuthForm(form::Message::SwitchMode));
        assert_eq!(app.auth_form.mode(), AuthMode::SignUp);
        assert!(!app.auth_form.is_pending());

        let _ = app.update(Message::AuthSettled {
            ticket,
            mode: AuthMode::SignIn,
            result: Ok(()),
        });

        assert!(!app.modal.is_open());
        let shown: Vec<_> = app.notifications.all().collect();
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].message_key(), Some("notification-sign-in-success"));
    }

    #[test]
    fn failure_after_a_mode_switch_shows_the_error_toast() {
        let backend = FakeBackend::new();
        let mut app = app_with(&backend);

        let _ = app.update(Message::Navbar(navbar::Message::OpenSignUp));
        fill_and_submit(&mut app, "ada@example.com", "12345678");
        let ticket = app.auth_form.pending_ticket().expect("submission in flight");
        let _ = app.update(Message::AuthForm(form::Message::SwitchMode));

        let _ = app.update(Message::AuthSettled {
            ticket,
            mode: AuthMode::SignUp,
            result: Err(ActionError::new("Email already registered")),
        });

        assert!(app.modal.is_open());
        assert_eq!(app.auth_form.mode(), AuthMode::SignIn);
        assert!(app.auth_form.root_error().is_none());
        let shown: Vec<_> = app.notifications.all().collect();
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].severity(), Severity::Error);
        assert_eq!(shown[0].message_text(), Some("Email already registered"));
    }

    #[test]
    fn galleries_larger_than_the_cache_render_every_image() {
        let backend = FakeBackend::new();
        let mut app = app_with(&backend);
        let count = config::DEFAULT_THUMBNAIL_CACHE_SIZE + 1;
        let records: Vec<_> = (0..count).map(|n| record(&n.to_string())).collect();

        let _ = app.update(Message::ImagesLoaded(Ok(records)));
        for n in 0..count {
            let _ = app.update(Message::Gallery(gallery::Message::ImageLoaded {
                location: format!("https://cdn.test/u1/{n}.jpg"),
                result: Ok(vec![0u8; 4]),
            }));
        }

        assert_eq!(app.gallery.items().len(), count);
        assert!(app
            .gallery
            .items()
            .iter()
            .all(|item| matches!(app.gallery.picture(item), gallery::Picture::Loaded(_))));
    }

    #[test]
    fn escape_closes_the_dialog_before_the_preview() {
        let backend = FakeBackend::new();
        let mut app = app_with(&backend);
        let _ = app.update(Message::ImagesLoaded(Ok(vec![record("1")])));
        let _ = app.update(Message::Gallery(gallery::Message::Item(
            "1".into(),
            item::Message::OpenPreview,
        )));
        let _ = app.update(Message::Navbar(navbar::Message::OpenSignIn));

        let _ = app.update(Message::EscapePressed);
        assert!(!app.modal.is_open());
        assert!(app.gallery.previewing().is_some());

        let _ = app.update(Message::EscapePressed);
        assert!(app.gallery.previewing().is_none());
    }

    #[test]
    fn sign_out_clears_the_session() {
        let backend = FakeBackend::new();
        let mut app = app_with(&backend);
        let _ = app.update(Message::UserLoaded(Ok(Some(signed_in_user()))));
        let _ = app.update(Message::LikedLoaded(Ok(vec!["1".into()])));

        let _ = app.update(Message::Navbar(navbar::Message::SignOut));
        assert!(app.session.is_signing_out());
        let _ = app.update(Message::SignedOut(Ok(())));

        assert!(!app.session.is_signed_in());
        assert!(app.liked.is_empty());
    }
}
