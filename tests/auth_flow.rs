// SPDX-License-Identifier: MPL-2.0
//! Account form driven through the submit dispatch against a fake backend.

mod common;

use common::{CallLog, FakeAuth};
use pictury::application::auth;
use pictury::application::port::AuthActions;
use pictury::domain::auth::AuthMode;
use pictury::error::ActionError;
use pictury::ui::auth_modal::form::{Effect, Message};
use pictury::ui::auth_modal::{Form, FormPhase, ModalState};
use pictury::ui::notifications::Severity;
use std::sync::Arc;

fn backend(result: Result<(), ActionError>) -> (Arc<CallLog>, Arc<dyn AuthActions>) {
    let log = Arc::new(CallLog::default());
    let auth: Arc<dyn AuthActions> = Arc::new(FakeAuth {
        result,
        log: log.clone(),
    });
    (log, auth)
}

/// Types the credentials, submits, runs the remote call and feeds the
/// settlement back. Returns the settlement effect.
async fn submit_round_trip(
    form: &mut Form,
    auth: &Arc<dyn AuthActions>,
    email: &str,
    password: &str,
) -> Option<Effect> {
    form.handle(Message::EmailChanged(email.to_string()));
    form.handle(Message::PasswordChanged(password.to_string()));

    let Effect::Submit {
        ticket,
        mode,
        credentials,
    } = form.handle(Message::Submit)
    else {
        return None;
    };
    assert_eq!(form.phase(), FormPhase::Pending);

    let result = auth::submit(auth, mode, credentials).await;
    Some(form.handle(Message::Settled { ticket, result }))
}

#[tokio::test]
async fn sign_in_mode_calls_sign_in_only() {
    let (log, auth) = backend(Ok(()));
    let mut form = Form::new(AuthMode::SignIn);

    let effect = submit_round_trip(&mut form, &auth, "ada@example.com", "12345678").await;

    assert!(matches!(effect, Some(Effect::Succeeded(AuthMode::SignIn))));
    assert_eq!(log.all(), vec!["sign_in:ada@example.com".to_string()]);
    assert_eq!(form.email(), "");
    assert_eq!(form.password(), "");
    assert_eq!(form.phase(), FormPhase::Idle);
}

#[tokio::test]
async fn sign_up_mode_calls_sign_up_only() {
    let (log, auth) = backend(Ok(()));
    let mut form = Form::new(AuthMode::SignUp);

    let effect = submit_round_trip(&mut form, &auth, "new@example.com", &"p".repeat(60)).await;

    assert!(matches!(effect, Some(Effect::Succeeded(AuthMode::SignUp))));
    assert_eq!(log.all(), vec!["sign_up:new@example.com".to_string()]);
}

#[tokio::test]
async fn rejected_credentials_surface_as_root_error_and_toast() {
    let (_log, auth) = backend(Err(ActionError::new("Invalid credentials")));
    let mut form = Form::new(AuthMode::SignIn);

    let effect = submit_round_trip(&mut form, &auth, "ada@example.com", "12345678").await;

    match effect {
        Some(Effect::Notify(notification)) => {
            assert_eq!(notification.severity(), Severity::Error);
            assert_eq!(notification.message_text(), Some("Invalid credentials"));
        }
        other => panic!("expected an error notification, got {other:?}"),
    }
    assert_eq!(
        form.root_error().map(ActionError::user_message),
        Some("Invalid credentials")
    );
    assert_eq!(form.email(), "ada@example.com");
    assert_eq!(form.password(), "12345678");
}

#[tokio::test]
async fn invalid_input_makes_no_remote_call() {
    let (log, auth) = backend(Ok(()));
    let too_long = "x".repeat(61);

    for (email, password) in [
        ("not-an-email", "12345678"),
        ("a@b.co", "1234567"),
        ("a@b.co", too_long.as_str()),
    ] {
        let mut form = Form::new(AuthMode::SignIn);
        let effect = submit_round_trip(&mut form, &auth, email, password).await;
        assert!(effect.is_none(), "{email:?}/{} should be rejected", password.len());
        assert!(!form.field_errors().is_empty());
    }
    assert!(log.all().is_empty());
}

#[tokio::test]
async fn switching_mode_after_a_failure_starts_clean() {
    let (_log, auth) = backend(Err(ActionError::new("Invalid credentials")));
    let mut modal = ModalState::default();
    modal.open(AuthMode::SignIn);
    let mut form = Form::new(modal.mode());

    submit_round_trip(&mut form, &auth, "ada@example.com", "12345678").await;
    assert!(form.root_error().is_some());

    if let Effect::SwitchMode(mode) = form.handle(Message::SwitchMode) {
        modal.change_mode(mode.is_sign_in());
        form = Form::new(modal.mode());
    }

    assert_eq!(modal.mode(), AuthMode::SignUp);
    assert!(modal.is_open());
    assert!(form.root_error().is_none());
    assert_eq!(form.email(), "");
}
