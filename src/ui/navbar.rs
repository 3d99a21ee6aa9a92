// SPDX-License-Identifier: MPL-2.0
//! Navigation bar: application title and account controls.
//!
//! Anonymous sessions get sign-in and sign-up buttons; signed-in users see
//! their name and a sign-out button.

use crate::domain::auth::{AuthMode, User};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::AnimatedSpinner;
use iced::{
    alignment::Vertical,
    widget::{button, Container, Row, Text},
    Element, Length,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub user: Option<&'a User>,
    /// A sign-out request is in flight.
    pub signing_out: bool,
    pub spinner_rotation: f32,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    OpenSignIn,
    OpenSignUp,
    SignOut,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    OpenAuth(AuthMode),
    SignOut,
}

/// Process a navbar message and return the corresponding event.
#[must_use]
pub fn update(message: Message) -> Event {
    match message {
        Message::OpenSignIn => Event::OpenAuth(AuthMode::SignIn),
        Message::OpenSignUp => Event::OpenAuth(AuthMode::SignUp),
        Message::SignOut => Event::SignOut,
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("navbar-title"))
        .size(typography::TITLE_LG)
        .width(Length::Fill);

    let account: Element<'a, Message> = match ctx.user {
        Some(user) => signed_in_controls(&ctx, user),
        None => Row::new()
            .spacing(spacing::XS)
            .push(
                button(Text::new(ctx.i18n.tr("navbar-sign-up-button")).size(typography::BODY))
                    .on_press(Message::OpenSignUp)
                    .style(styles::button::link),
            )
            .push(
                button(Text::new(ctx.i18n.tr("navbar-sign-in-button")).size(typography::BODY))
                    .on_press(Message::OpenSignIn)
                    .padding([spacing::XXS, spacing::SM])
                    .style(styles::button::primary),
            )
            .into(),
    };

    Container::new(
        Row::new()
            .spacing(spacing::MD)
            .align_y(Vertical::Center)
            .push(title)
            .push(account),
    )
    .width(Length::Fill)
    .padding([spacing::SM, spacing::LG])
    .into()
}

fn signed_in_controls<'a>(ctx: &ViewContext<'a>, user: &'a User) -> Element<'a, Message> {
    let greeting = Text::new(
        ctx.i18n
            .tr_with_args("navbar-signed-in-as", &[("name", user.display_name())]),
    )
    .size(typography::BODY_SM);

    let mut sign_out_label = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(Text::new(ctx.i18n.tr("navbar-sign-out-button")).size(typography::BODY));
    if ctx.signing_out {
        sign_out_label = sign_out_label.push(
            AnimatedSpinner::new(palette::PRIMARY_500, ctx.spinner_rotation)
                .size(sizing::ICON_SM)
                .into_element(),
        );
    }

    Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(greeting)
        .push(
            button(sign_out_label)
                .on_press_maybe((!ctx.signing_out).then_some(Message::SignOut))
                .style(styles::button::link),
        )
        .into()
}
