// SPDX-License-Identifier: MPL-2.0
//! Rendering of the account dialog.

use super::form::{Form, Message};
use crate::domain::auth::{AuthMode, Field};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::AnimatedSpinner;
use iced::widget::{button, mouse_area, opaque, text_input, Column, Container, Row, Stack, Text};
use iced::{alignment, Element, Length};

/// Contextual data needed to render the dialog.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub spinner_rotation: f32,
}

/// Renders the dialog over a dimmed backdrop. Clicking the backdrop closes it.
pub fn view<'a>(form: &'a Form, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let header = Row::new()
        .align_y(alignment::Vertical::Center)
        .push(
            Text::new(i18n.tr("auth-title"))
                .size(typography::TITLE_MD)
                .width(Length::Fill),
        )
        .push(
            button(Text::new("✕").size(typography::BODY))
                .on_press(Message::Close)
                .padding(spacing::XXS)
                .style(styles::button::link),
        );

    let subtitle = Text::new(i18n.tr(match form.mode() {
        AuthMode::SignIn => "auth-subtitle-sign-in",
        AuthMode::SignUp => "auth-subtitle-sign-up",
    }))
    .size(typography::BODY_SM);

    let email = text_input(&i18n.tr("auth-email-placeholder"), form.email())
        .on_input(Message::EmailChanged)
        .on_submit(Message::Submit)
        .padding(spacing::XS);

    let password = text_input(&i18n.tr("auth-password-placeholder"), form.password())
        .secure(true)
        .on_input(Message::PasswordChanged)
        .on_submit(Message::Submit)
        .padding(spacing::XS);

    let mut content = Column::new()
        .spacing(spacing::SM)
        .push(header)
        .push(subtitle)
        .push(labeled(i18n.tr("auth-email-label"), email.into(), field_error(form, Field::Email, i18n)))
        .push(labeled(
            i18n.tr("auth-password-label"),
            password.into(),
            field_error(form, Field::Password, i18n),
        ));

    if let Some(error) = form.root_error() {
        content = content.push(
            Container::new(Text::new(error.user_message().to_string()).size(typography::BODY_SM))
                .width(Length::Fill)
                .padding(spacing::XS)
                .style(styles::container::error_banner),
        );
    }

    content = content
        .push(submit_button(form, ctx))
        .push(mode_switch(form.mode(), i18n));

    let dialog = Container::new(content)
        .width(Length::Fixed(sizing::DIALOG_WIDTH))
        .padding(spacing::LG)
        .style(styles::container::dialog);

    let backdrop = mouse_area(
        Container::new(Text::new(""))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::backdrop(opacity::OVERLAY_MEDIUM)),
    )
    .on_press(Message::Close);

    Stack::new()
        .push(backdrop)
        .push(
            Container::new(opaque(dialog))
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Center)
                .align_y(alignment::Vertical::Center),
        )
        .into()
}

fn labeled<'a>(
    label: String,
    input: Element<'a, Message>,
    error: Option<Element<'a, Message>>,
) -> Element<'a, Message> {
    let mut column = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(label).size(typography::BODY_SM))
        .push(input);
    if let Some(error) = error {
        column = column.push(error);
    }
    column.into()
}

fn field_error<'a>(form: &Form, field: Field, i18n: &I18n) -> Option<Element<'a, Message>> {
    let error = form.field_errors().get(field)?;
    Some(
        Text::new(i18n.tr(error.i18n_key()))
            .size(typography::CAPTION)
            .color(palette::ERROR_500)
            .into(),
    )
}

fn submit_button<'a>(form: &Form, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let label_key = match form.mode() {
        AuthMode::SignIn => "auth-submit-sign-in",
        AuthMode::SignUp => "auth-submit-sign-up",
    };

    let mut label = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(Text::new(ctx.i18n.tr(label_key)).size(typography::BODY));

    if form.is_pending() {
        label = label.push(
            AnimatedSpinner::new(palette::WHITE, ctx.spinner_rotation)
                .size(sizing::ICON_SM)
                .into_element(),
        );
    }

    button(
        Container::new(label)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center),
    )
    .width(Length::Fill)
    .height(Length::Fixed(sizing::BUTTON_HEIGHT))
    .on_press_maybe((!form.is_pending()).then_some(Message::Submit))
    .style(styles::button::primary)
    .into()
}

fn mode_switch<'a>(mode: AuthMode, i18n: &I18n) -> Element<'a, Message> {
    let (prompt_key, action_key) = match mode {
        AuthMode::SignIn => ("auth-switch-to-sign-up-prompt", "auth-switch-to-sign-up"),
        AuthMode::SignUp => ("auth-switch-to-sign-in-prompt", "auth-switch-to-sign-in"),
    };

    Row::new()
        .spacing(spacing::XXS)
        .align_y(alignment::Vertical::Center)
        .push(Text::new(i18n.tr(prompt_key)).size(typography::BODY_SM))
        .push(
            button(Text::new(i18n.tr(action_key)).size(typography::BODY_SM))
                .on_press(Message::SwitchMode)
                .padding(0.0)
                .style(styles::button::link),
        )
        .into()
}
