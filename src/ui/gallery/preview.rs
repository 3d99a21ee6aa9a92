// SPDX-License-Identifier: MPL-2.0
//! Lightbox showing one gallery image at full size.
//!
//! Clicking the dimmed backdrop closes it; the panel is opaque, so clicks on
//! the image or caption keep it open. The download button only appears
//! for signed-in users and is disabled while a download is pending.

use super::item::{self, Message, State};
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::AnimatedSpinner;
use iced::widget::{button, mouse_area, opaque, Column, Container, Row, Stack, Text};
use iced::{alignment, ContentFit, Element, Length};

/// Renders the lightbox for `state`.
pub fn view<'a>(state: &'a State, ctx: &item::ViewContext<'a>) -> Element<'a, Message> {
    let picture = item::picture(
        ctx.picture,
        ctx.i18n,
        ContentFit::Contain,
        Length::Fill,
    );

    let close_button = button(Text::new(ctx.i18n.tr("preview-close-button")).size(typography::BODY))
        .on_press(Message::ClosePreview)
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::overlay(
            palette::WHITE,
            opacity::OVERLAY_MEDIUM,
            opacity::OVERLAY_HOVER,
        ));

    let mut actions = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center);

    if ctx.item.can_download() {
        actions = actions.push(download_button(state, ctx));
    }
    actions = actions.push(close_button);

    let caption = Column::new()
        .spacing(spacing::XXS)
        .push(
            Text::new(state.record().title.as_str())
                .size(typography::TITLE_MD)
                .color(palette::WHITE),
        )
        .push(
            Text::new(state.record().description.as_str())
                .size(typography::BODY_SM)
                .color(palette::GRAY_200),
        );

    let footer = Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .push(Container::new(caption).width(Length::Fill))
        .push(actions);

    let panel = Column::new()
        .spacing(spacing::MD)
        .push(Container::new(picture).width(Length::Fill).height(Length::Fill))
        .push(footer);

    let backdrop = mouse_area(
        Container::new(Text::new(""))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::backdrop(opacity::OVERLAY_STRONG)),
    )
    .on_press(Message::ClosePreview);

    Stack::new()
        .push(backdrop)
        .push(
            Container::new(opaque(panel))
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(spacing::XL),
        )
        .into()
}

fn download_button<'a>(state: &State, ctx: &item::ViewContext<'a>) -> Element<'a, Message> {
    let pending = state.is_download_pending();
    let mut label = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(Text::new(ctx.i18n.tr("preview-download-button")).size(typography::BODY));

    if pending {
        label = label.push(
            AnimatedSpinner::new(palette::WHITE, ctx.spinner_rotation)
                .size(sizing::ICON_SM)
                .into_element(),
        );
    }

    button(label)
        .on_press_maybe((!pending).then_some(Message::Download))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::primary)
        .into()
}
