// SPDX-License-Identifier: MPL-2.0
//! Modal lightbox overlay.
//!
//! Clicking the dimmed backdrop closes it; clicks on the picture itself are
//! swallowed so they never reach the backdrop.

use crate::gallery::Lightbox;
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::AnimatedSpinner;
use iced::widget::{button, image, mouse_area, opaque, Column, Container, Row, Space, Stack, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    ContentFit, Element, Length,
};

pub struct ViewContext<'a> {
    pub lightbox: &'a Lightbox,
    pub spinner_rotation: f32,
}

#[derive(Debug, Clone)]
pub enum Message {
    Previous,
    Next,
    Close,
}

/// Renders the overlay, or nothing while the lightbox is closed.
pub fn view<'a>(ctx: ViewContext<'a>) -> Option<Element<'a, Message>> {
    if !ctx.lightbox.is_open() {
        return None;
    }

    let backdrop = mouse_area(
        Container::new(Space::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::overlay::backdrop),
    )
    .on_release(Message::Close);

    let picture: Element<'a, Message> = match ctx.lightbox.handle() {
        Some(handle) => image(handle.clone())
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        None => Space::new().width(Length::Fill).height(Length::Fill).into(),
    };

    let caption = Container::new(Text::new(ctx.lightbox.caption()).size(typography::BODY_LG))
        .padding([spacing::XS, spacing::MD])
        .style(styles::overlay::caption);

    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(opaque(picture))
        .push(opaque(caption));

    let arrow = |glyph: &'static str, message: Message| {
        button(Text::new(glyph).size(typography::DISPLAY))
            .on_press(message)
            .width(Length::Fixed(sizing::LIGHTBOX_ARROW))
            .style(styles::button::overlay(
                palette::WHITE,
                opacity::OVERLAY_MEDIUM,
                opacity::OVERLAY_STRONG,
            ))
    };

    let controls = Row::new()
        .align_y(Vertical::Center)
        .padding(spacing::LG)
        .push(arrow("‹", Message::Previous))
        .push(
            Container::new(content)
                .width(Length::Fill)
                .height(Length::Fill)
                .padding([spacing::XXL, spacing::LG])
                .align_x(Horizontal::Center)
                .align_y(Vertical::Center),
        )
        .push(arrow("›", Message::Next));

    let close = Container::new(
        button(Text::new("✕").size(typography::TITLE_LG))
            .on_press(Message::Close)
            .style(styles::button::overlay(
                palette::WHITE,
                opacity::TRANSPARENT,
                opacity::OVERLAY_MEDIUM,
            )),
    )
    .width(Length::Fill)
    .align_x(Horizontal::Right)
    .padding(spacing::MD);

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(backdrop)
        .push(controls)
        .push(close);

    if ctx.lightbox.is_loading() {
        layers = layers.push(
            Container::new(AnimatedSpinner::new(palette::CREAM, ctx.spinner_rotation).into_element())
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(Horizontal::Center)
                .align_y(Vertical::Center),
        );
    }

    Some(layers.into())
}
