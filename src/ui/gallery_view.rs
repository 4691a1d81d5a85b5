// SPDX-License-Identifier: MPL-2.0
//! Festival card: heading plus the rotating polaroid strip.

use crate::catalog::GalleryId;
use crate::gallery::{Direction, RotationWindow};
use crate::i18n::{I18n, TextKey};
use crate::ui::design_tokens::{opacity, palette::WHITE, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, image, Column, Container, Row, Text};
use iced::{alignment::Vertical, ContentFit, Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub window: &'a RotationWindow,
    /// Thumbnail opacity while a rotation waits on its preloads.
    pub transition_opacity: f32,
}

#[derive(Debug, Clone)]
pub enum Message {
    Rotate(GalleryId, Direction),
    /// A thumbnail was clicked; carries the slot position in the strip.
    OpenSlot(GalleryId, usize),
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let id = ctx.window.gallery();

    let mut heading = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(Text::new(ctx.i18n.tr(id.title_key())).size(typography::TITLE_SM));
    if id.upcoming() {
        heading = heading.push(
            Container::new(Text::new(ctx.i18n.tr(TextKey::BadgeComing)).size(typography::CAPTION))
                .padding([spacing::XXS, spacing::XS])
                .style(styles::container::badge),
        );
    }

    let opacity = if ctx.window.is_transitioning() {
        ctx.transition_opacity
    } else {
        opacity::OPAQUE
    };

    let mut strip = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(arrow("‹", Message::Rotate(id, Direction::Previous)));
    for (slot, entry) in ctx.window.slots().iter().enumerate() {
        let picture: Element<'a, Message> = match &entry.handle {
            Some(handle) => image(handle.clone())
                .content_fit(ContentFit::Cover)
                .width(Length::Fill)
                .height(Length::Fixed(sizing::THUMBNAIL_HEIGHT))
                .opacity(opacity)
                .into(),
            None => Container::new(Text::new(""))
                .width(Length::Fill)
                .height(Length::Fixed(sizing::THUMBNAIL_HEIGHT))
                .style(styles::container::placeholder)
                .into(),
        };

        let polaroid = Column::new()
            .spacing(spacing::XS)
            .push(picture)
            .push(Text::new(ctx.window.caption()).size(typography::CAPTION));

        strip = strip.push(
            button(polaroid)
                .on_press(Message::OpenSlot(id, slot))
                .padding(spacing::XS)
                .width(Length::FillPortion(1))
                .style(styles::button::bare),
        );
    }
    strip = strip.push(arrow("›", Message::Rotate(id, Direction::Next)));

    Container::new(Column::new().spacing(spacing::MD).push(heading).push(strip))
        .padding(spacing::LG)
        .width(Length::Fill)
        .style(styles::container::card)
        .into()
}

fn arrow<'a>(glyph: &'static str, message: Message) -> Element<'a, Message> {
    button(Text::new(glyph).size(typography::TITLE_LG))
        .on_press(message)
        .width(Length::Fixed(sizing::GALLERY_ARROW))
        .style(styles::button::overlay(
            WHITE,
            opacity::OVERLAY_MEDIUM,
            opacity::OVERLAY_STRONG,
        ))
        .into()
}
