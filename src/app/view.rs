// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The page is one scrollable column of sections under the fixed navbar.
//! The lightbox and the floating audio controls are stacked on top.

use super::update::PAGE_SCROLL_ID;
use super::Message;
use crate::audio;
use crate::catalog::{GalleryId, Season, LOCATIONS};
use crate::gallery::{GalleryRotator, Lightbox};
use crate::i18n::{I18n, TextKey};
use crate::map::MapState;
use crate::search::SearchState;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::navbar::{self, MenuState};
use crate::ui::{gallery_view, lightbox_view, map_view, styles};
use iced::widget::{button, image, Column, Container, Id, Row, Scrollable, Stack, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    ContentFit, Element, Length,
};
use std::path::Path;

/// Menu board picture, relative to the assets root.
const MENU_IMAGE: &str = "menu/menu.jpg";

const OPERATOR_NAME: &str = "Merkaba Coffee";
/// Index of the current home base in [`LOCATIONS`].
const HOME_LOCATION: usize = 5;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub rotator: &'a GalleryRotator,
    pub lightbox: &'a Lightbox,
    pub menu: MenuState,
    pub search: &'a SearchState,
    pub map: &'a MapState,
    pub audio_muted: bool,
    pub impressum_open: bool,
    pub compact: bool,
    pub transition_opacity: f32,
    pub spinner_rotation: f32,
    pub assets_root: &'a Path,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let navbar = navbar::view(navbar::ViewContext {
        i18n: ctx.i18n,
        menu: ctx.menu,
        compact: ctx.compact,
        search: ctx.search,
        muted: ctx.audio_muted,
    })
    .map(Message::Navbar);

    let sections = Column::new()
        .width(Length::Fill)
        .push(hero(ctx.i18n))
        .push(about(ctx.i18n))
        .push(season(&ctx, Season::Summer))
        .push(season(&ctx, Season::Winter))
        .push(menu_board(ctx.i18n, ctx.assets_root))
        .push(contact(&ctx))
        .push(footer(ctx.i18n, ctx.impressum_open));

    let page = Scrollable::new(sections)
        .id(Id::new(PAGE_SCROLL_ID))
        .width(Length::Fill)
        .height(Length::Fill);

    let body = Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(navbar)
        .push(page);

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(body)
        .push(audio_controls(ctx.i18n, ctx.audio_muted));

    if let Some(overlay) = lightbox_view::view(lightbox_view::ViewContext {
        lightbox: ctx.lightbox,
        spinner_rotation: ctx.spinner_rotation,
    }) {
        layers = layers.push(overlay.map(Message::Lightbox));
    }

    layers.into()
}

fn section<'a>(content: impl Into<Element<'a, Message>>, alternate: bool) -> Element<'a, Message> {
    Container::new(
        Container::new(content)
            .max_width(sizing::CONTENT_MAX_WIDTH)
            .width(Length::Fill),
    )
    .padding([spacing::XXL, spacing::LG])
    .width(Length::Fill)
    .align_x(Horizontal::Center)
    .style(styles::container::section(alternate))
    .into()
}

fn title<'a>(i18n: &I18n, key: TextKey) -> Text<'a> {
    Text::new(i18n.tr(key)).size(typography::TITLE_LG)
}

fn hero<'a>(i18n: &I18n) -> Element<'a, Message> {
    Container::new(
        Column::new()
            .spacing(spacing::MD)
            .align_x(Horizontal::Center)
            .push(Text::new(i18n.tr(TextKey::HeroTitle)).size(typography::DISPLAY))
            .push(Text::new(i18n.tr(TextKey::HeroSubtitle)).size(typography::BODY_LG)),
    )
    .width(Length::Fill)
    .padding([spacing::XXL * 2.0, spacing::LG])
    .align_x(Horizontal::Center)
    .style(styles::container::hero)
    .into()
}

fn about<'a>(i18n: &I18n) -> Element<'a, Message> {
    let paragraphs = [
        TextKey::AboutPara1,
        TextKey::AboutPara2,
        TextKey::AboutPara3,
        TextKey::AboutPara4,
        TextKey::AboutPara5,
        TextKey::AboutPara6,
    ];

    let mut column = Column::new()
        .spacing(spacing::MD)
        .push(title(i18n, TextKey::TitleAbout));
    for key in paragraphs {
        column = column.push(Text::new(i18n.tr(key)).size(typography::BODY));
    }
    section(column, false)
}

fn season<'a>(ctx: &ViewContext<'a>, season: Season) -> Element<'a, Message> {
    let (heading, description) = match season {
        Season::Summer => (TextKey::SummerTitle, TextKey::SummerDesc),
        Season::Winter => (TextKey::WinterTitle, TextKey::WinterDesc),
    };

    let mut column = Column::new().spacing(spacing::LG);
    if season == Season::Summer {
        column = column.push(
            Text::new(ctx.i18n.tr(TextKey::GalleryIntro)).size(typography::DISPLAY),
        );
    }
    column = column
        .push(title(ctx.i18n, heading))
        .push(Text::new(ctx.i18n.tr(description)).size(typography::BODY));

    let galleries = GalleryId::ALL
        .into_iter()
        .filter(|id| id.season() == season)
        .filter_map(|id| ctx.rotator.window(id));
    for window in galleries {
        column = column.push(
            gallery_view::view(gallery_view::ViewContext {
                i18n: ctx.i18n,
                window,
                transition_opacity: ctx.transition_opacity,
            })
            .map(Message::Gallery),
        );
    }

    section(column, season == Season::Summer)
}

fn menu_board<'a>(i18n: &I18n, assets_root: &Path) -> Element<'a, Message> {
    let board = image(image::Handle::from_path(assets_root.join(MENU_IMAGE)))
        .content_fit(ContentFit::Contain)
        .width(Length::Fill);

    section(
        Column::new()
            .spacing(spacing::LG)
            .align_x(Horizontal::Center)
            .push(title(i18n, TextKey::TitleMenu))
            .push(board),
        true,
    )
}

fn contact<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let map = map_view::view(map_view::ViewContext {
        i18n: ctx.i18n,
        map: ctx.map,
    })
    .map(Message::Map);

    section(
        Column::new()
            .spacing(spacing::MD)
            .push(title(ctx.i18n, TextKey::TitleContact))
            .push(Text::new(ctx.i18n.tr(TextKey::ContactLocation)).size(typography::BODY_LG))
            .push(Text::new(ctx.i18n.tr(TextKey::ContactSubtitle)).size(typography::TITLE_SM))
            .push(map),
        false,
    )
}

fn footer<'a>(i18n: &I18n, impressum_open: bool) -> Element<'a, Message> {
    let toggle = button(
        Text::new(format!(
            "{} {}",
            i18n.tr(TextKey::ImpressumLabel),
            if impressum_open { "▴" } else { "▾" }
        ))
        .size(typography::CAPTION),
    )
    .on_press(Message::ToggleImpressum)
    .style(styles::button::nav_link);

    let mut column = Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .push(toggle);

    if impressum_open {
        let address = LOCATIONS[HOME_LOCATION].address(i18n.language());
        column = column.push(
            Column::new()
                .spacing(spacing::XS)
                .max_width(sizing::CONTENT_MAX_WIDTH)
                .push(Text::new(i18n.tr(TextKey::ImpressumOwnerLabel)).size(typography::BODY))
                .push(labelled(i18n, TextKey::LabelName, OPERATOR_NAME))
                .push(labelled(i18n, TextKey::LabelAddress, address))
                .push(Text::new(i18n.tr(TextKey::LabelCopyrightTitle)).size(typography::BODY))
                .push(
                    Text::new(i18n.tr(TextKey::ImpressumCopyrightText))
                        .size(typography::CAPTION),
                ),
        );
    }

    column = column.push(Text::new(i18n.tr(TextKey::FooterRights)).size(typography::CAPTION));

    Container::new(column)
        .width(Length::Fill)
        .padding(spacing::LG)
        .align_x(Horizontal::Center)
        .style(styles::container::footer)
        .into()
}

fn labelled<'a>(i18n: &I18n, label: TextKey, value: &'static str) -> Row<'a, Message> {
    Row::new()
        .spacing(spacing::XS)
        .push(Text::new(format!("{}:", i18n.tr(label))).size(typography::CAPTION))
        .push(Text::new(value).size(typography::CAPTION))
}

/// Restart and mute buttons floating over the bottom-right corner.
fn audio_controls<'a>(i18n: &I18n, muted: bool) -> Element<'a, Message> {
    let mute = if muted {
        TextKey::AudioUnmute
    } else {
        TextKey::AudioMute
    };

    let controls = Row::new()
        .spacing(spacing::XS)
        .push(
            button(Text::new(i18n.tr(TextKey::AudioRestart)).size(typography::CAPTION))
                .on_press(Message::Audio(audio::Message::Restart))
                .style(styles::button::primary),
        )
        .push(
            button(Text::new(i18n.tr(mute)).size(typography::CAPTION))
                .on_press(Message::Audio(audio::Message::ToggleMute))
                .style(styles::button::primary),
        );

    Container::new(controls)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::LG)
        .align_x(Horizontal::Right)
        .align_y(Vertical::Bottom)
        .into()
}
