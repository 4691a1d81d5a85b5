// SPDX-License-Identifier: MPL-2.0
//! Fixed header: navigation links, search, language switch and mute button.
//!
//! Above the mobile breakpoint the links sit inline and the Gallery entry
//! reveals its Summer/Winter dropdown on hover. At or below the breakpoint
//! the links collapse behind a toggle; there the Gallery entry toggles the
//! dropdown instead of navigating, and any other link closes the menu.

use crate::audio;
use crate::catalog::SectionId;
use crate::i18n::{I18n, Language, TextKey};
use crate::search::{self, Field, SearchResults, SearchState};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, mouse_area, text_input, Column, Container, Row, Space, Text},
    Element, Length,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub menu: MenuState,
    /// Window is at or below the mobile breakpoint.
    pub compact: bool,
    pub search: &'a SearchState,
    pub muted: bool,
}

/// Mobile menu and gallery dropdown visibility.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    pub open: bool,
    pub gallery_open: bool,
}

impl MenuState {
    /// Closes the collapsed menu.
    pub fn close(&mut self) {
        self.open = false;
    }
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    ToggleMenu,
    CloseMenu,
    GalleryPressed,
    /// Pointer entered or left the Gallery entry (wide layout only).
    GalleryHovered(bool),
    Navigate(SectionId),
    SelectLanguage(Language),
    Search(search::Message),
    Audio(audio::Message),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    ScrollTo(SectionId),
    LanguageSelected(Language),
    Search(search::Message),
    Audio(audio::Message),
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message, menu: &mut MenuState, compact: bool) -> Event {
    match message {
        Message::ToggleMenu => {
            menu.open = !menu.open;
            Event::None
        }
        Message::CloseMenu => {
            menu.close();
            Event::None
        }
        Message::GalleryPressed => {
            if compact {
                menu.gallery_open = !menu.gallery_open;
                Event::None
            } else {
                menu.close();
                Event::ScrollTo(SectionId::Summer)
            }
        }
        Message::GalleryHovered(hovered) => {
            if !compact {
                menu.gallery_open = hovered;
            }
            Event::None
        }
        Message::Navigate(section) => {
            menu.close();
            Event::ScrollTo(section)
        }
        Message::SelectLanguage(language) => Event::LanguageSelected(language),
        Message::Search(message) => Event::Search(message),
        Message::Audio(message) => Event::Audio(message),
    }
}

/// Label of the Gallery entry, with the arrow showing the dropdown state.
#[must_use]
pub fn gallery_label(i18n: &I18n, menu: MenuState) -> &'static str {
    if menu.gallery_open {
        i18n.tr(TextKey::NavGalleryOpen)
    } else {
        i18n.tr(TextKey::NavGallery)
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let logo = Text::new(ctx.i18n.tr(TextKey::HeroTitle)).size(typography::TITLE_SM);

    let bar = if ctx.compact {
        Row::new()
            .push(logo)
            .push(Space::new().width(Length::Fill))
            .push(mute_button(&ctx))
            .push(
                button(Text::new(if ctx.menu.open { "✕" } else { "☰" }).size(typography::TITLE_SM))
                    .on_press(Message::ToggleMenu)
                    .style(styles::button::nav_link),
            )
    } else {
        Row::new()
            .push(logo)
            .push(Space::new().width(Length::Fill))
            .push(links(&ctx, false))
            .push(search_box(&ctx, Field::Header))
            .push(language_buttons(ctx.i18n))
            .push(mute_button(&ctx))
    };

    let bar = Container::new(
        bar.spacing(spacing::MD)
            .padding([spacing::SM, spacing::LG])
            .align_y(Vertical::Center),
    )
    .width(Length::Fill)
    .height(Length::Fixed(sizing::HEADER_HEIGHT))
    .align_y(Vertical::Center)
    .style(styles::container::header);

    let mut content = Column::new().width(Length::Fill).push(bar);
    if ctx.compact && ctx.menu.open {
        content = content.push(mobile_menu(&ctx));
    }
    content.into()
}

fn links<'a>(ctx: &ViewContext<'a>, vertical: bool) -> Element<'a, Message> {
    let link = |key: TextKey, section: SectionId| {
        button(Text::new(ctx.i18n.tr(key)).size(typography::BODY_LG))
            .on_press(Message::Navigate(section))
            .style(styles::button::nav_link)
    };

    let gallery = button(Text::new(gallery_label(ctx.i18n, ctx.menu)).size(typography::BODY_LG))
        .on_press(Message::GalleryPressed)
        .style(styles::button::nav_link);

    let mut gallery_entry = Column::new().push(gallery);
    if ctx.menu.gallery_open {
        gallery_entry = gallery_entry.push(
            Container::new(
                Column::new()
                    .push(link(TextKey::NavSummer, SectionId::Summer))
                    .push(link(TextKey::NavWinter, SectionId::Winter)),
            )
            .padding([0.0, spacing::MD]),
        );
    }
    let gallery_entry: Element<'a, Message> = if ctx.compact {
        gallery_entry.into()
    } else {
        mouse_area(gallery_entry)
            .on_enter(Message::GalleryHovered(true))
            .on_exit(Message::GalleryHovered(false))
            .into()
    };

    let items: [Element<'a, Message>; 4] = [
        link(TextKey::NavHome, SectionId::Home).into(),
        link(TextKey::NavAbout, SectionId::About).into(),
        gallery_entry,
        link(TextKey::NavContact, SectionId::Contact).into(),
    ];

    if vertical {
        Column::with_children(items).spacing(spacing::XXS).into()
    } else {
        Row::with_children(items)
            .spacing(spacing::XS)
            .align_y(Vertical::Top)
            .into()
    }
}

fn search_box<'a>(ctx: &ViewContext<'a>, field: Field) -> Element<'a, Message> {
    let expanded = field == Field::Mobile || ctx.search.is_expanded();
    if !expanded {
        return button(Text::new("⌕").size(typography::TITLE_SM))
            .on_press(Message::Search(search::Message::TriggerPressed))
            .style(styles::button::nav_link)
            .into();
    }

    let query = if ctx.search.field() == field {
        ctx.search.query()
    } else {
        ""
    };
    let input = text_input(ctx.i18n.tr(TextKey::SearchPlaceholder), query)
        .on_input(move |value| Message::Search(search::Message::QueryChanged(field, value)))
        .size(typography::BODY)
        .width(Length::Fixed(sizing::SEARCH_WIDTH));

    let mut column = Column::new().push(input);
    if let Some(results) = ctx.search.results_for(field) {
        column = column.push(search_results(results));
    }
    column.into()
}

fn search_results<'a>(results: &SearchResults) -> Element<'a, Message> {
    let body: Element<'a, Message> = match results {
        SearchResults::Hits(hits) => Column::with_children(hits.iter().map(|hit| {
            button(Text::new(hit.title).size(typography::BODY))
                .on_press(Message::Search(search::Message::ResultSelected(hit.section)))
                .width(Length::Fill)
                .style(styles::button::list_item(false))
                .into()
        }))
        .into(),
        SearchResults::NoResults(notice) => Text::new(*notice).size(typography::CAPTION).into(),
        SearchResults::Closed => Space::new().into(),
    };

    Container::new(body)
        .padding(spacing::XS)
        .width(Length::Fixed(sizing::SEARCH_WIDTH))
        .style(styles::container::dropdown)
        .into()
}

fn language_buttons<'a>(i18n: &I18n) -> Element<'a, Message> {
    Row::with_children(Language::ALL.into_iter().map(|language| {
        let style = if language == i18n.language() {
            styles::button::selected
        } else {
            styles::button::unselected
        };
        button(Text::new(language.label()).size(typography::CAPTION))
            .on_press(Message::SelectLanguage(language))
            .style(style)
            .into()
    }))
    .spacing(spacing::XXS)
    .into()
}

fn mute_button<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let key = if ctx.muted {
        TextKey::AudioUnmute
    } else {
        TextKey::AudioMute
    };
    button(Text::new(ctx.i18n.tr(key)).size(typography::CAPTION))
        .on_press(Message::Audio(audio::Message::ToggleMute))
        .style(styles::button::primary)
        .into()
}

fn mobile_menu<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let close = button(Text::new("✕").size(typography::TITLE_SM))
        .on_press(Message::CloseMenu)
        .style(styles::button::list_item(false));

    Container::new(
        Column::new()
            .spacing(spacing::SM)
            .push(close)
            .push(search_box(ctx, Field::Mobile))
            .push(links(ctx, true))
            .push(language_buttons(ctx.i18n)),
    )
    .padding(spacing::MD)
    .width(Length::Fill)
    .style(styles::container::header)
    .into()
}
