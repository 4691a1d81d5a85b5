// SPDX-License-Identifier: MPL-2.0
//! Adventure map: location list plus the projected marker canvas.

use crate::catalog::LOCATIONS;
use crate::i18n::{I18n, TextKey};
use crate::map::{GeoPoint, MapState, Message, MARKER_RADIUS};
use crate::ui::design_tokens::{palette, radius, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::canvas::{self, Canvas, Frame, Geometry, Path, Stroke};
use iced::widget::{button, container, Column, Container, Row, Stack, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    mouse, Color, Element, Length, Pixels, Point, Rectangle, Renderer, Size, Theme, Vector,
};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub map: &'a MapState,
}

/// Renders the location list next to the map canvas.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut list = Column::new()
        .spacing(spacing::XXS)
        .width(Length::Fixed(sizing::LOCATION_LIST_WIDTH));
    for index in 0..LOCATIONS.len() {
        let label = ctx.map.label(index).unwrap_or_default();
        let active = ctx.map.selected() == Some(index);
        list = list.push(
            button(Text::new(format!("☕ {label}")).size(typography::BODY))
                .on_press(Message::SelectLocation(index))
                .width(Length::Fill)
                .padding([spacing::XS, spacing::SM])
                .style(styles::button::list_item(active)),
        );
    }

    let canvas = Canvas::new(MapCanvas { map: ctx.map })
        .width(Length::Fill)
        .height(Length::Fixed(sizing::MAP_HEIGHT));

    let mut layers = Stack::new().push(canvas).push(zoom_controls());
    if !ctx.map.is_active() {
        layers = layers.push(
            Container::new(
                Container::new(Text::new(ctx.i18n.tr(TextKey::MapInstruct)).size(typography::BODY))
                    .padding([spacing::XS, spacing::MD])
                    .style(styles::overlay::indicator(radius::FULL)),
            )
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Bottom)
            .padding(spacing::MD),
        );
    }

    Row::new()
        .spacing(spacing::LG)
        .push(list)
        .push(container(layers).width(Length::Fill))
        .into()
}

fn zoom_controls<'a>() -> Element<'a, Message> {
    let zoom_button = |label: &'static str, message: Message| {
        button(Text::new(label).size(typography::TITLE_SM))
        .on_press(message)
        .width(Length::Fixed(sizing::ICON_LG))
        .style(styles::button::primary)
    };

    Container::new(
        Column::new()
            .spacing(spacing::XXS)
            .push(zoom_button("+", Message::ZoomIn))
            .push(zoom_button("−", Message::ZoomOut)),
    )
    .padding(spacing::SM)
    .into()
}

/// Pointer state kept by the canvas between events.
#[derive(Debug, Default)]
pub struct DragState {
    last: Option<Point>,
}

struct MapCanvas<'a> {
    map: &'a MapState,
}

impl canvas::Program<Message> for MapCanvas<'_> {
    type State = DragState;

    fn update(
        &self,
        state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<iced::widget::Action<Message>> {
        use iced::widget::Action;

        match event {
            iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                let position = cursor.position_in(bounds)?;
                if !self.map.is_active() {
                    return Some(Action::publish(Message::Activate).and_capture());
                }
                if let Some(index) = self.map.marker_at(position, bounds.size()) {
                    return Some(Action::publish(Message::MarkerPressed(index)).and_capture());
                }
                state.last = Some(position);
                Some(Action::capture())
            }
            iced::Event::Mouse(mouse::Event::CursorMoved { .. }) => {
                let last = state.last?;
                let position = cursor.position_in(bounds)?;
                state.last = Some(position);
                Some(Action::publish(Message::Dragged(position - last)).and_capture())
            }
            iced::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                state.last.take().map(|_| Action::capture())
            }
            iced::Event::Mouse(mouse::Event::WheelScrolled { delta }) => {
                if !self.map.is_active() || !cursor.is_over(bounds) {
                    return None;
                }
                let lines = match delta {
                    mouse::ScrollDelta::Lines { y, .. } => *y,
                    mouse::ScrollDelta::Pixels { y, .. } => *y / 40.0,
                };
                (lines != 0.0).then(|| Action::publish(Message::Scrolled(lines)).and_capture())
            }
            _ => None,
        }
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let size = bounds.size();

        frame.fill_rectangle(Point::ORIGIN, size, palette::LATTE);
        draw_graticule(&mut frame, self.map, size);
        draw_balaton(&mut frame, self.map, size);

        for (index, location) in LOCATIONS.iter().enumerate() {
            let point = self.map.to_screen(GeoPoint::of(location), size);
            let highlighted = self.map.popup() == Some(index);
            draw_marker(&mut frame, point, highlighted);
        }

        if let (Some(index), Some((name, address))) = (self.map.popup(), self.map.popup_text()) {
            if let Some(location) = LOCATIONS.get(index) {
                let anchor = self.map.to_screen(GeoPoint::of(location), size);
                draw_popup(&mut frame, anchor, name, address);
            }
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        match cursor.position_in(bounds) {
            Some(_) if state.last.is_some() => mouse::Interaction::Grabbing,
            Some(position) if self.map.marker_at(position, bounds.size()).is_some() => {
                mouse::Interaction::Pointer
            }
            Some(_) if self.map.is_active() => mouse::Interaction::Grab,
            Some(_) => mouse::Interaction::Pointer,
            None => mouse::Interaction::default(),
        }
    }
}

/// One line per whole degree of latitude and longitude.
fn draw_graticule(frame: &mut Frame, map: &MapState, size: Size) {
    let top_left = map.to_geo(Point::ORIGIN, size);
    let bottom_right = map.to_geo(Point::new(size.width, size.height), size);
    let stroke = Stroke::default().with_width(1.0).with_color(Color {
        a: 0.35,
        ..palette::MOCHA
    });

    let mut lng = top_left.lng.floor();
    while lng <= bottom_right.lng {
        let x = map.to_screen(GeoPoint { lat: top_left.lat, lng }, size).x;
        frame.stroke(
            &Path::line(Point::new(x, 0.0), Point::new(x, size.height)),
            stroke,
        );
        lng += 1.0;
    }

    let mut lat = bottom_right.lat.floor();
    while lat <= top_left.lat {
        let y = map.to_screen(GeoPoint { lat, lng: top_left.lng }, size).y;
        frame.stroke(
            &Path::line(Point::new(0.0, y), Point::new(size.width, y)),
            stroke,
        );
        lat += 1.0;
    }
}

/// Rough outline of Lake Balaton, for orientation.
fn draw_balaton(frame: &mut Frame, map: &MapState, size: Size) {
    const SHORE: [(f64, f64); 8] = [
        (46.72, 17.25),
        (46.79, 17.45),
        (46.88, 17.72),
        (46.97, 17.95),
        (47.04, 18.12),
        (46.93, 18.08),
        (46.80, 17.75),
        (46.70, 17.30),
    ];
    let lake = Path::new(|builder| {
        for (i, (lat, lng)) in SHORE.iter().enumerate() {
            let point = map.to_screen(GeoPoint { lat: *lat, lng: *lng }, size);
            if i == 0 {
                builder.move_to(point);
            } else {
                builder.line_to(point);
            }
        }
        builder.close();
    });
    frame.fill(&lake, palette::LAKE);
}

fn draw_marker(frame: &mut Frame, point: Point, highlighted: bool) {
    let radius = MARKER_RADIUS * 0.6;
    let fill = if highlighted {
        palette::GOLD
    } else {
        palette::ROAST
    };
    frame.fill(&Path::circle(point, radius), fill);
    frame.stroke(
        &Path::circle(point, radius),
        Stroke::default().with_width(2.0).with_color(palette::CREAM),
    );
    frame.fill(&Path::circle(point, radius * 0.35), palette::CREAM);
}

fn draw_popup(frame: &mut Frame, anchor: Point, name: &str, address: &str) {
    let width = 240.0;
    let height = 52.0;
    let top_left = anchor + Vector::new(-width / 2.0, -(height + MARKER_RADIUS));

    frame.fill(
        &Path::rounded_rectangle(top_left, Size::new(width, height), radius::MD.into()),
        palette::WHITE,
    );
    frame.fill_text(canvas::Text {
        content: name.to_string(),
        position: top_left + Vector::new(spacing::SM, spacing::XS),
        color: palette::ESPRESSO,
        size: Pixels(typography::BODY),
        ..canvas::Text::default()
    });
    frame.fill_text(canvas::Text {
        content: address.to_string(),
        position: top_left + Vector::new(spacing::SM, spacing::XS + typography::BODY + 6.0),
        color: palette::MOCHA,
        size: Pixels(typography::CAPTION),
        ..canvas::Text::default()
    });
}
