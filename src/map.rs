// SPDX-License-Identifier: MPL-2.0
//! Adventure map state: viewport, activation and location popups.
//!
//! The map starts restricted: it ignores zoom and drag until it is clicked
//! once. Selecting a location from the list works either way; it centers
//! the viewport on the location at [`FOCUS_ZOOM`] and opens its popup.
//!
//! Positions use the Web Mercator projection with 256 px tiles, so zoom
//! levels match the usual slippy map scale.

use crate::catalog::{Location, LOCATIONS};
use crate::i18n::Language;
use iced::{Point, Size, Vector};
use std::f64::consts::PI;

const TILE_SIZE: f64 = 256.0;

/// Initial view center.
pub const DEFAULT_CENTER: GeoPoint = GeoPoint {
    lat: 47.3,
    lng: 18.5,
};

/// Initial zoom level.
pub const DEFAULT_ZOOM: f32 = 8.0;

/// Zoom applied when a location is selected from the list.
pub const FOCUS_ZOOM: f32 = 12.0;

pub const MIN_ZOOM: f32 = 5.0;
pub const MAX_ZOOM: f32 = 18.0;

/// Zoom change per button press or wheel line.
pub const ZOOM_STEP: f32 = 1.0;

/// Marker hit radius in pixels.
pub const MARKER_RADIUS: f32 = 18.0;

/// Geographic coordinate in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    #[must_use]
    pub fn of(location: &Location) -> Self {
        Self {
            lat: location.lat,
            lng: location.lng,
        }
    }
}

/// Projects `point` to world pixel coordinates at `zoom`.
#[must_use]
pub fn project(point: GeoPoint, zoom: f32) -> (f64, f64) {
    let scale = TILE_SIZE * 2f64.powf(f64::from(zoom));
    let x = (point.lng + 180.0) / 360.0 * scale;
    let lat = point.lat.to_radians();
    let y = (1.0 - (lat.tan() + 1.0 / lat.cos()).ln() / PI) / 2.0 * scale;
    (x, y)
}

/// Inverse of [`project`].
#[must_use]
pub fn unproject(x: f64, y: f64, zoom: f32) -> GeoPoint {
    let scale = TILE_SIZE * 2f64.powf(f64::from(zoom));
    let lng = x / scale * 360.0 - 180.0;
    let n = PI * (1.0 - 2.0 * y / scale);
    let lat = n.sinh().atan().to_degrees();
    GeoPoint { lat, lng }
}

#[derive(Debug, Clone)]
pub enum Message {
    /// First click on the map surface.
    Activate,
    /// Mouse wheel over the map, in lines (positive zooms in).
    Scrolled(f32),
    ZoomIn,
    ZoomOut,
    /// Drag by a screen-space offset.
    Dragged(Vector),
    /// A location picked from the list.
    SelectLocation(usize),
    /// A marker clicked on the map.
    MarkerPressed(usize),
    ClosePopup,
}

#[derive(Debug, Clone)]
pub struct MapState {
    active: bool,
    center: GeoPoint,
    zoom: f32,
    selected: Option<usize>,
    popup: Option<usize>,
    language: Language,
}

impl MapState {
    #[must_use]
    pub fn new(language: Language) -> Self {
        Self {
            active: false,
            center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
            selected: None,
            popup: None,
            language,
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[must_use]
    pub fn center(&self) -> GeoPoint {
        self.center
    }

    #[must_use]
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Location highlighted in the list.
    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Location whose popup is open.
    #[must_use]
    pub fn popup(&self) -> Option<usize> {
        self.popup
    }

    #[must_use]
    pub fn language(&self) -> Language {
        self.language
    }

    /// Name shown in the list and marker label for location `index`.
    #[must_use]
    pub fn label(&self, index: usize) -> Option<&'static str> {
        LOCATIONS.get(index).map(|location| location.name(self.language))
    }

    /// `(name, address)` shown in the open popup.
    #[must_use]
    pub fn popup_text(&self) -> Option<(&'static str, &'static str)> {
        let location = LOCATIONS.get(self.popup?)?;
        Some((location.name(self.language), location.address(self.language)))
    }

    /// Switches list and popup labels to `language`.
    pub fn relabel(&mut self, language: Language) {
        self.language = language;
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::Activate => {
                if !self.active {
                    tracing::debug!("map activated");
                }
                self.active = true;
            }
            Message::Scrolled(lines) if self.active => {
                self.set_zoom(self.zoom + lines.signum() * ZOOM_STEP);
            }
            Message::ZoomIn if self.active => self.set_zoom(self.zoom + ZOOM_STEP),
            Message::ZoomOut if self.active => self.set_zoom(self.zoom - ZOOM_STEP),
            Message::Dragged(offset) if self.active => {
                let (x, y) = project(self.center, self.zoom);
                self.center = unproject(
                    x - f64::from(offset.x),
                    y - f64::from(offset.y),
                    self.zoom,
                );
            }
            Message::Scrolled(_) | Message::ZoomIn | Message::ZoomOut | Message::Dragged(_) => {}
            Message::SelectLocation(index) => {
                let Some(location) = LOCATIONS.get(index) else {
                    return;
                };
                self.center = GeoPoint::of(location);
                self.zoom = FOCUS_ZOOM;
                self.selected = Some(index);
                self.popup = Some(index);
            }
            Message::MarkerPressed(index) => {
                if index < LOCATIONS.len() {
                    self.popup = Some(index);
                }
            }
            Message::ClosePopup => self.popup = None,
        }
    }

    fn set_zoom(&mut self, zoom: f32) {
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
    }

    /// Screen position of `point` inside a viewport of `size`.
    #[must_use]
    pub fn to_screen(&self, point: GeoPoint, size: Size) -> Point {
        let (cx, cy) = project(self.center, self.zoom);
        let (px, py) = project(point, self.zoom);
        Point::new(
            (px - cx) as f32 + size.width / 2.0,
            (py - cy) as f32 + size.height / 2.0,
        )
    }

    /// Geographic position under a screen point.
    #[must_use]
    pub fn to_geo(&self, position: Point, size: Size) -> GeoPoint {
        let (cx, cy) = project(self.center, self.zoom);
        unproject(
            cx + f64::from(position.x - size.width / 2.0),
            cy + f64::from(position.y - size.height / 2.0),
            self.zoom,
        )
    }

    /// Index of the marker under `position`, if any.
    #[must_use]
    pub fn marker_at(&self, position: Point, size: Size) -> Option<usize> {
        LOCATIONS.iter().position(|location| {
            self.to_screen(GeoPoint::of(location), size).distance(position) <= MARKER_RADIUS
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEW: Size = Size {
        width: 800.0,
        height: 500.0,
    };

    #[test]
    fn projection_round_trips() {
        let point = GeoPoint {
            lat: 47.84928,
            lng: 19.3877658,
        };
        let (x, y) = project(point, 10.0);
        let back = unproject(x, y, 10.0);
        assert!((back.lat - point.lat).abs() < 1e-9);
        assert!((back.lng - point.lng).abs() < 1e-9);
    }

    #[test]
    fn map_starts_restricted() {
        let mut map = MapState::new(Language::Hu);
        map.update(Message::ZoomIn);
        map.update(Message::Scrolled(3.0));
        map.update(Message::Dragged(Vector::new(100.0, 0.0)));
        assert!(!map.is_active());
        assert_eq!(map.zoom(), DEFAULT_ZOOM);
        assert_eq!(map.center(), DEFAULT_CENTER);
    }

    #[test]
    fn activation_enables_zoom_and_drag() {
        let mut map = MapState::new(Language::Hu);
        map.update(Message::Activate);
        map.update(Message::ZoomIn);
        assert_eq!(map.zoom(), DEFAULT_ZOOM + ZOOM_STEP);

        map.update(Message::Dragged(Vector::new(50.0, 0.0)));
        assert!(map.center().lng < DEFAULT_CENTER.lng);
    }

    #[test]
    fn zoom_is_clamped() {
        let mut map = MapState::new(Language::Hu);
        map.update(Message::Activate);
        for _ in 0..40 {
            map.update(Message::Scrolled(1.0));
        }
        assert_eq!(map.zoom(), MAX_ZOOM);
    }

    #[test]
    fn selecting_a_location_focuses_and_opens_popup() {
        let mut map = MapState::new(Language::En);
        map.update(Message::SelectLocation(5));

        assert_eq!(map.zoom(), FOCUS_ZOOM);
        assert_eq!(map.selected(), Some(5));
        assert_eq!(map.popup_text(), Some(("Galgaguta", "Galgaguta, 2686 Hungary")));

        let marker = map.to_screen(map.center(), VIEW);
        assert!((marker.x - 400.0).abs() < 0.01);
        assert_eq!(map.marker_at(marker, VIEW), Some(5));
    }

    #[test]
    fn unknown_location_is_ignored() {
        let mut map = MapState::new(Language::Hu);
        map.update(Message::SelectLocation(42));
        assert_eq!(map.selected(), None);
        assert_eq!(map.zoom(), DEFAULT_ZOOM);
    }

    #[test]
    fn relabel_switches_popup_language() {
        let mut map = MapState::new(Language::Hu);
        map.update(Message::SelectLocation(0));
        assert_eq!(
            map.popup_text().map(|(_, address)| address),
            Some("Bér, Csobánkapuszta, 3045 Magyarország")
        );
        map.relabel(Language::En);
        assert_eq!(
            map.popup_text().map(|(_, address)| address),
            Some("Bér, Csobánkapuszta, 3045 Hungary")
        );
    }

    #[test]
    fn screen_and_geo_conversions_agree() {
        let map = MapState::new(Language::Hu);
        let geo = map.to_geo(Point::new(120.0, 80.0), VIEW);
        let screen = map.to_screen(geo, VIEW);
        assert!((screen.x - 120.0).abs() < 0.01);
        assert!((screen.y - 80.0).abs() < 0.01);
    }
}
