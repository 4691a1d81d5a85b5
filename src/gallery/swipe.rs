// SPDX-License-Identifier: MPL-2.0
//! Horizontal swipe detection for the lightbox.

use super::registry::Direction;

/// Classifies a horizontal touch travel from `start_x` to `end_x`.
///
/// A leftward travel of at least `threshold` pixels means "next", a
/// rightward one means "previous". Shorter travels are ignored.
#[must_use]
pub fn classify(start_x: f32, end_x: f32, threshold: f32) -> Option<Direction> {
    let travel = end_x - start_x;
    if travel <= -threshold {
        Some(Direction::Next)
    } else if travel >= threshold {
        Some(Direction::Previous)
    } else {
        None
    }
}

/// Remembers where a touch started until it is lifted.
#[derive(Debug, Clone, Copy)]
pub struct SwipeTracker {
    start_x: Option<f32>,
    threshold: f32,
}

impl SwipeTracker {
    #[must_use]
    pub fn new(threshold: f32) -> Self {
        Self {
            start_x: None,
            threshold,
        }
    }

    pub fn begin(&mut self, x: f32) {
        self.start_x = Some(x);
    }

    /// Ends the touch and returns the swipe direction, if any.
    pub fn end(&mut self, x: f32) -> Option<Direction> {
        let start = self.start_x.take()?;
        classify(start, x, self.threshold)
    }

    pub fn cancel(&mut self) {
        self.start_x = None;
    }
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new(crate::app::config::DEFAULT_SWIPE_THRESHOLD_PX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_travel_is_ignored() {
        assert_eq!(classify(200.0, 151.0, 50.0), None);
        assert_eq!(classify(200.0, 249.9, 50.0), None);
        assert_eq!(classify(200.0, 200.0, 50.0), None);
    }

    #[test]
    fn threshold_travel_triggers_one_step() {
        assert_eq!(classify(200.0, 150.0, 50.0), Some(Direction::Next));
        assert_eq!(classify(200.0, 250.0, 50.0), Some(Direction::Previous));
    }

    #[test]
    fn long_swipes_map_to_direction() {
        assert_eq!(classify(400.0, 20.0, 50.0), Some(Direction::Next));
        assert_eq!(classify(20.0, 400.0, 50.0), Some(Direction::Previous));
    }

    #[test]
    fn tracker_requires_a_start() {
        let mut tracker = SwipeTracker::new(50.0);
        assert_eq!(tracker.end(0.0), None);

        tracker.begin(300.0);
        assert_eq!(tracker.end(100.0), Some(Direction::Next));
        // the start is consumed
        assert_eq!(tracker.end(100.0), None);
    }

    #[test]
    fn cancel_drops_the_start() {
        let mut tracker = SwipeTracker::new(50.0);
        tracker.begin(300.0);
        tracker.cancel();
        assert_eq!(tracker.end(0.0), None);
    }
}
