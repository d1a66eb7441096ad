//! Date-line aware bounding box tracking.
//!
//! Converts a stream of pointer positions, each paired with the fixed point
//! where the drag started, into a normalized [`Rectangle`]. The only subtle
//! part is the date line: a pointer jumping from +179° to -179° either crossed
//! the date line (the box now wraps round the back of the globe) or came
//! through the prime meridian the long way. The tracker decides which using
//! the direction the drag has been heading.
//!
//! # Example
//!
//! ```
//! use globebox::coord::GeoPoint;
//! use globebox::tracker::BboxTracker;
//!
//! let mut tracker = BboxTracker::with_defaults();
//! let anchor = GeoPoint::new(0.0, 3.0);
//!
//! tracker.update(&anchor, &GeoPoint::new(0.1, 2.5));
//! let rect = tracker.update(&anchor, &GeoPoint::new(0.1, -3.0)).unwrap();
//!
//! assert!(tracker.is_crossing_date_line());
//! assert!(rect.east < rect.west);
//!
//! let committed = tracker.finish();
//! assert_eq!(committed, Some(rect));
//! ```

mod state;
mod transition;

pub use state::{DragDirection, TrackerState};
pub use transition::Transition;

use crate::config::TrackerConfig;
use crate::coord::{normalize_longitude, GeoPoint};
use crate::rectangle::Rectangle;

/// Stateful tracker for one drag at a time.
///
/// Call [`update`](Self::update) on every pointer move and
/// [`finish`](Self::finish) when the button is released.
#[derive(Debug, Clone)]
pub struct BboxTracker {
    /// Minimum angular span (radians).
    epsilon: f64,

    /// State for the drag in progress, if any.
    state: Option<TrackerState>,

    /// Most recent rectangle produced during the current drag.
    last_rectangle: Option<Rectangle>,
}

impl Default for BboxTracker {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl BboxTracker {
    /// Create a tracker from configuration.
    pub fn new(config: &TrackerConfig) -> Self {
        Self::with_epsilon(config.epsilon)
    }

    /// Create a tracker with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(&TrackerConfig::default())
    }

    /// Create a tracker with an explicit epsilon (radians).
    pub fn with_epsilon(epsilon: f64) -> Self {
        Self {
            epsilon,
            state: None,
            last_rectangle: None,
        }
    }

    /// Feed one pointer move and get the rectangle to draw.
    ///
    /// `anchor` is where the drag started and `current` the pointer position,
    /// both already projected onto the globe. Returns `None` when either point
    /// is not finite, leaving the state untouched: there is simply nothing to
    /// draw yet. An anchor different from the one the state was started with
    /// begins a new drag.
    pub fn update(&mut self, anchor: &GeoPoint, current: &GeoPoint) -> Option<Rectangle> {
        if !anchor.is_finite() || !current.is_finite() {
            tracing::trace!(%anchor, %current, "Ignoring non-finite pointer position");
            return None;
        }

        let anchor = GeoPoint::new(anchor.latitude, normalize_longitude(anchor.longitude));
        let current = GeoPoint::new(current.latitude, normalize_longitude(current.longitude));

        let previous = match self.state {
            Some(state) if state.anchor == anchor => state,
            Some(_) => {
                tracing::debug!(%anchor, "Anchor changed, starting a new drag");
                self.last_rectangle = None;
                TrackerState::new(anchor)
            }
            None => TrackerState::new(anchor),
        };

        let next = previous.step(&current);
        if next.crossing_date_line != previous.crossing_date_line {
            tracing::debug!(
                crossing = next.crossing_date_line,
                direction = %next.direction,
                lon = current.lon_degrees(),
                "Date line crossing changed"
            );
        } else if next.direction != previous.direction {
            tracing::trace!(
                from = %previous.direction,
                to = %next.direction,
                "Drag direction changed"
            );
        }
        self.state = Some(next);

        let rect = next.rectangle(&current, self.epsilon);
        if !rect.is_finite() {
            return None;
        }

        self.last_rectangle = Some(rect);
        Some(rect)
    }

    /// End the drag: clear the state and return the committed rectangle.
    ///
    /// Returns `None` when no rectangle was produced during the drag.
    pub fn finish(&mut self) -> Option<Rectangle> {
        let committed = self.last_rectangle.take();
        if let Some(rect) = committed {
            tracing::debug!(%rect, "Drag finished");
        }
        self.state = None;
        committed
    }

    /// Discard any drag in progress.
    pub fn reset(&mut self) {
        self.state = None;
        self.last_rectangle = None;
    }

    /// State of the drag in progress.
    pub fn state(&self) -> Option<&TrackerState> {
        self.state.as_ref()
    }

    /// Whether a drag is in progress.
    pub fn is_active(&self) -> bool {
        self.state.is_some()
    }

    /// Whether the current box straddles the date line.
    pub fn is_crossing_date_line(&self) -> bool {
        self.state.is_some_and(|s| s.crossing_date_line)
    }

    /// Current direction hint (`Unset` when idle).
    pub fn direction(&self) -> DragDirection {
        self.state.map(|s| s.direction).unwrap_or_default()
    }

    /// Last rectangle produced during the current drag.
    pub fn last_rectangle(&self) -> Option<Rectangle> {
        self.last_rectangle
    }

    /// Configured epsilon (radians).
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    const EPS: f64 = 1e-7;

    fn point(lat: f64, lon: f64) -> GeoPoint {
        GeoPoint::new(lat, lon)
    }

    /// Drive a drag from `anchor` through `moves` (longitudes, latitude 0.2).
    fn drag(tracker: &mut BboxTracker, anchor: &GeoPoint, moves: &[f64]) -> Option<Rectangle> {
        let mut last = None;
        for &lon in moves {
            last = tracker.update(anchor, &point(0.2, lon));
        }
        last
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Date line sequences
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_first_move_never_crosses() {
        let mut tracker = BboxTracker::with_defaults();
        let anchor = point(0.0, 3.0);

        let rect = tracker.update(&anchor, &point(0.1, -3.0)).unwrap();
        assert!(!tracker.is_crossing_date_line());
        assert_eq!(rect.east, 3.0);
        assert_eq!(rect.west, -3.0);
    }

    #[test]
    fn test_sign_flip_after_westward_step_crosses() {
        let mut tracker = BboxTracker::with_defaults();
        let anchor = point(0.0, 3.0);

        tracker.update(&anchor, &point(0.1, 2.5));
        assert!(!tracker.is_crossing_date_line());

        let rect = tracker.update(&anchor, &point(0.1, -3.0)).unwrap();
        assert!(tracker.is_crossing_date_line());
        assert_eq!(rect.east, -3.0);
        assert_eq!(rect.west, 3.0);
        assert!(rect.east <= rect.west);
    }

    #[test]
    fn test_return_to_anchor_hemisphere_clears_crossing() {
        let mut tracker = BboxTracker::with_defaults();
        let anchor = point(0.0, 3.0);

        tracker.update(&anchor, &point(0.1, -3.0));
        let rect = tracker.update(&anchor, &point(0.1, 2.9)).unwrap();

        assert!(!tracker.is_crossing_date_line());
        assert!(rect.west <= rect.east);
        assert_eq!(rect.east, 3.0);
        assert_eq!(rect.west, 2.9);
    }

    #[test]
    fn test_eastward_drag_over_date_line() {
        let mut tracker = BboxTracker::with_defaults();
        let anchor = point(0.0, 3.0);

        let rect = drag(&mut tracker, &anchor, &[3.05, 3.1, 3.14, -3.1, -3.0]).unwrap();
        assert!(tracker.is_crossing_date_line());
        assert_eq!(tracker.direction(), DragDirection::East);
        assert_eq!(rect.west, 3.0);
        assert_eq!(rect.east, -3.0);
        assert!((rect.width() - (2.0 * PI - 6.0)).abs() < 1e-9);
    }

    #[test]
    fn test_westward_drag_through_prime_meridian() {
        let mut tracker = BboxTracker::with_defaults();
        let anchor = point(0.0, 0.4);

        let rect = drag(&mut tracker, &anchor, &[0.3, 0.2, 0.05, -0.05, -0.3]).unwrap();
        assert!(!tracker.is_crossing_date_line());
        assert_eq!(tracker.direction(), DragDirection::West);
        assert_eq!(rect.east, 0.4);
        assert_eq!(rect.west, -0.3);
    }

    #[test]
    fn test_westward_drag_over_date_line_from_western_hemisphere() {
        let mut tracker = BboxTracker::with_defaults();
        let anchor = point(-0.5, -3.0);

        let rect = drag(&mut tracker, &anchor, &[-3.05, -3.1, 3.1]).unwrap();
        assert!(tracker.is_crossing_date_line());
        assert_eq!(rect.east, -3.0);
        assert_eq!(rect.west, 3.1);
        assert_eq!(rect.south, -0.5);
        assert_eq!(rect.north, 0.2);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Normalization and guards
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_latitudes_ordered() {
        let mut tracker = BboxTracker::with_defaults();
        let rect = tracker
            .update(&point(0.8, 1.0), &point(-0.4, 1.5))
            .unwrap();
        assert_eq!(rect.north, 0.8);
        assert_eq!(rect.south, -0.4);
    }

    #[test]
    fn test_degenerate_drag_expanded() {
        let mut tracker = BboxTracker::with_defaults();
        let p = point(0.3, -1.2);
        let rect = tracker.update(&p, &p).unwrap();

        assert!(rect.east - rect.west >= 2.0 * EPS);
        assert!(rect.north - rect.south >= 2.0 * EPS);
    }

    #[test]
    fn test_back_to_anchor_via_prime_meridian() {
        let mut tracker = BboxTracker::with_defaults();
        let anchor = point(0.0, 3.0);
        drag(&mut tracker, &anchor, &[3.1, -3.1]);
        assert!(tracker.is_crossing_date_line());

        let rect = drag(&mut tracker, &anchor, &[0.0, 3.0]).unwrap();

        assert!(!tracker.is_crossing_date_line());
        assert!(!rect.crosses_date_line());
        assert_eq!(rect.west, 3.0);
        assert!(rect.width() >= 2.0 * EPS);
    }

    #[test]
    fn test_custom_epsilon() {
        let mut tracker = BboxTracker::with_epsilon(1e-3);
        let p = point(0.3, 1.2);
        let rect = tracker.update(&p, &point(0.3, 1.2005)).unwrap();

        assert!(rect.width() >= 2e-3);
        assert!(rect.height() >= 2e-3);
        assert_eq!(tracker.epsilon(), 1e-3);
    }

    #[test]
    fn test_non_finite_input_yields_none() {
        let mut tracker = BboxTracker::with_defaults();
        let anchor = point(0.0, 3.0);
        tracker.update(&anchor, &point(0.1, 2.5));
        let before = *tracker.state().unwrap();

        assert!(tracker.update(&anchor, &point(f64::NAN, 1.0)).is_none());
        assert!(tracker.update(&anchor, &point(0.0, f64::INFINITY)).is_none());
        assert!(tracker.update(&point(f64::NAN, 0.0), &point(0.0, 1.0)).is_none());

        assert_eq!(*tracker.state().unwrap(), before);
    }

    #[test]
    fn test_longitude_minus_pi_folded() {
        let mut tracker = BboxTracker::with_defaults();
        let rect = tracker.update(&point(0.0, 3.0), &point(0.1, -PI)).unwrap();
        assert_eq!(rect.east, PI);
        assert_eq!(rect.west, 3.0);
    }

    #[test]
    fn test_update_is_idempotent_once_stable() {
        let mut tracker = BboxTracker::with_defaults();
        let anchor = point(0.0, 3.0);
        drag(&mut tracker, &anchor, &[3.05, 3.1, -3.1]);

        let current = point(0.3, -3.05);
        let first = tracker.update(&anchor, &current).unwrap();
        let second = tracker.update(&anchor, &current).unwrap();
        assert_eq!(first, second);
        assert!(tracker.is_crossing_date_line());
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Lifecycle
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_finish_returns_last_rectangle_and_resets() {
        let mut tracker = BboxTracker::with_defaults();
        let anchor = point(0.0, 3.0);
        let last = drag(&mut tracker, &anchor, &[2.5, -3.0]);
        assert!(tracker.is_active());

        let committed = tracker.finish();
        assert_eq!(committed, last);
        assert!(!tracker.is_active());
        assert!(!tracker.is_crossing_date_line());
        assert_eq!(tracker.direction(), DragDirection::Unset);
        assert!(tracker.last_rectangle().is_none());
    }

    #[test]
    fn test_finish_without_moves() {
        let mut tracker = BboxTracker::with_defaults();
        assert_eq!(tracker.finish(), None);
    }

    #[test]
    fn test_new_drag_after_finish_starts_fresh() {
        let mut tracker = BboxTracker::with_defaults();
        let anchor = point(0.0, 3.0);
        drag(&mut tracker, &anchor, &[2.5, -3.0]);
        tracker.finish();

        // Same anchor again: first move of a new drag never crosses
        tracker.update(&anchor, &point(0.1, -3.0));
        assert!(!tracker.is_crossing_date_line());
    }

    #[test]
    fn test_anchor_change_starts_new_drag() {
        let mut tracker = BboxTracker::with_defaults();
        drag(&mut tracker, &point(0.0, 3.0), &[2.5, -3.0]);
        assert!(tracker.is_crossing_date_line());

        tracker.update(&point(0.0, 1.0), &point(0.0, -3.0));
        assert!(!tracker.is_crossing_date_line());
        assert_eq!(tracker.state().unwrap().anchor, point(0.0, 1.0));
    }

    #[test]
    fn test_reset_discards_drag() {
        let mut tracker = BboxTracker::with_defaults();
        drag(&mut tracker, &point(0.0, 3.0), &[2.5, -3.0]);
        tracker.reset();
        assert!(!tracker.is_active());
        assert_eq!(tracker.finish(), None);
    }
}
