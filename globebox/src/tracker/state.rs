//! Per-drag tracker state and its transition function.
//!
//! The state is a small `Copy` record. [`TrackerState::step`] consumes one
//! record and returns the next, so the whole machine can be exercised without
//! a tracker or a renderer.
//!
//! # State Machine
//!
//! ```text
//! direction: Unset | East | West        crossing: yes | no
//!
//! SameSide              -> crossing = no,  direction tracks the move
//! LeftAnchorSide(d)     -> crossing = (direction does not oppose d)
//! ReturnedToAnchorSide  -> crossing = no
//! Unclassified          -> unchanged
//! ```

use std::fmt;

use crate::coord::GeoPoint;
use crate::rectangle::Rectangle;

use super::transition::Transition;

/// Direction the drag is heading, as a hint for date line decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragDirection {
    /// No move along longitude seen yet.
    #[default]
    Unset,
    /// Pointer moving toward increasing longitude.
    East,
    /// Pointer moving toward decreasing longitude.
    West,
}

impl DragDirection {
    /// Human-readable name for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            DragDirection::Unset => "unset",
            DragDirection::East => "east",
            DragDirection::West => "west",
        }
    }

    /// Whether this hint points the opposite way to `travel`.
    ///
    /// An unset hint contradicts nothing.
    pub fn contradicts(self, travel: DragDirection) -> bool {
        matches!(
            (self, travel),
            (DragDirection::East, DragDirection::West) | (DragDirection::West, DragDirection::East)
        )
    }

    /// Update the hint for a move from `last` to `current`.
    ///
    /// A move against the current hint only flips it once the pointer has
    /// also passed the anchor, so jitter near the far edge of the box does
    /// not flip-flop the hint.
    pub fn track(self, last: f64, current: f64, anchor: f64) -> Self {
        if current < last {
            match self {
                DragDirection::East if current >= anchor => DragDirection::East,
                _ => DragDirection::West,
            }
        } else if current > last {
            match self {
                DragDirection::West if current <= anchor => DragDirection::West,
                _ => DragDirection::East,
            }
        } else {
            self
        }
    }
}

impl fmt::Display for DragDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Everything the tracker remembers between pointer moves of one drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackerState {
    /// Where the drag started. Fixed for the life of the drag.
    pub anchor: GeoPoint,

    /// Pointer longitude from the previous move (`None` before the first).
    pub last_longitude: Option<f64>,

    /// Current direction hint.
    pub direction: DragDirection,

    /// Whether the box currently straddles the date line.
    pub crossing_date_line: bool,
}

impl TrackerState {
    /// Fresh state for a drag anchored at `anchor`.
    pub fn new(anchor: GeoPoint) -> Self {
        Self {
            anchor,
            last_longitude: None,
            direction: DragDirection::Unset,
            crossing_date_line: false,
        }
    }

    /// Classify the move to `current` against this state.
    ///
    /// Returns `None` when there is no previous longitude to compare with:
    /// on the first move of a drag, and after a sample exactly on the prime
    /// meridian, which has no side.
    pub fn transition_to(&self, current: &GeoPoint) -> Option<Transition> {
        self.last_longitude
            .filter(|last| *last != 0.0)
            .map(|last| Transition::classify(last, current.longitude, self.anchor.longitude))
    }

    /// Produce the state after the pointer moves to `current`.
    pub fn step(self, current: &GeoPoint) -> Self {
        let (Some(last), Some(transition)) = (self.last_longitude, self.transition_to(current))
        else {
            // Nothing to compare against: start over, never crossing
            return Self {
                last_longitude: Some(current.longitude),
                crossing_date_line: false,
                ..self
            };
        };

        let anchor = self.anchor.longitude;
        let mut next = self;

        match transition {
            Transition::SameSide => {
                next.crossing_date_line = false;
                next.direction = self.direction.track(last, current.longitude, anchor);
            }
            Transition::LeftAnchorSide { over_date_line } => {
                next.crossing_date_line = !self.direction.contradicts(over_date_line);
            }
            Transition::ReturnedToAnchorSide => {
                next.crossing_date_line = false;
            }
            Transition::Unclassified => {}
        }

        next.last_longitude = Some(current.longitude);
        next
    }

    /// Rectangle spanned by the anchor and `current` under this state.
    pub fn rectangle(&self, current: &GeoPoint, epsilon: f64) -> Rectangle {
        Rectangle::from_corners(&self.anchor, current, self.crossing_date_line, epsilon)
    }
}
