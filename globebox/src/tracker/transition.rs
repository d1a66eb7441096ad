//! Classification of pointer moves by longitude sign.
//!
//! Each move is keyed on the signs of the previous pointer longitude, the
//! current pointer longitude and the anchor longitude:
//!
//! ```text
//! last  current  anchor   transition
//!  +       +       +      SameSide
//!  -       -       -      SameSide
//!  +       -       +      LeftAnchorSide { over_date_line: East }
//!  -       +       -      LeftAnchorSide { over_date_line: West }
//!  -       +       +      ReturnedToAnchorSide
//!  +       -       -      ReturnedToAnchorSide
//!  (anything else, including a zero longitude)   Unclassified
//! ```

use std::fmt;

use crate::coord::LonSign;

use super::DragDirection;

/// How a single pointer move relates to the anchor's side of the prime
/// meridian.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Previous, current and anchor longitudes share a sign.
    SameSide,

    /// The pointer moved off the anchor's side.
    ///
    /// The sign flip happened either over the prime meridian or over the date
    /// line; `over_date_line` is the direction of travel in the date line
    /// case (positive to negative longitude is eastward across ±180°).
    LeftAnchorSide { over_date_line: DragDirection },

    /// The pointer moved back onto the anchor's side.
    ReturnedToAnchorSide,

    /// No rule applies; the state is left alone.
    Unclassified,
}

impl Transition {
    /// Classify a move from `last` to `current` for a drag anchored at
    /// `anchor` (all longitudes in radians).
    pub fn classify(last: f64, current: f64, anchor: f64) -> Self {
        use LonSign::{Negative, Positive};

        match (LonSign::of(last), LonSign::of(current), LonSign::of(anchor)) {
            (Some(Positive), Some(Positive), Some(Positive))
            | (Some(Negative), Some(Negative), Some(Negative)) => Transition::SameSide,

            (Some(Positive), Some(Negative), Some(Positive)) => Transition::LeftAnchorSide {
                over_date_line: DragDirection::East,
            },
            (Some(Negative), Some(Positive), Some(Negative)) => Transition::LeftAnchorSide {
                over_date_line: DragDirection::West,
            },

            (Some(Negative), Some(Positive), Some(Positive))
            | (Some(Positive), Some(Negative), Some(Negative)) => {
                Transition::ReturnedToAnchorSide
            }

            _ => Transition::Unclassified,
        }
    }

    /// Short name for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            Transition::SameSide => "same-side",
            Transition::LeftAnchorSide { .. } => "left-anchor-side",
            Transition::ReturnedToAnchorSide => "returned-to-anchor-side",
            Transition::Unclassified => "unclassified",
        }
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
