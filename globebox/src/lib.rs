//! Globebox - click-drag bounding boxes on a globe
//!
//! This library turns a click-drag over a 3D globe into a geographic
//! rectangle suitable for a search filter. The interesting part is the date
//! line: a box dragged across ±180° must be reported with inverted east/west
//! ordering so renderers wrap it round the back of the globe instead of
//! drawing it across the whole planet.
//!
//! # Modules
//!
//! - [`coord`]: points in radians, degree helpers
//! - [`rectangle`]: normalized rectangles and the degenerate-size guard
//! - [`tracker`]: the date-line state machine
//! - [`model`]: degree-valued model persisted for filters
//! - [`session`]: press / move / release lifecycle
//! - [`config`]: INI-backed tuning
//!
//! Rendering, camera control and picking screen positions onto the globe are
//! out of scope; a [`session::DrawObserver`] is the hook for those.

pub mod config;
pub mod coord;
pub mod model;
pub mod rectangle;
pub mod session;
pub mod tracker;

pub use config::{ConfigError, TrackerConfig};
pub use coord::{CoordError, GeoPoint};
pub use model::BboxModel;
pub use rectangle::{Rectangle, DEFAULT_EPSILON};
pub use session::{DragSession, DrawObserver, NoopObserver, SessionPhase};
pub use tracker::{BboxTracker, DragDirection, TrackerState, Transition};
