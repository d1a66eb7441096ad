//! Drag session lifecycle.
//!
//! A [`DragSession`] wires pointer events from a globe view to the tracker:
//!
//! ```text
//! Armed --press(on globe)--> Dragging --release--> Committed
//!   ^                          |                       |
//!   +--------cancel------------+                       |
//!   +--------------------restart-----------------------+
//! ```
//!
//! Pointer positions arrive already projected onto the globe. A position of
//! `None` means the pointer is off the globe (e.g. over space at the edge of
//! the view); such events are ignored rather than treated as errors.
//!
//! Rendering the outline, showing a notification banner and re-enabling the
//! camera are left to a [`DrawObserver`].

use crate::config::TrackerConfig;
use crate::coord::GeoPoint;
use crate::model::BboxModel;
use crate::rectangle::Rectangle;
use crate::tracker::BboxTracker;

/// Receives drawing progress from a [`DragSession`].
///
/// All methods default to doing nothing.
pub trait DrawObserver {
    /// A drag started at `anchor`.
    fn on_begin(&mut self, _anchor: &GeoPoint) {}

    /// The box changed and is large enough to draw.
    fn on_rectangle(&mut self, _rectangle: &Rectangle, _model: &BboxModel) {}

    /// The drag ended and `model` is now the committed result.
    fn on_end(&mut self, _model: &BboxModel) {}

    /// The drag was abandoned.
    fn on_cancel(&mut self) {}
}

/// Observer that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl DrawObserver for NoopObserver {}

/// Where a session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionPhase {
    /// Waiting for the button to go down on the globe.
    Armed,
    /// Button held; the box follows the pointer.
    Dragging {
        /// Where the drag started.
        anchor: GeoPoint,
    },
    /// Button released; the model is frozen.
    Committed,
}

impl SessionPhase {
    /// Short name for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionPhase::Armed => "armed",
            SessionPhase::Dragging { .. } => "dragging",
            SessionPhase::Committed => "committed",
        }
    }
}

/// One interactive bounding box drawing.
#[derive(Debug)]
pub struct DragSession<O: DrawObserver = NoopObserver> {
    config: TrackerConfig,
    tracker: BboxTracker,
    phase: SessionPhase,
    model: BboxModel,
    observer: O,
}

impl DragSession<NoopObserver> {
    /// Session with default configuration and no observer.
    pub fn with_defaults() -> Self {
        Self::new(TrackerConfig::default(), NoopObserver)
    }
}

impl<O: DrawObserver> DragSession<O> {
    /// Create an armed session.
    pub fn new(config: TrackerConfig, observer: O) -> Self {
        Self {
            tracker: BboxTracker::new(&config),
            config,
            phase: SessionPhase::Armed,
            model: BboxModel::empty(),
            observer,
        }
    }

    /// Button pressed at `point`.
    ///
    /// Returns `true` if a drag started. Presses off the globe, or while a
    /// drag is already running or committed, are ignored.
    pub fn press(&mut self, point: Option<GeoPoint>) -> bool {
        if self.phase != SessionPhase::Armed {
            return false;
        }
        let Some(anchor) = point.filter(GeoPoint::is_finite) else {
            tracing::trace!("Press off the globe ignored");
            return false;
        };

        self.tracker.reset();
        self.model = BboxModel::empty();
        self.phase = SessionPhase::Dragging { anchor };
        tracing::debug!(%anchor, "Bounding box drag started");
        self.observer.on_begin(&anchor);
        true
    }

    /// Pointer moved to `point` while the button may be held.
    ///
    /// Returns the updated rectangle, or `None` when not dragging, when the
    /// pointer is off the globe, or when no valid rectangle exists yet.
    pub fn pointer_move(&mut self, point: Option<GeoPoint>) -> Option<Rectangle> {
        let SessionPhase::Dragging { anchor } = self.phase else {
            return None;
        };
        let current = point?;

        let rect = self.tracker.update(&anchor, &current)?;
        self.model = BboxModel::from_rectangle(&rect, self.config.precision);

        if self.model.is_drawable() {
            self.observer.on_rectangle(&rect, &self.model);
        }
        Some(rect)
    }

    /// Button released: freeze and return the committed model.
    ///
    /// Returns `None` if no drag was in progress.
    pub fn release(&mut self) -> Option<BboxModel> {
        if !matches!(self.phase, SessionPhase::Dragging { .. }) {
            return None;
        }

        let committed = self.tracker.finish();
        self.phase = SessionPhase::Committed;

        match committed {
            Some(rect) => tracing::info!(
                bbox = %rect,
                crossing = rect.crosses_date_line(),
                "Bounding box committed"
            ),
            None => tracing::info!("Drag ended without a bounding box"),
        }

        self.observer.on_end(&self.model);
        Some(self.model)
    }

    /// Abandon the drag in progress without committing.
    pub fn cancel(&mut self) {
        if !matches!(self.phase, SessionPhase::Dragging { .. }) {
            return;
        }
        self.tracker.reset();
        self.model = BboxModel::empty();
        self.phase = SessionPhase::Armed;
        tracing::debug!("Bounding box drag cancelled");
        self.observer.on_cancel();
    }

    /// Arm the session for a new drawing, discarding the committed model.
    pub fn restart(&mut self) {
        if matches!(self.phase, SessionPhase::Dragging { .. }) {
            self.cancel();
        }
        self.tracker.reset();
        self.model = BboxModel::empty();
        self.phase = SessionPhase::Armed;
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Current (or committed) model.
    pub fn model(&self) -> &BboxModel {
        &self.model
    }

    /// Whether the box in progress straddles the date line.
    pub fn is_crossing_date_line(&self) -> bool {
        self.tracker.is_crossing_date_line()
    }

    /// Configuration in use.
    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Borrow the observer.
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Mutably borrow the observer.
    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Consume the session and return the observer.
    pub fn into_observer(self) -> O {
        self.observer
    }
}
