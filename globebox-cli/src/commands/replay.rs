//! `globebox replay`: run a recorded pointer trace through a drag session.
//!
//! A trace is JSON with the press position and every pointer move in
//! degrees. `null` stands for a move with the pointer off the globe:
//!
//! ```json
//! {
//!   "anchor": { "lat": -18.0, "lon": 178.0 },
//!   "moves": [
//!     { "lat": -16.0, "lon": 179.5 },
//!     null,
//!     { "lat": -14.0, "lon": -172.0 }
//!   ]
//! }
//! ```

use std::io::Write;
use std::path::{Path, PathBuf};

use clap::Args;
use globebox::{BboxModel, CoordError, DragSession, DrawObserver, GeoPoint, Rectangle, TrackerConfig};
use serde::{Deserialize, Serialize};

use crate::error::CliError;

/// Arguments for `globebox replay`.
#[derive(Debug, Args)]
pub struct ReplayArgs {
    /// JSON trace file to replay
    pub file: PathBuf,

    /// Print the report on a single line
    #[arg(long)]
    pub compact: bool,
}

/// A position in a trace, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TracePoint {
    pub lat: f64,
    pub lon: f64,
}

impl TracePoint {
    fn to_geo(self) -> Result<GeoPoint, CoordError> {
        GeoPoint::from_degrees(self.lat, self.lon)
    }
}

/// A recorded drag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    pub anchor: TracePoint,
    #[serde(default)]
    pub moves: Vec<Option<TracePoint>>,
}

impl Trace {
    /// Read a trace from a JSON file.
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let contents = std::fs::read_to_string(path).map_err(|source| CliError::ReadTrace {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&contents)?)
    }
}

/// One box handed to the renderer during the replay.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DrawnFrame {
    /// Index of the move in the trace.
    pub step: usize,
    pub crossing_date_line: bool,
    pub bbox: BboxModel,
}

/// Everything a replay produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplayReport {
    pub drawn: Vec<DrawnFrame>,
    pub committed: BboxModel,
}

/// Collects drawn frames, tagging each with the move that produced it.
#[derive(Debug, Default)]
struct FrameRecorder {
    step: usize,
    frames: Vec<DrawnFrame>,
}

impl DrawObserver for FrameRecorder {
    fn on_rectangle(&mut self, rectangle: &Rectangle, model: &BboxModel) {
        self.frames.push(DrawnFrame {
            step: self.step,
            crossing_date_line: rectangle.crosses_date_line(),
            bbox: *model,
        });
    }
}

/// Replay `trace` with `config` and collect the report.
pub fn replay(trace: &Trace, config: TrackerConfig) -> Result<ReplayReport, CliError> {
    let anchor = trace.anchor.to_geo()?;
    let moves = trace
        .moves
        .iter()
        .map(|m| m.map(TracePoint::to_geo).transpose())
        .collect::<Result<Vec<_>, _>>()?;

    let mut session = DragSession::new(config, FrameRecorder::default());
    session.press(Some(anchor));

    for (step, current) in moves.into_iter().enumerate() {
        session.observer_mut().step = step;
        if current.is_none() {
            tracing::trace!(step, "Pointer off the globe");
        }
        session.pointer_move(current);
    }

    let committed = session.release().unwrap_or_default();
    let drawn = session.into_observer().frames;
    tracing::debug!(frames = drawn.len(), "Replay finished");

    Ok(ReplayReport { drawn, committed })
}

/// Run `globebox replay`.
pub fn run(args: &ReplayArgs, config: TrackerConfig, out: &mut impl Write) -> Result<(), CliError> {
    let trace = Trace::load(&args.file)?;
    tracing::info!(file = %args.file.display(), moves = trace.moves.len(), "Replaying trace");

    let report = replay(&trace, config)?;
    if args.compact {
        serde_json::to_writer(&mut *out, &report)?;
    } else {
        serde_json::to_writer_pretty(&mut *out, &report)?;
    }
    writeln!(out)?;
    Ok(())
}
