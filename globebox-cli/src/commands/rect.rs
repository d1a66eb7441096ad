//! `globebox rect`: the box spanned by a single drag.

use std::io::Write;

use clap::Args;
use globebox::{DragSession, GeoPoint, TrackerConfig};

use crate::error::CliError;

/// Arguments for `globebox rect`.
#[derive(Debug, Args)]
pub struct RectArgs {
    /// Where the drag starts, as LAT,LON in degrees
    #[arg(long, value_name = "LAT,LON", allow_hyphen_values = true)]
    pub from: GeoPoint,

    /// Where the pointer is released, as LAT,LON in degrees
    #[arg(long, value_name = "LAT,LON", allow_hyphen_values = true)]
    pub to: GeoPoint,
}

/// Drag from `args.from` straight to `args.to` and print the result.
///
/// Writes the rectangle in degrees on one line, then the committed model as
/// JSON. A single move never crosses the date line; use `replay` with
/// intermediate points for that.
pub fn run(args: &RectArgs, config: TrackerConfig, out: &mut impl Write) -> Result<(), CliError> {
    let mut session = DragSession::new(config, globebox::NoopObserver);
    session.press(Some(args.from));
    let rect = session.pointer_move(Some(args.to));
    let model = session.release().unwrap_or_default();

    if let Some(rect) = rect {
        writeln!(out, "{}", rect)?;
    }
    writeln!(out, "{}", serde_json::to_string(&model)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(from: &str, to: &str) -> RectArgs {
        RectArgs {
            from: from.parse().unwrap(),
            to: to.parse().unwrap(),
        }
    }

    fn output(args: &RectArgs, config: TrackerConfig) -> String {
        let mut out = Vec::new();
        run(args, config, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_prints_rectangle_and_model() {
        let text = output(&args("40,-5", "45.5,3"), TrackerConfig::default());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("N45.5000 S40.0000 E3.0000 W-5.0000"));
        assert_eq!(
            lines[1],
            r#"{"north":45.5,"south":40.0,"east":3.0,"west":-5.0}"#
        );
    }

    #[test]
    fn test_honours_precision() {
        let config = TrackerConfig {
            precision: 1,
            ..TrackerConfig::default()
        };
        let text = output(&args("0.04,0.04", "1.26,2.34"), config);
        assert!(text.ends_with("{\"north\":1.3,\"south\":0.0,\"east\":2.3,\"west\":0.0}\n"));
    }
}
