//! Command line options, logging setup, and runner selection shared by every
//! program.

use std::path::PathBuf;

use clap::Args;
use log::info;
use sk_core::{Result, SketchError};
use sk_render::{run_headless, Demo, PointerEvent};

/// Options accepted by every program.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Window width in pixels (defaults to the program's own size)
    #[arg(long)]
    pub width: Option<u32>,

    /// Window height in pixels (defaults to the program's own size)
    #[arg(long)]
    pub height: Option<u32>,

    /// Render a single frame to this PPM file instead of opening a window
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl CommonArgs {
    /// The requested size, falling back to `default` per axis.
    pub fn size(&self, default: (u32, u32)) -> Result<(u32, u32)> {
        let size = (self.width.unwrap_or(default.0), self.height.unwrap_or(default.1));
        if size.0 == 0 || size.1 == 0 {
            return Err(SketchError::invalid(format!(
                "window size must be non-zero, got {}x{}",
                size.0, size.1
            )));
        }
        Ok(size)
    }
}

/// Load `.env` if present, then start `env_logger` with a default `info`
/// filter that `RUST_LOG` overrides.
pub fn init_logging() {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("Warning: Failed to load .env file: {}", e);
        }
    }
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

/// Parse a `X,Y` pixel pair.
pub fn parse_click(s: &str) -> Result<(i32, i32)> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| SketchError::parse(format!("expected X,Y, got {:?}", s)))?;
    let coord = |c: &str| {
        c.trim()
            .parse::<i32>()
            .map_err(|_| SketchError::parse(format!("invalid pixel coordinate {:?} in {:?}", c, s)))
    };
    Ok((coord(x)?, coord(y)?))
}

/// Each click as a press immediately followed by a release.
pub fn clicks_to_events(clicks: &[(i32, i32)]) -> Vec<PointerEvent> {
    clicks
        .iter()
        .flat_map(|&(x, y)| [PointerEvent::Pressed { x, y }, PointerEvent::Released { x, y }])
        .collect()
}

/// Render headless when `--output` is given, otherwise open a window.
///
/// `events` are replayed before the headless frame; windowed runs take live
/// input instead.
pub fn run(demo: &mut dyn Demo, common: &CommonArgs, events: &[PointerEvent]) -> Result<()> {
    match &common.output {
        Some(path) => run_headless(demo, events, path),
        None => {
            if !events.is_empty() {
                info!("ignoring {} scripted pointer events in windowed mode", events.len());
            }
            run_window(demo)
        }
    }
}

#[cfg(feature = "window")]
fn run_window(demo: &mut dyn Demo) -> Result<()> {
    sk_render::run_windowed(demo)
}

#[cfg(not(feature = "window"))]
fn run_window(demo: &mut dyn Demo) -> Result<()> {
    Err(SketchError::Window(format!(
        "{} was built without window support; pass --output to render to a file",
        demo.title()
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_click() {
        assert_eq!(parse_click("120,45").unwrap(), (120, 45));
        assert_eq!(parse_click(" 3 , -4 ").unwrap(), (3, -4));
        assert!(matches!(parse_click("12").unwrap_err(), SketchError::Parse(_)));
        assert!(matches!(parse_click("a,2").unwrap_err(), SketchError::Parse(_)));
    }

    #[test]
    fn test_size_defaults_and_overrides() {
        let args = CommonArgs {
            width: Some(640),
            ..Default::default()
        };
        assert_eq!(args.size((800, 600)).unwrap(), (640, 600));
        let zero = CommonArgs {
            height: Some(0),
            ..Default::default()
        };
        assert!(zero.size((800, 600)).is_err());
    }

    #[test]
    fn test_clicks_become_press_release_pairs() {
        let events = clicks_to_events(&[(1, 2), (3, 4)]);
        assert_eq!(
            events,
            vec![
                PointerEvent::Pressed { x: 1, y: 2 },
                PointerEvent::Released { x: 1, y: 2 },
                PointerEvent::Pressed { x: 3, y: 4 },
                PointerEvent::Released { x: 3, y: 4 },
            ]
        );
    }
}
