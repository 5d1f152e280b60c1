//! Interactive cubic B-spline editor.
//!
//! Press and drag the left mouse button to append control points. With
//! `--output`, the `--click` positions are replayed before rendering.

use clap::Parser;
use log::info;
use sk_demos::cli::{clicks_to_events, parse_click};
use sk_demos::demos::BSplineEditorDemo;
use sk_demos::{init_logging, run, CommonArgs};

#[derive(Parser)]
#[command(name = "bspline-editor")]
#[command(about = "Click and drag to build a clamped cubic B-spline", long_about = None)]
struct Args {
    #[command(flatten)]
    common: CommonArgs,

    /// Scripted click in window pixels, e.g. `--click 120,340` (repeatable)
    #[arg(long = "click", value_name = "X,Y", value_parser = parse_click)]
    clicks: Vec<(i32, i32)>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();
    let args = Args::parse();

    let mut demo = BSplineEditorDemo::new(args.common.size(BSplineEditorDemo::DEFAULT_SIZE)?);
    let events = clicks_to_events(&args.clicks);
    if !events.is_empty() {
        info!("Replaying {} clicks", args.clicks.len());
    }
    run(&mut demo, &args.common, &events)?;
    Ok(())
}
