//! Spinning wireframe of a mesh read from an OFF file.
//!
//! Dragging with the left button pans the camera.

use std::path::PathBuf;

use clap::Parser;
use log::{error, info};
use sk_demos::demos::RabbitDemo;
use sk_demos::{init_logging, run, CommonArgs};

#[derive(Parser)]
#[command(name = "rabbit")]
#[command(about = "Rotating wireframe of an OFF mesh", long_about = None)]
struct Args {
    #[command(flatten)]
    common: CommonArgs,

    /// Path to the OFF model
    #[arg(default_value = RabbitDemo::DEFAULT_MODEL)]
    model: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();
    let args = Args::parse();

    info!("Loading model from: {}", args.model.display());
    let size = args.common.size(RabbitDemo::DEFAULT_SIZE)?;
    let mut demo = match RabbitDemo::open(&args.model, size) {
        Ok(demo) => demo,
        Err(e) => {
            error!("Failed to load model: {}", e);
            return Err(Box::new(e));
        }
    };
    run(&mut demo, &args.common, &[])?;
    Ok(())
}
