//! A lit, solid teapot.

use clap::Parser;
use log::info;
use sk_demos::demos::TeapotDemo;
use sk_demos::{init_logging, run, CommonArgs};

#[derive(Parser)]
#[command(name = "teapot")]
#[command(about = "Solid teapot under a single directional light", long_about = None)]
struct Args {
    #[command(flatten)]
    common: CommonArgs,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();
    let args = Args::parse();

    let mut demo = TeapotDemo::new(args.common.size(TeapotDemo::DEFAULT_SIZE)?)?;
    info!("Teapot tessellated into {} triangles", demo.mesh().triangle_count());
    run(&mut demo, &args.common, &[])?;
    Ok(())
}
