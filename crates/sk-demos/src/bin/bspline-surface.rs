//! Wireframe of a biquadratic B-spline saddle with coordinate axes.

use clap::Parser;
use log::info;
use sk_demos::demos::BSplineSurfaceDemo;
use sk_demos::{init_logging, run, CommonArgs};

#[derive(Parser)]
#[command(name = "bspline-surface")]
#[command(about = "Tensor-product B-spline surface drawn as a wire grid", long_about = None)]
struct Args {
    #[command(flatten)]
    common: CommonArgs,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();
    let args = Args::parse();

    let mut demo = BSplineSurfaceDemo::new(args.common.size(BSplineSurfaceDemo::DEFAULT_SIZE)?)?;
    let grid = demo.grid();
    info!("Sampled surface on a {}x{} grid", grid.u_count(), grid.v_count());
    run(&mut demo, &args.common, &[])?;
    Ok(())
}
