//! Barnsley's fern drawn by the chaos game.

use clap::Parser;
use log::info;
use sk_demos::demos::FernDemo;
use sk_demos::{init_logging, run, CommonArgs};

#[derive(Parser)]
#[command(name = "fern")]
#[command(about = "Barnsley's fern from a four-map iterated function system", long_about = None)]
struct Args {
    #[command(flatten)]
    common: CommonArgs,

    /// Seed for the map selection; random when omitted
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();
    let args = Args::parse();

    info!("Plotting {} IFS points", FernDemo::ITERATIONS);
    let mut demo = FernDemo::new(args.common.size(FernDemo::DEFAULT_SIZE)?, args.seed);
    run(&mut demo, &args.common, &[])?;
    Ok(())
}
