use clap::Parser;
use sk_demos::demos::LineDemo;
use sk_demos::{init_logging, run, CommonArgs};

/// A single white line segment
#[derive(Parser)]
#[command(name = "line")]
struct Args {
    #[command(flatten)]
    common: CommonArgs,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();
    let args = Args::parse();

    let mut demo = LineDemo::new(args.common.size(LineDemo::DEFAULT_SIZE)?);
    run(&mut demo, &args.common, &[])?;
    Ok(())
}
