use clap::Parser;
use sk_demos::demos::BezierDemo;
use sk_demos::{init_logging, run, CommonArgs};

/// Quadratic Bezier curve as a line strip
#[derive(Parser)]
#[command(name = "bezier")]
struct Args {
    #[command(flatten)]
    common: CommonArgs,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();
    let args = Args::parse();

    let mut demo = BezierDemo::new(args.common.size(BezierDemo::DEFAULT_SIZE)?)?;
    run(&mut demo, &args.common, &[])?;
    Ok(())
}
