use anyhow::Result;
use clap::Parser;
use evaluator::{run, EvalOptions};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "evaluator")]
#[command(about = "11-point interpolated precision/recall over a set of queries", long_about = None)]
struct Args {
    /// Judgment file: N, then N ideal lines, then N system lines
    input: PathBuf,
    /// Directory that receives media.txt
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,
    /// Also write per-query curves as JSON to this path
    #[arg(long)]
    curves: Option<PathBuf>,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(std::io::stderr).init();
    let args = Args::parse();
    let opts = EvalOptions { output_dir: args.output_dir, curves: args.curves };

    let report = run(&args.input, &opts)?;
    for (level, precision) in report.mean.points() {
        println!("{level:.1} {precision:.2}");
    }
    Ok(())
}
