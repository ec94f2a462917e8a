use std::path::PathBuf;

use clap::Parser;
use day_11::driver::{process, read_input};
use miette::{Context, IntoDiagnostic};
use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

/// Counts the stones left after 25 and 50 blinks.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Whitespace-separated stone values
    #[arg(default_value = "input/2024/11.txt")]
    input: PathBuf,
}

#[tracing::instrument]
fn main() -> miette::Result<()> {
    init()?;
    let args = Args::parse();

    let file = read_input(&args.input).context("read puzzle input")?;
    let report = process(&file);
    println!("{}", report);
    Ok(())
}

fn init() -> miette::Result<()> {
    let filter = EnvFilter::from_default_env()
        .add_directive("day_11=info".parse().into_diagnostic()?);
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_span_events(FmtSpan::NONE)
        .with_writer(std::io::stderr)
        .try_init();
    Ok(())
}
