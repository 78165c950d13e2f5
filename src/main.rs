use std::io;

use anyhow::Result;
use clap::Parser;
use time_measure::report::{self, Format};

#[derive(Debug, Parser)]
#[command(about = "Times the first triangular numbers")]
struct Cli {
    /// Number of calls, starting from zero
    #[arg(long, short, default_value_t = 100)]
    count: u64,
    #[arg(long, short, value_enum, default_value_t = Format::Text)]
    format: Format,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let mut out = io::stdout().lock();
    report::run(cli.count, cli.format, &mut out)?;
    Ok(())
}
