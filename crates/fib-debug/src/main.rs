use std::io;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod arith;
mod driver;
mod errors;
mod fib;

use driver::DriverConfig;

#[derive(Parser)]
/// Prints the first few fibonacci numbers and demonstrates recovering from a division error.
struct Opts {
    /// Comma-separated values to compute fibonacci for
    #[arg(long, value_delimiter = ',', default_values_t = [1u32, 2, 3, 4, 5, 6, 7, 8])]
    numbers: Vec<u32>,

    /// Dividend for the division demo
    #[arg(long, default_value_t = 10, allow_hyphen_values = true)]
    dividend: i64,

    /// Divisor for the division demo
    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    divisor: i64,
}

impl From<Opts> for DriverConfig {
    fn from(opts: Opts) -> Self {
        Self {
            numbers: opts.numbers,
            dividend: opts.dividend,
            divisor: opts.divisor,
        }
    }
}

fn main() -> anyhow::Result<()> {
    // logs go to stderr, stdout carries only the demo output
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = DriverConfig::from(Opts::parse());

    let stdout = io::stdout();
    let summary = driver::run(&mut stdout.lock(), &config)?;
    debug!(?summary, "run finished");

    Ok(())
}
