use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use aemscan::args::Args;
use aemscan::cli;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()),
        )
        .init();

    let exit_code = cli::scan(&args).await?;
    std::process::exit(exit_code);
}
