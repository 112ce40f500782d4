use anyhow::Context;
use clap::Parser;

mod cli;
mod commands;
mod context;
mod output;
mod pipeline;
mod progress;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("hrb error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose);

    let flags = cli.global_flags();
    let config =
        herb_config::HerbConfig::load_with_dotenv().context("failed to load configuration")?;
    let ctx = context::AppContext::init(config);

    commands::dispatch(cli.command, &ctx, &flags).await
}

fn init_tracing(quiet: bool, verbose: bool) {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
