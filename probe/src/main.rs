use std::io;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod error;
mod report;
mod runner;

use cli::Args;
use runner::Outcome;

fn init_tracing() {
    // stdout is the report; diagnostics go to stderr and are off unless RUST_LOG asks for them.
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env before clap reads the environment.
    dotenvy::dotenv().ok();
    init_tracing();

    let settings = Args::parse().into_settings();
    let outcome = runner::run(&settings, &mut io::stdout()).await?;
    if let Outcome::Rejected(status) = outcome {
        // Not fatal: the report above already told the user what went wrong.
        tracing::debug!(%status, "server rejected the probe");
    }
    Ok(())
}
