//! Classroom command-line sign-up.

mod cli;
mod commands;
mod output;
mod store;
mod timing;

use anyhow::{Context as _, Result};
use clap::Parser as _;
use classroom_business::BusinessConfig;
use tracing::debug;

use crate::cli::{Cli, Commands};
use crate::store::FileStore;

fn business_config(api_url: Option<String>) -> Result<BusinessConfig> {
    match api_url {
        Some(url) => Ok(BusinessConfig::new(url.trim_end_matches('/'))),
        None => BusinessConfig::from_env().context("Failed to read configuration from environment"),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    timing::init_tracing(cli.verbose, cli.timing);

    let store = match cli.store {
        Some(path) => FileStore::new(path),
        None => FileStore::open_default()?,
    };
    debug!(path = %store.path().display(), "Using session store");

    match cli.command {
        Commands::Register(args) => {
            let config = business_config(cli.api_url)?;
            debug!(api_url = %config.api_url(), "Using backend");
            commands::run_register(config, store, args).await
        }
        Commands::Session => commands::show_session(&store),
        Commands::Logout => commands::logout(&store),
        Commands::Completions { shell } => {
            commands::generate_completions(shell);
            Ok(())
        }
    }
}
