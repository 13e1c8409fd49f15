//! Entry point: parse CLI and dispatch to the command handler.

use anyhow::Context;
use clap::Parser;
use liveclientdata::{cli::LiveCli, commands::handle_command, LiveClient, LiveClientConfig};

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app = LiveCli::parse();

    let default_filter = if app.debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let config = LiveClientConfig::resolve(app.connection.base_url, app.connection.timeout_ms)?;
    let client = LiveClient::with_config(config).context("failed to build HTTP client")?;

    let output = handle_command(&client, &app.command, app.compact)
        .await
        .with_context(|| format!("request to /{} failed", app.command.endpoint()))?;
    println!("{}", output);

    Ok(())
}
