//! folio-cli: command-line client for the portfolio API.
#![deny(clippy::all, clippy::pedantic)]

mod args;
mod error;
mod handlers;
mod io;
mod print;
#[cfg(test)]
mod tests;

use clap::Parser;

use folio::client::ApiClient;

use args::{Cli, Commands};
use error::CliError;

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let settings = folio::config::load(cli.config_file.as_deref(), &cli.overrides)?;
    folio::infra::telemetry::init(&settings.logging)?;

    let client = ApiClient::new(settings.api.site_url.as_str())?;

    match cli.command {
        Commands::Home => handlers::home::handle(&client).await?,
        Commands::About(cmd) => handlers::about::handle(&client, cmd.action).await?,
        Commands::Posts(cmd) => handlers::posts::handle(&client, cmd.action).await?,
        Commands::Projects(cmd) => handlers::projects::handle(&client, cmd.action).await?,
        Commands::Prefs(cmd) => handlers::prefs::handle(cmd.file, cmd.action)?,
    }

    Ok(())
}
