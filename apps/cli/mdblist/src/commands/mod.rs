//! Command dispatch. Each handler performs one API call and returns the
//! rendered response.

pub mod get;
pub mod search;
pub mod update;

use crate::cli::Commands;
use crate::error::MdblistCliError;

use client_core::MdblistClient;
use client_core::config::OutputFormat;

pub async fn execute(
    client: &MdblistClient,
    command: &Commands,
    format: OutputFormat,
) -> Result<String, MdblistCliError> {
    match command {
        Commands::Get(get) => get::execute(client, get, format).await,
        Commands::Search(search) => search::execute(client, search, format).await,
        Commands::Update(update) => update::execute(client, update, format).await,
    }
}
