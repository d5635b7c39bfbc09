use crate::cli::{SearchCommands, require_text};
use crate::error::MdblistCliError;
use crate::output::render;

use client_core::config::OutputFormat;
use client_core::{MdblistClient, QueryParams};

pub async fn execute(
    client: &MdblistClient,
    command: &SearchCommands,
    format: OutputFormat,
) -> Result<String, MdblistCliError> {
    match command {
        SearchCommands::Media {
            media_type,
            query,
            year,
            limit,
        } => {
            let params = QueryParams::new()
                .with("query", require_text("query", query)?)
                .with_opt("year", *year)
                .with_opt("limit", *limit);
            render(&client.search_media(media_type, &params).await?, format)
        }

        SearchCommands::Lists { query } => {
            let params = QueryParams::new().with("query", require_text("query", query)?);
            render(&client.search_lists(&params).await?, format)
        }
    }
}
