//! Write commands. A one-line confirmation goes to stderr so stdout stays
//! machine-readable.

use crate::cli::UpdateCommands;
use crate::error::MdblistCliError;
use crate::output::render;

use client_core::MdblistClient;
use client_core::config::OutputFormat;

use common::ErrorLocation;
use models::ModifyAction;

use std::panic::Location;

use log::info;

pub async fn execute(
    client: &MdblistClient,
    command: &UpdateCommands,
    format: OutputFormat,
) -> Result<String, MdblistCliError> {
    match command {
        UpdateCommands::ListName { new_name, list } => {
            let list = list.resolve()?;
            let response = client.update_list_name(&list, new_name).await?;
            eprintln!("List name updated successfully.");
            render(&response, format)
        }

        UpdateCommands::ListItems { id, action, items } => {
            if *id == 0 {
                return Err(MdblistCliError::Cli {
                    message: String::from("--id is required"),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
            let action = ModifyAction::from(*action);
            let request = items.build()?;
            info!("{action} {} items on list {id}", request.len());

            let response = client.modify_list_items(*id, action, &request).await?;
            eprintln!("List items updated successfully (action: {action}).");
            render(&response, format)
        }

        UpdateCommands::Watchlist { action, items } => {
            let action = ModifyAction::from(*action);
            let request = items.build()?;
            info!("{action} {} watchlist items", request.len());

            let response = client.modify_watchlist(action, &request).await?;
            eprintln!("Watchlist updated successfully (action: {action}).");
            render(&response, format)
        }
    }
}
