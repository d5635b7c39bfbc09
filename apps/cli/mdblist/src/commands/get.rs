use crate::cli::GetCommands;
use crate::error::MdblistCliError;
use crate::output::render;

use client_core::config::OutputFormat;
use client_core::{MdblistClient, QueryParams};

use models::{MediaInfoBatchRequest, RatingsRequest};

use log::{debug, info};

pub async fn execute(
    client: &MdblistClient,
    command: &GetCommands,
    format: OutputFormat,
) -> Result<String, MdblistCliError> {
    match command {
        GetCommands::MyLimits => render(&client.get_my_limits().await?, format),

        GetCommands::MyLists => render(&client.get_my_lists().await?, format),

        GetCommands::UserLists(user) => {
            let user = user.resolve()?;
            render(&client.get_user_lists(&user).await?, format)
        }

        GetCommands::List(list) => {
            let list = list.resolve()?;
            render(&client.get_list(&list).await?, format)
        }

        GetCommands::ListItems {
            list,
            page,
            sort,
            order,
        } => {
            let list = list.resolve()?;
            let query = page
                .apply(QueryParams::new())
                .with_opt("sort", sort.as_deref())
                .with_opt("order", order.as_deref());
            let items = client.get_list_items(&list, &query).await?;
            info!("Fetched {} list items", items.len());
            render(&items, format)
        }

        GetCommands::ListChanges { list_id } => {
            render(&client.get_list_changes(*list_id).await?, format)
        }

        GetCommands::MediaInfo {
            provider,
            media_type,
            media_id,
            append_to_response,
        } => {
            let query = QueryParams::new().with_list("append_to_response", append_to_response);
            let info = client
                .get_media_info(provider, media_type, media_id, &query)
                .await?;
            render(&info, format)
        }

        GetCommands::MediaInfoBatch {
            provider,
            media_type,
            ids,
            append_to_response,
        } => {
            let request = MediaInfoBatchRequest {
                ids: ids.clone(),
                append_to_response: append_to_response.clone(),
            };
            debug!("Batch lookup of {} {provider} ids", request.ids.len());
            let infos = client
                .get_media_info_batch(provider, media_type, &request)
                .await?;
            render(&infos, format)
        }

        GetCommands::TopLists => render(&client.get_top_lists().await?, format),

        GetCommands::LastActivities => render(&client.get_last_activities().await?, format),

        GetCommands::WatchlistItems { sort, page } => {
            let query = page
                .apply(QueryParams::new())
                .with_opt("sort", sort.as_deref());
            render(&client.get_watchlist_items(&query).await?, format)
        }

        GetCommands::Ratings {
            media_type,
            return_rating,
            provider,
            ids,
        } => {
            let request = RatingsRequest {
                ids: ids.clone(),
                provider: provider.clone(),
            };
            let ratings = client
                .get_ratings(media_type, return_rating, &request)
                .await?;
            render(&ratings, format)
        }
    }
}
