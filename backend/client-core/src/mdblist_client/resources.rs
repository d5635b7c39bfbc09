//! The resource-method table.
//!
//! Each row names an operation, its HTTP verb, path template, optional query
//! and body, and the response type. `resource_table!` turns every row into a
//! `ResourceMethod` constant and a typed async method on [`MdblistClient`],
//! so endpoints that differ only in path and types share one code path.

use super::{HttpMethod, MdblistClient, PathTemplate, QueryParams, ResourceMethod};
use crate::error::MdblistClientError;

use models::{
    LastActivities, ListChanges, ListItems, ListNameUpdate, ListUpdateResponse, MdbList,
    MediaInfo, MediaInfoBatchRequest, ModifyAction, ModifyListRequest, ModifyListResponse,
    ModifyWatchlistResponse, MyLimits, RatingsRequest, RatingsResponse, SearchResult,
    WatchlistItems,
};

use serde::Serialize;

/// A request body with a pre-flight check.
///
/// `check` runs before the URL is built; a failure never reaches the network.
pub trait RequestPayload: Serialize {
    fn check(&self) -> Result<(), MdblistClientError> {
        Ok(())
    }
}

impl RequestPayload for ListNameUpdate {
    #[track_caller]
    fn check(&self) -> Result<(), MdblistClientError> {
        if self.name.trim().is_empty() {
            return Err(MdblistClientError::validation("new list name cannot be empty"));
        }
        Ok(())
    }
}

impl RequestPayload for MediaInfoBatchRequest {
    #[track_caller]
    fn check(&self) -> Result<(), MdblistClientError> {
        if self.ids.is_empty() {
            return Err(MdblistClientError::validation(
                "at least one media ID must be provided",
            ));
        }
        Ok(())
    }
}

impl RequestPayload for RatingsRequest {
    #[track_caller]
    fn check(&self) -> Result<(), MdblistClientError> {
        if self.ids.is_empty() {
            return Err(MdblistClientError::validation(
                "at least one media ID must be provided",
            ));
        }
        if self.provider.trim().is_empty() {
            return Err(MdblistClientError::validation("provider cannot be empty"));
        }
        Ok(())
    }
}

impl RequestPayload for ModifyListRequest {
    #[track_caller]
    fn check(&self) -> Result<(), MdblistClientError> {
        if self.is_empty() {
            return Err(MdblistClientError::validation(
                "at least one movie or show ID must be provided",
            ));
        }
        Ok(())
    }
}

macro_rules! resource_table {
    (@flag) => { false };
    (@flag $present:ident) => { true };
    (@query) => { &QueryParams::new() };
    (@query $query:ident) => { $query };
    (@body) => { None::<&()> };
    (@body $body:ident) => { Some($body) };

    ($(
        $(#[$attr:meta])*
        $constant:ident => fn $name:ident($($arg:ident: $arg_ty:ty),*) -> $response:ty
            = $method:ident $path:literal
            $(, query: $query:ident)?
            $(, body: $body:ident: $body_ty:ty)?;
    )+) => {
        $(
            pub const $constant: ResourceMethod = ResourceMethod {
                name: stringify!($name),
                method: HttpMethod::$method,
                path: PathTemplate::new($path),
                has_query: resource_table!(@flag $($query)?),
                has_body: resource_table!(@flag $($body)?),
                response: stringify!($response),
            };
        )+

        /// Every row of the table, in declaration order.
        pub const RESOURCE_METHODS: &[ResourceMethod] = &[$($constant),+];

        impl MdblistClient {
            $(
                $(#[$attr])*
                pub async fn $name(
                    &self,
                    $($arg: $arg_ty,)*
                    $($query: &QueryParams,)?
                    $($body: &$body_ty,)?
                ) -> Result<$response, MdblistClientError> {
                    $($body.check()?;)?
                    let values: &[(&str, String)] = &[$((stringify!($arg), $arg.to_string())),*];
                    let path = $constant.path.resolve(values)?;
                    self.execute(
                        $constant.method,
                        &path,
                        resource_table!(@query $($query)?),
                        resource_table!(@body $($body)?),
                    )
                    .await
                }
            )+
        }
    };
}

resource_table! {
    /// API limits of the authenticated user.
    MY_LIMITS => fn get_my_limits() -> MyLimits = Get "/user";

    /// Lists owned by the authenticated user.
    MY_LISTS => fn get_my_lists() -> Vec<MdbList> = Get "/lists/user";

    USER_LISTS_BY_ID => fn get_user_lists_by_id(user_id: u64) -> Vec<MdbList>
        = Get "/lists/user/{user_id}";

    USER_LISTS_BY_NAME => fn get_user_lists_by_name(username: &str) -> Vec<MdbList>
        = Get "/lists/user/{username}";

    /// List details. The API answers with a one-element array.
    LIST_BY_ID => fn get_list_by_id(list_id: u64) -> Vec<MdbList> = Get "/lists/{list_id}";

    LIST_BY_NAME => fn get_list_by_name(username: &str, listname: &str) -> Vec<MdbList>
        = Get "/lists/{username}/{listname}";

    UPDATE_LIST_NAME_BY_ID => fn update_list_name_by_id(list_id: u64) -> ListUpdateResponse
        = Put "/lists/{list_id}", body: rename: ListNameUpdate;

    UPDATE_LIST_NAME_BY_NAME => fn update_list_name_by_name(username: &str, listname: &str)
        -> ListUpdateResponse
        = Put "/lists/{username}/{listname}", body: rename: ListNameUpdate;

    /// Items of a list. Accepts paging and sorting parameters.
    LIST_ITEMS_BY_ID => fn get_list_items_by_id(list_id: u64) -> ListItems
        = Get "/lists/{list_id}/items", query: query;

    LIST_ITEMS_BY_NAME => fn get_list_items_by_name(username: &str, listname: &str) -> ListItems
        = Get "/lists/{username}/{listname}/items", query: query;

    /// Trakt ids changed after the last list update.
    LIST_CHANGES => fn get_list_changes(list_id: u64) -> ListChanges
        = Get "/lists/{list_id}/changes";

    /// One media item, e.g. provider `tmdb`, media type `movie`, id `603`.
    MEDIA_INFO => fn get_media_info(provider: &str, media_type: &str, media_id: &str) -> MediaInfo
        = Get "/{provider}/{media_type}/{media_id}", query: query;

    MEDIA_INFO_BATCH => fn get_media_info_batch(provider: &str, media_type: &str) -> Vec<MediaInfo>
        = Post "/{provider}/{media_type}", body: request: MediaInfoBatchRequest;

    /// Search movies, shows or both (`any`).
    SEARCH_MEDIA => fn search_media(media_type: &str) -> SearchResult
        = Get "/search/{media_type}", query: query;

    /// Top lists by Trakt likes.
    TOP_LISTS => fn get_top_lists() -> Vec<MdbList> = Get "/lists/top";

    /// Public lists by title.
    SEARCH_LISTS => fn search_lists() -> Vec<MdbList> = Get "/lists/search", query: query;

    RATINGS => fn get_ratings(media_type: &str, return_rating: &str) -> RatingsResponse
        = Post "/rating/{media_type}/{return_rating}", body: request: RatingsRequest;

    /// Add or remove items of a static list.
    MODIFY_LIST_ITEMS => fn modify_list_items(list_id: u64, action: ModifyAction)
        -> ModifyListResponse
        = Post "/lists/{list_id}/items/{action}", body: items: ModifyListRequest;

    LAST_ACTIVITIES => fn get_last_activities() -> LastActivities = Get "/sync/last_activities";

    /// Watchlist items, sorted by date added unless `sort` is given.
    WATCHLIST_ITEMS => fn get_watchlist_items() -> WatchlistItems
        = Get "/watchlist/items", query: query;

    MODIFY_WATCHLIST => fn modify_watchlist(action: ModifyAction) -> ModifyWatchlistResponse
        = Post "/watchlist/items/{action}", body: items: ModifyListRequest;
}
