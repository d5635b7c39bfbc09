//! Wire-format records exchanged with the MDBList API.
//!
//! These are plain data: each value lives for one request/response round
//! trip and is handed to the caller for display. Decoding is lenient in the
//! same ways the service is loose: unknown fields are ignored, missing
//! fields fall back to defaults and a few fields that the service sends as
//! either numbers or strings use [`LooseValue`].

pub mod error;
pub mod list;
pub mod loose_value;
pub mod media;
pub mod modify;
pub mod user;

mod nullable;
#[cfg(test)]
mod tests;

pub use error::model_error::ModelError;
pub use list::{
    ListChanges, ListItem, ListItems, ListNameUpdate, ListUpdateResponse, MdbList, MovieChanges,
    TraktIdChanges, WatchlistItem, WatchlistItems,
};
pub use loose_value::LooseValue;
pub use media::{
    Keyword, MediaIds, MediaInfo, MediaInfoBatchRequest, MediaRating, NamedRef, RatingEntry,
    RatingsRequest, RatingsResponse, Review, SearchHit, SearchIds, SearchResult,
};
pub use modify::{
    MediaIdentifier, ModifyAction, ModifyCounts, ModifyListRequest, ModifyListRequestBuilder,
    ModifyListResponse, ModifyWatchlistResponse,
};
pub use user::{LastActivities, MyLimits};
