use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// API quota of the authenticated user (`GET /user`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MyLimits {
    #[serde(deserialize_with = "crate::nullable::or_default")]
    pub api_requests: u64,
    #[serde(deserialize_with = "crate::nullable::or_default")]
    pub api_requests_count: u64,
    #[serde(deserialize_with = "crate::nullable::or_default")]
    pub user_id: u64,
    #[serde(deserialize_with = "crate::nullable::or_default")]
    pub patron_status: String,
    #[serde(deserialize_with = "crate::nullable::or_default")]
    pub patreon_pledge: u64,
}

/// Sync timestamps (`GET /sync/last_activities`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LastActivities {
    pub watchlisted_at: Option<DateTime<Utc>>,
}
