//! Addressing modes for lists and users.
//!
//! A list is reachable either by numeric ID or by owner username plus list
//! name (slug); a user by ID or by username. When both are given the numeric
//! ID wins and the name is never used.

use super::{MdblistClient, QueryParams};
use crate::error::MdblistClientError;

use models::{ListItems, ListNameUpdate, ListUpdateResponse, MdbList};

use log::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListRef {
    Id(u64),
    Name { username: String, listname: String },
}

impl ListRef {
    /// Pick the addressing mode from optional CLI-style inputs.
    ///
    /// An ID of `0` and blank strings count as absent.
    ///
    /// # Errors
    /// Returns [`MdblistClientError::Validation`] when there is no ID and the
    /// username/list name pair is incomplete.
    #[track_caller]
    pub fn resolve(
        id: Option<u64>,
        username: Option<&str>,
        listname: Option<&str>,
    ) -> Result<Self, MdblistClientError> {
        if let Some(id) = id.filter(|id| *id != 0) {
            if username.is_some() || listname.is_some() {
                debug!("List ID {id} given together with a name; using the ID");
            }
            return Ok(ListRef::Id(id));
        }

        match (non_blank(username), non_blank(listname)) {
            (Some(username), Some(listname)) => Ok(ListRef::Name {
                username: username.to_string(),
                listname: listname.to_string(),
            }),
            _ => {
                warn!("List lookup without --id or --username/--listname");
                Err(MdblistClientError::validation(
                    "either --id or both --username and --listname are required",
                ))
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserRef {
    Id(u64),
    Name(String),
}

impl UserRef {
    /// # Errors
    /// Returns [`MdblistClientError::Validation`] when neither a non-zero ID nor a
    /// username is given.
    #[track_caller]
    pub fn resolve(id: Option<u64>, username: Option<&str>) -> Result<Self, MdblistClientError> {
        if let Some(id) = id.filter(|id| *id != 0) {
            return Ok(UserRef::Id(id));
        }

        match non_blank(username) {
            Some(username) => Ok(UserRef::Name(username.to_string())),
            None => {
                warn!("User lookup without --id or --username");
                Err(MdblistClientError::validation(
                    "either user's --id or --username is required",
                ))
            }
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

impl MdblistClient {
    pub async fn get_list(&self, list: &ListRef) -> Result<Vec<MdbList>, MdblistClientError> {
        match list {
            ListRef::Id(id) => self.get_list_by_id(*id).await,
            ListRef::Name { username, listname } => {
                self.get_list_by_name(username, listname).await
            }
        }
    }

    pub async fn get_list_items(
        &self,
        list: &ListRef,
        query: &QueryParams,
    ) -> Result<ListItems, MdblistClientError> {
        match list {
            ListRef::Id(id) => self.get_list_items_by_id(*id, query).await,
            ListRef::Name { username, listname } => {
                self.get_list_items_by_name(username, listname, query).await
            }
        }
    }

    pub async fn update_list_name(
        &self,
        list: &ListRef,
        new_name: &str,
    ) -> Result<ListUpdateResponse, MdblistClientError> {
        let rename = ListNameUpdate {
            name: new_name.to_string(),
        };

        match list {
            ListRef::Id(id) => self.update_list_name_by_id(*id, &rename).await,
            ListRef::Name { username, listname } => {
                self.update_list_name_by_name(username, listname, &rename)
                    .await
            }
        }
    }

    pub async fn get_user_lists(&self, user: &UserRef) -> Result<Vec<MdbList>, MdblistClientError> {
        match user {
            UserRef::Id(id) => self.get_user_lists_by_id(*id).await,
            UserRef::Name(username) => self.get_user_lists_by_name(username).await,
        }
    }
}
