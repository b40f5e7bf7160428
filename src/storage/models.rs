use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::db::DatabaseError;

/// Identity of a share, allocated by the store on creation.
pub type ShareId = u64;

/// A share record stored in redb
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Share {
    pub id: ShareId,
    pub username: String,
    pub created: DateTime<Utc>,
    pub visit_count: u32,

    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// `None` means the share never expires.
    #[serde(default)]
    pub expires: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_visited: Option<DateTime<Utc>>,
}

impl Share {
    /// Build the stored record for a freshly allocated id.
    pub fn from_new(id: ShareId, new: &NewShare) -> Self {
        Self {
            id,
            username: new.username.clone(),
            created: new.created,
            visit_count: new.visit_count,
            name: new.name.clone(),
            description: new.description.clone(),
            expires: new.expires,
            last_visited: new.last_visited,
        }
    }

    /// Whether the share's expiry lies at or before `now`.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires.is_some_and(|expires| expires <= now)
    }
}

/// Input for creating a share: every field except the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewShare {
    pub username: String,
    pub created: DateTime<Utc>,
    pub visit_count: u32,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub expires: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_visited: Option<DateTime<Utc>>,
}

impl NewShare {
    pub fn new(username: impl Into<String>, created: DateTime<Utc>) -> Self {
        Self {
            username: username.into(),
            created,
            visit_count: 0,
            name: None,
            description: None,
            expires: None,
            last_visited: None,
        }
    }
}

/// Decode a stored share row.
pub fn decode_share(bytes: &[u8]) -> Result<Share, DatabaseError> {
    Ok(rmp_serde::from_slice(bytes)?)
}

/// Encode a share for storage.
pub fn encode_share(share: &Share) -> Result<Vec<u8>, DatabaseError> {
    Ok(rmp_serde::to_vec_named(share)?)
}
