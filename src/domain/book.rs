//! Book records and request payloads.

use crate::domain::{BookId, UserId};
use serde::{Deserialize, Serialize};

/// A persisted book row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub year: i64,
    /// Advisory reference to `user.id`; not checked by the application.
    pub owner_id: Option<UserId>,
}

impl Book {
    /// Attach a store-assigned id to a creation payload.
    pub fn from_new(id: BookId, new: NewBook) -> Self {
        Self {
            id,
            title: new.title,
            author: new.author,
            year: new.year,
            owner_id: new.owner_id,
        }
    }
}

/// A book that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub year: i64,
    #[serde(default)]
    pub owner_id: Option<UserId>,
}
