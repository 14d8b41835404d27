//! User records and request payloads.

use crate::domain::UserId;
use serde::{Deserialize, Serialize};

/// A persisted user row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub is_active: bool,
}

impl User {
    /// Attach a store-assigned id to a creation payload.
    pub fn from_new(id: UserId, new: NewUser) -> Self {
        Self {
            id,
            name: new.name,
            email: new.email,
            is_active: new.is_active,
        }
    }
}

/// A user that has not been assigned an id yet.
///
/// An `id` key in the request body is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    #[serde(default = "default_is_active")]
    pub is_active: bool,
}

impl NewUser {
    /// Create an active user payload.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            is_active: default_is_active(),
        }
    }
}

/// Full replacement of a user's mutable fields.
///
/// All three fields are required; partial updates are rejected at decode time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserUpdate {
    pub name: String,
    pub email: String,
    pub is_active: bool,
}

fn default_is_active() -> bool {
    true
}
