//! Domain types for the bookshelf API.
//!
//! This module provides:
//! - Store-assigned identifiers: UserId, BookId
//! - User and Book records plus their unassigned-id payloads

pub mod book;
pub mod primitives;
pub mod user;

pub use book::{Book, NewBook};
pub use primitives::{BookId, UserId};
pub use user::{NewUser, User, UserUpdate};
