pub mod api;
pub mod config;
pub mod db;
pub mod domain;
pub mod error;

pub use config::Config;
pub use db::{init_db, RepoError, Repository, StoreOptions};
pub use domain::{Book, BookId, NewBook, NewUser, User, UserId, UserUpdate};
pub use error::AppError;
