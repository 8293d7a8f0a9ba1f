//! HTTP handlers for the FriendGraph REST API.
//!
//! - `health`: liveness endpoint
//! - `users`: user CRUD and friendship links
//! - `helpers`: body decoding and path ID parsing shared by handlers

pub mod health;
pub mod helpers;
pub mod users;

pub use health::health_check;
pub use users::{create_user, delete_user, get_friends, get_user, make_friends, update_age};
