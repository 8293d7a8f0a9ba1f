//! # `FriendGraph` Core
//!
//! In-memory user records and the undirected friendship graph between them.
//!
//! The [`UserStore`] owns every [`User`] and the ID counter. It knows nothing
//! about HTTP; the server crate decodes requests into the typed arguments
//! taken by the store operations below.
//!
//! ## Quick Start
//!
//! ```rust
//! use friendgraph_core::{NewUser, UserStore};
//!
//! let store = UserStore::new();
//! let alice = store.create_user(NewUser::new("Alice", 30));
//! let bob = store.create_user(NewUser::new("Bob", 25));
//!
//! store.make_friends(alice, bob).unwrap();
//! assert_eq!(store.get_friends(alice).unwrap(), vec!["Bob".to_string()]);
//!
//! store.delete_user(bob).unwrap();
//! assert!(store.get_friends(alice).unwrap().is_empty());
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod store;
pub mod user;

pub use config::{ConfigError, FriendGraphConfig, LoggingConfig, ServerConfig};
pub use error::{Error, Result};
pub use store::UserStore;
pub use user::{Friendship, NewUser, User, UserId};
