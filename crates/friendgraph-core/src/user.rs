//! User records and the friendship adjacency list they carry.

use serde::{Deserialize, Serialize};

/// Identifier assigned by the store, starting at 1 and never reused.
pub type UserId = i64;

/// A user and its adjacency list in the undirected friendship graph.
///
/// `friends` keeps insertion order and may hold the same ID more than once
/// when a pair has been linked repeatedly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    /// Store-assigned ID.
    pub id: UserId,
    /// Display name, immutable after creation.
    pub name: String,
    /// Age; no range validation.
    pub age: i64,
    /// Friend IDs in link order.
    pub friends: Vec<UserId>,
}

impl User {
    /// Removes the first occurrence of `friend_id`, keeping the order of the
    /// remaining entries.
    ///
    /// Returns `false` when `friend_id` is not in the list.
    pub fn remove_first_friend(&mut self, friend_id: UserId) -> bool {
        match self.friends.iter().position(|&id| id == friend_id) {
            Some(index) => {
                self.friends.remove(index);
                true
            }
            None => false,
        }
    }
}

/// Input for [`UserStore::create_user`](crate::UserStore::create_user).
///
/// Any `id` present in a decoded payload is ignored; the store assigns it.
/// Absent fields decode to their zero values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewUser {
    /// Display name. Empty names are accepted.
    #[serde(default)]
    pub name: String,
    /// Age. Negative values are accepted.
    #[serde(default)]
    pub age: i64,
    /// Initial adjacency list, stored verbatim without reciprocal edges.
    #[serde(default)]
    pub friends: Option<Vec<UserId>>,
}

impl NewUser {
    /// Creates a new user payload with no initial friends.
    #[must_use]
    pub fn new(name: &str, age: i64) -> Self {
        Self {
            name: name.to_string(),
            age,
            friends: None,
        }
    }

    /// Sets the initial friends list (builder pattern).
    #[must_use]
    pub fn with_friends(mut self, friends: Vec<UserId>) -> Self {
        self.friends = Some(friends);
        self
    }
}

/// Names of both users linked by
/// [`UserStore::make_friends`](crate::UserStore::make_friends).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Friendship {
    /// Name of the source user.
    pub source: String,
    /// Name of the target user.
    pub target: String,
}
