//! In-memory user store with symmetric friendship links.
//!
//! All users and the ID counter sit behind a single `RwLock`. Mutating
//! operations hold the write guard for their whole duration, so each one is
//! applied completely or not at all from the point of view of concurrent
//! request handlers.

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::error::{Error, Result};
use crate::user::{Friendship, NewUser, User, UserId};

/// First ID handed out by a fresh store.
const FIRST_USER_ID: UserId = 1;

#[derive(Debug)]
struct StoreInner {
    users: HashMap<UserId, User>,
    next_id: UserId,
}

/// Owner of every [`User`] record and of the ID counter.
///
/// Construct one per process (or per test) and share it behind an `Arc`.
#[derive(Debug)]
pub struct UserStore {
    inner: RwLock<StoreInner>,
}

impl Default for UserStore {
    fn default() -> Self {
        Self {
            inner: RwLock::new(StoreInner {
                users: HashMap::new(),
                next_id: FIRST_USER_ID,
            }),
        }
    }
}

impl UserStore {
    /// Creates an empty store whose first assigned ID is 1.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a new user under the next sequential ID and returns that ID.
    ///
    /// Name and age are taken as given. An initial friends list is stored
    /// verbatim: no existence check and no reciprocal edges.
    pub fn create_user(&self, new_user: NewUser) -> UserId {
        let mut inner = self.inner.write();
        let id = inner.next_id;
        inner.next_id += 1;

        let user = User {
            id,
            name: new_user.name,
            age: new_user.age,
            friends: new_user.friends.unwrap_or_default(),
        };
        inner.users.insert(id, user);

        tracing::debug!(user_id = id, "User created");
        id
    }

    /// Links two users by appending each ID to the other's friends list.
    ///
    /// Appends are not deduplicated: linking the same pair twice yields two
    /// entries on each side.
    ///
    /// # Errors
    ///
    /// - `Error::SourceNotFound` if `source_id` does not exist (checked first)
    /// - `Error::TargetNotFound` if `target_id` does not exist
    pub fn make_friends(&self, source_id: UserId, target_id: UserId) -> Result<Friendship> {
        let mut inner = self.inner.write();

        let source = inner
            .users
            .get(&source_id)
            .ok_or(Error::SourceNotFound(source_id))?
            .name
            .clone();
        let target = inner
            .users
            .get(&target_id)
            .ok_or(Error::TargetNotFound(target_id))?
            .name
            .clone();

        // Both lookups succeeded under the same guard.
        if let Some(user) = inner.users.get_mut(&source_id) {
            user.friends.push(target_id);
        }
        if let Some(user) = inner.users.get_mut(&target_id) {
            user.friends.push(source_id);
        }

        tracing::debug!(source_id, target_id, "Friendship linked");
        Ok(Friendship { source, target })
    }

    /// Removes a user and strips one occurrence of its ID from each former
    /// friend's list.
    ///
    /// The removed user's friends list is walked entry by entry, so a friend
    /// linked twice loses both back-references. Friend IDs that no longer
    /// resolve to a user are skipped.
    ///
    /// # Errors
    ///
    /// Returns `Error::UserNotFound` if `id` does not exist.
    pub fn delete_user(&self, id: UserId) -> Result<User> {
        let mut inner = self.inner.write();
        let user = inner.users.remove(&id).ok_or(Error::UserNotFound(id))?;

        for &friend_id in &user.friends {
            match inner.users.get_mut(&friend_id) {
                Some(friend) => {
                    friend.remove_first_friend(id);
                }
                None if friend_id == id => {}
                None => {
                    tracing::warn!(
                        user_id = id,
                        friend_id,
                        "Dangling friend reference skipped during delete"
                    );
                }
            }
        }

        tracing::debug!(user_id = id, "User deleted");
        Ok(user)
    }

    /// Returns the names of a user's friends in friends-list order.
    ///
    /// A friend ID that no longer resolves yields an empty name, so the
    /// result is always as long as the stored friends list.
    ///
    /// # Errors
    ///
    /// Returns `Error::UserNotFound` if `id` does not exist.
    pub fn get_friends(&self, id: UserId) -> Result<Vec<String>> {
        let inner = self.inner.read();
        let user = inner.users.get(&id).ok_or(Error::UserNotFound(id))?;

        Ok(user
            .friends
            .iter()
            .map(|friend_id| {
                inner
                    .users
                    .get(friend_id)
                    .map(|friend| friend.name.clone())
                    .unwrap_or_default()
            })
            .collect())
    }

    /// Overwrites a user's age and returns the stored value.
    ///
    /// # Errors
    ///
    /// Returns `Error::UserNotFound` if `id` does not exist.
    pub fn update_age(&self, id: UserId, new_age: i64) -> Result<i64> {
        let mut inner = self.inner.write();
        let user = inner.users.get_mut(&id).ok_or(Error::UserNotFound(id))?;
        user.age = new_age;

        tracing::debug!(user_id = id, age = new_age, "User age updated");
        Ok(user.age)
    }

    /// Returns a snapshot of one user record.
    ///
    /// # Errors
    ///
    /// Returns `Error::UserNotFound` if `id` does not exist.
    pub fn get_user(&self, id: UserId) -> Result<User> {
        self.inner
            .read()
            .users
            .get(&id)
            .cloned()
            .ok_or(Error::UserNotFound(id))
    }

    /// Returns the number of stored users.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.read().users.len()
    }

    /// Returns true if the store holds no users.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.read().users.is_empty()
    }
}
