//! Request and response bodies for the REST API.

use friendgraph_core::{NewUser, User, UserId};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of `POST /create`. Absent fields decode to zero values.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct CreateUserRequest {
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Age; any integer is accepted.
    #[serde(default)]
    pub age: i64,
    /// Initial friend IDs, stored as given.
    #[serde(default)]
    pub friends: Option<Vec<UserId>>,
}

impl From<CreateUserRequest> for NewUser {
    fn from(request: CreateUserRequest) -> Self {
        Self {
            name: request.name,
            age: request.age,
            friends: request.friends,
        }
    }
}

/// Response of `POST /create`.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct CreateUserResponse {
    /// Assigned user ID.
    pub id: UserId,
}

/// Body of `POST /make_friends`.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct MakeFriendsRequest {
    /// User whose list receives `target_id`; checked first.
    #[serde(default)]
    pub source_id: UserId,
    /// User whose list receives `source_id`.
    #[serde(default)]
    pub target_id: UserId,
}

/// Body of `PUT /user/{id}`.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct UpdateAgeRequest {
    /// Replacement age.
    #[serde(default)]
    pub new_age: i64,
}

/// A user record as returned by `GET /user/{id}`.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct UserResponse {
    /// User ID.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Age.
    pub age: i64,
    /// Friend IDs in link order.
    pub friends: Vec<UserId>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            age: user.age,
            friends: user.friends,
        }
    }
}

/// Response of `GET /health`.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Always `"healthy"` when the server answers.
    pub status: String,
    /// Server crate version.
    pub version: String,
    /// Number of stored users.
    pub users: usize,
}
