//! User and friendship handlers.
//!
//! Each handler decodes its input, performs one store operation, and
//! formats the outcome. Confirmations are plain text; data is JSON.

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use super::helpers::{decode_json, parse_user_id};
use crate::error::ApiError;
use crate::types::{
    CreateUserRequest, CreateUserResponse, MakeFriendsRequest, UpdateAgeRequest, UserResponse,
};
use crate::AppState;

/// Create a user.
///
/// The ID is assigned by the store; any `id` in the body is ignored.
#[utoipa::path(
    post,
    path = "/create",
    tag = "users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = CreateUserResponse),
        (status = 400, description = "Malformed request body", body = String, content_type = "text/plain")
    )
)]
pub async fn create_user(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<(StatusCode, Json<CreateUserResponse>), ApiError> {
    let request: CreateUserRequest = decode_json(&body)?;
    let id = state.store.create_user(request.into());
    Ok((StatusCode::CREATED, Json(CreateUserResponse { id })))
}

/// Link two users as friends.
#[utoipa::path(
    post,
    path = "/make_friends",
    tag = "users",
    request_body = MakeFriendsRequest,
    responses(
        (status = 200, description = "Users linked", body = String, content_type = "text/plain"),
        (status = 400, description = "Malformed request body", body = String, content_type = "text/plain"),
        (status = 404, description = "Source or target user not found", body = String, content_type = "text/plain")
    )
)]
pub async fn make_friends(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<String, ApiError> {
    let request: MakeFriendsRequest = decode_json(&body)?;
    let friendship = state
        .store
        .make_friends(request.source_id, request.target_id)?;
    Ok(format!(
        "{} and {} are now friends\n",
        friendship.source, friendship.target
    ))
}

/// Delete a user and strip it from its friends' lists.
#[utoipa::path(
    delete,
    path = "/user/{id}",
    tag = "users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User deleted", body = String, content_type = "text/plain"),
        (status = 400, description = "Invalid user ID", body = String, content_type = "text/plain"),
        (status = 404, description = "User not found", body = String, content_type = "text/plain")
    )
)]
pub async fn delete_user(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
) -> Result<String, ApiError> {
    let id = parse_user_id(&raw_id)?;
    let user = state.store.delete_user(id)?;
    Ok(format!("User {} has been deleted\n", user.name))
}

/// List the names of a user's friends in link order.
#[utoipa::path(
    get,
    path = "/friends/{id}",
    tag = "users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Friend names", body = Vec<String>),
        (status = 400, description = "Invalid user ID", body = String, content_type = "text/plain"),
        (status = 404, description = "User not found", body = String, content_type = "text/plain")
    )
)]
pub async fn get_friends(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
) -> Result<Json<Vec<String>>, ApiError> {
    let id = parse_user_id(&raw_id)?;
    Ok(Json(state.store.get_friends(id)?))
}

/// Replace a user's age.
#[utoipa::path(
    put,
    path = "/user/{id}",
    tag = "users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    request_body = UpdateAgeRequest,
    responses(
        (status = 200, description = "Age updated", body = String, content_type = "text/plain"),
        (status = 400, description = "Invalid user ID or malformed body", body = String, content_type = "text/plain"),
        (status = 404, description = "User not found", body = String, content_type = "text/plain")
    )
)]
pub async fn update_age(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
    body: Bytes,
) -> Result<String, ApiError> {
    let id = parse_user_id(&raw_id)?;
    let request: UpdateAgeRequest = decode_json(&body)?;
    let age = state.store.update_age(id, request.new_age)?;
    Ok(format!("User's age has been updated to {age}\n"))
}

/// Fetch one user record.
#[utoipa::path(
    get,
    path = "/user/{id}",
    tag = "users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User record", body = UserResponse),
        (status = 400, description = "Invalid user ID", body = String, content_type = "text/plain"),
        (status = 404, description = "User not found", body = String, content_type = "text/plain")
    )
)]
pub async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
) -> Result<Json<UserResponse>, ApiError> {
    let id = parse_user_id(&raw_id)?;
    Ok(Json(state.store.get_user(id)?.into()))
}
