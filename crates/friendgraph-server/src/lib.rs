//! `FriendGraph` Server - REST API for the in-memory user graph.
//!
//! The store lives in [`AppState`] and is shared with every handler through
//! axum state. Handlers only decode requests, call one store operation, and
//! map the result to a status code and body.

pub mod error;
pub mod handlers;
pub mod types;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Json, Router,
};
use friendgraph_core::UserStore;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

pub use error::ApiError;
pub use handlers::{
    create_user, delete_user, get_friends, get_user, health_check, make_friends, update_age,
};
pub use types::{
    CreateUserRequest, CreateUserResponse, HealthResponse, MakeFriendsRequest, UpdateAgeRequest,
    UserResponse,
};

/// Shared state handed to every handler.
#[derive(Debug, Default)]
pub struct AppState {
    /// The user graph store for this process.
    pub store: UserStore,
}

impl AppState {
    /// Creates state around an existing store.
    #[must_use]
    pub fn new(store: UserStore) -> Self {
        Self { store }
    }
}

/// OpenAPI description of the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "FriendGraph API",
        description = "In-memory users and undirected friendships over HTTP."
    ),
    paths(
        handlers::health::health_check,
        handlers::users::create_user,
        handlers::users::make_friends,
        handlers::users::delete_user,
        handlers::users::get_friends,
        handlers::users::update_age,
        handlers::users::get_user,
    ),
    components(schemas(
        CreateUserRequest,
        CreateUserResponse,
        MakeFriendsRequest,
        UpdateAgeRequest,
        UserResponse,
        HealthResponse,
    )),
    tags(
        (name = "health", description = "Liveness"),
        (name = "users", description = "Users and friendships")
    )
)]
pub struct ApiDoc;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the API router with every route and the HTTP trace layer.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/create", post(create_user))
        .route("/make_friends", post(make_friends))
        .route(
            "/user/{id}",
            get(get_user).put(update_age).delete(delete_user),
        )
        .route("/friends/{id}", get(get_friends))
        .route("/api-docs/openapi.json", get(openapi_json))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
