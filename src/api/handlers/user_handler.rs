//! User handlers.
//!
//! Payloads pass through `ValidatedJson` before reaching the store.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::{User, UserPayload};
use crate::errors::AppResult;

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user).put(update_user))
        .route("/:id", get(get_user).delete(delete_user))
}

/// List all users
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    responses(
        (status = 200, description = "All users", body = [User])
    )
)]
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<User>>> {
    let users = state.users.find_all().await?;
    Ok(Json(users))
}

/// Get a user by id
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "Users",
    params(("id" = i64, Path, description = "User id")),
    responses(
        (status = 200, description = "The user", body = User),
        (status = 404, description = "No user with this id")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<User>> {
    let user = state.users.find_by_id(id).await?;
    Ok(Json(user))
}

/// Create a user; the payload id is ignored, the database assigns one
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = UserPayload,
    responses(
        (status = 201, description = "User created"),
        (status = 400, description = "Payload violates a field constraint")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UserPayload>,
) -> AppResult<StatusCode> {
    state.users.save(payload.into_user(0)).await?;
    Ok(StatusCode::CREATED)
}

/// Update a user keyed by payload id; a missing id is a silent no-op
#[utoipa::path(
    put,
    path = "/users",
    tag = "Users",
    request_body = UserPayload,
    responses(
        (status = 204, description = "Update issued"),
        (status = 400, description = "Payload violates a field constraint")
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UserPayload>,
) -> AppResult<StatusCode> {
    state.users.update(payload.into_user(0)).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Delete a user by id (no-op when absent)
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "Users",
    params(("id" = i64, Path, description = "User id")),
    responses(
        (status = 204, description = "Delete issued")
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state.users.delete_by_id(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
