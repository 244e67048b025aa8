use anyhow::anyhow;
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    Json,
};
use tracing::info;

use crate::errors::AppError;
use crate::models::user::{DeleteUserResponse, User};
use crate::state::AppState;
use crate::users::validation::UserPayload;

/// The `id` column is an `INTEGER`; anything else is refused the way the
/// database refuses the bound parameter.
fn parse_id(raw: &str) -> Result<i32, AppError> {
    raw.parse::<i32>()
        .map_err(|_| AppError::Internal(anyhow!("invalid input syntax for type integer: \"{raw}\"")))
}

/// GET /
pub async fn handle_list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, AppError> {
    Ok(Json(state.store.list().await?))
}

/// POST /users
pub async fn handle_create_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, Json<User>), AppError> {
    let new_user = UserPayload::from_body(&headers, &body).validate()?;
    let user = state.store.insert(&new_user).await?;
    info!("Created user {}", user.id);
    Ok((StatusCode::CREATED, Json(user)))
}

/// GET /users/:id
pub async fn handle_get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<User>, AppError> {
    let id = parse_id(&id)?;
    let user = state.store.find(id).await?.ok_or(AppError::NotFound)?;
    Ok(Json(user))
}

/// PUT /users/:id
pub async fn handle_update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<User>, AppError> {
    // Body is checked before the id so a bad body is a 400 even on a bad id.
    let new_user = UserPayload::from_body(&headers, &body).validate()?;
    let id = parse_id(&id)?;
    let user = state
        .store
        .update(id, &new_user)
        .await?
        .ok_or(AppError::NotFound)?;
    info!("Updated user {id}");
    Ok(Json(user))
}

/// DELETE /users/:id
pub async fn handle_delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteUserResponse>, AppError> {
    let id = parse_id(&id)?;
    let user = state.store.delete(id).await?.ok_or(AppError::NotFound)?;
    info!("Deleted user {id}");
    Ok(Json(DeleteUserResponse {
        message: "User deleted".to_string(),
        user,
    }))
}
