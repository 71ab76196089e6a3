//! User handlers.

use axum::extract::{Path, State};
use axum::Json;
use tracing::info;

use common::{AppError, AppResult, Envelope};

use crate::extractors::BodyJson;
use crate::presenters::{CreateUserRequest, DeleteUserResponse, UpdateUserRequest, UserResponse};
use crate::state::AppState;

use super::parse_id;

#[utoipa::path(
    post,
    path = "/api/v1/user",
    tag = "Users",
    request_body = CreateUserRequest,
    responses(
        (status = 200, description = "Created user", body = UserResponse),
        (status = 400, description = "Empty nickname or email")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    BodyJson(req): BodyJson<CreateUserRequest>,
) -> AppResult<Json<Envelope<UserResponse>>> {
    let user = state.users.create_user(req.nickname, req.email).await?;

    info!(user_id = user.id, "created user");
    Ok(Json(Envelope::data(UserResponse::from(user))))
}

#[utoipa::path(
    get,
    path = "/api/v1/user/{user_id}",
    tag = "Users",
    params(("user_id" = String, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User record", body = UserResponse),
        (status = 404, description = "No such user")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<Envelope<UserResponse>>> {
    let user_id = parse_id(&raw_id, "user id")?;
    let user = state.users.get_user(user_id).await?;

    info!(user_id, "fetched user");
    Ok(Json(Envelope::data(UserResponse::from(user))))
}

#[utoipa::path(
    put,
    path = "/api/v1/user/update/{user_id}",
    tag = "Users",
    params(("user_id" = String, Path, description = "User identifier")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "Updated user", body = UserResponse),
        (status = 404, description = "No such user")
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    BodyJson(req): BodyJson<UpdateUserRequest>,
) -> AppResult<Json<Envelope<UserResponse>>> {
    let user_id = parse_id(&raw_id, "user id")?;
    let user = state
        .users
        .update_user(req.nickname, req.email, user_id, req.activate)
        .await?;

    info!(user_id, "updated user");
    Ok(Json(Envelope::data(UserResponse::from(user))))
}

/// Deletion double-checks existence first so a missing user surfaces as a
/// 400 precondition failure, matching the create-ad flow.
#[utoipa::path(
    delete,
    path = "/api/v1/user/delete/{user_id}",
    tag = "Users",
    params(("user_id" = String, Path, description = "User identifier")),
    responses(
        (status = 200, description = "Removed user id", body = DeleteUserResponse),
        (status = 400, description = "User is not registered")
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<Envelope<DeleteUserResponse>>> {
    let user_id = parse_id(&raw_id, "user id")?;

    if state.users.check_user(user_id).await.is_err() {
        info!(user_id, "rejected delete of unregistered user");
        return Err(AppError::bad_request("user is not registered"));
    }

    state.users.delete_user(user_id).await?;

    info!(user_id, "deleted user");
    Ok(Json(Envelope::data(DeleteUserResponse { user_id })))
}
