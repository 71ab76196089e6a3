//! Credential handlers (sign-up / sign-in and account maintenance).

use axum::extract::State;
use axum::Json;
use tracing::info;

use common::{AppResult, Envelope};

use crate::extractors::BodyJson;
use crate::presenters::{
    CredentialIdRequest, CredentialResponse, SignInRequest, SignUpRequest,
    UpdateCredentialRequest,
};
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/api/v1/sign-up",
    tag = "Auth",
    request_body = SignUpRequest,
    responses((status = 200, description = "Stored credential", body = CredentialResponse))
)]
pub async fn sign_up(
    State(state): State<AppState>,
    BodyJson(req): BodyJson<SignUpRequest>,
) -> AppResult<Json<Envelope<CredentialResponse>>> {
    let credential = state
        .credentials
        .register(req.name, req.username, req.password)
        .await?;

    info!(credential_id = credential.id, "registered credential");
    Ok(Json(Envelope::data(CredentialResponse::from(credential))))
}

#[utoipa::path(
    post,
    path = "/api/v1/sign-in",
    tag = "Auth",
    request_body = SignInRequest,
    responses(
        (status = 200, description = "Matching credential", body = CredentialResponse),
        (status = 404, description = "Unknown username/password pair")
    )
)]
pub async fn sign_in(
    State(state): State<AppState>,
    BodyJson(req): BodyJson<SignInRequest>,
) -> AppResult<Json<Envelope<CredentialResponse>>> {
    let credential = state
        .credentials
        .sign_in(req.username, req.password)
        .await?;

    info!(credential_id = credential.id, "signed in");
    Ok(Json(Envelope::data(CredentialResponse::from(credential))))
}

#[utoipa::path(
    post,
    path = "/api/v1/check-user",
    tag = "Auth",
    request_body = CredentialIdRequest,
    responses(
        (status = 200, description = "Stored credential", body = CredentialResponse),
        (status = 404, description = "No such credential")
    )
)]
pub async fn check_credential(
    State(state): State<AppState>,
    BodyJson(req): BodyJson<CredentialIdRequest>,
) -> AppResult<Json<Envelope<CredentialResponse>>> {
    let credential = state.credentials.check(req.id).await?;

    info!(credential_id = credential.id, "checked credential");
    Ok(Json(Envelope::data(CredentialResponse::from(credential))))
}

#[utoipa::path(
    post,
    path = "/api/v1/update-user",
    tag = "Auth",
    request_body = UpdateCredentialRequest,
    responses(
        (status = 200, description = "Updated credential", body = CredentialResponse),
        (status = 404, description = "No such credential")
    )
)]
pub async fn update_credential(
    State(state): State<AppState>,
    BodyJson(req): BodyJson<UpdateCredentialRequest>,
) -> AppResult<Json<Envelope<CredentialResponse>>> {
    let credential = state
        .credentials
        .update_username(req.username, req.id)
        .await?;

    info!(credential_id = credential.id, "renamed credential");
    Ok(Json(Envelope::data(CredentialResponse::from(credential))))
}

#[utoipa::path(
    post,
    path = "/api/v1/delete-user",
    tag = "Auth",
    request_body = CredentialIdRequest,
    responses(
        (status = 200, description = "Removed credential", body = CredentialResponse),
        (status = 404, description = "No such credential")
    )
)]
pub async fn delete_credential(
    State(state): State<AppState>,
    BodyJson(req): BodyJson<CredentialIdRequest>,
) -> AppResult<Json<Envelope<CredentialResponse>>> {
    let credential = state.credentials.delete(req.id).await?;

    info!(credential_id = credential.id, "deleted credential");
    Ok(Json(Envelope::data(CredentialResponse::from(credential))))
}
