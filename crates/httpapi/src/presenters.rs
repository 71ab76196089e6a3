//! Wire DTOs for the REST adapter.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use domain::{Ad, Credential, User};

// =============================================================================
// Requests
// =============================================================================

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateAdRequest {
    #[schema(example = "best cat")]
    pub title: String,
    #[schema(example = "not for sale")]
    pub text: String,
    pub user_id: i64,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ChangeAdStatusRequest {
    pub published: bool,
    pub user_id: i64,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateAdRequest {
    pub title: String,
    pub text: String,
    pub user_id: i64,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct DeleteAdRequest {
    pub user_id: i64,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    pub nickname: String,
    pub email: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateUserRequest {
    pub nickname: String,
    pub email: String,
    pub activate: bool,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SignUpRequest {
    pub name: String,
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SignInRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CredentialIdRequest {
    pub id: i64,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateCredentialRequest {
    pub username: String,
    pub id: i64,
}

// =============================================================================
// Query parameters
// =============================================================================

/// Query surface of `GET /ads`; identifiers arrive as raw strings so an
/// unparsable value becomes a `BadRequest` envelope, not a router error.
#[derive(Debug, Default, Deserialize)]
pub struct AdsQuery {
    pub ad_id: Option<String>,
    pub filter: Option<String>,
    pub author_id: Option<String>,
    pub day: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    pub title: Option<String>,
}

// =============================================================================
// Responses
// =============================================================================

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AdResponse {
    pub id: i64,
    pub title: String,
    pub text: String,
    pub author_id: i64,
    pub published: bool,
    pub create_date: DateTime<Utc>,
    pub update_date: DateTime<Utc>,
}

impl From<Ad> for AdResponse {
    fn from(ad: Ad) -> Self {
        Self {
            id: ad.id,
            title: ad.title,
            text: ad.text,
            author_id: ad.author_id,
            published: ad.published,
            create_date: ad.create_date,
            update_date: ad.update_date,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub user_id: i64,
    pub nickname: String,
    pub email: String,
    pub activate: bool,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            user_id: user.id,
            nickname: user.nickname,
            email: user.email,
            activate: user.activated,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeleteUserResponse {
    pub user_id: i64,
}

/// Credential payload; the stored hash never leaves the service.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CredentialResponse {
    pub id: i64,
    pub name: String,
    pub username: String,
}

impl From<Credential> for CredentialResponse {
    fn from(credential: Credential) -> Self {
        Self {
            id: credential.id,
            name: credential.name,
            username: credential.username,
        }
    }
}
