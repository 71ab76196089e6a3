//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::presenters::{
    AdResponse, ChangeAdStatusRequest, CreateAdRequest, CreateUserRequest, CredentialIdRequest,
    CredentialResponse, DeleteAdRequest, DeleteUserResponse, SignInRequest, SignUpRequest,
    UpdateAdRequest, UpdateCredentialRequest, UpdateUserRequest, UserResponse,
};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::ad_handler::get_ads,
        crate::handlers::ad_handler::search_ads,
        crate::handlers::ad_handler::create_ad,
        crate::handlers::ad_handler::change_ad_status,
        crate::handlers::ad_handler::update_ad,
        crate::handlers::ad_handler::delete_ad,
        crate::handlers::user_handler::create_user,
        crate::handlers::user_handler::get_user,
        crate::handlers::user_handler::update_user,
        crate::handlers::user_handler::delete_user,
        crate::handlers::credential_handler::sign_up,
        crate::handlers::credential_handler::sign_in,
        crate::handlers::credential_handler::check_credential,
        crate::handlers::credential_handler::update_credential,
        crate::handlers::credential_handler::delete_credential,
    ),
    components(
        schemas(
            CreateAdRequest,
            ChangeAdStatusRequest,
            UpdateAdRequest,
            DeleteAdRequest,
            AdResponse,
            CreateUserRequest,
            UpdateUserRequest,
            UserResponse,
            DeleteUserResponse,
            SignUpRequest,
            SignInRequest,
            CredentialIdRequest,
            UpdateCredentialRequest,
            CredentialResponse,
        )
    ),
    tags(
        (name = "Ads", description = "Ad listing endpoints"),
        (name = "Users", description = "User registry endpoints"),
        (name = "Auth", description = "Credential endpoints"),
    )
)]
pub struct ApiDoc;
