//! Route configuration.

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::handlers::{
    change_ad_status, check_credential, create_ad, create_user, delete_ad, delete_credential,
    delete_user, get_ads, get_user, search_ads, sign_in, sign_up, update_ad, update_credential,
    update_user,
};
use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/api/v1", api_routes())
        .with_state(state)
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/ads", get(get_ads).post(create_ad))
        .route("/ads/search", get(search_ads))
        .route("/ads/:ad_id", put(update_ad))
        .route("/ads/:ad_id/status", put(change_ad_status))
        .route("/ads/delete/:ad_id", delete(delete_ad))
        .route("/user", post(create_user))
        .route("/user/:user_id", get(get_user))
        .route("/user/update/:user_id", put(update_user))
        .route("/user/delete/:user_id", delete(delete_user))
        .route("/sign-up", post(sign_up))
        .route("/sign-in", post(sign_in))
        .route("/check-user", post(check_credential))
        .route("/update-user", post(update_credential))
        .route("/delete-user", post(delete_credential))
}
