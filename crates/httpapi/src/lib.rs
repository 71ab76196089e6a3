//! REST adapter.
//!
//! Translates HTTP requests into application-core calls and renders every
//! result as the `{ data, error }` envelope with a taxonomy-derived status
//! code. No business rules live here.

pub mod extractors;
pub mod handlers;
pub mod openapi;
pub mod presenters;
pub mod routes;
pub mod state;

use std::future::Future;
use std::net::SocketAddr;

use tower_http::trace::TraceLayer;
use tracing::info;

use crate::routes::create_router;
use crate::state::AppState;

/// Serve the REST API until `shutdown` resolves.
pub async fn serve(
    addr: SocketAddr,
    state: AppState,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let app = create_router(state).layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("http server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    Ok(())
}
