//! RPC adapter.
//!
//! Exposes the application core over gRPC. Like the REST adapter it only
//! marshals requests and renders taxonomy errors as status codes.

pub mod grpc;

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use tonic::transport::Server;
use tracing::info;

use adcore::{AdService, UserService};
use proto::AdServiceServer;

use crate::grpc::AdGrpcService;

/// Serve the RPC API until `shutdown` resolves.
pub async fn serve(
    addr: SocketAddr,
    ads: Arc<dyn AdService>,
    users: Arc<dyn UserService>,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let service = AdGrpcService::new(ads, users);

    info!("grpc server listening on {}", addr);
    Server::builder()
        .add_service(AdServiceServer::new(service))
        .serve_with_shutdown(addr, shutdown)
        .await?;

    Ok(())
}
