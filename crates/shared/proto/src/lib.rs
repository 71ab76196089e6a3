//! gRPC protocol buffer definitions.
//!
//! This crate contains the generated gRPC service definitions for
//! AdService: listing management plus the user operations it depends on.

/// Ad service definitions.
pub mod ads {
    tonic::include_proto!("ads");
}

// Re-export commonly used items
pub use ads::ad_service_client::AdServiceClient;
pub use ads::ad_service_server::{AdService, AdServiceServer};
