//! gRPC layer for the ad service.

mod ad_grpc;

pub use ad_grpc::AdGrpcService;
