//! Common utilities shared by both transport adapters.
//!
//! This crate provides:
//! - Unified error handling for HTTP and gRPC
//! - The `{ data, error }` response envelope both adapters render

pub mod envelope;
pub mod error;

pub use envelope::Envelope;
pub use error::{AppError, AppResult};
