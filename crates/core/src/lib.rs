//! Application core for the classified-ad listing service.
//!
//! This crate holds everything with real behavior: the repository
//! contracts, the concurrency-safe in-memory engines behind them, and the
//! application services that enforce validation and ownership on top.
//! Transport adapters depend only on the service traits exported here.

pub mod repository;
pub mod service;

pub use repository::{
    AdRepository, CredentialStore, InMemoryAdRepository, InMemoryUserRepository, UserRepository,
};
pub use service::{
    AdManager, AdService, CredentialManager, CredentialService, UserManager, UserService,
};
