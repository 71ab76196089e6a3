//! Repository layer: storage contracts and the in-memory engines.
//!
//! Services depend on the traits, never on a concrete engine; each engine
//! exclusively owns its backing map and identifier counter.

mod ad_store;
mod credential;
mod user_store;

pub use ad_store::{AdRepository, InMemoryAdRepository};
pub use credential::CredentialStore;
pub use user_store::{InMemoryUserRepository, UserRepository};

#[cfg(any(test, feature = "test-utils"))]
pub use ad_store::MockAdRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use credential::MockCredentialStore;
#[cfg(any(test, feature = "test-utils"))]
pub use user_store::MockUserRepository;
