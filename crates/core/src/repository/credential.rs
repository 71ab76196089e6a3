//! Credential store contract.
//!
//! Credentials persist outside the process; the core consumes the store
//! through this narrow interface and never sees its backing technology.

use async_trait::async_trait;

use domain::{Credential, DomainResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Contract the external credential store must satisfy. All lookups work
/// on hashed passwords only.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Persist `credential` and return the assigned identifier.
    async fn create(&self, credential: Credential) -> DomainResult<i64>;

    /// Fetch the credential matching both username and password hash.
    async fn find_by_login(&self, username: &str, password_hash: &str)
        -> DomainResult<Credential>;

    /// Fetch one credential by identifier.
    async fn find_by_id(&self, credential_id: i64) -> DomainResult<Credential>;

    /// Rename the account and return the stored record.
    async fn update_username(&self, username: String, credential_id: i64)
        -> DomainResult<Credential>;

    /// Remove one credential, returning it as stored before removal.
    async fn delete(&self, credential_id: i64) -> DomainResult<Credential>;
}
