//! Credential service - sign-up and sign-in flows.
//!
//! Hashes plaintext passwords with the process-wide salt, then delegates
//! storage and comparison to the external credential store.

use std::sync::Arc;

use async_trait::async_trait;

use domain::{Credential, DomainResult, Password};

use crate::repository::CredentialStore;

/// Credential operations exposed to the transport adapters.
#[async_trait]
pub trait CredentialService: Send + Sync {
    /// Hash the password and persist a new credential.
    async fn register(
        &self,
        name: String,
        username: String,
        password: String,
    ) -> DomainResult<Credential>;

    /// Verify a username/password pair against the store.
    async fn sign_in(&self, username: String, password: String) -> DomainResult<Credential>;

    /// Fetch one credential by identifier.
    async fn check(&self, credential_id: i64) -> DomainResult<Credential>;

    /// Rename the account.
    async fn update_username(
        &self,
        username: String,
        credential_id: i64,
    ) -> DomainResult<Credential>;

    /// Remove one credential.
    async fn delete(&self, credential_id: i64) -> DomainResult<Credential>;
}

/// Concrete implementation of [`CredentialService`] over the store contract.
pub struct CredentialManager {
    store: Arc<dyn CredentialStore>,
}

impl CredentialManager {
    pub fn new(store: Arc<dyn CredentialStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CredentialService for CredentialManager {
    async fn register(
        &self,
        name: String,
        username: String,
        password: String,
    ) -> DomainResult<Credential> {
        let hash = Password::hash(&password)?;
        let mut credential = Credential {
            id: 0,
            name,
            username,
            password_hash: hash.into_string(),
        };
        let id = self.store.create(credential.clone()).await?;
        credential.id = id;

        Ok(credential)
    }

    async fn sign_in(&self, username: String, password: String) -> DomainResult<Credential> {
        let hash = Password::hash(&password)?;

        self.store.find_by_login(&username, hash.as_str()).await
    }

    async fn check(&self, credential_id: i64) -> DomainResult<Credential> {
        self.store.find_by_id(credential_id).await
    }

    async fn update_username(
        &self,
        username: String,
        credential_id: i64,
    ) -> DomainResult<Credential> {
        self.store.update_username(username, credential_id).await
    }

    async fn delete(&self, credential_id: i64) -> DomainResult<Credential> {
        self.store.delete(credential_id).await
    }
}
