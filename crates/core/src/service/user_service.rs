//! User service - registry business logic.

use std::sync::Arc;

use async_trait::async_trait;

use domain::{DomainError, DomainResult, User};

use crate::repository::UserRepository;

/// User operations exposed to the transport adapters.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Register a user; nickname and email must be non-empty.
    async fn create_user(&self, nickname: String, email: String) -> DomainResult<User>;

    /// Rewrite nickname, email and activation flag.
    async fn update_user(
        &self,
        nickname: String,
        email: String,
        user_id: i64,
        activate: bool,
    ) -> DomainResult<User>;

    /// Precondition probe used before flows that need an existing user.
    /// Fails with a generic error rather than `NotFound` so callers can
    /// decide how to surface the missing precondition themselves.
    async fn check_user(&self, user_id: i64) -> DomainResult<()>;

    /// Fetch one user by identifier.
    async fn get_user(&self, user_id: i64) -> DomainResult<User>;

    /// Remove one user. Listings referencing them are left untouched.
    async fn delete_user(&self, user_id: i64) -> DomainResult<()>;
}

/// Concrete implementation of [`UserService`] over a repository engine.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn create_user(&self, nickname: String, email: String) -> DomainResult<User> {
        if nickname.is_empty() || email.is_empty() {
            return Err(DomainError::bad_request("nickname and email must be non-empty"));
        }

        let mut user = User::new(nickname, email);
        let id = self.repo.add(user.clone()).await?;
        user.id = id;

        Ok(user)
    }

    async fn update_user(
        &self,
        nickname: String,
        email: String,
        user_id: i64,
        activate: bool,
    ) -> DomainResult<User> {
        self.repo
            .update(user_id, nickname, email, activate)
            .await
            .map_err(|_| DomainError::not_found("user"))
    }

    async fn check_user(&self, user_id: i64) -> DomainResult<()> {
        if self.repo.exists(user_id).await {
            Ok(())
        } else {
            Err(DomainError::internal("user is not registered"))
        }
    }

    async fn get_user(&self, user_id: i64) -> DomainResult<User> {
        self.repo
            .get(user_id)
            .await
            .map_err(|_| DomainError::not_found("user"))
    }

    async fn delete_user(&self, user_id: i64) -> DomainResult<()> {
        self.repo.delete(user_id).await
    }
}
