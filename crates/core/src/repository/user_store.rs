//! User storage contract and the in-memory engine behind it.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use domain::{DomainError, DomainResult, User};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Storage contract for the user registry.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Store `user` under a freshly assigned identifier and return it.
    async fn add(&self, user: User) -> DomainResult<i64>;

    /// Fetch one user by identifier.
    async fn get(&self, user_id: i64) -> DomainResult<User>;

    /// Rewrite nickname, email and activation flag.
    async fn update(
        &self,
        user_id: i64,
        nickname: String,
        email: String,
        activated: bool,
    ) -> DomainResult<User>;

    /// Existence probe; never fails, absent means false.
    async fn exists(&self, user_id: i64) -> bool;

    /// Remove one user.
    async fn delete(&self, user_id: i64) -> DomainResult<()>;
}

struct UserTable {
    next_id: i64,
    rows: HashMap<i64, User>,
}

/// In-memory user engine, same locking discipline as the ad engine.
pub struct InMemoryUserRepository {
    table: Mutex<UserTable>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            table: Mutex::new(UserTable {
                next_id: 0,
                rows: HashMap::new(),
            }),
        }
    }

    fn table(&self) -> DomainResult<MutexGuard<'_, UserTable>> {
        self.table
            .lock()
            .map_err(|_| DomainError::internal("user table lock poisoned"))
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn add(&self, mut user: User) -> DomainResult<i64> {
        let mut table = self.table()?;
        let id = table.next_id;
        table.next_id += 1;
        user.id = id;
        table.rows.insert(id, user);

        Ok(id)
    }

    async fn get(&self, user_id: i64) -> DomainResult<User> {
        let table = self.table()?;
        table
            .rows
            .get(&user_id)
            .cloned()
            .ok_or_else(|| DomainError::not_found("user"))
    }

    async fn update(
        &self,
        user_id: i64,
        nickname: String,
        email: String,
        activated: bool,
    ) -> DomainResult<User> {
        let mut table = self.table()?;
        let user = table
            .rows
            .get_mut(&user_id)
            .ok_or_else(|| DomainError::not_found("user"))?;

        user.nickname = nickname;
        user.email = email;
        user.activated = activated;

        Ok(user.clone())
    }

    async fn exists(&self, user_id: i64) -> bool {
        self.table()
            .map(|table| table.rows.contains_key(&user_id))
            .unwrap_or(false)
    }

    async fn delete(&self, user_id: i64) -> DomainResult<()> {
        let mut table = self.table()?;
        table
            .rows
            .remove(&user_id)
            .map(|_| ())
            .ok_or_else(|| DomainError::not_found("user"))
    }
}
