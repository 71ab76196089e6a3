//! Credential store implementation over Postgres.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, ModelTrait,
    QueryFilter, Set,
};

use adcore::CredentialStore;
use domain::{Credential, DomainError, DomainResult};

use crate::entities::credential::{self, ActiveModel, Entity as CredentialEntity};

fn storage_error(err: DbErr) -> DomainError {
    DomainError::internal(format!("credential store: {err}"))
}

/// Concrete [`CredentialStore`] backed by the `credentials` table.
pub struct PgCredentialStore {
    db: DatabaseConnection,
}

impl PgCredentialStore {
    /// Create new store instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn fetch(&self, credential_id: i64) -> DomainResult<credential::Model> {
        CredentialEntity::find_by_id(credential_id)
            .one(&self.db)
            .await
            .map_err(storage_error)?
            .ok_or_else(|| DomainError::not_found("credential"))
    }
}

#[async_trait]
impl CredentialStore for PgCredentialStore {
    async fn create(&self, cred: Credential) -> DomainResult<i64> {
        let active = ActiveModel {
            name: Set(cred.name),
            username: Set(cred.username),
            password_hash: Set(cred.password_hash),
            ..Default::default()
        };

        let model = active.insert(&self.db).await.map_err(storage_error)?;
        Ok(model.id)
    }

    async fn find_by_login(
        &self,
        username: &str,
        password_hash: &str,
    ) -> DomainResult<Credential> {
        let model = CredentialEntity::find()
            .filter(credential::Column::Username.eq(username))
            .filter(credential::Column::PasswordHash.eq(password_hash))
            .one(&self.db)
            .await
            .map_err(storage_error)?
            .ok_or_else(|| DomainError::not_found("credential"))?;

        Ok(Credential::from(model))
    }

    async fn find_by_id(&self, credential_id: i64) -> DomainResult<Credential> {
        Ok(Credential::from(self.fetch(credential_id).await?))
    }

    async fn update_username(
        &self,
        username: String,
        credential_id: i64,
    ) -> DomainResult<Credential> {
        let model = self.fetch(credential_id).await?;

        let mut active: ActiveModel = model.into();
        active.username = Set(username);

        let model = active.update(&self.db).await.map_err(storage_error)?;
        Ok(Credential::from(model))
    }

    async fn delete(&self, credential_id: i64) -> DomainResult<Credential> {
        let model = self.fetch(credential_id).await?;
        let removed = Credential::from(model.clone());

        model.delete(&self.db).await.map_err(storage_error)?;

        Ok(removed)
    }
}
