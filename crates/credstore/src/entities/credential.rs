//! Credential database entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::Credential;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "credentials")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    #[sea_orm(unique)]
    pub username: String,
    pub password_hash: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for Credential {
    fn from(model: Model) -> Self {
        Credential {
            id: model.id,
            name: model.name,
            username: model.username,
            password_hash: model.password_hash,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_converts_to_domain_entity() {
        let model = Model {
            id: 3,
            name: "Gopher".into(),
            username: "gopher".into(),
            password_hash: "$argon2id$stub".into(),
        };

        let credential = Credential::from(model);

        assert_eq!(credential.id, 3);
        assert_eq!(credential.username, "gopher");
    }
}
