//! User registry entity.

use serde::{Deserialize, Serialize};

/// A registered user. Independent aggregate from [`crate::Ad`]: listings
/// reference users by identifier only, with no referential integrity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier, assigned by the user store
    pub id: i64,
    pub nickname: String,
    pub email: String,
    /// Accounts start deactivated
    pub activated: bool,
}

impl User {
    /// Create a new deactivated user. The store assigns the identifier on add.
    pub fn new(nickname: String, email: String) -> Self {
        Self {
            id: 0,
            nickname,
            email,
            activated: false,
        }
    }
}
