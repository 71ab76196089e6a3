//! Sign-in credential entity, persisted outside the in-memory core.

use serde::{Deserialize, Serialize};

/// A stored login credential. The core only ever sees the password as a
/// salted hash; the plaintext never leaves the service layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    /// Unique identifier, assigned by the credential store
    pub id: i64,
    pub name: String,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
}
