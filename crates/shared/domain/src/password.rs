//! Password hashing for the credential flows.

use argon2::password_hash::SaltString;
use argon2::{Argon2, PasswordHasher};

use crate::constants::CREDENTIAL_SALT;
use crate::error::{DomainError, DomainResult};

/// A salted password hash in PHC string format.
///
/// Every hash uses [`CREDENTIAL_SALT`], so hashing is deterministic: the
/// same plaintext always yields the same stored string. The sign-in flow
/// depends on this, since the store is queried by `(username, hash)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    /// Hash a plaintext password with the process-wide salt.
    pub fn hash(plain: &str) -> DomainResult<Self> {
        let salt = SaltString::from_b64(CREDENTIAL_SALT)
            .map_err(|e| DomainError::internal(format!("invalid credential salt: {e}")))?;
        let hash = Argon2::default()
            .hash_password(plain.as_bytes(), &salt)
            .map_err(|e| DomainError::internal(format!("password hashing failed: {e}")))?;

        Ok(Self(hash.to_string()))
    }

    /// Wrap an already-hashed value fetched from the store.
    pub fn from_hash(hash: impl Into<String>) -> Self {
        Self(hash.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_passwords_hash_equally() {
        let a = Password::hash("qwerty123").unwrap();
        let b = Password::hash("qwerty123").unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn different_passwords_hash_differently() {
        let a = Password::hash("qwerty123").unwrap();
        let b = Password::hash("qwerty124").unwrap();

        assert_ne!(a, b);
    }

    #[test]
    fn hash_is_phc_formatted() {
        let hash = Password::hash("qwerty123").unwrap();

        assert!(hash.as_str().starts_with("$argon2"));
    }
}
