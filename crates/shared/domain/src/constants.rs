//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// Listing validation
// =============================================================================

/// Maximum ad title length in characters
pub const MAX_TITLE_LENGTH: usize = 100;

/// Maximum ad body length in characters
pub const MAX_TEXT_LENGTH: usize = 500;

// =============================================================================
// Credentials
// =============================================================================

/// Process-wide salt applied to every credential hash.
///
/// A single shared salt is deliberately weak; it is kept so equal passwords
/// always produce equal stored hashes, which the sign-in lookup relies on.
pub const CREDENTIAL_SALT: &str = "aGpxcmhqcXcxMjQ2MTdhamZoYWpz";
