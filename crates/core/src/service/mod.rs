//! Application services: validation and ownership enforcement on top of
//! the repository engines.

mod ad_service;
mod credential_service;
mod user_service;

pub use ad_service::{AdManager, AdService};
pub use credential_service::{CredentialManager, CredentialService};
pub use user_service::{UserManager, UserService};
