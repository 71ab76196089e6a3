//! Application state for dependency injection.

use std::sync::Arc;

use adcore::{AdService, CredentialService, UserService};

/// Application state shared across handlers. Holds trait objects only, so
/// one state instance serves any engine or store wiring.
#[derive(Clone)]
pub struct AppState {
    pub ads: Arc<dyn AdService>,
    pub users: Arc<dyn UserService>,
    pub credentials: Arc<dyn CredentialService>,
}

impl AppState {
    /// Create new app state.
    pub fn new(
        ads: Arc<dyn AdService>,
        users: Arc<dyn UserService>,
        credentials: Arc<dyn CredentialService>,
    ) -> Self {
        Self {
            ads,
            users,
            credentials,
        }
    }
}
