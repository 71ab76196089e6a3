//! SeaORM entities for the credential store.

pub mod credential;
