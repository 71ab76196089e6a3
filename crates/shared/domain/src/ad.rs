//! Ad listing entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A classified-ad listing.
///
/// The identifier and the author identifier are immutable once assigned;
/// every other mutation refreshes `update_date`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ad {
    /// Unique identifier, assigned by the ad store
    pub id: i64,
    pub title: String,
    pub text: String,
    /// Identifier of the user that created the listing
    pub author_id: i64,
    /// Draft listings carry `published = false`
    pub published: bool,
    pub create_date: DateTime<Utc>,
    pub update_date: DateTime<Utc>,
}

impl Ad {
    /// Create a new draft listing. The store assigns the identifier on add.
    pub fn new(title: String, text: String, author_id: i64) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            title,
            text,
            author_id,
            published: false,
            create_date: now,
            update_date: now,
        }
    }

    /// Whether `user_id` owns this listing.
    pub fn is_owned_by(&self, user_id: i64) -> bool {
        self.author_id == user_id
    }
}
