//! Ad storage contract and the in-memory engine behind it.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::{Datelike, Utc};

use domain::{Ad, DomainError, DomainResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Storage contract for ad listings.
///
/// Listing operations treat an empty result set as `NotFound`: callers
/// must read that kind as "no content", not as a storage failure.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AdRepository: Send + Sync {
    /// Store `ad` under a freshly assigned identifier and return it.
    async fn add(&self, ad: Ad) -> DomainResult<i64>;

    /// Fetch one ad by identifier.
    async fn get(&self, ad_id: i64) -> DomainResult<Ad>;

    /// Flip the published flag and refresh the update timestamp.
    async fn change_status(&self, ad_id: i64, published: bool) -> DomainResult<Ad>;

    /// Rewrite title and text and refresh the update timestamp.
    async fn update_content(&self, ad_id: i64, title: String, text: String) -> DomainResult<Ad>;

    /// All published ads.
    async fn list_published(&self) -> DomainResult<Vec<Ad>>;

    /// Ads whose title starts with `prefix`, drafts included.
    async fn search_by_title(&self, prefix: &str) -> DomainResult<Vec<Ad>>;

    /// Ads created by `author_id`, drafts included.
    async fn list_by_author(&self, author_id: i64) -> DomainResult<Vec<Ad>>;

    /// Ads created on day-of-month `day`.
    async fn list_by_day(&self, day: i64) -> DomainResult<Vec<Ad>>;

    /// Remove one ad; only the stored author may delete it. Returns the
    /// ad as it existed immediately before removal.
    async fn delete(&self, ad_id: i64, requester_id: i64) -> DomainResult<Ad>;
}

/// Map plus counter guarded by one lock; the identifier sequence is
/// gap-free because assignment happens under the same lock as insertion.
struct AdTable {
    next_id: i64,
    rows: HashMap<i64, Ad>,
}

/// In-memory ad engine. State lives for the process lifetime only.
pub struct InMemoryAdRepository {
    table: Mutex<AdTable>,
}

impl InMemoryAdRepository {
    pub fn new() -> Self {
        Self {
            table: Mutex::new(AdTable {
                next_id: 0,
                rows: HashMap::new(),
            }),
        }
    }

    fn table(&self) -> DomainResult<MutexGuard<'_, AdTable>> {
        self.table
            .lock()
            .map_err(|_| DomainError::internal("ad table lock poisoned"))
    }

    fn collect(&self, keep: impl Fn(&Ad) -> bool) -> DomainResult<Vec<Ad>> {
        let table = self.table()?;
        let result: Vec<Ad> = table.rows.values().filter(|ad| keep(ad)).cloned().collect();

        if result.is_empty() {
            return Err(DomainError::not_found("no matching ads"));
        }
        Ok(result)
    }
}

impl Default for InMemoryAdRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AdRepository for InMemoryAdRepository {
    async fn add(&self, mut ad: Ad) -> DomainResult<i64> {
        let mut table = self.table()?;
        let id = table.next_id;
        table.next_id += 1;
        ad.id = id;
        table.rows.insert(id, ad);

        Ok(id)
    }

    async fn get(&self, ad_id: i64) -> DomainResult<Ad> {
        let table = self.table()?;
        table
            .rows
            .get(&ad_id)
            .cloned()
            .ok_or_else(|| DomainError::not_found("ad"))
    }

    async fn change_status(&self, ad_id: i64, published: bool) -> DomainResult<Ad> {
        let mut table = self.table()?;
        let ad = table
            .rows
            .get_mut(&ad_id)
            .ok_or_else(|| DomainError::not_found("ad"))?;

        ad.published = published;
        ad.update_date = Utc::now();

        Ok(ad.clone())
    }

    async fn update_content(&self, ad_id: i64, title: String, text: String) -> DomainResult<Ad> {
        let mut table = self.table()?;
        let ad = table
            .rows
            .get_mut(&ad_id)
            .ok_or_else(|| DomainError::not_found("ad"))?;

        ad.title = title;
        ad.text = text;
        ad.update_date = Utc::now();

        Ok(ad.clone())
    }

    async fn list_published(&self) -> DomainResult<Vec<Ad>> {
        self.collect(|ad| ad.published)
    }

    async fn search_by_title(&self, prefix: &str) -> DomainResult<Vec<Ad>> {
        self.collect(|ad| ad.title.starts_with(prefix))
    }

    async fn list_by_author(&self, author_id: i64) -> DomainResult<Vec<Ad>> {
        self.collect(|ad| ad.author_id == author_id)
    }

    async fn list_by_day(&self, day: i64) -> DomainResult<Vec<Ad>> {
        self.collect(|ad| i64::from(ad.create_date.day()) == day)
    }

    async fn delete(&self, ad_id: i64, requester_id: i64) -> DomainResult<Ad> {
        let mut table = self.table()?;
        match table.rows.entry(ad_id) {
            Entry::Vacant(_) => Err(DomainError::not_found("ad")),
            Entry::Occupied(entry) if !entry.get().is_owned_by(requester_id) => {
                Err(DomainError::NotDeleted)
            }
            Entry::Occupied(entry) => Ok(entry.remove()),
        }
    }
}
