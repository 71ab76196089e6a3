//! Ad service - listing business logic.

use std::sync::Arc;

use async_trait::async_trait;
use validator::Validate;

use domain::{Ad, DomainError, DomainResult};

use crate::repository::AdRepository;

/// Ad operations exposed to the transport adapters.
#[async_trait]
pub trait AdService: Send + Sync {
    /// Create a draft listing for `author_id`.
    async fn create_ad(&self, title: String, text: String, author_id: i64) -> DomainResult<Ad>;

    /// Publish or unpublish a listing; only its author may do so.
    async fn change_ad_status(
        &self,
        ad_id: i64,
        published: bool,
        author_id: i64,
    ) -> DomainResult<Ad>;

    /// Rewrite title and text; only the author may do so.
    async fn update_ad(
        &self,
        author_id: i64,
        title: String,
        text: String,
        ad_id: i64,
    ) -> DomainResult<Ad>;

    /// Fetch one listing by identifier.
    async fn get_ad(&self, ad_id: i64) -> DomainResult<Ad>;

    /// All published listings.
    async fn list_ads(&self) -> DomainResult<Vec<Ad>>;

    /// Listings whose title starts with `prefix`.
    async fn search_ads_by_title(&self, prefix: &str) -> DomainResult<Vec<Ad>>;

    /// Listings created by one author.
    async fn list_ads_by_author(&self, author_id: i64) -> DomainResult<Vec<Ad>>;

    /// Listings created on day-of-month `day`.
    async fn list_ads_by_day(&self, day: i64) -> DomainResult<Vec<Ad>>;

    /// Remove a listing; the engine refuses non-author requesters.
    async fn delete_ad(&self, author_id: i64, ad_id: i64) -> DomainResult<Ad>;
}

/// Field constraints shared by create and update.
#[derive(Debug, Validate)]
struct AdContent<'a> {
    #[validate(length(min = 1, max = 100))]
    title: &'a str,
    #[validate(length(min = 1, max = 500))]
    text: &'a str,
}

fn validate_content(title: &str, text: &str) -> DomainResult<()> {
    AdContent { title, text }
        .validate()
        .map_err(|_| DomainError::bad_request("title and text must be non-empty and within length limits"))
}

/// Concrete implementation of [`AdService`] over a repository engine.
pub struct AdManager {
    repo: Arc<dyn AdRepository>,
}

impl AdManager {
    pub fn new(repo: Arc<dyn AdRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl AdService for AdManager {
    async fn create_ad(&self, title: String, text: String, author_id: i64) -> DomainResult<Ad> {
        validate_content(&title, &text)?;

        let mut ad = Ad::new(title, text, author_id);
        let id = self.repo.add(ad.clone()).await?;
        ad.id = id;

        Ok(ad)
    }

    async fn change_ad_status(
        &self,
        ad_id: i64,
        published: bool,
        author_id: i64,
    ) -> DomainResult<Ad> {
        let ad = self.repo.get(ad_id).await?;
        if !ad.is_owned_by(author_id) {
            return Err(DomainError::Forbidden);
        }

        self.repo.change_status(ad_id, published).await
    }

    async fn update_ad(
        &self,
        author_id: i64,
        title: String,
        text: String,
        ad_id: i64,
    ) -> DomainResult<Ad> {
        validate_content(&title, &text)?;

        let ad = self.repo.get(ad_id).await?;
        if !ad.is_owned_by(author_id) {
            return Err(DomainError::Forbidden);
        }

        self.repo.update_content(ad_id, title, text).await
    }

    async fn get_ad(&self, ad_id: i64) -> DomainResult<Ad> {
        // NotFound deliberately surfaces as BadRequest here
        self.repo
            .get(ad_id)
            .await
            .map_err(|_| DomainError::bad_request("no such ad"))
    }

    async fn list_ads(&self) -> DomainResult<Vec<Ad>> {
        self.repo
            .list_published()
            .await
            .map_err(|_| DomainError::bad_request("no ads found"))
    }

    async fn search_ads_by_title(&self, prefix: &str) -> DomainResult<Vec<Ad>> {
        self.repo.search_by_title(prefix).await
    }

    async fn list_ads_by_author(&self, author_id: i64) -> DomainResult<Vec<Ad>> {
        self.repo
            .list_by_author(author_id)
            .await
            .map_err(|_| DomainError::bad_request("no ads found"))
    }

    async fn list_ads_by_day(&self, day: i64) -> DomainResult<Vec<Ad>> {
        self.repo
            .list_by_day(day)
            .await
            .map_err(|_| DomainError::bad_request("no ads found"))
    }

    async fn delete_ad(&self, author_id: i64, ad_id: i64) -> DomainResult<Ad> {
        self.repo.delete(ad_id, author_id).await
    }
}
