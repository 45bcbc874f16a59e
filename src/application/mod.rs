//! Read-through service over the API client and cache.
//!
//! Each read declares its cache key and serves from the store while the
//! entry is inside its staleness window. A stale entry is returned
//! immediately while a background re-fetch refreshes it
//! (stale-while-revalidate); a miss fetches in the foreground. Both paths
//! coalesce concurrent identical fetches into a single network call.
//!
//! Mutations call the API directly, echo the counter change onto the
//! last-known cached values, and mark the affected keys stale so the next
//! read re-fetches. A failed fetch or mutation never modifies the cache.

mod error;

use std::sync::Arc;

use metrics::counter;
use tracing::{info, warn};
use uuid::Uuid;

use crate::cache::{CacheConfig, CacheKey, CacheStore, FlightGroup};
use crate::client::ApiClient;
use crate::domain::{
    AboutMe, Certificate, Comment, DomainError, Experience, HomeData, Post, Project, Skill,
};

pub use error::AppError;

pub const METRIC_CACHE_HIT: &str = "folio_cache_hit_total";
pub const METRIC_CACHE_MISS: &str = "folio_cache_miss_total";
pub const METRIC_CACHE_REVALIDATE: &str = "folio_cache_revalidate_total";
pub const METRIC_CACHE_INVALIDATE: &str = "folio_cache_invalidate_total";

struct Inner {
    client: ApiClient,
    store: CacheStore,
    config: CacheConfig,

    home_flight: FlightGroup<(), HomeData>,
    about_me_flight: FlightGroup<(), AboutMe>,
    skills_flight: FlightGroup<(), Vec<Skill>>,
    experiences_flight: FlightGroup<(), Vec<Experience>>,
    certificates_flight: FlightGroup<(), Vec<Certificate>>,
    posts_flight: FlightGroup<(), Vec<Post>>,
    projects_flight: FlightGroup<(), Vec<Project>>,
    post_flight: FlightGroup<Uuid, Post>,
    project_flight: FlightGroup<Uuid, Project>,
}

/// Cached view of the portfolio API. Cheap to clone; all clones share one
/// process-wide store.
#[derive(Clone)]
pub struct Portfolio {
    inner: Arc<Inner>,
}

/// Generates a scalar-key read: fresh hit, stale-serve plus background
/// revalidation, or coalesced foreground fetch.
macro_rules! scalar_read {
    ($(#[$doc:meta])* $name:ident, $key:expr, $get:ident, $set:ident, $flight:ident, $fetch:ident, $ty:ty) => {
        $(#[$doc])*
        pub async fn $name(&self) -> Result<$ty, AppError> {
            let key = $key;
            let ttl = self.inner.config.ttl_for(&key);

            if let Some(entry) = self.inner.store.$get() {
                if entry.is_fresh(ttl) {
                    counter!(METRIC_CACHE_HIT).increment(1);
                    return Ok(entry.value);
                }
                counter!(METRIC_CACHE_REVALIDATE).increment(1);
                let inner = Arc::clone(&self.inner);
                tokio::spawn(async move {
                    let fetcher = Arc::clone(&inner);
                    let result = inner
                        .$flight
                        .run((), move || async move { fetcher.client.$fetch().await })
                        .await;
                    match result {
                        Ok(value) => inner.store.$set(value),
                        Err(err) => warn!(
                            key = %key,
                            error = %err,
                            "background revalidation failed; keeping stale value"
                        ),
                    }
                });
                return Ok(entry.value);
            }

            counter!(METRIC_CACHE_MISS).increment(1);
            let fetcher = Arc::clone(&self.inner);
            let value = self
                .inner
                .$flight
                .run((), move || async move { fetcher.client.$fetch().await })
                .await?;
            self.inner.store.$set(value.clone());
            Ok(value)
        }
    };
}

/// Generates a uuid-keyed read with the same three paths.
macro_rules! item_read {
    ($(#[$doc:meta])* $name:ident, $key:path, $get:ident, $set:ident, $flight:ident, $fetch:ident, $ty:ty) => {
        $(#[$doc])*
        pub async fn $name(&self, uuid: Uuid) -> Result<$ty, AppError> {
            let key = $key(uuid);
            let ttl = self.inner.config.ttl_for(&key);

            if let Some(entry) = self.inner.store.$get(uuid) {
                if entry.is_fresh(ttl) {
                    counter!(METRIC_CACHE_HIT).increment(1);
                    return Ok(entry.value);
                }
                counter!(METRIC_CACHE_REVALIDATE).increment(1);
                let inner = Arc::clone(&self.inner);
                tokio::spawn(async move {
                    let fetcher = Arc::clone(&inner);
                    let result = inner
                        .$flight
                        .run(uuid, move || async move { fetcher.client.$fetch(uuid).await })
                        .await;
                    match result {
                        Ok(value) => inner.store.$set(value),
                        Err(err) => warn!(
                            key = %key,
                            error = %err,
                            "background revalidation failed; keeping stale value"
                        ),
                    }
                });
                return Ok(entry.value);
            }

            counter!(METRIC_CACHE_MISS).increment(1);
            let fetcher = Arc::clone(&self.inner);
            let value = self
                .inner
                .$flight
                .run(uuid, move || async move { fetcher.client.$fetch(uuid).await })
                .await?;
            self.inner.store.$set(value.clone());
            Ok(value)
        }
    };
}

impl Portfolio {
    pub fn new(client: ApiClient, config: CacheConfig) -> Self {
        let store = CacheStore::new(&config);
        Self {
            inner: Arc::new(Inner {
                client,
                store,
                config,
                home_flight: FlightGroup::new(),
                about_me_flight: FlightGroup::new(),
                skills_flight: FlightGroup::new(),
                experiences_flight: FlightGroup::new(),
                certificates_flight: FlightGroup::new(),
                posts_flight: FlightGroup::new(),
                projects_flight: FlightGroup::new(),
                post_flight: FlightGroup::new(),
                project_flight: FlightGroup::new(),
            }),
        }
    }

    // ------------------------------------------------------------------
    // Reads
    // ------------------------------------------------------------------

    scalar_read!(
        /// Home-page aggregate, served from cache within a 5-minute window.
        home, CacheKey::Home, get_home, set_home, home_flight, get_home, HomeData
    );
    scalar_read!(
        about_me, CacheKey::AboutMe, get_about_me, set_about_me, about_me_flight, get_about_me, AboutMe
    );
    scalar_read!(
        skills, CacheKey::Skills, get_skills, set_skills, skills_flight, get_skills, Vec<Skill>
    );
    scalar_read!(
        experiences, CacheKey::Experiences, get_experiences, set_experiences, experiences_flight, get_experiences, Vec<Experience>
    );
    scalar_read!(
        certificates, CacheKey::Certificates, get_certificates, set_certificates, certificates_flight, get_certificates, Vec<Certificate>
    );
    scalar_read!(
        /// All posts in server order, served from cache within a 2-minute window.
        posts, CacheKey::Posts, get_posts, set_posts, posts_flight, get_posts, Vec<Post>
    );
    scalar_read!(
        projects, CacheKey::Projects, get_projects, set_projects, projects_flight, get_projects, Vec<Project>
    );

    item_read!(
        post, CacheKey::Post, get_post, set_post, post_flight, get_post, Post
    );
    item_read!(
        project, CacheKey::Project, get_project, set_project, project_flight, get_project, Project
    );

    // ------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------

    /// Submit a like for a post. Repeatable increment, not a toggle.
    ///
    /// On success the local counters are bumped as an optimistic echo and
    /// the posts list, home aggregate, and the post itself are marked
    /// stale; the authoritative count arrives with the next fetch.
    pub async fn like_post(&self, uuid: Uuid) -> Result<(), AppError> {
        self.inner
            .client
            .like_post(uuid)
            .await
            .map_err(AppError::api)?;
        self.inner.store.bump_post_likes(uuid);
        self.invalidate(&[CacheKey::Posts, CacheKey::Home, CacheKey::Post(uuid)]);
        Ok(())
    }

    /// Submit a comment on a post.
    ///
    /// `content` is trimmed first; whitespace-only content fails validation
    /// without a network call. Returns the created comment with its
    /// server-assigned `id` and `created_at`.
    pub async fn add_post_comment(&self, uuid: Uuid, content: &str) -> Result<Comment, AppError> {
        let content = validated_content(content)?;
        let comment = self
            .inner
            .client
            .add_post_comment(uuid, content)
            .await
            .map_err(AppError::api)?;
        self.inner.store.bump_post_comments(uuid);
        self.invalidate(&[CacheKey::Post(uuid), CacheKey::Posts]);
        Ok(comment)
    }

    /// Submit a like for a project. Same policy as [`Self::like_post`].
    pub async fn like_project(&self, uuid: Uuid) -> Result<(), AppError> {
        self.inner
            .client
            .like_project(uuid)
            .await
            .map_err(AppError::api)?;
        self.inner.store.bump_project_likes(uuid);
        self.invalidate(&[CacheKey::Projects, CacheKey::Home, CacheKey::Project(uuid)]);
        Ok(())
    }

    /// Submit a comment on a project. Same policy as
    /// [`Self::add_post_comment`].
    pub async fn add_project_comment(
        &self,
        uuid: Uuid,
        content: &str,
    ) -> Result<Comment, AppError> {
        let content = validated_content(content)?;
        let comment = self
            .inner
            .client
            .add_project_comment(uuid, content)
            .await
            .map_err(AppError::api)?;
        self.inner.store.bump_project_comments(uuid);
        self.invalidate(&[CacheKey::Project(uuid), CacheKey::Projects]);
        Ok(comment)
    }

    fn invalidate(&self, keys: &[CacheKey]) {
        for key in keys {
            self.inner.store.invalidate(key);
            counter!(METRIC_CACHE_INVALIDATE).increment(1);
            info!(key = %key, "cache key invalidated");
        }
    }
}

fn validated_content(content: &str) -> Result<&str, DomainError> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err(DomainError::validation("comment content must not be empty"));
    }
    Ok(trimmed)
}
