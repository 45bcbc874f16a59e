//! Cache configuration.
//!
//! Staleness windows per resource kind and capacity limits for the
//! per-item caches, controllable via `folio.toml`.

use std::num::NonZeroUsize;
use std::time::Duration;

use serde::Deserialize;

use super::keys::CacheKey;

// Default staleness windows, in seconds.
const DEFAULT_POSTS_TTL_SECS: u64 = 2 * 60;
const DEFAULT_PROJECTS_TTL_SECS: u64 = 2 * 60;
const DEFAULT_HOME_TTL_SECS: u64 = 5 * 60;
const DEFAULT_ABOUT_TTL_SECS: u64 = 10 * 60;
const DEFAULT_ITEM_TTL_SECS: u64 = 2 * 60;

const DEFAULT_POST_ITEM_LIMIT: usize = 200;
const DEFAULT_PROJECT_ITEM_LIMIT: usize = 100;

/// Cache configuration from `folio.toml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Staleness window for the posts list.
    pub posts_ttl_secs: u64,
    /// Staleness window for the projects list.
    pub projects_ttl_secs: u64,
    /// Staleness window for the home aggregate.
    pub home_ttl_secs: u64,
    /// Staleness window for about-me, skills, experiences, certificates.
    pub about_ttl_secs: u64,
    /// Staleness window for single posts/projects.
    pub item_ttl_secs: u64,
    /// Maximum single posts held in the item cache.
    pub post_item_limit: usize,
    /// Maximum single projects held in the item cache.
    pub project_item_limit: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            posts_ttl_secs: DEFAULT_POSTS_TTL_SECS,
            projects_ttl_secs: DEFAULT_PROJECTS_TTL_SECS,
            home_ttl_secs: DEFAULT_HOME_TTL_SECS,
            about_ttl_secs: DEFAULT_ABOUT_TTL_SECS,
            item_ttl_secs: DEFAULT_ITEM_TTL_SECS,
            post_item_limit: DEFAULT_POST_ITEM_LIMIT,
            project_item_limit: DEFAULT_PROJECT_ITEM_LIMIT,
        }
    }
}

impl CacheConfig {
    /// The staleness window that applies to a key: how long a fetched
    /// value may be served without triggering a re-fetch.
    pub fn ttl_for(&self, key: &CacheKey) -> Duration {
        let secs = match key {
            CacheKey::Posts => self.posts_ttl_secs,
            CacheKey::Projects => self.projects_ttl_secs,
            CacheKey::Home => self.home_ttl_secs,
            CacheKey::AboutMe
            | CacheKey::Skills
            | CacheKey::Experiences
            | CacheKey::Certificates => self.about_ttl_secs,
            CacheKey::Post(_) | CacheKey::Project(_) => self.item_ttl_secs,
        };
        Duration::from_secs(secs)
    }

    /// Returns the post item limit as NonZeroUsize, clamping to 1 if zero.
    pub fn post_item_limit_non_zero(&self) -> NonZeroUsize {
        NonZeroUsize::new(self.post_item_limit).unwrap_or(NonZeroUsize::MIN)
    }

    /// Returns the project item limit as NonZeroUsize, clamping to 1 if zero.
    pub fn project_item_limit_non_zero(&self) -> NonZeroUsize {
        NonZeroUsize::new(self.project_item_limit).unwrap_or(NonZeroUsize::MIN)
    }
}
