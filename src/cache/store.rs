//! Cache storage.
//!
//! Singleton slots for collections and the two aggregates, LRU maps for
//! single posts/projects. The store is a time-bounded read-through copy of
//! server state, never a write-back store: values enter via `set_*` after a
//! successful fetch, and invalidation marks them stale without evicting so
//! stale-while-revalidate can keep serving them. A failed fetch never
//! touches the store.

use std::sync::RwLock;
use std::time::{Duration, Instant};

use lru::LruCache;
use uuid::Uuid;

use crate::domain::{AboutMe, Certificate, Experience, HomeData, Post, Project, Skill};

use super::config::CacheConfig;
use super::keys::CacheKey;
use super::lock::{rw_read, rw_write};

const SOURCE: &str = "cache::store";

/// A cached value plus the bookkeeping the staleness policy needs.
#[derive(Debug, Clone)]
pub struct Entry<T> {
    pub value: T,
    fetched_at: Instant,
    invalidated: bool,
}

impl<T> Entry<T> {
    fn new(value: T) -> Self {
        Self {
            value,
            fetched_at: Instant::now(),
            invalidated: false,
        }
    }

    /// Whether the value may still be served without a re-fetch.
    pub fn is_fresh(&self, ttl: Duration) -> bool {
        !self.invalidated && self.fetched_at.elapsed() < ttl
    }
}

/// Process-wide cache, shared by every reader.
///
/// All mutation happens under per-slot `RwLock`s; two writes to the same
/// slot can never interleave.
pub struct CacheStore {
    home: RwLock<Option<Entry<HomeData>>>,
    about_me: RwLock<Option<Entry<AboutMe>>>,
    skills: RwLock<Option<Entry<Vec<Skill>>>>,
    experiences: RwLock<Option<Entry<Vec<Experience>>>>,
    certificates: RwLock<Option<Entry<Vec<Certificate>>>>,
    posts: RwLock<Option<Entry<Vec<Post>>>>,
    projects: RwLock<Option<Entry<Vec<Project>>>>,

    posts_by_uuid: RwLock<LruCache<Uuid, Entry<Post>>>,
    projects_by_uuid: RwLock<LruCache<Uuid, Entry<Project>>>,
}

macro_rules! singleton_slot {
    ($get:ident, $set:ident, $field:ident, $ty:ty) => {
        pub fn $get(&self) -> Option<Entry<$ty>> {
            rw_read(&self.$field, SOURCE, stringify!($get)).clone()
        }

        pub fn $set(&self, value: $ty) {
            *rw_write(&self.$field, SOURCE, stringify!($set)) = Some(Entry::new(value));
        }
    };
}

impl CacheStore {
    /// Create an empty store with the given capacity limits.
    pub fn new(config: &CacheConfig) -> Self {
        Self {
            home: RwLock::new(None),
            about_me: RwLock::new(None),
            skills: RwLock::new(None),
            experiences: RwLock::new(None),
            certificates: RwLock::new(None),
            posts: RwLock::new(None),
            projects: RwLock::new(None),
            posts_by_uuid: RwLock::new(LruCache::new(config.post_item_limit_non_zero())),
            projects_by_uuid: RwLock::new(LruCache::new(config.project_item_limit_non_zero())),
        }
    }

    singleton_slot!(get_home, set_home, home, HomeData);
    singleton_slot!(get_about_me, set_about_me, about_me, AboutMe);
    singleton_slot!(get_skills, set_skills, skills, Vec<Skill>);
    singleton_slot!(get_experiences, set_experiences, experiences, Vec<Experience>);
    singleton_slot!(get_certificates, set_certificates, certificates, Vec<Certificate>);
    singleton_slot!(get_posts, set_posts, posts, Vec<Post>);
    singleton_slot!(get_projects, set_projects, projects, Vec<Project>);

    // ========================================================================
    // Single-item caches
    // ========================================================================

    pub fn get_post(&self, uuid: Uuid) -> Option<Entry<Post>> {
        rw_write(&self.posts_by_uuid, SOURCE, "get_post")
            .get(&uuid)
            .cloned()
    }

    pub fn set_post(&self, post: Post) {
        rw_write(&self.posts_by_uuid, SOURCE, "set_post").put(post.uuid, Entry::new(post));
    }

    pub fn get_project(&self, uuid: Uuid) -> Option<Entry<Project>> {
        rw_write(&self.projects_by_uuid, SOURCE, "get_project")
            .get(&uuid)
            .cloned()
    }

    pub fn set_project(&self, project: Project) {
        rw_write(&self.projects_by_uuid, SOURCE, "set_project")
            .put(project.uuid, Entry::new(project));
    }

    // ========================================================================
    // Invalidation
    // ========================================================================

    /// Mark a key's value as no longer authoritative.
    ///
    /// The value stays retrievable so stale-while-revalidate can serve it;
    /// the next read through the application layer re-fetches.
    pub fn invalidate(&self, key: &CacheKey) {
        fn mark<T>(slot: &RwLock<Option<Entry<T>>>, op: &'static str) {
            if let Some(entry) = rw_write(slot, SOURCE, op).as_mut() {
                entry.invalidated = true;
            }
        }

        match key {
            CacheKey::Home => mark(&self.home, "invalidate.home"),
            CacheKey::AboutMe => mark(&self.about_me, "invalidate.about_me"),
            CacheKey::Skills => mark(&self.skills, "invalidate.skills"),
            CacheKey::Experiences => mark(&self.experiences, "invalidate.experiences"),
            CacheKey::Certificates => mark(&self.certificates, "invalidate.certificates"),
            CacheKey::Posts => mark(&self.posts, "invalidate.posts"),
            CacheKey::Projects => mark(&self.projects, "invalidate.projects"),
            CacheKey::Post(uuid) => {
                if let Some(entry) =
                    rw_write(&self.posts_by_uuid, SOURCE, "invalidate.post").get_mut(uuid)
                {
                    entry.invalidated = true;
                }
            }
            CacheKey::Project(uuid) => {
                if let Some(entry) =
                    rw_write(&self.projects_by_uuid, SOURCE, "invalidate.project").get_mut(uuid)
                {
                    entry.invalidated = true;
                }
            }
        }
    }

    /// Drop all cached data.
    pub fn clear(&self) {
        *rw_write(&self.home, SOURCE, "clear.home") = None;
        *rw_write(&self.about_me, SOURCE, "clear.about_me") = None;
        *rw_write(&self.skills, SOURCE, "clear.skills") = None;
        *rw_write(&self.experiences, SOURCE, "clear.experiences") = None;
        *rw_write(&self.certificates, SOURCE, "clear.certificates") = None;
        *rw_write(&self.posts, SOURCE, "clear.posts") = None;
        *rw_write(&self.projects, SOURCE, "clear.projects") = None;
        rw_write(&self.posts_by_uuid, SOURCE, "clear.posts_by_uuid").clear();
        rw_write(&self.projects_by_uuid, SOURCE, "clear.projects_by_uuid").clear();
    }

    // ========================================================================
    // Optimistic counter echoes
    // ========================================================================
    //
    // Pure local transforms over the last-known cached values, applied after
    // a successful mutation. The mutated keys are marked stale at the same
    // time, so the next successful fetch replaces these values wholesale.

    pub fn bump_post_likes(&self, uuid: Uuid) {
        if let Some(entry) = rw_write(&self.posts, SOURCE, "bump_post_likes.list").as_mut() {
            for post in entry.value.iter_mut().filter(|p| p.uuid == uuid) {
                post.likes_count += 1;
            }
        }
        if let Some(entry) =
            rw_write(&self.posts_by_uuid, SOURCE, "bump_post_likes.item").get_mut(&uuid)
        {
            entry.value.likes_count += 1;
        }
        if let Some(entry) = rw_write(&self.home, SOURCE, "bump_post_likes.home").as_mut() {
            for post in entry.value.last_posts.iter_mut().filter(|p| p.uuid == uuid) {
                post.likes_count += 1;
            }
        }
    }

    pub fn bump_post_comments(&self, uuid: Uuid) {
        if let Some(entry) = rw_write(&self.posts, SOURCE, "bump_post_comments.list").as_mut() {
            for post in entry.value.iter_mut().filter(|p| p.uuid == uuid) {
                post.comments_count += 1;
            }
        }
        if let Some(entry) =
            rw_write(&self.posts_by_uuid, SOURCE, "bump_post_comments.item").get_mut(&uuid)
        {
            entry.value.comments_count += 1;
        }
    }

    pub fn bump_project_likes(&self, uuid: Uuid) {
        if let Some(entry) = rw_write(&self.projects, SOURCE, "bump_project_likes.list").as_mut() {
            for project in entry.value.iter_mut().filter(|p| p.uuid == uuid) {
                project.likes_count += 1;
            }
        }
        if let Some(entry) =
            rw_write(&self.projects_by_uuid, SOURCE, "bump_project_likes.item").get_mut(&uuid)
        {
            entry.value.likes_count += 1;
        }
        if let Some(entry) = rw_write(&self.home, SOURCE, "bump_project_likes.home").as_mut() {
            for project in entry
                .value
                .last_projects
                .iter_mut()
                .filter(|p| p.uuid == uuid)
            {
                project.likes_count += 1;
            }
        }
    }

    pub fn bump_project_comments(&self, uuid: Uuid) {
        if let Some(entry) = rw_write(&self.projects, SOURCE, "bump_project_comments.list").as_mut()
        {
            for project in entry.value.iter_mut().filter(|p| p.uuid == uuid) {
                project.comments_count += 1;
            }
        }
        if let Some(entry) =
            rw_write(&self.projects_by_uuid, SOURCE, "bump_project_comments.item").get_mut(&uuid)
        {
            entry.value.comments_count += 1;
        }
    }
}
