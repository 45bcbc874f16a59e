//! Cache key definitions.
//!
//! One key per logical resource: scalar keys for collections and
//! singletons, composite keys for a single post or project.

use std::fmt;

use uuid::Uuid;

/// Identifies a cached resource for lookup and invalidation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheKey {
    // Aggregates and singletons
    /// Home-page aggregate (hero + latest posts/projects).
    Home,
    /// Singleton profile record.
    AboutMe,

    // Collections
    Skills,
    Experiences,
    Certificates,
    Posts,
    Projects,

    // Single items, addressed by uuid
    Post(Uuid),
    Project(Uuid),
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Home => write!(f, "home"),
            Self::AboutMe => write!(f, "aboutMe"),
            Self::Skills => write!(f, "skills"),
            Self::Experiences => write!(f, "experiences"),
            Self::Certificates => write!(f, "certificates"),
            Self::Posts => write!(f, "posts"),
            Self::Projects => write!(f, "projects"),
            Self::Post(uuid) => write!(f, "post:{uuid}"),
            Self::Project(uuid) => write!(f, "project:{uuid}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_keys_compare_by_uuid() {
        let id = Uuid::new_v4();
        assert_eq!(CacheKey::Post(id), CacheKey::Post(id));
        assert_ne!(CacheKey::Post(id), CacheKey::Post(Uuid::new_v4()));
        assert_ne!(CacheKey::Post(id), CacheKey::Project(id));
    }

    #[test]
    fn display_is_stable() {
        let id = Uuid::nil();
        assert_eq!(CacheKey::Posts.to_string(), "posts");
        assert_eq!(
            CacheKey::Post(id).to_string(),
            "post:00000000-0000-0000-0000-000000000000"
        );
    }
}
