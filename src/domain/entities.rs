//! Value records decoded from the portfolio API.
//!
//! All entities are created and mutated server-side; the client holds them
//! only as immutable snapshots inside the cache. Timestamps arrive as
//! RFC 3339 strings. `likes_count` and `comments_count` are server-maintained
//! counters: the API may embed only a subset of `comments` while reporting
//! the full count, so nothing here assumes `comments_count == comments.len()`.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

/// Shared vocabulary label attached to posts and projects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: i64,
    pub name: String,
}

/// Anonymous comment owned by exactly one post or project, append-only
/// from the client's perspective. `id` and `created_at` are assigned by
/// the server on creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: i64,
    pub content: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// Blog post. Addressed by `uuid` in every single-resource path; the
/// numeric `id` is payload-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub uuid: Uuid,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub tags: Vec<Tag>,
    pub likes_count: u32,
    pub comments_count: u32,
    #[serde(default)]
    pub comments: Vec<Comment>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

/// Portfolio project. Same counter/comment shape as [`Post`] plus the
/// external links and the owning user's numeric identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub uuid: Uuid,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub github_link: Option<String>,
    #[serde(default)]
    pub live_demo_link: Option<String>,
    pub owner: i64,
    #[serde(default)]
    pub tags: Vec<Tag>,
    pub likes_count: u32,
    pub comments_count: u32,
    #[serde(default)]
    pub comments: Vec<Comment>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

/// Singleton profile record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AboutMe {
    pub intro_text: String,
    #[serde(default)]
    pub profile_image_url: Option<String>,
    #[serde(default)]
    pub resume_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub image_url: Option<String>,
    pub experience_years: f32,
    /// Percentage in 0..=100.
    pub proficiency: u8,
}

/// Résumé line item for a held position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub id: i64,
    pub title: String,
    pub company: String,
    pub description: String,
    pub start_year: u16,
    #[serde(default)]
    pub end_year: Option<u16>,
    #[serde(default)]
    pub link: Option<String>,
    pub period: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certificate {
    pub id: i64,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub obtained_year: Option<u16>,
}

/// Hero block of the home aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    pub id: i64,
    #[serde(default)]
    pub hero_image: Option<String>,
    pub hero_text: String,
}

/// Denormalized home-page snapshot: hero content plus the latest posts
/// and projects. Not independently owned; any post or project mutation
/// may leave it stale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomeData {
    #[serde(default)]
    pub home: Option<Hero>,
    #[serde(default)]
    pub last_posts: Vec<Post>,
    #[serde(default)]
    pub last_projects: Vec<Project>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_decodes_with_embedded_comment_subset() {
        let raw = r#"{
            "id": 1,
            "uuid": "8c1bfa2e-6a52-4d3a-9e6d-0d2a66b1d001",
            "title": "Hi",
            "content": "body",
            "image": null,
            "tags": [{"id": 2, "name": "rust"}],
            "likes_count": 3,
            "comments_count": 5,
            "comments": [{"id": 9, "content": "nice", "created_at": "2024-05-01T10:30:00Z"}],
            "created_at": "2024-05-01T10:00:00.123456Z",
            "updated_at": "2024-05-01T10:00:00.123456Z"
        }"#;

        let post: Post = serde_json::from_str(raw).expect("post json");
        assert_eq!(post.likes_count, 3);
        // Embedded subset: count reports more comments than were inlined.
        assert_eq!(post.comments_count, 5);
        assert_eq!(post.comments.len(), 1);
        assert_eq!(post.tags[0].name, "rust");
    }

    #[test]
    fn home_data_tolerates_missing_hero() {
        let raw = r#"{"home": null, "last_posts": [], "last_projects": []}"#;
        let home: HomeData = serde_json::from_str(raw).expect("home json");
        assert!(home.home.is_none());
        assert!(home.last_posts.is_empty());
    }

    #[test]
    fn optional_links_default_to_none() {
        let raw = r#"{
            "id": 4,
            "title": "AWS",
            "description": "cert",
            "image_url": "https://example.com/c.png"
        }"#;
        let cert: Certificate = serde_json::from_str(raw).expect("certificate json");
        assert!(cert.link.is_none());
        assert!(cert.obtained_year.is_none());
    }
}
