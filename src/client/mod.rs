//! HTTP client for the portfolio REST API.
//!
//! One typed method per endpoint, all funneled through a single request
//! primitive. Pure request/response: no retries, no batching, no timeout
//! override, no cancellation. Posts and projects are addressed by `uuid`
//! throughout (the numeric `id` is payload-only).

mod error;

use reqwest::{Client, Method, Response, Url, header};
use serde::de::DeserializeOwned;
use tracing::debug;
use uuid::Uuid;

use crate::domain::{AboutMe, Certificate, Comment, Experience, HomeData, Post, Project, Skill};

pub use error::ApiError;

/// Typed client over the `/api` surface.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base: Url,
}

impl ApiClient {
    /// Build a client against the given site root, e.g. `http://localhost:8080`.
    ///
    /// Every request carries `Content-Type: application/json`; endpoint
    /// paths are joined onto `<site>/api/`.
    pub fn new(site: &str) -> Result<Self, ApiError> {
        let base = Url::parse(site)?.join("/api/")?;
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );
        let client = Client::builder()
            .user_agent(Self::user_agent())
            .default_headers(headers)
            .build()?;
        Ok(Self { client, base })
    }

    pub fn user_agent() -> &'static str {
        concat!("folio/", env!("CARGO_PKG_VERSION"))
    }

    fn url(&self, path: &str) -> Result<Url, ApiError> {
        self.base.join(path).map_err(ApiError::Url)
    }

    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<T, ApiError> {
        let url = self.url(path)?;
        debug!(%method, %url, "issuing API request");

        let mut req = self.client.request(method, url);
        if let Some(b) = body {
            req = req.json(&b);
        }

        let resp = req.send().await?;
        Self::handle(resp).await
    }

    async fn request_unit(
        &self,
        method: Method,
        path: &str,
    ) -> Result<(), ApiError> {
        let url = self.url(path)?;
        debug!(%method, %url, "issuing API request");

        let resp = self.client.request(method, url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }
        Ok(())
    }

    async fn handle<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }
        let bytes = resp.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    // ------------------------------------------------------------------
    // Home / about
    // ------------------------------------------------------------------

    /// GET `/home/`: hero content plus the latest posts and projects.
    pub async fn get_home(&self) -> Result<HomeData, ApiError> {
        self.request(Method::GET, "home/", None).await
    }

    /// GET `/about-me/`: the singleton profile record.
    pub async fn get_about_me(&self) -> Result<AboutMe, ApiError> {
        self.request(Method::GET, "about-me/", None).await
    }

    /// GET `/about-me/skills/`.
    pub async fn get_skills(&self) -> Result<Vec<Skill>, ApiError> {
        self.request(Method::GET, "about-me/skills/", None).await
    }

    /// GET `/about-me/experiences/`.
    pub async fn get_experiences(&self) -> Result<Vec<Experience>, ApiError> {
        self.request(Method::GET, "about-me/experiences/", None).await
    }

    /// GET `/about-me/certificates/`.
    pub async fn get_certificates(&self) -> Result<Vec<Certificate>, ApiError> {
        self.request(Method::GET, "about-me/certificates/", None).await
    }

    // ------------------------------------------------------------------
    // Posts
    // ------------------------------------------------------------------

    /// GET `/posts/`: all posts in server order.
    pub async fn get_posts(&self) -> Result<Vec<Post>, ApiError> {
        self.request(Method::GET, "posts/", None).await
    }

    /// GET `/posts/{uuid}/`.
    pub async fn get_post(&self, uuid: Uuid) -> Result<Post, ApiError> {
        self.request(Method::GET, &format!("posts/{uuid}/"), None).await
    }

    /// POST `/posts/{uuid}/like/` with no body. Returns nothing on
    /// success; reflecting the increment is the caller's responsibility.
    pub async fn like_post(&self, uuid: Uuid) -> Result<(), ApiError> {
        self.request_unit(Method::POST, &format!("posts/{uuid}/like/"))
            .await
    }

    /// POST `/posts/{uuid}/comments/` with `{"content": ...}`.
    ///
    /// Non-empty content is enforced by the caller, not here; the returned
    /// [`Comment`] carries the server-assigned `id` and `created_at`.
    pub async fn add_post_comment(
        &self,
        uuid: Uuid,
        content: &str,
    ) -> Result<Comment, ApiError> {
        self.request(
            Method::POST,
            &format!("posts/{uuid}/comments/"),
            Some(serde_json::json!({ "content": content })),
        )
        .await
    }

    // ------------------------------------------------------------------
    // Projects
    // ------------------------------------------------------------------

    /// GET `/projects/`: all projects in server order.
    pub async fn get_projects(&self) -> Result<Vec<Project>, ApiError> {
        self.request(Method::GET, "projects/", None).await
    }

    /// GET `/projects/{uuid}/`.
    pub async fn get_project(&self, uuid: Uuid) -> Result<Project, ApiError> {
        self.request(Method::GET, &format!("projects/{uuid}/"), None)
            .await
    }

    /// POST `/projects/{uuid}/like/` with no body.
    pub async fn like_project(&self, uuid: Uuid) -> Result<(), ApiError> {
        self.request_unit(Method::POST, &format!("projects/{uuid}/like/"))
            .await
    }

    /// POST `/projects/{uuid}/comments/` with `{"content": ...}`.
    pub async fn add_project_comment(
        &self,
        uuid: Uuid,
        content: &str,
    ) -> Result<Comment, ApiError> {
        self.request(
            Method::POST,
            &format!("projects/{uuid}/comments/"),
            Some(serde_json::json!({ "content": content })),
        )
        .await
    }
}
