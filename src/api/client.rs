//! Portal REST API Client
//!
//! HTTP client for the school-portal backend.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

use super::dto::{ApproveRequest, CreateCourseRequest, LoginRequest, RegisterRequest, TokenResponse};
use super::{ApiError, ApiResult, PortalApi};
use crate::models::{Announcement, Assignment, Course, EntityId, Role, Stats, User};

/// Configuration for the portal client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the backend (e.g., "http://localhost:8000")
    pub base_url: String,
    /// Per-request timeout; `None` waits indefinitely
    pub request_timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            request_timeout: None,
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}

/// Portal REST API client
pub struct PortalClient {
    client: Client,
    base_url: String,
}

impl PortalClient {
    /// Create a new client with the given configuration
    pub fn new(config: ClientConfig) -> ApiResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(ApiError::Transport)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, token: &str) -> ApiResult<T> {
        tracing::debug!(endpoint = path, "GET");
        let request = self.client.get(self.url(path)).bearer_auth(token);
        Self::send(request, path).await
    }

    async fn post_json<B, T>(&self, path: &str, token: Option<&str>, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        tracing::debug!(endpoint = path, "POST");
        let mut request = self.client.post(self.url(path)).json(body);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        Self::send(request, path).await
    }

    async fn send<T: DeserializeOwned>(request: RequestBuilder, path: &str) -> ApiResult<T> {
        let response = request.send().await?;
        let result = Self::decode(response).await;
        if let Err(e) = &result {
            tracing::debug!(endpoint = path, error = %e, "request failed");
        }
        result
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl PortalApi for PortalClient {
    async fn login(&self, email: &str, password: &str) -> ApiResult<String> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let token: TokenResponse = self.post_json("/auth/login", None, &body).await?;
        Ok(token.access_token)
    }

    async fn register(&self, name: &str, email: &str, password: &str, role: Role) -> ApiResult<String> {
        let body = RegisterRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            role,
        };
        let token: TokenResponse = self.post_json("/auth/register", None, &body).await?;
        Ok(token.access_token)
    }

    async fn me(&self, token: &str) -> ApiResult<User> {
        self.get_json("/me", token).await
    }

    async fn student_courses(&self, token: &str) -> ApiResult<Vec<Course>> {
        self.get_json("/student/courses", token).await
    }

    async fn student_assignments(&self, token: &str) -> ApiResult<Vec<Assignment>> {
        self.get_json("/student/assignments", token).await
    }

    async fn announcements(&self, token: &str) -> ApiResult<Vec<Announcement>> {
        self.get_json("/announcements", token).await
    }

    async fn teacher_courses(&self, token: &str) -> ApiResult<Vec<Course>> {
        self.get_json("/teacher/courses", token).await
    }

    async fn create_course(&self, token: &str, title: &str, subject: &str) -> ApiResult<Course> {
        let body = CreateCourseRequest {
            title: title.to_string(),
            subject: subject.to_string(),
        };
        self.post_json("/teacher/courses", Some(token), &body).await
    }

    async fn admin_users(&self, token: &str) -> ApiResult<Vec<User>> {
        self.get_json("/admin/users", token).await
    }

    async fn admin_stats(&self, token: &str) -> ApiResult<Stats> {
        self.get_json("/admin/stats", token).await
    }

    async fn set_approval(&self, token: &str, user_id: &EntityId, approved: bool) -> ApiResult<User> {
        let body = ApproveRequest {
            user_id: user_id.clone(),
            approved,
        };
        self.post_json("/admin/approve", Some(token), &body).await
    }
}
