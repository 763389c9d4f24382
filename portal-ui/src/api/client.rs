//! HTTP API Client
//!
//! Functions for communicating with the portal REST backend.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::state::models::{Announcement, Assignment, Course, EntityId, Role, Stats, User};

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

const API_BASE_KEY: &str = "portal_api_url";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_BASE_KEY).ok().flatten())
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
    url.trim_end_matches('/').to_string()
}

// ============ Request / Response Types ============

#[derive(Debug, serde::Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct RegisterRequest<'a> {
    name: &'a str,
    email: &'a str,
    password: &'a str,
    role: Role,
}

#[derive(Serialize)]
struct CreateCourseRequest<'a> {
    title: &'a str,
    subject: &'a str,
}

#[derive(Serialize)]
struct ApproveRequest<'a> {
    user_id: &'a EntityId,
    approved: bool,
}

// ============ Helpers ============

fn url(path: &str) -> String {
    format!("{}{}", get_api_base(), path)
}

fn authorized(builder: RequestBuilder, token: &str) -> RequestBuilder {
    builder.header("Authorization", &format!("Bearer {}", token))
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(if body.is_empty() {
            format!("HTTP {}", status)
        } else {
            format!("HTTP {}: {}", status, body)
        });
    }

    response.json().await.map_err(|e| format!("Parse error: {}", e))
}

async fn get_json<T: DeserializeOwned>(path: &str, token: &str) -> Result<T, String> {
    let response = authorized(Request::get(&url(path)), token)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    read_json(response).await
}

async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    token: Option<&str>,
    body: &B,
) -> Result<T, String> {
    let mut builder = Request::post(&url(path));
    if let Some(token) = token {
        builder = authorized(builder, token);
    }

    let response = builder
        .json(body)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    read_json(response).await
}

// ============ API Functions ============

/// Exchange credentials for a bearer token
pub async fn login(email: &str, password: &str) -> Result<String, String> {
    let response: TokenResponse =
        post_json("/auth/login", None, &LoginRequest { email, password }).await?;
    Ok(response.access_token)
}

/// Create an account and return its bearer token
pub async fn register(name: &str, email: &str, password: &str, role: Role) -> Result<String, String> {
    let response: TokenResponse = post_json(
        "/auth/register",
        None,
        &RegisterRequest {
            name,
            email,
            password,
            role,
        },
    )
    .await?;
    Ok(response.access_token)
}

pub async fn fetch_me(token: &str) -> Result<User, String> {
    get_json("/me", token).await
}

pub async fn fetch_student_courses(token: &str) -> Result<Vec<Course>, String> {
    get_json("/student/courses", token).await
}

pub async fn fetch_assignments(token: &str) -> Result<Vec<Assignment>, String> {
    get_json("/student/assignments", token).await
}

pub async fn fetch_announcements(token: &str) -> Result<Vec<Announcement>, String> {
    get_json("/announcements", token).await
}

pub async fn fetch_teacher_courses(token: &str) -> Result<Vec<Course>, String> {
    get_json("/teacher/courses", token).await
}

/// Create a course owned by the signed-in teacher
pub async fn create_course(token: &str, title: &str, subject: &str) -> Result<Course, String> {
    post_json("/teacher/courses", Some(token), &CreateCourseRequest { title, subject }).await
}

pub async fn fetch_users(token: &str) -> Result<Vec<User>, String> {
    get_json("/admin/users", token).await
}

pub async fn fetch_stats(token: &str) -> Result<Stats, String> {
    get_json("/admin/stats", token).await
}

/// Set a user's approval flag, returns the updated user
pub async fn set_approval(token: &str, user_id: &EntityId, approved: bool) -> Result<User, String> {
    post_json("/admin/approve", Some(token), &ApproveRequest { user_id, approved }).await
}
