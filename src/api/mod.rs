//! Portal Backend API
//!
//! Typed access to the school-portal REST backend.
//!
//! # Endpoints
//!
//! ## Auth
//! - `POST /auth/login` - Exchange credentials for a token
//! - `POST /auth/register` - Create an account and get a token
//! - `GET /me` - Profile of the token's owner
//!
//! ## Student
//! - `GET /student/courses`
//! - `GET /student/assignments`
//! - `GET /announcements`
//!
//! ## Teacher
//! - `GET /teacher/courses`
//! - `POST /teacher/courses`
//!
//! ## Admin
//! - `GET /admin/users`
//! - `GET /admin/stats`
//! - `POST /admin/approve`
//!
//! Every call except login and register sends `Authorization: Bearer <token>`.

pub mod client;
pub mod dto;
pub mod error;

pub use client::{ClientConfig, PortalClient};
pub use error::{ApiError, ApiResult};

use async_trait::async_trait;

use crate::models::{Announcement, Assignment, Course, EntityId, Role, Stats, User};

/// Operations the portal backend offers
///
/// [`PortalClient`] is the HTTP implementation; tests substitute in-memory
/// fakes.
#[async_trait]
pub trait PortalApi: Send + Sync {
    /// Returns the issued access token
    async fn login(&self, email: &str, password: &str) -> ApiResult<String>;

    /// Returns the issued access token
    async fn register(&self, name: &str, email: &str, password: &str, role: Role) -> ApiResult<String>;

    async fn me(&self, token: &str) -> ApiResult<User>;

    async fn student_courses(&self, token: &str) -> ApiResult<Vec<Course>>;

    async fn student_assignments(&self, token: &str) -> ApiResult<Vec<Assignment>>;

    async fn announcements(&self, token: &str) -> ApiResult<Vec<Announcement>>;

    async fn teacher_courses(&self, token: &str) -> ApiResult<Vec<Course>>;

    async fn create_course(&self, token: &str, title: &str, subject: &str) -> ApiResult<Course>;

    async fn admin_users(&self, token: &str) -> ApiResult<Vec<User>>;

    async fn admin_stats(&self, token: &str) -> ApiResult<Stats>;

    /// Returns the updated user
    async fn set_approval(&self, token: &str, user_id: &EntityId, approved: bool) -> ApiResult<User>;
}
