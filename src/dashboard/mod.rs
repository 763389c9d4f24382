//! Role Dashboards
//!
//! View models for the student, teacher and admin dashboards. Each one
//! fetches its read models once on mount and keeps its own lists.

mod admin;
mod student;
mod teacher;

pub use admin::AdminDashboard;
pub use student::StudentDashboard;
pub use teacher::TeacherDashboard;

use serde::Serialize;
use thiserror::Error;

use crate::api::{ApiError, ApiResult};
use crate::models::{EntityId, Role};
use crate::session::SessionContext;

/// Errors from dashboard actions
#[derive(Error, Debug)]
pub enum DashboardError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("User {0} is not in the loaded user list")]
    UnknownUser(EntityId),

    #[error("This action needs the {0} dashboard")]
    WrongDashboard(Role),
}

/// Load state of one dashboard section
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "data", rename_all = "lowercase")]
pub enum Section<T> {
    /// Fetch not finished
    Pending,
    Loaded(T),
    /// Fetch failed; holds the reason
    Failed(String),
}

impl<T> Default for Section<T> {
    fn default() -> Self {
        Section::Pending
    }
}

impl<T> Section<T> {
    /// Record a fetch result, logging failures
    pub(crate) fn from_result(name: &'static str, result: ApiResult<T>) -> Self {
        match result {
            Ok(value) => Section::Loaded(value),
            Err(e) => {
                tracing::warn!(section = name, "Failed to load: {}", e);
                Section::Failed(e.to_string())
            }
        }
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            Section::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Section::Failed(_))
    }
}

/// The dashboard mounted for the signed-in role
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum Dashboard {
    Student(StudentDashboard),
    Teacher(TeacherDashboard),
    Admin(AdminDashboard),
}

impl Dashboard {
    /// Fetch the dashboard for `role`; `None` for roles without one
    pub async fn mount(ctx: &SessionContext, role: Role) -> Option<Self> {
        tracing::debug!(%role, "Mounting dashboard");
        match role {
            Role::Student => Some(Dashboard::Student(StudentDashboard::mount(ctx).await)),
            Role::Teacher => Some(Dashboard::Teacher(TeacherDashboard::mount(ctx).await)),
            Role::Admin => Some(Dashboard::Admin(AdminDashboard::mount(ctx).await)),
            Role::Unknown => {
                tracing::warn!("No dashboard for this role");
                None
            }
        }
    }

    pub fn role(&self) -> Role {
        match self {
            Dashboard::Student(_) => Role::Student,
            Dashboard::Teacher(_) => Role::Teacher,
            Dashboard::Admin(_) => Role::Admin,
        }
    }
}
