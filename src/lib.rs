//! # Portal
//!
//! Client for a school-portal REST backend: sign in, keep the bearer token
//! across runs, and work with the dashboard for your role.
//!
//! ## Modules
//!
//! - [`api`]: Typed REST client behind the [`PortalApi`] trait
//! - [`session`]: Session state, token persistence and the auth gateway
//! - [`dashboard`]: Student, teacher and admin view models
//! - [`shell`]: Auth-form / dashboard state machine
//! - [`render`]: Text and JSON output for the CLI
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use portal::{ClientConfig, FileTokenStore, PortalClient, Shell, ShellState};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api = Arc::new(PortalClient::new(ClientConfig::new("http://localhost:8000"))?);
//!     let mut shell = Shell::start(api, FileTokenStore::new("/tmp/portal")).await;
//!
//!     if shell.state() == ShellState::Unauthenticated {
//!         shell.login("ada@school.test", "secret").await?;
//!     }
//!
//!     println!("{}", portal::render::render_screen(&shell.screen()));
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod dashboard;
pub mod models;
pub mod render;
pub mod session;
pub mod shell;

#[cfg(test)]
mod testing;

pub use api::{ApiError, ApiResult, ClientConfig, PortalApi, PortalClient};

pub use models::{Announcement, Assignment, Course, Due, EntityId, Role, Stats, User};

pub use session::{
    AuthError, AuthGateway, FileTokenStore, MemoryTokenStore, Session, SessionContext,
    SessionError, TokenStore,
};

pub use dashboard::{AdminDashboard, Dashboard, DashboardError, Section, StudentDashboard, TeacherDashboard};

pub use shell::{Screen, Shell, ShellState};

pub use config::{BackendConfig, Config, ConfigError, LoggingConfig, SessionConfig};
