//! Application Shell
//!
//! Top-level state machine: shows the auth form until a session with a
//! profile exists, then the dashboard for the profile's role.
//!
//! ```text
//! Unauthenticated --login/register--> Authenticated(role) --logout--> Unauthenticated
//!                                   \-> ProfileUnavailable (profile fetch failed)
//! ```

use std::sync::Arc;

use crate::api::PortalApi;
use crate::dashboard::{Dashboard, DashboardError};
use crate::models::{Course, EntityId, Role, User};
use crate::session::{AuthError, AuthGateway, Session, TokenStore};

/// Observable shell state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellState {
    Unauthenticated,
    /// Token present but `/me` could not be loaded
    ProfileUnavailable,
    Authenticated(Role),
}

/// What the shell currently shows
#[derive(Debug)]
pub enum Screen<'a> {
    AuthForm { error: Option<&'a str> },
    ProfileUnavailable,
    Dashboard {
        profile: &'a User,
        /// `None` when the role has no dashboard
        dashboard: Option<&'a Dashboard>,
    },
}

pub struct Shell<S: TokenStore> {
    auth: AuthGateway<S>,
    dashboard: Option<Dashboard>,
    auth_error: Option<String>,
}

impl<S: TokenStore> Shell<S> {
    /// Shell with no session, showing the auth form
    pub fn new(api: Arc<dyn PortalApi>, store: S) -> Self {
        Self {
            auth: AuthGateway::new(api, store),
            dashboard: None,
            auth_error: None,
        }
    }

    /// Restore any persisted session and mount its dashboard
    pub async fn start(api: Arc<dyn PortalApi>, store: S) -> Self {
        let mut shell = Self::new(api, store);
        if let Err(e) = shell.auth.restore().await {
            tracing::warn!("Could not read persisted session: {}", e);
        }
        shell.mount().await;
        shell
    }

    pub fn session(&self) -> &Session {
        self.auth.session()
    }

    pub fn dashboard(&self) -> Option<&Dashboard> {
        self.dashboard.as_ref()
    }

    pub fn state(&self) -> ShellState {
        let session = self.auth.session();
        match (session.is_authenticated(), session.profile()) {
            (false, _) => ShellState::Unauthenticated,
            (true, None) => ShellState::ProfileUnavailable,
            (true, Some(profile)) => ShellState::Authenticated(profile.role),
        }
    }

    pub fn screen(&self) -> Screen<'_> {
        let session = self.auth.session();
        match session.profile() {
            _ if !session.is_authenticated() => Screen::AuthForm {
                error: self.auth_error.as_deref(),
            },
            None => Screen::ProfileUnavailable,
            Some(profile) => Screen::Dashboard {
                profile,
                dashboard: self.dashboard.as_ref(),
            },
        }
    }

    pub async fn login(&mut self, email: &str, password: &str) -> Result<(), AuthError> {
        self.auth_error = None;
        let result = self.auth.login(email, password).await;
        self.after_auth(result).await
    }

    pub async fn register(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
        role: Role,
    ) -> Result<(), AuthError> {
        self.auth_error = None;
        let result = self.auth.register(name, email, password, role).await;
        self.after_auth(result).await
    }

    pub fn logout(&mut self) {
        self.dashboard = None;
        self.auth_error = None;
        self.auth.logout();
    }

    /// Create a course on the mounted teacher dashboard
    pub async fn create_course(&mut self, title: &str, subject: &str) -> Result<Course, DashboardError> {
        let ctx = self
            .auth
            .context()
            .ok_or(DashboardError::WrongDashboard(Role::Teacher))?;
        let result = match &mut self.dashboard {
            Some(Dashboard::Teacher(teacher)) => teacher.create_course(&ctx, title, subject).await,
            _ => Err(DashboardError::WrongDashboard(Role::Teacher)),
        };
        if let Err(e) = &result {
            tracing::warn!("Course creation failed: {}", e);
        }
        result
    }

    /// Toggle a user's approval on the mounted admin dashboard
    pub async fn toggle_approval(&mut self, user_id: &EntityId) -> Result<User, DashboardError> {
        let ctx = self
            .auth
            .context()
            .ok_or(DashboardError::WrongDashboard(Role::Admin))?;
        let result = match &mut self.dashboard {
            Some(Dashboard::Admin(admin)) => admin.toggle_approval(&ctx, user_id).await,
            _ => Err(DashboardError::WrongDashboard(Role::Admin)),
        };
        if let Err(e) = &result {
            tracing::warn!("Approval change failed: {}", e);
        }
        result
    }

    async fn after_auth(&mut self, result: Result<(), AuthError>) -> Result<(), AuthError> {
        match result {
            Ok(()) => {
                self.mount().await;
                Ok(())
            }
            Err(e) => {
                self.auth_error = Some(e.to_string());
                Err(e)
            }
        }
    }

    async fn mount(&mut self) {
        let role = self.auth.session().profile().map(|p| p.role);
        self.dashboard = match (self.auth.context(), role) {
            (Some(ctx), Some(role)) => Dashboard::mount(&ctx, role).await,
            _ => None,
        };
    }
}
