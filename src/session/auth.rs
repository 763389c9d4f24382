//! Auth Gateway
//!
//! Login, registration and logout against the backend, keeping the
//! [`Session`] and the persisted token in step.

use std::sync::Arc;
use thiserror::Error;

use super::{Session, SessionContext, SessionError, TokenStore};
use crate::api::{ApiError, PortalApi};
use crate::models::Role;

/// Errors from login and registration
#[derive(Error, Debug)]
pub enum AuthError {
    /// Any backend failure; the backend's own message is not exposed
    #[error("Authentication failed")]
    Authentication(#[source] ApiError),

    /// Token could not be persisted
    #[error("Could not save session: {0}")]
    Storage(#[from] SessionError),
}

/// Owns the session and its persisted token
pub struct AuthGateway<S: TokenStore> {
    api: Arc<dyn PortalApi>,
    store: S,
    session: Session,
}

impl<S: TokenStore> AuthGateway<S> {
    /// Gateway with an empty session; call [`restore`](Self::restore) to
    /// pick up a persisted token
    pub fn new(api: Arc<dyn PortalApi>, store: S) -> Self {
        Self {
            api,
            store,
            session: Session::new(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn api(&self) -> Arc<dyn PortalApi> {
        Arc::clone(&self.api)
    }

    pub fn context(&self) -> Option<SessionContext> {
        self.session.context(self.api())
    }

    /// Load the persisted token and, if there is one, its profile
    pub async fn restore(&mut self) -> Result<(), SessionError> {
        match self.store.load()? {
            Some(token) => {
                tracing::debug!("Restoring persisted session");
                self.session.establish(token);
                self.refresh_profile().await;
            }
            None => self.session.clear(),
        }
        Ok(())
    }

    pub async fn login(&mut self, email: &str, password: &str) -> Result<(), AuthError> {
        let token = self.api.login(email, password).await.map_err(|e| {
            tracing::debug!(error = %e, "Login rejected");
            AuthError::Authentication(e)
        })?;
        self.install(token).await
    }

    pub async fn register(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
        role: Role,
    ) -> Result<(), AuthError> {
        let token = self
            .api
            .register(name, email, password, role)
            .await
            .map_err(|e| {
                tracing::debug!(error = %e, %role, "Registration rejected");
                AuthError::Authentication(e)
            })?;
        self.install(token).await
    }

    /// Clear the persisted token and the in-memory session
    pub fn logout(&mut self) {
        if let Err(e) = self.store.clear() {
            tracing::warn!("Failed to clear persisted token: {}", e);
        }
        self.session.clear();
        tracing::info!("Logged out");
    }

    /// Fetch `/me` for the current token
    ///
    /// On failure the session stays authenticated without a profile.
    /// Returns whether a profile is now cached.
    pub async fn refresh_profile(&mut self) -> bool {
        let Some(token) = self.session.token().map(str::to_string) else {
            return false;
        };

        match self.api.me(&token).await {
            Ok(user) => {
                tracing::info!(role = %user.role, "Signed in as {}", user.email);
                self.session.set_profile(user)
            }
            Err(e) => {
                tracing::warn!("Profile fetch failed, continuing without profile: {}", e);
                false
            }
        }
    }

    async fn install(&mut self, token: String) -> Result<(), AuthError> {
        self.store.save(&token)?;
        self.session.establish(token);
        self.refresh_profile().await;
        Ok(())
    }
}
