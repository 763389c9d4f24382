//! Session Management
//!
//! The signed-in state of the client: bearer token, cached profile, and
//! the gateway that creates and destroys them.
//!
//! ## Lifecycle
//!
//! 1. [`AuthGateway::login`] or [`AuthGateway::register`] obtains a token,
//!    persists it through a [`TokenStore`] and fetches the profile
//! 2. [`Session::context`] hands views a [`SessionContext`] for their calls
//! 3. [`AuthGateway::logout`] clears both the persisted and in-memory state

mod auth;
mod store;

pub use auth::{AuthError, AuthGateway};
pub use store::{FileTokenStore, MemoryTokenStore, SessionError, TokenStore, TOKEN_KEY};

use std::fmt;
use std::sync::Arc;

use crate::api::PortalApi;
use crate::models::User;

/// Current token and profile
///
/// The profile is only ever set while a token is present.
#[derive(Debug, Clone, Default)]
pub struct Session {
    token: Option<String>,
    profile: Option<User>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn profile(&self) -> Option<&User> {
        self.profile.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Install a new token, dropping any profile of the previous one
    pub fn establish(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
        self.profile = None;
    }

    /// Cache the profile; ignored (returns false) without a token
    pub fn set_profile(&mut self, profile: User) -> bool {
        if self.token.is_none() {
            return false;
        }
        self.profile = Some(profile);
        true
    }

    pub fn clear(&mut self) {
        self.token = None;
        self.profile = None;
    }

    /// Call context for views, only while authenticated
    pub fn context(&self, api: Arc<dyn PortalApi>) -> Option<SessionContext> {
        self.token.as_ref().map(|token| SessionContext {
            api,
            token: token.clone(),
        })
    }
}

/// API handle plus bearer token, passed explicitly to dashboard views
#[derive(Clone)]
pub struct SessionContext {
    api: Arc<dyn PortalApi>,
    token: String,
}

impl SessionContext {
    pub fn api(&self) -> &dyn PortalApi {
        self.api.as_ref()
    }

    pub fn token(&self) -> &str {
        &self.token
    }
}

impl fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionContext")
            .field("token", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EntityId, Role};
    use crate::testing::FakeApi;

    fn user() -> User {
        User {
            id: EntityId::Int(1),
            name: "Ada".to_string(),
            email: "ada@school.test".to_string(),
            role: Role::Student,
            approved: true,
        }
    }

    #[test]
    fn test_profile_requires_token() {
        let mut session = Session::new();
        assert!(!session.set_profile(user()));
        assert!(session.profile().is_none());

        session.establish("t1");
        assert!(session.set_profile(user()));
        assert_eq!(session.profile().map(|u| u.name.as_str()), Some("Ada"));
    }

    #[test]
    fn test_new_token_drops_profile() {
        let mut session = Session::new();
        session.establish("t1");
        session.set_profile(user());

        session.establish("t2");
        assert_eq!(session.token(), Some("t2"));
        assert!(session.profile().is_none());
    }

    #[test]
    fn test_clear() {
        let mut session = Session::new();
        session.establish("t1");
        session.set_profile(user());
        session.clear();
        assert!(!session.is_authenticated());
        assert!(session.profile().is_none());
    }

    #[test]
    fn test_context_only_when_authenticated() {
        let api: Arc<dyn PortalApi> = Arc::new(FakeApi::new());
        let mut session = Session::new();
        assert!(session.context(Arc::clone(&api)).is_none());

        session.establish("t1");
        let ctx = session.context(api).unwrap();
        assert_eq!(ctx.token(), "t1");
        assert!(!format!("{:?}", ctx).contains("t1"));
    }
}
