//! Session State
//!
//! Reactive session shared through context: the bearer token (mirrored to
//! `localStorage`), the signed-in profile and toast messages.

use leptos::*;

use crate::api;
use crate::state::models::{Role, User};

/// `localStorage` key holding the bearer token
pub const TOKEN_KEY: &str = "token";

/// Session state provided to all components
#[derive(Clone, Copy)]
pub struct SessionState {
    /// Bearer token, `None` when signed out
    pub token: RwSignal<Option<String>>,
    /// Profile for the current token
    pub me: RwSignal<Option<User>>,
    /// Set when `/me` failed for the current token
    pub profile_failed: RwSignal<bool>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

fn load_token() -> Option<String> {
    storage()?
        .get_item(TOKEN_KEY)
        .ok()
        .flatten()
        .filter(|token| !token.is_empty())
}

fn save_token(token: &str) {
    if let Some(storage) = storage() {
        if storage.set_item(TOKEN_KEY, token).is_err() {
            web_sys::console::warn_1(&"Could not persist session token".into());
        }
    }
}

fn remove_token() {
    if let Some(storage) = storage() {
        let _ = storage.remove_item(TOKEN_KEY);
    }
}

/// Provide session state to the component tree and start profile loading
pub fn provide_session_state() {
    let state = SessionState {
        token: create_rw_signal(load_token()),
        me: create_rw_signal(None),
        profile_failed: create_rw_signal(false),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
    };

    create_effect(move |_| {
        state.profile_failed.set(false);
        let Some(token) = state.token.get() else {
            state.me.set(None);
            return;
        };

        spawn_local(async move {
            let result = api::fetch_me(&token).await;
            // A newer login or a logout wins over this response
            if state.token.get_untracked().as_deref() != Some(token.as_str()) {
                return;
            }
            match result {
                Ok(user) => state.me.set(Some(user)),
                Err(e) => {
                    web_sys::console::warn_1(&format!("Failed to load profile: {}", e).into());
                    state.me.set(None);
                    state.profile_failed.set(true);
                }
            }
        });
    });

    provide_context(state);
}

impl SessionState {
    pub async fn login(&self, email: &str, password: &str) -> Result<(), String> {
        let token = api::login(email, password).await?;
        self.install(token);
        Ok(())
    }

    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
        role: Role,
    ) -> Result<(), String> {
        let token = api::register(name, email, password, role).await?;
        self.install(token);
        Ok(())
    }

    fn install(&self, token: String) {
        save_token(&token);
        self.me.set(None);
        self.token.set(Some(token));
    }

    pub fn logout(&self) {
        remove_token();
        self.me.set(None);
        self.token.set(None);
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }
}
