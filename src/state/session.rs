//! Authentication session store.
//!
//! Holds the token and the auth/admin flags, mirrors them to localStorage,
//! and owns the login/logout side effects. The invariant is that an
//! unauthenticated session carries no token and no admin flag; `clear` and
//! `apply_login` are the only mutators, so it holds by construction.
//!
//! The state lives in an `RwSignal` provided via context at the app root.
//! Guard evaluation only reads it; login and logout are the only writers.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use serde::{Deserialize, Serialize};

use crate::net::api;
use crate::net::types::LoginResponse;
use crate::routes::LOGIN_PATH;
use crate::state::toast::ToastState;

/// localStorage key for the mirrored session fields.
#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "plantlog_session";

/// Current authentication/authorization status of the client.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub token: Option<String>,
    pub is_authenticated: bool,
    pub is_admin: bool,
}

impl SessionState {
    /// Apply a successful login payload.
    pub fn apply_login(&mut self, payload: &LoginResponse) {
        self.token = Some(payload.token.clone());
        self.is_admin = payload.admin;
        self.is_authenticated = true;
    }

    /// Reset to the unauthenticated defaults. Used by logout and by every
    /// login failure path.
    pub fn clear(&mut self) {
        self.token = None;
        self.is_authenticated = false;
        self.is_admin = false;
    }
}

/// Restore the last persisted session, or the unauthenticated default.
///
/// The restored state is trusted as-is; no server revalidation happens on
/// reload.
pub fn load() -> SessionState {
    #[cfg(feature = "hydrate")]
    {
        let stored = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|s| s.get_item(STORAGE_KEY).ok().flatten());
        match stored {
            Some(json) => serde_json::from_str(&json).unwrap_or_default(),
            None => SessionState::default(),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        SessionState::default()
    }
}

/// Mirror the session fields to localStorage so they survive a reload.
pub fn save(state: &SessionState) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            if let Ok(json) = serde_json::to_string(state) {
                let _ = storage.set_item(STORAGE_KEY, &json);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = state;
    }
}

/// Attempt a login with the given credentials.
///
/// Issues exactly one POST to the login endpoint, no retries. On success the
/// session holds the returned token and admin flag; on a rejected or failed
/// request the session is cleared. Either way the new state is persisted and
/// a toast reports the outcome. Returns whether the login succeeded.
///
/// Concurrent calls are not serialized; the last completing request wins.
pub async fn login(
    session: RwSignal<SessionState>,
    toasts: RwSignal<ToastState>,
    username: &str,
    password: &str,
) -> bool {
    match api::login(username, password).await {
        Ok(payload) => {
            session.update(|s| s.apply_login(&payload));
            save(&session.get_untracked());
            toasts.update(|t| {
                t.success("Login successfully");
            });
            true
        }
        Err(reason) => {
            leptos::logging::warn!("login failed: {reason}");
            session.update(|s| s.clear());
            save(&session.get_untracked());
            toasts.update(|t| {
                t.error(format!("Login failed: {reason}"));
            });
            false
        }
    }
}

/// Clear the session and return to the login page. Safe to call repeatedly.
pub fn logout(session: RwSignal<SessionState>, navigate: &impl Fn(&str, NavigateOptions)) {
    session.update(|s| s.clear());
    save(&session.get_untracked());
    navigate(LOGIN_PATH, NavigateOptions::default());
}
