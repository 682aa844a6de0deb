//! HTTP helper for the login endpoint.
//!
//! Client-side (hydrate): a real fetch via `gloo-net`. Outside the browser
//! the call is stubbed to an error, since the endpoint is only reachable
//! from the running app.
//!
//! ERROR HANDLING
//! ==============
//! Rejected statuses, transport faults, and malformed bodies all collapse to
//! a human-readable `Err(String)`; the session store treats them uniformly.

#![allow(clippy::unused_async)]

#[cfg(feature = "hydrate")]
use crate::net::types::LoginRequest;
use crate::net::types::LoginResponse;

/// API base path baked in at compile time; empty means same-origin.
#[cfg(feature = "hydrate")]
fn base_path() -> &'static str {
    option_env!("PLANTLOG_API_BASE").unwrap_or("")
}

/// Issue the login request: one POST with a JSON credential body.
///
/// # Errors
///
/// Returns the reason on a rejected status (the status text), a transport
/// fault, or a malformed response body.
pub async fn login(username: &str, password: &str) -> Result<LoginResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{}/login", base_path());
        let response = gloo_net::http::Request::post(&url)
            .json(&LoginRequest { username, password })
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !response.ok() {
            return Err(response.status_text());
        }
        response.json::<LoginResponse>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, password);
        Err("not available outside the browser".to_owned())
    }
}
