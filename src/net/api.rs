//! REST API helpers for communicating with the hosted platform backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so session and
//! catalog fetch failures degrade UI behavior without crashing hydration.
//! In particular, any failure resolving the session reads as "signed out";
//! guards never observe a transport error.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{GameSummary, SessionUser, SupportTicket, WalletSummary};
#[cfg(feature = "hydrate")]
use super::types::SessionResponse;

#[cfg(any(test, feature = "hydrate"))]
fn login_failed_message(status: u16) -> String {
    if status == 401 {
        "Invalid email or password.".to_owned()
    } else {
        format!("login failed: {status}")
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn games_request_failed_message(status: u16) -> String {
    format!("game catalog request failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn wallets_request_failed_message(status: u16) -> String {
    format!("wallet summary request failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn tickets_request_failed_message(status: u16) -> String {
    format!("ticket request failed: {status}")
}

/// Fetch the current platform session from `/api/auth/session`.
///
/// Returns `None` when signed out, on any transport or decode failure, or on
/// the server — callers treat all of these as a resolved signed-out session.
pub async fn fetch_session() -> Option<SessionUser> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/session")
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<SessionResponse>().await.ok()?.user
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Sign in to the admin console via `POST /api/auth/admin/login`.
///
/// # Errors
///
/// Returns a display-ready error string if the HTTP request fails or the
/// credentials are rejected.
pub async fn admin_login(email: &str, password: &str) -> Result<SessionUser, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        let resp = gloo_net::http::Request::post("/api/auth/admin/login")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            log::warn!("admin login rejected with status {}", resp.status());
            return Err(login_failed_message(resp.status()));
        }
        resp.json::<SessionUser>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err("not available on server".to_owned())
    }
}

/// Log out the current user by calling `POST /api/auth/logout`.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post("/api/auth/logout")
            .send()
            .await;
    }
}

/// Fetch the public game catalog from `/api/games`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server responds with a
/// non-OK status.
pub async fn fetch_games() -> Result<Vec<GameSummary>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/games")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(games_request_failed_message(resp.status()));
        }
        resp.json::<Vec<GameSummary>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Fetch aggregate wallet figures from `/api/admin/wallets/summary`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server responds with a
/// non-OK status.
pub async fn fetch_wallet_summary() -> Result<WalletSummary, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/admin/wallets/summary")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(wallets_request_failed_message(resp.status()));
        }
        resp.json::<WalletSummary>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Fetch open support tickets from `/api/admin/tickets`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server responds with a
/// non-OK status.
pub async fn fetch_tickets() -> Result<Vec<SupportTicket>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/admin/tickets")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(tickets_request_failed_message(resp.status()));
        }
        resp.json::<Vec<SupportTicket>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}
