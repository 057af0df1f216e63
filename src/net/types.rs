//! Shared DTOs for the client/platform-API boundary.
//!
//! DESIGN
//! ======
//! These types mirror the hosted platform's JSON payloads so serde
//! round-trips stay lossless and fetch helpers can remain schema-driven.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The signed-in user as returned by the `/api/auth/session` endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    /// Unique user identifier (UUID string).
    pub id: String,
    /// Sign-in email address.
    pub email: String,
    /// Display name shown in admin chrome.
    pub name: String,
    /// Platform admin flag; required for any admin surface.
    pub is_admin: bool,
    /// Granular admin roles (e.g. `"support"`, `"finance"`).
    #[serde(default)]
    pub roles: Vec<String>,
}

/// Envelope for the session endpoint; `user` is absent when signed out.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionResponse {
    pub user: Option<SessionUser>,
}

/// One catalog entry on the public lobby.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSummary {
    /// Unique game identifier (UUID string).
    pub id: String,
    /// Display title.
    pub name: String,
    /// Studio/provider name.
    pub provider: String,
    /// Theoretical return-to-player percentage, e.g. `96.5`.
    pub rtp: f64,
    /// Whether this is a live-dealer table.
    pub is_live: bool,
    /// Whether the game is tagged as a new release.
    #[serde(default)]
    pub is_new: bool,
}

/// Aggregate wallet figures shown on the admin dashboard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletSummary {
    /// Sum of all player balances, in cents.
    pub total_balance_cents: i64,
    /// Number of players with a funded wallet.
    pub player_count: i64,
    /// Withdrawal requests awaiting review.
    pub pending_withdrawals: i64,
}

/// One open support ticket on the admin support desk.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportTicket {
    /// Unique ticket identifier (UUID string).
    pub id: String,
    /// Player-supplied subject line.
    pub subject: String,
    /// Workflow status: `"open"`, `"pending"`, or `"closed"`.
    pub status: String,
    /// Display name of the player who opened the ticket.
    pub opened_by: String,
    /// Creation timestamp in milliseconds since the Unix epoch.
    pub opened_at: i64,
}
