//! Platform-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route guards and admin chrome coordinate on this state: it starts in a
//! loading phase, resolves to a signed-in or signed-out snapshot, and may be
//! refreshed any number of times afterwards (login, logout, periodic
//! re-checks). Consumers re-decide on every change.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::collections::BTreeSet;

use crate::net::types::SessionUser;
use crate::util::access::IdentityView;

/// Session state tracking the signed-in user and resolution status.
///
/// The initial state is `loading = true`; the session resolver is the only
/// writer and always lands on a terminal `loading = false` snapshot, even on
/// transport failure (reported as signed out).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    pub user: Option<SessionUser>,
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

impl SessionState {
    /// Terminal resolved state with no signed-in user.
    #[must_use]
    pub fn signed_out() -> Self {
        Self {
            user: None,
            loading: false,
        }
    }

    /// Terminal resolved state for a signed-in user.
    #[must_use]
    pub fn signed_in(user: SessionUser) -> Self {
        Self {
            user: Some(user),
            loading: false,
        }
    }

    /// Projection consumed by the access evaluator.
    #[must_use]
    pub fn identity(&self) -> IdentityView {
        match &self.user {
            Some(user) => IdentityView {
                user_present: true,
                is_admin: user.is_admin,
                roles: user.roles.iter().cloned().collect::<BTreeSet<_>>(),
            },
            None => IdentityView::default(),
        }
    }
}
