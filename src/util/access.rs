//! Pure access-gating policy for admin surfaces.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every admin route must apply the same decision procedure for who may see
//! privileged content. The evaluator here is a pure function of the current
//! session projection and call-site policy — no signals, no navigation — so
//! the full decision table is testable without a DOM or a router.

#[cfg(test)]
#[path = "access_test.rs"]
mod access_test;

use std::collections::BTreeSet;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

/// Route unauthenticated or non-admin visitors are sent to when a protected
/// region has no configured fallback.
pub const ADMIN_LOGIN_ROUTE: &str = "/admin/login";

/// Read-only projection of the current session consumed by the evaluator.
///
/// Owned and refreshed entirely by the session resolver; nothing here ever
/// writes identity back.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IdentityView {
    /// Whether any user is signed in.
    pub user_present: bool,
    /// Whether the signed-in user carries the platform admin flag.
    pub is_admin: bool,
    /// Granular admin roles (e.g. `"support"`, `"finance"`).
    pub roles: BTreeSet<String>,
}

/// Per-call-site gating configuration, fixed for the protected region.
#[derive(Clone, Debug, Default)]
pub struct AccessPolicy {
    /// Role the signed-in admin must additionally hold, if any.
    pub required_role: Option<String>,
    /// Whether the call site supplied fallback content to render instead of
    /// redirecting signed-out or non-admin visitors.
    pub has_fallback: bool,
}

/// Outcome of one access evaluation. Derived on every input change, never
/// stored — a previous decision has no influence on the next one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AccessDecision {
    /// Session still resolving; show a spinner and decide nothing yet.
    Loading,
    /// No signed-in admin and no fallback: replace-navigate to the login route.
    RedirectToLogin,
    /// No signed-in admin, but the call site supplied fallback content.
    Fallback,
    /// Signed-in admin lacking the required role.
    Denied,
    /// Render the protected children.
    Granted,
}

/// Decide access for one protected region. Rules apply in strict priority
/// order, first match wins:
///
/// 1. session still loading → [`AccessDecision::Loading`]
/// 2. no user, or user without the admin flag → [`AccessDecision::Fallback`]
///    when the call site has one, else [`AccessDecision::RedirectToLogin`]
/// 3. required role missing from the admin's roles → [`AccessDecision::Denied`]
/// 4. otherwise → [`AccessDecision::Granted`]
#[must_use]
pub fn evaluate(loading: bool, identity: &IdentityView, policy: &AccessPolicy) -> AccessDecision {
    if loading {
        return AccessDecision::Loading;
    }
    if !identity.user_present || !identity.is_admin {
        return if policy.has_fallback {
            AccessDecision::Fallback
        } else {
            AccessDecision::RedirectToLogin
        };
    }
    if let Some(role) = &policy.required_role {
        if !identity.roles.contains(role) {
            return AccessDecision::Denied;
        }
    }
    AccessDecision::Granted
}

/// One-shot latch so a `RedirectToLogin` decision that repeats across
/// re-evaluations navigates exactly once per guard instance.
#[derive(Debug, Default)]
pub struct RedirectLatch {
    fired: bool,
}

impl RedirectLatch {
    /// Returns `true` exactly on the first call.
    pub fn fire(&mut self) -> bool {
        if self.fired {
            false
        } else {
            self.fired = true;
            true
        }
    }
}

/// Replace-navigate to [`ADMIN_LOGIN_ROUTE`] whenever `decision` settles on
/// `RedirectToLogin`.
///
/// Generic over the navigate closure so callers can observe invocations
/// without a live router. The effect belongs to the caller's reactive scope
/// and is released with it on unmount, so a torn-down guard never navigates.
pub fn install_login_redirect<F>(decision: Signal<AccessDecision>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let mut latch = RedirectLatch::default();
    Effect::new(move || {
        if decision.get() != AccessDecision::RedirectToLogin {
            return;
        }
        if latch.fire() {
            navigate(
                ADMIN_LOGIN_ROUTE,
                NavigateOptions {
                    replace: true,
                    ..NavigateOptions::default()
                },
            );
        }
    });
}
