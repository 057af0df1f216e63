//! Route guard wrapping admin-only content.
//!
//! SYSTEM CONTEXT
//! ==============
//! Admin routes share one gating procedure: wait for the session to resolve,
//! send signed-out visitors to the admin login, and keep role-restricted
//! consoles closed to admins without the role. The decision procedure itself
//! lives in `util::access`; this component binds it to the live session
//! signal and renders the selected branch.

#[cfg(test)]
#[path = "admin_guard_test.rs"]
mod admin_guard_test;

use leptos::children::{ChildrenFn, ViewFn};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::spinner::Spinner;
use crate::state::session::SessionState;
use crate::util::access::{self, AccessDecision, AccessPolicy};

/// Build the gating policy for one `AdminGuard` call site.
fn guard_policy(required_role: Option<String>, has_fallback: bool) -> AccessPolicy {
    AccessPolicy {
        required_role,
        has_fallback,
    }
}

/// Conditionally renders `children` based on the current admin session.
///
/// The session signal is injected explicitly rather than read from context so
/// call sites (and tests) control exactly which identity feed gates them.
/// Calling with neither `required_role` nor `fallback` gives plain
/// admin-or-login gating; adding `required_role` closes the region to admins
/// without that role; adding `fallback` replaces the login redirect with the
/// supplied content.
#[component]
pub fn AdminGuard(
    /// Live session feed; the guard re-evaluates on every change.
    #[prop(into)]
    session: Signal<SessionState>,
    /// Role the signed-in admin must additionally hold.
    #[prop(optional, into)]
    required_role: Option<String>,
    /// Rendered instead of redirecting when no admin is signed in.
    #[prop(optional)]
    fallback: Option<ViewFn>,
    children: ChildrenFn,
) -> impl IntoView {
    let policy = guard_policy(required_role, fallback.is_some());
    let decision = Memo::new(move |_| {
        let state = session.get();
        access::evaluate(state.loading, &state.identity(), &policy)
    });

    // The redirect effect lives in this component's reactive scope; unmounting
    // the guard disposes it before any pending navigation can fire.
    access::install_login_redirect(decision.into(), use_navigate());

    view! {
        {move || match decision.get() {
            AccessDecision::Loading => view! { <Spinner/> }.into_any(),
            AccessDecision::RedirectToLogin => {
                view! { <p class="guard__redirect">"Redirecting to sign-in..."</p> }.into_any()
            }
            AccessDecision::Fallback => match fallback.as_ref() {
                Some(fallback) => fallback.run(),
                None => ViewFn::default().run(),
            },
            AccessDecision::Denied => {
                view! {
                    <div class="guard__denied">
                        <h2>"Access denied"</h2>
                        <p>"Your admin account does not have access to this area."</p>
                    </div>
                }
                .into_any()
            }
            AccessDecision::Granted => children().into_any(),
        }}
    }
}
