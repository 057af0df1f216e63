//! Admin dashboard page with platform wallet figures.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the default admin landing route. Access is mediated entirely by
//! `AdminGuard`; the content below the guard assumes a signed-in admin.

#[cfg(test)]
#[path = "admin_dashboard_test.rs"]
mod admin_dashboard_test;

use leptos::prelude::*;

use crate::components::admin_guard::AdminGuard;
use crate::net::types::WalletSummary;
use crate::state::session::SessionState;
use crate::util::money::format_cents;

/// Headline figures derived from a wallet summary.
fn stat_lines(summary: &WalletSummary) -> [(&'static str, String); 3] {
    [
        ("Total player balance", format_cents(summary.total_balance_cents)),
        ("Funded players", summary.player_count.to_string()),
        ("Pending withdrawals", summary.pending_withdrawals.to_string()),
    ]
}

/// Admin dashboard route. Plain admin gating: any signed-in admin may view,
/// everyone else is redirected to the admin sign-in.
#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    view! {
        <AdminGuard session=session>
            <DashboardContent/>
        </AdminGuard>
    }
}

#[component]
fn DashboardContent() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let wallets = LocalResource::new(|| crate::net::api::fetch_wallet_summary());

    let admin_name = move || {
        session
            .get()
            .user
            .map(|user| user.name)
            .unwrap_or_else(|| "admin".to_owned())
    };

    // Logging out refreshes the session signal; the enclosing guard observes
    // the change and performs the replace-navigation to the sign-in route.
    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            crate::net::api::logout().await;
            session.set(SessionState::signed_out());
        });
    };

    view! {
        <div class="admin-page">
            <header class="admin-page__header toolbar">
                <span class="toolbar__title">"Parlay Admin"</span>
                <span class="toolbar__divider" aria-hidden="true"></span>
                <a class="toolbar__link" href="/admin/support">
                    "Support desk"
                </a>
                <a class="toolbar__link" href="/">
                    "Lobby"
                </a>
                <span class="toolbar__spacer"></span>
                <span class="toolbar__self">{admin_name}</span>
                <button class="btn toolbar__logout" on:click=on_logout title="Sign out">
                    "Sign out"
                </button>
            </header>

            <div class="admin-page__stats">
                <Suspense fallback=move || view! { <p>"Loading wallet summary..."</p> }>
                    {move || {
                        wallets
                            .get()
                            .map(|result| match result {
                                Ok(summary) => {
                                    view! {
                                        <div class="admin-page__stat-cards">
                                            {stat_lines(&summary)
                                                .into_iter()
                                                .map(|(label, value)| {
                                                    view! {
                                                        <div class="stat-card">
                                                            <span class="stat-card__value">{value}</span>
                                                            <span class="stat-card__label">{label}</span>
                                                        </div>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </div>
                                    }
                                        .into_any()
                                }
                                Err(error) => {
                                    view! { <p class="admin-page__error">{error}</p> }.into_any()
                                }
                            })
                    }}
                </Suspense>
            </div>
        </div>
    }
}
