//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use crate::pages::{
    admin_dashboard::AdminDashboardPage, admin_login::AdminLoginPage,
    admin_support::AdminSupportPage, lobby::LobbyPage,
};
use crate::state::session::SessionState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared session context, resolves the platform session, and
/// sets up client-side routing. The session resolver is the single writer of
/// session state: it always lands on a terminal resolved snapshot (failures
/// read as signed out) and re-checks periodically so role or sign-out changes
/// made elsewhere propagate to mounted guards.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    provide_context(session);

    #[cfg(feature = "hydrate")]
    {
        let poll_alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let poll_alive_task = poll_alive.clone();
        leptos::task::spawn_local(async move {
            resolve_session(session).await;
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_secs(60)).await;
                if !poll_alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                resolve_session(session).await;
            }
        });
        on_cleanup(move || poll_alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/parlay.css"/>
        <Title text="Parlay Casino"/>

        <Router>
            <Routes fallback=|| view! { <p class="route-missing">"Page not found."</p> }>
                <Route path=path!("/") view=LobbyPage/>
                <Route path=path!("/admin/login") view=AdminLoginPage/>
                <Route path=path!("/admin") view=AdminDashboardPage/>
                <Route path=path!("/admin/support") view=AdminSupportPage/>
            </Routes>
        </Router>
    }
}

/// Resolve the platform session into the shared signal, writing only when the
/// snapshot actually changed so unchanged polls do not trigger re-renders.
#[cfg(feature = "hydrate")]
async fn resolve_session(session: RwSignal<SessionState>) {
    let next = match crate::net::api::fetch_session().await {
        Some(user) => SessionState::signed_in(user),
        None => SessionState::signed_out(),
    };
    if session.get_untracked() != next {
        session.set(next);
    }
}
