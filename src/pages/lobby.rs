//! Public lobby page showing the game catalog.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the unauthenticated landing route. It fetches the catalog once on
//! mount and renders per-game cards; no gating applies here.

use leptos::prelude::*;

use crate::components::game_card::GameCard;

/// Lobby page — public game catalog grid.
#[component]
pub fn LobbyPage() -> impl IntoView {
    let games = LocalResource::new(|| crate::net::api::fetch_games());

    view! {
        <div class="lobby-page">
            <header class="lobby-page__header">
                <h1>"Parlay Casino"</h1>
                <a class="lobby-page__admin-link" href="/admin">
                    "Admin"
                </a>
            </header>

            <div class="lobby-page__grid">
                <Suspense fallback=move || view! { <p>"Loading games..."</p> }>
                    {move || {
                        games
                            .get()
                            .map(|result| match result {
                                Ok(list) => {
                                    view! {
                                        <div class="lobby-page__cards">
                                            {list
                                                .into_iter()
                                                .map(|game| view! { <GameCard game=game/> })
                                                .collect::<Vec<_>>()}
                                        </div>
                                    }
                                        .into_any()
                                }
                                Err(error) => {
                                    view! { <p class="lobby-page__error">{error}</p> }.into_any()
                                }
                            })
                    }}
                </Suspense>
            </div>
        </div>
    }
}
