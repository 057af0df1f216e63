//! Reusable card component for catalog entries on the lobby grid.

#[cfg(test)]
#[path = "game_card_test.rs"]
mod game_card_test;

use leptos::prelude::*;

use crate::net::types::GameSummary;

/// Format a return-to-player percentage for the card footer.
fn format_rtp(rtp: f64) -> String {
    format!("{rtp:.1}% RTP")
}

/// A card representing one game in the public catalog.
#[component]
pub fn GameCard(game: GameSummary) -> impl IntoView {
    let rtp_label = format_rtp(game.rtp);

    view! {
        <div class="game-card">
            <div class="game-card__tags">
                <Show when=move || game.is_live>
                    <span class="game-card__tag game-card__tag--live">"LIVE"</span>
                </Show>
                <Show when=move || game.is_new>
                    <span class="game-card__tag game-card__tag--new">"NEW"</span>
                </Show>
            </div>
            <span class="game-card__name">{game.name}</span>
            <span class="game-card__provider">{game.provider}</span>
            <span class="game-card__rtp">{rtp_label}</span>
        </div>
    }
}
