//! Centered loading spinner for async route and panel states.

use leptos::prelude::*;

/// Indeterminate spinner shown while async state resolves.
#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div class="spinner" role="status" aria-label="Loading">
            <span class="spinner__ring" aria-hidden="true"></span>
        </div>
    }
}
