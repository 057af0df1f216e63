//! Admin support desk page listing open player tickets.
//!
//! SYSTEM CONTEXT
//! ==============
//! Role-restricted admin route: the platform admin flag alone is not enough,
//! the signed-in admin must also hold the `support` role. Signed-out visitors
//! see an inline notice instead of being redirected — this is the one call
//! site that supplies a guard fallback.

use leptos::children::ViewFn;
use leptos::prelude::*;

use crate::components::admin_guard::AdminGuard;
use crate::components::ticket_table::TicketTable;
use crate::state::session::SessionState;

/// Role required to view the ticket queue.
const SUPPORT_ROLE: &str = "support";

/// Support desk route. Admins without the `support` role get the guard's
/// access-denied branch; signed-out visitors get the fallback notice below.
#[component]
pub fn AdminSupportPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    view! {
        <AdminGuard
            session=session
            required_role=SUPPORT_ROLE.to_owned()
            fallback=ViewFn::from(|| {
                view! {
                    <div class="support-page__fallback">
                        <h2>"Restricted area"</h2>
                        <p>"Sign in with a support admin account to view the ticket queue."</p>
                        <a href="/admin/login">"Go to admin sign-in"</a>
                    </div>
                }
            })
        >
            <SupportDesk/>
        </AdminGuard>
    }
}

#[component]
fn SupportDesk() -> impl IntoView {
    let tickets = LocalResource::new(|| crate::net::api::fetch_tickets());

    view! {
        <div class="support-page">
            <header class="support-page__header toolbar">
                <span class="toolbar__title">"Support desk"</span>
                <span class="toolbar__spacer"></span>
                <a class="toolbar__link" href="/admin">
                    "Dashboard"
                </a>
            </header>

            <Suspense fallback=move || view! { <p>"Loading tickets..."</p> }>
                {move || {
                    tickets
                        .get()
                        .map(|result| match result {
                            Ok(list) if list.is_empty() => {
                                view! { <p class="support-page__empty">"No open tickets."</p> }
                                    .into_any()
                            }
                            Ok(list) => view! { <TicketTable tickets=list/> }.into_any(),
                            Err(error) => {
                                view! { <p class="support-page__error">{error}</p> }.into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
