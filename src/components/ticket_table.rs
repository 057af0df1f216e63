//! Support-ticket table for the admin support desk.

#[cfg(test)]
#[path = "ticket_table_test.rs"]
mod ticket_table_test;

use leptos::prelude::*;

use crate::net::types::SupportTicket;

/// CSS modifier class for a ticket workflow status.
fn status_class(status: &str) -> &'static str {
    match status {
        "open" => "ticket-status--open",
        "pending" => "ticket-status--pending",
        "closed" => "ticket-status--closed",
        _ => "ticket-status--unknown",
    }
}

/// Table of support tickets with per-status styling.
#[component]
pub fn TicketTable(tickets: Vec<SupportTicket>) -> impl IntoView {
    view! {
        <table class="ticket-table">
            <thead>
                <tr>
                    <th>"Subject"</th>
                    <th>"Opened by"</th>
                    <th>"Status"</th>
                </tr>
            </thead>
            <tbody>
                {tickets
                    .into_iter()
                    .map(|ticket| {
                        let class = format!("ticket-status {}", status_class(&ticket.status));
                        view! {
                            <tr class="ticket-table__row">
                                <td class="ticket-table__subject">{ticket.subject}</td>
                                <td class="ticket-table__opened-by">{ticket.opened_by}</td>
                                <td>
                                    <span class=class>{ticket.status}</span>
                                </td>
                            </tr>
                        }
                    })
                    .collect::<Vec<_>>()}
            </tbody>
        </table>
    }
}
