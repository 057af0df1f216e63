//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render platform chrome and protected-region gating while pages
//! own route-scoped orchestration.

pub mod admin_guard;
pub mod game_card;
pub mod spinner;
pub mod ticket_table;
