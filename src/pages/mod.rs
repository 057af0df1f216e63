//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Admin pages wrap their content in `AdminGuard` rather
//! than re-implementing gating.

pub mod admin_dashboard;
pub mod admin_login;
pub mod admin_support;
pub mod lobby;
