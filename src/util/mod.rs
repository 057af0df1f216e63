//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate decision logic and formatting from page and
//! component rendering so the interesting behavior stays unit-testable.

pub mod access;
pub mod money;
