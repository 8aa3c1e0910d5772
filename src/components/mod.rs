//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the page chrome and landing cards; they read shared
//! state from Leptos context and never call the backend directly.

pub mod feature_card;
pub mod footer;
pub mod layout;
pub mod navbar;
pub mod not_found;
