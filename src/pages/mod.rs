//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its form and view state, triggers fetches through the
//! context-provided `QuestionStore` or `HttpBackend`, and renders from
//! shared state. Submit flows that touch the network live in plain async
//! functions beside the component so they can be tested.

pub mod answer;
pub mod dashboard;
pub mod home;
pub mod login;
pub mod question_sets;
pub mod questions;
pub mod signup;
