//! Utility helpers shared across pages and components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules keep browser storage, form checks and display formatting
//! out of page markup so they can be tested directly.

pub mod format;
pub mod storage;
pub mod task;
pub mod validation;
