//! Networking modules for the PrepMentor REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` owns request plumbing and envelope decoding, the `*_api` modules
//! wrap one endpoint each, `backend` bundles them behind a trait, and `types`
//! defines the shared wire schema.

pub mod answer_api;
pub mod auth_api;
pub mod backend;
pub mod dashboard_api;
pub mod error;
pub mod http;
pub mod question_api;
pub mod types;

#[cfg(test)]
pub mod fake_backend;
