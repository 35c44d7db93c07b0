//! Networking modules for the marketplace REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls and token refresh, and `types` defines the
//! wire schema shared by them.

pub mod api;
pub mod types;
