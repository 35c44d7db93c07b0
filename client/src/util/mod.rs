//! Browser environment adapters.
//!
//! SYSTEM CONTEXT
//! ==============
//! Keeps `web-sys` access out of pages and components. Non-browser builds
//! get an in-process stand-in with the same interface.

pub mod storage;
