//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read the auth context provided by `app` and never touch the
//! token store directly.

pub mod nav_bar;
pub mod route_guard;
