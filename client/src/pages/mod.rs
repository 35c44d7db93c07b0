//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Protected pages wrap themselves in the route guard.

pub mod dashboard;
pub mod home;
pub mod login;
