//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates chrome to
//! `components`. Access control is applied by the `Guarded` wrapper in `app`,
//! never by the pages themselves.

pub mod dashboard;
pub mod login;
pub mod not_found;
pub mod section;
