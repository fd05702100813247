//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `ui`) so individual components can
//! depend on small focused models. `identity` holds the typed user model the
//! session carries.

pub mod identity;
pub mod session;
pub mod ui;
