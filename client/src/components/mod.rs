//! Reusable UI components.
//!
//! ARCHITECTURE
//! ============
//! `guarded` enforces route access, `layout` and `sidebar` draw the
//! authenticated chrome, and the overlay/loader components render session
//! transitions.

pub mod guarded;
pub mod layout;
pub mod loaders;
pub mod logout_overlay;
pub mod sidebar;
