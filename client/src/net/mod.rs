//! Networking modules for the admin REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the sign-in and sign-out calls, and `types` defines the
//! JSON bodies exchanged with the backend.

pub mod api;
pub mod types;
