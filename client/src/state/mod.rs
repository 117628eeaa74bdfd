//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `catalog`, `toast`, ...) so individual
//! pages can depend on small focused models. App-wide state is provided as
//! `RwSignal` context at the root; page state lives in page-local signals.

pub mod auth;
pub mod catalog;
pub mod subscription;
pub mod toast;
