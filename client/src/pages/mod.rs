//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetching, form state,
//! navigation) and delegates rendering details to `components`.

pub mod catalog;
pub mod category_selection;
pub mod checkout_cancel;
pub mod checkout_success;
pub mod dashboard;
pub mod home;
pub mod login;
pub mod not_found;
pub mod profile;
pub mod register;
pub mod subscription;
