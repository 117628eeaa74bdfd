//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render layout chrome and catalog/subscription building blocks
//! while reading shared state from Leptos context providers or props.

pub mod design_card;
pub mod design_modal;
pub mod error_screen;
pub mod footer;
pub mod loader;
pub mod navbar;
pub mod pagination;
pub mod plan_card;
pub mod protected_route;
pub mod shipment_history;
pub mod toast_host;
