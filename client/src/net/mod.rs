//! Networking modules for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` is the bearer-authenticated JSON transport, `error` classifies
//! failures, `api` holds one helper per endpoint and `types` defines the
//! shared wire schema.

pub mod api;
pub mod error;
pub mod http;
pub mod types;
