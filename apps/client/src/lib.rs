//! Client SDK for the Smart Job Search REST API.
//!
//! The pieces mirror the backend's surface: an endpoint registry mapping
//! logical operations to URL paths, a generic call wrapper that applies
//! default headers and cookie-based credentials, an AI sub-client for the
//! profile-score and recommendation endpoints, and a theme controller that
//! persists the light/dark preference through an injected store.

pub mod ai;
pub mod client;
pub mod config;
pub mod endpoints;
pub mod errors;
pub mod models;
pub mod theme;

pub use ai::{AiClient, UserRef};
pub use client::{ApiClient, CallOptions};
pub use config::Config;
pub use errors::ApiError;
