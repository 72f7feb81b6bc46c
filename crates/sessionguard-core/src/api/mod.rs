//! REST client for the web app's backend.
//!
//! This module provides the `AuthClient` for the `/api/auth` endpoints and
//! for authenticated requests to everything else.
//!
//! The backend accepts a bearer token alongside its session cookie; the
//! client sends both and renews the token once when a request comes back
//! 401.

pub mod client;
pub mod error;
pub mod message;

pub use client::AuthClient;
pub use error::ApiError;
pub use message::{extract_message, message_from_body};
