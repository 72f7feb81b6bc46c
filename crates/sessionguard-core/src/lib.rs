//! sessionguard core - client-side session handling for the web app.
//!
//! This crate provides:
//! - `Session`: the injected session context (bearer token, change events,
//!   one-shot login message)
//! - `Router`: the route table and navigation guard
//! - `AuthClient`: auth endpoints and the authenticated fetch with a single
//!   refresh-and-retry on 401
//!
//! Nothing here keeps global state; every collaborator receives the
//! `Session` it works against.

pub mod api;
pub mod auth;
pub mod config;
pub mod messages;
pub mod models;
pub mod router;

pub use api::{ApiError, AuthClient};
pub use auth::{Session, SessionChanged};
pub use config::Config;
pub use router::{Navigator, Router};
