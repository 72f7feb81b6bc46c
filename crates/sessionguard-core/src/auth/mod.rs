//! Authentication state for the client.
//!
//! This module provides:
//! - `Session`: the injected session context wrapping token storage,
//!   change notifications and the one-shot login message
//! - `TokenStorage`: durable token storage with memory, file and
//!   OS keychain backends
//!
//! Every token write or clear emits exactly one `SessionChanged`.

pub mod session;
pub mod storage;

pub use session::{Session, SessionChanged};
pub use storage::{open_storage, FileStorage, KeyringStorage, MemoryStorage, TokenStorage};
