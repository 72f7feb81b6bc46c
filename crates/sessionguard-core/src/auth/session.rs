use std::sync::{Arc, Mutex, PoisonError};

use anyhow::Result;
use tokio::sync::broadcast;
use tracing::{debug, warn};

use super::storage::{open_storage, MemoryStorage, TokenStorage};
use crate::config::{Config, DEFAULT_MESSAGE_KEY, DEFAULT_TOKEN_KEY};

/// Buffered change notifications per subscriber before it starts lagging.
/// Listeners only care that something changed, so lagging is harmless.
const EVENT_CHANNEL_CAPACITY: usize = 16;

/// Zero-payload notification sent whenever the token is written or cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionChanged;

/// Session context shared by the router and the API client.
///
/// Storage is assumed to be available: a failing backend is logged and
/// reads as "no token" rather than surfacing an error to callers.
pub struct Session {
    storage: Arc<dyn TokenStorage>,
    message: Mutex<Option<String>>,
    token_key: String,
    message_key: String,
    events: broadcast::Sender<SessionChanged>,
}

impl Session {
    pub fn new(
        storage: Arc<dyn TokenStorage>,
        token_key: impl Into<String>,
        message_key: impl Into<String>,
    ) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            storage,
            message: Mutex::new(None),
            token_key: token_key.into(),
            message_key: message_key.into(),
            events,
        }
    }

    /// Session backed by the storage selected in the config.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(
            open_storage(config)?,
            config.token_key.clone(),
            config.message_key.clone(),
        ))
    }

    /// Session that forgets everything when dropped.
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(MemoryStorage::default()),
            DEFAULT_TOKEN_KEY,
            DEFAULT_MESSAGE_KEY,
        )
    }

    pub fn get_token(&self) -> Option<String> {
        match self.storage.get(&self.token_key) {
            Ok(token) => token,
            Err(e) => {
                warn!(key = %self.token_key, error = %e, "Failed to read token");
                None
            }
        }
    }

    pub fn set_token(&self, token: &str) {
        if let Err(e) = self.storage.set(&self.token_key, token) {
            warn!(key = %self.token_key, error = %e, "Failed to store token");
        }
        self.notify();
    }

    pub fn clear_token(&self) {
        if let Err(e) = self.storage.remove(&self.token_key) {
            warn!(key = %self.token_key, error = %e, "Failed to remove token");
        }
        self.notify();
    }

    pub fn is_logged_in(&self) -> bool {
        self.get_token().is_some_and(|t| !t.is_empty())
    }

    /// Register a listener. Each token mutation after this call delivers
    /// exactly one `SessionChanged` to the returned receiver.
    pub fn subscribe(&self) -> broadcast::Receiver<SessionChanged> {
        self.events.subscribe()
    }

    /// Stage a one-shot message for the login screen, replacing any earlier one.
    pub fn stage_message(&self, message: &str) {
        debug!(key = %self.message_key, "Staged login message");
        *self.message.lock().unwrap_or_else(PoisonError::into_inner) = Some(message.to_string());
    }

    /// Take the staged login message, clearing it.
    pub fn take_message(&self) -> Option<String> {
        self.message
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }

    fn notify(&self) {
        // No subscribers is not an error
        let receivers = self.events.send(SessionChanged).unwrap_or(0);
        debug!(target: "auth-changed", receivers, "Session changed");
    }
}
