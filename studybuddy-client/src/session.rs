//! Client-held session: bearer token plus the cached user record.

use std::sync::Arc;

use studybuddy_common::UserSummary;

use crate::error::Result;
use crate::storage::{KeyValueStore, MemoryStore};

/// Persistent key holding the bearer token.
pub const TOKEN_KEY: &str = "token";
/// Persistent key holding the JSON-encoded [`UserSummary`].
pub const USER_KEY: &str = "user";
/// Tab-scoped key for the message the login page shows once.
pub const AUTH_MESSAGE_KEY: &str = "authMessage";

/// Accessors over the two stores that make up a session.
///
/// Cloning is cheap and every clone sees the same stores, so the gate, the
/// API client and the layout all observe each other's writes.
#[derive(Clone)]
pub struct Session {
    local: Arc<dyn KeyValueStore>,
    scoped: Arc<dyn KeyValueStore>,
}

impl Session {
    pub fn new(local: Arc<dyn KeyValueStore>, scoped: Arc<dyn KeyValueStore>) -> Self {
        Self { local, scoped }
    }

    /// A session backed entirely by memory.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()), Arc::new(MemoryStore::new()))
    }

    /// The stored token. An empty string counts as no token.
    pub fn token(&self) -> Option<String> {
        self.local.get(TOKEN_KEY).filter(|t| !t.is_empty())
    }

    pub fn set_token(&self, token: &str) -> Result<()> {
        self.local.set(TOKEN_KEY, token)
    }

    pub fn is_logged_in(&self) -> bool {
        self.token().is_some()
    }

    /// The cached user record. An unreadable record is treated as absent.
    pub fn user(&self) -> Option<UserSummary> {
        let raw = self.local.get(USER_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                tracing::warn!("Ignoring unreadable cached user: {}", e);
                None
            }
        }
    }

    pub fn set_user(&self, user: &UserSummary) -> Result<()> {
        let json = serde_json::to_string(user)?;
        self.local.set(USER_KEY, &json)
    }

    /// Store the outcome of a successful login.
    pub fn establish(&self, token: &str, user: &UserSummary) -> Result<()> {
        self.set_token(token)?;
        self.set_user(user)
    }

    /// Remove both the token and the cached user.
    pub fn clear(&self) -> Result<()> {
        self.local.remove(TOKEN_KEY)?;
        self.local.remove(USER_KEY)
    }

    /// Queue a message for the next page to show.
    pub fn stash_message(&self, message: &str) -> Result<()> {
        self.scoped.set(AUTH_MESSAGE_KEY, message)
    }

    /// Take the queued message, if any. A message is only ever returned once.
    pub fn take_message(&self) -> Option<String> {
        let message = self.scoped.get(AUTH_MESSAGE_KEY)?;
        if let Err(e) = self.scoped.remove(AUTH_MESSAGE_KEY) {
            tracing::warn!("Failed to consume auth message: {}", e);
        }
        Some(message)
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("logged_in", &self.is_logged_in())
            .finish()
    }
}
