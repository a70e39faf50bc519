//! Key/value storage backends.
//!
//! The browser exposes two string-keyed stores: one that survives restarts
//! and one scoped to the current tab. Both are modelled by [`KeyValueStore`]
//! so the session can be backed by memory in tests and by a file on disk in
//! the CLI.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::Result;

/// A string-keyed, string-valued store with last-write-wins semantics.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}
