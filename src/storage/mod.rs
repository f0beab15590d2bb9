//! Key-value persistence used by the entry repository.
//!
//! The repository only needs to read and overwrite one value under a fixed
//! key, so the store is kept to `get`/`set`. Adapters:
//! - [`SqliteStore`]: durable store inside the configured SQLite file
//! - [`MemoryStore`]: process-local store for tests

mod memory;
mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use crate::errors::AppResult;

pub trait KeyValueStore {
    fn get(&self, key: &str) -> AppResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> AppResult<()>;
}
