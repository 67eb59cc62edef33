//! # Storage Layer
//!
//! This module is the durable store adapter. The manager only ever sees the
//! [`DurableStore`] trait: `load` the last snapshot at startup, `save` the full
//! collection after every effective mutation.
//!
//! ## Best-Effort Persistence
//!
//! The in-memory collection is the source of truth. Persistence trails it:
//! - **Load never fails**: a missing blob is an empty collection, and so is a
//!   blob that cannot be parsed or has the wrong shape.
//! - **Save never fails**: write errors are logged and handed to the optional
//!   error observer, then dropped. The in-memory state is not rolled back.
//!
//! The fallible primitives are still available as [`TodoStore::try_load`] and
//! [`TodoStore::try_save`].
//!
//! ## Layout
//!
//! One blob under one fixed key (default `todos`). The blob is the whole
//! collection serialized as a JSON array, rewritten in full on every save.
//!
//! ```text
//! <data dir>/
//! └── todos.json
//! ```
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production store over [`fs_backend::FsBackend`].
//! - [`memory::InMemoryStore`]: for testing logic without filesystem I/O.

use crate::error::{Result, TodoError};
use crate::model::Todo;
use std::fmt;

pub mod backend;
pub mod fs;
pub mod fs_backend;
pub mod mem_backend;
pub mod memory;
pub mod todo_store;

pub use todo_store::TodoStore;

pub const DEFAULT_STORE_KEY: &str = "todos";

/// What the manager needs from persistence.
///
/// Both methods take `&self`: implementations handle their own interior
/// mutability, as the manager is single-threaded.
pub trait DurableStore {
    /// The last persisted collection, or an empty one if there is none or it
    /// cannot be read.
    fn load(&self) -> Vec<Todo>;

    /// Overwrite the persisted collection. Failures are absorbed.
    fn save(&self, todos: &[Todo]);
}

/// Name of the blob the collection is stored under.
///
/// Restricted to ASCII alphanumerics, `-`, `_` and `.` so it can double as a
/// file name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StoreKey(String);

impl StoreKey {
    pub fn new(raw: &str) -> Result<Self> {
        let valid = !raw.is_empty()
            && !raw.starts_with('.')
            && raw
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
        if !valid {
            return Err(TodoError::InvalidArgument(format!(
                "invalid store key: {:?}",
                raw
            )));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for StoreKey {
    fn default() -> Self {
        Self(DEFAULT_STORE_KEY.to_string())
    }
}

impl fmt::Display for StoreKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOp {
    Load,
    Save,
}

impl fmt::Display for StoreOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreOp::Load => f.write_str("load"),
            StoreOp::Save => f.write_str("save"),
        }
    }
}

/// An absorbed load or save failure, as reported to the error observer.
#[derive(Debug)]
pub struct PersistenceFailure {
    pub op: StoreOp,
    pub key: StoreKey,
    pub error: TodoError,
}

impl fmt::Display for PersistenceFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to {} `{}`: {}", self.op, self.key, self.error)
    }
}
