use super::backend::BlobBackend;
use super::StoreKey;
use crate::error::{Result, TodoError};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

/// In-memory blob backend for testing.
///
/// Uses `RefCell` for interior mutability since the manager is single-threaded.
/// This keeps the `BlobBackend` trait on `&self` without paying for locks.
#[derive(Default)]
pub struct MemBackend {
    blobs: RefCell<HashMap<String, String>>,
    writes: Cell<usize>,
    simulate_write_error: Cell<bool>,
    simulate_read_error: Cell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    /// Enable read error simulation for testing error handling.
    pub fn set_simulate_read_error(&self, simulate: bool) {
        self.simulate_read_error.set(simulate);
    }

    /// Test helper: the raw blob currently stored under `key`.
    pub fn raw(&self, key: &StoreKey) -> Option<String> {
        self.blobs.borrow().get(key.as_str()).cloned()
    }

    /// Test helper: plant a raw blob, bypassing serialization.
    pub fn put_raw(&self, key: &StoreKey, blob: &str) {
        self.blobs
            .borrow_mut()
            .insert(key.as_str().to_string(), blob.to_string());
    }

    /// Number of successful writes so far.
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }
}

impl BlobBackend for MemBackend {
    fn read_blob(&self, key: &StoreKey) -> Result<Option<String>> {
        if self.simulate_read_error.get() {
            return Err(TodoError::Store("Simulated read error".to_string()));
        }
        Ok(self.blobs.borrow().get(key.as_str()).cloned())
    }

    fn write_blob(&self, key: &StoreKey, blob: &str) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(TodoError::Store("Simulated write error".to_string()));
        }
        self.put_raw(key, blob);
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}
