//! Startup seeding of the manager from the durable store.
//!
//! Bootstrapping only reads: the store's `save` is never called on this path,
//! so an unreadable blob stays on disk untouched until the first mutation
//! overwrites it.

use crate::manager::TodoManager;
use crate::store::DurableStore;
use log::debug;

impl<S: DurableStore> TodoManager<S> {
    /// Builds the manager from the last persisted collection.
    ///
    /// Order and fields are kept verbatim. An absent or unreadable blob yields
    /// an empty collection.
    pub fn bootstrap(store: S) -> Self {
        let todos = store.load();
        debug!("bootstrapped with {} todos", todos.len());
        Self::with_todos(store, todos)
    }
}
