//! # Todoapp Architecture
//!
//! Todoapp is a **UI-agnostic todo library**: it holds an ordered collection of
//! todos in memory, mutates it under identity and ordering rules, keeps a
//! durable copy in sync and tells interested parties when it changed. The `todo`
//! binary is one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Clients (CLI, views)                                       │
//! │  - Hold a reference to the one TodoManager                  │
//! │  - Read snapshots, subscribe, call the four mutations       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Manager (manager.rs, bootstrap.rs, notify.rs)              │
//! │  - Validates input, owns the collection                     │
//! │  - Commit → persist → notify                                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure transitions: (todos, action) → new todos or nothing │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DurableStore trait, best-effort load/save                │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! Nothing in this crate writes to stdout/stderr or exits the process.
//! Diagnostics go through the `log` facade; the client picks the logger.
//!
//! ## Module Overview
//!
//! - [`manager`]: The [`TodoManager`](manager::TodoManager), entry point for all operations
//! - [`bootstrap`]: Seeding the manager from the store at startup
//! - [`commands`]: Pure transition functions, one per mutation
//! - [`notify`]: Subscriber registry
//! - [`store`]: Durable store adapter and backends
//! - [`model`]: Core data types (`Todo`, `TodoId`, `Snapshot`)
//! - [`config`]: Configuration management
//! - [`init`]: Config and data directory resolution
//! - [`error`]: Error types

pub mod bootstrap;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod manager;
pub mod model;
pub mod notify;
pub mod store;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
