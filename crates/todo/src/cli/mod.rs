//! # CLI Behavior
//!
//! This is **one possible UI client** for todoapp, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes and
//! output formatting.
//!
//! ### Naked Execution (`todo`)
//!
//! Running `todo` with no arguments defaults to `todo list`.
//!
//! ### Referring to Todos
//!
//! Commands that act on one todo take a reference: either the 1-based number
//! shown by `todo list`, or the todo's full id (as printed by `todo add` and
//! `todo list --json`). Numbers win when a reference could be both.
//!
//! The library treats unknown ids as no-ops; the CLI resolves references
//! against the current snapshot first so it can tell the user when nothing
//! matched.
//!
//! ## Module Structure
//!
//! - `commands`: Startup wiring and per-command handlers
//! - `logging`: Logger setup
//! - `render`: Output formatting
//! - `setup`: Argument parsing via clap
//! - `styles`: Terminal styling

mod commands;
mod logging;
mod render;
pub mod setup;
mod styles;

pub use commands::run;
