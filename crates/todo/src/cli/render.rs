//! # Rendering Module
//!
//! Turns snapshots into terminal text. Each row of the list is:
//!
//! ```text
//!   1. [ ] Buy milk
//!   2. [x] Call mom
//!
//! 1 of 2 remaining
//! ```
//!
//! Completed todos are rendered dimmed and struck through. Styling is applied
//! through `console`, which leaves plain text when output is not a terminal.

use super::styles;
use todoapp::model::{Snapshot, Todo};

pub const MARK_DONE: &str = "[x]";
pub const MARK_OPEN: &str = "[ ]";

pub fn render_list(snapshot: &Snapshot) -> String {
    if snapshot.is_empty() {
        return format!(
            "{}\n",
            styles::MUTED.apply_to("No todos yet. Add one with `todo add <text>`.")
        );
    }

    let width = snapshot.len().to_string().len();
    let mut out = String::new();
    for (i, todo) in snapshot.iter().enumerate() {
        out.push_str(&render_row(i + 1, width, todo));
        out.push('\n');
    }
    out.push('\n');
    out.push_str(&format!(
        "{}\n",
        styles::MUTED.apply_to(format!(
            "{} of {} remaining",
            snapshot.remaining(),
            snapshot.len()
        ))
    ));
    out
}

fn render_row(index: usize, width: usize, todo: &Todo) -> String {
    let index = styles::INDEX.apply_to(format!("{:>width$}.", index, width = width));
    if todo.is_completed {
        format!("{} {} {}", index, MARK_DONE, styles::DONE.apply_to(&todo.text))
    } else {
        format!("{} {} {}", index, MARK_OPEN, todo.text)
    }
}

pub fn render_json(snapshot: &Snapshot) -> anyhow::Result<String> {
    Ok(format!("{}\n", serde_json::to_string_pretty(snapshot)?))
}

pub fn success(message: &str) -> String {
    format!("{}", styles::SUCCESS.apply_to(message))
}

pub fn warning(message: &str) -> String {
    format!("{}", styles::WARNING.apply_to(message))
}
