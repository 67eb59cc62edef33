//! # Domain Model
//!
//! This module defines the core data structures: [`Todo`], [`TodoId`] and [`Snapshot`].
//!
//! ## Persisted Shape
//!
//! A collection is stored as a JSON array of records:
//!
//! ```text
//! [
//!   { "id": "6f1c…", "text": "Buy milk", "isCompleted": false },
//!   { "id": "a09e…", "text": "Call mom", "isCompleted": true }
//! ]
//! ```
//!
//! Older blobs are still readable:
//! - The description may live under `todo` instead of `text`.
//! - `isCompleted` may be missing, in which case it reads as `false`.
//!
//! ## Identity
//!
//! Ids are opaque strings. New ids are random v4 UUIDs, never derived from the
//! text and never reused. Ids minted elsewhere are accepted verbatim as long as
//! they are well formed (non-empty, no whitespace or control characters).
//!
//! ## Snapshots
//!
//! A [`Snapshot`] is an immutable, shared view of the collection. Cloning one is
//! a reference-count bump, so the manager can hand the same snapshot to every
//! subscriber and to `snapshot()` callers without copying records.

use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashSet;
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::{Result, TodoError};

/// Opaque, unique identifier of a todo record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TodoId(String);

impl TodoId {
    /// Mint a fresh random id.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Validate a caller-supplied id.
    pub fn parse(raw: &str) -> Result<Self> {
        if raw.is_empty() {
            return Err(TodoError::InvalidArgument("id cannot be empty".into()));
        }
        if raw.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(TodoError::InvalidArgument(format!(
                "id contains whitespace or control characters: {:?}",
                raw
            )));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TodoId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for TodoId {
    type Err = TodoError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for TodoId {
    type Error = TodoError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<TodoId> for String {
    fn from(id: TodoId) -> Self {
        id.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    // Older blobs used `todo` for the description
    #[serde(alias = "todo")]
    pub text: String,
    #[serde(rename = "isCompleted", default)]
    pub is_completed: bool,
}

impl Todo {
    /// Build a new, not yet completed record with a fresh id.
    pub fn new(text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        validate_text(&text)?;
        Ok(Self {
            id: TodoId::generate(),
            text,
            is_completed: false,
        })
    }
}

/// Rejects empty and whitespace-only descriptions.
pub fn validate_text(text: &str) -> Result<()> {
    if text.trim().is_empty() {
        return Err(TodoError::InvalidArgument("todo text cannot be empty".into()));
    }
    Ok(())
}

/// Checks that every id in a persisted collection is unique.
///
/// Ids are already well formed by construction (see [`TodoId::parse`]). Text is
/// kept verbatim, even when blank: only new input goes through [`validate_text`].
pub fn validate_collection(todos: &[Todo]) -> Result<()> {
    let mut seen = HashSet::with_capacity(todos.len());
    for todo in todos {
        if !seen.insert(todo.id.as_str()) {
            return Err(TodoError::Store(format!("duplicate id: {}", todo.id)));
        }
    }
    Ok(())
}

/// Immutable view of the collection at one point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot(Rc<[Todo]>);

impl Snapshot {
    pub fn todos(&self) -> &[Todo] {
        &self.0
    }

    pub fn find(&self, id: &str) -> Option<&Todo> {
        self.0.iter().find(|t| t.id.as_str() == id)
    }

    /// Number of records that are not completed yet.
    pub fn remaining(&self) -> usize {
        self.0.iter().filter(|t| !t.is_completed).count()
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self(Rc::from(Vec::new()))
    }
}

impl From<Vec<Todo>> for Snapshot {
    fn from(todos: Vec<Todo>) -> Self {
        Self(Rc::from(todos))
    }
}

impl Deref for Snapshot {
    type Target = [Todo];

    fn deref(&self) -> &[Todo] {
        &self.0
    }
}

impl Serialize for Snapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_todo_is_not_completed() {
        let todo = Todo::new("Buy milk").unwrap();
        assert_eq!(todo.text, "Buy milk");
        assert!(!todo.is_completed);
        assert!(!todo.id.as_str().is_empty());
    }

    #[test]
    fn new_todo_rejects_blank_text() {
        assert!(matches!(Todo::new(""), Err(TodoError::InvalidArgument(_))));
        assert!(matches!(Todo::new("  \n\t"), Err(TodoError::InvalidArgument(_))));
    }

    #[test]
    fn generated_ids_differ() {
        let a = TodoId::generate();
        let b = TodoId::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn parse_rejects_malformed_ids() {
        assert!(TodoId::parse("").is_err());
        assert!(TodoId::parse("has space").is_err());
        assert!(TodoId::parse("tab\tin").is_err());
        assert!(TodoId::parse("V1StGXR8_Z5jdHi6B-myT").is_ok());
    }

    #[test]
    fn serializes_with_camel_case_completion_flag() {
        let todo = Todo {
            id: TodoId::parse("abc").unwrap(),
            text: "Write docs".into(),
            is_completed: true,
        };
        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "id": "abc", "text": "Write docs", "isCompleted": true })
        );
    }

    #[test]
    fn reads_legacy_field_names() {
        let todo: Todo = serde_json::from_str(r#"{"id":"x1","todo":"Legacy"}"#).unwrap();
        assert_eq!(todo.text, "Legacy");
        assert!(!todo.is_completed);
    }

    #[test]
    fn rejects_blank_id_on_read() {
        let result: std::result::Result<Todo, _> =
            serde_json::from_str(r#"{"id":"","text":"x","isCompleted":false}"#);
        assert!(result.is_err());
    }

    #[test]
    fn validate_collection_flags_duplicates() {
        let a = Todo::new("A").unwrap();
        let mut b = Todo::new("B").unwrap();
        b.id = a.id.clone();
        assert!(validate_collection(&[a.clone()]).is_ok());
        assert!(validate_collection(&[a, b]).is_err());
    }

    #[test]
    fn validate_collection_keeps_blank_text() {
        let mut blank = Todo::new("placeholder").unwrap();
        blank.text = String::new();
        assert!(validate_collection(&[Todo::new("A").unwrap(), blank]).is_ok());
    }

    #[test]
    fn snapshot_counts_remaining() {
        let mut done = Todo::new("done").unwrap();
        done.is_completed = true;
        let open = Todo::new("open").unwrap();
        let snap = Snapshot::from(vec![open.clone(), done]);
        assert_eq!(snap.len(), 2);
        assert_eq!(snap.remaining(), 1);
        assert_eq!(snap.find(open.id.as_str()), Some(&open));
    }
}
