//! # Command Layer
//!
//! Every mutation of the collection is an [`Action`] reduced by a pure
//! transition function. Each action lives in its own submodule.
//!
//! ## Contract
//!
//! A transition takes the current records and returns:
//! - `Some(next)` when the collection changed, with `next` the full new collection
//! - `None` when the action had no effect (unknown id, identical text)
//!
//! Transitions never fail and never touch persistence or subscribers. Input
//! validation happens before an action is built (see [`crate::manager`]), so by
//! the time an action reaches [`reduce`] its id and text are well formed.
//!
//! Transitions only ever map the matching record: every other record is carried
//! over untouched, in the same position.
//!
//! ## Command Modules
//!
//! - [`create`]: Prepend a new record
//! - [`delete`]: Remove a record by id
//! - [`update`]: Replace the text of a record
//! - [`toggle`]: Flip the completion flag of a record

use crate::model::{Todo, TodoId};

pub mod create;
pub mod delete;
pub mod toggle;
pub mod update;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Create { todo: Todo },
    Delete { id: TodoId },
    Update { id: TodoId, text: String },
    ToggleComplete { id: TodoId },
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::Create { .. } => "create",
            Action::Delete { .. } => "delete",
            Action::Update { .. } => "update",
            Action::ToggleComplete { .. } => "toggle_complete",
        }
    }
}

/// Apply `action` to `todos`. Returns `None` if nothing changed.
pub fn reduce(todos: &[Todo], action: &Action) -> Option<Vec<Todo>> {
    match action {
        Action::Create { todo } => create::apply(todos, todo),
        Action::Delete { id } => delete::apply(todos, id),
        Action::Update { id, text } => update::apply(todos, id, text),
        Action::ToggleComplete { id } => toggle::apply(todos, id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduce_dispatches_to_each_command() {
        let a = Todo::new("a").unwrap();
        let todos = reduce(&[], &Action::Create { todo: a.clone() }).unwrap();
        assert_eq!(todos, vec![a.clone()]);

        let todos = reduce(&todos, &Action::ToggleComplete { id: a.id.clone() }).unwrap();
        assert!(todos[0].is_completed);

        let todos = reduce(
            &todos,
            &Action::Update {
                id: a.id.clone(),
                text: "b".into(),
            },
        )
        .unwrap();
        assert_eq!(todos[0].text, "b");

        let todos = reduce(&todos, &Action::Delete { id: a.id.clone() }).unwrap();
        assert!(todos.is_empty());
    }

    #[test]
    fn action_names() {
        let id = TodoId::generate();
        assert_eq!(Action::Delete { id: id.clone() }.name(), "delete");
        assert_eq!(Action::ToggleComplete { id }.name(), "toggle_complete");
    }
}
