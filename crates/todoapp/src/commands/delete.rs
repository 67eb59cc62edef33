use crate::model::{Todo, TodoId};

pub fn apply(todos: &[Todo], id: &TodoId) -> Option<Vec<Todo>> {
    if !todos.iter().any(|t| &t.id == id) {
        return None;
    }
    Some(todos.iter().filter(|t| &t.id != id).cloned().collect())
}
