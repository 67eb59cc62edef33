use crate::model::{Todo, TodoId};

pub fn apply(todos: &[Todo], id: &TodoId) -> Option<Vec<Todo>> {
    if !todos.iter().any(|t| &t.id == id) {
        return None;
    }
    Some(
        todos
            .iter()
            .map(|t| {
                if &t.id == id {
                    Todo {
                        is_completed: !t.is_completed,
                        ..t.clone()
                    }
                } else {
                    t.clone()
                }
            })
            .collect(),
    )
}
