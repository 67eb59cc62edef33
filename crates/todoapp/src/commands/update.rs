use crate::model::{Todo, TodoId};

/// Replaces the text of the matching record, keeping its id, completion flag
/// and position.
pub fn apply(todos: &[Todo], id: &TodoId, text: &str) -> Option<Vec<Todo>> {
    let current = todos.iter().find(|t| &t.id == id)?;
    if current.text == text {
        return None;
    }
    Some(
        todos
            .iter()
            .map(|t| {
                if &t.id == id {
                    Todo {
                        text: text.to_string(),
                        ..t.clone()
                    }
                } else {
                    t.clone()
                }
            })
            .collect(),
    )
}
