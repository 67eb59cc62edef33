use crate::model::Todo;

/// Prepends `todo`: the newest record is always first.
///
/// Returns `None` if a record with the same id is already present.
pub fn apply(todos: &[Todo], todo: &Todo) -> Option<Vec<Todo>> {
    if todos.iter().any(|t| t.id == todo.id) {
        return None;
    }
    let mut next = Vec::with_capacity(todos.len() + 1);
    next.push(todo.clone());
    next.extend_from_slice(todos);
    Some(next)
}
