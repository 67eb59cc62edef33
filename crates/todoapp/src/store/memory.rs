use super::mem_backend::MemBackend;
use super::todo_store::TodoStore;

pub type InMemoryStore = TodoStore<MemBackend>;

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        TodoStore::with_backend(MemBackend::new())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Todo;
    use crate::store::DurableStore;

    pub struct StoreFixture {
        pub store: InMemoryStore,
        todos: Vec<Todo>,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
                todos: Vec::new(),
            }
        }

        /// Appends `count` open todos after the ones already added.
        pub fn with_todos(mut self, count: usize) -> Self {
            for i in 0..count {
                let todo = Todo::new(format!("Test todo {}", i + 1)).unwrap();
                self.todos.push(todo);
            }
            self.store.save(&self.todos);
            self
        }

        pub fn with_completed_todo(mut self, text: &str) -> Self {
            let mut todo = Todo::new(text).unwrap();
            todo.is_completed = true;
            self.todos.push(todo);
            self.store.save(&self.todos);
            self
        }

        pub fn todos(&self) -> &[Todo] {
            &self.todos
        }

        pub fn build(self) -> InMemoryStore {
            self.store
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::StoreFixture;
    use crate::store::DurableStore;

    #[test]
    fn fixture_persists_todos_in_order() {
        let fixture = StoreFixture::new()
            .with_todos(2)
            .with_completed_todo("Done already");
        let expected = fixture.todos().to_vec();
        let store = fixture.build();

        let loaded = store.load();
        assert_eq!(loaded, expected);
        assert!(loaded[2].is_completed);
    }

    #[test]
    fn empty_store_loads_empty() {
        let store = super::InMemoryStore::new();
        assert!(store.load().is_empty());
    }
}
