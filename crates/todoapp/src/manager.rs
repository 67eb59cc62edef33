//! # Todo Collection Manager
//!
//! [`TodoManager`] owns the canonical collection and is the only writer. It is
//! constructed once at startup (see [`crate::bootstrap`]) and handed by
//! reference, or by `Rc` handle, to whoever needs it.
//!
//! ## Mutation Pipeline
//!
//! Every public mutation goes through the same steps:
//!
//! 1. **Validate**: malformed ids or blank text fail with `InvalidArgument`,
//!    nothing else happens.
//! 2. **Reduce**: the action is applied by [`commands::reduce`]. If it had no
//!    effect (unknown id, identical text) the pipeline stops here: no save,
//!    no notification.
//! 3. **Commit**: the new snapshot replaces the in-memory collection.
//! 4. **Persist**: the full collection is handed to the store.
//! 5. **Notify**: subscribers receive the new snapshot.
//!
//! Steps 3 to 5 always run in that order, so a subscriber never sees a state
//! that was not handed to the store first.
//!
//! ## Unknown Ids
//!
//! Deleting, updating or toggling an id that is not in the collection is a
//! silent no-op. Use [`TodoManager::get`] or a [`Snapshot`] to find out
//! whether a record exists.
//!
//! ## Mutations From Subscribers
//!
//! The manager is single-threaded and uses interior mutability, so a
//! subscriber holding a handle may call back into it. Such a call is validated
//! right away (errors and new ids are returned as usual) and then queued; it
//! is applied once the current notification round has finished. Subscribers
//! therefore see snapshots strictly in mutation order.

use crate::commands::{self, Action};
use crate::error::Result;
use crate::model::{validate_text, Snapshot, Todo, TodoId};
use crate::notify::{Subscribers, SubscriptionId};
use crate::store::DurableStore;
use log::debug;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

pub struct TodoManager<S: DurableStore> {
    store: S,
    todos: RefCell<Snapshot>,
    subscribers: Subscribers,
    dispatching: Cell<bool>,
    pending: RefCell<VecDeque<Action>>,
}

impl<S: DurableStore> TodoManager<S> {
    /// Manager with an empty collection. Does not read or write the store.
    pub fn new(store: S) -> Self {
        Self::with_todos(store, Vec::new())
    }

    /// Manager seeded with `todos` verbatim. Does not write the store.
    pub(crate) fn with_todos(store: S, todos: Vec<Todo>) -> Self {
        Self {
            store,
            todos: RefCell::new(Snapshot::from(todos)),
            subscribers: Subscribers::new(),
            dispatching: Cell::new(false),
            pending: RefCell::new(VecDeque::new()),
        }
    }

    /// Adds a new, not completed todo at the front. Returns its id.
    pub fn create(&self, text: impl Into<String>) -> Result<TodoId> {
        let todo = Todo::new(text)?;
        let id = todo.id.clone();
        self.dispatch(Action::Create { todo });
        Ok(id)
    }

    pub fn delete(&self, id: impl AsRef<str>) -> Result<()> {
        let id = TodoId::parse(id.as_ref())?;
        self.dispatch(Action::Delete { id });
        Ok(())
    }

    /// Replaces the text of the todo, leaving its id and completion untouched.
    pub fn update(&self, id: impl AsRef<str>, new_text: impl Into<String>) -> Result<()> {
        let id = TodoId::parse(id.as_ref())?;
        let text = new_text.into();
        validate_text(&text)?;
        self.dispatch(Action::Update { id, text });
        Ok(())
    }

    pub fn toggle_complete(&self, id: impl AsRef<str>) -> Result<()> {
        let id = TodoId::parse(id.as_ref())?;
        self.dispatch(Action::ToggleComplete { id });
        Ok(())
    }

    pub fn subscribe(&self, callback: impl Fn(&Snapshot) + 'static) -> SubscriptionId {
        self.subscribers.subscribe(callback)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    pub fn snapshot(&self) -> Snapshot {
        self.todos.borrow().clone()
    }

    pub fn get(&self, id: &str) -> Option<Todo> {
        self.todos.borrow().find(id).cloned()
    }

    pub fn len(&self) -> usize {
        self.todos.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.borrow().is_empty()
    }

    /// Number of todos not completed yet.
    pub fn remaining(&self) -> usize {
        self.todos.borrow().remaining()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn dispatch(&self, action: Action) {
        self.pending.borrow_mut().push_back(action);
        if self.dispatching.get() {
            debug!("queued action while notifying subscribers");
            return;
        }

        self.dispatching.set(true);
        let _guard = DispatchGuard(&self.dispatching);
        loop {
            let next = self.pending.borrow_mut().pop_front();
            match next {
                Some(action) => self.apply(action),
                None => break,
            }
        }
    }

    fn apply(&self, action: Action) {
        let next = commands::reduce(&self.todos.borrow(), &action);
        let Some(next) = next else {
            debug!("{} had no effect", action.name());
            return;
        };

        let snapshot = Snapshot::from(next);
        *self.todos.borrow_mut() = snapshot.clone();
        self.store.save(&snapshot);
        debug!("{} applied, {} todos", action.name(), snapshot.len());
        self.subscribers.notify(&snapshot);
    }
}

struct DispatchGuard<'a>(&'a Cell<bool>);

impl Drop for DispatchGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}
