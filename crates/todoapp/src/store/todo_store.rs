use super::backend::BlobBackend;
use super::{DurableStore, PersistenceFailure, StoreKey, StoreOp};
use crate::error::Result;
use crate::model::{validate_collection, Todo};
use log::{debug, error, warn};

type ErrorObserver = Box<dyn Fn(&PersistenceFailure)>;

pub struct TodoStore<B: BlobBackend> {
    /// The underlying blob backend.
    /// Exposed as pub(crate) for testing and internal access only.
    pub(crate) backend: B,
    key: StoreKey,
    error_observer: Option<ErrorObserver>,
}

impl<B: BlobBackend> TodoStore<B> {
    pub fn with_backend(backend: B) -> Self {
        Self {
            backend,
            key: StoreKey::default(),
            error_observer: None,
        }
    }

    pub fn with_key(mut self, key: StoreKey) -> Self {
        self.key = key;
        self
    }

    pub fn key(&self) -> &StoreKey {
        &self.key
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Register a hook receiving every absorbed load/save failure.
    /// Replaces any previously registered observer.
    pub fn set_error_observer(&mut self, observer: impl Fn(&PersistenceFailure) + 'static) {
        self.error_observer = Some(Box::new(observer));
    }

    pub fn with_error_observer(mut self, observer: impl Fn(&PersistenceFailure) + 'static) -> Self {
        self.set_error_observer(observer);
        self
    }

    /// Read and validate the persisted collection.
    ///
    /// A missing blob is `Ok(vec![])`; a JSON `null` blob is treated the same.
    pub fn try_load(&self) -> Result<Vec<Todo>> {
        match self.backend.read_blob(&self.key)? {
            None => Ok(Vec::new()),
            Some(raw) => parse_blob(&raw),
        }
    }

    /// Serialize the full collection and overwrite the blob.
    pub fn try_save(&self, todos: &[Todo]) -> Result<()> {
        let blob = serde_json::to_string_pretty(todos)?;
        self.backend.write_blob(&self.key, &blob)
    }

    /// Hands the failure to the observer when one is registered, and logs it
    /// otherwise. With an observer the log line drops to `debug`.
    fn report(&self, failure: PersistenceFailure) {
        match &self.error_observer {
            Some(observer) => {
                debug!("{}", failure);
                observer(&failure);
            }
            None => match failure.op {
                StoreOp::Load => warn!("discarding persisted todos: {}", failure),
                StoreOp::Save => error!("{}", failure),
            },
        }
    }
}

impl<B: BlobBackend> DurableStore for TodoStore<B> {
    fn load(&self) -> Vec<Todo> {
        match self.try_load() {
            Ok(todos) => {
                debug!("loaded {} todos from `{}`", todos.len(), self.key);
                todos
            }
            Err(error) => {
                self.report(PersistenceFailure {
                    op: StoreOp::Load,
                    key: self.key.clone(),
                    error,
                });
                Vec::new()
            }
        }
    }

    fn save(&self, todos: &[Todo]) {
        match self.try_save(todos) {
            Ok(()) => debug!("saved {} todos to `{}`", todos.len(), self.key),
            Err(error) => self.report(PersistenceFailure {
                op: StoreOp::Save,
                key: self.key.clone(),
                error,
            }),
        }
    }
}

fn parse_blob(raw: &str) -> Result<Vec<Todo>> {
    let todos: Option<Vec<Todo>> = serde_json::from_str(raw)?;
    let todos = todos.unwrap_or_default();
    validate_collection(&todos)?;
    Ok(todos)
}
