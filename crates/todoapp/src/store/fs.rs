use super::fs_backend::FsBackend;
use super::todo_store::TodoStore;
use std::path::{Path, PathBuf};

pub type FileStore = TodoStore<FsBackend>;

impl FileStore {
    /// Store keeping its blob under `root`.
    pub fn new(root: PathBuf) -> Self {
        TodoStore::with_backend(FsBackend::new(root))
    }

    /// Path of the file holding the collection.
    pub fn blob_path(&self) -> PathBuf {
        self.backend.blob_path(self.key())
    }

    pub fn root(&self) -> &Path {
        self.backend.root()
    }
}

#[cfg(test)]
mod tests {
    use crate::store::DurableStore;
    use crate::test_utils::TestEnv;

    #[test]
    fn blob_lives_under_root_named_after_key() {
        let env = TestEnv::new();
        let store = env.store();
        assert_eq!(store.root(), env.root.as_path());
        assert_eq!(store.blob_path(), env.root.join("todos.json"));
    }

    #[test]
    fn collection_survives_restart() {
        let env = TestEnv::new();
        let first = env.manager();
        let a = first.create("a").unwrap();
        first.create("b").unwrap();
        first.toggle_complete(&a).unwrap();
        let expected = first.snapshot();
        drop(first);

        let second = env.manager();
        assert_eq!(second.snapshot(), expected);
        assert_eq!(env.store().load(), expected.to_vec());
    }
}
