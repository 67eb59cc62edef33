use crate::manager::TodoManager;
use crate::store::fs::FileStore;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestEnv {
    // We keep _temp_dir to ensure the directory is not dropped until the test is done
    pub _temp_dir: TempDir,
    pub root: PathBuf,
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
        let root = temp_dir.path().join("data");
        Self {
            _temp_dir: temp_dir,
            root,
        }
    }

    pub fn store(&self) -> FileStore {
        FileStore::new(self.root.clone())
    }

    /// A manager bootstrapped from whatever is on disk right now.
    pub fn manager(&self) -> TodoManager<FileStore> {
        TodoManager::bootstrap(self.store())
    }
}
