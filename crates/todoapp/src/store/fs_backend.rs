use super::backend::BlobBackend;
use super::StoreKey;
use crate::error::{Result, TodoError};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Filesystem blob backend: one `<key>.json` file per key under `root`.
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file backing `key`. The file may not exist yet.
    pub fn blob_path(&self, key: &StoreKey) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(TodoError::Io)?;
        }
        Ok(())
    }
}

impl BlobBackend for FsBackend {
    fn read_blob(&self, key: &StoreKey) -> Result<Option<String>> {
        let path = self.blob_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path).map_err(TodoError::Io)?;
        Ok(Some(content))
    }

    fn write_blob(&self, key: &StoreKey, blob: &str) -> Result<()> {
        self.ensure_dir()?;
        let target = self.blob_path(key);

        // Atomic write
        let tmp = self.root.join(format!(".{}-{}.tmp", key, Uuid::new_v4()));
        fs::write(&tmp, blob).map_err(TodoError::Io)?;
        if let Err(e) = fs::rename(&tmp, &target) {
            let _ = fs::remove_file(&tmp);
            return Err(TodoError::Io(e));
        }
        Ok(())
    }
}
