use super::StoreKey;
use crate::error::Result;

/// Abstract interface for raw blob I/O.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while `TodoStore` handles the "what" (format, validation, recovery).
pub trait BlobBackend {
    /// Read the raw blob stored under `key`.
    /// Returns Ok(None) if nothing was ever written under that key.
    /// Returns Err only on actual I/O errors (permissions, disk failure).
    fn read_blob(&self, key: &StoreKey) -> Result<Option<String>>;

    /// Overwrite the blob stored under `key`.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn write_blob(&self, key: &StoreKey, blob: &str) -> Result<()>;
}
