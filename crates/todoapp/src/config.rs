//! # Configuration
//!
//! Configuration is managed by [`confique`], layering environment variables
//! over a TOML file over compiled defaults.
//!
//! ## Resolution Order
//!
//! 1. **Environment variables**: `TODO_STORE_KEY`, `TODO_DATA_DIR`.
//! 2. **Config file**: `todo.toml` in the OS config directory (via `directories`).
//! 3. **Compiled defaults**: `#[config(default = ...)]`.
//!
//! A missing config file is not an error.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `store_key` | `todos` | Key (file stem) of the persisted blob |
//! | `data_dir` | OS data dir | Directory holding the blob |

use confique::Config;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Result, TodoError};
use crate::store::{StoreKey, DEFAULT_STORE_KEY};

pub const CONFIG_FILE_NAME: &str = "todo.toml";

/// Configuration, stored in `todo.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TodoConfig {
    /// Key the collection is persisted under
    #[config(default = "todos", env = "TODO_STORE_KEY")]
    pub store_key: String,

    /// Directory holding the persisted collection.
    /// When absent, the OS data directory is used.
    #[config(env = "TODO_DATA_DIR")]
    pub data_dir: Option<PathBuf>,
}

impl Default for TodoConfig {
    fn default() -> Self {
        Self {
            store_key: DEFAULT_STORE_KEY.to_string(),
            data_dir: None,
        }
    }
}

impl TodoConfig {
    /// Load from the environment, then `file` if given and present, then defaults.
    pub fn load(file: Option<&Path>) -> Result<Self> {
        let mut builder = Self::builder().env();
        if let Some(path) = file {
            builder = builder.file(path);
        }
        builder.load().map_err(|e| TodoError::Config(e.to_string()))
    }

    /// The configured store key, validated.
    pub fn store_key(&self) -> Result<StoreKey> {
        StoreKey::new(&self.store_key).map_err(|e| TodoError::Config(e.to_string()))
    }
}
