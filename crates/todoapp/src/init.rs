//! Resolution of config and data locations, and construction of the store.
//!
//! This is the wiring step a client runs once at startup before calling
//! [`TodoManager::bootstrap`](crate::manager::TodoManager::bootstrap).

use crate::config::{TodoConfig, CONFIG_FILE_NAME};
use crate::error::{Result, TodoError};
use crate::store::fs::FileStore;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "todoapp", "todo")
}

/// Default location of `todo.toml`, if the platform has a config directory.
pub fn default_config_file() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

/// Picks the data directory: explicit override, then config, then OS default.
pub fn resolve_data_dir(config: &TodoConfig, data_override: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = data_override {
        return Ok(dir.to_path_buf());
    }
    if let Some(dir) = &config.data_dir {
        return Ok(dir.clone());
    }
    project_dirs()
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| TodoError::Config("could not determine a data directory".into()))
}

/// Builds the file store for `config`, rooted at `data_dir`.
/// Nothing is read or written yet.
pub fn open_store(config: &TodoConfig, data_dir: PathBuf) -> Result<FileStore> {
    let key = config.store_key()?;
    Ok(FileStore::new(data_dir).with_key(key))
}

pub struct TodoPaths {
    pub config_file: Option<PathBuf>,
    pub data_dir: PathBuf,
}

/// Loads configuration and resolves where the collection lives.
pub fn initialize(data_override: Option<&Path>) -> Result<(TodoConfig, TodoPaths)> {
    let config_file = default_config_file();
    let config = TodoConfig::load(config_file.as_deref())?;
    let data_dir = resolve_data_dir(&config, data_override)?;
    Ok((
        config,
        TodoPaths {
            config_file,
            data_dir,
        },
    ))
}
