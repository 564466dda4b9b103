use crate::api::{ShelfApi, ShelfPaths};
use crate::config::ShelfConfig;
use crate::error::{Result, ShelfError};
use crate::store::fs::FileStore;
use directories::ProjectDirs;
use std::env;
use std::path::{Path, PathBuf};

/// Environment variable that overrides the data directory.
pub const HOME_ENV: &str = "SHELF_HOME";

pub struct ShelfContext {
    pub api: ShelfApi<FileStore>,
    pub config: ShelfConfig,
}

/// Resolves the data directory: an explicit override first, then
/// `$SHELF_HOME`, then the platform data directory.
pub fn resolve_data_dir(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir.to_path_buf());
    }

    if let Some(home) = env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home));
    }

    ProjectDirs::from("com", "shelf", "shelf")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| ShelfError::Config("Could not determine data directory".to_string()))
}

pub fn initialize(explicit_dir: Option<&Path>) -> Result<ShelfContext> {
    let data_dir = resolve_data_dir(explicit_dir)?;
    let paths = ShelfPaths::new(&data_dir);
    let config = paths.config()?;
    let store = paths.file_store(&config);

    log::debug!("Using store {}", store.path().display());

    Ok(ShelfContext {
        api: ShelfApi::new(store, paths),
        config,
    })
}
