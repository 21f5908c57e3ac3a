//! Unified path management for the OneStop store.
//!
//! The persistent store lives in one directory under the platform data dir
//! (`~/.local/share/onestop/store` on Linux). Everything that opens a store
//! also accepts an explicit directory, so tests never touch the real one.

use std::path::PathBuf;

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Platform data directory could not be determined.
    DataDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::DataDirNotFound => write!(f, "Cannot find platform data directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Unified path management for OneStop.
pub struct OneStopPaths;

impl OneStopPaths {
    /// Returns the OneStop data directory (e.g. `~/.local/share/onestop/`).
    pub fn data_dir() -> Result<PathBuf, PathError> {
        dirs::data_dir()
            .map(|dir| dir.join("onestop"))
            .ok_or(PathError::DataDirNotFound)
    }

    /// Returns the default store directory for persisted keys.
    pub fn store_dir() -> Result<PathBuf, PathError> {
        Ok(Self::data_dir()?.join("store"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_dir_is_under_data_dir() {
        // dirs::data_dir is available on all supported dev platforms.
        let data = OneStopPaths::data_dir().unwrap();
        let store = OneStopPaths::store_dir().unwrap();
        assert!(store.starts_with(&data));
        assert!(store.ends_with("store"));
    }
}
