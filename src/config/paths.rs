//! Path resolution for pomogo data files.
//!
//! All pomogo data is stored in `~/.pomogo/`:
//! - `config.yaml` - Main configuration file
//! - `history.json` - Completed session history

use std::path::PathBuf;

use crate::error::PomogoError;

/// Paths to pomogo configuration and data files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.pomogo/`
    pub root: PathBuf,
    /// Config file: `~/.pomogo/config.yaml`
    pub config_file: PathBuf,
    /// History file: `~/.pomogo/history.json`
    pub history_file: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, PomogoError> {
        let home = std::env::var("HOME")
            .map_err(|_| PomogoError::Config("Could not determine home directory".to_string()))?;

        let root = PathBuf::from(home).join(".pomogo");
        Ok(Self::with_root(root))
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            history_file: root.join("history.json"),
            root,
        }
    }

    /// Ensure the data directory exists, creating it if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), PomogoError> {
        if !self.root.exists() {
            std::fs::create_dir_all(&self.root).map_err(|e| {
                PomogoError::Config(format!("Failed to create directory {:?}: {e}", self.root))
            })?;
        }
        Ok(())
    }
}

impl Default for Paths {
    fn default() -> Self {
        Self::new().unwrap_or_else(|_| {
            // Fallback to current directory if home cannot be determined
            Self::with_root(PathBuf::from(".pomogo"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_paths_with_root() {
        let root = PathBuf::from("/tmp/test-pomogo");
        let paths = Paths::with_root(root.clone());

        assert_eq!(paths.root, root);
        assert_eq!(paths.config_file, root.join("config.yaml"));
        assert_eq!(paths.history_file, root.join("history.json"));
    }

    #[test]
    fn test_ensure_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let paths = Paths::with_root(temp_dir.path().join("nested").join("pomogo"));

        paths.ensure_dirs().unwrap();
        assert!(paths.root.exists());
    }
}
