//! Path resolution for sevendays configuration.
//!
//! Configuration lives in `~/.sevendays/config.yaml`.

use std::path::PathBuf;

use crate::error::SevenDaysError;

/// Paths to sevendays configuration files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.sevendays/`
    pub root: PathBuf,
    /// Config file: `~/.sevendays/config.yaml`
    pub config_file: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, SevenDaysError> {
        let home = std::env::var("HOME").map_err(|_| {
            SevenDaysError::Config("Could not determine home directory".to_string())
        })?;

        Ok(Self::with_root(PathBuf::from(home).join(".sevendays")))
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            root,
        }
    }
}

impl Default for Paths {
    fn default() -> Self {
        Self::new().unwrap_or_else(|_| {
            // Fallback to current directory if home cannot be determined
            Self::with_root(PathBuf::from(".sevendays"))
        })
    }
}
