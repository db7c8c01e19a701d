//! Where the CLI keeps its config and logs.

use std::path::{Path, PathBuf};

const APP_NAME: &str = "procmap";

#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("could not determine OS configuration directory")]
    NoConfigDir,
}

/// Resolved config and log locations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformDirs {
    /// Holds `procmap.ron`.
    pub config_dir: PathBuf,
    /// Holds `procmap.log` in debug builds.
    pub log_dir: PathBuf,
}

impl PlatformDirs {
    /// OS conventions: XDG on Linux, Known Folders on Windows, Library on
    /// macOS. Logs go to the data directory when the OS has one.
    pub fn resolve() -> Result<Self, PlatformError> {
        let config_dir = dirs::config_dir()
            .ok_or(PlatformError::NoConfigDir)?
            .join(APP_NAME);
        let log_dir = dirs::data_local_dir()
            .map(|dir| dir.join(APP_NAME))
            .unwrap_or_else(|| config_dir.clone())
            .join("logs");
        Ok(Self {
            config_dir,
            log_dir,
        })
    }

    /// Everything under an explicit directory, as given by `--config`.
    pub fn rooted_at(dir: &Path) -> Self {
        Self {
            config_dir: dir.to_path_buf(),
            log_dir: dir.join("logs"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rooted_at_keeps_logs_inside() {
        let root = tempfile::tempdir().unwrap();
        let dirs = PlatformDirs::rooted_at(root.path());
        assert_eq!(dirs.config_dir, root.path());
        assert!(dirs.log_dir.starts_with(root.path()));
    }

    #[test]
    fn test_resolve_uses_app_name() {
        // Headless CI may have no config dir; only check when one exists.
        if let Ok(dirs) = PlatformDirs::resolve() {
            assert!(dirs.config_dir.ends_with(APP_NAME));
            assert!(dirs.log_dir.ends_with("logs"));
        }
    }
}
