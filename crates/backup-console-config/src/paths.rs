//! Per-user directories of the console
//!
//! Resolved through `dirs`, e.g. on Linux `~/.config/backup-console/` and
//! `~/.cache/backup-console/`.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

const APP_NAME: &str = "backup-console";

/// Directory holding `config.toml`, created on first use
pub fn config_dir() -> Result<PathBuf> {
    ensure_app_dir(dirs::config_dir(), "config")
}

/// Directory for log files of release builds, created on first use
pub fn cache_dir() -> Result<PathBuf> {
    ensure_app_dir(dirs::cache_dir(), "cache")
}

pub fn app_config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}

fn ensure_app_dir(base: Option<PathBuf>, kind: &str) -> Result<PathBuf> {
    let dir = app_dir(&base.with_context(|| format!("No {} directory on this platform", kind))?);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create {} directory {}", kind, dir.display()))?;
    Ok(dir)
}

fn app_dir(base: &Path) -> PathBuf {
    base.join(APP_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_app_dir_is_namespaced() {
        assert_eq!(
            app_dir(Path::new("/home/ops/.cache")),
            PathBuf::from("/home/ops/.cache/backup-console")
        );
    }

    #[test]
    fn test_missing_base_is_an_error() {
        let err = ensure_app_dir(None, "cache").unwrap_err();
        assert_eq!(err.to_string(), "No cache directory on this platform");
    }

    #[test]
    fn test_app_config_path() {
        if let Ok(path) = app_config_path() {
            assert!(path.ends_with("backup-console/config.toml"));
        }
    }
}
