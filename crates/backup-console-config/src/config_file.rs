//! Discovery of the TOML config file

use std::path::PathBuf;

const CONFIG_FILE: &str = ".backup-console.toml";

/// Content of the first readable config file, if any.
///
/// Looked up in order: `./.backup-console.toml`, `~/.backup-console.toml`,
/// then `config.toml` in the application config directory.
pub fn load_config_file() -> Option<String> {
    let home = std::env::var_os("HOME").map(PathBuf::from);
    let app_config = crate::paths::app_config_path().ok();

    candidates(home, app_config).into_iter().find_map(|path| {
        let content = std::fs::read_to_string(&path).ok()?;
        log::debug!("Loaded config from {}", path.display());
        Some(content)
    })
}

fn candidates(home: Option<PathBuf>, app_config: Option<PathBuf>) -> Vec<PathBuf> {
    std::iter::once(PathBuf::from(CONFIG_FILE))
        .chain(home.map(|home| home.join(CONFIG_FILE)))
        .chain(app_config)
        .collect()
}
