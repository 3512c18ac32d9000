use std::fs;
use std::path::Path;

use crate::model::AppConfig;

/// Config file name, looked up beside the state file
pub const CONFIG_FILE: &str = "harborkey.toml";

/// Read `harborkey.toml` from the directory containing the state file.
/// Missing or unparseable config yields the defaults; a bad config is
/// reported but never fatal.
pub fn load_config(state_path: &Path) -> AppConfig {
    let dir = state_path.parent().unwrap_or(Path::new("."));
    let path = dir.join(CONFIG_FILE);
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(_) => return AppConfig::default(),
    };
    match toml::from_str(&content) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("harborkey: ignoring {}: {}", path.display(), e);
            AppConfig::default()
        }
    }
}
