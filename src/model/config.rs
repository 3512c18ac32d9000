use std::collections::HashMap;

use serde::Deserialize;

/// Optional app configuration, read from `harborkey.toml` beside the
/// state file. Everything defaults; a missing file is not an error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub ui: UiConfig,
}

/// UI color overrides
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UiConfig {
    /// Hex color overrides keyed by theme slot name, e.g.
    /// `background = "#0C001B"`
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_parses() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert!(config.ui.colors.is_empty());
    }

    #[test]
    fn color_overrides_parse() {
        let config: AppConfig = toml::from_str(
            r##"
[ui.colors]
background = "#000000"
highlight = "#FB4196"
"##,
        )
        .unwrap();
        assert_eq!(config.ui.colors.get("background").unwrap(), "#000000");
        assert_eq!(config.ui.colors.get("highlight").unwrap(), "#FB4196");
    }
}
