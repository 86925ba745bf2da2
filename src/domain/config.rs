//! ViewConfig - Persisted Table Preferences

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_ENTRIES_PER_PAGE, DEFAULT_SEARCH_DEBOUNCE_MS, PAGE_SIZE_OPTIONS, VIEW_CONFIG_FILE,
};
use crate::error::Result;
use crate::utils::config_store;

/// User-tunable table defaults, persisted across sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Rows per page when a view first mounts
    pub entries_per_page: usize,
    /// Sizes offered by the page-size selector
    pub page_size_options: Vec<usize>,
    /// Keystroke-coalescing delay for server-side search
    pub search_debounce_ms: u64,
    /// Display format for datetime cells
    pub datetime_format: String,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            entries_per_page: DEFAULT_ENTRIES_PER_PAGE,
            page_size_options: PAGE_SIZE_OPTIONS.to_vec(),
            search_debounce_ms: DEFAULT_SEARCH_DEBOUNCE_MS,
            datetime_format: "%Y-%m-%d %H:%M:%S".to_string(),
        }
    }
}

impl ViewConfig {
    /// Load the persisted config, falling back to defaults
    pub fn load() -> Result<Self> {
        config_store::load_config(VIEW_CONFIG_FILE)
    }

    /// Persist the config
    pub fn save(&self) -> Result<()> {
        config_store::save_config(VIEW_CONFIG_FILE, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ViewConfig::default();
        assert_eq!(config.entries_per_page, 10);
        assert_eq!(config.page_size_options, vec![10, 25, 50, 100]);
        assert_eq!(config.search_debounce_ms, 300);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: ViewConfig = toml::from_str("entries_per_page = 25").expect("parse failed");
        assert_eq!(config.entries_per_page, 25);
        assert_eq!(config.search_debounce_ms, 300);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = ViewConfig {
            entries_per_page: 50,
            ..ViewConfig::default()
        };
        let text = toml::to_string_pretty(&config).expect("serialize failed");
        let back: ViewConfig = toml::from_str(&text).expect("parse failed");
        assert_eq!(back, config);
    }
}
