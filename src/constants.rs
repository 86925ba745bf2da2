//! View Constants
//!
//! Centralized defaults for consistent table behavior across the console.

/// Default number of rows per page
pub const DEFAULT_ENTRIES_PER_PAGE: usize = 10;

/// Page sizes offered by the page-size selector
pub const PAGE_SIZE_OPTIONS: [usize; 4] = [10, 25, 50, 100];

/// Maximum number of numbered page buttons shown at once
pub const PAGE_WINDOW: usize = 5;

/// Delay before a search keystroke burst is reported upstream
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 300;

/// Default placeholder shown in the search box
pub const DEFAULT_SEARCH_PLACEHOLDER: &str = "Search...";

/// Default message shown when the visible row slice is empty
pub const DEFAULT_EMPTY_MESSAGE: &str = "No data";

/// View configuration file name
pub const VIEW_CONFIG_FILE: &str = "view_config.toml";
