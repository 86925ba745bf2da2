//! View State
//!
//! The per-instance search/sort/pagination state owned by a data view, plus
//! the snapshot handed to state-change listeners in server mode.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_ENTRIES_PER_PAGE;

/// Sort direction for a sortable column
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// The opposite direction
    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Short name used in query strings and logs
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }
}

/// Snapshot of a data view's user-controlled state
///
/// `current_page` is 1-based and kept inside `[1, total_pages]` by the view;
/// `entries_per_page` is always at least 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    /// Raw search box contents (not yet trimmed/lowercased)
    pub search_term: String,
    /// Active sort column key, if any
    pub sort_column: Option<String>,
    /// Direction applied to the active sort column
    pub sort_direction: SortDirection,
    /// Current page, 1-based
    pub current_page: usize,
    /// Rows per page
    pub entries_per_page: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            sort_column: None,
            sort_direction: SortDirection::default(),
            current_page: 1,
            entries_per_page: DEFAULT_ENTRIES_PER_PAGE,
        }
    }
}

impl ViewState {
    /// Search term trimmed and lowercased for matching
    pub fn normalized_term(&self) -> String {
        self.search_term.trim().to_lowercase()
    }
}
