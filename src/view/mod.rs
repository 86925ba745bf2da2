//! DataView Component
//!
//! A reusable, headless table engine: search, sort, pagination, row
//! expansion and server-side delegation, independent of any rendering
//! toolkit.

pub mod cell;
pub mod column;
pub mod data_view;
pub mod pagination;
pub mod record;
pub mod search;
pub mod sort;
pub mod view_state;

pub use cell::CellValue;
pub use column::{CellRenderer, Column, ColumnWidth, SortAccessor};
pub use data_view::{DataMode, DataView, Expansion};
pub use pagination::PageItem;
pub use record::{JsonRow, Record};
pub use sort::SortKey;
pub use view_state::{SortDirection, ViewState};
