//! Column Definition
//!
//! Defines table columns with their properties, cell renderers and sort
//! accessors.

use super::cell::CellValue;
use super::record::Record;
use super::sort::{self, SortKey};

/// How a column resolves a row into a cell value
pub enum CellRenderer<R> {
    /// Read the column's field from the row
    Field,
    /// Caller-supplied renderer
    Custom(Box<dyn Fn(&R) -> CellValue>),
}

/// How a column extracts a sort key from a row
pub enum SortAccessor<R> {
    /// Lowercase string coercion of the column's field
    Field,
    /// Caller-supplied accessor
    Custom(Box<dyn Fn(&R) -> SortKey>),
}

/// Column width specification (display hint only)
#[derive(Debug, Clone, Copy)]
pub enum ColumnWidth {
    /// Fixed width in pixels
    Fixed(f32),
    /// Flexible width with optional min/max
    Flex { min: Option<f32>, max: Option<f32> },
    /// Percentage of available space
    Percent(f32),
}

impl Default for ColumnWidth {
    fn default() -> Self {
        ColumnWidth::Flex { min: None, max: None }
    }
}

/// Column definition for the data view
pub struct Column<R> {
    /// Field key; may be empty for purely computed columns
    pub key: String,
    /// Column header label
    pub label: String,
    /// Whether clicking the header sorts by this column
    pub sortable: bool,
    /// Whether the column is excluded from the visible set
    pub hide: bool,
    /// Column width hint
    pub width: ColumnWidth,
    renderer: CellRenderer<R>,
    sorter: SortAccessor<R>,
}

impl<R: Record> Column<R> {
    /// Create a new column reading the given field
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            sortable: false,
            hide: false,
            width: ColumnWidth::default(),
            renderer: CellRenderer::Field,
            sorter: SortAccessor::Field,
        }
    }

    /// Create a computed column with no backing field
    pub fn computed(label: impl Into<String>, render: impl Fn(&R) -> CellValue + 'static) -> Self {
        Self::new("", label).render_with(render)
    }

    /// Make the column sortable
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Exclude the column from the visible set
    pub fn hidden(mut self) -> Self {
        self.hide = true;
        self
    }

    /// Set fixed width
    pub fn fixed_width(mut self, width: f32) -> Self {
        self.width = ColumnWidth::Fixed(width);
        self
    }

    /// Set flexible width with optional constraints
    pub fn flex_width(mut self, min: Option<f32>, max: Option<f32>) -> Self {
        self.width = ColumnWidth::Flex { min, max };
        self
    }

    /// Set percentage width
    pub fn percent_width(mut self, percent: f32) -> Self {
        self.width = ColumnWidth::Percent(percent);
        self
    }

    /// Use a custom cell renderer
    pub fn render_with(mut self, render: impl Fn(&R) -> CellValue + 'static) -> Self {
        self.renderer = CellRenderer::Custom(Box::new(render));
        self
    }

    /// Use a custom sort accessor
    pub fn sort_with(mut self, accessor: impl Fn(&R) -> SortKey + 'static) -> Self {
        self.sorter = SortAccessor::Custom(Box::new(accessor));
        self
    }

    /// Resolve a row into this column's cell value
    pub fn render_cell(&self, row: &R) -> CellValue {
        match &self.renderer {
            CellRenderer::Field => CellValue::from_field_opt(row.field(&self.key)),
            CellRenderer::Custom(render) => render(row),
        }
    }

    /// Extract this column's sort key from a row
    pub fn sort_key(&self, row: &R) -> SortKey {
        match &self.sorter {
            SortAccessor::Field => sort::default_key(row, &self.key),
            SortAccessor::Custom(accessor) => accessor(row),
        }
    }
}
