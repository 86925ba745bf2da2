//! DataView Component
//!
//! The headless searchable, sortable, paginated table engine. It owns the
//! per-instance [`ViewState`] and derives the visible row slice; pixel
//! rendering belongs to the host.
//!
//! Two mutually exclusive modes:
//! - client mode filters, sorts and pages the full row set locally;
//! - server mode renders rows exactly as given and reports every state
//!   change upward so the caller can refetch.

use ahash::AHashSet;

use crate::constants::{DEFAULT_EMPTY_MESSAGE, DEFAULT_SEARCH_PLACEHOLDER};

use super::cell::CellValue;
use super::column::Column;
use super::pagination::{self, PageItem};
use super::record::Record;
use super::search;
use super::sort;
use super::view_state::{SortDirection, ViewState};

/// Where filtering, sorting and paging happen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataMode {
    /// The view computes everything locally over the full row set
    Client,
    /// The caller supplies one pre-paged slice plus the overall row count
    Server { total_items: usize },
}

/// Caller-owned row expansion, lifted into the view as a snapshot
///
/// The view never mutates the expansion set; toggling only invokes the
/// caller's callback, and the caller re-supplies the updated snapshot.
pub struct Expansion<R> {
    expanded: AHashSet<String>,
    on_toggle: Box<dyn Fn(&str)>,
    render_content: Box<dyn Fn(&R) -> CellValue>,
}

impl<R> Expansion<R> {
    /// Create an expansion config with an empty snapshot
    pub fn new(
        on_toggle: impl Fn(&str) + 'static,
        render_content: impl Fn(&R) -> CellValue + 'static,
    ) -> Self {
        Self {
            expanded: AHashSet::new(),
            on_toggle: Box::new(on_toggle),
            render_content: Box::new(render_content),
        }
    }

    /// Replace the expanded-row snapshot
    pub fn set_expanded(&mut self, ids: impl IntoIterator<Item = String>) {
        self.expanded = ids.into_iter().collect();
    }

    fn is_expanded(&self, id: &str) -> bool {
        self.expanded.contains(id)
    }
}

/// Headless data view over a record type
pub struct DataView<R: Record> {
    columns: Vec<Column<R>>,
    rows: Vec<R>,
    mode: DataMode,
    state: ViewState,
    show_search: bool,
    search_placeholder: String,
    empty_message: String,
    expansion: Option<Expansion<R>>,
    on_state_change: Option<Box<dyn Fn(&ViewState)>>,
    on_row_click: Option<Box<dyn Fn(&R)>>,
}

impl<R: Record> DataView<R> {
    /// Create a client-mode view over a full row set
    pub fn new(columns: Vec<Column<R>>, rows: Vec<R>) -> Self {
        Self {
            columns,
            rows,
            mode: DataMode::Client,
            state: ViewState::default(),
            show_search: true,
            search_placeholder: DEFAULT_SEARCH_PLACEHOLDER.to_string(),
            empty_message: DEFAULT_EMPTY_MESSAGE.to_string(),
            expansion: None,
            on_state_change: None,
            on_row_click: None,
        }
    }

    /// Switch to server mode with the caller-supplied overall row count
    pub fn server_side(mut self, total_items: usize) -> Self {
        self.mode = DataMode::Server { total_items };
        self.state.current_page = pagination::clamp_page(self.state.current_page, self.total_pages());
        self
    }

    /// Set the initial page
    pub fn initial_page(mut self, page: usize) -> Self {
        self.state.current_page = pagination::clamp_page(page, self.total_pages());
        self
    }

    /// Set the initial page size
    pub fn initial_entries_per_page(mut self, entries: usize) -> Self {
        self.state.entries_per_page = entries.max(1);
        self.state.current_page = pagination::clamp_page(self.state.current_page, self.total_pages());
        self
    }

    /// Set the initial sort column and direction
    pub fn initial_sort(mut self, column: impl Into<String>, direction: SortDirection) -> Self {
        self.state.sort_column = Some(column.into());
        self.state.sort_direction = direction;
        self
    }

    /// Set the search box placeholder
    pub fn search_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.search_placeholder = placeholder.into();
        self
    }

    /// Show or hide the search box; hiding also disables filtering
    pub fn show_search(mut self, show: bool) -> Self {
        self.show_search = show;
        self
    }

    /// Set the message shown when the visible slice is empty
    pub fn empty_message(mut self, message: impl Into<String>) -> Self {
        self.empty_message = message.into();
        self
    }

    /// Enable caller-owned row expansion
    pub fn expandable(mut self, expansion: Expansion<R>) -> Self {
        self.expansion = Some(expansion);
        self
    }

    /// Set the state-change listener invoked in server mode
    pub fn on_state_change(mut self, handler: impl Fn(&ViewState) + 'static) -> Self {
        self.on_state_change = Some(Box::new(handler));
        self
    }

    /// Set the row click handler
    pub fn on_row_click(mut self, handler: impl Fn(&R) + 'static) -> Self {
        self.on_row_click = Some(Box::new(handler));
        self
    }

    /// Replace the row set (client mode refresh)
    pub fn set_rows(&mut self, rows: Vec<R>) {
        self.rows = rows;
        self.state.current_page = pagination::clamp_page(self.state.current_page, self.total_pages());
    }

    /// Replace the current slice and overall count (server mode refresh)
    pub fn set_server_data(&mut self, rows: Vec<R>, total_items: usize) {
        self.rows = rows;
        self.mode = DataMode::Server { total_items };
        self.state.current_page = pagination::clamp_page(self.state.current_page, self.total_pages());
    }

    /// Update the search term
    ///
    /// Does not reset the page; the clamping invariant bounds the page when
    /// the filtered total shrinks.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        let term = term.into();
        if self.state.search_term == term {
            return;
        }
        tracing::debug!(term = %term, "search term changed");
        self.state.search_term = term;
        self.state.current_page = pagination::clamp_page(self.state.current_page, self.total_pages());
        self.emit_state_change();
    }

    /// Header click on a column key
    ///
    /// Clicking the active sort column flips its direction; clicking a new
    /// sortable column sorts by it ascending. Non-sortable columns are
    /// ignored.
    pub fn toggle_sort(&mut self, column_key: &str) {
        let sortable = self
            .columns
            .iter()
            .any(|col| col.key == column_key && col.sortable);
        if !sortable {
            return;
        }
        if self.state.sort_column.as_deref() == Some(column_key) {
            self.state.sort_direction = self.state.sort_direction.toggled();
        } else {
            self.state.sort_column = Some(column_key.to_string());
            self.state.sort_direction = SortDirection::Ascending;
        }
        tracing::debug!(
            column = %column_key,
            direction = self.state.sort_direction.as_str(),
            "sort changed"
        );
        self.emit_state_change();
    }

    /// Jump to a page, clamped into `[1, total_pages]`
    pub fn set_page(&mut self, page: usize) {
        let clamped = pagination::clamp_page(page, self.total_pages());
        if clamped == self.state.current_page {
            return;
        }
        self.state.current_page = clamped;
        self.emit_state_change();
    }

    /// Go to the first page
    pub fn first_page(&mut self) {
        self.set_page(1);
    }

    /// Go to the previous page (no-op on the first page)
    pub fn prev_page(&mut self) {
        self.set_page(self.state.current_page.saturating_sub(1));
    }

    /// Go to the next page (no-op on the last page)
    pub fn next_page(&mut self) {
        self.set_page(self.state.current_page + 1);
    }

    /// Go to the last page
    pub fn last_page(&mut self) {
        self.set_page(self.total_pages());
    }

    /// Change the page size; always returns to page 1
    pub fn set_entries_per_page(&mut self, entries: usize) {
        self.state.entries_per_page = entries.max(1);
        self.state.current_page = 1;
        self.emit_state_change();
    }

    /// Toggle a row's expansion by invoking the caller's callback
    ///
    /// The snapshot itself is caller-owned; the view's idea of what is
    /// expanded only changes when the caller re-supplies it.
    pub fn toggle_row(&self, row: &R) {
        let Some(expansion) = &self.expansion else {
            return;
        };
        if let Some(id) = row.row_id() {
            (expansion.on_toggle)(&id);
        }
    }

    /// Replace the expanded-row snapshot
    pub fn set_expanded(&mut self, ids: impl IntoIterator<Item = String>) {
        if let Some(expansion) = &mut self.expansion {
            expansion.set_expanded(ids);
        }
    }

    /// Body row click
    pub fn click_row(&self, row: &R) {
        if let Some(handler) = &self.on_row_click {
            handler(row);
        }
    }

    /// Current state snapshot
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Current mode
    pub fn mode(&self) -> DataMode {
        self.mode
    }

    /// Search term actually applied to filtering
    ///
    /// Empty when the search box is hidden, so a stale term never filters.
    fn effective_term(&self) -> String {
        if self.show_search {
            self.state.normalized_term()
        } else {
            String::new()
        }
    }

    /// Row count after filtering (client) or as reported (server)
    pub fn effective_total(&self) -> usize {
        match self.mode {
            DataMode::Server { total_items } => total_items,
            DataMode::Client => {
                let term = self.effective_term();
                self.rows.iter().filter(|row| search::matches(*row, &term)).count()
            }
        }
    }

    /// Total page count, never less than 1
    pub fn total_pages(&self) -> usize {
        pagination::total_pages(self.effective_total(), self.state.entries_per_page)
    }

    /// Whether a previous page exists
    pub fn can_prev(&self) -> bool {
        self.state.current_page > 1
    }

    /// Whether a next page exists
    pub fn can_next(&self) -> bool {
        self.state.current_page < self.total_pages()
    }

    /// Windowed page-button strip for the footer
    pub fn page_items(&self) -> Vec<PageItem> {
        pagination::page_window(self.state.current_page, self.total_pages())
    }

    /// Columns that should be rendered
    pub fn visible_columns(&self) -> Vec<&Column<R>> {
        self.columns.iter().filter(|col| !col.hide).collect()
    }

    /// Number of cells a full-width row (empty state, expansion content)
    /// spans: all visible columns plus the expand-toggle column if present
    pub fn full_width_span(&self) -> usize {
        let span = self.visible_columns().len();
        if self.expansion.is_some() { span + 1 } else { span }
    }

    /// The rows to render for the current state
    ///
    /// Server mode passes the given rows through untouched. Client mode
    /// filters, stably sorts and slices; the caller-supplied row set is
    /// never reordered in place.
    pub fn visible_rows(&self) -> Vec<&R> {
        if let DataMode::Server { .. } = self.mode {
            return self.rows.iter().collect();
        }

        let term = self.effective_term();
        let mut filtered: Vec<&R> = self
            .rows
            .iter()
            .filter(|row| search::matches(*row, &term))
            .collect();

        if let Some(sort_column) = &self.state.sort_column {
            let column = self.columns.iter().find(|col| &col.key == sort_column);
            let mut keyed: Vec<(sort::SortKey, &R)> = filtered
                .into_iter()
                .map(|row| {
                    let key = match column {
                        Some(col) => col.sort_key(row),
                        None => sort::default_key(row, sort_column),
                    };
                    (key, row)
                })
                .collect();
            keyed.sort_by(|(a, _), (b, _)| match self.state.sort_direction {
                SortDirection::Ascending => sort::compare(a, b),
                SortDirection::Descending => sort::compare(b, a),
            });
            filtered = keyed.into_iter().map(|(_, row)| row).collect();
        }

        let page = pagination::clamp_page(self.state.current_page, self.total_pages());
        let (start, end) = pagination::page_bounds(page, self.state.entries_per_page, filtered.len());
        filtered[start..end].to_vec()
    }

    /// Resolve one row into its visible cell values
    pub fn cells(&self, row: &R) -> Vec<CellValue> {
        self.visible_columns()
            .iter()
            .map(|col| col.render_cell(row))
            .collect()
    }

    /// Whether a row is currently expanded per the caller's snapshot
    pub fn is_expanded(&self, row: &R) -> bool {
        match (&self.expansion, row.row_id()) {
            (Some(expansion), Some(id)) => expansion.is_expanded(&id),
            _ => false,
        }
    }

    /// Expansion content for a row, if expansion is enabled and the row is
    /// expanded
    pub fn expansion_content(&self, row: &R) -> Option<CellValue> {
        let expansion = self.expansion.as_ref()?;
        let id = row.row_id()?;
        expansion
            .is_expanded(&id)
            .then(|| (expansion.render_content)(row))
    }

    /// Message for the empty state
    pub fn empty_text(&self) -> &str {
        &self.empty_message
    }

    /// Placeholder for the search box, or `None` when the box is hidden
    pub fn placeholder(&self) -> Option<&str> {
        self.show_search.then_some(self.search_placeholder.as_str())
    }

    fn emit_state_change(&self) {
        if let DataMode::Server { .. } = self.mode {
            if let Some(handler) = &self.on_state_change {
                handler(&self.state);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use serde_json::json;

    use super::*;
    use crate::view::record::JsonRow;
    use crate::view::sort::SortKey;

    fn named_row(id: usize, name: &str) -> JsonRow {
        let mut row = JsonRow::new();
        row.insert("id", json!(id.to_string()));
        row.insert("name", json!(name));
        row
    }

    fn numbered_rows(count: usize) -> Vec<JsonRow> {
        (1..=count).map(|i| named_row(i, &format!("row {i:03}"))).collect()
    }

    fn name_columns() -> Vec<Column<JsonRow>> {
        vec![Column::new("name", "Name").sortable()]
    }

    fn visible_names(view: &DataView<JsonRow>) -> Vec<String> {
        view.visible_rows()
            .iter()
            .map(|row| row.field("name").and_then(|v| v.as_str()).unwrap_or("").to_string())
            .collect()
    }

    #[test]
    fn test_paging_through_23_rows() {
        let mut view = DataView::new(name_columns(), numbered_rows(23));
        assert_eq!(view.total_pages(), 3);
        assert_eq!(visible_names(&view), (1..=10).map(|i| format!("row {i:03}")).collect::<Vec<_>>());

        view.next_page();
        assert_eq!(view.state().current_page, 2);
        assert_eq!(visible_names(&view)[0], "row 011");
        assert_eq!(visible_names(&view).len(), 10);

        view.last_page();
        assert_eq!(view.state().current_page, 3);
        assert_eq!(visible_names(&view), vec!["row 021", "row 022", "row 023"]);
        assert!(!view.can_next());

        // Boundary no-ops.
        view.next_page();
        assert_eq!(view.state().current_page, 3);
        view.first_page();
        view.prev_page();
        assert_eq!(view.state().current_page, 1);
        assert!(!view.can_prev());
    }

    #[test]
    fn test_out_of_range_page_clamps() {
        let mut view = DataView::new(name_columns(), numbered_rows(23));
        view.set_page(99);
        assert_eq!(view.state().current_page, 3);
        view.set_page(0);
        assert_eq!(view.state().current_page, 1);
    }

    #[test]
    fn test_sort_ascending_is_case_insensitive() {
        let rows = vec![named_row(1, "Bob"), named_row(2, "ann"), named_row(3, "Cara")];
        let mut view = DataView::new(name_columns(), rows);
        view.toggle_sort("name");
        assert_eq!(visible_names(&view), vec!["ann", "Bob", "Cara"]);
    }

    #[test]
    fn test_sort_toggle_reverses_distinct_keys() {
        let rows = vec![named_row(1, "Bob"), named_row(2, "ann"), named_row(3, "Cara")];
        let mut view = DataView::new(name_columns(), rows);
        view.toggle_sort("name");
        let ascending = visible_names(&view);
        view.toggle_sort("name");
        let mut descending = visible_names(&view);
        descending.reverse();
        assert_eq!(ascending, descending);
    }

    #[test]
    fn test_sort_ties_keep_original_order_both_directions() {
        let rows = vec![
            named_row(1, "same"),
            named_row(2, "same"),
            named_row(3, "same"),
        ];
        let ids = |view: &DataView<JsonRow>| -> Vec<String> {
            view.visible_rows().iter().filter_map(|r| r.row_id()).collect()
        };
        let mut view = DataView::new(name_columns(), rows);
        view.toggle_sort("name");
        assert_eq!(ids(&view), vec!["1", "2", "3"]);
        view.toggle_sort("name");
        assert_eq!(ids(&view), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_sort_ignores_unsortable_column() {
        let columns = vec![Column::new("name", "Name")];
        let mut view = DataView::new(columns, numbered_rows(3));
        view.toggle_sort("name");
        assert_eq!(view.state().sort_column, None);
    }

    #[test]
    fn test_custom_sort_accessor_orders_numerically() {
        let mut rows = Vec::new();
        for (id, uses) in [(1, 2), (2, 10), (3, 1)] {
            let mut row = named_row(id, &format!("card {id}"));
            row.insert("uses", json!(uses));
            rows.push(row);
        }
        let columns = vec![
            Column::new("name", "Name"),
            Column::new("uses", "Uses")
                .sortable()
                .sort_with(|r: &JsonRow| SortKey::from(r.field("uses").and_then(|v| v.as_i64()).unwrap_or(0))),
        ];
        let mut view = DataView::new(columns, rows);
        view.toggle_sort("uses");
        let ids: Vec<String> = view.visible_rows().iter().filter_map(|r| r.row_id()).collect();
        assert_eq!(ids, vec!["3", "1", "2"]);
    }

    #[test]
    fn test_search_trims_and_lowercases() {
        let rows = vec![named_row(1, "Bob"), named_row(2, "ann"), named_row(3, "Cara")];
        let mut view = DataView::new(name_columns(), rows);
        view.set_search_term("  Ca  ");
        assert_eq!(visible_names(&view), vec!["Cara"]);
        assert_eq!(view.effective_total(), 1);
    }

    #[test]
    fn test_whitespace_term_matches_everything() {
        let mut view = DataView::new(name_columns(), numbered_rows(5));
        view.set_search_term("   ");
        assert_eq!(view.effective_total(), 5);
    }

    #[test]
    fn test_search_clamps_page_without_resetting_it() {
        let mut view = DataView::new(name_columns(), numbered_rows(23));
        view.set_page(2);
        // Narrows to a single page; the page is clamped, not reset.
        view.set_search_term("row 00");
        assert_eq!(view.effective_total(), 9);
        assert_eq!(view.state().current_page, 1);

        let mut view = DataView::new(name_columns(), numbered_rows(23));
        view.set_page(2);
        view.set_search_term("row 0");
        assert_eq!(view.state().current_page, 2);
    }

    #[test]
    fn test_page_size_change_resets_page() {
        let mut view = DataView::new(name_columns(), numbered_rows(60));
        view.set_page(5);
        view.set_entries_per_page(25);
        assert_eq!(view.state().current_page, 1);
        assert_eq!(view.state().entries_per_page, 25);
        assert_eq!(view.total_pages(), 3);
    }

    #[test]
    fn test_hidden_search_disables_filtering() {
        let rows = vec![named_row(1, "Bob"), named_row(2, "Cara")];
        let mut view = DataView::new(name_columns(), rows).show_search(false);
        view.set_search_term("cara");
        assert_eq!(view.effective_total(), 2);
        assert_eq!(view.placeholder(), None);
    }

    #[test]
    fn test_hidden_column_is_invisible_but_searchable() {
        let columns = vec![
            Column::new("name", "Name"),
            Column::new("secret", "Secret").hidden(),
        ];
        let mut row = named_row(1, "Bob");
        row.insert("secret", json!("zebra"));
        let mut view = DataView::new(columns, vec![row]);
        assert_eq!(view.visible_columns().len(), 1);
        view.set_search_term("zebra");
        assert_eq!(view.effective_total(), 1);
    }

    #[test]
    fn test_server_mode_passes_rows_through() {
        let rows = vec![named_row(1, "zeta"), named_row(2, "alpha")];
        let mut view = DataView::new(name_columns(), rows)
            .server_side(57)
            .initial_entries_per_page(25);
        // Pre-sorted/paged by the caller; the view must not reorder or
        // filter, even with an active sort and a non-matching term.
        view.set_search_term("nothing matches this");
        view.toggle_sort("name");
        assert_eq!(visible_names(&view), vec!["zeta", "alpha"]);
        assert_eq!(view.total_pages(), 3);
    }

    #[test]
    fn test_server_mode_reports_state_changes() {
        let seen: Rc<RefCell<Vec<ViewState>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut view = DataView::new(name_columns(), numbered_rows(10))
            .server_side(57)
            .initial_entries_per_page(25)
            .on_state_change(move |state| sink.borrow_mut().push(state.clone()));

        view.set_page(2);
        view.set_search_term("visa");
        view.toggle_sort("name");
        view.set_entries_per_page(10);

        let seen = seen.borrow();
        assert_eq!(seen.len(), 4);
        assert_eq!(seen[0].current_page, 2);
        assert_eq!(seen[1].search_term, "visa");
        assert_eq!(seen[2].sort_column.as_deref(), Some("name"));
        assert_eq!(seen[3].entries_per_page, 10);
        assert_eq!(seen[3].current_page, 1);
    }

    #[test]
    fn test_server_mode_clamps_requested_page() {
        let mut view = DataView::new(name_columns(), numbered_rows(7))
            .server_side(57)
            .initial_entries_per_page(25);
        view.set_page(4);
        assert_eq!(view.state().current_page, 3);
    }

    #[test]
    fn test_server_mode_zero_total_is_one_page() {
        let view = DataView::new(name_columns(), Vec::new()).server_side(0);
        assert_eq!(view.total_pages(), 1);
        assert_eq!(view.page_items().len(), 1);
    }

    #[test]
    fn test_client_mode_never_notifies() {
        let seen: Rc<RefCell<Vec<ViewState>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut view = DataView::new(name_columns(), numbered_rows(30))
            .on_state_change(move |state| sink.borrow_mut().push(state.clone()));
        view.set_page(2);
        view.set_search_term("row");
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_row_click_callback() {
        let clicked: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&clicked);
        let view = DataView::new(name_columns(), numbered_rows(3))
            .on_row_click(move |row: &JsonRow| {
                if let Some(id) = row.row_id() {
                    sink.borrow_mut().push(id);
                }
            });
        let rows = view.visible_rows();
        view.click_row(rows[1]);
        assert_eq!(*clicked.borrow(), vec!["2".to_string()]);
    }

    #[test]
    fn test_expansion_is_caller_owned() {
        let toggled: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&toggled);
        let expansion = Expansion::new(
            move |id: &str| sink.borrow_mut().push(id.to_string()),
            |row: &JsonRow| CellValue::from_field_opt(row.field("name")),
        );
        let mut view = DataView::new(name_columns(), numbered_rows(3)).expandable(expansion);

        let row = named_row(2, "row 002");
        view.toggle_row(&row);
        assert_eq!(*toggled.borrow(), vec!["2".to_string()]);
        // The toggle alone changes nothing until the snapshot comes back.
        assert!(!view.is_expanded(&row));
        assert_eq!(view.expansion_content(&row), None);

        view.set_expanded(vec!["2".to_string()]);
        assert!(view.is_expanded(&row));
        assert_eq!(view.expansion_content(&row), Some(CellValue::Text("row 002".into())));
        assert_eq!(view.full_width_span(), 2);
    }

    #[test]
    fn test_empty_view_shows_empty_message() {
        let mut view = DataView::new(name_columns(), numbered_rows(3)).empty_message("No cards found");
        view.set_search_term("zzz");
        assert!(view.visible_rows().is_empty());
        assert_eq!(view.empty_text(), "No cards found");
    }

    #[test]
    fn test_rendered_cells_follow_visible_columns() {
        let columns = vec![
            Column::new("name", "Name"),
            Column::computed("Shout", |row: &JsonRow| {
                CellValue::Text(
                    row.field("name").and_then(|v| v.as_str()).unwrap_or("").to_uppercase(),
                )
            }),
        ];
        let view = DataView::new(columns, vec![named_row(1, "ann")]);
        let rows = view.visible_rows();
        assert_eq!(
            view.cells(rows[0]),
            vec![CellValue::Text("ann".into()), CellValue::Text("ANN".into())]
        );
    }
}
