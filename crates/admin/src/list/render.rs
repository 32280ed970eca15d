//! Turns rows and sort state into the view model of a list template.

use store_admin_core::{SortDirection, SortState};

use super::entity::{CellView, ListEntity};

/// Glyph next to a column header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortIndicator {
    /// Column is not the active sort.
    Neutral,
    /// Active, ascending.
    Up,
    /// Active, descending.
    Down,
}

impl SortIndicator {
    #[must_use]
    pub fn for_column(sort: &SortState, key: &str) -> Self {
        if !sort.is_sorted_by(key) {
            return Self::Neutral;
        }
        match sort.direction {
            SortDirection::Ascending => Self::Up,
            SortDirection::Descending => Self::Down,
        }
    }

    /// Phosphor icon class.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Neutral => "ph-caret-up-down",
            Self::Up => "ph-caret-up",
            Self::Down => "ph-caret-down",
        }
    }
}

/// A column header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnHeader {
    pub key: String,
    pub label: String,
    pub indicator: SortIndicator,
    /// Query of the state a click leads to; `None` for non-sortable columns.
    pub sort_href: Option<String>,
}

impl ColumnHeader {
    #[must_use]
    pub const fn is_sortable(&self) -> bool {
        self.sort_href.is_some()
    }
}

/// A table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub id: String,
    pub cells: Vec<CellView>,
    pub view_href: String,
    pub edit_href: String,
    pub delete_href: String,
}

/// Everything a list template needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityListView {
    pub table_id: String,
    pub title: String,
    pub list_path: String,
    pub columns: Vec<ColumnHeader>,
    pub rows: Vec<RowView>,
    pub show_table: bool,
    pub show_not_found: bool,
    pub refresh_disabled: bool,
    pub create_href: String,
    pub create_label: String,
    pub empty_icon: String,
    pub empty_title: String,
}

/// Build the view of `rows` ordered by `sort`.
#[must_use]
pub fn render_list<E: ListEntity>(rows: &[E], loading: bool, sort: &SortState) -> EntityListView {
    let config = E::table_config();
    let route = E::ROUTE;

    let columns = config
        .columns
        .iter()
        .map(|column| {
            if column.sortable {
                ColumnHeader {
                    key: column.key.clone(),
                    label: column.label.clone(),
                    indicator: SortIndicator::for_column(sort, &column.key),
                    sort_href: Some(sort.toggle(&column.key).to_query()),
                }
            } else {
                ColumnHeader {
                    key: column.key.clone(),
                    label: column.label.clone(),
                    indicator: SortIndicator::Neutral,
                    sort_href: None,
                }
            }
        })
        .collect();

    let rows: Vec<RowView> = rows
        .iter()
        .map(|entity| {
            let id = entity.id();
            RowView {
                view_href: route.view_path(&id),
                edit_href: route.edit_path(&id),
                delete_href: route.delete_path(&id),
                cells: entity.cells(),
                id,
            }
        })
        .collect();

    EntityListView {
        table_id: config.table_id,
        title: config.title,
        list_path: route.list_path(),
        columns,
        show_table: !rows.is_empty(),
        show_not_found: rows.is_empty() && !loading,
        rows,
        refresh_disabled: loading,
        create_href: route.new_path(),
        create_label: config.create_label,
        empty_icon: config.empty_icon,
        empty_title: config.empty_title,
    }
}
