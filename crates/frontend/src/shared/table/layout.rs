//! Pure table layout: (columns, rows, actions, order) -> [`TableLayout`].
//!
//! The Leptos component in `view.rs` only turns a layout into DOM, so
//! everything that decides what the table shows lives here.

use super::cell::Cell;
use super::column::Column;
use super::format::format_cell;
use super::Row;
use crate::config::AppConfig;

pub const ACTIONS_HEADER: &str = "Actions";

/// Display order of the fetched rows. Chosen by each page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RowOrder {
    #[default]
    Preserve,
    /// Last fetched row first
    Reverse,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LayoutRow {
    /// Position in the collection the page holds
    pub source_index: usize,
    /// Zebra striping, by displayed position
    pub striped: bool,
    pub cells: Vec<Cell>,
    pub row: Row,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TableLayout {
    pub headers: Vec<String>,
    pub has_actions: bool,
    pub rows: Vec<LayoutRow>,
}

/// Lay out a table, or `None` when there is nothing to show.
pub fn build_layout(
    columns: &[Column],
    rows: &[Row],
    order: RowOrder,
    has_actions: bool,
    config: &AppConfig,
) -> Option<TableLayout> {
    if rows.is_empty() {
        return None;
    }

    let mut headers: Vec<String> = columns.iter().map(|c| c.header.clone()).collect();
    if has_actions {
        headers.push(ACTIONS_HEADER.to_string());
    }

    let indices: Box<dyn Iterator<Item = usize>> = match order {
        RowOrder::Preserve => Box::new(0..rows.len()),
        RowOrder::Reverse => Box::new((0..rows.len()).rev()),
    };

    let rows = indices
        .enumerate()
        .map(|(position, source_index)| {
            let row = &rows[source_index];
            LayoutRow {
                source_index,
                striped: position % 2 == 0,
                cells: columns
                    .iter()
                    .map(|column| format_cell(column, row, config))
                    .collect(),
                row: row.clone(),
            }
        })
        .collect();

    Some(TableLayout {
        headers,
        has_actions,
        rows,
    })
}
