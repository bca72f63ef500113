use super::action::RowAction;
use super::cell::Cell;
use super::layout::{build_layout, LayoutRow, RowOrder, TableLayout};
use super::{Column, Row};
use crate::config::AppConfig;
use crate::shared::components::ui::Badge;
use crate::shared::icons::icon;
use leptos::prelude::*;

pub const NO_RECORDS_MESSAGE: &str = "No records found";

/// Generic list table used by every list page.
///
/// Renders `empty_message` instead of the table when `rows` is empty.
///
/// # Example
/// ```ignore
/// <DataTable
///     columns=vec![Column::new("Name", "name"), Column::new("Status", "status")]
///     rows=items
///     actions=vec![RowAction::delete(move |row| delete_package(row))]
///     order=RowOrder::Reverse
/// />
/// ```
#[component]
pub fn DataTable(
    columns: Vec<Column>,
    #[prop(into)] rows: Signal<Vec<Row>>,
    #[prop(optional)] actions: Vec<RowAction>,
    #[prop(optional)] order: RowOrder,
    #[prop(optional, into)] empty_message: Option<String>,
) -> impl IntoView {
    let config = use_context::<AppConfig>().expect("AppConfig not found in context");
    let columns = StoredValue::new(columns);
    let actions = StoredValue::new(actions);
    let empty_message = empty_text(empty_message);

    move || {
        let data = rows.get();
        let has_actions = actions.with_value(|a| !a.is_empty());
        let layout =
            columns.with_value(|cols| build_layout(cols, &data, order, has_actions, &config));

        match layout {
            Some(layout) => render_layout(layout, actions).into_any(),
            None => view! {
                <div class="table__empty">{empty_message.clone()}</div>
            }
            .into_any(),
        }
    }
}

/// Message shown in place of an empty table
fn empty_text(custom: Option<String>) -> String {
    custom
        .filter(|message| !message.trim().is_empty())
        .unwrap_or_else(|| NO_RECORDS_MESSAGE.to_string())
}

fn render_layout(layout: TableLayout, actions: StoredValue<Vec<RowAction>>) -> impl IntoView {
    let TableLayout {
        headers,
        has_actions,
        rows,
    } = layout;

    view! {
        <div class="table">
            <table class="table__data">
                <thead class="table__head">
                    <tr>
                        {headers
                            .into_iter()
                            .map(|header| view! { <th class="table__header-cell">{header}</th> })
                            .collect_view()}
                    </tr>
                </thead>
                <tbody>
                    {rows
                        .into_iter()
                        .map(|layout_row| {
                            let LayoutRow { striped, cells, row, .. } = layout_row;
                            view! {
                                <tr class="table__row" class:table__row--striped=striped>
                                    {cells
                                        .into_iter()
                                        .map(render_td)
                                        .collect_view()}
                                    {has_actions.then(|| render_actions(row, actions))}
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
}

fn render_actions(row: Row, actions: StoredValue<Vec<RowAction>>) -> impl IntoView {
    view! {
        <td class="table__cell table__cell--actions">
            <div class="row-actions">
                {actions
                    .get_value()
                    .into_iter()
                    .map(|action| {
                        let row = row.clone();
                        let class = format!("row-action {}", action.class);
                        let title = action.title;
                        let icon_name = action.icon;
                        view! {
                            <button
                                class=class
                                title=title
                                aria-label=title
                                on:click=move |_| action.invoke(&row)
                            >
                                {icon(icon_name)}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </td>
    }
}

fn render_td(cell: Cell) -> impl IntoView {
    view! { <td class="table__cell">{render_cell(cell)}</td> }
}

fn render_cell(cell: Cell) -> AnyView {
    match cell {
        Cell::Empty => view! { <></> }.into_any(),
        Cell::Text(text) => view! { <span>{text}</span> }.into_any(),
        Cell::Hinted { text, hint } => view! {
            <Badge variant=hint.badge_variant()>{text}</Badge>
        }
        .into_any(),
        Cell::Truncated { text, full } => view! {
            <p class="table__text--truncate" title=full>{text}</p>
        }
        .into_any(),
        Cell::Image { url, alt } => view! {
            <img class="table__image table__image--small" src=url alt=alt />
        }
        .into_any(),
        Cell::Gallery(urls) => view! {
            <div class="table__gallery">
                {urls
                    .into_iter()
                    .enumerate()
                    .map(|(i, url)| {
                        let alt = format!("Room Image {}", i + 1);
                        view! { <img class="table__image" src=url alt=alt /> }
                    })
                    .collect_view()}
            </div>
        }
        .into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_defaults_to_no_records() {
        assert_eq!(empty_text(None), "No records found");
        assert_eq!(empty_text(Some("  ".to_string())), NO_RECORDS_MESSAGE);
    }

    #[test]
    fn test_empty_text_uses_page_message() {
        assert_eq!(empty_text(Some("No packages yet".to_string())), "No packages yet");
    }
}
