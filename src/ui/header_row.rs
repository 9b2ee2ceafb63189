use dioxus::prelude::*;

use crate::domain::entities::header::HeaderCell;
use crate::ui::decorators::SORT_COLUMN_ATTR;

pub const HEADER_CLASS: &str = "col_header";

fn header_cell_style() -> &'static str {
    "text-align: left; padding: 4px 8px; border-bottom: 1px solid #ccc; white-space: nowrap;"
}

/// Header cells as `th.col_header`, sortable ones wrapping their label in a
/// link. Clicks hand the href to `on_navigate` instead of following it.
#[component]
pub fn SortableHeaderRow(
    cells: Vec<HeaderCell>,
    on_navigate: EventHandler<String>,
) -> Element {
    rsx! {
        tr {
            {cells.iter().enumerate().map(|(position, cell)| {
                let class = if cell.classes.is_empty() {
                    HEADER_CLASS.to_string()
                } else {
                    format!("{HEADER_CLASS} {}", cell.class_list())
                };
                let sort_column = cell.attributes.get(SORT_COLUMN_ATTR).cloned();
                let label = cell.display_label();
                match cell.link.clone() {
                    Some(href) => {
                        let target = href.clone();
                        rsx! {
                            th {
                                key: "{position}",
                                class: "{class}",
                                style: "{header_cell_style()}",
                                "sort_column": sort_column,
                                a {
                                    href: "{href}",
                                    onclick: move |evt: MouseEvent| {
                                        evt.prevent_default();
                                        on_navigate.call(target.clone());
                                    },
                                    "{label}"
                                }
                            }
                        }
                    }
                    None => rsx! {
                        th {
                            key: "{position}",
                            class: "{class}",
                            style: "{header_cell_style()}",
                            "{label}"
                        }
                    },
                }
            })}
        }
    }
}
