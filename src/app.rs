use dioxus::prelude::*;

use crate::config::SortHeaderConfig;
use crate::domain::entities::header::HeaderCell;
use crate::error::Result;
use crate::infra::env::page_env::{parse_sortable_columns, PageEnvironment};
use crate::ui::header_row::SortableHeaderRow;
use crate::ui::state::app_state::{AppState, DEMO_PAGE_ADDRESS};
use crate::usecase::services::header_service::HeaderService;

const DEMO_COLUMNS: [&str; 4] = ["Title", "Author", "Year", "Notes"];
const DEMO_SORTABLE_JSON: &str = "[0, 1, 2]";

fn demo_rows() -> Vec<[&'static str; 4]> {
    vec![
        ["Dune", "Frank Herbert", "1965", "first of six"],
        ["Neuromancer", "William Gibson", "1984", ""],
        ["Hyperion", "Dan Simmons", "1989", "Hugo winner"],
        ["Foundation", "Isaac Asimov", "1951", ""],
    ]
}

fn table_container_style() -> &'static str {
    "border-collapse: collapse; width: 100%; font-family: sans-serif;"
}

fn table_cell_style() -> &'static str {
    "padding: 4px 8px; border-bottom: 1px solid #eee;"
}

/// Environment and decorated headers for the demo listing at `address`.
pub fn listing_headers(
    config: SortHeaderConfig,
    address: &str,
) -> Result<(PageEnvironment, Vec<HeaderCell>)> {
    let service = HeaderService::new(config);
    let page = service.page_url(address)?;
    let env = service.environment(&page, parse_sortable_columns(DEMO_SORTABLE_JSON));
    let cells = service.header_cells(&page, &env, DEMO_COLUMNS);
    Ok((env, cells))
}

/// Listing page whose headers are re-decorated every time the page address
/// changes, the way a server would on each request.
#[component]
pub fn App() -> Element {
    let config = try_use_context::<SortHeaderConfig>().unwrap_or_default();
    let param = config.ordering_param.clone();
    let AppState {
        mut page_address,
        mut visits,
    } = AppState::new();

    let (env, cells) = match listing_headers(config, &page_address()) {
        Ok(listing) => listing,
        Err(err) => {
            return rsx! {
                div {
                    p { "Cannot read page address: {err}" }
                }
            };
        }
    };
    let token = if env.o_field.is_empty() {
        "(unsorted)".to_string()
    } else {
        env.o_field.to_string()
    };
    let rows = demo_rows();
    let visit_list = visits();

    rsx! {
        div {
            nav {
                style: "display: flex; gap: 12px; align-items: center; padding: 8px 0;",
                span { "{param} = {token}" }
                button {
                    onclick: move |_| {
                        visits.write().clear();
                        page_address.set(DEMO_PAGE_ADDRESS.to_string());
                    },
                    "Reset"
                }
            }
            table {
                style: "{table_container_style()}",
                thead {
                    SortableHeaderRow {
                        cells,
                        on_navigate: move |href: String| {
                            tracing::info!(%href, "header clicked");
                            visits.write().push(href.clone());
                            page_address.set(href);
                        },
                    }
                }
                tbody {
                    {rows.iter().enumerate().map(|(row_idx, row)| rsx! {
                        tr { key: "{row_idx}",
                            for value in row.iter() {
                                td { style: "{table_cell_style()}", "{value}" }
                            }
                        }
                    })}
                }
            }
            ul {
                for (idx, visit) in visit_list.iter().enumerate() {
                    li { key: "{idx}", "{visit}" }
                }
            }
        }
    }
}
