//! Sortable column headers for server-rendered listing pages.
//!
//! The current multi-column sort lives in one ordering token (`o=2,-1`:
//! column 2 ascending first, then column 1 descending). Each sortable
//! header links to the token that results from clicking it, cycling the
//! column through ascending, descending and unsorted.

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod infra;
pub mod ui;
pub mod usecase;

pub use config::{Presentation, SortHeaderConfig};
pub use domain::entities::header::HeaderCell;
pub use domain::entities::ordering::{
    ColumnIndex, OrderingToken, SortDirection, SortSpec, SortableSet,
};
pub use error::SortHeaderError;
pub use infra::env::page_env::PageEnvironment;
pub use infra::url::page_url::PageUrl;
pub use usecase::services::header_sort_controller::{
    plan_headers, HeaderPlan, HeaderSortController, SortContext,
};
pub use usecase::services::ordering_codec::{next_token, parse, serialize};
