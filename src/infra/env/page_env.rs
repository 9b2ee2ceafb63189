use serde_json::Value;
use tracing::warn;

use crate::domain::entities::ordering::{ColumnIndex, OrderingToken, SortableSet};
use crate::infra::url::page_url::PageUrl;

/// Inputs the server injects into a listing page. Building it never fails:
/// missing or malformed values fall back to "unsorted" and "not sortable".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageEnvironment {
    pub o_field: OrderingToken,
    pub valid_sorting_columns: SortableSet,
}

impl PageEnvironment {
    pub fn new(o_field: Option<&str>, valid_sorting_columns: SortableSet) -> Self {
        Self {
            o_field: o_field.map(OrderingToken::from).unwrap_or_default(),
            valid_sorting_columns,
        }
    }

    /// `valid_sorting_columns_json` is the JSON array the server renders,
    /// e.g. `[0, 2, 3]`.
    pub fn from_raw(o_field: Option<&str>, valid_sorting_columns_json: Option<&str>) -> Self {
        let columns = valid_sorting_columns_json
            .map(parse_sortable_columns)
            .unwrap_or_default();
        Self::new(o_field, columns)
    }

    /// Reads the token from the page's own address instead of `o_field`.
    pub fn from_url(page: &PageUrl, valid_sorting_columns: SortableSet) -> Self {
        Self {
            o_field: page.ordering_token(),
            valid_sorting_columns,
        }
    }
}

pub fn parse_sortable_columns(json: &str) -> SortableSet {
    let values = match serde_json::from_str::<Vec<Value>>(json) {
        Ok(values) => values,
        Err(err) => {
            warn!(%err, "valid_sorting_columns is not a JSON array; no column is sortable");
            return SortableSet::new();
        }
    };

    let mut columns = SortableSet::new();
    for value in values {
        match value.as_u64().and_then(|n| usize::try_from(n).ok()) {
            Some(column) => {
                columns.insert(ColumnIndex(column));
            }
            None => warn!(%value, "ignoring invalid sortable column"),
        }
    }
    columns
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_values_mean_unsorted_and_nothing_sortable() {
        let env = PageEnvironment::from_raw(None, None);

        assert!(env.o_field.is_empty());
        assert!(env.valid_sorting_columns.is_empty());
    }

    #[test]
    fn parses_server_rendered_json() {
        let env = PageEnvironment::from_raw(Some("1,-0"), Some("[0, 1, 3]"));

        assert_eq!(env.o_field.as_str(), "1,-0");
        assert_eq!(
            env.valid_sorting_columns.iter().collect::<Vec<_>>(),
            vec![ColumnIndex(0), ColumnIndex(1), ColumnIndex(3)]
        );
    }

    #[test]
    fn malformed_entries_are_ignored() {
        let columns = parse_sortable_columns(r#"[2, "x", -1, 1.5, null, 4]"#);

        assert_eq!(
            columns.iter().collect::<Vec<_>>(),
            vec![ColumnIndex(2), ColumnIndex(4)]
        );
    }

    #[test]
    fn non_array_json_means_nothing_sortable() {
        assert!(parse_sortable_columns("{\"a\": 1}").is_empty());
        assert!(parse_sortable_columns("not json").is_empty());
    }

    #[test]
    fn token_can_come_from_page_address() {
        let page = PageUrl::parse("http://example.com/list/?o=-2").expect("should parse page url");
        let env = PageEnvironment::from_url(&page, [2].into_iter().collect());

        assert_eq!(env.o_field.as_str(), "-2");
    }
}
