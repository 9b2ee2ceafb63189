use std::collections::HashSet;

use crate::domain::entities::ordering::{ColumnIndex, OrderingToken, SortDirection, SortSpec};

/// Splits a token on `,`. The empty token is the empty ordering, not a
/// single empty spec.
pub fn parse(token: &OrderingToken) -> Vec<SortSpec> {
    if token.is_empty() {
        return Vec::new();
    }
    token.as_str().split(',').map(SortSpec::new).collect()
}

/// Joins specs with `,`. Specs that resolve to no column are left out.
pub fn serialize(specs: &[SortSpec]) -> OrderingToken {
    let parts = specs
        .iter()
        .filter_map(SortSpec::normalized)
        .collect::<Vec<_>>();
    OrderingToken::new(parts.join(","))
}

/// Token that results from setting `column` to `direction`.
///
/// `column` is removed from its current place along with any repeated
/// column (first occurrence wins). Ascending and descending put it in front
/// as the primary key; unsorted leaves it out.
pub fn next_token(
    current: &OrderingToken,
    column: ColumnIndex,
    direction: SortDirection,
) -> OrderingToken {
    let mut seen = HashSet::new();
    let mut kept = Vec::new();
    for spec in parse(current) {
        let Some(spec_column) = spec.column() else {
            continue;
        };
        if spec_column == column || !seen.insert(spec_column) {
            continue;
        }
        kept.push(spec);
    }

    let head = match direction {
        SortDirection::Ascending => Some(SortSpec::ascending(column)),
        SortDirection::Descending => Some(SortSpec::descending(column)),
        SortDirection::Unsorted => None,
    };

    let specs = head.into_iter().chain(kept).collect::<Vec<_>>();
    serialize(&specs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(value: &str) -> OrderingToken {
        OrderingToken::from(value)
    }

    #[test]
    fn parse_empty_token_yields_no_specs() {
        assert!(parse(&token("")).is_empty(), "empty token should be unsorted");
    }

    #[test]
    fn parse_keeps_order_and_signs() {
        let specs = parse(&token("2,-1"));

        assert_eq!(specs.len(), 2);
        assert_eq!(specs[0].column(), Some(ColumnIndex(2)));
        assert_eq!(specs[0].direction(), SortDirection::Ascending);
        assert_eq!(specs[1].column(), Some(ColumnIndex(1)));
        assert_eq!(specs[1].direction(), SortDirection::Descending);
    }

    #[test]
    fn parse_does_not_deduplicate() {
        let specs = parse(&token("1,-1,1"));
        assert_eq!(specs.len(), 3, "parse should keep duplicates");
    }

    #[test]
    fn next_token_walks_the_cycle() {
        assert_eq!(
            next_token(&token(""), ColumnIndex(3), SortDirection::Ascending).as_str(),
            "3"
        );
        assert_eq!(
            next_token(&token("3"), ColumnIndex(3), SortDirection::Descending).as_str(),
            "-3"
        );
        assert_eq!(
            next_token(&token("-3"), ColumnIndex(3), SortDirection::Unsorted).as_str(),
            ""
        );
    }

    #[test]
    fn next_token_moves_column_to_front() {
        assert_eq!(
            next_token(&token("1,-2"), ColumnIndex(2), SortDirection::Ascending).as_str(),
            "2,1"
        );
        assert_eq!(
            next_token(&token("1,-2,4"), ColumnIndex(4), SortDirection::Descending).as_str(),
            "-4,1,-2"
        );
    }

    #[test]
    fn next_token_drops_later_duplicates() {
        let result = next_token(&token("1,-5,-1,5,2"), ColumnIndex(2), SortDirection::Unsorted);
        assert_eq!(result.as_str(), "1,-5", "first occurrence of each column should win");
    }

    #[test]
    fn next_token_unsorted_removes_column_everywhere() {
        let result = next_token(&token("0,3,-3,1"), ColumnIndex(3), SortDirection::Unsorted);
        assert!(
            parse(&result).iter().all(|spec| spec.column() != Some(ColumnIndex(3))),
            "column 3 should be absent from {result}"
        );
        assert_eq!(result.as_str(), "0,1");
    }

    #[test]
    fn next_token_drops_malformed_specs() {
        let result = next_token(&token("abc,1,,-x"), ColumnIndex(0), SortDirection::Ascending);
        assert_eq!(result.as_str(), "0,1");
    }

    #[test]
    fn serialize_normalizes_specs() {
        let specs = vec![SortSpec::new("+4"), SortSpec::new(" -2"), SortSpec::new("nope")];
        assert_eq!(serialize(&specs).as_str(), "4,-2");
        assert_eq!(serialize(&[]).as_str(), "");
    }
}
