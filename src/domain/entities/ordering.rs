use std::collections::BTreeSet;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ColumnIndex(pub usize);

impl From<usize> for ColumnIndex {
    fn from(value: usize) -> Self {
        ColumnIndex(value)
    }
}

impl From<ColumnIndex> for usize {
    fn from(value: ColumnIndex) -> Self {
        value.0
    }
}

impl fmt::Display for ColumnIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Three-state direction of a column. `Unsorted` means the column is absent
/// from the ordering token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    Ascending,
    Descending,
    Unsorted,
}

impl SortDirection {
    /// Direction a header moves to when clicked.
    pub fn next(self) -> Self {
        match self {
            SortDirection::Unsorted => SortDirection::Ascending,
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Unsorted,
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            SortDirection::Ascending => "sort_asc",
            SortDirection::Descending => "sort_desc",
            SortDirection::Unsorted => "unsorted",
        }
    }

    pub fn arrow(self) -> Option<char> {
        match self {
            SortDirection::Ascending => Some('▲'),
            SortDirection::Descending => Some('▼'),
            SortDirection::Unsorted => None,
        }
    }
}

/// One comma-separated element of an ordering token, kept as written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    raw: String,
}

impl SortSpec {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    pub fn ascending(column: ColumnIndex) -> Self {
        Self::new(column.to_string())
    }

    pub fn descending(column: ColumnIndex) -> Self {
        Self::new(format!("-{column}"))
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Absolute value of the spec, or `None` when the text is not an integer.
    pub fn column(&self) -> Option<ColumnIndex> {
        let value: i64 = self.raw.trim().parse().ok()?;
        usize::try_from(value.unsigned_abs())
            .ok()
            .map(ColumnIndex)
    }

    pub fn direction(&self) -> SortDirection {
        if self.raw.trim_start().starts_with('-') {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        }
    }

    /// `n` or `-n`; `None` for specs that resolve to no column.
    pub fn normalized(&self) -> Option<String> {
        let column = self.column()?;
        Some(match self.direction() {
            SortDirection::Descending => format!("-{column}"),
            _ => column.to_string(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct OrderingToken(String);

impl OrderingToken {
    pub fn new(value: impl Into<String>) -> Self {
        OrderingToken(value.into())
    }

    pub fn empty() -> Self {
        OrderingToken(String::new())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for OrderingToken {
    fn from(value: &str) -> Self {
        OrderingToken::new(value)
    }
}

impl From<String> for OrderingToken {
    fn from(value: String) -> Self {
        OrderingToken(value)
    }
}

impl fmt::Display for OrderingToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Column indices the server declared eligible for sorting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortableSet(BTreeSet<ColumnIndex>);

impl SortableSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, column: ColumnIndex) -> bool {
        self.0.contains(&column)
    }

    pub fn insert(&mut self, column: ColumnIndex) -> bool {
        self.0.insert(column)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = ColumnIndex> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<usize> for SortableSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        SortableSet(iter.into_iter().map(ColumnIndex).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_cycles_through_three_states() {
        let mut direction = SortDirection::Unsorted;
        let mut seen = Vec::new();
        for _ in 0..4 {
            direction = direction.next();
            seen.push(direction);
        }

        assert_eq!(
            seen,
            vec![
                SortDirection::Ascending,
                SortDirection::Descending,
                SortDirection::Unsorted,
                SortDirection::Ascending,
            ],
            "clicking should cycle asc -> desc -> unsorted"
        );
    }

    #[test]
    fn sort_spec_resolves_column_and_sign() {
        let desc = SortSpec::new("-4");
        assert_eq!(desc.column(), Some(ColumnIndex(4)));
        assert_eq!(desc.direction(), SortDirection::Descending);

        let asc = SortSpec::new("+2");
        assert_eq!(asc.column(), Some(ColumnIndex(2)));
        assert_eq!(asc.direction(), SortDirection::Ascending);
        assert_eq!(asc.normalized().as_deref(), Some("2"));
    }

    #[test]
    fn malformed_spec_resolves_to_no_column() {
        for raw in ["", "abc", "-x", "1.5", "--3"] {
            let spec = SortSpec::new(raw);
            assert_eq!(spec.column(), None, "{raw:?} should not resolve");
            assert_eq!(spec.normalized(), None, "{raw:?} should not normalize");
        }
    }

    #[test]
    fn minus_zero_is_descending_column_zero() {
        let spec = SortSpec::new("-0");
        assert_eq!(spec.column(), Some(ColumnIndex(0)));
        assert_eq!(spec.normalized().as_deref(), Some("-0"));
    }
}
