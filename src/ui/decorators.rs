use crate::domain::entities::header::HeaderCell;
use crate::domain::entities::ordering::SortDirection;
use crate::usecase::ports::header::HeaderDecorator;

pub const SORTABLE_CLASS: &str = "sortable";
pub const SORT_COLUMN_ATTR: &str = "sort_column";

const STATE_CLASSES: [SortDirection; 3] = [
    SortDirection::Ascending,
    SortDirection::Descending,
    SortDirection::Unsorted,
];

/// Marks state with `sortable` plus `sort_asc`/`sort_desc`/`unsorted` and
/// records the priority in a `sort_column` attribute. The label is untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassDecorator;

impl HeaderDecorator for ClassDecorator {
    fn decorate(
        &self,
        cell: &mut HeaderCell,
        link: &str,
        state: SortDirection,
        priority: Option<usize>,
    ) {
        cell.link = Some(link.to_string());
        for stale in STATE_CLASSES {
            cell.classes.remove(stale.css_class());
        }
        cell.classes.insert(SORTABLE_CLASS.to_string());
        cell.classes.insert(state.css_class().to_string());
        match priority {
            Some(priority) => {
                cell.attributes
                    .insert(SORT_COLUMN_ATTR.to_string(), priority.to_string());
            }
            None => {
                cell.attributes.remove(SORT_COLUMN_ATTR);
            }
        }
    }
}

/// Appends `<priority>▲` or `<priority>▼` to the label of sorted columns.
#[derive(Debug, Clone, Copy, Default)]
pub struct SuffixDecorator;

impl HeaderDecorator for SuffixDecorator {
    fn decorate(
        &self,
        cell: &mut HeaderCell,
        link: &str,
        state: SortDirection,
        priority: Option<usize>,
    ) {
        cell.link = Some(link.to_string());
        cell.suffix = match (priority, state.arrow()) {
            (Some(priority), Some(arrow)) => Some(format!("{priority}{arrow}")),
            _ => None,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_decorator_marks_state_and_priority() {
        let mut cell = HeaderCell::new("Title");

        ClassDecorator.decorate(&mut cell, "/?o=-1", SortDirection::Ascending, Some(1));

        assert_eq!(cell.link.as_deref(), Some("/?o=-1"));
        assert_eq!(cell.class_list(), "sort_asc sortable");
        assert_eq!(cell.attributes.get(SORT_COLUMN_ATTR).map(String::as_str), Some("1"));
        assert_eq!(cell.display_label(), "Title", "label should be untouched");
    }

    #[test]
    fn class_decorator_replaces_previous_state() {
        let mut cell = HeaderCell::new("Title");
        ClassDecorator.decorate(&mut cell, "/?o=-1", SortDirection::Ascending, Some(1));

        ClassDecorator.decorate(&mut cell, "/?o=1", SortDirection::Unsorted, None);

        assert_eq!(cell.class_list(), "sortable unsorted");
        assert!(cell.attributes.is_empty(), "priority attribute should be cleared");
    }

    #[test]
    fn suffix_decorator_appends_priority_and_arrow() {
        let mut asc = HeaderCell::new("Title");
        SuffixDecorator.decorate(&mut asc, "/?o=-1", SortDirection::Ascending, Some(1));
        assert_eq!(asc.display_label(), "Title 1▲");

        let mut desc = HeaderCell::new("Year");
        SuffixDecorator.decorate(&mut desc, "/?o=", SortDirection::Descending, Some(2));
        assert_eq!(desc.display_label(), "Year 2▼");
        assert!(desc.classes.is_empty(), "suffix variant should not add classes");
    }

    #[test]
    fn suffix_decorator_leaves_unsorted_label_alone() {
        let mut cell = HeaderCell::new("Author");
        SuffixDecorator.decorate(&mut cell, "/?o=3", SortDirection::Unsorted, None);

        assert_eq!(cell.display_label(), "Author");
        assert_eq!(cell.link.as_deref(), Some("/?o=3"));
    }
}
