use crate::domain::entities::header::HeaderCell;
use crate::domain::entities::ordering::{OrderingToken, SortDirection};

/// Positional access to the cells tagged as column headers.
pub trait HeaderCells {
    fn header_count(&self) -> usize;
    fn header_mut(&mut self, position: usize) -> Option<&mut HeaderCell>;
}

impl HeaderCells for Vec<HeaderCell> {
    fn header_count(&self) -> usize {
        self.len()
    }

    fn header_mut(&mut self, position: usize) -> Option<&mut HeaderCell> {
        self.get_mut(position)
    }
}

/// Turns an ordering token into the href a header links to.
pub trait LinkSink {
    fn link_for(&self, token: &OrderingToken) -> String;
}

/// Presentation of a sortable header. `state` is the column's current
/// direction and `priority` its 1-based position in the token, if any.
pub trait HeaderDecorator {
    fn decorate(
        &self,
        cell: &mut HeaderCell,
        link: &str,
        state: SortDirection,
        priority: Option<usize>,
    );
}
