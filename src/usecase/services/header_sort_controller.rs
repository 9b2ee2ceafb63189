use std::collections::HashSet;

use tracing::debug;

use crate::domain::entities::ordering::{ColumnIndex, OrderingToken, SortDirection, SortableSet};
use crate::usecase::ports::header::{HeaderCells, HeaderDecorator, LinkSink};
use crate::usecase::services::ordering_codec::{next_token, parse};

/// What a single sortable header shows and where clicking it leads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderPlan {
    pub column: ColumnIndex,
    pub state: SortDirection,
    pub priority: Option<usize>,
    pub next_token: OrderingToken,
}

/// Everything one header pass reads.
pub struct SortContext<'a> {
    pub token: OrderingToken,
    pub sortable: SortableSet,
    pub links: &'a dyn LinkSink,
    pub decorator: &'a dyn HeaderDecorator,
}

pub struct HeaderSortController<'a> {
    context: SortContext<'a>,
}

impl<'a> HeaderSortController<'a> {
    pub fn new(context: SortContext<'a>) -> Self {
        Self { context }
    }

    /// Decorates every sortable header in `cells`. Only the token, the
    /// sortable set and the header count are read, so calling this again
    /// on the same inputs produces the same cells.
    pub fn apply(&self, cells: &mut dyn HeaderCells) -> Vec<HeaderPlan> {
        let plans = plan_headers(
            &self.context.token,
            &self.context.sortable,
            cells.header_count(),
        );

        for plan in &plans {
            let Some(cell) = cells.header_mut(plan.column.0) else {
                continue;
            };
            let link = self.context.links.link_for(&plan.next_token);
            debug!(
                column = plan.column.0,
                state = ?plan.state,
                priority = ?plan.priority,
                next = %plan.next_token,
                "decorating sortable header"
            );
            self.context
                .decorator
                .decorate(cell, &link, plan.state, plan.priority);
        }

        plans
    }
}

/// Plans every sortable header: columns named in the token first, in token
/// order, then the remaining sortable columns as unsorted.
pub fn plan_headers(
    token: &OrderingToken,
    sortable: &SortableSet,
    header_count: usize,
) -> Vec<HeaderPlan> {
    let mut handled = HashSet::new();
    let mut plans = Vec::new();

    for (idx, spec) in parse(token).iter().enumerate() {
        let Some(column) = spec.column() else {
            debug!(spec = spec.raw(), "ignoring malformed sort spec");
            continue;
        };
        if !handled.insert(column) {
            continue;
        }
        if !sortable.contains(column) || column.0 >= header_count {
            continue;
        }

        let state = spec.direction();
        plans.push(HeaderPlan {
            column,
            state,
            priority: Some(idx + 1),
            next_token: next_token(token, column, state.next()),
        });
    }

    for position in 0..header_count {
        let column = ColumnIndex(position);
        if handled.contains(&column) || !sortable.contains(column) {
            continue;
        }
        plans.push(HeaderPlan {
            column,
            state: SortDirection::Unsorted,
            priority: None,
            next_token: next_token(token, column, SortDirection::Ascending),
        });
    }

    plans
}
