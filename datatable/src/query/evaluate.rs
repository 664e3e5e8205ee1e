//! Pure evaluation of a query against a row index.
//!
//! Order is fixed: stable sort of the whole index, then the token filter,
//! then the page window.

use crate::collate;
use crate::row_index::{Row, RowIndex};

use super::state::{Filter, QueryState, SortDirection, SortState};

/// Rows to display for `state`, in display order.
///
/// A page past the end of the filtered rows yields an empty result.
pub fn evaluate<'a, H>(index: &'a RowIndex<H>, state: &QueryState) -> Vec<&'a Row<H>> {
    let paging = state.paging();
    matching(index, state)
        .into_iter()
        .skip(paging.start())
        .take(paging.page_size())
        .collect()
}

/// Every row passing the filter, sorted, before the page window is applied.
pub fn matching<'a, H>(index: &'a RowIndex<H>, state: &QueryState) -> Vec<&'a Row<H>> {
    let filter = state.filter();
    sorted(index, state.sort())
        .into_iter()
        .filter(|row| passes(row, filter))
        .collect()
}

/// Number of rows passing `filter`. Sorting does not affect the count.
pub fn match_count<H>(index: &RowIndex<H>, filter: &Filter) -> usize {
    index.iter().filter(|row| passes(row, filter)).count()
}

fn passes<H>(row: &Row<H>, filter: &Filter) -> bool {
    filter.is_empty() || row.matches(filter.tokens())
}

fn sorted<H>(index: &RowIndex<H>, sort: SortState) -> Vec<&Row<H>> {
    let mut rows: Vec<&Row<H>> = index.iter().collect();
    // `sort_by` is stable, so equal keys keep index order in both directions.
    rows.sort_by(|a, b| {
        let ordering = collate::compare(a.field(sort.column), b.field(sort.column));
        match sort.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
    rows
}
