//! State transitions.
//!
//! Every user interaction maps to exactly one [`Transition`]. [`reduce`] is
//! synchronous and total: any transition applied to any state yields a valid
//! state.

use crate::config::PageOverflow;
use crate::row_index::RowIndex;

use super::evaluate::match_count;
use super::state::{Filter, QueryState, SortState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Replace the filter text.
    SetFilter(String),
    /// Flip direction on the current sort column, or sort ascending by a new one.
    ToggleSort(usize),
    /// Go to a page, clamped to the valid range.
    SetPage(usize),
}

/// Apply `transition` to `state`, returning the next state.
///
/// Only the field the transition names changes. The one exception is
/// `SetFilter`, which recomputes the page count and, under
/// [`PageOverflow::Clamp`], pulls the page back into range.
pub fn reduce<H>(
    state: &QueryState,
    transition: &Transition,
    index: &RowIndex<H>,
    overflow: PageOverflow,
) -> QueryState {
    match transition {
        Transition::SetFilter(text) => {
            let filter = Filter::parse(text.as_str());
            let paging = state.paging();
            let page_count = match_count(index, &filter).div_ceil(paging.page_size());
            let mut paging = paging.with_page_count(page_count);
            if overflow == PageOverflow::Clamp {
                paging = paging.with_page(paging.page().min(paging.last_page()));
            }
            state.clone().with_parsed_filter(filter).with_paging(paging)
        }
        Transition::ToggleSort(column) => {
            let current = state.sort();
            let sort = if current.column == *column {
                SortState {
                    column: *column,
                    direction: current.direction.flipped(),
                }
            } else {
                SortState::asc(*column)
            };
            state.clone().with_sort(sort)
        }
        Transition::SetPage(page) => {
            let paging = state.paging();
            state.clone().with_page((*page).min(paging.last_page()))
        }
    }
}
