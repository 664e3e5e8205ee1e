//! The query model: state, evaluation, and the transition reducer.

mod evaluate;
mod reducer;
mod state;

pub use evaluate::{evaluate, match_count, matching};
pub use reducer::{Transition, reduce};
pub use state::{Filter, Paging, QueryState, SortDirection, SortState};
