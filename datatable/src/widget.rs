//! The table widget: one row index, one query state, one owner.

use std::sync::atomic::{AtomicUsize, Ordering};

use log::{debug, trace};

use crate::config::{ConfigError, TableConfig};
use crate::pagination::{self, Control};
use crate::query::{self, QueryState, Transition};
use crate::row_index::{Row, RowIndex};
use crate::sink::RenderSink;

/// Unique identifier for a DataTable instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TableId(usize);

impl TableId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for TableId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__datatable_{}", self.0)
    }
}

/// Client-side filtering, sorting, and paging over a fixed set of rows.
///
/// Every interaction goes through [`dispatch`](Self::dispatch), which
/// replaces the query state, followed by a full [`render`](Self::render).
/// Several tables can coexist; each owns its own state.
#[derive(Debug)]
pub struct DataTable<H> {
    id: TableId,
    index: RowIndex<H>,
    state: QueryState,
    config: TableConfig,
}

impl<H> DataTable<H> {
    /// Create a table over `index` in its initial state.
    pub fn new(index: RowIndex<H>, config: TableConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let state = QueryState::new(config.page_size, index.len());
        let id = TableId::new();
        debug!(
            "Created table {} with {} rows, {} pages",
            id,
            index.len(),
            state.paging().page_count()
        );
        Ok(Self {
            id,
            index,
            state,
            config,
        })
    }

    pub fn id(&self) -> TableId {
        self.id
    }

    pub fn state(&self) -> &QueryState {
        &self.state
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn index(&self) -> &RowIndex<H> {
        &self.index
    }

    pub(crate) fn index_mut(&mut self) -> &mut RowIndex<H> {
        &mut self.index
    }

    /// Apply a transition and return the new state.
    pub fn dispatch(&mut self, transition: Transition) -> &QueryState {
        trace!("Table {} dispatch {:?}", self.id, transition);
        self.state = query::reduce(
            &self.state,
            &transition,
            &self.index,
            self.config.page_overflow,
        );
        let paging = self.state.paging();
        debug!(
            "Table {} now filter={:?} sort={:?} page={}/{}",
            self.id,
            self.state.filter().text(),
            self.state.sort(),
            paging.page(),
            paging.page_count()
        );
        &self.state
    }

    /// Rows for the current page, in display order.
    pub fn view(&self) -> Vec<&Row<H>> {
        query::evaluate(&self.index, &self.state)
    }

    /// Number of rows passing the current filter, across all pages.
    pub fn match_count(&self) -> usize {
        query::match_count(&self.index, self.state.filter())
    }

    /// Pager strip for the current state.
    ///
    /// A page left past the end by [`PageOverflow::Empty`] is planned as if it
    /// were the last page, so the strip still offers a way back.
    ///
    /// [`PageOverflow::Empty`]: crate::config::PageOverflow::Empty
    pub fn controls(&self) -> Vec<Control> {
        let paging = self.state.paging();
        let pages = paging.page_count().max(paging.page() + 1);
        pagination::plan(pages, paging.page())
    }

    /// Write the current state to `sink`.
    pub fn render<S: RenderSink<H>>(&self, sink: &mut S) {
        let rows = self.view();
        trace!("Table {} rendering {} rows", self.id, rows.len());
        sink.render_rows(&rows);
        sink.render_header(self.state.sort());
        sink.render_pager(&self.controls());
    }

    /// Dispatch followed by a full render.
    pub fn apply<S: RenderSink<H>>(&mut self, transition: Transition, sink: &mut S) {
        self.dispatch(transition);
        self.render(sink);
    }
}
