//! Render sinks: the write boundary of a table.
//!
//! A sink receives the full result of each evaluation and replaces what it
//! showed before. Calling any method twice with the same arguments must
//! leave the same observable result.

use crate::pagination::Control;
use crate::query::SortState;
use crate::row_index::Row;

/// Destination for rendered table state.
pub trait RenderSink<H> {
    /// Replace the body with `rows`, in order, reusing each row's handle.
    fn render_rows(&mut self, rows: &[&Row<H>]);

    /// Show the sort indicator on exactly the header for `sort.column`.
    fn render_header(&mut self, sort: SortState);

    /// Replace the pager strip. An empty slice hides the pager.
    fn render_pager(&mut self, controls: &[Control]);
}

/// Headless sink that keeps the last rendered state in memory.
#[derive(Debug, Clone)]
pub struct RecordingSink<H> {
    pub rows: Vec<H>,
    pub sort: Option<SortState>,
    pub controls: Vec<Control>,
    /// Number of full render cycles seen (counted on `render_rows`).
    pub renders: usize,
}

impl<H> Default for RecordingSink<H> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            sort: None,
            controls: Vec::new(),
            renders: 0,
        }
    }
}

impl<H> RecordingSink<H> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<H: Clone> RenderSink<H> for RecordingSink<H> {
    fn render_rows(&mut self, rows: &[&Row<H>]) {
        self.rows = rows.iter().map(|row| row.handle().clone()).collect();
        self.renders += 1;
    }

    fn render_header(&mut self, sort: SortState) {
        self.sort = Some(sort);
    }

    fn render_pager(&mut self, controls: &[Control]) {
        self.controls = controls.to_vec();
    }
}
