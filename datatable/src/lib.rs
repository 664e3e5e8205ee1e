//! Client-side filtering, sorting, and pagination for rendered tables.
//!
//! A [`DataTable`] is built once from a [`RowIndex`] and keeps a single
//! [`QueryState`]. User input becomes a [`Transition`]; each transition is
//! reduced into a new state and followed by a full render into a
//! [`RenderSink`]:
//!
//! - Row index: one-time extraction of field text per row
//! - Query evaluation: stable sort, token filter, page window
//! - Pagination: page count and the compressed pager strip
//! - Render sink: idempotent writes of rows, header indicator, and pager
//!
//! [`document::DocumentTable`] binds all of this to a `tuidom` document.
//!
//! # Example
//!
//! ```ignore
//! use datatable::prelude::*;
//!
//! let index = RowIndex::build(songs, |song| vec![song.artist.clone(), song.title.clone()]);
//! let mut table = DataTable::new(index, TableConfig::default().page_size(25))?;
//! let mut sink = RecordingSink::new();
//!
//! table.apply(Transition::SetFilter("queen".into()), &mut sink);
//! table.apply(Transition::ToggleSort(1), &mut sink);
//! ```

pub mod actions;
pub mod collate;
pub mod config;
pub mod document;
pub mod pagination;
pub mod query;
pub mod row_index;
pub mod sink;
pub mod widget;

pub use config::{ConfigError, PageOverflow, TableConfig};
pub use pagination::{Control, page_count, plan};
pub use query::{
    Filter, Paging, QueryState, SortDirection, SortState, Transition, evaluate, match_count,
    matching, reduce,
};
pub use row_index::{Row, RowIndex};
pub use sink::{RecordingSink, RenderSink};
pub use widget::{DataTable, TableId};

pub mod prelude {
    pub use crate::config::{PageOverflow, TableConfig};
    pub use crate::document::DocumentTable;
    pub use crate::pagination::Control;
    pub use crate::query::{QueryState, SortDirection, SortState, Transition};
    pub use crate::row_index::{Row, RowIndex};
    pub use crate::sink::{RecordingSink, RenderSink};
    pub use crate::widget::DataTable;
}
