//! Attaching a table to a `tuidom` document.
//!
//! The document is read once when mounting: body rows are moved into the
//! row index and the filter input and pager footer are added. After that the
//! widget only writes to it through [`DocumentSink`].
//!
//! # Expected structure
//!
//! ```text
//! table#datatable
//!   thead > tr > th[data-sortable]...
//!   tbody > tr > td[data-sortable]...
//! ```
//!
//! # Example
//!
//! ```ignore
//! let mut root = build_song_table(&songs);
//! if let Some(mut table) = DocumentTable::mount(&mut root, TableConfig::default())? {
//!     table.handle_event(&mut root, &Event::change(table.filter_id(), "queen"));
//! }
//! ```

mod sink;

use std::collections::HashMap;

use log::{debug, trace};
use tuidom::{
    Element, Event, Tag, find_by_tag, find_element, find_element_mut, query_all, text_content,
    visit_mut,
};

use crate::config::{ConfigError, TableConfig};
use crate::query::Transition;
use crate::row_index::RowIndex;
use crate::widget::DataTable;

pub use sink::DocumentSink;

/// Class on the header cell sorted ascending.
pub const SORT_ASC_CLASS: &str = "table-sort--asc";
/// Class on the header cell sorted descending.
pub const SORT_DESC_CLASS: &str = "table-sort--desc";
/// Class on the filter input.
pub const FILTER_CLASS: &str = "input";
/// Class on the pager strip container.
pub const PAGING_CLASS: &str = "table-paging";
/// Class on every pager button.
pub const PAGING_BUTTON_CLASS: &str = "table-paging__btn";
/// Extra class on the button for the current page.
pub const PAGING_ACTIVE_CLASS: &str = "table-paging__btn--active";

/// Data key on sortable headers holding their field column.
pub const DATA_SORT_COLUMN: &str = "sort-column";
/// Data key on pager buttons holding their target page.
pub const DATA_PAGE: &str = "page";

/// Ids of the document elements a mounted table reads and writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentIds {
    pub container: String,
    pub head: String,
    pub body: String,
    pub filter: String,
    pub pager: String,
    /// Sortable header cells, indexed by field column.
    pub headers: Vec<String>,
}

/// A [`DataTable`] bound to a table element in a document.
#[derive(Debug)]
pub struct DocumentTable {
    table: DataTable<Element>,
    ids: DocumentIds,
}

impl DocumentTable {
    /// Activate the table inside `root` and render its initial state.
    ///
    /// Returns `Ok(None)` and leaves the document untouched when the
    /// container, its header, or its body is missing, or the body has no
    /// rows.
    pub fn mount(root: &mut Element, config: TableConfig) -> Result<Option<Self>, ConfigError> {
        config.validate()?;

        let Some(container) = find_element_mut(root, &config.container_id) else {
            debug!("No element {:?}, table not activated", config.container_id);
            return Ok(None);
        };
        let head_id = find_by_tag(container, Tag::Head).map(|e| e.id.clone());
        let body_id = find_by_tag(container, Tag::Body).map(|e| e.id.clone());
        let (Some(head_id), Some(body_id)) = (head_id, body_id) else {
            debug!("Table {:?} has no header or body", config.container_id);
            return Ok(None);
        };
        let Some(body) = find_element_mut(container, &body_id) else {
            return Ok(None);
        };
        if !body.child_elements().iter().any(|e| e.tag == Tag::Row) {
            debug!("Table {:?} has no body rows", config.container_id);
            return Ok(None);
        }

        let marker = config.sortable_marker.clone();
        let source = body.take_children().into_iter().filter(|e| e.tag == Tag::Row);
        let index = RowIndex::build(source, |row| extract_fields(row, &marker));

        let container_id = config.container_id.clone();
        let placeholder = config.filter_placeholder.clone();
        let table = DataTable::new(index, config)?;
        let filter_id = format!("{}-filter", table.id());
        let pager_id = format!("{}-pager", table.id());

        let Some(head) = find_element_mut(container, &head_id) else {
            return Ok(None);
        };
        let column_count = query_all(head, |e| e.tag == Tag::HeaderCell).len();
        let span = u16::try_from(column_count).unwrap_or(u16::MAX);
        let headers = tag_sortable_headers(head, &marker);
        head.push_child(
            Element::tr().child(
                Element::th("").col_span(span).child(
                    Element::text_input("")
                        .id(filter_id.clone())
                        .class(FILTER_CLASS)
                        .placeholder(placeholder),
                ),
            ),
        );
        container.push_child(
            Element::tfoot()
                .child(Element::tr().child(Element::td("").id(pager_id.clone()).col_span(span))),
        );

        let ids = DocumentIds {
            container: container_id,
            head: head_id,
            body: body_id,
            filter: filter_id,
            pager: pager_id,
            headers,
        };
        debug!(
            "Mounted table {} on {:?}: {} rows, {} sortable columns",
            table.id(),
            ids.container,
            table.index().len(),
            ids.headers.len()
        );

        let mounted = Self { table, ids };
        mounted.render(root);
        Ok(Some(mounted))
    }

    pub fn table(&self) -> &DataTable<Element> {
        &self.table
    }

    pub fn ids(&self) -> &DocumentIds {
        &self.ids
    }

    /// Id of the filter input.
    pub fn filter_id(&self) -> &str {
        &self.ids.filter
    }

    /// Id of the header cell that sorts by `column`.
    pub fn header_id(&self, column: usize) -> Option<&str> {
        self.ids.headers.get(column).map(String::as_str)
    }

    /// Route a document event to the table.
    ///
    /// Returns true when the event produced a transition (and a re-render).
    pub fn handle_event(&mut self, root: &mut Element, event: &Event) -> bool {
        let Some(transition) = self.transition_for(root, event) else {
            trace!("Table {} ignored {:?}", self.table.id(), event);
            return false;
        };
        self.apply(root, transition);
        true
    }

    /// Dispatch a transition and re-render the document.
    ///
    /// Rows currently shown are copied back into the index first, so changes
    /// the host made to them survive being filtered or paged out.
    pub fn apply(&mut self, root: &mut Element, transition: Transition) {
        self.sync_rows(root);
        if let Transition::SetFilter(text) = &transition {
            if let Some(input) = find_element_mut(root, &self.ids.filter) {
                input.set_value(text.as_str());
            }
        }
        self.table.dispatch(transition);
        self.render(root);
    }

    /// Write the current state into the document.
    pub fn render(&self, root: &mut Element) {
        let mut sink = DocumentSink::new(root, &self.ids);
        self.table.render(&mut sink);
    }

    fn sync_rows(&mut self, root: &Element) {
        let Some(body) = find_element(root, &self.ids.body) else {
            return;
        };
        let mut shown: HashMap<&str, &Element> = body
            .child_elements()
            .iter()
            .map(|row| (row.id.as_str(), row))
            .collect();
        if shown.is_empty() {
            return;
        }
        for handle in self.table.index_mut().handles_mut() {
            if let Some(live) = shown.remove(handle.id.as_str()) {
                *handle = live.clone();
            }
        }
    }

    fn transition_for(&self, root: &Element, event: &Event) -> Option<Transition> {
        match event {
            Event::Change { target, text } if *target == self.ids.filter => {
                Some(Transition::SetFilter(text.clone()))
            }
            Event::Click { target } => {
                if self.ids.headers.contains(target) {
                    let header = find_element(root, target)?;
                    let column = header.get_data(DATA_SORT_COLUMN)?.parse().ok()?;
                    return Some(Transition::ToggleSort(column));
                }
                let pager = find_element(root, &self.ids.pager)?;
                let button = find_element(pager, target)?;
                if button.disabled {
                    return None;
                }
                let page = button.get_data(DATA_PAGE)?.parse().ok()?;
                Some(Transition::SetPage(page))
            }
            _ => None,
        }
    }
}

/// Trimmed text of every marked cell in a row, in document order.
fn extract_fields(row: &Element, marker: &str) -> Vec<String> {
    query_all(row, |e| e.has_data(marker))
        .into_iter()
        .map(|cell| text_content(cell).trim().to_string())
        .collect()
}

/// Number the marked header cells by field column and make them clickable.
fn tag_sortable_headers(head: &mut Element, marker: &str) -> Vec<String> {
    let mut ids = Vec::new();
    visit_mut(head, &mut |element| {
        if element.tag == Tag::HeaderCell && element.has_data(marker) {
            element.set_data(DATA_SORT_COLUMN, ids.len().to_string());
            element.clickable = true;
            ids.push(element.id.clone());
        }
    });
    ids
}
