use std::collections::HashMap;

use log::warn;
use tuidom::{Element, find_element_mut};

use crate::pagination::Control;
use crate::query::{SortDirection, SortState};
use crate::row_index::Row;
use crate::sink::RenderSink;

use super::{
    DATA_PAGE, DocumentIds, PAGING_ACTIVE_CLASS, PAGING_BUTTON_CLASS, PAGING_CLASS,
    SORT_ASC_CLASS, SORT_DESC_CLASS,
};

/// Writes table state into a mounted document.
pub struct DocumentSink<'a> {
    root: &'a mut Element,
    ids: &'a DocumentIds,
}

impl<'a> DocumentSink<'a> {
    pub fn new(root: &'a mut Element, ids: &'a DocumentIds) -> Self {
        Self { root, ids }
    }
}

impl RenderSink<Element> for DocumentSink<'_> {
    fn render_rows(&mut self, rows: &[&Row<Element>]) {
        let Some(body) = find_element_mut(self.root, &self.ids.body) else {
            warn!("Table body {:?} missing from document", self.ids.body);
            return;
        };
        // Rows already in the body are moved, not replaced by the index copy.
        let mut shown: HashMap<String, Element> = body
            .take_children()
            .into_iter()
            .map(|row| (row.id.clone(), row))
            .collect();
        body.set_children(rows.iter().map(|row| {
            let handle = row.handle();
            shown.remove(&handle.id).unwrap_or_else(|| handle.clone())
        }));
    }

    fn render_header(&mut self, sort: SortState) {
        for (column, id) in self.ids.headers.iter().enumerate() {
            let Some(header) = find_element_mut(self.root, id) else {
                continue;
            };
            header.remove_class(SORT_ASC_CLASS);
            header.remove_class(SORT_DESC_CLASS);
            if column == sort.column {
                header.add_class(match sort.direction {
                    SortDirection::Ascending => SORT_ASC_CLASS,
                    SortDirection::Descending => SORT_DESC_CLASS,
                });
            }
        }
    }

    fn render_pager(&mut self, controls: &[Control]) {
        let ids = self.ids;
        let Some(cell) = find_element_mut(self.root, &ids.pager) else {
            warn!("Pager {:?} missing from document", ids.pager);
            return;
        };
        if controls.is_empty() {
            cell.set_children(Vec::new());
            return;
        }

        let strip = Element::box_()
            .id(format!("{}-strip", ids.pager))
            .class(PAGING_CLASS)
            .children(
                controls
                    .iter()
                    .enumerate()
                    .map(|(position, control)| pager_button(&ids.pager, position, control)),
            );
        cell.set_children([strip]);
    }
}

fn pager_button(pager_id: &str, position: usize, control: &Control) -> Element {
    let mut button = Element::button(control.label())
        .id(format!("{pager_id}-btn-{position}"))
        .class(PAGING_BUTTON_CLASS)
        .disabled(control.is_disabled());
    if let Control::Page { active: true, .. } = control {
        button.add_class(PAGING_ACTIVE_CLASS);
    }
    if let Some(page) = control.target() {
        button.set_data(DATA_PAGE, page.to_string());
    }
    button
}
