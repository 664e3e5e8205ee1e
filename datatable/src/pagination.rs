//! Pagination controller: page count and the compressed pager strip.
//!
//! The strip never shows more than five page buttons. Small page counts list
//! every page; larger ones show a window around the current page with
//! ellipsis markers for the hidden ranges.

use crate::query::Transition;

/// Page counts up to this size list every page.
const FULL_STRIP_MAX: usize = 5;

/// Number of page buttons shown next to a single ellipsis.
const EDGE_BUTTONS: usize = 4;

/// One element of the pager strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Go back one page. `page` is the target index.
    Prev { page: usize, disabled: bool },
    /// Go forward one page. `page` is the target index.
    Next { page: usize, disabled: bool },
    /// Jump to a zero-based page index.
    Page { index: usize, active: bool },
    /// Inert marker for a hidden range of pages.
    Ellipsis,
}

impl Control {
    /// Text shown on the control. Page buttons are labelled 1-based.
    pub fn label(&self) -> String {
        match self {
            Control::Prev { .. } => "<".to_string(),
            Control::Next { .. } => ">".to_string(),
            Control::Page { index, .. } => (index + 1).to_string(),
            Control::Ellipsis => "...".to_string(),
        }
    }

    /// Page index activating this control moves to, if it is interactive.
    pub fn target(&self) -> Option<usize> {
        match *self {
            Control::Prev { page, disabled } | Control::Next { page, disabled } => {
                (!disabled).then_some(page)
            }
            Control::Page { index, .. } => Some(index),
            Control::Ellipsis => None,
        }
    }

    /// Transition issued when the control is activated.
    pub fn transition(&self) -> Option<Transition> {
        self.target().map(Transition::SetPage)
    }

    pub fn is_disabled(&self) -> bool {
        self.target().is_none()
    }
}

/// Number of pages `row_count` rows occupy.
pub fn page_count(row_count: usize, page_size: usize) -> usize {
    row_count.div_ceil(page_size.max(1))
}

/// Build the pager strip for `page_count` pages with `current` selected.
///
/// Returns nothing when there is at most one page.
pub fn plan(page_count: usize, current: usize) -> Vec<Control> {
    if page_count <= 1 {
        return Vec::new();
    }

    let mut controls = vec![Control::Prev {
        page: current.saturating_sub(1),
        disabled: current == 0,
    }];
    let page = |index: usize| Control::Page {
        index,
        active: index == current,
    };

    if page_count <= FULL_STRIP_MAX {
        controls.extend((0..page_count).map(page));
    } else if current < EDGE_BUTTONS {
        controls.extend((0..EDGE_BUTTONS).map(page));
        controls.push(Control::Ellipsis);
    } else if current >= page_count - EDGE_BUTTONS {
        controls.push(Control::Ellipsis);
        controls.extend((page_count - EDGE_BUTTONS..page_count).map(page));
    } else {
        controls.push(Control::Ellipsis);
        controls.extend((current - 1..=current + 1).map(page));
        controls.push(Control::Ellipsis);
    }

    controls.push(Control::Next {
        page: current + 1,
        disabled: current + 1 == page_count,
    });
    controls
}
