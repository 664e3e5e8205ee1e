//! Table configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default number of rows shown per page.
pub const DEFAULT_PAGE_SIZE: usize = 100;

/// Default id of the table element the widget attaches to.
pub const DEFAULT_CONTAINER_ID: &str = "datatable";

/// What happens to the current page when a filter change shrinks the
/// result set below it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageOverflow {
    /// Move to the last page that still has rows.
    #[default]
    Clamp,
    /// Keep the page index and show an empty page.
    Empty,
}

/// Per-table configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Id of the table element to attach to.
    pub container_id: String,

    /// Rows per page. Must be positive.
    pub page_size: usize,

    /// Page policy when the filtered set shrinks.
    pub page_overflow: PageOverflow,

    /// Placeholder shown in the empty filter input.
    pub filter_placeholder: String,

    /// `data-*` key marking cells and headers that take part in sorting and
    /// filtering.
    pub sortable_marker: String,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            container_id: DEFAULT_CONTAINER_ID.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            page_overflow: PageOverflow::default(),
            filter_placeholder: "Filter...".to_string(),
            sortable_marker: "sortable".to_string(),
        }
    }
}

impl TableConfig {
    /// Create a config attached to the given container id.
    pub fn new(container_id: impl Into<String>) -> Self {
        Self {
            container_id: container_id.into(),
            ..Default::default()
        }
    }

    /// Set the page size.
    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Set the page overflow policy.
    pub fn page_overflow(mut self, policy: PageOverflow) -> Self {
        self.page_overflow = policy;
        self
    }

    pub fn filter_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.filter_placeholder = placeholder.into();
        self
    }

    pub fn sortable_marker(mut self, marker: impl Into<String>) -> Self {
        self.sortable_marker = marker.into();
        self
    }

    /// Check the invariants the widget relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::ZeroPageSize);
        }
        if self.container_id.trim().is_empty() {
            return Err(ConfigError::EmptyContainerId);
        }
        Ok(())
    }
}

/// Errors raised for an unusable [`TableConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Page size must be a positive integer")]
    ZeroPageSize,

    #[error("Container id must not be empty")]
    EmptyContainerId,
}
