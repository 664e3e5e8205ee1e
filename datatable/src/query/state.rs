//! Query state: filter text, sort column/direction, and the page window.

/// Sort direction for a column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortDirection {
    /// Ascending order (A-Z, 0-9).
    #[default]
    Ascending,
    /// Descending order (Z-A, 9-0).
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Which field column rows are ordered by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SortState {
    pub column: usize,
    pub direction: SortDirection,
}

impl SortState {
    pub fn asc(column: usize) -> Self {
        Self {
            column,
            direction: SortDirection::Ascending,
        }
    }

    pub fn desc(column: usize) -> Self {
        Self {
            column,
            direction: SortDirection::Descending,
        }
    }
}

/// Parsed filter text.
///
/// The raw text is kept for display; matching uses the lowercase,
/// whitespace-separated tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    text: String,
    tokens: Vec<String>,
}

impl Filter {
    pub fn parse(text: impl Into<String>) -> Self {
        let text = text.into();
        let tokens = text.split_whitespace().map(str::to_lowercase).collect();
        Self { text, tokens }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// An empty filter passes every row.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Page window over the filtered rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paging {
    page_size: usize,
    page: usize,
    page_count: usize,
}

impl Paging {
    /// Paging for `row_count` rows, starting on the first page.
    ///
    /// A zero page size is raised to one; configs are validated before this.
    pub fn new(page_size: usize, row_count: usize) -> Self {
        let page_size = page_size.max(1);
        Self {
            page_size,
            page: 0,
            page_count: row_count.div_ceil(page_size),
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Zero-based index of the current page.
    pub fn page(&self) -> usize {
        self.page
    }

    /// Number of pages the filtered rows occupy. Zero when nothing matches.
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Highest page index that `page` may legally hold.
    pub fn last_page(&self) -> usize {
        self.page_count.max(1) - 1
    }

    /// Index of the first row in the window.
    pub fn start(&self) -> usize {
        self.page_size.saturating_mul(self.page)
    }

    pub(crate) fn with_page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    pub(crate) fn with_page_count(mut self, page_count: usize) -> Self {
        self.page_count = page_count;
        self
    }
}

/// The full query a table is showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    filter: Filter,
    sort: SortState,
    paging: Paging,
}

impl QueryState {
    /// Initial state: no filter, first column ascending, first page.
    pub fn new(page_size: usize, row_count: usize) -> Self {
        Self {
            filter: Filter::default(),
            sort: SortState::default(),
            paging: Paging::new(page_size, row_count),
        }
    }

    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    pub fn sort(&self) -> SortState {
        self.sort
    }

    pub fn paging(&self) -> Paging {
        self.paging
    }

    /// Replace the filter without recomputing the page count.
    ///
    /// Use [`reduce`](super::reduce) to keep the paging consistent.
    pub fn with_filter(mut self, text: impl Into<String>) -> Self {
        self.filter = Filter::parse(text);
        self
    }

    pub fn with_sort(mut self, sort: SortState) -> Self {
        self.sort = sort;
        self
    }

    /// Jump to a page without clamping.
    pub fn with_page(mut self, page: usize) -> Self {
        self.paging = self.paging.with_page(page);
        self
    }

    pub(crate) fn with_parsed_filter(mut self, filter: Filter) -> Self {
        self.filter = filter;
        self
    }

    pub(crate) fn with_paging(mut self, paging: Paging) -> Self {
        self.paging = paging;
        self
    }
}
