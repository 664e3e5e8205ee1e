//! One-time extraction of sortable/filterable text from source rows.

/// One record: its extracted field values plus a handle back to the
/// renderable unit it came from.
///
/// The handle is only ever handed back to a render sink. Sorting and
/// filtering never look at it.
#[derive(Debug, Clone)]
pub struct Row<H> {
    handle: H,
    fields: Vec<String>,
    /// Lowercased copies of `fields`, used for filtering.
    folded: Vec<String>,
}

impl<H> Row<H> {
    /// Create a row. Field values are trimmed.
    pub fn new(handle: H, fields: impl IntoIterator<Item = impl AsRef<str>>) -> Self {
        let fields: Vec<String> = fields
            .into_iter()
            .map(|f| f.as_ref().trim().to_string())
            .collect();
        let folded = fields.iter().map(|f| f.to_lowercase()).collect();
        Self {
            handle,
            fields,
            folded,
        }
    }

    pub fn handle(&self) -> &H {
        &self.handle
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Value of a column, or the empty string when the row has no such column.
    pub fn field(&self, column: usize) -> &str {
        self.fields.get(column).map(String::as_str).unwrap_or("")
    }

    /// True if every token is a substring of at least one field.
    ///
    /// Tokens must already be lowercase.
    pub fn matches(&self, tokens: &[String]) -> bool {
        tokens
            .iter()
            .all(|token| self.folded.iter().any(|field| field.contains(token.as_str())))
    }
}

/// The fixed, ordered sequence of rows a table works on.
///
/// Built once; sorting and filtering never reorder or mutate it.
#[derive(Debug, Clone)]
pub struct RowIndex<H> {
    rows: Vec<Row<H>>,
}

impl<H> Default for RowIndex<H> {
    fn default() -> Self {
        Self { rows: Vec::new() }
    }
}

impl<H> RowIndex<H> {
    /// Build an index from source units in their natural order, using
    /// `extract` to pull the sortable column values out of each one.
    pub fn build<I, F>(source_rows: I, mut extract: F) -> Self
    where
        I: IntoIterator<Item = H>,
        F: FnMut(&H) -> Vec<String>,
    {
        let rows = source_rows
            .into_iter()
            .map(|unit| {
                let fields = extract(&unit);
                Row::new(unit, fields)
            })
            .collect();
        Self { rows }
    }

    /// Wrap already-built rows.
    pub fn from_rows(rows: Vec<Row<H>>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Row<H>] {
        &self.rows
    }

    pub fn get(&self, index: usize) -> Option<&Row<H>> {
        self.rows.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Row<H>> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Replace handles in place. Extracted fields are left untouched.
    pub(crate) fn handles_mut(&mut self) -> impl Iterator<Item = &mut H> {
        self.rows.iter_mut().map(|row| &mut row.handle)
    }

    /// Consume the index and give back the source units in original order.
    pub fn into_handles(self) -> Vec<H> {
        self.rows.into_iter().map(|row| row.handle).collect()
    }
}

impl<'a, H> IntoIterator for &'a RowIndex<H> {
    type Item = &'a Row<H>;
    type IntoIter = std::slice::Iter<'a, Row<H>>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
