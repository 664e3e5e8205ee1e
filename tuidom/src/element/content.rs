#[derive(Debug, Clone, Default, PartialEq)]
pub enum Content {
    #[default]
    None,
    Text(String),
    Children(Vec<super::Element>),
    /// Single-line text field. The value is owned by the document so that
    /// the host and the widget read the same text.
    TextInput {
        value: String,
        placeholder: Option<String>,
    },
}
