use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use super::Content;

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

/// Structural role of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tag {
    #[default]
    Box,
    Text,
    Table,
    Head,
    Body,
    Foot,
    Row,
    HeaderCell,
    Cell,
    Button,
    Input,
}

impl Tag {
    fn prefix(self) -> &'static str {
        match self {
            Tag::Box => "box",
            Tag::Text => "text",
            Tag::Table => "table",
            Tag::Head => "thead",
            Tag::Body => "tbody",
            Tag::Foot => "tfoot",
            Tag::Row => "tr",
            Tag::HeaderCell => "th",
            Tag::Cell => "td",
            Tag::Button => "button",
            Tag::Input => "input",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    // Identity
    pub id: String,
    pub tag: Tag,

    // Content
    pub content: Content,

    // Presentation
    pub classes: Vec<String>,
    /// Number of table columns this cell spans.
    pub col_span: u16,

    // Interaction
    pub clickable: bool,
    /// Whether this element is disabled. Disabled elements don't receive input.
    pub disabled: bool,

    // Custom data storage (`data-*` attributes)
    pub data: HashMap<String, String>,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            tag: Tag::Box,
            content: Content::None,
            classes: Vec::new(),
            col_span: 1,
            clickable: false,
            disabled: false,
            data: HashMap::new(),
        }
    }
}

impl Element {
    fn tagged(tag: Tag) -> Self {
        Self {
            id: generate_id(tag.prefix()),
            tag,
            ..Default::default()
        }
    }

    pub fn box_() -> Self {
        Self::tagged(Tag::Box)
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: Content::Text(content.into()),
            ..Self::tagged(Tag::Text)
        }
    }

    pub fn table() -> Self {
        Self::tagged(Tag::Table)
    }

    pub fn thead() -> Self {
        Self::tagged(Tag::Head)
    }

    pub fn tbody() -> Self {
        Self::tagged(Tag::Body)
    }

    pub fn tfoot() -> Self {
        Self::tagged(Tag::Foot)
    }

    pub fn tr() -> Self {
        Self::tagged(Tag::Row)
    }

    /// Header cell with text content.
    pub fn th(content: impl Into<String>) -> Self {
        Self {
            content: Content::Text(content.into()),
            ..Self::tagged(Tag::HeaderCell)
        }
    }

    /// Data cell with text content.
    pub fn td(content: impl Into<String>) -> Self {
        Self {
            content: Content::Text(content.into()),
            ..Self::tagged(Tag::Cell)
        }
    }

    pub fn button(label: impl Into<String>) -> Self {
        Self {
            content: Content::Text(label.into()),
            clickable: true,
            ..Self::tagged(Tag::Button)
        }
    }

    /// Create a text input element.
    pub fn text_input(value: impl Into<String>) -> Self {
        Self {
            content: Content::TextInput {
                value: value.into(),
                placeholder: None,
            },
            ..Self::tagged(Tag::Input)
        }
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    // Presentation
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.add_class(class);
        self
    }

    pub fn col_span(mut self, span: u16) -> Self {
        self.col_span = span.max(1);
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn add_class(&mut self, class: impl Into<String>) {
        let class = class.into();
        if !self.has_class(&class) {
            self.classes.push(class);
        }
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    // Interaction
    pub fn clickable(mut self, clickable: bool) -> Self {
        self.clickable = clickable;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    // Text input methods

    /// Set the placeholder text for a text input.
    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        if let Content::TextInput { placeholder, .. } = &mut self.content {
            *placeholder = Some(text.into());
        }
        self
    }

    /// Current value of a text input, `None` for any other element.
    pub fn value(&self) -> Option<&str> {
        match &self.content {
            Content::TextInput { value, .. } => Some(value),
            _ => None,
        }
    }

    /// Replace the value of a text input. Returns false for other elements.
    pub fn set_value(&mut self, text: impl Into<String>) -> bool {
        if let Content::TextInput { value, .. } = &mut self.content {
            *value = text.into();
            true
        } else {
            false
        }
    }

    // Custom data
    pub fn data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    pub fn get_data(&self, key: &str) -> Option<&String> {
        self.data.get(key)
    }

    pub fn has_data(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    pub fn set_data(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.data.insert(key.into(), value.into());
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        self.push_child(child);
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            _ => self.content = Content::Children(new_children.into_iter().collect()),
        }
        self
    }

    pub fn push_child(&mut self, child: Element) {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
    }

    /// Replace all children. An empty iterator leaves the element with no content.
    pub fn set_children(&mut self, new_children: impl IntoIterator<Item = Element>) {
        let children: Vec<Element> = new_children.into_iter().collect();
        self.content = if children.is_empty() {
            Content::None
        } else {
            Content::Children(children)
        };
    }

    /// Remove and return all children, leaving the element empty.
    pub fn take_children(&mut self) -> Vec<Element> {
        match std::mem::take(&mut self.content) {
            Content::Children(children) => children,
            other => {
                self.content = other;
                Vec::new()
            }
        }
    }

    pub fn child_elements(&self) -> &[Element] {
        match &self.content {
            Content::Children(children) => children,
            _ => &[],
        }
    }

    pub fn child_elements_mut(&mut self) -> &mut [Element] {
        match &mut self.content {
            Content::Children(children) => children,
            _ => Default::default(),
        }
    }
}
