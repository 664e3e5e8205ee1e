pub mod element;
pub mod event;
pub mod render;
pub mod text;

pub use element::{
    find_by_tag, find_element, find_element_mut, query_all, text_content, visit_mut, Content,
    Element, Tag,
};
pub use event::Event;
pub use render::{render_lines, render_lines_with, render_to_string};
