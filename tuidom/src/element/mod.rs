mod content;
mod node;

pub use content::Content;
pub use node::{Element, Tag};

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &root.content {
        for child in children {
            if let Some(found) = find_element(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// Find an element by ID in the tree, mutably.
pub fn find_element_mut<'a>(root: &'a mut Element, id: &str) -> Option<&'a mut Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &mut root.content {
        for child in children {
            if let Some(found) = find_element_mut(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// Find the first descendant (or the root itself) with the given tag.
pub fn find_by_tag(root: &Element, tag: Tag) -> Option<&Element> {
    if root.tag == tag {
        return Some(root);
    }
    root.child_elements()
        .iter()
        .find_map(|child| find_by_tag(child, tag))
}

/// Collect every element matching `predicate`, in document order.
pub fn query_all<'a>(root: &'a Element, predicate: impl Fn(&Element) -> bool) -> Vec<&'a Element> {
    let mut found = Vec::new();
    collect(root, &predicate, &mut found);
    found
}

fn collect<'a>(
    element: &'a Element,
    predicate: &impl Fn(&Element) -> bool,
    out: &mut Vec<&'a Element>,
) {
    if predicate(element) {
        out.push(element);
    }
    for child in element.child_elements() {
        collect(child, predicate, out);
    }
}

/// Concatenated text of an element and all its descendants.
///
/// Text inputs contribute nothing, matching how a document reports
/// `textContent` for form controls.
pub fn text_content(element: &Element) -> String {
    let mut text = String::new();
    push_text(element, &mut text);
    text
}

fn push_text(element: &Element, out: &mut String) {
    match &element.content {
        Content::Text(t) => out.push_str(t),
        Content::Children(children) => {
            for child in children {
                push_text(child, out);
            }
        }
        Content::None | Content::TextInput { .. } => {}
    }
}

/// Visit every element mutably, parents before children.
pub fn visit_mut(root: &mut Element, f: &mut impl FnMut(&mut Element)) {
    f(root);
    if let Content::Children(children) = &mut root.content {
        for child in children {
            visit_mut(child, f);
        }
    }
}
