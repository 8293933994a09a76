//! Element tree the widget renders into.
//!
//! Hosts inspect the tree, dispatch clicks by element id, or serialise it
//! with [`Element::to_html`].

mod content;
mod node;

pub use content::Content;
pub use node::Element;

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    for child in root.child_elements() {
        if let Some(found) = find_element(child, id) {
            return Some(found);
        }
    }

    None
}

/// Chain of elements from `root` down to the element with `id`, both inclusive.
pub fn path_to<'a>(root: &'a Element, id: &str) -> Option<Vec<&'a Element>> {
    if root.id == id {
        return Some(vec![root]);
    }

    for child in root.child_elements() {
        if let Some(mut path) = path_to(child, id) {
            path.insert(0, root);
            return Some(path);
        }
    }

    None
}

/// All elements carrying `class`, in document order.
pub fn find_by_class<'a>(root: &'a Element, class: &str) -> Vec<&'a Element> {
    let mut found = Vec::new();
    collect_by_class(root, class, &mut found);
    found
}

fn collect_by_class<'a>(el: &'a Element, class: &str, found: &mut Vec<&'a Element>) {
    if el.has_class(class) {
        found.push(el);
    }
    for child in el.child_elements() {
        collect_by_class(child, class, found);
    }
}

/// Deepest descendant of `root` (excluding `root`) whose text contains `needle`.
///
/// Matching is case-sensitive, like a `:contains` selector.
pub fn deepest_containing<'a>(root: &'a Element, needle: &str) -> Option<&'a Element> {
    root.child_elements()
        .iter()
        .find(|child| child.text_content().contains(needle))
        .map(|child| deepest_containing(child, needle).unwrap_or(child))
}
