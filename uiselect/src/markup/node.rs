use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use super::Content;

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    // Identity
    pub id: String,
    pub tag: &'static str,
    pub classes: Vec<String>,

    // Content
    pub content: Content,

    // State
    /// Hidden elements stay in the tree but are not shown.
    pub hidden: bool,
    pub clickable: bool,
    /// Whether this element is disabled. Disabled elements don't receive input.
    pub disabled: bool,

    // Custom data storage (actions, row indices)
    pub data: HashMap<String, String>,
}

impl Default for Element {
    fn default() -> Self {
        Self::with_id("el", "div")
    }
}

impl Element {
    /// Empty element with a fresh generated id.
    fn with_id(prefix: &str, tag: &'static str) -> Self {
        Self {
            id: generate_id(prefix),
            tag,
            classes: Vec::new(),
            content: Content::None,
            hidden: false,
            clickable: false,
            disabled: false,
            data: HashMap::new(),
        }
    }

    pub fn div() -> Self {
        Self::with_id("div", "div")
    }

    pub fn span() -> Self {
        Self::with_id("span", "span")
    }

    /// A span holding plain text.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: Content::Text(content.into()),
            ..Self::with_id("text", "span")
        }
    }

    pub fn list() -> Self {
        Self::with_id("list", "ul")
    }

    /// Create a text input element.
    pub fn input(value: impl Into<String>) -> Self {
        Self {
            content: Content::Input {
                value: value.into(),
                placeholder: None,
            },
            ..Self::with_id("input", "input")
        }
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        if !self.has_class(&class) {
            self.classes.push(class);
        }
        self
    }

    /// Add the class only when `on` is true.
    pub fn class_if(self, class: impl Into<String>, on: bool) -> Self {
        if on { self.class(class) } else { self }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    // State
    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    pub fn clickable(mut self, clickable: bool) -> Self {
        self.clickable = clickable;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set the placeholder text for a text input.
    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        if let Content::Input { placeholder, .. } = &mut self.content {
            *placeholder = Some(text.into());
        }
        self
    }

    /// Current value of a text input.
    pub fn value(&self) -> Option<&str> {
        match &self.content {
            Content::Input { value, .. } => Some(value),
            _ => None,
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

    // Children
    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            _ => self.content = Content::Children(new_children.into_iter().collect()),
        }
        self
    }

    /// Child elements, empty for text and input content.
    pub fn child_elements(&self) -> &[Element] {
        match &self.content {
            Content::Children(children) => children,
            _ => &[],
        }
    }

    /// Concatenated text of this element and all descendants, hidden ones included.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match &self.content {
            Content::Text(text) => out.push_str(text),
            Content::Children(children) => {
                for child in children {
                    child.collect_text(out);
                }
            }
            Content::None | Content::Input { .. } => {}
        }
    }

    /// Serialise the tree as HTML.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag);
        push_attr(out, "id", &self.id);
        if !self.classes.is_empty() {
            push_attr(out, "class", &self.classes.join(" "));
        }

        let mut keys: Vec<&String> = self.data.keys().collect();
        keys.sort();
        for key in keys {
            push_attr(out, &format!("data-{key}"), &self.data[key]);
        }

        if self.hidden {
            out.push_str(" hidden");
        }
        if self.disabled {
            out.push_str(" disabled");
        }

        match &self.content {
            Content::Input { value, placeholder } => {
                push_attr(out, "type", "search");
                push_attr(out, "value", value);
                if let Some(placeholder) = placeholder {
                    push_attr(out, "placeholder", placeholder);
                }
                out.push('>');
                return;
            }
            Content::Text(text) => {
                out.push('>');
                out.push_str(&escape(text));
            }
            Content::Children(children) => {
                out.push('>');
                for child in children {
                    child.write_html(out);
                }
            }
            Content::None => out.push('>'),
        }

        out.push_str("</");
        out.push_str(self.tag);
        out.push('>');
    }
}

fn push_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&escape(value));
    out.push('"');
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
