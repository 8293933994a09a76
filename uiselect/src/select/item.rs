//! Items a Select can offer and the value it holds once something is chosen.

/// Trait for items that can be displayed in a Select widget.
///
/// Types implementing it get a default text template and the default
/// filters. Any other `Clone + PartialEq` type works too, as long as the host
/// supplies templates and a filter.
///
/// # Example
///
/// ```ignore
/// struct Person {
///     name: String,
///     email: String,
/// }
///
/// impl SelectItem for Person {
///     fn select_label(&self) -> String {
///         self.name.clone()
///     }
///
///     fn search_text(&self) -> String {
///         format!("{} {}", self.name, self.email)
///     }
/// }
/// ```
pub trait SelectItem {
    /// Display text for this item.
    ///
    /// This is what gets shown in the dropdown and as the selected value.
    fn select_label(&self) -> String;

    /// Text the search box is matched against.
    fn search_text(&self) -> String {
        self.select_label()
    }
}

impl SelectItem for String {
    fn select_label(&self) -> String {
        self.clone()
    }
}

impl SelectItem for &str {
    fn select_label(&self) -> String {
        (*self).to_string()
    }
}

// (id, label) tuples search on the label only
impl<S1, S2> SelectItem for (S1, S2)
where
    S1: AsRef<str>,
    S2: AsRef<str>,
{
    fn select_label(&self) -> String {
        self.1.as_ref().to_string()
    }
}

/// A selected value.
///
/// `Item` holds one of the candidates, `Tag` a free-form string accepted
/// while tagging is enabled. An unset selection is `None` at the use site,
/// so a tag such as `"false"` or an empty-looking label is still a value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Choice<T> {
    Item(T),
    Tag(String),
}

impl<T> Choice<T> {
    /// Free-form tag.
    pub fn tag(text: impl Into<String>) -> Self {
        Choice::Tag(text.into())
    }

    /// The candidate, if this is not a tag.
    pub fn as_item(&self) -> Option<&T> {
        match self {
            Choice::Item(item) => Some(item),
            Choice::Tag(_) => None,
        }
    }

    /// The tag text, if this is a tag.
    pub fn as_tag(&self) -> Option<&str> {
        match self {
            Choice::Item(_) => None,
            Choice::Tag(text) => Some(text),
        }
    }

    pub fn is_tag(&self) -> bool {
        matches!(self, Choice::Tag(_))
    }
}

impl<T: SelectItem> Choice<T> {
    /// Display text: the item's label, or the tag itself.
    pub fn label(&self) -> String {
        match self {
            Choice::Item(item) => item.select_label(),
            Choice::Tag(text) => text.clone(),
        }
    }
}
