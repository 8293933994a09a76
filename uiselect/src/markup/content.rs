#[derive(Debug, Clone, Default, PartialEq)]
pub enum Content {
    #[default]
    None,
    Text(String),
    Children(Vec<super::Element>),
    /// Text field. The value is not part of the element's text content.
    Input {
        value: String,
        placeholder: Option<String>,
    },
}
