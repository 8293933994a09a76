//! Declarative widget attributes.

use serde::{Deserialize, Serialize};

use super::FilterMode;
use crate::error::SelectError;

/// Attributes a host sets on a select, all optional.
///
/// ```
/// use uiselect::select::SelectConfig;
///
/// let config = SelectConfig::from_json(r#"{ "placeholder": "Pick one...", "tagging": true }"#)?;
/// assert!(config.tagging);
/// assert!(!config.disabled);
/// # Ok::<(), uiselect::SelectError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SelectConfig {
    /// Element id prefix. Generated when absent.
    pub id: Option<String>,
    /// Shown in the match view while nothing is selected.
    pub placeholder: Option<String>,
    pub disabled: bool,
    pub required: bool,
    /// Accept values that are not in the candidate list.
    pub tagging: bool,
    /// Built-in filter used when the host supplies none.
    pub filter: FilterMode,
}

impl SelectConfig {
    /// Parse attributes from JSON.
    pub fn from_json(json: &str) -> Result<Self, SelectError> {
        Ok(serde_json::from_str(json)?)
    }
}
