//! Mount-time error types.
//!
//! Interaction never fails: invalid selections and clicks on a disabled
//! widget are ignored. Only building a widget from incomplete or malformed
//! configuration produces an error.

use thiserror::Error;

/// Error raised while configuring or building a select widget.
#[derive(Debug, Error)]
pub enum SelectError {
    #[error("no {0} template configured")]
    MissingTemplate(&'static str),
    #[error("no filter configured")]
    MissingFilter,
    #[error("invalid select config: {0}")]
    Config(#[from] serde_json::Error),
}
