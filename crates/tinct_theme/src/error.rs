//! Theme-level errors

use thiserror::Error;
use tinct_style::StyleError;

/// Errors from the theme registry and provider scopes
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeError {
    /// No provider scope is installed, or the scope a styled instance was
    /// mounted under has been torn down
    #[error("no active theme scope")]
    NoActiveScope,

    /// A swap was rejected because the incoming mapping lacks components
    /// that are currently mounted. Detected eagerly at swap time; the
    /// previous scope stays active.
    #[error("mapping `{mapping}` is missing mounted components: {}", components.join(", "))]
    MissingComponents {
        mapping: String,
        components: Vec<String>,
    },

    #[error(transparent)]
    Style(#[from] StyleError),
}
