//! Resolution errors

use thiserror::Error;

/// Errors produced by style resolution.
///
/// Unmatched variant values and missing tokens are not errors: the former
/// fall back to the dimension default, the latter resolve to an absent
/// property (and are logged).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleError {
    /// The active mapping has no entry for the requested component name.
    /// Fatal: the composition layer fails the mount rather than rendering
    /// unstyled.
    #[error("mapping has no component `{component}`")]
    UnknownComponent { component: String },

    /// A token chain revisited a token within one resolution pass
    #[error("cyclic token reference via `{token}`: {}", chain.join(" -> "))]
    CyclicTokenReference { token: String, chain: Vec<String> },
}
