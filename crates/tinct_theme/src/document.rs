//! Theme document loading
//!
//! Mappings and token sets are external artifacts loaded once at provider
//! init and swapped atomically on theme change. JSON is the conventional
//! interchange format for token documents; TOML is supported for themes kept
//! alongside application configuration.

use thiserror::Error;
use tinct_style::{ThemeMapping, TokenStore};

/// A theme document failed to parse
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("invalid JSON theme document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid TOML theme document: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Load a mapping specification from a JSON document
pub fn mapping_from_json(document: &str) -> Result<ThemeMapping, DocumentError> {
    Ok(serde_json::from_str(document)?)
}

/// Load a mapping specification from a TOML document
pub fn mapping_from_toml(document: &str) -> Result<ThemeMapping, DocumentError> {
    Ok(toml::from_str(document)?)
}

/// Load a flat token set from a JSON document
pub fn tokens_from_json(document: &str) -> Result<TokenStore, DocumentError> {
    Ok(serde_json::from_str(document)?)
}

/// Load a flat token set from a TOML document
pub fn tokens_from_toml(document: &str) -> Result<TokenStore, DocumentError> {
    Ok(toml::from_str(document)?)
}
