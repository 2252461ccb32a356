//! Tinct Theme System
//!
//! Process-wide ownership of the active `{mapping, tokens}` pair.
//!
//! # Overview
//!
//! - **[`ThemeRegistry`]**: provider scopes with explicit init/swap/teardown;
//!   nested scopes shadow outer ones for their subtree
//! - **Documents**: mappings and token sets load from JSON or TOML artifacts
//! - **[`presets`]**: a built-in mapping plus light/dark token stores
//!   covering every shipped widget
//!
//! # Quick Start
//!
//! ```rust
//! use tinct_theme::presets::{self, ColorScheme};
//! use tinct_theme::ThemeRegistry;
//!
//! let registry = ThemeRegistry::new();
//! registry.install(presets::scope_config(ColorScheme::Light)).unwrap();
//!
//! // Widgets mounted from here resolve against the light theme. Swapping
//! // replaces the pair wholesale and invalidates every resolution cache.
//! registry
//!     .swap_current(presets::scope_config(ColorScheme::Dark))
//!     .unwrap();
//! ```
//!
//! # Swap semantics
//!
//! The active pair is never mutated in place. A swap builds the merged
//! mapping, eagerly validates it against every component name currently in
//! use, and only then publishes the new scope data with a bumped generation
//! counter — readers observe an atomic before/after, never a torn
//! intermediate state.

pub mod document;
pub mod error;
pub mod presets;
pub mod registry;

pub use document::{mapping_from_json, mapping_from_toml, tokens_from_json, tokens_from_toml};
pub use error::ThemeError;
pub use registry::{ScopeConfig, ScopeData, ScopeGuard, ScopeId, ThemeRegistry};
