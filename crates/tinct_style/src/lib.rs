//! Tinct Style Engine
//!
//! The mapping model and resolution engine underneath every themed widget.
//!
//! A [`ThemeMapping`] is a declarative, variant-indexed specification: per
//! component it declares style fragments for each variant dimension
//! (appearance, size, status) and for each interaction flag. A [`TokenStore`]
//! holds the active theme's named constants. [`resolve`] turns a component
//! name, the instance's variant selectors and its interaction state into one
//! flat [`ResolvedStyle`].
//!
//! # Merge order
//!
//! Dimension evaluation order is fixed and significant: later dimensions
//! override properties set by earlier ones, and interaction flags apply last
//! of all ([`DIMENSION_ORDER`], [`tinct_core::FLAG_MERGE_ORDER`]).
//!
//! # Example
//!
//! ```rust
//! use tinct_core::{Flag, InteractionState};
//! use tinct_style::{
//!     resolve, ComponentBuilder, MappingBuilder, StyleFragment, TokenStore, VariantSelectors,
//! };
//!
//! let mapping = MappingBuilder::new("app")
//!     .component(
//!         "Button",
//!         ComponentBuilder::new()
//!             .appearance("filled", StyleFragment::new().set("backgroundColor", "$color-primary"))
//!             .appearance_default("filled")
//!             .state(Flag::Active, StyleFragment::new().set("backgroundColor", "$color-primary-600"))
//!             .build(),
//!     )
//!     .build();
//!
//! let tokens = TokenStore::new()
//!     .set("color-primary", "#3366FF")
//!     .set("color-primary-600", "#2541CC");
//!
//! let style = resolve(
//!     "Button",
//!     &mapping,
//!     &tokens,
//!     &VariantSelectors::default(),
//!     &InteractionState::default(),
//! )
//! .unwrap();
//! assert_eq!(style.string("backgroundColor"), Some("#3366FF"));
//!
//! let pressed = resolve(
//!     "Button",
//!     &mapping,
//!     &tokens,
//!     &VariantSelectors::default(),
//!     &InteractionState::from_flags(&[Flag::Active]),
//! )
//! .unwrap();
//! assert_eq!(pressed.string("backgroundColor"), Some("#2541CC"));
//! ```

pub mod cache;
pub mod error;
pub mod mapping;
pub mod resolve;
pub mod resolved;
pub mod tokens;
pub mod value;

pub use cache::{CacheKey, StyleCache};
pub use error::StyleError;
pub use mapping::{
    ComponentBuilder, ComponentMapping, Dimension, DimensionMapping, MappingBuilder, StateMapping,
    StyleFragment, ThemeMapping, DIMENSION_ORDER,
};
pub use resolve::{resolve, VariantSelectors};
pub use resolved::ResolvedStyle;
pub use tokens::TokenStore;
pub use value::{FragmentValue, StyleValue};
