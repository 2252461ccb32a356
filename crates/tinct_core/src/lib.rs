//! Tinct Core Primitives
//!
//! This crate provides the foundational primitives for the Tinct UI toolkit:
//!
//! - **Colors**: RGBA color values with hex and CSS-string parsing
//! - **Events**: platform-agnostic UI event model (pointer, focus, keyboard)
//! - **Interaction state**: the flag vocabulary and per-instance state that
//!   drives themed style overrides
//!
//! # Example
//!
//! ```rust
//! use tinct_core::{Flag, InteractionState};
//!
//! // Interaction state is a plain value object. Replacing it wholesale is
//! // how components move between visual states.
//! let idle = InteractionState::default();
//! let pressed = InteractionState::from_flags(&[Flag::Active]);
//!
//! assert!(idle.is_empty());
//! assert!(pressed.contains(Flag::Active));
//! assert!(!pressed.contains(Flag::Hover));
//! ```

pub mod color;
pub mod events;
pub mod interaction;

pub use color::Color;
pub use events::{Event, EventData, EventType};
pub use interaction::{Flag, InteractionState, FLAG_MERGE_ORDER};
