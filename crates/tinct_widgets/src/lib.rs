//! Tinct Widget Library
//!
//! The styled-component composition layer and the core widgets built on it.
//!
//! [`Styled`] binds a presentation component to the style-resolution engine:
//! it owns the instance's interaction state, re-resolves on every prop,
//! theme or dispatch change, and hands the fresh [`tinct_style::ResolvedStyle`]
//! back to the component. Widgets are thin: they translate raw input events
//! into complete interaction descriptions and split the flat resolved style
//! into the groups they render.

pub mod button;
pub mod checkbox;
pub mod icon;
pub mod input;
pub mod menu;
pub mod radio;
pub mod styled;
pub mod text;

pub use button::{button, Button, ButtonStyle};
pub use checkbox::{CheckBox, CheckBoxStyle};
pub use icon::{Icon, IconData, IconPack, IconRegistry};
pub use input::{Input, InputHandle, InputStyle};
pub use menu::{MenuItem, MenuItemStyle};
pub use radio::{Radio, RadioGroup};
pub use styled::{Dispatch, Presentation, Styled};
pub use text::Text;
