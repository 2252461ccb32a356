//! MenuItem widget
//!
//! Menu items style through the full interaction vocabulary: pointer hover,
//! keyboard focus, press, and a `selected` prop driven by the owning menu.

use tinct_core::events::event_types;
use tinct_core::{Event, Flag};
use tinct_style::ResolvedStyle;
use tinct_theme::{ThemeError, ThemeRegistry};

use crate::styled::{Dispatch, Presentation, Styled};

/// The grouped style a menu item renders
#[derive(Clone, Debug, Default)]
pub struct MenuItemStyle {
    pub container: ResolvedStyle,
    pub text: ResolvedStyle,
    pub icon: ResolvedStyle,
}

/// Presentation component behind [`MenuItem`]
pub struct MenuItemBody {
    title: String,
    disabled: bool,
    pressed: bool,
    clicked: bool,
    hovered: bool,
    focused: bool,
    style: MenuItemStyle,
}

impl MenuItemBody {
    /// The complete flag description for the current pointer/focus facts.
    ///
    /// Dispatch replaces the whole set, so hover and focus must be
    /// re-included on every transition or they would be dropped.
    fn current_flags(&self) -> Vec<Flag> {
        let mut flags = Vec::new();
        if self.hovered {
            flags.push(Flag::Hover);
        }
        if self.focused {
            flags.push(Flag::Focused);
        }
        if self.pressed {
            flags.push(Flag::Active);
        }
        flags
    }
}

impl Presentation for MenuItemBody {
    const NAME: &'static str = "MenuItem";

    fn apply_style(&mut self, style: &ResolvedStyle) {
        self.style = MenuItemStyle {
            container: style.without_prefixes(&["text", "icon"]),
            text: style.group("text"),
            icon: style.group("icon"),
        };
    }

    fn on_pointer_enter(&mut self, dispatch: &mut Dispatch) {
        self.hovered = true;
        if !self.disabled {
            dispatch.dispatch(&self.current_flags());
        }
    }

    fn on_pointer_leave(&mut self, dispatch: &mut Dispatch) {
        self.hovered = false;
        self.pressed = false;
        if !self.disabled {
            dispatch.dispatch(&self.current_flags());
        }
    }

    fn on_pointer_down(&mut self, dispatch: &mut Dispatch) {
        if !self.disabled {
            self.pressed = true;
            dispatch.dispatch(&self.current_flags());
        }
    }

    fn on_pointer_up(&mut self, dispatch: &mut Dispatch) {
        if !self.disabled {
            if self.pressed {
                self.clicked = true;
            }
            self.pressed = false;
            dispatch.dispatch(&self.current_flags());
        }
    }

    fn on_focus(&mut self, dispatch: &mut Dispatch) {
        self.focused = true;
        if !self.disabled {
            dispatch.dispatch(&self.current_flags());
        }
    }

    fn on_blur(&mut self, dispatch: &mut Dispatch) {
        self.focused = false;
        if !self.disabled {
            dispatch.dispatch(&self.current_flags());
        }
    }
}

/// Styled menu item
pub struct MenuItem {
    styled: Styled<MenuItemBody>,
    selected: bool,
    on_press: Option<Box<dyn FnMut() + Send>>,
}

impl MenuItem {
    /// Create a menu item mounted under the process-wide registry
    pub fn new(title: impl Into<String>) -> Result<Self, ThemeError> {
        Self::mount_in(title, &ThemeRegistry::global())
    }

    /// Create a menu item mounted under the given registry
    pub fn mount_in(
        title: impl Into<String>,
        registry: &ThemeRegistry,
    ) -> Result<Self, ThemeError> {
        let body = MenuItemBody {
            title: title.into(),
            disabled: false,
            pressed: false,
            clicked: false,
            hovered: false,
            focused: false,
            style: MenuItemStyle::default(),
        };
        Ok(Self {
            styled: Styled::mount_in(body, registry)?,
            selected: false,
            on_press: None,
        })
    }

    pub fn title(&self) -> &str {
        &self.styled.inner().title
    }

    pub fn selected(&self) -> bool {
        self.selected
    }

    pub fn style(&self) -> &MenuItemStyle {
        &self.styled.inner().style
    }

    /// Driven by the owning menu's selection
    pub fn set_selected(&mut self, selected: bool) -> Result<(), ThemeError> {
        self.selected = selected;
        self.styled.set_prop_flag(Flag::Selected, selected)
    }

    pub fn set_disabled(&mut self, disabled: bool) -> Result<(), ThemeError> {
        self.styled.inner_mut().disabled = disabled;
        self.styled.set_disabled(disabled)
    }

    pub fn set_on_press<F: FnMut() + Send + 'static>(&mut self, callback: F) {
        self.on_press = Some(Box::new(callback));
    }

    /// Route a raw input event through the item
    pub fn handle_event(&mut self, event: &Event) -> Result<(), ThemeError> {
        self.styled.handle_event(event)?;
        if event.event_type == event_types::POINTER_UP
            && std::mem::take(&mut self.styled.inner_mut().clicked)
        {
            if let Some(callback) = self.on_press.as_mut() {
                callback();
            }
        }
        Ok(())
    }

    /// Re-resolve after a theme swap
    pub fn refresh(&mut self) -> Result<(), ThemeError> {
        self.styled.refresh()
    }
}
