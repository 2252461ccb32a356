//! Button widget
//!
//! The Button widget provides:
//! - Variant props: appearance (`filled`/`outline`/`ghost`), status, size
//! - Themed visual states: hover, focused, active, disabled
//! - Press detection with an `on_press` callback
//!
//! Press-in dispatches `{active}`, press-out dispatches `{}` — the widget
//! always describes its complete interaction state.

use tinct_core::{Event, Flag};
use tinct_style::ResolvedStyle;
use tinct_theme::{ThemeError, ThemeRegistry};

use crate::icon::{Icon, IconRegistry};
use crate::styled::{Dispatch, Presentation, Styled};

/// The grouped style a button renders
#[derive(Clone, Debug, Default)]
pub struct ButtonStyle {
    pub container: ResolvedStyle,
    pub text: ResolvedStyle,
    pub icon: ResolvedStyle,
}

/// Presentation component behind [`Button`]
pub struct ButtonBody {
    label: String,
    icon_name: Option<String>,
    disabled: bool,
    pressed: bool,
    clicked: bool,
    style: ButtonStyle,
    on_press: Option<Box<dyn FnMut() + Send>>,
}

impl ButtonBody {
    fn new(label: String) -> Self {
        Self {
            label,
            icon_name: None,
            disabled: false,
            pressed: false,
            clicked: false,
            style: ButtonStyle::default(),
            on_press: None,
        }
    }
}

impl Presentation for ButtonBody {
    const NAME: &'static str = "Button";

    fn apply_style(&mut self, style: &ResolvedStyle) {
        self.style = ButtonStyle {
            container: style.without_prefixes(&["text", "icon"]),
            text: style.group("text"),
            icon: style.group("icon"),
        };
    }

    fn on_pointer_enter(&mut self, dispatch: &mut Dispatch) {
        if !self.disabled {
            dispatch.dispatch(&[Flag::Hover]);
        }
    }

    fn on_pointer_leave(&mut self, dispatch: &mut Dispatch) {
        self.pressed = false;
        if !self.disabled {
            dispatch.dispatch(&[]);
        }
    }

    fn on_pointer_down(&mut self, dispatch: &mut Dispatch) {
        if !self.disabled {
            self.pressed = true;
            dispatch.dispatch(&[Flag::Active]);
        }
    }

    fn on_pointer_up(&mut self, dispatch: &mut Dispatch) {
        if !self.disabled {
            if self.pressed {
                self.clicked = true;
                if let Some(callback) = self.on_press.as_mut() {
                    callback();
                }
            }
            self.pressed = false;
            dispatch.dispatch(&[]);
        }
    }

    fn on_focus(&mut self, dispatch: &mut Dispatch) {
        if !self.disabled {
            dispatch.dispatch(&[Flag::Focused]);
        }
    }

    fn on_blur(&mut self, dispatch: &mut Dispatch) {
        if !self.disabled {
            dispatch.dispatch(&[]);
        }
    }
}

/// Styled button
pub struct Button {
    styled: Styled<ButtonBody>,
}

impl Button {
    /// Create a button mounted under the process-wide registry
    pub fn new(label: impl Into<String>) -> Result<Self, ThemeError> {
        Self::mount_in(label, &ThemeRegistry::global())
    }

    /// Create a button mounted under the given registry
    pub fn mount_in(
        label: impl Into<String>,
        registry: &ThemeRegistry,
    ) -> Result<Self, ThemeError> {
        Ok(Self {
            styled: Styled::mount_in(ButtonBody::new(label.into()), registry)?,
        })
    }

    pub fn label(&self) -> &str {
        &self.styled.inner().label
    }

    /// The grouped style for the current render
    pub fn style(&self) -> &ButtonStyle {
        &self.styled.inner().style
    }

    pub fn set_appearance(&mut self, value: impl Into<String>) -> Result<(), ThemeError> {
        self.styled.set_appearance(value)
    }

    pub fn set_status(&mut self, value: impl Into<String>) -> Result<(), ThemeError> {
        self.styled.set_status(value)
    }

    pub fn set_size(&mut self, value: impl Into<String>) -> Result<(), ThemeError> {
        self.styled.set_size(value)
    }

    pub fn set_disabled(&mut self, disabled: bool) -> Result<(), ThemeError> {
        self.styled.inner_mut().disabled = disabled;
        self.styled.set_disabled(disabled)
    }

    /// Name of the icon rendered next to the label, looked up in the default
    /// icon pack
    pub fn set_icon(&mut self, name: impl Into<String>) {
        self.styled.inner_mut().icon_name = Some(name.into());
    }

    /// The button's icon from the given icon registry
    pub fn icon(&self, icons: &IconRegistry) -> Option<Icon> {
        icons.icon(self.styled.inner().icon_name.as_deref()?)
    }

    pub fn set_on_press<F: FnMut() + Send + 'static>(&mut self, callback: F) {
        self.styled.inner_mut().on_press = Some(Box::new(callback));
    }

    /// Route a raw input event through the button
    pub fn handle_event(&mut self, event: &Event) -> Result<(), ThemeError> {
        self.styled.handle_event(event)
    }

    /// Re-resolve after a theme swap
    pub fn refresh(&mut self) -> Result<(), ThemeError> {
        self.styled.refresh()
    }

    /// Check if the button was pressed (and clear the flag)
    pub fn was_pressed(&mut self) -> bool {
        std::mem::take(&mut self.styled.inner_mut().clicked)
    }
}

/// Create a button with a label (builder form)
pub fn button(label: impl Into<String>) -> ButtonBuilder {
    ButtonBuilder {
        label: label.into(),
        appearance: None,
        status: None,
        size: None,
        disabled: false,
        icon: None,
        on_press: None,
    }
}

/// Builder for creating buttons
pub struct ButtonBuilder {
    label: String,
    appearance: Option<String>,
    status: Option<String>,
    size: Option<String>,
    disabled: bool,
    icon: Option<String>,
    on_press: Option<Box<dyn FnMut() + Send>>,
}

impl ButtonBuilder {
    pub fn appearance(mut self, value: impl Into<String>) -> Self {
        self.appearance = Some(value.into());
        self
    }

    pub fn status(mut self, value: impl Into<String>) -> Self {
        self.status = Some(value.into());
        self
    }

    pub fn size(mut self, value: impl Into<String>) -> Self {
        self.size = Some(value.into());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn icon(mut self, name: impl Into<String>) -> Self {
        self.icon = Some(name.into());
        self
    }

    pub fn on_press<F: FnMut() + Send + 'static>(mut self, callback: F) -> Self {
        self.on_press = Some(Box::new(callback));
        self
    }

    /// Build the button under the process-wide registry
    pub fn build(self) -> Result<Button, ThemeError> {
        self.build_in(&ThemeRegistry::global())
    }

    /// Build the button under the given registry
    pub fn build_in(self, registry: &ThemeRegistry) -> Result<Button, ThemeError> {
        let mut button = Button::mount_in(self.label, registry)?;
        if let Some(value) = self.appearance {
            button.set_appearance(value)?;
        }
        if let Some(value) = self.status {
            button.set_status(value)?;
        }
        if let Some(value) = self.size {
            button.set_size(value)?;
        }
        if self.disabled {
            button.set_disabled(true)?;
        }
        if let Some(name) = self.icon {
            button.set_icon(name);
        }
        button.styled.inner_mut().on_press = self.on_press;
        Ok(button)
    }
}
