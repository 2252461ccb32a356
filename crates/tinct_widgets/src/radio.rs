//! Radio and RadioGroup widgets
//!
//! A radio can be selected by a press but never deselected by one; the group
//! owns the selection and drives each member's `checked` prop from its
//! selected index.

use tinct_core::events::event_types;
use tinct_core::{Event, Flag};
use tinct_style::ResolvedStyle;
use tinct_theme::{ThemeError, ThemeRegistry};

use crate::styled::{Dispatch, Presentation, Styled};

/// The grouped style a radio renders
#[derive(Clone, Debug, Default)]
pub struct RadioStyle {
    pub container: ResolvedStyle,
    pub icon: ResolvedStyle,
    pub text: ResolvedStyle,
}

/// Presentation component behind [`Radio`]
pub struct RadioBody {
    label: Option<String>,
    disabled: bool,
    pressed: bool,
    select_requested: bool,
    style: RadioStyle,
}

impl RadioBody {
    fn take_select_request(&mut self) -> bool {
        std::mem::take(&mut self.select_requested)
    }
}

impl Presentation for RadioBody {
    const NAME: &'static str = "Radio";

    fn apply_style(&mut self, style: &ResolvedStyle) {
        self.style = RadioStyle {
            container: style.without_prefixes(&["text", "icon"]),
            icon: style.group("icon"),
            text: style.group("text"),
        };
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
                self.select_requested = true;
            }
            self.pressed = false;
            dispatch.dispatch(&[]);
        }
    }

    fn on_pointer_leave(&mut self, dispatch: &mut Dispatch) {
        self.pressed = false;
        if !self.disabled {
            dispatch.dispatch(&[]);
        }
    }
}

/// Styled radio button
pub struct Radio {
    styled: Styled<RadioBody>,
    checked: bool,
}

impl Radio {
    /// Create a radio mounted under the given registry
    pub fn mount_in(registry: &ThemeRegistry) -> Result<Self, ThemeError> {
        let body = RadioBody {
            label: None,
            disabled: false,
            pressed: false,
            select_requested: false,
            style: RadioStyle::default(),
        };
        Ok(Self {
            styled: Styled::mount_in(body, registry)?,
            checked: false,
        })
    }

    /// Create a radio mounted under the process-wide registry
    pub fn new() -> Result<Self, ThemeError> {
        Self::mount_in(&ThemeRegistry::global())
    }

    pub fn checked(&self) -> bool {
        self.checked
    }

    pub fn style(&self) -> &RadioStyle {
        &self.styled.inner().style
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.styled.inner_mut().label = Some(label.into());
    }

    pub fn label(&self) -> Option<&str> {
        self.styled.inner().label.as_deref()
    }

    pub fn set_checked(&mut self, checked: bool) -> Result<(), ThemeError> {
        self.checked = checked;
        self.styled.set_prop_flag(Flag::Checked, checked)
    }

    pub fn set_disabled(&mut self, disabled: bool) -> Result<(), ThemeError> {
        self.styled.inner_mut().disabled = disabled;
        self.styled.set_disabled(disabled)
    }

    /// Route a raw input event. Returns whether a completed press requested
    /// selection; the owning group acts on it.
    pub fn handle_event(&mut self, event: &Event) -> Result<bool, ThemeError> {
        self.styled.handle_event(event)?;
        if event.event_type == event_types::POINTER_UP {
            return Ok(self.styled.inner_mut().take_select_request());
        }
        Ok(false)
    }

    /// Re-resolve after a theme swap
    pub fn refresh(&mut self) -> Result<(), ThemeError> {
        self.styled.refresh()
    }
}

/// Owns a set of radios and their exclusive selection
pub struct RadioGroup {
    radios: Vec<Radio>,
    selected: Option<usize>,
    on_change: Option<Box<dyn FnMut(usize) + Send>>,
}

impl RadioGroup {
    pub fn new() -> Self {
        Self {
            radios: Vec::new(),
            selected: None,
            on_change: None,
        }
    }

    pub fn push(&mut self, radio: Radio) {
        self.radios.push(radio);
    }

    pub fn len(&self) -> usize {
        self.radios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.radios.is_empty()
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn radio(&self, index: usize) -> Option<&Radio> {
        self.radios.get(index)
    }

    /// Fires with the newly selected index after a user press
    pub fn set_on_change<F: FnMut(usize) + Send + 'static>(&mut self, callback: F) {
        self.on_change = Some(Box::new(callback));
    }

    /// Select one member, clearing every other member's checked prop
    pub fn select(&mut self, index: usize) -> Result<(), ThemeError> {
        if index >= self.radios.len() {
            return Ok(());
        }
        self.selected = Some(index);
        for (i, radio) in self.radios.iter_mut().enumerate() {
            radio.set_checked(i == index)?;
        }
        Ok(())
    }

    /// Route an event to one member; a completed press moves the selection
    pub fn handle_event(&mut self, index: usize, event: &Event) -> Result<(), ThemeError> {
        let Some(radio) = self.radios.get_mut(index) else {
            return Ok(());
        };
        if radio.handle_event(event)? {
            self.select(index)?;
            if let Some(callback) = self.on_change.as_mut() {
                callback(index);
            }
        }
        Ok(())
    }
}

impl Default for RadioGroup {
    fn default() -> Self {
        Self::new()
    }
}
