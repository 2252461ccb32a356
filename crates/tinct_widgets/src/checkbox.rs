//! CheckBox widget
//!
//! `checked` and `indeterminate` are prop-driven flags: they participate in
//! resolution exactly like dispatched flags but are unioned by the
//! composition layer, so pressing a checkbox can never visually un-check it
//! mid-gesture. A press toggles `checked` and clears `indeterminate`.

use tinct_core::{Event, Flag};
use tinct_core::events::event_types;
use tinct_style::ResolvedStyle;
use tinct_theme::{ThemeError, ThemeRegistry};

use crate::styled::{Dispatch, Presentation, Styled};

/// The grouped style a checkbox renders
#[derive(Clone, Debug, Default)]
pub struct CheckBoxStyle {
    pub container: ResolvedStyle,
    pub icon: ResolvedStyle,
    pub text: ResolvedStyle,
}

/// Presentation component behind [`CheckBox`]
pub struct CheckBoxBody {
    label: Option<String>,
    disabled: bool,
    pressed: bool,
    toggle_requested: bool,
    style: CheckBoxStyle,
}

impl CheckBoxBody {
    fn take_toggle_request(&mut self) -> bool {
        std::mem::take(&mut self.toggle_requested)
    }
}

impl Presentation for CheckBoxBody {
    const NAME: &'static str = "CheckBox";

    fn apply_style(&mut self, style: &ResolvedStyle) {
        self.style = CheckBoxStyle {
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
                self.toggle_requested = true;
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

/// Styled checkbox
pub struct CheckBox {
    styled: Styled<CheckBoxBody>,
    checked: bool,
    indeterminate: bool,
    on_change: Option<Box<dyn FnMut(bool, bool) + Send>>,
}

impl CheckBox {
    /// Create a checkbox mounted under the process-wide registry
    pub fn new() -> Result<Self, ThemeError> {
        Self::mount_in(&ThemeRegistry::global())
    }

    /// Create a checkbox mounted under the given registry
    pub fn mount_in(registry: &ThemeRegistry) -> Result<Self, ThemeError> {
        let body = CheckBoxBody {
            label: None,
            disabled: false,
            pressed: false,
            toggle_requested: false,
            style: CheckBoxStyle::default(),
        };
        Ok(Self {
            styled: Styled::mount_in(body, registry)?,
            checked: false,
            indeterminate: false,
            on_change: None,
        })
    }

    pub fn checked(&self) -> bool {
        self.checked
    }

    pub fn indeterminate(&self) -> bool {
        self.indeterminate
    }

    pub fn style(&self) -> &CheckBoxStyle {
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

    pub fn set_indeterminate(&mut self, indeterminate: bool) -> Result<(), ThemeError> {
        self.indeterminate = indeterminate;
        self.styled
            .set_prop_flag(Flag::Indeterminate, indeterminate)
    }

    pub fn set_disabled(&mut self, disabled: bool) -> Result<(), ThemeError> {
        self.styled.inner_mut().disabled = disabled;
        self.styled.set_disabled(disabled)
    }

    pub fn set_status(&mut self, value: impl Into<String>) -> Result<(), ThemeError> {
        self.styled.set_status(value)
    }

    /// Fires with `(checked, indeterminate)` after a user toggle
    pub fn set_on_change<F: FnMut(bool, bool) + Send + 'static>(&mut self, callback: F) {
        self.on_change = Some(Box::new(callback));
    }

    /// Route a raw input event; a completed press toggles the value
    pub fn handle_event(&mut self, event: &Event) -> Result<(), ThemeError> {
        self.styled.handle_event(event)?;
        if event.event_type == event_types::POINTER_UP
            && self.styled.inner_mut().take_toggle_request()
        {
            let checked = !self.checked;
            self.set_checked(checked)?;
            if self.indeterminate {
                self.set_indeterminate(false)?;
            }
            if let Some(callback) = self.on_change.as_mut() {
                callback(checked, false);
            }
        }
        Ok(())
    }

    /// Re-resolve after a theme swap
    pub fn refresh(&mut self) -> Result<(), ThemeError> {
        self.styled.refresh()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tinct_theme::presets::{self, ColorScheme};

    fn registry() -> ThemeRegistry {
        let registry = ThemeRegistry::new();
        registry
            .install(presets::scope_config(ColorScheme::Light))
            .unwrap();
        registry
    }

    fn press(checkbox: &mut CheckBox) {
        checkbox
            .handle_event(&Event::pointer(event_types::POINTER_DOWN, 0.0, 0.0))
            .unwrap();
        checkbox
            .handle_event(&Event::pointer(event_types::POINTER_UP, 0.0, 0.0))
            .unwrap();
    }

    #[test]
    fn press_toggles_checked() {
        let registry = registry();
        let mut checkbox = CheckBox::mount_in(&registry).unwrap();
        assert!(!checkbox.checked());

        press(&mut checkbox);
        assert!(checkbox.checked());

        press(&mut checkbox);
        assert!(!checkbox.checked());
    }

    #[test]
    fn checked_changes_container_style() {
        let registry = registry();
        let mut checkbox = CheckBox::mount_in(&registry).unwrap();
        let unchecked = checkbox
            .style()
            .container
            .string("backgroundColor")
            .map(str::to_owned);

        checkbox.set_checked(true).unwrap();
        let checked = checkbox
            .style()
            .container
            .string("backgroundColor")
            .map(str::to_owned);
        assert_ne!(unchecked, checked);
    }

    #[test]
    fn checked_prop_survives_press_dispatch() {
        let registry = registry();
        let mut checkbox = CheckBox::mount_in(&registry).unwrap();
        checkbox.set_checked(true).unwrap();

        checkbox
            .handle_event(&Event::pointer(event_types::POINTER_DOWN, 0.0, 0.0))
            .unwrap();
        // Mid-press the checked flag is still part of the effective state.
        assert!(checkbox.styled.interaction().contains(Flag::Checked));
        assert!(checkbox.styled.interaction().contains(Flag::Active));
    }

    #[test]
    fn toggle_clears_indeterminate_and_reports() {
        let registry = registry();
        let changes = Arc::new(AtomicUsize::new(0));
        let seen = changes.clone();

        let mut checkbox = CheckBox::mount_in(&registry).unwrap();
        checkbox.set_indeterminate(true).unwrap();
        checkbox.set_on_change(move |checked, indeterminate| {
            assert!(checked);
            assert!(!indeterminate);
            seen.fetch_add(1, Ordering::SeqCst);
        });

        press(&mut checkbox);
        assert!(checkbox.checked());
        assert!(!checkbox.indeterminate());
        assert_eq!(changes.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn disabled_checkbox_ignores_presses() {
        let registry = registry();
        let mut checkbox = CheckBox::mount_in(&registry).unwrap();
        checkbox.set_disabled(true).unwrap();

        press(&mut checkbox);
        assert!(!checkbox.checked());
        assert!(checkbox.styled.interaction().contains(Flag::Disabled));
    }
}
