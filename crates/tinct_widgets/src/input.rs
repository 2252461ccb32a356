//! Input widget
//!
//! A single-line text input. Focus and blur drive the `focused` interaction
//! flag; text and key events edit the value while focused. Imperative
//! control goes through [`InputHandle`], a narrow capability object the
//! owner holds instead of the whole widget.

use std::sync::{Arc, Mutex};

use tinct_core::events::{event_types, key_codes};
use tinct_core::{Event, EventData, Flag};
use tinct_style::ResolvedStyle;
use tinct_theme::{ThemeError, ThemeRegistry};

use crate::styled::{Dispatch, Presentation, Styled};

/// The grouped style an input renders
#[derive(Clone, Debug, Default)]
pub struct InputStyle {
    pub container: ResolvedStyle,
    pub text: ResolvedStyle,
    pub placeholder: ResolvedStyle,
}

/// State shared between the widget and its handles
#[derive(Default)]
struct InputShared {
    value: String,
    focused: bool,
    /// Pending imperative requests, applied on the next poll
    focus_request: Option<bool>,
    clear_request: bool,
}

/// Narrow imperative surface over one input.
///
/// Cheap to clone; `focus`/`blur`/`clear` requests take effect when the
/// owner next calls [`Input::poll_handle`], on the UI thread.
#[derive(Clone)]
pub struct InputHandle {
    shared: Arc<Mutex<InputShared>>,
}

impl InputHandle {
    /// Request focus for the input
    pub fn focus(&self) {
        self.shared.lock().unwrap().focus_request = Some(true);
    }

    /// Request focus removal; the opposite of `focus`
    pub fn blur(&self) {
        self.shared.lock().unwrap().focus_request = Some(false);
    }

    /// Whether the input is currently focused
    pub fn is_focused(&self) -> bool {
        self.shared.lock().unwrap().focused
    }

    /// Request removal of all text from the input
    pub fn clear(&self) {
        self.shared.lock().unwrap().clear_request = true;
    }
}

/// Presentation component behind [`Input`]
pub struct InputBody {
    shared: Arc<Mutex<InputShared>>,
    placeholder: Option<String>,
    disabled: bool,
    style: InputStyle,
}

impl Presentation for InputBody {
    const NAME: &'static str = "Input";

    fn apply_style(&mut self, style: &ResolvedStyle) {
        self.style = InputStyle {
            container: style.without_prefixes(&["text", "placeholder"]),
            text: style.group("text"),
            placeholder: style.group("placeholder"),
        };
    }

    fn on_focus(&mut self, dispatch: &mut Dispatch) {
        if !self.disabled {
            self.shared.lock().unwrap().focused = true;
            dispatch.dispatch(&[Flag::Focused]);
        }
    }

    fn on_blur(&mut self, dispatch: &mut Dispatch) {
        self.shared.lock().unwrap().focused = false;
        if !self.disabled {
            dispatch.dispatch(&[]);
        }
    }
}

/// Styled single-line text input
pub struct Input {
    styled: Styled<InputBody>,
    on_change: Option<Box<dyn FnMut(&str) + Send>>,
}

impl Input {
    /// Create an input mounted under the process-wide registry
    pub fn new() -> Result<Self, ThemeError> {
        Self::mount_in(&ThemeRegistry::global())
    }

    /// Create an input mounted under the given registry
    pub fn mount_in(registry: &ThemeRegistry) -> Result<Self, ThemeError> {
        let body = InputBody {
            shared: Arc::new(Mutex::new(InputShared::default())),
            placeholder: None,
            disabled: false,
            style: InputStyle::default(),
        };
        Ok(Self {
            styled: Styled::mount_in(body, registry)?,
            on_change: None,
        })
    }

    /// A capability handle for imperative focus/blur/clear control
    pub fn handle(&self) -> InputHandle {
        InputHandle {
            shared: self.styled.inner().shared.clone(),
        }
    }

    pub fn value(&self) -> String {
        self.styled.inner().shared.lock().unwrap().value.clone()
    }

    pub fn is_focused(&self) -> bool {
        self.styled.inner().shared.lock().unwrap().focused
    }

    pub fn style(&self) -> &InputStyle {
        &self.styled.inner().style
    }

    pub fn set_placeholder(&mut self, placeholder: impl Into<String>) {
        self.styled.inner_mut().placeholder = Some(placeholder.into());
    }

    pub fn placeholder(&self) -> Option<&str> {
        self.styled.inner().placeholder.as_deref()
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.styled.inner().shared.lock().unwrap().value = value.into();
    }

    pub fn set_status(&mut self, value: impl Into<String>) -> Result<(), ThemeError> {
        self.styled.set_status(value)
    }

    pub fn set_disabled(&mut self, disabled: bool) -> Result<(), ThemeError> {
        self.styled.inner_mut().disabled = disabled;
        self.styled.set_disabled(disabled)
    }

    /// Fires with the new value after every edit
    pub fn set_on_change<F: FnMut(&str) + Send + 'static>(&mut self, callback: F) {
        self.on_change = Some(Box::new(callback));
    }

    /// Route a raw input event: focus/blur drive the interaction state, text
    /// and backspace edit the value while focused.
    pub fn handle_event(&mut self, event: &Event) -> Result<(), ThemeError> {
        self.styled.handle_event(event)?;

        if self.styled.inner().disabled || !self.is_focused() {
            return Ok(());
        }
        match (&event.data, event.event_type) {
            (EventData::TextInput { text }, event_types::TEXT_INPUT) => {
                let value = {
                    let mut shared = self.styled.inner().shared.lock().unwrap();
                    shared.value.push_str(text);
                    shared.value.clone()
                };
                self.report_change(&value);
            }
            (EventData::Key { key }, event_types::KEY_DOWN) if *key == key_codes::BACKSPACE => {
                let value = {
                    let mut shared = self.styled.inner().shared.lock().unwrap();
                    shared.value.pop();
                    shared.value.clone()
                };
                self.report_change(&value);
            }
            _ => {}
        }
        Ok(())
    }

    /// Apply pending imperative requests from handles. Hosts call this on
    /// the UI thread once per frame.
    pub fn poll_handle(&mut self) -> Result<(), ThemeError> {
        let (focus_request, clear_request) = {
            let mut shared = self.styled.inner().shared.lock().unwrap();
            (
                shared.focus_request.take(),
                std::mem::take(&mut shared.clear_request),
            )
        };

        match focus_request {
            Some(true) if !self.styled.inner().disabled => {
                self.styled.inner().shared.lock().unwrap().focused = true;
                self.styled.dispatch(&[Flag::Focused])?;
            }
            Some(false) => {
                self.styled.inner().shared.lock().unwrap().focused = false;
                self.styled.dispatch(&[])?;
            }
            _ => {}
        }

        if clear_request {
            let value = {
                let mut shared = self.styled.inner().shared.lock().unwrap();
                shared.value.clear();
                shared.value.clone()
            };
            self.report_change(&value);
        }
        Ok(())
    }

    /// Re-resolve after a theme swap
    pub fn refresh(&mut self) -> Result<(), ThemeError> {
        self.styled.refresh()
    }

    fn report_change(&mut self, value: &str) {
        if let Some(callback) = self.on_change.as_mut() {
            callback(value);
        }
    }
}
