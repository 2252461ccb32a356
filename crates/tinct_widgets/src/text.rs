//! Text widget
//!
//! Non-interactive styled text. Appearance selects the color role, category
//! the type scale; both come straight from the mapping.

use tinct_style::ResolvedStyle;
use tinct_theme::{ThemeError, ThemeRegistry};

use crate::styled::{Presentation, Styled};

/// Presentation component behind [`Text`]
pub struct TextBody {
    content: String,
    style: ResolvedStyle,
}

impl Presentation for TextBody {
    const NAME: &'static str = "Text";

    fn apply_style(&mut self, style: &ResolvedStyle) {
        self.style = style.group("text");
    }
}

/// Styled text run
pub struct Text {
    styled: Styled<TextBody>,
}

impl Text {
    /// Create a text run mounted under the process-wide registry
    pub fn new(content: impl Into<String>) -> Result<Self, ThemeError> {
        Self::mount_in(content, &ThemeRegistry::global())
    }

    /// Create a text run mounted under the given registry
    pub fn mount_in(
        content: impl Into<String>,
        registry: &ThemeRegistry,
    ) -> Result<Self, ThemeError> {
        let body = TextBody {
            content: content.into(),
            style: ResolvedStyle::default(),
        };
        Ok(Self {
            styled: Styled::mount_in(body, registry)?,
        })
    }

    pub fn content(&self) -> &str {
        &self.styled.inner().content
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.styled.inner_mut().content = content.into();
    }

    /// The text sub-style (color, font size) for the current render
    pub fn style(&self) -> &ResolvedStyle {
        &self.styled.inner().style
    }

    /// Color role: `default`, `hint` or `alternative`
    pub fn set_appearance(&mut self, value: impl Into<String>) -> Result<(), ThemeError> {
        self.styled.set_appearance(value)
    }

    /// Type-scale category (`h1`, `p1`, `c1`, ...), carried on the size
    /// dimension
    pub fn set_category(&mut self, value: impl Into<String>) -> Result<(), ThemeError> {
        self.styled.set_size(value)
    }

    /// Re-resolve after a theme swap
    pub fn refresh(&mut self) -> Result<(), ThemeError> {
        self.styled.refresh()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tinct_theme::presets::{self, ColorScheme};

    fn registry() -> ThemeRegistry {
        let registry = ThemeRegistry::new();
        registry
            .install(presets::scope_config(ColorScheme::Light))
            .unwrap();
        registry
    }

    #[test]
    fn default_text_resolves_color_and_size() {
        let registry = registry();
        let text = Text::mount_in("hello", &registry).unwrap();
        assert!(text.style().string("color").is_some());
        assert_eq!(text.style().number("fontSize"), Some(15.0));
    }

    #[test]
    fn category_changes_font_size() {
        let registry = registry();
        let mut text = Text::mount_in("Heading", &registry).unwrap();
        text.set_category("h1").unwrap();
        assert_eq!(text.style().number("fontSize"), Some(36.0));
    }

    #[test]
    fn hint_appearance_changes_color() {
        let registry = registry();
        let mut text = Text::mount_in("hint", &registry).unwrap();
        let basic = text.style().string("color").map(str::to_owned);
        text.set_appearance("hint").unwrap();
        assert_ne!(text.style().string("color").map(str::to_owned), basic);
    }

    #[test]
    fn theme_swap_restyles_on_refresh() {
        let registry = registry();
        let mut text = Text::mount_in("hello", &registry).unwrap();
        let light = text.style().string("color").map(str::to_owned);

        registry
            .swap_current(presets::scope_config(ColorScheme::Dark))
            .unwrap();
        text.refresh().unwrap();
        assert_ne!(text.style().string("color").map(str::to_owned), light);
    }
}
