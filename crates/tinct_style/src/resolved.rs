//! Resolved styles
//!
//! A [`ResolvedStyle`] is the sole artifact handed to a presentation
//! component for one render: a flat property -> value map with every token
//! dereferenced. It is immutable once produced; the composition layer shares
//! it behind an `Arc` and replaces it wholesale on every state change.

use indexmap::IndexMap;
use tinct_core::Color;

use crate::value::StyleValue;

/// Flat property -> value mapping produced by resolution
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResolvedStyle {
    props: IndexMap<String, StyleValue>,
}

impl ResolvedStyle {
    pub(crate) fn from_props(props: IndexMap<String, StyleValue>) -> Self {
        Self { props }
    }

    pub fn get(&self, property: &str) -> Option<&StyleValue> {
        self.props.get(property)
    }

    /// Numeric property, if present and numeric
    pub fn number(&self, property: &str) -> Option<f64> {
        self.props.get(property).and_then(StyleValue::as_number)
    }

    /// String property, if present and a string
    pub fn string(&self, property: &str) -> Option<&str> {
        self.props.get(property).and_then(StyleValue::as_str)
    }

    /// Boolean property, if present and boolean
    pub fn boolean(&self, property: &str) -> Option<bool> {
        self.props.get(property).and_then(StyleValue::as_bool)
    }

    /// String property parsed as a color
    pub fn color(&self, property: &str) -> Option<Color> {
        self.string(property).and_then(Color::parse)
    }

    pub fn len(&self) -> usize {
        self.props.len()
    }

    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleValue)> {
        self.props.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Extract the sub-style for a prefixed property group.
    ///
    /// Widgets receive one flat style and split it into the structured
    /// groups they render (container, text, icon). `group("text")` collects
    /// every `textXxx` property under its bare name: `textColor` becomes
    /// `color`, `textFontSize` becomes `fontSize`.
    pub fn group(&self, prefix: &str) -> ResolvedStyle {
        let mut props = IndexMap::new();
        for (name, value) in &self.props {
            if let Some(rest) = strip_group_prefix(name, prefix) {
                props.insert(rest, value.clone());
            }
        }
        Self { props }
    }

    /// The flat style minus every property belonging to one of the given
    /// prefixed groups. Widgets use this for the container portion.
    pub fn without_prefixes(&self, prefixes: &[&str]) -> ResolvedStyle {
        let props = self
            .props
            .iter()
            .filter(|(name, _)| {
                !prefixes
                    .iter()
                    .any(|prefix| strip_group_prefix(name, prefix).is_some())
            })
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect();
        Self { props }
    }
}

/// `textColor` with prefix `text` -> `color`; `textureId` does not match
/// (the character after the prefix must be uppercase).
fn strip_group_prefix(name: &str, prefix: &str) -> Option<String> {
    let rest = name.strip_prefix(prefix)?;
    let mut chars = rest.chars();
    let first = chars.next()?;
    if !first.is_ascii_uppercase() {
        return None;
    }
    let mut bare = String::with_capacity(rest.len());
    bare.push(first.to_ascii_lowercase());
    bare.push_str(chars.as_str());
    Some(bare)
}

impl<'a> FromIterator<(&'a str, StyleValue)> for ResolvedStyle {
    fn from_iter<I: IntoIterator<Item = (&'a str, StyleValue)>>(iter: I) -> Self {
        Self {
            props: iter
                .into_iter()
                .map(|(name, value)| (name.to_owned(), value))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ResolvedStyle {
        ResolvedStyle::from_iter([
            ("backgroundColor", StyleValue::Str("#3366FF".into())),
            ("borderRadius", StyleValue::Number(4.0)),
            ("textColor", StyleValue::Str("#FFFFFF".into())),
            ("textFontSize", StyleValue::Number(14.0)),
            ("iconWidth", StyleValue::Number(16.0)),
            ("iconTintColor", StyleValue::Str("#FFFFFF".into())),
        ])
    }

    #[test]
    fn typed_accessors() {
        let style = sample();
        assert_eq!(style.string("backgroundColor"), Some("#3366FF"));
        assert_eq!(style.number("borderRadius"), Some(4.0));
        assert_eq!(style.number("backgroundColor"), None);
        assert_eq!(style.color("backgroundColor"), Color::parse("#3366FF"));
    }

    #[test]
    fn group_extracts_and_renames() {
        let text = sample().group("text");
        assert_eq!(text.len(), 2);
        assert_eq!(text.string("color"), Some("#FFFFFF"));
        assert_eq!(text.number("fontSize"), Some(14.0));
    }

    #[test]
    fn without_prefixes_keeps_container_props() {
        let container = sample().without_prefixes(&["text", "icon"]);
        assert_eq!(container.len(), 2);
        assert!(container.get("backgroundColor").is_some());
        assert!(container.get("borderRadius").is_some());
        assert!(container.get("textColor").is_none());
    }

    #[test]
    fn prefix_requires_camel_case_boundary() {
        let style = ResolvedStyle::from_iter([("textureId", StyleValue::Number(1.0))]);
        assert!(style.group("text").is_empty());
        assert_eq!(style.without_prefixes(&["text"]).len(), 1);
    }
}
