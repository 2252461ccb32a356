//! The mapping resolver
//!
//! [`resolve`] is a pure function of its inputs: identical mapping, token
//! store, selectors and interaction state always produce an identical
//! [`ResolvedStyle`]. Fragments accumulate in [`DIMENSION_ORDER`], later
//! dimensions overwriting earlier ones on property collisions; interaction
//! flags apply last, in [`FLAG_MERGE_ORDER`], so simultaneous flags are
//! deterministic regardless of dispatch history.

use indexmap::IndexMap;
use tinct_core::{InteractionState, FLAG_MERGE_ORDER};

use crate::error::StyleError;
use crate::mapping::{Dimension, StyleFragment, ThemeMapping, DIMENSION_ORDER};
use crate::resolved::ResolvedStyle;
use crate::tokens::TokenStore;
use crate::value::FragmentValue;

/// The variant values one component instance selects, one per dimension.
///
/// A `None` axis falls back to the dimension's declared default.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct VariantSelectors {
    pub appearance: Option<String>,
    pub size: Option<String>,
    pub status: Option<String>,
}

impl VariantSelectors {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn appearance(mut self, value: impl Into<String>) -> Self {
        self.appearance = Some(value.into());
        self
    }

    #[must_use]
    pub fn size(mut self, value: impl Into<String>) -> Self {
        self.size = Some(value.into());
        self
    }

    #[must_use]
    pub fn status(mut self, value: impl Into<String>) -> Self {
        self.status = Some(value.into());
        self
    }

    fn get(&self, dimension: Dimension) -> Option<&str> {
        match dimension {
            Dimension::Appearance => self.appearance.as_deref(),
            Dimension::Size => self.size.as_deref(),
            Dimension::Status => self.status.as_deref(),
            Dimension::State => None,
        }
    }
}

/// Resolve the style for `component` under the given mapping, theme tokens,
/// variant selectors and interaction state.
///
/// Fails with [`StyleError::UnknownComponent`] when the mapping has no entry
/// for `component` and with [`StyleError::CyclicTokenReference`] when a token
/// chain loops. An unmatched variant value falls back to the dimension's
/// default (or the dimension is skipped); a missing token resolves to the
/// property being absent from the result. Both recoveries are logged.
pub fn resolve(
    component: &str,
    mapping: &ThemeMapping,
    tokens: &TokenStore,
    selectors: &VariantSelectors,
    interaction: &InteractionState,
) -> Result<ResolvedStyle, StyleError> {
    let groups = mapping
        .component(component)
        .ok_or_else(|| StyleError::UnknownComponent {
            component: component.to_owned(),
        })?;

    let mut accumulated: IndexMap<&str, &FragmentValue> = IndexMap::new();

    for dimension in DIMENSION_ORDER {
        let Some(variants) = groups.dimension(dimension) else {
            // State is flag-driven, not selector-driven.
            continue;
        };
        if variants.is_empty() {
            continue;
        }
        let fragment = match selectors.get(dimension) {
            Some(requested) => match variants.get(requested) {
                Some(fragment) => Some(fragment),
                None => {
                    tracing::debug!(
                        component,
                        ?dimension,
                        value = requested,
                        "unknown variant value, falling back to dimension default"
                    );
                    variants.default_fragment()
                }
            },
            None => variants.default_fragment(),
        };
        if let Some(fragment) = fragment {
            merge_fragment(&mut accumulated, fragment);
        }
    }

    for flag in FLAG_MERGE_ORDER {
        if !interaction.contains(flag) {
            continue;
        }
        if let Some(fragment) = groups.state.get(flag) {
            merge_fragment(&mut accumulated, fragment);
        }
    }

    let mut props = IndexMap::with_capacity(accumulated.len());
    for (property, value) in accumulated {
        if property.starts_with('_') {
            // Internal-only mapping hints never reach widgets.
            continue;
        }
        match value {
            FragmentValue::Literal(literal) => {
                props.insert(property.to_owned(), literal.clone());
            }
            FragmentValue::Token(name) => match tokens.resolve(name)? {
                Some(literal) => {
                    props.insert(property.to_owned(), literal.clone());
                }
                None => {
                    tracing::warn!(
                        component,
                        property,
                        token = %name,
                        "missing theme token, property left unresolved"
                    );
                }
            },
        }
    }

    Ok(ResolvedStyle::from_props(props))
}

fn merge_fragment<'a>(
    accumulated: &mut IndexMap<&'a str, &'a FragmentValue>,
    fragment: &'a StyleFragment,
) {
    for (property, value) in fragment.iter() {
        accumulated.insert(property, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::{ComponentBuilder, MappingBuilder};
    use crate::value::StyleValue;
    use tinct_core::Flag;

    fn mapping() -> ThemeMapping {
        MappingBuilder::new("base")
            .component(
                "Button",
                ComponentBuilder::new()
                    .appearance(
                        "filled",
                        StyleFragment::new()
                            .set("backgroundColor", "$color-primary")
                            .set("textColor", "#FFFFFF")
                            .set("_styling", "button-filled"),
                    )
                    .appearance("outline", StyleFragment::new().set("backgroundColor", "transparent"))
                    .appearance_default("filled")
                    .size("medium", StyleFragment::new().set("minHeight", 40.0))
                    .size(
                        "large",
                        StyleFragment::new()
                            .set("minHeight", 56.0)
                            .set("textColor", "#EEEEEE"),
                    )
                    .size_default("medium")
                    .status("danger", StyleFragment::new().set("backgroundColor", "$color-danger"))
                    .state(Flag::Hover, StyleFragment::new().set("backgroundColor", "$color-primary-400"))
                    .state(Flag::Active, StyleFragment::new().set("backgroundColor", "$color-primary-600"))
                    .state(
                        Flag::Disabled,
                        StyleFragment::new()
                            .set("backgroundColor", "$color-disabled")
                            .set("textColor", "$color-text-disabled"),
                    )
                    .build(),
            )
            .build()
    }

    fn tokens() -> TokenStore {
        TokenStore::new()
            .set("color-primary", "#3366FF")
            .set("color-primary-400", "#598BFF")
            .set("color-primary-600", "#2541CC")
            .set("color-danger", "#FF3D71")
            .set("color-disabled", "#C5CEE0")
            .set("color-text-disabled", "#8F9BB3")
    }

    fn resolve_with(selectors: VariantSelectors, flags: &[Flag]) -> ResolvedStyle {
        resolve(
            "Button",
            &mapping(),
            &tokens(),
            &selectors,
            &InteractionState::from_flags(flags),
        )
        .unwrap()
    }

    #[test]
    fn filled_appearance_dereferences_primary_token() {
        let style = resolve_with(VariantSelectors::new().appearance("filled"), &[]);
        assert_eq!(style.string("backgroundColor"), Some("#3366FF"));
    }

    #[test]
    fn active_state_overrides_appearance() {
        let style = resolve_with(VariantSelectors::new().appearance("filled"), &[Flag::Active]);
        assert_eq!(style.string("backgroundColor"), Some("#2541CC"));
    }

    #[test]
    fn outline_appearance_is_literal_and_token_independent() {
        let style = resolve_with(VariantSelectors::new().appearance("outline"), &[]);
        assert_eq!(style.string("backgroundColor"), Some("transparent"));

        // Changing the primary token must not affect the outline style.
        let retuned = tokens().set("color-primary", "#000000");
        let style = resolve(
            "Button",
            &mapping(),
            &retuned,
            &VariantSelectors::new().appearance("outline"),
            &InteractionState::default(),
        )
        .unwrap();
        assert_eq!(style.string("backgroundColor"), Some("transparent"));
    }

    #[test]
    fn unknown_component_is_fatal() {
        let err = resolve(
            "Slider",
            &mapping(),
            &tokens(),
            &VariantSelectors::default(),
            &InteractionState::default(),
        )
        .unwrap_err();
        assert_eq!(
            err,
            StyleError::UnknownComponent {
                component: "Slider".into()
            }
        );
    }

    #[test]
    fn unknown_variant_value_falls_back_to_default() {
        let style = resolve_with(VariantSelectors::new().appearance("neon"), &[]);
        // "filled" is the declared default
        assert_eq!(style.string("backgroundColor"), Some("#3366FF"));
    }

    #[test]
    fn unspecified_dimension_uses_default() {
        let style = resolve_with(VariantSelectors::new(), &[]);
        assert_eq!(style.number("minHeight"), Some(40.0));
    }

    #[test]
    fn dimension_without_default_is_skipped() {
        // status declares no default and no selector is given
        let style = resolve_with(VariantSelectors::new(), &[]);
        assert_eq!(style.string("backgroundColor"), Some("#3366FF"));

        // An unmatched status value with no default is also skipped, not fatal.
        let style = resolve_with(VariantSelectors::new().status("mystery"), &[]);
        assert_eq!(style.string("backgroundColor"), Some("#3366FF"));
    }

    #[test]
    fn later_dimension_overrides_earlier_on_collision() {
        // size=large defines textColor, overriding the appearance fragment
        let style = resolve_with(VariantSelectors::new().size("large"), &[]);
        assert_eq!(style.string("textColor"), Some("#EEEEEE"));

        // and status overrides appearance for backgroundColor
        let style = resolve_with(VariantSelectors::new().status("danger"), &[]);
        assert_eq!(style.string("backgroundColor"), Some("#FF3D71"));
    }

    #[test]
    fn state_overrides_status() {
        let style = resolve_with(VariantSelectors::new().status("danger"), &[Flag::Active]);
        assert_eq!(style.string("backgroundColor"), Some("#2541CC"));
    }

    #[test]
    fn simultaneous_flags_merge_in_canonical_order() {
        // Active comes after Hover in FLAG_MERGE_ORDER, so it wins no matter
        // how the flags were dispatched.
        let style = resolve_with(VariantSelectors::new(), &[Flag::Hover, Flag::Active]);
        assert_eq!(style.string("backgroundColor"), Some("#2541CC"));
        let style = resolve_with(VariantSelectors::new(), &[Flag::Active, Flag::Hover]);
        assert_eq!(style.string("backgroundColor"), Some("#2541CC"));
    }

    #[test]
    fn disabled_dominates_hover_and_active() {
        let style = resolve_with(
            VariantSelectors::new(),
            &[Flag::Hover, Flag::Active, Flag::Disabled],
        );
        assert_eq!(style.string("backgroundColor"), Some("#C5CEE0"));
        assert_eq!(style.string("textColor"), Some("#8F9BB3"));
    }

    #[test]
    fn cyclic_tokens_fail_instead_of_hanging() {
        let cyclic = TokenStore::new()
            .set("color-primary", "$color-brand")
            .set("color-brand", "$color-primary");
        let err = resolve(
            "Button",
            &mapping(),
            &cyclic,
            &VariantSelectors::new().appearance("filled"),
            &InteractionState::default(),
        )
        .unwrap_err();
        assert!(matches!(err, StyleError::CyclicTokenReference { .. }));
    }

    #[test]
    fn missing_token_leaves_property_absent() {
        let sparse = TokenStore::new(); // no tokens at all
        let style = resolve(
            "Button",
            &mapping(),
            &sparse,
            &VariantSelectors::new().appearance("filled"),
            &InteractionState::default(),
        )
        .unwrap();
        assert_eq!(style.get("backgroundColor"), None);
        // Literal properties are unaffected
        assert_eq!(style.string("textColor"), Some("#FFFFFF"));
    }

    #[test]
    fn internal_properties_are_stripped() {
        let style = resolve_with(VariantSelectors::new().appearance("filled"), &[]);
        assert_eq!(style.get("_styling"), None);
    }

    #[test]
    fn resolution_is_deterministic() {
        let selectors = VariantSelectors::new().appearance("filled").size("large");
        let state = InteractionState::from_flags(&[Flag::Hover, Flag::Focused]);
        let first = resolve("Button", &mapping(), &tokens(), &selectors, &state).unwrap();
        for _ in 0..3 {
            let again = resolve("Button", &mapping(), &tokens(), &selectors, &state).unwrap();
            assert_eq!(first, again);
        }
    }

    #[test]
    fn flag_without_declared_fragment_is_ignored() {
        let style = resolve_with(VariantSelectors::new(), &[Flag::Checked]);
        assert_eq!(style.string("backgroundColor"), Some("#3366FF"));
    }

    #[test]
    fn number_values_survive_resolution() {
        let style = resolve_with(VariantSelectors::new().size("medium"), &[]);
        assert_eq!(
            style.get("minHeight"),
            Some(&StyleValue::Number(40.0))
        );
    }
}
