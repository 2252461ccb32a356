//! Provider-level integration tests: scope lifecycle, swap freshness and the
//! end-to-end resolution scenarios the toolkit guarantees.

use tinct_core::{Flag, InteractionState};
use tinct_style::{
    resolve, ComponentBuilder, MappingBuilder, StyleFragment, ThemeMapping, TokenStore,
    VariantSelectors,
};
use tinct_theme::presets::{self, ColorScheme};
use tinct_theme::{ScopeConfig, ThemeError, ThemeRegistry};

fn button_mapping() -> ThemeMapping {
    MappingBuilder::new("scenario")
        .component(
            "Button",
            ComponentBuilder::new()
                .appearance(
                    "filled",
                    StyleFragment::new().set("backgroundColor", "$color-primary"),
                )
                .appearance(
                    "outline",
                    StyleFragment::new().set("backgroundColor", "transparent"),
                )
                .appearance_default("filled")
                .state(
                    Flag::Active,
                    StyleFragment::new().set("backgroundColor", "$color-primary-600"),
                )
                .build(),
        )
        .build()
}

fn scenario_tokens() -> TokenStore {
    TokenStore::new()
        .set("color-primary", "#3366FF")
        .set("color-primary-600", "#2541CC")
}

#[test]
fn filled_button_scenario() {
    let registry = ThemeRegistry::new();
    registry
        .install(ScopeConfig::new(button_mapping(), scenario_tokens()))
        .unwrap();

    let (_, scope) = registry.current().unwrap();
    let selectors = VariantSelectors::new().appearance("filled");

    let resting = resolve(
        "Button",
        &scope.mapping,
        &scope.tokens,
        &selectors,
        &InteractionState::default(),
    )
    .unwrap();
    assert_eq!(resting.string("backgroundColor"), Some("#3366FF"));

    let pressed = resolve(
        "Button",
        &scope.mapping,
        &scope.tokens,
        &selectors,
        &InteractionState::from_flags(&[Flag::Active]),
    )
    .unwrap();
    assert_eq!(pressed.string("backgroundColor"), Some("#2541CC"));
}

#[test]
fn outline_button_ignores_primary_token_changes() {
    let registry = ThemeRegistry::new();
    let id = registry
        .install(ScopeConfig::new(button_mapping(), scenario_tokens()))
        .unwrap();

    let selectors = VariantSelectors::new().appearance("outline");
    let (_, scope) = registry.current().unwrap();
    let before = resolve(
        "Button",
        &scope.mapping,
        &scope.tokens,
        &selectors,
        &InteractionState::default(),
    )
    .unwrap();
    assert_eq!(before.string("backgroundColor"), Some("transparent"));

    // Retune the primary token and swap.
    let retuned = TokenStore::new()
        .set("color-primary", "#000000")
        .set("color-primary-600", "#111111");
    registry
        .swap(id, ScopeConfig::new(button_mapping(), retuned))
        .unwrap();

    let (_, scope) = registry.current().unwrap();
    let after = resolve(
        "Button",
        &scope.mapping,
        &scope.tokens,
        &selectors,
        &InteractionState::default(),
    )
    .unwrap();
    assert_eq!(after.string("backgroundColor"), Some("transparent"));
}

#[test]
fn swap_produces_fresh_token_values() {
    let registry = ThemeRegistry::new();
    let id = registry
        .install(presets::scope_config(ColorScheme::Light))
        .unwrap();
    let generation_before = registry.scope(id).unwrap().generation;

    let (_, light) = registry.current().unwrap();
    let light_style = resolve(
        "Text",
        &light.mapping,
        &light.tokens,
        &VariantSelectors::default(),
        &InteractionState::default(),
    )
    .unwrap();

    registry
        .swap(id, presets::scope_config(ColorScheme::Dark))
        .unwrap();

    // Generation bump guarantees caches keyed on it cannot serve the light
    // style after the swap.
    let dark = registry.scope(id).unwrap();
    assert!(dark.generation > generation_before);

    let dark_style = resolve(
        "Text",
        &dark.mapping,
        &dark.tokens,
        &VariantSelectors::default(),
        &InteractionState::default(),
    )
    .unwrap();
    assert_ne!(
        light_style.string("textColor"),
        dark_style.string("textColor")
    );
}

#[test]
fn swap_rejects_mapping_missing_mounted_components() {
    let registry = ThemeRegistry::new();
    let id = registry
        .install(presets::scope_config(ColorScheme::Light))
        .unwrap();
    registry.register_component("CheckBox");

    let err = registry
        .swap(id, ScopeConfig::new(button_mapping(), scenario_tokens()))
        .unwrap_err();
    assert_eq!(
        err,
        ThemeError::MissingComponents {
            mapping: "scenario".into(),
            components: vec!["CheckBox".into()],
        }
    );

    // The light preset is still active.
    let scope = registry.scope(id).unwrap();
    assert!(scope.mapping.has_component("CheckBox"));
}

#[test]
fn nested_scope_shadows_for_its_subtree_only() {
    let registry = ThemeRegistry::new();
    let root = registry
        .install(presets::scope_config(ColorScheme::Light))
        .unwrap();

    let branded = MappingBuilder::new("brand")
        .component(
            "Button",
            ComponentBuilder::new()
                .appearance(
                    "filled",
                    StyleFragment::new().set("backgroundColor", "#BADA55"),
                )
                .appearance_default("filled")
                .build(),
        )
        .build();

    {
        let _guard = registry
            .push_scope(ScopeConfig::new(branded, TokenStore::new()))
            .unwrap();

        // Code mounted under the inner scope sees the brand mapping.
        let (_, inner) = registry.current().unwrap();
        let style = resolve(
            "Button",
            &inner.mapping,
            &inner.tokens,
            &VariantSelectors::default(),
            &InteractionState::default(),
        )
        .unwrap();
        assert_eq!(style.string("backgroundColor"), Some("#BADA55"));

        // Instances mounted under the root scope keep resolving against it.
        let outer = registry.scope(root).unwrap();
        let style = resolve(
            "Button",
            &outer.mapping,
            &outer.tokens,
            &VariantSelectors::default(),
            &InteractionState::default(),
        )
        .unwrap();
        assert_ne!(style.string("backgroundColor"), Some("#BADA55"));
    }

    // Guard dropped: the root scope is current again.
    let (current, _) = registry.current().unwrap();
    assert_eq!(current, root);
}
