//! Built-in theme preset
//!
//! A default mapping covering every shipped widget plus light/dark token
//! stores, so the toolkit is usable without authoring documents first.
//! Semantic tokens alias into a shared palette, which keeps the light and
//! dark stores structurally identical and exercises token chaining.

use std::fmt::{Display, Formatter};

use tinct_core::Flag;
use tinct_style::{ComponentBuilder, MappingBuilder, StyleFragment, ThemeMapping, TokenStore};

use crate::registry::ScopeConfig;

/// Light or dark rendition of the preset
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorScheme {
    Light,
    Dark,
}

impl ColorScheme {
    pub fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Stable id for config/serialization
    pub fn id(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl Display for ColorScheme {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// Provider configuration for the built-in preset
pub fn scope_config(scheme: ColorScheme) -> ScopeConfig {
    ScopeConfig::new(default_mapping(), token_store(scheme))
}

/// The built-in token store for a scheme
pub fn token_store(scheme: ColorScheme) -> TokenStore {
    let palette = TokenStore::new()
        .set("palette-blue-400", "#598BFF")
        .set("palette-blue-500", "#3366FF")
        .set("palette-blue-600", "#2541CC")
        .set("palette-green-500", "#00E096")
        .set("palette-red-400", "#FF708D")
        .set("palette-red-500", "#FF3D71")
        .set("palette-grey-200", "#EDF1F7")
        .set("palette-grey-300", "#C5CEE0")
        .set("palette-grey-500", "#8F9BB3")
        .set("palette-grey-700", "#2E3A59")
        .set("palette-grey-900", "#222B45");

    let semantic = match scheme {
        ColorScheme::Light => palette
            .set("background-basic", "#FFFFFF")
            .set("background-alternative", "$palette-grey-200")
            .set("background-disabled", "$palette-grey-300")
            .set("border-basic", "$palette-grey-300")
            .set("text-basic-color", "$palette-grey-900")
            .set("text-hint-color", "$palette-grey-500")
            .set("text-control-color", "#FFFFFF"),
        ColorScheme::Dark => palette
            .set("background-basic", "#222B45")
            .set("background-alternative", "$palette-grey-700")
            .set("background-disabled", "$palette-grey-700")
            .set("border-basic", "$palette-grey-700")
            .set("text-basic-color", "#FFFFFF")
            .set("text-hint-color", "$palette-grey-500")
            .set("text-control-color", "#FFFFFF"),
    };

    semantic
        .set("color-primary", "$palette-blue-500")
        .set("color-primary-hover", "$palette-blue-400")
        .set("color-primary-active", "$palette-blue-600")
        .set("color-success", "$palette-green-500")
        .set("color-danger", "$palette-red-500")
        .set("color-danger-active", "$palette-red-400")
        .set("text-disabled-color", "$palette-grey-500")
}

/// The built-in mapping covering every shipped widget
pub fn default_mapping() -> ThemeMapping {
    MappingBuilder::new("tinct-default")
        .version(1)
        .component("Button", button_mapping())
        .component("CheckBox", checkbox_mapping())
        .component("Radio", radio_mapping())
        .component("Input", input_mapping())
        .component("MenuItem", menu_item_mapping())
        .component("Text", text_mapping())
        .build()
}

fn button_mapping() -> tinct_style::ComponentMapping {
    ComponentBuilder::new()
        .appearance(
            "filled",
            StyleFragment::new()
                .set("backgroundColor", "$color-primary")
                .set("borderColor", "$color-primary")
                .set("borderWidth", 1.0)
                .set("borderRadius", 4.0)
                .set("textColor", "$text-control-color")
                .set("iconTintColor", "$text-control-color"),
        )
        .appearance(
            "outline",
            StyleFragment::new()
                .set("backgroundColor", "transparent")
                .set("borderColor", "$color-primary")
                .set("borderWidth", 1.0)
                .set("borderRadius", 4.0)
                .set("textColor", "$color-primary")
                .set("iconTintColor", "$color-primary"),
        )
        .appearance(
            "ghost",
            StyleFragment::new()
                .set("backgroundColor", "transparent")
                .set("borderWidth", 0.0)
                .set("borderRadius", 4.0)
                .set("textColor", "$color-primary")
                .set("iconTintColor", "$color-primary"),
        )
        .appearance_default("filled")
        .size(
            "small",
            StyleFragment::new()
                .set("minHeight", 32.0)
                .set("paddingHorizontal", 12.0)
                .set("paddingVertical", 6.0)
                .set("textFontSize", 12.0)
                .set("iconWidth", 12.0)
                .set("iconHeight", 12.0)
                .set("iconMarginHorizontal", 4.0),
        )
        .size(
            "medium",
            StyleFragment::new()
                .set("minHeight", 40.0)
                .set("paddingHorizontal", 16.0)
                .set("paddingVertical", 8.0)
                .set("textFontSize", 14.0)
                .set("iconWidth", 16.0)
                .set("iconHeight", 16.0)
                .set("iconMarginHorizontal", 6.0),
        )
        .size(
            "large",
            StyleFragment::new()
                .set("minHeight", 56.0)
                .set("paddingHorizontal", 20.0)
                .set("paddingVertical", 12.0)
                .set("textFontSize", 16.0)
                .set("iconWidth", 20.0)
                .set("iconHeight", 20.0)
                .set("iconMarginHorizontal", 8.0),
        )
        .size_default("medium")
        .status(
            "danger",
            StyleFragment::new()
                .set("backgroundColor", "$color-danger")
                .set("borderColor", "$color-danger"),
        )
        .status(
            "success",
            StyleFragment::new()
                .set("backgroundColor", "$color-success")
                .set("borderColor", "$color-success"),
        )
        .status_default("primary")
        .status("primary", StyleFragment::new())
        .state(
            Flag::Hover,
            StyleFragment::new().set("backgroundColor", "$color-primary-hover"),
        )
        .state(
            Flag::Focused,
            StyleFragment::new().set("borderColor", "$color-primary-active"),
        )
        .state(
            Flag::Active,
            StyleFragment::new().set("backgroundColor", "$color-primary-active"),
        )
        .state(
            Flag::Disabled,
            StyleFragment::new()
                .set("backgroundColor", "$background-disabled")
                .set("borderColor", "$background-disabled")
                .set("textColor", "$text-disabled-color")
                .set("iconTintColor", "$text-disabled-color"),
        )
        .build()
}

fn checkbox_mapping() -> tinct_style::ComponentMapping {
    ComponentBuilder::new()
        .appearance(
            "default",
            StyleFragment::new()
                .set("width", 20.0)
                .set("height", 20.0)
                .set("borderRadius", 3.0)
                .set("borderWidth", 1.0)
                .set("borderColor", "$border-basic")
                .set("backgroundColor", "$background-basic")
                .set("iconTintColor", "transparent")
                .set("textColor", "$text-basic-color")
                .set("textFontSize", 14.0)
                .set("textMarginHorizontal", 8.0),
        )
        .appearance_default("default")
        .status(
            "danger",
            StyleFragment::new().set("borderColor", "$color-danger"),
        )
        .status_default("basic")
        .status("basic", StyleFragment::new())
        .state(
            Flag::Checked,
            StyleFragment::new()
                .set("backgroundColor", "$color-primary")
                .set("borderColor", "$color-primary")
                .set("iconTintColor", "$text-control-color"),
        )
        .state(
            Flag::Indeterminate,
            StyleFragment::new()
                .set("backgroundColor", "$color-primary")
                .set("borderColor", "$color-primary")
                .set("iconTintColor", "$text-control-color"),
        )
        .state(
            Flag::Active,
            StyleFragment::new().set("borderColor", "$color-primary-active"),
        )
        .state(
            Flag::Disabled,
            StyleFragment::new()
                .set("backgroundColor", "$background-disabled")
                .set("borderColor", "$background-disabled")
                .set("textColor", "$text-disabled-color"),
        )
        .build()
}

fn radio_mapping() -> tinct_style::ComponentMapping {
    ComponentBuilder::new()
        .appearance(
            "default",
            StyleFragment::new()
                .set("width", 20.0)
                .set("height", 20.0)
                .set("borderRadius", 10.0)
                .set("borderWidth", 1.0)
                .set("borderColor", "$border-basic")
                .set("backgroundColor", "$background-basic")
                .set("iconTintColor", "transparent")
                .set("textColor", "$text-basic-color")
                .set("textFontSize", 14.0)
                .set("textMarginHorizontal", 8.0),
        )
        .appearance_default("default")
        .state(
            Flag::Checked,
            StyleFragment::new()
                .set("borderColor", "$color-primary")
                .set("iconTintColor", "$color-primary"),
        )
        .state(
            Flag::Active,
            StyleFragment::new().set("borderColor", "$color-primary-active"),
        )
        .state(
            Flag::Disabled,
            StyleFragment::new()
                .set("borderColor", "$background-disabled")
                .set("textColor", "$text-disabled-color"),
        )
        .build()
}

fn input_mapping() -> tinct_style::ComponentMapping {
    ComponentBuilder::new()
        .appearance(
            "default",
            StyleFragment::new()
                .set("backgroundColor", "$background-alternative")
                .set("borderColor", "$border-basic")
                .set("borderWidth", 1.0)
                .set("borderRadius", 4.0)
                .set("paddingHorizontal", 12.0)
                .set("paddingVertical", 8.0)
                .set("textColor", "$text-basic-color")
                .set("textFontSize", 14.0)
                .set("placeholderColor", "$text-hint-color"),
        )
        .appearance_default("default")
        .status(
            "danger",
            StyleFragment::new().set("borderColor", "$color-danger"),
        )
        .status_default("basic")
        .status("basic", StyleFragment::new())
        .state(
            Flag::Hover,
            StyleFragment::new().set("borderColor", "$palette-grey-500"),
        )
        .state(
            Flag::Focused,
            StyleFragment::new()
                .set("borderColor", "$color-primary")
                .set("backgroundColor", "$background-basic"),
        )
        .state(
            Flag::Disabled,
            StyleFragment::new()
                .set("backgroundColor", "$background-disabled")
                .set("textColor", "$text-disabled-color"),
        )
        .build()
}

fn menu_item_mapping() -> tinct_style::ComponentMapping {
    ComponentBuilder::new()
        .appearance(
            "default",
            StyleFragment::new()
                .set("backgroundColor", "transparent")
                .set("paddingHorizontal", 16.0)
                .set("paddingVertical", 10.0)
                .set("textColor", "$text-basic-color")
                .set("textFontSize", 14.0)
                .set("iconWidth", 16.0)
                .set("iconHeight", 16.0)
                .set("iconTintColor", "$text-hint-color"),
        )
        .appearance_default("default")
        .state(
            Flag::Hover,
            StyleFragment::new().set("backgroundColor", "$background-alternative"),
        )
        .state(
            Flag::Focused,
            StyleFragment::new().set("backgroundColor", "$background-alternative"),
        )
        .state(
            Flag::Active,
            StyleFragment::new().set("backgroundColor", "$background-disabled"),
        )
        .state(
            Flag::Selected,
            StyleFragment::new()
                .set("backgroundColor", "$background-alternative")
                .set("textColor", "$color-primary")
                .set("iconTintColor", "$color-primary"),
        )
        .state(
            Flag::Disabled,
            StyleFragment::new().set("textColor", "$text-disabled-color"),
        )
        .build()
}

fn text_mapping() -> tinct_style::ComponentMapping {
    ComponentBuilder::new()
        .appearance(
            "default",
            StyleFragment::new().set("textColor", "$text-basic-color"),
        )
        .appearance(
            "hint",
            StyleFragment::new().set("textColor", "$text-hint-color"),
        )
        .appearance(
            "alternative",
            StyleFragment::new().set("textColor", "$text-control-color"),
        )
        .appearance_default("default")
        .size("h1", StyleFragment::new().set("textFontSize", 36.0))
        .size("h2", StyleFragment::new().set("textFontSize", 32.0))
        .size("s1", StyleFragment::new().set("textFontSize", 15.0))
        .size("p1", StyleFragment::new().set("textFontSize", 15.0))
        .size("p2", StyleFragment::new().set("textFontSize", 13.0))
        .size("c1", StyleFragment::new().set("textFontSize", 12.0))
        .size_default("p1")
        .build()
}
