//! Theme mapping model
//!
//! A [`ThemeMapping`] declares, per component, which style fragments apply
//! for each variant dimension value and each interaction flag. Mappings are
//! external artifacts (serde documents) or built in code with
//! [`MappingBuilder`]; once installed in a provider scope they are read-only
//! and only ever replaced wholesale.
//!
//! Property names starting with `_` are internal to the mapping (hints for
//! tooling) and are stripped by the resolver before a style reaches a widget.

use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tinct_core::Flag;

use crate::value::FragmentValue;

/// An independent axis of visual variation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Dimension {
    Appearance,
    Size,
    Status,
    State,
}

/// Fixed dimension evaluation order.
///
/// Later dimensions override properties set by earlier ones; `State` is last
/// and highest priority. This list is the single source of truth for merge
/// precedence and is tested directly.
pub const DIMENSION_ORDER: [Dimension; 4] = [
    Dimension::Appearance,
    Dimension::Size,
    Dimension::Status,
    Dimension::State,
];

/// A partial property -> value mapping contributed by one variant value or
/// interaction flag
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleFragment {
    entries: IndexMap<String, FragmentValue>,
}

impl StyleFragment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property (builder form). String values starting with `$` become
    /// token references, matching document semantics.
    #[must_use]
    pub fn set(mut self, property: impl Into<String>, value: impl Into<FragmentValue>) -> Self {
        self.entries.insert(property.into(), value.into());
        self
    }

    pub fn get(&self, property: &str) -> Option<&FragmentValue> {
        self.entries.get(property)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FragmentValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Overlay `other` onto this fragment, property by property
    pub fn merge_from(&mut self, other: &StyleFragment) {
        for (property, value) in &other.entries {
            self.entries.insert(property.clone(), value.clone());
        }
    }
}

/// One variant dimension of a component: discrete values mapped to fragments
/// plus an optional default value used when the instance does not specify
/// the dimension
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DimensionMapping {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    #[serde(default)]
    pub variants: FxHashMap<String, StyleFragment>,
}

impl DimensionMapping {
    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    pub fn get(&self, value: &str) -> Option<&StyleFragment> {
        self.variants.get(value)
    }

    /// The fragment for the declared default value, if any
    pub fn default_fragment(&self) -> Option<&StyleFragment> {
        self.default.as_deref().and_then(|value| self.variants.get(value))
    }
}

/// Interaction-flag fragments for a component, keyed by flag
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateMapping {
    variants: FxHashMap<String, StyleFragment>,
}

impl StateMapping {
    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    pub fn get(&self, flag: Flag) -> Option<&StyleFragment> {
        self.variants.get(flag.key())
    }

    pub fn insert(&mut self, flag: Flag, fragment: StyleFragment) {
        self.variants.insert(flag.key().to_owned(), fragment);
    }

    fn merge_from(&mut self, other: &StateMapping) {
        for (key, fragment) in &other.variants {
            self.variants
                .entry(key.clone())
                .and_modify(|existing| existing.merge_from(fragment))
                .or_insert_with(|| fragment.clone());
        }
    }
}

/// All variant groups of one component
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ComponentMapping {
    #[serde(default, skip_serializing_if = "DimensionMapping::is_empty")]
    pub appearance: DimensionMapping,
    #[serde(default, skip_serializing_if = "DimensionMapping::is_empty")]
    pub size: DimensionMapping,
    #[serde(default, skip_serializing_if = "DimensionMapping::is_empty")]
    pub status: DimensionMapping,
    #[serde(default, skip_serializing_if = "StateMapping::is_empty")]
    pub state: StateMapping,
}

impl ComponentMapping {
    /// The variant dimension for one of the selector axes.
    ///
    /// `State` is not selector-driven and is handled separately by the
    /// resolver.
    pub fn dimension(&self, dimension: Dimension) -> Option<&DimensionMapping> {
        match dimension {
            Dimension::Appearance => Some(&self.appearance),
            Dimension::Size => Some(&self.size),
            Dimension::Status => Some(&self.status),
            Dimension::State => None,
        }
    }

    fn merge_from(&mut self, other: &ComponentMapping) {
        merge_dimension(&mut self.appearance, &other.appearance);
        merge_dimension(&mut self.size, &other.size);
        merge_dimension(&mut self.status, &other.status);
        self.state.merge_from(&other.state);
    }
}

fn merge_dimension(base: &mut DimensionMapping, other: &DimensionMapping) {
    if other.default.is_some() {
        base.default = other.default.clone();
    }
    for (value, fragment) in &other.variants {
        base.variants
            .entry(value.clone())
            .and_modify(|existing| existing.merge_from(fragment))
            .or_insert_with(|| fragment.clone());
    }
}

/// A named, versioned style-mapping specification: component name -> variant
/// groups
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ThemeMapping {
    pub name: String,
    #[serde(default)]
    pub version: u32,
    #[serde(default)]
    components: FxHashMap<String, ComponentMapping>,
}

impl ThemeMapping {
    pub fn component(&self, name: &str) -> Option<&ComponentMapping> {
        self.components.get(name)
    }

    pub fn has_component(&self, name: &str) -> bool {
        self.components.contains_key(name)
    }

    pub fn component_names(&self) -> impl Iterator<Item = &str> {
        self.components.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Deep-merge `custom` over this mapping: per component, per dimension,
    /// per variant, per property — later keys override earlier ones, same
    /// priority rules as resolution itself.
    pub fn merge_from(&mut self, custom: &ThemeMapping) {
        for (name, component) in &custom.components {
            self.components
                .entry(name.clone())
                .and_modify(|existing| existing.merge_from(component))
                .or_insert_with(|| component.clone());
        }
    }
}

/// Builder for [`ThemeMapping`]
#[derive(Debug, Default)]
pub struct MappingBuilder {
    name: String,
    version: u32,
    components: FxHashMap<String, ComponentMapping>,
}

impl MappingBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn version(mut self, version: u32) -> Self {
        self.version = version;
        self
    }

    #[must_use]
    pub fn component(mut self, name: impl Into<String>, mapping: ComponentMapping) -> Self {
        self.components.insert(name.into(), mapping);
        self
    }

    pub fn build(self) -> ThemeMapping {
        ThemeMapping {
            name: self.name,
            version: self.version,
            components: self.components,
        }
    }
}

/// Builder for [`ComponentMapping`]
#[derive(Debug, Default)]
pub struct ComponentBuilder {
    mapping: ComponentMapping,
}

impl ComponentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn appearance(mut self, value: impl Into<String>, fragment: StyleFragment) -> Self {
        self.mapping.appearance.variants.insert(value.into(), fragment);
        self
    }

    #[must_use]
    pub fn appearance_default(mut self, value: impl Into<String>) -> Self {
        self.mapping.appearance.default = Some(value.into());
        self
    }

    #[must_use]
    pub fn size(mut self, value: impl Into<String>, fragment: StyleFragment) -> Self {
        self.mapping.size.variants.insert(value.into(), fragment);
        self
    }

    #[must_use]
    pub fn size_default(mut self, value: impl Into<String>) -> Self {
        self.mapping.size.default = Some(value.into());
        self
    }

    #[must_use]
    pub fn status(mut self, value: impl Into<String>, fragment: StyleFragment) -> Self {
        self.mapping.status.variants.insert(value.into(), fragment);
        self
    }

    #[must_use]
    pub fn status_default(mut self, value: impl Into<String>) -> Self {
        self.mapping.status.default = Some(value.into());
        self
    }

    #[must_use]
    pub fn state(mut self, flag: Flag, fragment: StyleFragment) -> Self {
        self.mapping.state.insert(flag, fragment);
        self
    }

    pub fn build(self) -> ComponentMapping {
        self.mapping
    }
}
