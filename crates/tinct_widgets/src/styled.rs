//! Styled-component composition
//!
//! [`Styled<P>`] wraps a presentation component and wires it to the
//! style-resolution engine. It owns exactly one interaction state for the
//! component's lifetime, re-resolves whenever props, theme or interaction
//! state change, and hands the wrapped component a fresh resolved style each
//! time. Re-resolution is synchronous: the style visible after a dispatch
//! returns reflects that dispatch and all prior ones in call order.

use std::sync::Arc;

use tinct_core::{events::event_types, Event, Flag, InteractionState};
use tinct_style::{resolve, CacheKey, ResolvedStyle, StyleCache, StyleError, VariantSelectors};
use tinct_theme::{ScopeId, ThemeError, ThemeRegistry};

/// The capability interface a presentation component implements to take part
/// in styling.
///
/// Components receive styles through [`apply_style`](Presentation::apply_style)
/// and drive their interaction state through the responder hooks, which all
/// default to no-ops. Composition replaces subclassing: any type can
/// implement exactly the hooks it needs.
pub trait Presentation {
    /// Component name used for mapping lookup. Must be unique within one
    /// mapping.
    const NAME: &'static str;

    /// Receive a freshly resolved style. Called on mount and after every
    /// prop, theme or interaction change. The style must not be mutated;
    /// split it into render groups here.
    fn apply_style(&mut self, style: &ResolvedStyle);

    fn on_pointer_enter(&mut self, _dispatch: &mut Dispatch) {}
    fn on_pointer_leave(&mut self, _dispatch: &mut Dispatch) {}
    fn on_pointer_down(&mut self, _dispatch: &mut Dispatch) {}
    fn on_pointer_up(&mut self, _dispatch: &mut Dispatch) {}
    fn on_focus(&mut self, _dispatch: &mut Dispatch) {}
    fn on_blur(&mut self, _dispatch: &mut Dispatch) {}
}

/// Dispatch proxy handed to responder hooks.
///
/// `dispatch` replaces the instance's entire interaction set — it is not
/// additive and not a toggle. Callers must include every flag they want
/// retained: dispatching `[Hover]` while focused drops `Focused` unless the
/// caller re-includes it. Prop-derived flags (disabled, checked,
/// indeterminate, selected) are exempt; the composition layer unions them
/// over the dispatched set on every resolution.
#[derive(Debug, Default)]
pub struct Dispatch {
    next: Option<InteractionState>,
}

impl Dispatch {
    fn new() -> Self {
        Self::default()
    }

    /// Replace the interaction set with exactly `flags`
    pub fn dispatch(&mut self, flags: &[Flag]) {
        self.next = Some(InteractionState::from_flags(flags));
    }

    fn take(&mut self) -> Option<InteractionState> {
        self.next.take()
    }
}

/// A presentation component bound to the style-resolution engine
pub struct Styled<P: Presentation> {
    inner: P,
    registry: ThemeRegistry,
    scope: ScopeId,
    selectors: VariantSelectors,
    /// Flags driven by props, unioned over every resolution
    prop_flags: InteractionState,
    /// Flags driven by dispatch, replaced wholesale
    interaction: InteractionState,
    cache: StyleCache,
    style: Arc<ResolvedStyle>,
}

impl<P: Presentation> std::fmt::Debug for Styled<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Styled")
            .field("component", &P::NAME)
            .field("scope", &self.scope)
            .finish_non_exhaustive()
    }
}

impl<P: Presentation> Styled<P> {
    /// Mount under the process-wide registry's innermost scope
    pub fn mount(inner: P) -> Result<Self, ThemeError> {
        Self::mount_in(inner, &ThemeRegistry::global())
    }

    /// Mount under the given registry's innermost scope.
    ///
    /// Fails when no scope is installed or the active mapping has no entry
    /// for `P::NAME` — a mount never renders unstyled.
    pub fn mount_in(inner: P, registry: &ThemeRegistry) -> Result<Self, ThemeError> {
        let (scope, data) = registry.current().ok_or(ThemeError::NoActiveScope)?;
        if !data.mapping.has_component(P::NAME) {
            tracing::debug!(
                component = P::NAME,
                mapping = %data.mapping.name,
                "mount refused, component missing from mapping"
            );
            return Err(StyleError::UnknownComponent {
                component: P::NAME.to_owned(),
            }
            .into());
        }
        registry.register_component(P::NAME);

        let mut styled = Self {
            inner,
            registry: registry.clone(),
            scope,
            selectors: VariantSelectors::default(),
            prop_flags: InteractionState::default(),
            interaction: InteractionState::default(),
            cache: StyleCache::new(),
            style: Arc::new(ResolvedStyle::default()),
        };
        styled.restyle()?;
        Ok(styled)
    }

    /// The currently resolved style. Always fresh with respect to the last
    /// dispatch, prop change and theme swap seen by this instance.
    pub fn style(&self) -> &ResolvedStyle {
        &self.style
    }

    /// A shared handle to the currently resolved style
    pub fn style_arc(&self) -> Arc<ResolvedStyle> {
        self.style.clone()
    }

    /// The effective interaction state (dispatched set unioned with
    /// prop-derived flags)
    pub fn interaction(&self) -> InteractionState {
        self.interaction.union(self.prop_flags)
    }

    pub fn inner(&self) -> &P {
        &self.inner
    }

    pub fn inner_mut(&mut self) -> &mut P {
        &mut self.inner
    }

    /// Replace the interaction set and synchronously re-resolve
    pub fn dispatch(&mut self, flags: &[Flag]) -> Result<(), ThemeError> {
        self.interaction = InteractionState::from_flags(flags);
        self.restyle()
    }

    /// Route a raw input event through the presentation component's
    /// responder hooks, then apply whatever it dispatched.
    pub fn handle_event(&mut self, event: &Event) -> Result<(), ThemeError> {
        let mut dispatch = Dispatch::new();
        match event.event_type {
            event_types::POINTER_ENTER => self.inner.on_pointer_enter(&mut dispatch),
            event_types::POINTER_LEAVE => self.inner.on_pointer_leave(&mut dispatch),
            event_types::POINTER_DOWN => self.inner.on_pointer_down(&mut dispatch),
            event_types::POINTER_UP => self.inner.on_pointer_up(&mut dispatch),
            event_types::FOCUS => self.inner.on_focus(&mut dispatch),
            event_types::BLUR => self.inner.on_blur(&mut dispatch),
            _ => {}
        }
        if let Some(next) = dispatch.take() {
            self.interaction = next;
            self.restyle()?;
        }
        Ok(())
    }

    pub fn set_appearance(&mut self, value: impl Into<String>) -> Result<(), ThemeError> {
        self.selectors.appearance = Some(value.into());
        self.restyle()
    }

    pub fn set_size(&mut self, value: impl Into<String>) -> Result<(), ThemeError> {
        self.selectors.size = Some(value.into());
        self.restyle()
    }

    pub fn set_status(&mut self, value: impl Into<String>) -> Result<(), ThemeError> {
        self.selectors.status = Some(value.into());
        self.restyle()
    }

    /// Set or clear a prop-derived flag (disabled, checked, indeterminate,
    /// selected). Prop flags union over dispatches: no interactive dispatch
    /// can defeat them.
    pub fn set_prop_flag(&mut self, flag: Flag, on: bool) -> Result<(), ThemeError> {
        self.prop_flags = if on {
            self.prop_flags.with(flag)
        } else {
            self.prop_flags.without(flag)
        };
        self.restyle()
    }

    pub fn set_disabled(&mut self, disabled: bool) -> Result<(), ThemeError> {
        self.set_prop_flag(Flag::Disabled, disabled)
    }

    /// Re-resolve against the current scope data. Called by the host after a
    /// theme swap; prop and dispatch mutations call it internally.
    pub fn refresh(&mut self) -> Result<(), ThemeError> {
        self.restyle()
    }

    fn restyle(&mut self) -> Result<(), ThemeError> {
        let data = self
            .registry
            .scope(self.scope)
            .ok_or(ThemeError::NoActiveScope)?;
        let key = CacheKey {
            generation: data.generation,
            selectors: self.selectors.clone(),
            interaction: self.interaction(),
        };
        let style = match self.cache.get(&key) {
            Some(hit) => hit,
            None => {
                let resolved = resolve(
                    P::NAME,
                    &data.mapping,
                    &data.tokens,
                    &key.selectors,
                    &key.interaction,
                )?;
                let style = Arc::new(resolved);
                self.cache.store(key, style.clone());
                style
            }
        };
        self.style = style;
        let current = self.style.clone();
        self.inner.apply_style(&current);
        Ok(())
    }
}

impl<P: Presentation> Drop for Styled<P> {
    fn drop(&mut self) {
        self.registry.unregister_component(P::NAME);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tinct_style::{ComponentBuilder, MappingBuilder, StyleFragment, StyleValue, TokenStore};
    use tinct_theme::ScopeConfig;

    /// Minimal presentation component recording every style it receives
    #[derive(Default)]
    struct Probe {
        applied: Vec<ResolvedStyle>,
    }

    impl Presentation for Probe {
        const NAME: &'static str = "Probe";

        fn apply_style(&mut self, style: &ResolvedStyle) {
            self.applied.push(style.clone());
        }

        fn on_pointer_enter(&mut self, dispatch: &mut Dispatch) {
            dispatch.dispatch(&[Flag::Hover]);
        }

        fn on_pointer_down(&mut self, dispatch: &mut Dispatch) {
            dispatch.dispatch(&[Flag::Active]);
        }

        fn on_pointer_up(&mut self, dispatch: &mut Dispatch) {
            dispatch.dispatch(&[]);
        }
    }

    fn registry() -> ThemeRegistry {
        let mapping = MappingBuilder::new("test")
            .component(
                "Probe",
                ComponentBuilder::new()
                    .appearance(
                        "default",
                        StyleFragment::new().set("backgroundColor", "$color-primary"),
                    )
                    .appearance(
                        "outline",
                        StyleFragment::new().set("backgroundColor", "transparent"),
                    )
                    .appearance_default("default")
                    .state(
                        Flag::Hover,
                        StyleFragment::new().set("backgroundColor", "#598BFF"),
                    )
                    .state(
                        Flag::Active,
                        StyleFragment::new().set("backgroundColor", "#2541CC"),
                    )
                    .state(
                        Flag::Disabled,
                        StyleFragment::new().set("backgroundColor", "#C5CEE0"),
                    )
                    .build(),
            )
            .build();
        let tokens = TokenStore::new().set("color-primary", "#3366FF");
        let registry = ThemeRegistry::new();
        registry
            .install(ScopeConfig::new(mapping, tokens))
            .unwrap();
        registry
    }

    #[test]
    fn mount_resolves_immediately() {
        let registry = registry();
        let styled = Styled::mount_in(Probe::default(), &registry).unwrap();
        assert_eq!(styled.style().string("backgroundColor"), Some("#3366FF"));
        assert_eq!(styled.inner().applied.len(), 1);
    }

    #[test]
    fn mount_fails_for_unknown_component() {
        struct Missing;
        impl Presentation for Missing {
            const NAME: &'static str = "Missing";
            fn apply_style(&mut self, _style: &ResolvedStyle) {}
        }

        let registry = registry();
        let err = Styled::mount_in(Missing, &registry).unwrap_err();
        assert_eq!(
            err,
            ThemeError::Style(StyleError::UnknownComponent {
                component: "Missing".into()
            })
        );
    }

    #[test]
    fn mount_fails_without_scope() {
        let registry = ThemeRegistry::new();
        let err = Styled::mount_in(Probe::default(), &registry).unwrap_err();
        assert_eq!(err, ThemeError::NoActiveScope);
    }

    #[test]
    fn dispatch_replaces_not_merges() {
        let registry = registry();
        let mut styled = Styled::mount_in(Probe::default(), &registry).unwrap();

        styled.dispatch(&[Flag::Hover]).unwrap();
        styled.dispatch(&[Flag::Active]).unwrap();

        let state = styled.interaction();
        assert!(state.contains(Flag::Active));
        assert!(!state.contains(Flag::Hover));
        assert_eq!(styled.style().string("backgroundColor"), Some("#2541CC"));
    }

    #[test]
    fn each_dispatch_applies_a_fresh_style_synchronously() {
        let registry = registry();
        let mut styled = Styled::mount_in(Probe::default(), &registry).unwrap();

        styled
            .handle_event(&Event::pointer(event_types::POINTER_DOWN, 0.0, 0.0))
            .unwrap();
        assert_eq!(styled.style().string("backgroundColor"), Some("#2541CC"));

        styled
            .handle_event(&Event::pointer(event_types::POINTER_UP, 0.0, 0.0))
            .unwrap();
        assert_eq!(styled.style().string("backgroundColor"), Some("#3366FF"));

        // mount + down + up
        assert_eq!(styled.inner().applied.len(), 3);
    }

    #[test]
    fn disabled_prop_survives_interactive_dispatch() {
        let registry = registry();
        let mut styled = Styled::mount_in(Probe::default(), &registry).unwrap();
        styled.set_disabled(true).unwrap();

        styled.dispatch(&[Flag::Hover]).unwrap();
        assert!(styled.interaction().contains(Flag::Disabled));
        assert_eq!(styled.style().string("backgroundColor"), Some("#C5CEE0"));

        styled.dispatch(&[Flag::Active]).unwrap();
        assert_eq!(styled.style().string("backgroundColor"), Some("#C5CEE0"));

        styled.set_disabled(false).unwrap();
        assert_eq!(styled.style().string("backgroundColor"), Some("#2541CC"));
    }

    #[test]
    fn repeated_state_hits_the_memo() {
        let registry = registry();
        let mut styled = Styled::mount_in(Probe::default(), &registry).unwrap();

        styled.dispatch(&[Flag::Hover]).unwrap();
        let first = styled.style_arc();
        styled.dispatch(&[Flag::Hover]).unwrap();
        let second = styled.style_arc();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn variant_prop_change_restyles() {
        let registry = registry();
        let mut styled = Styled::mount_in(Probe::default(), &registry).unwrap();
        styled.set_appearance("outline").unwrap();
        assert_eq!(
            styled.style().get("backgroundColor"),
            Some(&StyleValue::Str("transparent".into()))
        );
    }

    #[test]
    fn theme_swap_invalidates_the_memo() {
        let registry = registry();
        let mut styled = Styled::mount_in(Probe::default(), &registry).unwrap();
        let before = styled.style_arc();

        let mapping = MappingBuilder::new("swapped")
            .component(
                "Probe",
                ComponentBuilder::new()
                    .appearance(
                        "default",
                        StyleFragment::new().set("backgroundColor", "$color-primary"),
                    )
                    .appearance_default("default")
                    .build(),
            )
            .build();
        let tokens = TokenStore::new().set("color-primary", "#00E096");
        registry
            .swap_current(ScopeConfig::new(mapping, tokens))
            .unwrap();

        styled.refresh().unwrap();
        let after = styled.style_arc();
        assert!(!Arc::ptr_eq(&before, &after));
        assert_eq!(after.string("backgroundColor"), Some("#00E096"));
    }

    #[test]
    fn drop_releases_component_name() {
        let registry = registry();
        let styled = Styled::mount_in(Probe::default(), &registry).unwrap();

        // A swap to a mapping without Probe is rejected while mounted...
        let empty = MappingBuilder::new("empty")
            .component("Other", ComponentBuilder::new().build())
            .build();
        assert!(registry
            .swap_current(ScopeConfig::new(empty.clone(), TokenStore::new()))
            .is_err());

        // ...and accepted after the instance is gone.
        drop(styled);
        assert!(registry
            .swap_current(ScopeConfig::new(empty, TokenStore::new()))
            .is_ok());
    }
}
