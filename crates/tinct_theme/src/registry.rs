//! Theme registry and provider scopes
//!
//! A [`ThemeRegistry`] owns a stack of provider scopes. The innermost scope
//! supplies `{mapping, tokens}` to styled instances mounted under it; nested
//! scopes shadow outer ones for code run while their guard is alive. The pair
//! is replaced wholesale on swap — never mutated in place — and each
//! replacement bumps a generation counter that keys every resolution cache.
//!
//! The registry handle is cheap to clone and a process-wide default is
//! available via [`ThemeRegistry::global`]; tests use isolated instances.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, OnceLock, RwLock};

use rustc_hash::FxHashMap;
use tinct_style::{ThemeMapping, TokenStore};

use crate::error::ThemeError;

/// Identifier of one provider scope within a registry
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ScopeId(u64);

/// The read-only data one scope supplies to styled instances
#[derive(Debug)]
pub struct ScopeData {
    pub mapping: Arc<ThemeMapping>,
    pub tokens: Arc<TokenStore>,
    /// Bumped on every swap; resolution caches key on it so stale styles
    /// can never survive a theme change
    pub generation: u64,
}

/// Configuration accepted at the provider boundary
#[derive(Clone, Debug)]
pub struct ScopeConfig {
    pub mapping: ThemeMapping,
    pub tokens: TokenStore,
    /// Deep-merged over `mapping` at init time, later keys overriding
    /// earlier ones per property
    pub custom_mapping: Option<ThemeMapping>,
}

impl ScopeConfig {
    pub fn new(mapping: ThemeMapping, tokens: TokenStore) -> Self {
        Self {
            mapping,
            tokens,
            custom_mapping: None,
        }
    }

    #[must_use]
    pub fn with_custom_mapping(mut self, custom: ThemeMapping) -> Self {
        self.custom_mapping = Some(custom);
        self
    }

    fn into_merged(self) -> (ThemeMapping, TokenStore) {
        let mut mapping = self.mapping;
        if let Some(custom) = &self.custom_mapping {
            mapping.merge_from(custom);
        }
        (mapping, self.tokens)
    }
}

struct RegistryInner {
    /// Provider scope stack; the last entry is the innermost scope
    scopes: RwLock<Vec<(ScopeId, Arc<ScopeData>)>>,
    /// Component names in use, refcounted across mounted styled instances
    mounted: RwLock<FxHashMap<String, usize>>,
    next_scope_id: AtomicU64,
    next_generation: AtomicU64,
    /// Host hook fired after a successful swap so the UI can restyle
    restyle: RwLock<Option<fn()>>,
}

/// Process-wide registration of the active theme and mapping
#[derive(Clone)]
pub struct ThemeRegistry {
    inner: Arc<RegistryInner>,
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeRegistry {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RegistryInner {
                scopes: RwLock::new(Vec::new()),
                mounted: RwLock::new(FxHashMap::default()),
                next_scope_id: AtomicU64::new(1),
                next_generation: AtomicU64::new(1),
                restyle: RwLock::new(None),
            }),
        }
    }

    /// The process-wide default registry
    pub fn global() -> ThemeRegistry {
        static GLOBAL: OnceLock<ThemeRegistry> = OnceLock::new();
        GLOBAL.get_or_init(ThemeRegistry::new).clone()
    }

    /// Install the root provider scope, replacing any existing stack.
    ///
    /// Called by the application provider on mount. The incoming mapping is
    /// validated against any components still in use.
    pub fn install(&self, config: ScopeConfig) -> Result<ScopeId, ThemeError> {
        let data = self.build_scope(config)?;
        let id = self.allocate_id();
        let mut scopes = self.inner.scopes.write().unwrap();
        scopes.clear();
        scopes.push((id, data));
        drop(scopes);
        tracing::debug!(scope = id.0, "theme scope installed");
        Ok(id)
    }

    /// Tear the whole provider stack down (application provider unmount)
    pub fn teardown(&self) {
        self.inner.scopes.write().unwrap().clear();
        tracing::debug!("theme scopes torn down");
    }

    /// Push a nested provider scope shadowing the current one.
    ///
    /// The scope pops when the returned guard drops.
    pub fn push_scope(&self, config: ScopeConfig) -> Result<ScopeGuard, ThemeError> {
        let data = self.build_scope(config)?;
        let id = self.allocate_id();
        self.inner.scopes.write().unwrap().push((id, data));
        tracing::debug!(scope = id.0, "nested theme scope pushed");
        Ok(ScopeGuard {
            registry: self.clone(),
            id,
        })
    }

    /// The innermost active scope
    pub fn current(&self) -> Option<(ScopeId, Arc<ScopeData>)> {
        self.inner
            .scopes
            .read()
            .unwrap()
            .last()
            .map(|(id, data)| (*id, data.clone()))
    }

    /// Look up a scope a styled instance was mounted under
    pub fn scope(&self, id: ScopeId) -> Option<Arc<ScopeData>> {
        self.inner
            .scopes
            .read()
            .unwrap()
            .iter()
            .find(|(scope_id, _)| *scope_id == id)
            .map(|(_, data)| data.clone())
    }

    /// Replace a scope's `{mapping, tokens}` wholesale.
    ///
    /// Eagerly validates that every mounted component name exists in the new
    /// mapping; on failure the scope is left untouched. On success the scope
    /// generation is bumped (invalidating every resolution cache keyed on
    /// it) and the restyle callback fires.
    pub fn swap(&self, id: ScopeId, config: ScopeConfig) -> Result<(), ThemeError> {
        let data = self.build_scope(config)?;
        let mut scopes = self.inner.scopes.write().unwrap();
        let entry = scopes
            .iter_mut()
            .find(|(scope_id, _)| *scope_id == id)
            .ok_or(ThemeError::NoActiveScope)?;
        let generation = data.generation;
        entry.1 = data;
        drop(scopes);
        tracing::debug!(scope = id.0, generation, "theme scope swapped");
        self.notify_restyle();
        Ok(())
    }

    /// Swap the innermost active scope
    pub fn swap_current(&self, config: ScopeConfig) -> Result<(), ThemeError> {
        let (id, _) = self.current().ok_or(ThemeError::NoActiveScope)?;
        self.swap(id, config)
    }

    /// Record a styled instance using `component`. Swap validation checks
    /// incoming mappings against these names.
    pub fn register_component(&self, component: &str) {
        *self
            .inner
            .mounted
            .write()
            .unwrap()
            .entry(component.to_owned())
            .or_insert(0) += 1;
    }

    /// Drop one use of `component`
    pub fn unregister_component(&self, component: &str) {
        let mut mounted = self.inner.mounted.write().unwrap();
        if let Some(count) = mounted.get_mut(component) {
            *count -= 1;
            if *count == 0 {
                mounted.remove(component);
            }
        }
    }

    /// Register a host callback fired after every successful swap
    pub fn set_restyle_callback(&self, callback: fn()) {
        *self.inner.restyle.write().unwrap() = Some(callback);
    }

    fn notify_restyle(&self) {
        if let Some(callback) = *self.inner.restyle.read().unwrap() {
            callback();
        }
    }

    fn allocate_id(&self) -> ScopeId {
        ScopeId(self.inner.next_scope_id.fetch_add(1, Ordering::Relaxed))
    }

    fn build_scope(&self, config: ScopeConfig) -> Result<Arc<ScopeData>, ThemeError> {
        let (mapping, tokens) = config.into_merged();

        let mounted = self.inner.mounted.read().unwrap();
        let mut missing: Vec<String> = mounted
            .keys()
            .filter(|name| !mapping.has_component(name))
            .cloned()
            .collect();
        if !missing.is_empty() {
            missing.sort_unstable();
            return Err(ThemeError::MissingComponents {
                mapping: mapping.name.clone(),
                components: missing,
            });
        }
        drop(mounted);

        Ok(Arc::new(ScopeData {
            mapping: Arc::new(mapping),
            tokens: Arc::new(tokens),
            generation: self.inner.next_generation.fetch_add(1, Ordering::Relaxed),
        }))
    }
}

/// Pops its nested scope when dropped
pub struct ScopeGuard {
    registry: ThemeRegistry,
    id: ScopeId,
}

impl ScopeGuard {
    pub fn id(&self) -> ScopeId {
        self.id
    }
}

impl Drop for ScopeGuard {
    fn drop(&mut self) {
        let mut scopes = self.registry.inner.scopes.write().unwrap();
        scopes.retain(|(scope_id, _)| *scope_id != self.id);
        tracing::debug!(scope = self.id.0, "nested theme scope popped");
    }
}
