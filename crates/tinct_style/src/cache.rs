//! Per-instance resolution memo
//!
//! Resolution is a pure function of `(component, mapping identity, selectors,
//! token-store identity, interaction state)`. Each styled instance keeps the
//! last resolution keyed by that tuple — mapping/token identity is captured
//! as the provider scope's generation counter, which the registry bumps on
//! every swap. Correctness never depends on the cache: a cold cache produces
//! an identical result.

use std::sync::Arc;

use tinct_core::InteractionState;

use crate::resolve::VariantSelectors;
use crate::resolved::ResolvedStyle;

/// Identity of one resolution
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CacheKey {
    /// Scope generation at resolution time; a theme swap bumps it, so styles
    /// from the previous store can never leak through the cache.
    pub generation: u64,
    pub selectors: VariantSelectors,
    pub interaction: InteractionState,
}

/// Memo of the last resolution for one styled instance
#[derive(Clone, Debug, Default)]
pub struct StyleCache {
    entry: Option<(CacheKey, Arc<ResolvedStyle>)>,
}

impl StyleCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &CacheKey) -> Option<Arc<ResolvedStyle>> {
        match &self.entry {
            Some((cached, style)) if cached == key => Some(style.clone()),
            _ => None,
        }
    }

    pub fn store(&mut self, key: CacheKey, style: Arc<ResolvedStyle>) {
        self.entry = Some((key, style));
    }

    pub fn invalidate(&mut self) {
        self.entry = None;
    }
}
