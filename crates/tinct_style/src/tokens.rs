//! Theme token store
//!
//! A [`TokenStore`] is the resolved theme: a flat map from token name to
//! value. Tokens may reference other tokens (`"$other"`); chains are
//! dereferenced iteratively and a revisited token is reported as
//! [`StyleError::CyclicTokenReference`] rather than recursing unbounded.
//!
//! Stores are external artifacts loaded once at provider init and swapped
//! atomically on theme change; widgets never observe a partially updated
//! store.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::StyleError;
use crate::value::{FragmentValue, StyleValue};

/// Flat token name -> value mapping for one theme
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenStore {
    tokens: FxHashMap<String, FragmentValue>,
}

impl TokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a token (builder form). `"$other"` values create token-to-token
    /// references.
    #[must_use]
    pub fn set(mut self, name: impl Into<String>, value: impl Into<FragmentValue>) -> Self {
        self.tokens.insert(name.into(), value.into());
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tokens.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tokens.keys().map(String::as_str)
    }

    /// Dereference a token to its literal value, following references.
    ///
    /// Returns `Ok(None)` when the chain ends at a name absent from the
    /// store; the caller decides how to report that. A repeated token within
    /// the chain is a [`StyleError::CyclicTokenReference`].
    pub fn resolve(&self, name: &str) -> Result<Option<&StyleValue>, StyleError> {
        let mut chain: SmallVec<[&str; 8]> = SmallVec::new();
        let mut current = name;
        loop {
            if chain.contains(&current) {
                let mut reported: Vec<String> = chain.iter().map(|s| (*s).to_owned()).collect();
                reported.push(current.to_owned());
                return Err(StyleError::CyclicTokenReference {
                    token: name.to_owned(),
                    chain: reported,
                });
            }
            chain.push(current);
            match self.tokens.get(current) {
                None => return Ok(None),
                Some(FragmentValue::Literal(value)) => return Ok(Some(value)),
                Some(FragmentValue::Token(next)) => current = next,
            }
        }
    }
}
