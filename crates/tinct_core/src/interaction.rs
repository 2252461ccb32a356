//! Interaction flags and per-instance interaction state
//!
//! Every interactive component owns exactly one [`InteractionState`] for its
//! whole lifetime. Transitions replace the entire set; there is no additive
//! dispatch and no toggle. The fixed merge order in [`FLAG_MERGE_ORDER`]
//! makes simultaneous flags deterministic regardless of dispatch history.

use smallvec::SmallVec;

/// A boolean facet of runtime interaction state driving style overrides
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Flag {
    Hover,
    Active,
    Focused,
    Disabled,
    Checked,
    Indeterminate,
    Selected,
}

impl Flag {
    /// Key for this flag's fragment in a component mapping's `state` group
    pub const fn key(self) -> &'static str {
        match self {
            Self::Hover => "hover",
            Self::Active => "active",
            Self::Focused => "focused",
            Self::Disabled => "disabled",
            Self::Checked => "checked",
            Self::Indeterminate => "indeterminate",
            Self::Selected => "selected",
        }
    }

    const fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

/// Canonical merge order for simultaneous interaction flags.
///
/// Later entries win on property collisions. Value-like flags come first,
/// transient pointer/focus flags after them, and `Disabled` is last so an
/// externally disabled component can never be restyled by hover, focus or
/// press dispatches.
pub const FLAG_MERGE_ORDER: [Flag; 7] = [
    Flag::Checked,
    Flag::Indeterminate,
    Flag::Selected,
    Flag::Hover,
    Flag::Focused,
    Flag::Active,
    Flag::Disabled,
];

/// The set of interaction flags active on one component instance.
///
/// The empty set is the unthemed baseline. `dispatch` in the composition
/// layer replaces the whole set, so callers always describe the complete new
/// interaction state; a caller that omits a still-true flag drops it.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct InteractionState {
    bits: u8,
}

impl InteractionState {
    /// The empty (baseline) state
    pub const EMPTY: Self = Self { bits: 0 };

    pub fn new() -> Self {
        Self::EMPTY
    }

    /// Build a state from a complete flag description
    pub fn from_flags(flags: &[Flag]) -> Self {
        let mut bits = 0;
        for flag in flags {
            bits |= flag.bit();
        }
        Self { bits }
    }

    pub fn contains(self, flag: Flag) -> bool {
        self.bits & flag.bit() != 0
    }

    pub fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// This state with `flag` added
    #[must_use]
    pub fn with(self, flag: Flag) -> Self {
        Self {
            bits: self.bits | flag.bit(),
        }
    }

    /// This state with `flag` removed
    #[must_use]
    pub fn without(self, flag: Flag) -> Self {
        Self {
            bits: self.bits & !flag.bit(),
        }
    }

    /// The union of two states.
    ///
    /// Used by the composition layer to overlay prop-derived flags
    /// (disabled, checked, ...) over the dispatched set.
    #[must_use]
    pub fn union(self, other: Self) -> Self {
        Self {
            bits: self.bits | other.bits,
        }
    }

    /// Active flags in canonical merge order
    pub fn flags(self) -> SmallVec<[Flag; 4]> {
        FLAG_MERGE_ORDER
            .iter()
            .copied()
            .filter(|flag| self.contains(*flag))
            .collect()
    }
}

impl std::fmt::Debug for InteractionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut set = f.debug_set();
        for flag in self.flags() {
            set.entry(&flag.key());
        }
        set.finish()
    }
}

impl FromIterator<Flag> for InteractionState {
    fn from_iter<I: IntoIterator<Item = Flag>>(iter: I) -> Self {
        let mut state = Self::EMPTY;
        for flag in iter {
            state = state.with(flag);
        }
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_state_is_baseline() {
        let state = InteractionState::default();
        assert!(state.is_empty());
        for flag in FLAG_MERGE_ORDER {
            assert!(!state.contains(flag));
        }
    }

    #[test]
    fn from_flags_builds_exact_set() {
        let state = InteractionState::from_flags(&[Flag::Hover, Flag::Focused]);
        assert!(state.contains(Flag::Hover));
        assert!(state.contains(Flag::Focused));
        assert!(!state.contains(Flag::Active));
    }

    #[test]
    fn merge_order_covers_every_flag_once() {
        let all: InteractionState = FLAG_MERGE_ORDER.iter().copied().collect();
        assert_eq!(all.flags().len(), FLAG_MERGE_ORDER.len());

        // No duplicates
        for (i, a) in FLAG_MERGE_ORDER.iter().enumerate() {
            for b in &FLAG_MERGE_ORDER[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn disabled_is_last_in_merge_order() {
        assert_eq!(FLAG_MERGE_ORDER[FLAG_MERGE_ORDER.len() - 1], Flag::Disabled);
    }

    #[test]
    fn flags_come_back_in_merge_order() {
        // Insertion order must not matter
        let state = InteractionState::from_flags(&[Flag::Disabled, Flag::Hover, Flag::Checked]);
        let flags = state.flags();
        assert_eq!(flags.as_slice(), &[Flag::Checked, Flag::Hover, Flag::Disabled]);
    }

    #[test]
    fn union_overlays_prop_flags() {
        let dispatched = InteractionState::from_flags(&[Flag::Hover]);
        let props = InteractionState::from_flags(&[Flag::Disabled]);
        let effective = dispatched.union(props);
        assert!(effective.contains(Flag::Hover));
        assert!(effective.contains(Flag::Disabled));
    }

    #[test]
    fn with_and_without_are_inverse() {
        let state = InteractionState::EMPTY.with(Flag::Checked);
        assert!(state.contains(Flag::Checked));
        assert!(state.without(Flag::Checked).is_empty());
    }
}
