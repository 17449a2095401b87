//! NFA state ids and the bit sets that hold them.

use std::fmt;

use bit_set::BitSet;

/// Dense index of an NFA state. Ids are handed out in sorted label order.
pub type StateId = usize;

/// A set of NFA states.
///
/// Equality, ordering and hashing only look at the members, never at the
/// capacity of the underlying bit set, so two sets computed along different
/// paths compare equal as soon as they hold the same states.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StateSet {
    bits: BitSet,
}

impl StateSet {
    pub fn new() -> Self {
        StateSet { bits: BitSet::new() }
    }

    pub fn with_capacity(states: usize) -> Self {
        StateSet {
            bits: BitSet::with_capacity(states),
        }
    }

    pub fn singleton(state: StateId) -> Self {
        let mut set = StateSet::with_capacity(state + 1);
        set.insert(state);
        set
    }

    /// Returns `true` if the state was not yet present.
    #[inline]
    pub fn insert(&mut self, state: StateId) -> bool {
        self.bits.insert(state)
    }

    #[inline]
    pub fn contains(&self, state: StateId) -> bool {
        self.bits.contains(state)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Iterates the members in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = StateId> + '_ {
        self.bits.iter()
    }

    pub fn union_with(&mut self, other: &StateSet) {
        self.bits.union_with(&other.bits);
    }

    pub fn is_subset(&self, other: &StateSet) -> bool {
        self.bits.is_subset(&other.bits)
    }

    pub fn intersects(&self, other: &StateSet) -> bool {
        !self.bits.is_disjoint(&other.bits)
    }
}

impl fmt::Debug for StateSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl FromIterator<StateId> for StateSet {
    fn from_iter<I: IntoIterator<Item = StateId>>(iter: I) -> Self {
        let mut set = StateSet::new();
        set.extend(iter);
        set
    }
}

impl Extend<StateId> for StateSet {
    fn extend<I: IntoIterator<Item = StateId>>(&mut self, iter: I) {
        for state in iter {
            self.insert(state);
        }
    }
}
