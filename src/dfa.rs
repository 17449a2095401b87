use std::collections::HashMap;
use std::hash::Hash;

use bit_vec::BitVec;
use indexmap::IndexSet;

use crate::state::StateSet;

/// Index of the start state in [`Dfa::states`].
pub const DFA_START: usize = 0;

/// A DFA state: the set of NFA states it stands for.
///
/// Identity is the set content, so the same subset reached twice is the same
/// state.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DfaState(StateSet);

impl DfaState {
    pub fn nfa_states(&self) -> &StateSet {
        &self.0
    }
}

impl From<StateSet> for DfaState {
    fn from(states: StateSet) -> Self {
        DfaState(states)
    }
}

/// A deterministic automaton produced by the subset construction.
///
/// The transition function is partial: a missing entry means the input is
/// rejected (the sink). No sink state appears among [`states`](Dfa::states).
#[derive(Clone, Debug)]
pub struct Dfa<Input> {
    labels: Vec<String>,
    alphabet: Vec<Input>,
    // discovery order, start first
    states: IndexSet<DfaState>,
    // state index -> (input -> state index)
    transitions: Vec<HashMap<Input, usize>>,
    finals: BitVec,
}

impl<Input: Eq + Hash> Dfa<Input> {
    pub(crate) fn new(
        labels: Vec<String>,
        alphabet: Vec<Input>,
        states: IndexSet<DfaState>,
        transitions: Vec<HashMap<Input, usize>>,
        finals: BitVec,
    ) -> Self {
        debug_assert_eq!(states.len(), transitions.len());
        debug_assert_eq!(states.len(), finals.len());
        Dfa {
            labels,
            alphabet,
            states,
            transitions,
            finals,
        }
    }

    /// States in the order they were discovered.
    pub fn states(&self) -> impl ExactSizeIterator<Item = &DfaState> + '_ {
        self.states.iter()
    }

    pub fn num_states(&self) -> usize {
        self.states.len()
    }

    pub fn start(&self) -> &DfaState {
        &self.states[DFA_START]
    }

    /// The alphabet of the NFA this was built from.
    pub fn alphabet(&self) -> &[Input] {
        &self.alphabet
    }

    pub fn contains(&self, state: &DfaState) -> bool {
        self.states.contains(state)
    }

    /// Target of `from` on `input`, or `None` for the sink.
    pub fn transition(&self, from: &DfaState, input: &Input) -> Option<&DfaState> {
        let from = self.states.get_index_of(from)?;
        let to = *self.transitions[from].get(input)?;
        self.states.get_index(to)
    }

    /// Recorded transitions as `(from, input, to)`, by source in discovery
    /// order and then by alphabet order.
    pub fn transitions(&self) -> impl Iterator<Item = (&DfaState, &Input, &DfaState)> + '_ {
        self.states
            .iter()
            .zip(self.transitions.iter())
            .flat_map(move |(from, row)| {
                self.alphabet.iter().filter_map(move |input| {
                    let to = self.states.get_index(*row.get(input)?)?;
                    Some((from, input, to))
                })
            })
    }

    pub fn accepting(&self) -> impl Iterator<Item = &DfaState> + '_ {
        self.states
            .iter()
            .zip(self.finals.iter())
            .filter_map(|(state, accepting)| if accepting { Some(state) } else { None })
    }

    pub fn is_accepting(&self, state: &DfaState) -> bool {
        self.states
            .get_index_of(state)
            .and_then(|index| self.finals.get(index))
            .unwrap_or(false)
    }

    /// NFA labels of the members of `state`, in sorted order.
    pub fn labels<'a>(&'a self, state: &'a DfaState) -> impl Iterator<Item = &'a str> + 'a {
        state
            .nfa_states()
            .iter()
            .filter_map(move |id| self.labels.get(id).map(String::as_str))
    }
}
