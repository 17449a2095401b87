use std::collections::BTreeSet;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::error::{NfaError, Result};
use crate::state::{StateId, StateSet};

/// A transition label: `Some(input)` consumes `input`, `None` is an epsilon move.
pub type Symbol<Input> = Option<Input>;

// NFAs

#[derive(Clone, Debug)]
struct NfaHashState<Input> {
    transitions: HashMap<Input, StateSet>,
    epsilons: StateSet,
}

impl<Input: Eq + Hash> NfaHashState<Input> {
    fn new() -> Self {
        NfaHashState {
            transitions: HashMap::new(),
            epsilons: StateSet::new(),
        }
    }
}

/// Transition relation of an NFA, indexed by source state.
///
/// A present entry always has at least one target; a missing entry means the
/// state has no move on that symbol.
#[derive(Clone, Debug)]
pub struct TransitionTable<Input> {
    states: Vec<NfaHashState<Input>>,
}

impl<Input: Eq + Hash> TransitionTable<Input> {
    pub fn new(states: usize) -> Self {
        TransitionTable {
            states: (0..states).map(|_| NfaHashState::new()).collect(),
        }
    }

    /// Adds `from --symbol--> to`, growing the table if `from` is new.
    pub fn insert(&mut self, from: StateId, symbol: Symbol<Input>, to: StateId) {
        if from >= self.states.len() {
            self.states.resize_with(from + 1, NfaHashState::new);
        }
        let state = &mut self.states[from];
        match symbol {
            Some(input) => {
                state
                    .transitions
                    .entry(input)
                    .or_insert_with(StateSet::new)
                    .insert(to);
            }
            None => {
                state.epsilons.insert(to);
            }
        }
    }

    /// Targets of `from` on `input`.
    #[inline]
    pub fn targets(&self, from: StateId, input: &Input) -> Option<&StateSet> {
        self.states.get(from)?.transitions.get(input)
    }

    /// Epsilon targets of `from`.
    #[inline]
    pub fn epsilon_targets(&self, from: StateId) -> Option<&StateSet> {
        self.states
            .get(from)
            .map(|state| &state.epsilons)
            .filter(|targets| !targets.is_empty())
    }

    pub fn has_epsilons(&self) -> bool {
        self.states.iter().any(|state| !state.epsilons.is_empty())
    }

    /// Union of the `input` targets of every state in `states`, without closure.
    pub fn move_on(&self, states: &StateSet, input: &Input) -> StateSet {
        let mut moved = StateSet::new();
        for state in states.iter() {
            if let Some(targets) = self.targets(state, input) {
                moved.union_with(targets);
            }
        }
        moved
    }

    /// All entries as `(source, symbol, targets)`; epsilon entries carry `None`.
    pub fn iter(&self) -> impl Iterator<Item = (StateId, Option<&Input>, &StateSet)> + '_ {
        self.states.iter().enumerate().flat_map(|(from, state)| {
            let epsilons = Some(&state.epsilons)
                .filter(|targets| !targets.is_empty())
                .map(move |targets| (from, None, targets));
            state
                .transitions
                .iter()
                .map(move |(input, targets)| (from, Some(input), targets))
                .chain(epsilons)
        })
    }
}

/// Every state reachable from `seed` through zero or more epsilon moves.
///
/// The result always contains `seed`; an empty seed gives an empty set.
pub fn epsilon_closure<Input: Eq + Hash>(
    seed: &StateSet,
    transitions: &TransitionTable<Input>,
) -> StateSet {
    let mut closure = seed.clone();
    let mut stack: Vec<StateId> = seed.iter().collect();

    while let Some(state) = stack.pop() {
        if let Some(targets) = transitions.epsilon_targets(state) {
            for target in targets.iter() {
                // only unseen states go on the stack, so each is expanded once
                if closure.insert(target) {
                    stack.push(target);
                }
            }
        }
    }

    closure
}

/// A validated nondeterministic finite automaton with epsilon moves.
///
/// States are named by string labels and interned to [`StateId`]s in sorted
/// label order. Build one with [`NfaBuilder`].
#[derive(Clone, Debug)]
pub struct Nfa<Input> {
    labels: Vec<String>,
    ids: HashMap<String, StateId>,
    alphabet: Vec<Input>,
    transitions: TransitionTable<Input>,
    start: StateId,
    accepting: StateSet,
}

impl<Input: Eq + Hash> Nfa<Input> {
    pub fn builder() -> NfaBuilder<Input>
    where
        Input: Ord,
    {
        NfaBuilder::new()
    }

    /// State labels, indexed by id.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn label(&self, state: StateId) -> Option<&str> {
        self.labels.get(state).map(String::as_str)
    }

    pub fn id(&self, label: &str) -> Option<StateId> {
        self.ids.get(label).cloned()
    }

    /// The input alphabet in ascending order. Never contains epsilon.
    pub fn alphabet(&self) -> &[Input] {
        &self.alphabet
    }

    pub fn transitions(&self) -> &TransitionTable<Input> {
        &self.transitions
    }

    pub fn start(&self) -> StateId {
        self.start
    }

    pub fn accepting(&self) -> &StateSet {
        &self.accepting
    }

    /// Resolves a collection of labels to a state set.
    pub fn state_set<'a, I>(&self, labels: I) -> Result<StateSet>
    where
        I: IntoIterator<Item = &'a str>,
    {
        labels
            .into_iter()
            .map(|label| {
                self.id(label)
                    .ok_or_else(|| NfaError::UnknownState(label.to_string()))
            })
            .collect()
    }

    /// Epsilon closure of the named states, as sorted labels.
    pub fn closure_of<'a, I>(&self, labels: I) -> Result<Vec<&str>>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let seed = self.state_set(labels)?;
        Ok(epsilon_closure(&seed, &self.transitions)
            .iter()
            .filter_map(|state| self.label(state))
            .collect())
    }
}

/// Incrementally describes an NFA; [`build`](NfaBuilder::build) checks the
/// description and interns it.
#[derive(Clone, Debug)]
pub struct NfaBuilder<Input> {
    states: BTreeSet<String>,
    alphabet: BTreeSet<Input>,
    transitions: Vec<(String, Symbol<Input>, String)>,
    start: Option<String>,
    accepting: BTreeSet<String>,
}

impl<Input: Ord> Default for NfaBuilder<Input> {
    fn default() -> Self {
        NfaBuilder {
            states: BTreeSet::new(),
            alphabet: BTreeSet::new(),
            transitions: Vec::new(),
            start: None,
            accepting: BTreeSet::new(),
        }
    }
}

impl<Input: Ord> NfaBuilder<Input> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state<S: Into<String>>(&mut self, label: S) -> &mut Self {
        self.states.insert(label.into());
        self
    }

    pub fn states<I, S>(&mut self, labels: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.states.extend(labels.into_iter().map(Into::into));
        self
    }

    pub fn symbol(&mut self, input: Input) -> &mut Self {
        self.alphabet.insert(input);
        self
    }

    pub fn alphabet<I: IntoIterator<Item = Input>>(&mut self, inputs: I) -> &mut Self {
        self.alphabet.extend(inputs);
        self
    }

    /// Adds `from --on--> to`. Repeating an edge has no effect.
    pub fn transition<F, T>(&mut self, from: F, on: Input, to: T) -> &mut Self
    where
        F: Into<String>,
        T: Into<String>,
    {
        self.transitions.push((from.into(), Some(on), to.into()));
        self
    }

    /// Adds an epsilon move `from --> to`.
    pub fn epsilon<F, T>(&mut self, from: F, to: T) -> &mut Self
    where
        F: Into<String>,
        T: Into<String>,
    {
        self.transitions.push((from.into(), None, to.into()));
        self
    }

    pub fn start<S: Into<String>>(&mut self, label: S) -> &mut Self {
        self.start = Some(label.into());
        self
    }

    pub fn accepting<S: Into<String>>(&mut self, label: S) -> &mut Self {
        self.accepting.insert(label.into());
        self
    }
}

impl<Input: Ord + Hash + Clone + Debug> NfaBuilder<Input> {
    /// Checks the description and produces the NFA.
    ///
    /// Fails if the start state is missing or undeclared, if an accepting
    /// state is undeclared, or if a transition mentions an undeclared state or
    /// a symbol outside the alphabet.
    pub fn build(&self) -> Result<Nfa<Input>> {
        // BTreeSet iteration is sorted, so ids follow label order
        let labels: Vec<String> = self.states.iter().cloned().collect();
        let ids: HashMap<String, StateId> = labels
            .iter()
            .enumerate()
            .map(|(id, label)| (label.clone(), id))
            .collect();

        let start = match self.start {
            None => return Err(NfaError::MissingStart),
            Some(ref label) => *ids
                .get(label)
                .ok_or_else(|| NfaError::UnknownStart(label.clone()))?,
        };

        let mut accepting = StateSet::with_capacity(labels.len());
        for label in &self.accepting {
            let id = ids
                .get(label)
                .ok_or_else(|| NfaError::UnknownAccepting(label.clone()))?;
            accepting.insert(*id);
        }

        let mut transitions = TransitionTable::new(labels.len());
        for (from, symbol, to) in &self.transitions {
            let from_id = *ids
                .get(from)
                .ok_or_else(|| NfaError::UnknownSource(from.clone()))?;
            let to_id = *ids.get(to).ok_or_else(|| NfaError::UnknownTarget {
                from: from.clone(),
                to: to.clone(),
            })?;
            if let Some(input) = symbol {
                if !self.alphabet.contains(input) {
                    return Err(NfaError::UnknownSymbol {
                        from: from.clone(),
                        symbol: format!("{:?}", input),
                    });
                }
            }
            transitions.insert(from_id, symbol.clone(), to_id);
        }

        Ok(Nfa {
            labels,
            ids,
            alphabet: self.alphabet.iter().cloned().collect(),
            transitions,
            start,
            accepting,
        })
    }
}
