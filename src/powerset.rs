//! Subset construction: NFA with epsilon moves to DFA.

use std::collections::HashMap;
use std::collections::VecDeque;
use std::hash::Hash;

use bit_vec::BitVec;
use indexmap::IndexSet;
use log::{debug, trace};

use crate::dfa::{Dfa, DfaState, DFA_START};
use crate::nfa::{epsilon_closure, Nfa};
use crate::state::StateSet;

/// Builds the DFA equivalent to `nfa`.
///
/// Every DFA state is the epsilon-closed set of NFA states reachable on some
/// input. States are discovered breadth-first from the closure of the NFA
/// start state, trying the alphabet in ascending order. An input that leads
/// nowhere gets no transition at all instead of an empty state.
pub fn powerset_construction<Input: Clone + Eq + Hash>(nfa: &Nfa<Input>) -> Dfa<Input> {
    let table = nfa.transitions();

    let mut states: IndexSet<DfaState> = IndexSet::new();
    let mut transitions: Vec<HashMap<Input, usize>> = Vec::new();

    let start = epsilon_closure(&StateSet::singleton(nfa.start()), table);
    debug!(
        "Subset construction over {} NFA states, start closure {:?}",
        nfa.labels().len(),
        start
    );
    states.insert(DfaState::from(start));
    transitions.push(HashMap::new());

    let mut worklist = VecDeque::new();
    worklist.push_back(DFA_START);
    while let Some(cur_num) = worklist.pop_front() {
        for symbol in nfa.alphabet() {
            let moved = table.move_on(states[cur_num].nfa_states(), symbol);
            let nxt_states = epsilon_closure(&moved, table);

            // Leave the stuck state implicit
            if nxt_states.is_empty() {
                continue;
            }

            let (nxt_num, new) = states.insert_full(DfaState::from(nxt_states));
            if new {
                trace!("Add state {}: {:?}", nxt_num, states[nxt_num]);
                transitions.push(HashMap::new());
                worklist.push_back(nxt_num);
            }

            trace!("Transition {} -> {}", cur_num, nxt_num);
            transitions[cur_num].insert(symbol.clone(), nxt_num);
        }
    }

    let mut finals = BitVec::from_elem(states.len(), false);
    for (num, state) in states.iter().enumerate() {
        if state.nfa_states().intersects(nfa.accepting()) {
            finals.set(num, true);
        }
    }

    debug!(
        "Subset construction done: {} DFA states, {} accepting",
        states.len(),
        finals.iter().filter(|&accepting| accepting).count()
    );

    Dfa::new(
        nfa.labels().to_vec(),
        nfa.alphabet().to_vec(),
        states,
        transitions,
        finals,
    )
}
