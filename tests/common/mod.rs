#![allow(dead_code)]

use std::collections::BTreeSet;
use std::hash::Hash;

use powerset::{Dfa, Nfa, NfaBuilder, StateId};

/// Runs `input` through `dfa`. A missing transition rejects at once.
pub fn dfa_accepts<Input: Eq + Hash>(dfa: &Dfa<Input>, input: &[Input]) -> bool {
    let mut state = dfa.start();
    for symbol in input {
        match dfa.transition(state, symbol) {
            Some(next) => state = next,
            None => return false,
        }
    }
    dfa.is_accepting(state)
}

/// Runs `input` through `nfa` straight off its edge list, keeping the set of
/// live states and re-saturating it over epsilon edges after every step.
pub fn nfa_accepts<Input: Eq + Hash>(nfa: &Nfa<Input>, input: &[Input]) -> bool {
    let edges: Vec<(StateId, Option<&Input>, StateId)> = nfa
        .transitions()
        .iter()
        .flat_map(|(from, symbol, targets)| targets.iter().map(move |to| (from, symbol, to)))
        .collect();
    let saturate = |mut live: BTreeSet<StateId>| loop {
        let reached: Vec<StateId> = edges
            .iter()
            .filter(|&&(from, symbol, _)| symbol.is_none() && live.contains(&from))
            .map(|&(_, _, to)| to)
            .collect();
        let before = live.len();
        live.extend(reached);
        if live.len() == before {
            return live;
        }
    };

    let mut live = saturate(std::iter::once(nfa.start()).collect());
    for symbol in input {
        let stepped = edges
            .iter()
            .filter(|&&(from, on, _)| on == Some(symbol) && live.contains(&from))
            .map(|&(_, _, to)| to)
            .collect();
        live = saturate(stepped);
    }
    live.iter().any(|&state| nfa.accepting().contains(state))
}

pub fn chars(input: &str) -> Vec<char> {
    input.chars().collect()
}

/// Builds a four-state NFA `q0..q3` over `alphabet`, starting in `q0`.
pub fn four_state_nfa(
    alphabet: &[char],
    transitions: &[(&str, char, &[&str])],
    accepting: &[&str],
) -> Nfa<char> {
    let mut builder = NfaBuilder::new();
    builder
        .states(vec!["q0", "q1", "q2", "q3"])
        .alphabet(alphabet.iter().cloned())
        .start("q0");
    for &(from, on, targets) in transitions {
        for &to in targets {
            builder.transition(from, on, to);
        }
    }
    for &state in accepting {
        builder.accepting(state);
    }
    builder.build().unwrap()
}

/// The first demo table: `ab` followed by at least one more symbol,
/// `(a|b)*ab(a|b)+`, since only `q3` accepts and `q2` must still read a symbol.
pub fn ab_then_more() -> Nfa<char> {
    four_state_nfa(
        &['a', 'b'],
        &[
            ("q0", 'a', &["q0", "q1"]),
            ("q0", 'b', &["q0"]),
            ("q1", 'b', &["q2"]),
            ("q2", 'a', &["q3"]),
            ("q2", 'b', &["q3"]),
            ("q3", 'a', &["q3"]),
            ("q3", 'b', &["q3"]),
        ],
        &["q3"],
    )
}

/// `(a|b)*ab(a|b)*`: `q2` accepts as soon as `ab` has been read.
pub fn contains_ab() -> Nfa<char> {
    let mut builder = NfaBuilder::new();
    builder
        .states(vec!["q0", "q1", "q2"])
        .alphabet(vec!['a', 'b'])
        .transition("q0", 'a', "q0")
        .transition("q0", 'a', "q1")
        .transition("q0", 'b', "q0")
        .transition("q1", 'b', "q2")
        .transition("q2", 'a', "q2")
        .transition("q2", 'b', "q2")
        .start("q0")
        .accepting("q2");
    builder.build().unwrap()
}

/// `(0|1)*011(0|1)*`
pub fn contains_011() -> Nfa<char> {
    four_state_nfa(
        &['0', '1'],
        &[
            ("q0", '0', &["q0", "q1"]),
            ("q0", '1', &["q0"]),
            ("q1", '1', &["q2"]),
            ("q2", '1', &["q3"]),
            ("q3", '0', &["q3"]),
            ("q3", '1', &["q3"]),
        ],
        &["q3"],
    )
}

pub fn complex() -> Nfa<char> {
    four_state_nfa(
        &['a', 'b'],
        &[
            ("q0", 'a', &["q1"]),
            ("q1", 'b', &["q2", "q3"]),
            ("q1", 'a', &["q1"]),
            ("q2", 'a', &["q1"]),
            ("q3", 'a', &["q2"]),
        ],
        &["q1"],
    )
}
