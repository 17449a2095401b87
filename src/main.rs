#[macro_use]
extern crate lazy_static;

use std::process;

use env_logger::Env;
use log::{error, info};

use powerset::{build, Nfa, NfaBuilder, TableOptions};

struct Example {
    title: &'static str,
    alphabet: Vec<char>,
    transitions: Vec<(&'static str, char, Vec<&'static str>)>,
    accepting: Vec<&'static str>,
}

lazy_static! {
    static ref EXAMPLES: Vec<Example> = vec![
        // (a|b)*ab(a|b)+
        Example {
            title: "DFA for example 1",
            alphabet: vec!['a', 'b'],
            transitions: vec![
                ("q0", 'a', vec!["q0", "q1"]),
                ("q0", 'b', vec!["q0"]),
                ("q1", 'b', vec!["q2"]),
                ("q2", 'a', vec!["q3"]),
                ("q2", 'b', vec!["q3"]),
                ("q3", 'a', vec!["q3"]),
                ("q3", 'b', vec!["q3"]),
            ],
            accepting: vec!["q3"],
        },
        // (0|1)*011(0|1)*
        Example {
            title: "DFA for example 2",
            alphabet: vec!['0', '1'],
            transitions: vec![
                ("q0", '0', vec!["q0", "q1"]),
                ("q0", '1', vec!["q0"]),
                ("q1", '1', vec!["q2"]),
                ("q2", '1', vec!["q3"]),
                ("q3", '0', vec!["q3"]),
                ("q3", '1', vec!["q3"]),
            ],
            accepting: vec!["q3"],
        },
        Example {
            title: "DFA for example 3",
            alphabet: vec!['a', 'b'],
            transitions: vec![
                ("q0", 'a', vec!["q1"]),
                ("q1", 'b', vec!["q2", "q3"]),
                ("q1", 'a', vec!["q1"]),
                ("q2", 'a', vec!["q1"]),
                ("q3", 'a', vec!["q2"]),
            ],
            accepting: vec!["q1"],
        },
    ];
}

impl Example {
    fn nfa(&self) -> powerset::Result<Nfa<char>> {
        let mut builder = NfaBuilder::new();
        builder
            .states(vec!["q0", "q1", "q2", "q3"])
            .alphabet(self.alphabet.iter().cloned())
            .start("q0");
        for &(from, on, ref targets) in &self.transitions {
            for &to in targets {
                builder.transition(from, on, to);
            }
        }
        for &state in &self.accepting {
            builder.accepting(state);
        }
        builder.build()
    }
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let options = TableOptions::default();
    for example in EXAMPLES.iter() {
        let nfa = match example.nfa() {
            Ok(nfa) => nfa,
            Err(err) => {
                error!("{}: {}", example.title, err);
                process::exit(1);
            }
        };
        let dfa = build(&nfa);
        info!("{}: {} DFA states", example.title, dfa.num_states());
        print!("{}", dfa.table(example.title, &example.alphabet, &options));
    }
}
