//! Converting NFAs with epsilon moves into DFAs by subset construction.
//!
//! ```
//! use powerset::{build, NfaBuilder};
//!
//! let mut builder = NfaBuilder::new();
//! builder
//!     .states(vec!["q0", "q1", "q2"])
//!     .alphabet(vec!['a', 'b'])
//!     .epsilon("q0", "q1")
//!     .transition("q1", 'a', "q2")
//!     .start("q0")
//!     .accepting("q2");
//! let nfa = builder.build().unwrap();
//!
//! let dfa = build(&nfa);
//! let next = dfa.transition(dfa.start(), &'a').unwrap();
//! assert!(dfa.is_accepting(next));
//! assert_eq!(dfa.transition(dfa.start(), &'b'), None);
//! ```

pub mod dfa;
pub mod error;
pub mod nfa;
pub mod powerset;
pub mod state;
pub mod table;

pub use crate::dfa::{Dfa, DfaState};
pub use crate::error::{NfaError, Result};
pub use crate::nfa::{epsilon_closure as closure, Nfa, NfaBuilder, Symbol, TransitionTable};
pub use crate::powerset::powerset_construction as build;
pub use crate::state::{StateId, StateSet};
pub use crate::table::{Table, TableOptions};
