//! Errors raised while assembling an NFA.

use thiserror::Error;

/// Ways in which an NFA description can be malformed.
///
/// All of these are caught by [`NfaBuilder::build`](crate::nfa::NfaBuilder::build)
/// before any conversion runs, so the construction itself never fails.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NfaError {
    /// No start state was given.
    #[error("NFA has no start state")]
    MissingStart,

    /// The start state is not one of the declared states.
    #[error("start state {0:?} is not a state of the NFA")]
    UnknownStart(String),

    /// An accepting state is not one of the declared states.
    #[error("accepting state {0:?} is not a state of the NFA")]
    UnknownAccepting(String),

    /// A transition leaves from an undeclared state.
    #[error("transition source {0:?} is not a state of the NFA")]
    UnknownSource(String),

    /// A transition enters an undeclared state.
    #[error("transition target {to:?} (from {from:?}) is not a state of the NFA")]
    UnknownTarget { from: String, to: String },

    /// A transition is labelled with a symbol outside the alphabet.
    #[error("symbol {symbol} on a transition from {from:?} is not in the alphabet")]
    UnknownSymbol { from: String, symbol: String },

    /// A label handed to a lookup does not name a state.
    #[error("{0:?} is not a state of the NFA")]
    UnknownState(String),
}

/// A specialized `Result` type for NFA assembly.
pub type Result<T> = std::result::Result<T, NfaError>;
