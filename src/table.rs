//! Plain-text transition tables for DFAs.

use std::fmt;
use std::hash::Hash;

use crate::dfa::{Dfa, DfaState};

/// Layout of a rendered transition table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableOptions {
    /// Minimum width of every column; longer cells are not cut.
    pub column_width: usize,
    /// Shown where an input has no transition.
    pub sink: String,
    /// Joins the NFA labels that make up a DFA state.
    pub separator: String,
}

impl Default for TableOptions {
    fn default() -> Self {
        TableOptions {
            column_width: 20,
            sink: "sink".to_string(),
            separator: ",".to_string(),
        }
    }
}

/// A DFA rendered as one row per state and one column per input symbol.
///
/// Created by [`Dfa::table`]; the text is produced through `Display`.
pub struct Table<'a, Input> {
    dfa: &'a Dfa<Input>,
    title: &'a str,
    alphabet: Vec<&'a Input>,
    options: &'a TableOptions,
}

impl<Input: Eq + Hash> Dfa<Input> {
    /// Lays out this DFA over `alphabet`, which is sorted and deduplicated
    /// before use. Symbols the DFA does not know render as the sink.
    pub fn table<'a, I>(
        &'a self,
        title: &'a str,
        alphabet: I,
        options: &'a TableOptions,
    ) -> Table<'a, Input>
    where
        I: IntoIterator<Item = &'a Input>,
        Input: Ord + 'a,
    {
        let mut alphabet: Vec<&Input> = alphabet.into_iter().collect();
        alphabet.sort();
        alphabet.dedup();
        Table {
            dfa: self,
            title,
            alphabet,
            options,
        }
    }
}

impl<'a, Input: Eq + Hash> Table<'a, Input> {
    fn name(&self, state: &DfaState) -> String {
        self.dfa
            .labels(state)
            .collect::<Vec<_>>()
            .join(&self.options.separator)
    }

    fn cell(&self, f: &mut fmt::Formatter, text: &str) -> fmt::Result {
        write!(f, "{:<width$}", text, width = self.options.column_width)
    }
}

impl<'a, Input: fmt::Display + Eq + Hash> fmt::Display for Table<'a, Input> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "============= {} ================", self.title)?;

        let width = self.options.column_width;
        let header: Vec<String> = std::iter::once("State".to_string())
            .chain(self.alphabet.iter().map(|input| input.to_string()))
            .collect();
        let mut rule = 0;
        for text in &header {
            self.cell(f, text)?;
            rule += width.max(text.chars().count());
        }
        writeln!(f)?;
        writeln!(f, "{}", "-".repeat(rule))?;

        for state in self.dfa.states() {
            self.cell(f, &self.name(state))?;
            for &input in &self.alphabet {
                match self.dfa.transition(state, input) {
                    Some(next) if self.dfa.contains(next) => self.cell(f, &self.name(next))?,
                    _ => self.cell(f, &self.options.sink)?,
                }
            }
            writeln!(f)?;
        }

        let accepting: Vec<String> = self
            .dfa
            .accepting()
            .map(|state| format!("{{{}}}", self.name(state)))
            .collect();
        writeln!(f)?;
        writeln!(f, "Initial state: {}", self.name(self.dfa.start()))?;
        writeln!(f, "Accepting states: [{}]", accepting.join(", "))?;
        writeln!(f)
    }
}
