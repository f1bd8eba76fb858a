//
//   Copyright 2016 Andrew Hunter
//
//   Licensed under the Apache License, Version 2.0 (the "License");
//   you may not use this file except in compliance with the License.
//   You may obtain a copy of the License at
//
//       http://www.apache.org/licenses/LICENSE-2.0
//
//   Unless required by applicable law or agreed to in writing, software
//   distributed under the License is distributed on an "AS IS" BASIS,
//   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//   See the License for the specific language governing permissions and
//   limitations under the License.
//


//!
//! # DFA
//!
//! A deterministic finite automaton: at most one transition per symbol from each state, and no epsilon transitions.
//! The transitions a DFA will store are restricted so that this always holds, which means it never has to be checked.
//!
//! DFAs are partial: a state doesn't need a transition for every symbol, and reading a symbol it has no transition for
//! rejects the input.
//!

use std::fmt;

use tracing::debug;

use super::automaton::*;
use super::error::*;
use super::state::*;
use super::symbol::*;
use super::transition_table::*;

///
/// A deterministic finite automaton
///
#[derive(Clone, Debug)]
pub struct Dfa<InputSymbol: Symbol = char> {
    table: TransitionTable<InputSymbol>
}

impl<InputSymbol: Symbol> Default for Dfa<InputSymbol> {
    fn default() -> Self {
        Dfa::new()
    }
}

impl<InputSymbol: Symbol> Dfa<InputSymbol> {
    ///
    /// Creates a DFA with no states
    ///
    pub fn new() -> Dfa<InputSymbol> {
        Dfa { table: TransitionTable::new() }
    }

    ///
    /// The state reached from `state` on `symbol`, if there is a transition for it
    ///
    pub fn transition(&self, state: State, symbol: InputSymbol) -> Option<State> {
        self.table.targets(state.id(), &Some(symbol))
            .and_then(|targets| targets.first())
            .and_then(|target| self.table.state(*target))
    }

    ///
    /// Retrieves the transition table behind this DFA
    ///
    pub(crate) fn into_table(self) -> TransitionTable<InputSymbol> {
        self.table
    }
}

impl<InputSymbol: Symbol> Automaton<InputSymbol> for Dfa<InputSymbol> {
    #[inline]
    fn table(&self) -> &TransitionTable<InputSymbol> {
        &self.table
    }

    fn add_state(&mut self, is_start: bool, is_accept: bool) -> Result<State> {
        self.table.add_state(is_start, is_accept)
    }

    ///
    /// Adds a transition to this DFA
    ///
    /// Epsilon transitions are refused, as is a second target for a state and symbol that already has one.
    ///
    fn add_transition(&mut self, from: State, symbol: Option<InputSymbol>, to: State) -> Result<()> {
        let symbol = match symbol {
            Some(symbol)    => symbol,
            None            => {
                debug!(from = from.id(), to = to.id(), "rejected epsilon transition in DFA");
                return Err(AutomatonError::EpsilonNotAllowed);
            }
        };

        self.table.check_state(&from)?;
        self.table.check_state(&to)?;

        let label = Some(symbol);
        if let Some(existing) = self.table.targets(from.id(), &label) {
            if !existing.contains(&to.id()) {
                debug!(from = from.id(), symbol = ?label, "rejected second target for DFA transition");
                return Err(AutomatonError::ConflictingTransition(from.id()));
            }
        }

        self.table.add_transition(from, label, to)
    }

    ///
    /// Always true: a DFA cannot hold a nondeterministic transition
    ///
    #[inline]
    fn deterministic(&self) -> bool {
        true
    }

    fn to_dfa(&self) -> Result<Dfa<InputSymbol>> {
        Ok(self.clone())
    }
}

impl<InputSymbol: Symbol> fmt::Display for Dfa<InputSymbol> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.table, f)
    }
}
