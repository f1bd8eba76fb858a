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
//! The acronym NFA stands for 'Nondeterministic Finite Automaton'. An NFA is a state machine where each state can have
//! transitions to more than one target state for the same symbol, as well as 'epsilon' transitions that are followed
//! without reading any input. This lets it be in more than one state at once, which is the property that makes it
//! nondeterministic.
//!
//! NFAs are convenient to build but inconvenient to evaluate. For every NFA there is a DFA accepting the same strings,
//! which `to_dfa` finds using the subset construction.
//!
//! An NFA is created by calling the constructor:
//!
//! ```
//! # use fsa::*;
//! let mut nfa: Nfa = Nfa::new();
//! ```
//!

use std::fmt;

use super::automaton::*;
use super::dfa::*;
use super::dfa_compiler::*;
use super::error::*;
use super::state::*;
use super::symbol::*;
use super::transition_table::*;

///
/// A nondeterministic finite automaton
///
#[derive(Clone, Debug)]
pub struct Nfa<InputSymbol: Symbol = char> {
    table: TransitionTable<InputSymbol>
}

impl<InputSymbol: Symbol> Default for Nfa<InputSymbol> {
    fn default() -> Self {
        Nfa::new()
    }
}

impl<InputSymbol: Symbol> Nfa<InputSymbol> {
    ///
    /// Creates an NFA with no states
    ///
    /// The methods in `Automaton` should be called to build it into a more useful structure.
    ///
    pub fn new() -> Nfa<InputSymbol> {
        Nfa { table: TransitionTable::new() }
    }

    ///
    /// Converts to a DFA, failing with `StateLimitExceeded` if the DFA would need more than `limit` states
    ///
    pub fn to_dfa_with_limit(&self, limit: usize) -> Result<Dfa<InputSymbol>> {
        DfaCompiler::new(self).with_state_limit(limit).compile()
    }
}

impl<InputSymbol: Symbol> Automaton<InputSymbol> for Nfa<InputSymbol> {
    #[inline]
    fn table(&self) -> &TransitionTable<InputSymbol> {
        &self.table
    }

    fn add_state(&mut self, is_start: bool, is_accept: bool) -> Result<State> {
        self.table.add_state(is_start, is_accept)
    }

    fn add_transition(&mut self, from: State, symbol: Option<InputSymbol>, to: State) -> Result<()> {
        self.table.add_transition(from, symbol, to)
    }

    fn deterministic(&self) -> bool {
        self.table.deterministic()
    }

    ///
    /// Builds a DFA from this NFA using the subset construction
    ///
    /// The DFA can have up to 2^n states for an NFA with n states; use `to_dfa_with_limit` to put a bound on this.
    ///
    fn to_dfa(&self) -> Result<Dfa<InputSymbol>> {
        DfaCompiler::build(self)
    }
}

///
/// Every DFA is also an NFA
///
impl<InputSymbol: Symbol> From<Dfa<InputSymbol>> for Nfa<InputSymbol> {
    fn from(dfa: Dfa<InputSymbol>) -> Nfa<InputSymbol> {
        Nfa { table: dfa.into_table() }
    }
}

impl<InputSymbol: Symbol> fmt::Display for Nfa<InputSymbol> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.table, f)
    }
}
