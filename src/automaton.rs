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
//! # Automaton
//!
//! The `Automaton` trait is the surface shared by nondeterministic and deterministic automata. Both variants are built
//! the same way: states are created with `add_state` and joined with `add_transition`, after which strings can be
//! tested with `accepts`. A variant only decides which transitions it is prepared to store, whether it needs checking
//! for determinism, and how it becomes a DFA.
//!
//! ```
//! # use fsa::*;
//! let mut nfa: Nfa = Nfa::new();
//! let start   = nfa.add_state(true, false).unwrap();
//! let end     = nfa.add_state(false, true).unwrap();
//!
//! nfa.add_transition(start, Some('a'), end).unwrap();
//! nfa.add_transition(start, EPSILON, end).unwrap();
//!
//! assert!(nfa.accepts("a".chars()));
//! assert!(nfa.accepts("".chars()));
//! assert!(nfa.to_dfa().unwrap().deterministic());
//! ```
//!

use std::collections::BTreeSet;

use super::dfa::*;
use super::error::*;
use super::state::*;
use super::symbol::*;
use super::transition_table::*;

///
/// Trait implemented by finite automata over a particular symbol type
///
/// Transition labels are `Option<InputSymbol>`, with `None` (`EPSILON`) standing for the empty transition.
///
pub trait Automaton<InputSymbol: Symbol> {
    ///
    /// The transition table holding the states and transitions of this automaton
    ///
    fn table(&self) -> &TransitionTable<InputSymbol>;

    ///
    /// Creates a new state, optionally marking it as the start state or as an accepting state
    ///
    /// An automaton has at most one start state: asking for a second one fails with `DuplicateStartState`.
    ///
    fn add_state(&mut self, is_start: bool, is_accept: bool) -> Result<State>;

    ///
    /// Adds a transition from `from` to `to` on `symbol` (or on no input at all if `symbol` is `EPSILON`)
    ///
    /// Both states must belong to this automaton. Adding a transition that already exists changes nothing.
    ///
    /// States are identified by id, so a state taken from a different automaton is only refused with `UnknownState`
    /// when its id doesn't exist here or its start and accept flags differ from this automaton's state with that id.
    /// Otherwise it stands for the local state with the same id.
    ///
    fn add_transition(&mut self, from: State, symbol: Option<InputSymbol>, to: State) -> Result<()>;

    ///
    /// True if no state has an epsilon transition and no symbol leads from a state to more than one target
    ///
    fn deterministic(&self) -> bool;

    ///
    /// Returns a deterministic automaton accepting the same language as this one
    ///
    fn to_dfa(&self) -> Result<Dfa<InputSymbol>>;

    ///
    /// True if this automaton accepts the input string
    ///
    /// A string containing a symbol that no transition in the automaton uses is always rejected.
    ///
    #[inline]
    fn accepts<Input: IntoIterator<Item = InputSymbol>>(&self, input: Input) -> bool where Self: Sized {
        self.table().accepts(input)
    }

    ///
    /// The states reachable from `state` by following a single epsilon transition
    ///
    #[inline]
    fn closure(&self, state: State) -> StateSet {
        self.table().next(state.id(), &None)
    }

    ///
    /// The states reachable from `state` by reading exactly `symbol`
    ///
    #[inline]
    fn next(&self, state: State, symbol: Option<InputSymbol>) -> StateSet {
        self.table().next(state.id(), &symbol)
    }

    ///
    /// The set of states reachable from `states` using only epsilon transitions (including `states` themselves)
    ///
    #[inline]
    fn epsilon_closure(&self, states: &StateSet) -> StateSet {
        self.table().epsilon_closure(states)
    }

    #[inline]
    fn start(&self) -> Option<State> {
        self.table().start()
    }

    #[inline]
    fn states(&self) -> &[State] {
        self.table().states()
    }

    #[inline]
    fn state(&self, id: StateId) -> Option<State> {
        self.table().state(id)
    }

    #[inline]
    fn accepting(&self) -> &StateSet {
        self.table().accepting()
    }

    #[inline]
    fn alphabet(&self) -> &BTreeSet<InputSymbol> {
        self.table().alphabet()
    }

    #[inline]
    fn count_states(&self) -> usize {
        self.table().count_states()
    }
}
