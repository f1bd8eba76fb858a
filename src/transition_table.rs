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
//! # Transition table
//!
//! The transition table is the engine behind both automaton variants. It owns the states, the alphabet, the start and
//! accepting states and the transition function, and knows how to run an input string through them.
//!
//! States live in an arena indexed by their id. The transition function is an adjacency list: for each state, a map
//! from transition label to the set of target states. Targets are kept in the order their transitions were added.
//!

use std::collections::BTreeSet;
use std::fmt;

use indexmap::IndexMap;
use itertools::Itertools;
use tracing::{debug, trace};

use super::error::*;
use super::state::*;
use super::symbol::*;

///
/// The transitions leaving a single state, keyed by label
///
type Adjacency<InputSymbol> = IndexMap<Option<InputSymbol>, StateSet>;

///
/// States and transitions of a finite automaton
///
#[derive(Clone, Debug)]
pub struct TransitionTable<InputSymbol: Symbol> {
    /// The id that the next state will receive
    next_id: StateId,

    /// Every state, indexed by id
    states: Vec<State>,

    /// Symbols used by at least one non-epsilon transition
    alphabet: BTreeSet<InputSymbol>,

    /// The start state, if one has been created
    start: Option<State>,

    /// Accepting states, in creation order
    accepting: StateSet,

    /// Outgoing transitions, indexed by source state id
    delta: Vec<Adjacency<InputSymbol>>
}

impl<InputSymbol: Symbol> Default for TransitionTable<InputSymbol> {
    fn default() -> Self {
        TransitionTable::new()
    }
}

impl<InputSymbol: Symbol> TransitionTable<InputSymbol> {
    ///
    /// Creates a transition table with no states
    ///
    pub fn new() -> TransitionTable<InputSymbol> {
        TransitionTable {
            next_id:    0,
            states:     vec![],
            alphabet:   BTreeSet::new(),
            start:      None,
            accepting:  StateSet::new(),
            delta:      vec![]
        }
    }

    ///
    /// Allocates a new state
    ///
    pub(crate) fn add_state(&mut self, is_start: bool, is_accept: bool) -> Result<State> {
        // Check before allocating so that a failed call does not use up an id
        if is_start {
            if let Some(existing) = self.start {
                debug!(existing = existing.id(), "rejected second start state");
                return Err(AutomatonError::DuplicateStartState { existing: existing.id() });
            }
        }

        let state = State::new(self.next_id, is_start, is_accept);
        self.next_id += 1;

        self.states.push(state);
        self.delta.push(Adjacency::new());

        if is_start {
            self.start = Some(state);
        }

        if is_accept {
            self.accepting.insert(state.id());
        }

        trace!(state = state.id(), is_start, is_accept, "added state");
        Ok(state)
    }

    ///
    /// Fails with `UnknownState` unless the state was allocated by this table
    ///
    pub(crate) fn check_state(&self, state: &State) -> Result<()> {
        match self.states.get(state.id() as usize) {
            Some(known) if known.same_flags(state) => Ok(()),

            _ => {
                debug!(state = state.id(), "rejected transition endpoint from another automaton");
                Err(AutomatonError::UnknownState(state.id()))
            }
        }
    }

    ///
    /// Adds a transition between two states of this table
    ///
    pub(crate) fn add_transition(&mut self, from: State, symbol: Option<InputSymbol>, to: State) -> Result<()> {
        self.check_state(&from)?;
        self.check_state(&to)?;

        if let Some(ref symbol) = symbol {
            self.alphabet.insert(symbol.clone());
        }

        let (from, to) = (from.id(), to.id());
        if self.insert_target(from, symbol.clone(), to) {
            trace!(from, symbol = ?symbol, to, "added transition");
        }

        Ok(())
    }

    ///
    /// Adds `to` to the target set for `(from, label)`, creating the set if it doesn't exist yet
    ///
    /// Returns false if the target was already present. Both states must already exist.
    ///
    fn insert_target(&mut self, from: StateId, label: Option<InputSymbol>, to: StateId) -> bool {
        self.delta[from as usize]
            .entry(label)
            .or_insert_with(StateSet::new)
            .insert(to)
    }

    ///
    /// The target set for a state and transition label, if there are any transitions for it
    ///
    #[inline]
    pub fn targets(&self, from: StateId, label: &Option<InputSymbol>) -> Option<&StateSet> {
        self.delta.get(from as usize).and_then(|adjacency| adjacency.get(label))
    }

    ///
    /// The states reachable from a state by following exactly one transition with the specified label
    ///
    pub fn next(&self, from: StateId, label: &Option<InputSymbol>) -> StateSet {
        self.targets(from, label).cloned().unwrap_or_default()
    }

    ///
    /// Computes the epsilon closure of a set of states
    ///
    /// The result starts with the states passed in, followed by the states reached from them in the order they were
    /// discovered.
    ///
    pub fn epsilon_closure(&self, states: &StateSet) -> StateSet {
        let mut result  = states.clone();
        let mut stack   = states.iter().copied().collect_vec();

        while let Some(state) = stack.pop() {
            if let Some(targets) = self.targets(state, &None) {
                for &target in targets {
                    // Only follow states we haven't seen before, so cycles of epsilon transitions terminate
                    if result.insert(target) {
                        stack.push(target);
                    }
                }
            }
        }

        result
    }

    ///
    /// Reads one symbol: every state reachable from `states` on that symbol, with their epsilon closure
    ///
    pub fn step(&self, states: &StateSet, symbol: &InputSymbol) -> StateSet {
        let label       = Some(symbol.clone());
        let reached     = states.iter()
            .filter_map(|state| self.targets(*state, &label))
            .flatten()
            .copied()
            .collect();

        self.epsilon_closure(&reached)
    }

    ///
    /// True if any of a set of states is an accepting state
    ///
    #[inline]
    pub fn contains_accepting(&self, states: &StateSet) -> bool {
        states.iter().any(|state| self.accepting.contains(state))
    }

    ///
    /// Runs a string of symbols through this automaton, returning true if it finishes in an accepting state
    ///
    pub fn accepts<Input: IntoIterator<Item = InputSymbol>>(&self, input: Input) -> bool {
        let start = match self.start {
            Some(start) => start,
            None        => return false
        };

        let mut active = self.epsilon_closure(&StateSet::from([start.id()]));

        for symbol in input {
            // Symbols that no transition uses can never be read, whatever state we're in
            if !self.alphabet.contains(&symbol) {
                trace!(symbol = ?symbol, "rejected symbol outside the alphabet");
                return false;
            }

            active = self.step(&active, &symbol);
        }

        self.contains_accepting(&active)
    }

    ///
    /// True if there are no epsilon transitions and no label leads to more than one state
    ///
    pub fn deterministic(&self) -> bool {
        self.delta.iter()
            .flat_map(|adjacency| adjacency.iter())
            .all(|(label, targets)| !is_epsilon(label) && targets.len() <= 1)
    }

    ///
    /// The start state, if there is one
    ///
    #[inline]
    pub fn start(&self) -> Option<State> {
        self.start
    }

    ///
    /// Every state, in order of creation (which is also order of id)
    ///
    #[inline]
    pub fn states(&self) -> &[State] {
        &self.states
    }

    #[inline]
    pub fn state(&self, id: StateId) -> Option<State> {
        self.states.get(id as usize).copied()
    }

    #[inline]
    pub fn accepting(&self) -> &StateSet {
        &self.accepting
    }

    ///
    /// The symbols used by this automaton's transitions, in ascending order
    ///
    #[inline]
    pub fn alphabet(&self) -> &BTreeSet<InputSymbol> {
        &self.alphabet
    }

    #[inline]
    pub fn count_states(&self) -> usize {
        self.states.len()
    }
}

impl<InputSymbol: Symbol> fmt::Display for TransitionTable<InputSymbol> {
    ///
    /// Writes one line per state: `->` marks the start state and `*` an accepting state
    ///
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (state, adjacency) in self.states.iter().zip(self.delta.iter()) {
            let marker = match (state.is_start(), state.is_accept()) {
                (true, true)    => "->*",
                (true, false)   => "->",
                (false, true)   => "*",
                (false, false)  => ""
            };

            write!(f, "{:<4}{}", marker, state)?;

            for (label, targets) in adjacency {
                let label = match label {
                    Some(symbol)    => format!("{:?}", symbol),
                    None            => "ε".to_string()
                };

                write!(f, " {} -> {{{}}}", label, targets.iter().map(|target| format!("q{}", target)).join(", "))?;
            }

            writeln!(f)?;
        }

        Ok(())
    }
}
