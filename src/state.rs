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
//! # States
//!
//! A state is an identity token handed out by the automaton that owns it. The id is an index into that automaton's
//! state table, so the same id means different things in different automata.
//!

use std::fmt;
use std::hash::{Hash, Hasher};

use indexmap::IndexSet;

///
/// Identifies a state within the automaton that allocated it
///
pub type StateId = u32;

///
/// A set of states, iterated in the order the states were inserted
///
pub type StateSet = IndexSet<StateId>;

///
/// A node of an automaton
///
/// States are compared and hashed by id alone: the start and accept flags are fixed when the automaton creates the
/// state and never change afterwards.
///
#[derive(Clone, Copy, Debug)]
pub struct State {
    id:         StateId,
    is_start:   bool,
    is_accept:  bool
}

impl State {
    pub(crate) fn new(id: StateId, is_start: bool, is_accept: bool) -> State {
        State { id: id, is_start: is_start, is_accept: is_accept }
    }

    ///
    /// The id of this state, unique within its automaton
    ///
    #[inline]
    pub fn id(&self) -> StateId {
        self.id
    }

    #[inline]
    pub fn is_start(&self) -> bool {
        self.is_start
    }

    #[inline]
    pub fn is_accept(&self) -> bool {
        self.is_accept
    }

    ///
    /// True if this handle carries exactly the same flags as another for the same id
    ///
    /// Equality only looks at the id; this is used to spot handles that were issued by a different automaton.
    ///
    #[inline]
    pub(crate) fn same_flags(&self, other: &State) -> bool {
        self.is_start == other.is_start && self.is_accept == other.is_accept
    }
}

impl PartialEq for State {
    fn eq(&self, other: &State) -> bool {
        self.id == other.id
    }
}

impl Eq for State { }

impl Hash for State {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl From<State> for StateId {
    #[inline]
    fn from(state: State) -> StateId {
        state.id
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "q{}", self.id)
    }
}
