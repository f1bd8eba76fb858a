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
//! # Finite automata
//!
//! A library for building nondeterministic and deterministic finite automata, testing strings against them, and
//! converting NFAs into equivalent DFAs with the subset construction.
//!
//! ```
//! # use fsa::*;
//! let mut nfa: Nfa = Nfa::new();
//! let start   = nfa.add_state(true, false).unwrap();
//! let a       = nfa.add_state(false, false).unwrap();
//! let ab      = nfa.add_state(false, true).unwrap();
//!
//! nfa.add_transition(start, Some('a'), start).unwrap();
//! nfa.add_transition(start, Some('b'), start).unwrap();
//! nfa.add_transition(start, Some('a'), a).unwrap();
//! nfa.add_transition(a, Some('b'), ab).unwrap();
//!
//! let dfa = nfa.to_dfa().unwrap();
//! assert!(dfa.accepts("bbab".chars()));
//! assert!(!dfa.accepts("aba".chars()));
//! ```
//!

pub use self::state::*;
pub use self::symbol::*;
pub use self::error::AutomatonError;
pub use self::automaton::*;
pub use self::transition_table::*;
pub use self::nfa::*;
pub use self::dfa::*;
pub use self::dfa_compiler::*;

pub mod state;
pub mod symbol;
pub mod error;
pub mod automaton;
pub mod transition_table;
pub mod nfa;
pub mod dfa;
pub mod dfa_compiler;
