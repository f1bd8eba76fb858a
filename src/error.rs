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
//! # Errors
//!
//! Every error here is a misuse of the automaton by its caller. They are reported by the call that caused them and
//! leave the automaton as it was before that call.
//!

use thiserror::Error;

use super::state::*;

///
/// Errors raised while building or converting an automaton
///
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AutomatonError {
    #[error("automaton already has a start state (q{existing})")]
    DuplicateStartState { existing: StateId },

    #[error("state q{0} does not belong to this automaton")]
    UnknownState(StateId),

    #[error("a deterministic automaton cannot have epsilon transitions")]
    EpsilonNotAllowed,

    #[error("state q{0} already has a different transition on this symbol")]
    ConflictingTransition(StateId),

    #[error("automaton has no start state")]
    NoStartState,

    #[error("subset construction needs more than {limit} states")]
    StateLimitExceeded { limit: usize }
}

///
/// Result type for automaton operations
///
pub type Result<T> = std::result::Result<T, AutomatonError>;
