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
//! # Symbols
//!
//! Transitions are labelled with an `Option` of an input symbol. `None` is the empty or 'epsilon' label: a transition
//! that can be followed without reading any input.
//!

use std::fmt::Debug;
use std::hash::Hash;

///
/// Trait implemented by types that can be read by an automaton
///
/// Symbols need an ordering so that subset construction visits the alphabet in the same order every time.
///
pub trait Symbol: Clone + Ord + Hash + Debug + 'static { }

impl<T: Clone + Ord + Hash + Debug + 'static> Symbol for T { }

///
/// The label of an epsilon transition for automata over `char`
///
/// Automata over other symbol types can use `epsilon()`.
///
pub const EPSILON: Option<char> = None;

///
/// The label of an epsilon transition for any symbol type
///
#[inline]
pub fn epsilon<InputSymbol>() -> Option<InputSymbol> {
    None
}

///
/// True if a transition label is the epsilon label
///
#[inline]
pub fn is_epsilon<InputSymbol>(label: &Option<InputSymbol>) -> bool {
    label.is_none()
}
