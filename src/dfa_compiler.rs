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
//! # DFA compiler
//!
//! The DFA compiler converts NFAs into DFAs using the subset construction. Each DFA state stands for the set of NFA
//! states that the NFA could be in at the same point in the input; a DFA state accepts if any of its NFA states do.
//!
//! The alphabet is visited in ascending order and new subsets are processed in the order they are found, so compiling
//! the same NFA always produces the same DFA. Sets with no way forward on a symbol produce no transition, which leaves
//! the DFA partial rather than adding a trap state.
//!

use std::collections::VecDeque;

use indexmap::IndexMap;
use indexmap::map::Entry;
use itertools::Itertools;
use tracing::{debug, trace};

use super::automaton::*;
use super::dfa::*;
use super::error::*;
use super::nfa::*;
use super::state::*;
use super::symbol::*;

///
/// Builds a deterministic finite automaton from an NFA
///
pub struct DfaCompiler<'a, InputSymbol: Symbol> {
    /// State machine that is to be compiled
    nfa: &'a Nfa<InputSymbol>,

    /// Largest number of states the DFA may have (no limit if None)
    state_limit: Option<usize>
}

///
/// Key identifying a set of NFA states regardless of the order its members were found in
///
fn subset_key(states: &StateSet) -> Vec<StateId> {
    states.iter().copied().sorted().collect()
}

impl<'a, InputSymbol: Symbol> DfaCompiler<'a, InputSymbol> {
    ///
    /// Builds a DFA from an NFA with no limit on the number of states
    ///
    pub fn build(nfa: &'a Nfa<InputSymbol>) -> Result<Dfa<InputSymbol>> {
        let compiler = DfaCompiler::new(nfa);
        compiler.compile()
    }

    ///
    /// Creates a new DFA compiler for a particular NFA
    ///
    pub fn new(nfa: &'a Nfa<InputSymbol>) -> Self {
        DfaCompiler { nfa: nfa, state_limit: None }
    }

    ///
    /// Stops compilation with `StateLimitExceeded` if the DFA would need more than `limit` states
    ///
    pub fn with_state_limit(mut self, limit: usize) -> Self {
        self.state_limit = Some(limit);
        self
    }

    ///
    /// Creates a DFA state for a set of NFA states
    ///
    fn create_state(&self, dfa: &mut Dfa<InputSymbol>, is_start: bool, subset: &StateSet) -> Result<State> {
        if let Some(limit) = self.state_limit {
            if dfa.count_states() >= limit {
                debug!(limit, "subset construction exceeded its state limit");
                return Err(AutomatonError::StateLimitExceeded { limit: limit });
            }
        }

        let is_accept   = self.nfa.table().contains_accepting(subset);
        let state       = dfa.add_state(is_start, is_accept)?;

        trace!(dfa_state = state.id(), nfa_states = ?subset_key(subset), is_accept, "found new subset");
        Ok(state)
    }

    ///
    /// Compiles the NFA into a DFA
    ///
    pub fn compile(self) -> Result<Dfa<InputSymbol>> {
        let table = self.nfa.table();
        let start = table.start().ok_or(AutomatonError::NoStartState)?;

        debug!(nfa_states = table.count_states(), alphabet = table.alphabet().len(), "starting subset construction");

        let mut dfa         = Dfa::new();
        let mut dfa_states  = IndexMap::new();
        let mut to_convert  = VecDeque::new();

        // The DFA starts in the set of states the NFA can reach before reading anything
        let initial     = table.epsilon_closure(&StateSet::from([start.id()]));
        let dfa_start   = self.create_state(&mut dfa, true, &initial)?;

        dfa_states.insert(subset_key(&initial), dfa_start);
        to_convert.push_back((initial, dfa_start));

        while let Some((subset, source)) = to_convert.pop_front() {
            for symbol in table.alphabet() {
                let reached = table.step(&subset, symbol);

                if reached.is_empty() {
                    continue;
                }

                let target = match dfa_states.entry(subset_key(&reached)) {
                    Entry::Occupied(existing) => *existing.get(),

                    Entry::Vacant(vacant) => {
                        let state = self.create_state(&mut dfa, false, &reached)?;
                        to_convert.push_back((reached, state));

                        *vacant.insert(state)
                    }
                };

                dfa.add_transition(source, Some(symbol.clone()), target)?;
            }
        }

        debug!(nfa_states = table.count_states(), dfa_states = dfa.count_states(), "finished subset construction");
        Ok(dfa)
    }
}

#[cfg(test)]
mod test {
    use itertools::repeat_n;
    use pretty_assertions::assert_eq;
    use tracing_test::traced_test;

    use super::*;
    use super::super::nfa::test::*;

    ///
    /// Every string over the alphabet up to the specified length
    ///
    fn all_words(alphabet: &[char], max_length: usize) -> Vec<String> {
        let mut words = vec![String::new()];

        for length in 1..=max_length {
            words.extend(repeat_n(alphabet.iter(), length)
                .multi_cartesian_product()
                .map(|symbols| symbols.into_iter().collect::<String>()));
        }

        words
    }

    ///
    /// NFA accepting words with an 'a' exactly `n` symbols before the end, whose DFA needs 2^(n+1) states
    ///
    fn a_then_n_symbols(n: usize) -> Nfa {
        let mut nfa: Nfa = Nfa::new();

        let start       = nfa.add_state(true, false).unwrap();
        let mut last    = nfa.add_state(false, n == 0).unwrap();

        nfa.add_transition(start, Some('a'), start).unwrap();
        nfa.add_transition(start, Some('b'), start).unwrap();
        nfa.add_transition(start, Some('a'), last).unwrap();

        for index in 0..n {
            let next = nfa.add_state(false, index + 1 == n).unwrap();

            nfa.add_transition(last, Some('a'), next).unwrap();
            nfa.add_transition(last, Some('b'), next).unwrap();
            last = next;
        }

        nfa
    }

    #[test]
    fn dfa_recognises_words_ending_in_abb() {
        let dfa     = ends_in_abb().to_dfa().unwrap();
        let results = ABB_INPUTS.iter().map(|input| dfa.accepts(input.chars())).collect::<Vec<_>>();

        assert_eq!(results, ABB_EXPECTED.to_vec());
        assert!(dfa.deterministic());
        assert!(dfa.table().deterministic());
    }

    #[test]
    fn abb_dfa_has_textbook_state_count() {
        let dfa = ends_in_abb().to_dfa().unwrap();

        assert!(dfa.count_states() == 5);
        assert_eq!(dfa.alphabet().iter().copied().collect::<Vec<_>>(), vec!['a', 'b']);
        assert_eq!(dfa.accepting().iter().copied().collect::<Vec<_>>(), vec![4]);
    }

    #[test]
    fn abb_dfa_states_follow_discovery_order() {
        let dfa = ends_in_abb().to_dfa().unwrap();
        let s0  = dfa.start().unwrap();

        assert!(s0.id() == 0);

        let s1 = dfa.transition(s0, 'a').unwrap();
        let s2 = dfa.transition(s0, 'b').unwrap();
        let s3 = dfa.transition(s1, 'b').unwrap();
        let s4 = dfa.transition(s3, 'b').unwrap();

        assert_eq!(vec![s1.id(), s2.id(), s3.id(), s4.id()], vec![1, 2, 3, 4]);
        assert!(s4.is_accept());
    }

    #[test]
    fn compiling_twice_gives_same_dfa() {
        let nfa = ends_in_abb();

        assert_eq!(nfa.to_dfa().unwrap().to_string(), nfa.to_dfa().unwrap().to_string());
    }

    #[test]
    fn dfa_matches_nfa_on_all_short_words() {
        let nfa = ends_in_abb();
        let dfa = nfa.to_dfa().unwrap();

        for word in all_words(&['a', 'b', 'c'], 7) {
            assert_eq!(dfa.accepts(word.chars()), nfa.accepts(word.chars()), "word {:?}", word);
            assert_eq!(dfa.accepts(word.chars()), !word.contains('c') && word.ends_with("abb"), "word {:?}", word);
        }
    }

    #[test]
    fn exponential_nfa_is_determinised() {
        let nfa = a_then_n_symbols(3);
        let dfa = nfa.to_dfa().unwrap();

        assert!(dfa.count_states() == 16);
        assert!(dfa.count_states() <= 1 << nfa.count_states());

        for word in all_words(&['a', 'b'], 8) {
            assert_eq!(dfa.accepts(word.chars()), nfa.accepts(word.chars()), "word {:?}", word);
        }
    }

    #[test]
    fn state_limit_stops_compilation() {
        let nfa = a_then_n_symbols(3);

        assert_eq!(nfa.to_dfa_with_limit(15).map(|dfa| dfa.count_states()), Err(AutomatonError::StateLimitExceeded { limit: 15 }));
        assert!(nfa.to_dfa_with_limit(16).unwrap().count_states() == 16);
    }

    #[test]
    fn zero_state_limit_fails_immediately() {
        let result = DfaCompiler::new(&ends_in_abb()).with_state_limit(0).compile();

        assert_eq!(result.map(|dfa| dfa.count_states()), Err(AutomatonError::StateLimitExceeded { limit: 0 }));
    }

    #[test]
    fn nfa_without_start_cannot_be_compiled() {
        let mut nfa: Nfa = Nfa::new();

        let state = nfa.add_state(false, true).unwrap();
        nfa.add_transition(state, Some('a'), state).unwrap();

        assert_eq!(DfaCompiler::build(&nfa).map(|dfa| dfa.count_states()), Err(AutomatonError::NoStartState));
    }

    #[test]
    fn accepting_start_carries_over() {
        let mut nfa: Nfa = Nfa::new();

        let s0 = nfa.add_state(true, false).unwrap();
        let s1 = nfa.add_state(false, true).unwrap();
        nfa.add_transition(s0, EPSILON, s1).unwrap();

        let dfa = nfa.to_dfa().unwrap();

        assert!(dfa.count_states() == 1);
        assert!(dfa.start().unwrap().is_accept());
        assert!(dfa.accepts("".chars()));
    }

    #[test]
    fn dead_ends_produce_no_transition() {
        let mut nfa: Nfa = Nfa::new();

        let s0 = nfa.add_state(true, false).unwrap();
        let s1 = nfa.add_state(false, true).unwrap();
        nfa.add_transition(s0, Some('a'), s1).unwrap();
        nfa.add_transition(s1, Some('b'), s1).unwrap();

        let dfa     = nfa.to_dfa().unwrap();
        let start   = dfa.start().unwrap();

        assert!(dfa.count_states() == 2);
        assert_eq!(dfa.transition(start, 'b'), None);
        assert!(dfa.next(start, Some('b')).is_empty());
    }

    #[test]
    fn epsilon_cycles_collapse_into_one_state() {
        let mut nfa: Nfa = Nfa::new();

        let s0 = nfa.add_state(true, false).unwrap();
        let s1 = nfa.add_state(false, false).unwrap();
        let s2 = nfa.add_state(false, true).unwrap();

        nfa.add_transition(s0, EPSILON, s1).unwrap();
        nfa.add_transition(s1, EPSILON, s0).unwrap();
        nfa.add_transition(s1, Some('a'), s2).unwrap();
        nfa.add_transition(s2, EPSILON, s0).unwrap();

        let dfa = nfa.to_dfa().unwrap();

        assert!(dfa.count_states() == 2);
        assert!(dfa.accepts("aaaa".chars()));
        assert!(!dfa.accepts("".chars()));
    }

    #[test]
    fn compiles_other_symbol_types() {
        let mut nfa: Nfa<u8> = Nfa::new();

        let s0 = nfa.add_state(true, false).unwrap();
        let s1 = nfa.add_state(false, true).unwrap();

        nfa.add_transition(s0, Some(0), s0).unwrap();
        nfa.add_transition(s0, Some(0), s1).unwrap();
        nfa.add_transition(s1, epsilon(), s0).unwrap();

        let dfa = nfa.to_dfa().unwrap();

        assert!(dfa.accepts(vec![0, 0]));
        assert!(!dfa.accepts(vec![]));
    }

    #[test]
    fn states_and_accepting_set_are_visible_through_the_trait() {
        fn summary<InputSymbol: Symbol, Machine: Automaton<InputSymbol>>(machine: &Machine) -> (usize, usize) {
            (machine.states().len(), machine.accepting().len())
        }

        let mut nfa: Nfa<u8> = Nfa::new();

        let s0 = nfa.add_state(true, false).unwrap();
        let s1 = nfa.add_state(false, true).unwrap();

        nfa.add_transition(s0, Some(0), s1).unwrap();
        nfa.add_transition(s1, Some(1), s1).unwrap();

        let dfa = nfa.to_dfa().unwrap();

        assert_eq!(summary(&nfa), (2, 1));
        assert_eq!(summary(&dfa), (2, 1));
    }

    #[test]
    #[traced_test]
    fn compilation_is_logged() {
        ends_in_abb().to_dfa().unwrap();

        assert!(logs_contain("starting subset construction"));
        assert!(logs_contain("found new subset"));
        assert!(logs_contain("finished subset construction"));
    }
}
