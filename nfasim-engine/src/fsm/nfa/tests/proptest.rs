use super::super::{model::Nfa, trace::Trace};
use proptest::{collection, prelude::*};
use proptest_derive::Arbitrary;

const ALPHABET: [char; 3] = ['a', 'b', 'c'];

/// Input symbol, including one the generated automata never declare.
#[derive(Debug, Clone, Copy, Arbitrary)]
enum Symbol {
    A,
    B,
    C,
    Foreign,
}

impl Symbol {
    fn to_char(self) -> char {
        match self {
            Symbol::A => 'a',
            Symbol::B => 'b',
            Symbol::C => 'c',
            Symbol::Foreign => '#',
        }
    }
}

/// Raw description of a random NFA. State `i` is named `s{i}` and `s0` is the
/// start state.
#[derive(Debug, Clone)]
struct Definition {
    accept: Vec<bool>,
    /// `(from, index into ALPHABET, to)`
    transitions: Vec<(usize, usize, usize)>,
}

impl Definition {
    fn build(&self) -> Nfa {
        let name = |i: usize| format!("s{}", i);

        let mut builder = Nfa::builder()
            .with_states((0..self.accept.len()).map(name))
            .with_alphabet(ALPHABET)
            .with_start_state(name(0))
            .with_accept_states(
                self.accept
                    .iter()
                    .enumerate()
                    .filter(|(_, fin)| **fin)
                    .map(|(i, _)| name(i)),
            );

        for &(from, symbol, to) in self.transitions.iter() {
            builder.add_transition(name(from), ALPHABET[symbol], name(to));
        }

        builder.build().expect("generated definitions are well formed")
    }

    /// Explores every single run by backtracking. Independent of the
    /// configuration based simulation.
    fn any_run_accepts(&self, state: usize, input: &[char]) -> bool {
        match input.split_first() {
            None => self.accept[state],
            Some((symbol, rest)) => self
                .transitions
                .iter()
                .filter(|(from, s, _)| *from == state && ALPHABET[*s] == *symbol)
                .any(|(_, _, to)| self.any_run_accepts(*to, rest)),
        }
    }
}

fn arb_definition() -> impl Strategy<Value = Definition> {
    (1usize..=5)
        .prop_flat_map(|states| {
            (
                collection::vec(any::<bool>(), states),
                collection::vec((0..states, 0..ALPHABET.len(), 0..states), 0..=12),
            )
        })
        .prop_map(|(accept, transitions)| Definition {
            accept,
            transitions,
        })
}

fn arb_input(len: std::ops::RangeInclusive<usize>) -> impl Strategy<Value = String> {
    collection::vec(any::<Symbol>(), len)
        .prop_map(|symbols| symbols.into_iter().map(Symbol::to_char).collect())
}

fn arb_valid_input(len: std::ops::RangeInclusive<usize>) -> impl Strategy<Value = String> {
    collection::vec(0..ALPHABET.len(), len)
        .prop_map(|symbols| symbols.into_iter().map(|i| ALPHABET[i]).collect())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    #[test]
    fn agrees_with_backtracking(definition in arb_definition(), input in arb_input(0..=8)) {
        let nfa = definition.build();
        let chars = input.chars().collect::<Vec<_>>();

        prop_assert_eq!(
            nfa.accepts(&input, false),
            definition.any_run_accepts(0, &chars)
        );
    }

    #[test]
    fn idempotent_and_trace_transparent(definition in arb_definition(), input in arb_input(0..=8)) {
        let nfa = definition.build();
        let first = nfa.accepts(&input, false);

        let mut buf = Vec::new();
        let traced = nfa.accepts_with(&input, &mut Trace::new(&mut buf));

        prop_assert_eq!(first, nfa.accepts(&input, false));
        prop_assert_eq!(first, traced);
    }

    #[test]
    fn dead_prefix_stays_rejected(
        definition in arb_definition(),
        prefix in arb_valid_input(0..=6),
        suffix in arb_valid_input(0..=6),
    ) {
        let nfa = definition.build();
        let configuration = prefix
            .chars()
            .fold(nfa.initial_configuration(), |current, ch| nfa.step(&current, ch));

        if configuration.is_empty() {
            let input = format!("{}{}", prefix, suffix);
            prop_assert!(!nfa.accepts(&input, false));
        }
    }

    #[test]
    fn foreign_symbol_rejects(
        definition in arb_definition(),
        input in arb_valid_input(0..=8),
        at in any::<prop::sample::Index>(),
    ) {
        let nfa = definition.build();
        let mut chars = input.chars().collect::<Vec<_>>();
        chars.insert(at.index(chars.len() + 1), Symbol::Foreign.to_char());

        let input = chars.into_iter().collect::<String>();
        prop_assert!(!nfa.accepts(&input, false));
    }
}
