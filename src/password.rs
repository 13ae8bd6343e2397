use crate::alphabet::{password_alphabet, SymbolClass};
use nfasim_engine::{BuildResult, Nfa};

/// Sample strings the password automaton must accept.
pub const ACCEPTED_SAMPLES: [&str; 5] = ["A123", "Sogamoso2025", "Uptc9", "X0", "Z99"];

/// Sample strings the password automaton must reject.
pub const REJECTED_SAMPLES: [&str; 5] = ["1234", "soga2025", "UPTC", "aX99", "AA1"];

/// Builds the NFA for the password format: one upper-case letter, any number
/// of lower-case letters, then at least one digit.
///
/// ```text
/// q0 --A-Z--> q1
/// q1 --a-z--> q2    q1 --0-9--> q3
/// q2 --a-z--> q2    q2 --0-9--> q3
/// q3 --0-9--> q3
/// ```
pub fn password_nfa() -> BuildResult<Nfa> {
    use SymbolClass::*;

    Nfa::builder()
        .with_states(["q0", "q1", "q2", "q3"])
        .with_alphabet(password_alphabet())
        .with_start_state("q0")
        .with_accept_state("q3")
        .with_class_transition("q0", Upper.symbols(), "q1")
        .with_class_transition("q1", Lower.symbols(), "q2")
        .with_class_transition("q1", Digit.symbols(), "q3")
        .with_class_transition("q2", Lower.symbols(), "q2")
        .with_class_transition("q2", Digit.symbols(), "q3")
        .with_class_transition("q3", Digit.symbols(), "q3")
        .build()
}
