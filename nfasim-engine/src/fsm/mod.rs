pub use self::{
    nfa::{
        error::{BuildError, BuildResult},
        model::{Configuration, ConfigurationDisplay, Nfa, NfaBuilder},
        sim::NfaSimulator,
        trace::Trace,
    },
    traits::{NDSimulate, Simulatable, Simulate},
};

/// Dense index of a state inside an [`Nfa`]. State names are interned to these
/// when the automaton is built.
pub type StateId = usize;

mod nfa;
mod traits;
