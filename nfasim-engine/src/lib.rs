pub use fsm::{
    BuildError, BuildResult, Configuration, ConfigurationDisplay, NDSimulate, Nfa, NfaBuilder,
    NfaSimulator, Simulatable, Simulate, StateId, Trace,
};

mod fsm;
