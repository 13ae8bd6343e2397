use super::{
    super::{
        traits::{NDSimulate, Simulatable, Simulate},
        StateId,
    },
    model::{Configuration, Nfa},
    trace::Trace,
};
use std::io;

/// Simulator keeping track of every branch of the NFA at once.
pub struct NfaSimulator<'a> {
    /// Nfa we are simulating.
    nfa: &'a Nfa,
    /// States the simulator is currently in.
    current: Configuration,
}

impl<'a> NfaSimulator<'a> {
    fn new(nfa: &'a Nfa) -> Self {
        Self {
            nfa,
            current: nfa.initial_configuration(),
        }
    }
}

impl Simulatable for Nfa {
    type Simulator<'a> = NfaSimulator<'a>;

    fn to_simulator(&self) -> Self::Simulator<'_> {
        NfaSimulator::new(self)
    }
}

impl Simulate for NfaSimulator<'_> {
    fn is_accepting(&self) -> bool {
        self.nfa.is_accepting(&self.current)
    }

    fn is_dead(&self) -> bool {
        self.current.is_empty()
    }

    fn can_feed(&self, input: char) -> bool {
        self.nfa.alphabet.contains(&input)
    }

    fn feed(&mut self, input: char) -> bool {
        self.current = self.nfa.step(&self.current, input);
        self.is_accepting()
    }
}

impl NDSimulate for NfaSimulator<'_> {
    fn get_current_states(&self) -> &Configuration {
        &self.current
    }

    fn get_current_final_states(&self) -> Configuration {
        self.current
            .iter()
            .copied()
            .filter(|state_id: &StateId| self.nfa.is_accept_state(*state_id))
            .collect()
    }
}

impl Nfa {
    /// Whether the NFA accepts `input`.
    ///
    /// When `trace` is set, every step of the simulation is written to stderr.
    /// Tracing never changes the result.
    pub fn accepts(&self, input: &str, trace: bool) -> bool {
        if trace {
            let stderr = io::stderr();
            let mut out = stderr.lock();
            self.accepts_with(input, &mut Trace::new(&mut out))
        } else {
            self.accepts_with(input, &mut Trace::disabled())
        }
    }

    /// Whether the NFA accepts `input`, reporting each step to `trace`.
    ///
    /// A symbol outside the alphabet rejects the input before the simulation
    /// starts. The simulation stops as soon as the configuration is dead.
    pub fn accepts_with(&self, input: &str, trace: &mut Trace<'_>) -> bool {
        let mut sim = self.to_simulator();

        if let Some(invalid) = input.chars().find(|ch| !sim.can_feed(*ch)) {
            trace.line(format_args!("invalid symbol detected: {:?}", invalid));
            return false;
        }

        trace.line(format_args!("input: {:?}", input));
        trace.line(format_args!(
            "initial states: {}",
            self.display_configuration(sim.get_current_states())
        ));

        for ch in input.chars() {
            sim.feed(ch);
            trace.line(format_args!(
                "  after consuming {:?} -> {}",
                ch,
                self.display_configuration(sim.get_current_states())
            ));

            if sim.is_dead() {
                trace.line(format_args!("no transitions possible, string rejected"));
                return false;
            }
        }

        let accepted = sim.is_accepting();
        trace.line(format_args!(
            "final states after consuming the whole string: {}",
            self.display_configuration(sim.get_current_states())
        ));
        trace.line(format_args!("accepted? {}", accepted));

        accepted
    }
}
