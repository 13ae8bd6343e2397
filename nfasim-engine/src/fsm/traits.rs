use super::{Configuration, StateId};

/// Finite-state machine which can be turned into a simulator.
pub trait Simulatable {
    type Simulator<'a>: Simulate
    where
        Self: 'a;

    /// Creates a simulator positioned at the start of the input.
    fn to_simulator(&self) -> Self::Simulator<'_>;
}

/// Incremental simulation of a finite-state machine.
pub trait Simulate {
    /// Returns whether the finite-state machine accepts in its current
    /// configuration.
    fn is_accepting(&self) -> bool;

    /// Returns whether no further input can ever lead to acceptance.
    fn is_dead(&self) -> bool;

    /// Whether `input` belongs to the alphabet of the finite-state machine.
    fn can_feed(&self, input: char) -> bool;

    /// Feeds a single character to the finite-state machine and returns whether
    /// it has reached an accepting state.
    fn feed(&mut self, input: char) -> bool;

    /// Simulates the finite-state machine from start to finish and returns
    /// whether it accepts the input.
    ///
    /// Characters outside the alphabet reject the input before anything is
    /// fed. The simulation stops at the first dead configuration.
    fn run(mut self, input: &str) -> bool
    where
        Self: Sized,
    {
        if !input.chars().all(|ch| self.can_feed(ch)) {
            return false;
        }

        for ch in input.chars() {
            self.feed(ch);

            if self.is_dead() {
                return false;
            }
        }

        self.is_accepting()
    }
}

/// Simulation of a nondeterministic finite-state machine, which can be in
/// several states at once.
pub trait NDSimulate: Simulate {
    /// Returns all states the simulator is currently in.
    fn get_current_states(&self) -> &Configuration;

    /// Returns the final states among the current states.
    fn get_current_final_states(&self) -> Configuration;

    /// Whether the simulator is currently in `state_id`.
    fn is_in(&self, state_id: StateId) -> bool {
        self.get_current_states().contains(&state_id)
    }
}
