use super::{
    super::StateId,
    error::{BuildError, BuildResult},
};
use std::{
    collections::{BTreeSet, HashMap},
    fmt,
};

/// Set of all states the NFA can simultaneously be in after consuming a prefix
/// of the input. The empty configuration is dead: no symbol leads out of it.
pub type Configuration = BTreeSet<StateId>;

/// NFA finite-state machine.
///
/// An [`Nfa`] can only be created through the [`NfaBuilder`], which checks that
/// every state referenced by the start state, the accept states and the
/// transitions was declared. The automaton is never mutated afterwards, so it
/// can be shared freely between threads.
#[derive(Debug, Clone)]
pub struct Nfa {
    pub(super) start_state: StateId,
    pub(super) states: Vec<State>,
    pub(super) alphabet: BTreeSet<char>,
}

/// A state in the NFA.
#[derive(Debug, Clone)]
pub(super) struct State {
    /// Id of the state used by other states as a pointer. Equal to the index of
    /// the state in [`Nfa::states`].
    pub(super) id: StateId,
    /// Name the state was declared with.
    pub(super) name: String,
    /// Whether the state is final.
    pub(super) fin: bool,
    /// Transitions to other states, keyed by the consumed symbol.
    pub(super) transitions: Transitions,
}

type Transitions = HashMap<char, BTreeSet<StateId>>;

impl Nfa {
    /// Creates a builder which is used to construct an NFA.
    pub fn builder() -> NfaBuilder {
        NfaBuilder::new()
    }

    pub fn start_state(&self) -> StateId {
        self.start_state
    }

    /// Returns the configuration every simulation starts in: only the start
    /// state.
    pub fn initial_configuration(&self) -> Configuration {
        Configuration::from([self.start_state])
    }

    /// Symbols the automaton is defined over.
    pub fn alphabet(&self) -> &BTreeSet<char> {
        &self.alphabet
    }

    /// Returns an iterator over the id and name of every state, in declaration
    /// order.
    pub fn states(&self) -> impl Iterator<Item = (StateId, &str)> + '_ {
        self.states.iter().map(|State { id, name, .. }| (*id, name.as_str()))
    }

    /// Looks up the [`StateId`] of the state declared as `name`.
    pub fn state_id(&self, name: &str) -> Option<StateId> {
        self.states
            .iter()
            .find(|state| state.name == name)
            .map(|State { id, .. }| *id)
    }

    pub fn state_name(&self, state_id: StateId) -> Option<&str> {
        self.get_state(state_id).map(|State { name, .. }| name.as_str())
    }

    /// Returns an iterator over the ids of all final states.
    pub fn accept_states(&self) -> impl Iterator<Item = StateId> + '_ {
        self.states
            .iter()
            .filter_map(|State { fin, id, .. }| if *fin { Some(*id) } else { None })
    }

    pub fn is_accept_state(&self, state_id: StateId) -> bool {
        self.get_state(state_id).is_some_and(|State { fin, .. }| *fin)
    }

    /// Consumes `symbol` from every state in `current` and returns the union of
    /// all destinations.
    ///
    /// A state without a transition on `symbol` contributes nothing. Ids that
    /// do not belong to this NFA are treated the same way.
    pub fn step(&self, current: &Configuration, symbol: char) -> Configuration {
        current
            .iter()
            .filter_map(|state_id| self.get_state(*state_id))
            .filter_map(|State { transitions, .. }| transitions.get(&symbol))
            .flatten()
            .copied()
            .collect()
    }

    /// Whether `configuration` contains at least one final state.
    pub fn is_accepting(&self, configuration: &Configuration) -> bool {
        configuration
            .iter()
            .any(|state_id| self.is_accept_state(*state_id))
    }

    /// Wraps `configuration` so it is displayed using the state names, e.g.
    /// `{q1, q2}`.
    pub fn display_configuration<'a>(
        &'a self,
        configuration: &'a Configuration,
    ) -> ConfigurationDisplay<'a> {
        ConfigurationDisplay {
            nfa: self,
            configuration,
        }
    }

    /// Returns a read-only reference to the `State`, if it exists.
    pub(super) fn get_state(&self, state_id: StateId) -> Option<&State> {
        self.states.get(state_id)
    }
}

/// [`Display`](fmt::Display) adapter returned by
/// [`Nfa::display_configuration`].
pub struct ConfigurationDisplay<'a> {
    nfa: &'a Nfa,
    configuration: &'a Configuration,
}

impl fmt::Display for ConfigurationDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;

        for (i, state_id) in self.configuration.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }

            match self.nfa.state_name(*state_id) {
                Some(name) => write!(f, "{}", name)?,
                None => write!(f, "#{}", state_id)?,
            }
        }

        write!(f, "}}")
    }
}

impl State {
    /// Creates a new non-final [`State`] without transitions.
    fn with_name(id: StateId, name: String) -> Self {
        Self {
            id,
            name,
            fin: false,
            transitions: Transitions::new(),
        }
    }
}

/// Builder struct for the [`Nfa`].
///
/// States are referred to by name while building. Nothing is checked until
/// [`build`](Self::build) is called.
#[derive(Debug, Default, Clone)]
pub struct NfaBuilder {
    states: Vec<String>,
    alphabet: BTreeSet<char>,
    start_state: Option<String>,
    accept_states: Vec<String>,
    transitions: Vec<(String, char, String)>,
}

impl NfaBuilder {
    /// Creates a new empty [`NfaBuilder`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a new state.
    pub fn with_state(mut self, name: impl Into<String>) -> Self {
        self.add_state(name);
        self
    }

    /// Declares several states at once.
    pub fn with_states<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.states.extend(names.into_iter().map(Into::into));
        self
    }

    /// Adds `symbols` to the alphabet.
    pub fn with_alphabet(mut self, symbols: impl IntoIterator<Item = char>) -> Self {
        self.alphabet.extend(symbols);
        self
    }

    /// Sets the start state. Calling this again replaces the previous one.
    pub fn with_start_state(mut self, name: impl Into<String>) -> Self {
        self.start_state = Some(name.into());
        self
    }

    pub fn with_accept_state(mut self, name: impl Into<String>) -> Self {
        self.accept_states.push(name.into());
        self
    }

    pub fn with_accept_states<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.accept_states.extend(names.into_iter().map(Into::into));
        self
    }

    /// Creates a transition between two states on `symbol`.
    pub fn with_transition(
        mut self,
        from: impl Into<String>,
        symbol: char,
        to: impl Into<String>,
    ) -> Self {
        self.add_transition(from, symbol, to);
        self
    }

    /// Creates one transition from `from` to `to` for every symbol in
    /// `symbols`.
    pub fn with_class_transition(
        mut self,
        from: impl Into<String>,
        symbols: impl IntoIterator<Item = char>,
        to: impl Into<String>,
    ) -> Self {
        let (from, to) = (from.into(), to.into());

        for symbol in symbols {
            self.add_transition(from.clone(), symbol, to.clone());
        }

        self
    }

    /// Declares a new state.
    pub fn add_state(&mut self, name: impl Into<String>) {
        self.states.push(name.into());
    }

    /// Creates a transition between two states on `symbol`. Adding the same
    /// transition twice has no further effect.
    pub fn add_transition(&mut self, from: impl Into<String>, symbol: char, to: impl Into<String>) {
        self.transitions.push((from.into(), symbol, to.into()));
    }

    /// Builds the [`Nfa`].
    ///
    /// # Fails
    ///
    /// When a state name is declared twice, when no start state is set, or
    /// when the start state, an accept state or either end of a transition is
    /// not a declared state. A transition on a symbol outside the alphabet is
    /// rejected too.
    pub fn build(self) -> BuildResult<Nfa> {
        let mut ids = HashMap::with_capacity(self.states.len());

        for (id, name) in self.states.iter().enumerate() {
            if ids.insert(name.as_str(), id).is_some() {
                return Err(BuildError::DuplicateState(name.clone()));
            }
        }

        let start_name = self
            .start_state
            .as_deref()
            .ok_or(BuildError::MissingStartState)?;
        let start_state = *ids
            .get(start_name)
            .ok_or_else(|| BuildError::UnknownStartState(start_name.to_string()))?;

        let mut states = self
            .states
            .iter()
            .enumerate()
            .map(|(id, name)| State::with_name(id, name.clone()))
            .collect::<Vec<_>>();

        for name in self.accept_states.iter() {
            let id = *ids
                .get(name.as_str())
                .ok_or_else(|| BuildError::UnknownAcceptState(name.clone()))?;
            states[id].fin = true;
        }

        for (from, symbol, to) in self.transitions.iter() {
            let lookup = |name: &String| {
                ids.get(name.as_str())
                    .copied()
                    .ok_or_else(|| BuildError::UnknownTransitionState {
                        from: from.clone(),
                        symbol: *symbol,
                        to: to.clone(),
                        name: name.clone(),
                    })
            };
            let (start, end) = (lookup(from)?, lookup(to)?);

            if !self.alphabet.contains(symbol) {
                return Err(BuildError::SymbolNotInAlphabet {
                    from: from.clone(),
                    symbol: *symbol,
                });
            }

            states[start]
                .transitions
                .entry(*symbol)
                .or_default()
                .insert(end);
        }

        Ok(Nfa {
            start_state,
            states,
            alphabet: self.alphabet,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{BuildError, Configuration, Nfa};

    /// `p` forks on `a` into `q` and `r`; only `r` is final.
    fn forking() -> Nfa {
        Nfa::builder()
            .with_states(["p", "q", "r"])
            .with_alphabet(['a', 'b'])
            .with_start_state("p")
            .with_accept_state("r")
            .with_transition("p", 'a', "q")
            .with_transition("p", 'a', "r")
            .with_transition("q", 'b', "q")
            .build()
            .unwrap()
    }

    #[test]
    fn step_unions_all_destinations() {
        let nfa = forking();
        let (p, q, r) = (
            nfa.state_id("p").unwrap(),
            nfa.state_id("q").unwrap(),
            nfa.state_id("r").unwrap(),
        );

        assert_eq!(
            nfa.step(&Configuration::from([p]), 'a'),
            Configuration::from([q, r])
        );
        assert_eq!(
            nfa.step(&Configuration::from([q, r]), 'b'),
            Configuration::from([q])
        );
    }

    #[test]
    fn step_without_transition_is_dead() {
        let nfa = forking();

        assert!(nfa.step(&nfa.initial_configuration(), 'b').is_empty());
        assert!(nfa.step(&Configuration::new(), 'a').is_empty());
        // unknown ids contribute nothing
        assert!(nfa.step(&Configuration::from([42]), 'a').is_empty());
    }

    #[test]
    fn accepting_configuration() {
        let nfa = forking();
        let r = nfa.state_id("r").unwrap();

        assert!(!nfa.is_accepting(&nfa.initial_configuration()));
        assert!(nfa.is_accepting(&Configuration::from([nfa.start_state(), r])));
        assert!(!nfa.is_accepting(&Configuration::new()));
        assert_eq!(nfa.accept_states().collect::<Vec<_>>(), vec![r]);
    }

    #[test]
    fn introspection() {
        let nfa = forking();

        assert_eq!(
            nfa.states().map(|(_, name)| name).collect::<Vec<_>>(),
            vec!["p", "q", "r"]
        );
        assert_eq!(nfa.state_name(nfa.start_state()), Some("p"));
        assert_eq!(nfa.state_name(7), None);
        assert_eq!(nfa.state_id("z"), None);
        assert!(nfa.alphabet().contains(&'b'));
    }

    #[test]
    fn display_configuration() {
        let nfa = forking();
        let configuration = nfa.step(&nfa.initial_configuration(), 'a');

        assert_eq!(
            nfa.display_configuration(&configuration).to_string(),
            "{q, r}"
        );
        assert_eq!(
            nfa.display_configuration(&Configuration::new()).to_string(),
            "{}"
        );
    }

    #[test]
    fn class_transition_registers_every_symbol() {
        let nfa = Nfa::builder()
            .with_states(["s", "t"])
            .with_alphabet('0'..='9')
            .with_start_state("s")
            .with_accept_state("t")
            .with_class_transition("s", '0'..='9', "t")
            .build()
            .unwrap();

        for digit in '0'..='9' {
            assert!(nfa.is_accepting(&nfa.step(&nfa.initial_configuration(), digit)));
        }
    }

    #[test]
    fn build_errors() {
        let base = || Nfa::builder().with_states(["p", "q"]).with_alphabet(['a']);

        assert_eq!(base().build().unwrap_err(), BuildError::MissingStartState);
        assert_eq!(
            base().with_start_state("x").build().unwrap_err(),
            BuildError::UnknownStartState("x".into())
        );
        assert_eq!(
            base()
                .with_start_state("p")
                .with_accept_state("y")
                .build()
                .unwrap_err(),
            BuildError::UnknownAcceptState("y".into())
        );
        assert_eq!(
            base()
                .with_start_state("p")
                .with_transition("p", 'a', "z")
                .build()
                .unwrap_err(),
            BuildError::UnknownTransitionState {
                from: "p".into(),
                symbol: 'a',
                to: "z".into(),
                name: "z".into(),
            }
        );
        assert_eq!(
            base()
                .with_start_state("p")
                .with_transition("w", 'a', "q")
                .build()
                .unwrap_err(),
            BuildError::UnknownTransitionState {
                from: "w".into(),
                symbol: 'a',
                to: "q".into(),
                name: "w".into(),
            }
        );
        assert_eq!(
            base()
                .with_start_state("p")
                .with_transition("p", 'b', "q")
                .build()
                .unwrap_err(),
            BuildError::SymbolNotInAlphabet {
                from: "p".into(),
                symbol: 'b',
            }
        );
        assert_eq!(
            base().with_state("p").with_start_state("p").build().unwrap_err(),
            BuildError::DuplicateState("p".into())
        );
    }

    #[test]
    fn nfa_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Nfa>();
    }
}
