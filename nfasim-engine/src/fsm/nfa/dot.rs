use super::{
    super::StateId,
    model::{Nfa, State},
};
use std::collections::{BTreeMap, BTreeSet};

impl std::fmt::Display for Nfa {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_dot())
    }
}

impl Nfa {
    /// Converts the NFA to dot language using the [grahviz](https://graphviz.org/docs/layouts/dot/)
    /// dot language format.
    ///
    /// Parallel transitions between the same pair of states are merged into a
    /// single edge labelled with the compressed symbol ranges (e.g. `A-Z`).
    pub fn to_dot(&self) -> String {
        let final_dot = format!(
            "node [shape = doublecircle]; {};",
            self.get_final_states()
                .map(|State { name, .. }| format!("\"{}\"", escape(name)))
                .collect::<Vec<String>>()
                .join(" ")
        );

        format!(
            "digraph nfa {{\n\
                \trankdir = LR;\n\
            \n\
                \t// final states\n\
                \t{}\n\
                \tnode [shape = circle];\n\
                \tstart [shape = point];\n\
                \tstart -> \"{}\";\n\
            \n\
                {}\n\
            }}",
            final_dot,
            escape(&self.states[self.start_state].name),
            self.transition_dot()
                .map(|l| format!("\t{}", l))
                .collect::<Vec<String>>()
                .join("\n")
        )
    }

    fn get_final_states(&self) -> impl Iterator<Item = &State> + '_ {
        self.states.iter().filter(|s| s.fin)
    }

    /// Converts the transitions to the dot format and returns an iterator over it.
    fn transition_dot(&self) -> impl Iterator<Item = String> + '_ {
        self.states.iter().flat_map(move |state| {
            state.grouped_transitions().into_iter().map(move |(dest, symbols)| {
                format!(
                    "\"{}\" -> \"{}\" [label = \"{}\"];",
                    escape(&state.name),
                    escape(&self.states[dest].name),
                    symbol_ranges(&symbols)
                )
            })
        })
    }
}

impl State {
    /// Groups the transitions from a `State` by destination.
    fn grouped_transitions(&self) -> BTreeMap<StateId, BTreeSet<char>> {
        self.transitions
            .iter()
            .flat_map(|(symbol, dest_states)| dest_states.iter().map(move |dest| (*dest, *symbol)))
            .fold(BTreeMap::new(), |mut grouped, (dest, symbol)| {
                grouped
                    .entry(dest)
                    .or_insert_with(BTreeSet::new)
                    .insert(symbol);
                grouped
            })
    }
}

/// Compresses runs of consecutive symbols, e.g. `{a, b, c, x}` becomes `a-c,x`.
fn symbol_ranges(symbols: &BTreeSet<char>) -> String {
    let mut ranges: Vec<(char, char)> = Vec::new();

    for &symbol in symbols {
        if let Some((_, end)) = ranges.last_mut() {
            if *end as u32 + 1 == symbol as u32 {
                *end = symbol;
                continue;
            }
        }

        ranges.push((symbol, symbol));
    }

    ranges
        .into_iter()
        .map(|(begin, end)| {
            let (begin, end) = (escape(&begin.to_string()), escape(&end.to_string()));
            if begin == end {
                begin
            } else {
                format!("{}-{}", begin, end)
            }
        })
        .collect::<Vec<_>>()
        .join(",")
}

/// Escapes `"` and `\` so `text` can be placed inside a quoted dot id.
fn escape(text: &str) -> String {
    text.chars().fold(String::with_capacity(text.len()), |mut escaped, ch| {
        if matches!(ch, '"' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
        escaped
    })
}
