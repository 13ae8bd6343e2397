//! Line oriented prompt evaluating one string per line.

use crate::verdict::Verdict;
use nfasim_engine::{Nfa, Trace};
use std::io::{self, BufRead, Write};

/// Shell configuration.
#[derive(Debug, Clone)]
pub struct ShellConfig {
    /// Prompt string
    pub prompt: String,
    /// Lines that end the session, compared case-insensitively
    pub exit_keywords: Vec<String>,
    /// Write the simulation trace of every evaluated string
    pub trace: bool,
    /// Color the verdicts
    pub color: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: "string> ".to_string(),
            exit_keywords: vec!["salir".to_string(), "exit".to_string()],
            trace: true,
            color: true,
        }
    }
}

/// What a single input line asks the shell to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    /// Evaluate the (trimmed) string.
    Evaluate(&'a str),
    /// End the session.
    Quit,
}

impl ShellConfig {
    /// Interprets one input line. Empty lines and exit keywords quit.
    pub fn parse_line<'a>(&self, line: &'a str) -> Command<'a> {
        let line = line.trim();
        let lowered = line.to_lowercase();

        if line.is_empty()
            || self
                .exit_keywords
                .iter()
                .any(|keyword| keyword.to_lowercase() == lowered)
        {
            Command::Quit
        } else {
            Command::Evaluate(line)
        }
    }
}

/// Read-evaluate-print loop over an [`Nfa`].
pub struct Shell<'a> {
    nfa: &'a Nfa,
    config: ShellConfig,
}

impl<'a> Shell<'a> {
    pub fn new(nfa: &'a Nfa, config: ShellConfig) -> Self {
        Self { nfa, config }
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    /// Evaluates one string, tracing to `diagnostics` when enabled.
    pub fn evaluate(&self, input: &str, diagnostics: &mut dyn Write) -> Verdict {
        let mut trace = if self.config.trace {
            Trace::new(diagnostics)
        } else {
            Trace::disabled()
        };

        self.nfa.accepts_with(input, &mut trace).into()
    }

    /// Reads lines from `input` until a quit command or end of input. Verdicts
    /// go to `out`, traces to `diagnostics`.
    ///
    /// Returns the number of evaluated strings.
    pub fn run<R, W, D>(&self, mut input: R, out: &mut W, diagnostics: &mut D) -> io::Result<usize>
    where
        R: BufRead,
        W: Write,
        D: Write,
    {
        let mut evaluated = 0;
        let mut line = String::new();

        loop {
            write!(out, "{}", self.config.prompt)?;
            out.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                // end of input
                writeln!(out)?;
                break;
            }

            match self.config.parse_line(&line) {
                Command::Quit => {
                    writeln!(out, "Program finished by the user.")?;
                    break;
                }
                Command::Evaluate(candidate) => {
                    let verdict = self.evaluate(candidate, diagnostics);
                    // trace output is best-effort
                    let _ = diagnostics.flush();

                    writeln!(out, "-> {}", verdict.paint(self.config.color))?;
                    writeln!(out, "{}", "-".repeat(30))?;
                    evaluated += 1;
                }
            }
        }

        Ok(evaluated)
    }
}
