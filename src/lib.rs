pub use alphabet::{password_alphabet, SymbolClass};
pub use demo::{run_samples, DemoReport, SampleResult};
pub use password::{password_nfa, ACCEPTED_SAMPLES, REJECTED_SAMPLES};
pub use shell::{Command, Shell, ShellConfig};
pub use verdict::Verdict;

pub use nfasim_engine as engine;

mod alphabet;
mod demo;
mod password;
mod shell;
mod verdict;
