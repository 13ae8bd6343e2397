//! Validates password-like strings with a nondeterministic finite automaton.

use anyhow::{Context, Result};
use clap::Parser;
use nfasim::{password_nfa, run_samples, Shell, ShellConfig, Verdict};
use std::io::{self, Write};

#[derive(Parser)]
#[command(name = "nfasim")]
#[command(about = "Validate password-like strings with an NFA", long_about = None)]
struct Cli {
    /// Strings to evaluate. When given, the interactive prompt is skipped.
    inputs: Vec<String>,

    /// Do not print the step by step simulation trace
    #[arg(long)]
    no_trace: bool,

    /// Skip the sample string table
    #[arg(long)]
    no_demo: bool,

    /// Do not start the interactive prompt
    #[arg(long)]
    no_interactive: bool,

    /// Print the automaton in graphviz dot format and exit
    #[arg(long)]
    dot: bool,

    /// Disable colored verdicts
    #[arg(long)]
    no_color: bool,

    /// Prompt shown by the interactive shell
    #[arg(long, default_value = "string> ")]
    prompt: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let nfa = password_nfa().context("Failed to build the password automaton")?;

    if cli.dot {
        println!("{}", nfa.to_dot());
        return Ok(());
    }

    let config = ShellConfig {
        prompt: cli.prompt,
        trace: !cli.no_trace,
        color: !cli.no_color,
        ..ShellConfig::default()
    };
    let stdout = io::stdout();
    let stderr = io::stderr();

    if !cli.no_demo {
        let report = run_samples(&nfa);
        report
            .write_to(&mut stdout.lock(), config.color)
            .context("Failed to write the sample table")?;
        println!();

        if !report.passed() {
            anyhow::bail!(
                "{} sample string(s) got an unexpected verdict",
                report.mismatches().count()
            );
        }
    }

    let shell = Shell::new(&nfa, config);

    if !cli.inputs.is_empty() {
        for input in cli.inputs.iter() {
            let verdict: Verdict = shell.evaluate(input, &mut stderr.lock());
            println!("{:15} -> {}", input, verdict.paint(shell.config().color));
        }

        return Ok(());
    }

    if cli.no_interactive {
        return Ok(());
    }

    println!("Interactive prompt. Enter strings (empty line, 'salir' or 'exit' to finish):");
    shell
        .run(io::stdin().lock(), &mut stdout.lock(), &mut stderr.lock())
        .context("Interactive prompt failed")?;
    stdout.lock().flush()?;

    Ok(())
}
