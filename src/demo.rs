use crate::{
    password::{ACCEPTED_SAMPLES, REJECTED_SAMPLES},
    verdict::Verdict,
};
use nfasim_engine::Nfa;
use std::io::{self, Write};

/// Evaluation of one sample string against its expected verdict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleResult {
    pub input: &'static str,
    pub expected: Verdict,
    pub actual: Verdict,
}

impl SampleResult {
    pub fn is_mismatch(&self) -> bool {
        self.expected != self.actual
    }
}

/// Results of running every sample string.
#[derive(Debug, Clone, Default)]
pub struct DemoReport {
    pub results: Vec<SampleResult>,
}

/// Evaluates the accepted and rejected samples against `nfa`, without
/// tracing.
pub fn run_samples(nfa: &Nfa) -> DemoReport {
    let expected = ACCEPTED_SAMPLES
        .iter()
        .map(|input| (*input, Verdict::Accepted))
        .chain(REJECTED_SAMPLES.iter().map(|input| (*input, Verdict::Rejected)));

    DemoReport {
        results: expected
            .map(|(input, expected)| SampleResult {
                input,
                expected,
                actual: nfa.accepts(input, false).into(),
            })
            .collect(),
    }
}

impl DemoReport {
    pub fn mismatches(&self) -> impl Iterator<Item = &SampleResult> + '_ {
        self.results.iter().filter(|r| r.is_mismatch())
    }

    /// Whether every sample got its expected verdict.
    pub fn passed(&self) -> bool {
        self.mismatches().next().is_none()
    }

    /// Writes the verdict table, grouped by expected verdict.
    pub fn write_to(&self, out: &mut impl Write, color: bool) -> io::Result<()> {
        writeln!(out, "-- Sample strings --")?;

        for (expected, title) in [
            (Verdict::Accepted, "Accepted (expected: accepted):"),
            (Verdict::Rejected, "Rejected (expected: rejected):"),
        ] {
            writeln!(out)?;
            writeln!(out, "{}", title)?;

            for result in self.results.iter().filter(|r| r.expected == expected) {
                write!(out, "  {:15} -> {}", result.input, result.actual.paint(color))?;

                if result.is_mismatch() {
                    write!(out, "  (expected {})", result.expected)?;
                }

                writeln!(out)?;
            }
        }

        Ok(())
    }
}
