use colored::Colorize;

/// Outcome of evaluating a single string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Accepted,
    Rejected,
}

impl Verdict {
    /// Renders the verdict, in green or red when `color` is set.
    pub fn paint(self, color: bool) -> String {
        match (self, color) {
            (_, false) => self.to_string(),
            (Verdict::Accepted, true) => self.to_string().green().bold().to_string(),
            (Verdict::Rejected, true) => self.to_string().red().bold().to_string(),
        }
    }
}

impl From<bool> for Verdict {
    fn from(accepted: bool) -> Self {
        if accepted {
            Verdict::Accepted
        } else {
            Verdict::Rejected
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(match self {
            Verdict::Accepted => "ACCEPTED",
            Verdict::Rejected => "REJECTED",
        })
    }
}
