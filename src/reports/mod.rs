/*!
Reports for the context.

A solve ends in one of three reports, and a solve which has not reached a verdict is never reported as unsatisfiable.

```rust
# use trio_sat::reports::{Inconclusive, Report};
assert_eq!(Report::Satisfiable.to_string(), "SATISFIABLE");
assert_eq!(Report::Inconclusive(Inconclusive::Fault).to_string(), "TIMEOUT");
assert!(Report::Inconclusive(Inconclusive::Timeout).is_inconclusive());
```
*/

/// High-level reports regarding a solve.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Report {
    /// The formula of the context is satisfiable.
    Satisfiable,

    /// The formula of the context is unsatisfiable.
    Unsatisfiable,

    /// Satisfiability of the formula of the context is unknown.
    Inconclusive(Inconclusive),
}

/// The reason a solve was inconclusive.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Inconclusive {
    /// The solve did not finish within the time limit.
    Timeout,

    /// The solve failed, e.g. by a panic on the thread of the solve.
    Fault,
}

impl Report {
    /// The label of the report, as used in output.
    ///
    /// Every inconclusive report shares the `TIMEOUT` label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Satisfiable => "SATISFIABLE",
            Self::Unsatisfiable => "UNSATISFIABLE",
            Self::Inconclusive(_) => "TIMEOUT",
        }
    }

    /// True if the report is inconclusive, false otherwise.
    pub fn is_inconclusive(&self) -> bool {
        matches!(self, Self::Inconclusive(_))
    }
}

impl From<bool> for Report {
    fn from(satisfiable: bool) -> Self {
        match satisfiable {
            true => Self::Satisfiable,
            false => Self::Unsatisfiable,
        }
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::fmt::Display for Inconclusive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Timeout => write!(f, "timeout"),
            Self::Fault => write!(f, "fault"),
        }
    }
}
