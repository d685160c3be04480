/*!
The context, to which a formula is added and within which a solve takes place.

A context holds:
- A [configuration](crate::config::Config).
- A [formula](crate::structures::formula::Formula), built by adding clauses.
- The [outcome](crate::procedures::bounded::Outcome) of the most recent solve, if any.

# Example
```rust
# use trio_sat::context::Context;
# use trio_sat::config::Config;
# use trio_sat::reports::Report;
let mut the_context = Context::from_config(Config::default());

assert!(the_context.add_clause(vec![1, 2]).is_ok());
assert!(the_context.add_clause(vec![-1]).is_ok());

assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
assert_eq!(the_context.report(), Some(Report::Satisfiable));
assert_eq!(the_context.valuation_string(), Some("-1 2".to_string()));
```
*/

use std::time::Duration;

mod counters;
pub use counters::Counters;

use crate::{
    config::Config,
    procedures::bounded::{run_bounded_with, Outcome},
    reports::Report,
    structures::{
        formula::{ClauseOk, Formula},
        literal::IntLiteral,
    },
    types::err::{self},
};

/// A context, with a formula and configuration.
#[derive(Clone, Debug)]
pub struct Context {
    /// The configuration of the context.
    pub config: Config,

    /// The formula of the context.
    pub formula: Formula,

    /// Counts from the most recent finished solve.
    pub counters: Counters,

    outcome: Option<Outcome>,
}

impl Context {
    /// Creates a context from some given configuration.
    pub fn from_config(config: Config) -> Self {
        Context {
            config,
            formula: Formula::default(),
            counters: Counters::default(),
            outcome: None,
        }
    }

    /// Adds a clause to the formula of the context.
    ///
    /// Any outcome of a previous solve is cleared, as the formula has changed.
    pub fn add_clause(
        &mut self,
        clause: impl AsRef<[IntLiteral]>,
    ) -> Result<ClauseOk, err::ErrorKind> {
        self.outcome = None;
        Ok(self.formula.add_clause(clause.as_ref())?)
    }

    /// Determines the satisfiability of the formula of the context, as configured.
    ///
    /// A solve which times out, or faults, is reported as inconclusive rather than as an error.
    pub fn solve(&mut self) -> Result<Report, err::ErrorKind> {
        let outcome = run_bounded_with(&self.config, &self.formula);
        if let Some(counters) = outcome.counters {
            self.counters = counters;
        }

        let report = outcome.report;
        self.outcome = Some(outcome);
        Ok(report)
    }

    /// The report of the most recent solve, if there has been a solve since the formula was last changed.
    pub fn report(&self) -> Option<Report> {
        self.outcome.as_ref().map(|outcome| outcome.report)
    }

    /// The outcome of the most recent solve.
    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    /// The model found by the most recent solve, if the solve was a satisfiable search.
    pub fn model(&self) -> Option<&[IntLiteral]> {
        self.outcome.as_ref().and_then(|outcome| outcome.model.as_deref())
    }

    /// Wall-clock time of the most recent solve.
    pub fn elapsed(&self) -> Option<Duration> {
        self.outcome.as_ref().map(|outcome| outcome.elapsed)
    }

    /// The model of the most recent solve, as a space separated string of literals.
    pub fn valuation_string(&self) -> Option<String> {
        self.model().map(|model| {
            model
                .iter()
                .map(|literal| literal.to_string())
                .collect::<Vec<_>>()
                .join(" ")
        })
    }
}
