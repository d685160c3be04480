//! Determines the satisfiability of a formula by the algorithm of a configuration.
//!
//! # Overview
//!
//! [solve_formula] dispatches to either [search](crate::procedures::search) or [saturation](crate::procedures::resolution), and runs on the calling thread without any time limit.
//! The only bound on a solve is the interrupt, and so [solve_formula] is typically called through the [bounded](crate::procedures::bounded) harness.
//!
//! ```none
//!               +--> DP ---------+
//!               |                +--> search ----+
//!   algorithm --+--> DPLL -------+               +--> solution
//!               |                                |
//!               +--> Resolution ---> saturate ---+
//! ```
//!
//! A model is found only by search, as saturation determines satisfiability without constructing an assignment.
//!
//! ```rust
//! # use trio_sat::config::{Algorithm, Config};
//! # use trio_sat::generic::interrupt::Interrupt;
//! # use trio_sat::procedures::solve::solve_formula;
//! # use trio_sat::structures::formula::Formula;
//! let formula = Formula::from_clauses([vec![1, 2], vec![-1]]).unwrap();
//!
//! let solution = solve_formula(&formula, &Config::default(), &Interrupt::default()).unwrap();
//! assert!(solution.satisfiable);
//! assert_eq!(solution.model, Some(vec![-1, 2]));
//! ```

use crate::{
    config::{Algorithm, Config},
    context::Counters,
    generic::interrupt::Interrupt,
    misc::log::targets::{self},
    procedures::{
        resolution::saturate,
        search::{search_formula, SearchConfig},
    },
    structures::{formula::Formula, literal::IntLiteral},
    types::err::{self},
};

/// The result of a solve which finished.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    /// The satisfiability of the formula.
    pub satisfiable: bool,

    /// On a satisfiable search, the literals assigned true, ordered by atom.
    pub model: Option<Vec<IntLiteral>>,

    /// Counts from the solve.
    pub counters: Counters,
}

/// Determines the satisfiability of the formula by the algorithm of the config.
pub fn solve_formula(
    formula: &Formula,
    config: &Config,
    interrupt: &Interrupt,
) -> Result<Solution, err::SolveError> {
    let mut counters = Counters::default();

    log::info!(target: targets::SEARCH, "{} on {} clauses over {} atoms.", config.algorithm.value, formula.clause_count(), formula.atom_count());

    match config.algorithm.value {
        Algorithm::DP | Algorithm::DPLL => {
            let search_config = SearchConfig {
                pure_literals: config.pure_literals.value,
            };

            let (satisfiable, assignment) =
                search_formula(formula, search_config, interrupt, &mut counters)?;

            let model = match satisfiable {
                true => Some(assignment.model()),
                false => None,
            };

            Ok(Solution {
                satisfiable,
                model,
                counters,
            })
        }

        Algorithm::Resolution => {
            let satisfiable = saturate(
                formula.clauses(),
                interrupt,
                config.resolution_check_interval.value,
                &mut counters,
            )?;

            Ok(Solution {
                satisfiable,
                model: None,
                counters,
            })
        }
    }
}
