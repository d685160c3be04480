/*!
Backtracking search for a satisfying assignment.

# Overview

The search is the decision procedure shared by the [DP](crate::config::Algorithm::DP) and [DPLL](crate::config::Algorithm::DPLL) algorithms.
At each node of the search, on some clauses and an assignment:

1. [Unit propagation](crate::procedures::propagation) is applied.
   If propagation finds a conflict, the node is unsatisfiable.
2. If no clause remains, the node is satisfiable.
3. If enabled, [pure literal elimination](crate::procedures::pure) is applied.
   If no clause remains, the node is satisfiable.
4. Otherwise, a case split is made on the first literal of the first remaining clause:
   - The literal is assigned true, the clauses simplified, and the search recurses.
     If the recursion is satisfiable, so is the node.
   - Otherwise, the literal is assigned false, the clauses simplified, and the search recurses.
     The node is satisfiable if and only if the recursion is.

```none
            propagate ──conflict──> unsatisfiable
                │
                ⌄
          no clauses? ──yes──> satisfiable
                │
                ⌄
         eliminate pure ──no clauses──> satisfiable
                │
                ⌄
  split on the first literal of the first clause
          ╱                           ╲
   literal true                   literal false
```

# Determinism

Clauses are kept in the order of the formula, and literals in the order of first occurrence.
Propagation takes the first unit clause, and a split is made on the first literal of the first clause.
So, the sequence of assignments made by a search is fixed by the formula.

# Assignments

A single [Assignment] is shared by the whole search.
Before a node returns unsatisfiable, every assignment made by the node is undone by [backtracking](Assignment::backtrack), so the sibling of a branch begins from the same assignment as the branch.
On a satisfiable node nothing is undone, and the assignment is a model of the formula (with any unassigned atom free).

# Interrupts

The interrupt is checked at each node and each round of propagation, and an interrupted search returns an error.
*/

use crate::{
    context::Counters,
    generic::interrupt::Interrupt,
    misc::log::targets::{self},
    procedures::{propagation::propagate, pure::eliminate_pure, simplify::simplify},
    structures::{
        assignment::Assignment,
        clause::CClause,
        formula::Formula,
        literal::{IntLiteral, Literal},
    },
    types::err::{self},
};

/// Configuration of a search.
#[derive(Clone, Copy, Debug)]
pub struct SearchConfig {
    /// Eliminate pure literals at each node.
    pub pure_literals: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            pure_literals: true,
        }
    }
}

/// Searches for an assignment satisfying the formula.
///
/// Returns the satisfiability of the formula, together with the assignment at the end of the search.
/// If the formula is satisfiable, the assignment satisfies the formula.
pub fn search_formula(
    formula: &Formula,
    config: SearchConfig,
    interrupt: &Interrupt,
    counters: &mut Counters,
) -> Result<(bool, Assignment), err::SolveError> {
    let mut assignment = Assignment::default();
    let satisfiable = search(
        formula.clauses().to_vec(),
        &mut assignment,
        config,
        interrupt,
        counters,
    )?;

    log::info!(target: targets::SEARCH, "Search complete: satisfiable: {satisfiable}, decisions: {}, propagations: {}, pure literals: {}, conflicts: {}", counters.decisions, counters.propagations, counters.pure_literals, counters.conflicts);
    Ok((satisfiable, assignment))
}

/// The literal a search splits on, if some clause remains.
///
/// This is the first literal of the first clause.
pub fn split_literal(clauses: &[CClause]) -> Option<IntLiteral> {
    clauses.first().and_then(|clause| clause.first()).copied()
}

/// A node of the search, on the given clauses and assignment.
///
/// Returns true if the clauses are satisfiable on some extension of the assignment, with the assignment extended to such an assignment.
/// Otherwise, returns false, with the assignment as given.
pub fn search(
    clauses: Vec<CClause>,
    assignment: &mut Assignment,
    config: SearchConfig,
    interrupt: &Interrupt,
    counters: &mut Counters,
) -> Result<bool, err::SolveError> {
    interrupt.check()?;

    let checkpoint = assignment.checkpoint();

    let clauses = match propagate(clauses, assignment, interrupt, counters) {
        Ok(clauses) => clauses,

        Err(err::PropagationError::Interrupted) => return Err(err::SolveError::Interrupted),

        Err(err::PropagationError::Conflict(_) | err::PropagationError::EmptyClause) => {
            counters.conflicts += 1;
            assignment.backtrack(checkpoint);
            return Ok(false);
        }
    };

    if clauses.is_empty() {
        return Ok(true);
    }

    let clauses = match config.pure_literals {
        true => eliminate_pure(clauses, assignment, counters),
        false => clauses,
    };

    let Some(literal) = split_literal(&clauses) else {
        return Ok(true);
    };

    for branch_literal in [literal, literal.negate()] {
        let branch_checkpoint = assignment.checkpoint();

        log::trace!(target: targets::SEARCH, "Split on {branch_literal} at depth {branch_checkpoint}.");
        assignment.record_assignment(branch_literal);
        counters.decisions += 1;

        let branch_clauses = simplify(&clauses, assignment);
        if search(branch_clauses, assignment, config, interrupt, counters)? {
            return Ok(true);
        }

        assignment.backtrack(branch_checkpoint);
    }

    assignment.backtrack(checkpoint);
    Ok(false)
}
