/*!
Unit propagation.

# Overview

A unit clause forces the value of its literal.
Propagation repeatedly:
1. Takes the first unit clause, in clause order, and the literal *l* of the clause.
2. Fails with a conflict, if -*l* is already true.
3. Otherwise, assigns *l* true (and so -*l* false) and simplifies the clauses against the revised assignment.

Propagation ends when no unit clause remains, with the simplified clauses, or when a conflict is found.
As simplification removes false literals, a clause falsified by some assignment becomes the empty clause, and this is also a conflict (of the literal whose assignment falsified the clause).

An empty collection of clauses is a fixpoint, and propagation on the empty collection is trivially successful.

# Example

```rust
# use trio_sat::context::Counters;
# use trio_sat::generic::interrupt::Interrupt;
# use trio_sat::procedures::propagation::propagate;
# use trio_sat::structures::assignment::Assignment;
# use trio_sat::types::err::PropagationError;
let mut assignment = Assignment::default();
let mut counters = Counters::default();
let interrupt = Interrupt::default();

let clauses = vec![vec![1], vec![-1, 2]];
let remaining = propagate(clauses, &mut assignment, &interrupt, &mut counters);
assert_eq!(remaining, Ok(vec![]));
assert!(assignment.is_true(1) && assignment.is_true(2));

let mut assignment = Assignment::default();
let conflict = propagate(vec![vec![1], vec![-1]], &mut assignment, &interrupt, &mut counters);
assert_eq!(conflict, Err(PropagationError::Conflict(1)));
```
*/

use crate::{
    context::Counters,
    generic::interrupt::Interrupt,
    misc::log::targets::{self},
    procedures::simplify::simplify,
    structures::{
        assignment::{Assignment, ValuationStatus},
        clause::{CClause, Clause},
        literal::Literal,
    },
    types::err::{self},
};

/// Propagates unit clauses to a fixpoint, returning the simplified clauses.
///
/// Assignments made by propagation remain on the assignment, whether or not propagation is successful.
pub fn propagate(
    mut clauses: Vec<CClause>,
    assignment: &mut Assignment,
    interrupt: &Interrupt,
    counters: &mut Counters,
) -> Result<Vec<CClause>, err::PropagationError> {
    if clauses.iter().any(|clause| clause.is_empty()) {
        log::trace!(target: targets::PROPAGATION, "Empty clause prior to propagation.");
        return Err(err::PropagationError::EmptyClause);
    }

    while let Some(literal) = clauses.iter().find_map(|clause| clause.unit()) {
        if interrupt.is_raised() {
            return Err(err::PropagationError::Interrupted);
        }

        match assignment.check_assignment(literal) {
            ValuationStatus::Conflict => {
                log::trace!(target: targets::PROPAGATION, "Unit {literal} conflicts with {}.", literal.negate());
                return Err(err::PropagationError::Conflict(literal));
            }

            ValuationStatus::Set => {}

            ValuationStatus::None => {
                log::trace!(target: targets::PROPAGATION, "Unit {literal}.");
                assignment.record_assignment(literal);
                counters.propagations += 1;
            }
        }

        clauses = simplify(&clauses, assignment);

        if clauses.iter().any(|clause| clause.is_empty()) {
            log::trace!(target: targets::PROPAGATION, "Unit {literal} falsifies some clause.");
            return Err(err::PropagationError::Conflict(literal));
        }
    }

    Ok(clauses)
}
