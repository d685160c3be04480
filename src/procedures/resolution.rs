/*!
Saturation of a formula under the resolution rule.

# Resolution

Given a clause containing some literal *l* and a clause containing -*l*, the resolvent of the clauses on *l* is the union of the clauses without *l* and -*l*.

```none
  p ∨ q ∨ l      -l ∨ r
  ─────────────────────
        p ∨ q ∨ r
```

Resolution is refutation complete for propositional formulas: a formula is unsatisfiable if and only if the empty clause is derivable from the formula by resolution.

# Saturation

[saturate] keeps a set of processed clauses, initially the (canonical) clauses of the formula.
Each round:
1. Every resolvent of every (unordered) pair of distinct processed clauses is derived.
2. Tautologous resolvents are discarded.
3. If some resolvent is the empty clause, the formula is unsatisfiable.
4. Each resolvent not already processed is collected.
5. If nothing was collected, the processed clauses are closed under resolution without containing the empty clause, and so the formula is satisfiable.
6. Otherwise, the collected clauses are added to the processed clauses, and another round begins.

As the set of non-tautologous clauses over the atoms of a formula is finite, saturation terminates.
Though, the set is exponential in the number of atoms, and each round is quadratic in the number of processed clauses.

```rust
# use trio_sat::context::Counters;
# use trio_sat::generic::interrupt::Interrupt;
# use trio_sat::procedures::resolution::{resolve, saturate};
assert_eq!(resolve(&vec![1], &vec![-1]), vec![Vec::<i32>::new()]);
assert_eq!(resolve(&vec![1, 2], &vec![-1, -2]), Vec::<Vec<i32>>::new());

let classic = vec![vec![1, 2], vec![-1, 2], vec![1, -2], vec![-1, -2]];
let mut counters = Counters::default();
assert_eq!(saturate(&classic, &Interrupt::default(), 64, &mut counters), Ok(false));
```

# Interrupts

The interrupt is checked at the start of each round and after each `check_interval` pairs of clauses within a round.
*/

use std::collections::BTreeSet;

use crate::{
    context::Counters,
    generic::interrupt::Interrupt,
    misc::log::targets::{self},
    structures::{
        clause::{CClause, Clause},
        literal::{IntLiteral, Literal},
    },
    types::err::{self},
};

/// The resolvent of two clauses on the given literal, in canonical form.
///
/// The literal is expected to be in the first clause and its negation in the second clause.
pub fn resolvent(first: &CClause, second: &CClause, literal: IntLiteral) -> CClause {
    let negation = literal.negate();
    first
        .iter()
        .filter(|l| **l != literal)
        .chain(second.iter().filter(|l| **l != negation))
        .copied()
        .collect::<CClause>()
        .canonical()
}

/// Every non-tautologous resolvent of two clauses, one for each literal of the first clause whose negation is in the second clause.
pub fn resolve(first: &CClause, second: &CClause) -> Vec<CClause> {
    first
        .iter()
        .filter(|literal| second.contains(&literal.negate()))
        .map(|literal| resolvent(first, second, *literal))
        .filter(|clause| !clause.is_tautology())
        .collect()
}

/// Saturates the clauses under resolution.
///
/// Returns true if the clauses are satisfiable, and false if the clauses are unsatisfiable.
pub fn saturate(
    clauses: &[CClause],
    interrupt: &Interrupt,
    check_interval: usize,
    counters: &mut Counters,
) -> Result<bool, err::SolveError> {
    let mut processed: BTreeSet<CClause> = clauses
        .iter()
        .map(|clause| clause.clone().canonical())
        .collect();

    if processed.contains(&CClause::default()) {
        log::info!(target: targets::RESOLUTION, "The formula contains the empty clause.");
        return Ok(false);
    }

    let check_interval = check_interval.max(1);
    let mut pair_count: usize = 0;

    loop {
        interrupt.check()?;
        counters.rounds += 1;

        let mut fresh: BTreeSet<CClause> = BTreeSet::new();

        {
            let snapshot: Vec<&CClause> = processed.iter().collect();

            for (index, first) in snapshot.iter().enumerate() {
                for second in &snapshot[index + 1..] {
                    pair_count += 1;
                    if pair_count % check_interval == 0 {
                        interrupt.check()?;
                    }

                    for clause in resolve(first, second) {
                        if clause.is_empty() {
                            log::info!(target: targets::RESOLUTION, "Empty clause from {} and {} in round {}.", first.as_string(), second.as_string(), counters.rounds);
                            return Ok(false);
                        }

                        if !processed.contains(&clause) {
                            fresh.insert(clause);
                        }
                    }
                }
            }
        }

        log::debug!(target: targets::RESOLUTION, "Round {}: {} processed, {} new.", counters.rounds, processed.len(), fresh.len());

        if fresh.is_empty() {
            log::info!(target: targets::RESOLUTION, "Saturated after {} rounds with {} clauses.", counters.rounds, processed.len());
            return Ok(true);
        }

        counters.resolvents += fresh.len();
        processed.extend(fresh);
    }
}
