/*!
Simplification of a collection of clauses relative to an assignment.

For each clause:
- If some literal of the clause is true, the clause is satisfied and dropped.
- Otherwise, the clause is kept without any literal which is false.

Simplification is pure: the given clauses are unchanged and a fresh collection of clauses is returned, in the same order.
And, as any literal which remains in a simplified clause has no value, simplifying a simplified collection of clauses against the same assignment returns the same collection.

```rust
# use trio_sat::procedures::simplify::simplify;
# use trio_sat::structures::assignment::Assignment;
let clauses = vec![vec![1, 2], vec![-1, 3], vec![-1]];

let mut assignment = Assignment::default();
assignment.record_assignment(1);

let simplified = simplify(&clauses, &assignment);
assert_eq!(simplified, vec![vec![3], vec![]]);
assert_eq!(simplify(&simplified, &assignment), simplified);
```
*/

use crate::structures::{assignment::Assignment, clause::CClause, literal::Literal};

/// The clauses, simplified against the assignment.
pub fn simplify(clauses: &[CClause], assignment: &Assignment) -> Vec<CClause> {
    clauses
        .iter()
        .filter(|clause| !clause.iter().any(|literal| assignment.is_true(*literal)))
        .map(|clause| {
            clause
                .iter()
                .copied()
                .filter(|literal| !assignment.is_true(literal.negate()))
                .collect()
        })
        .collect()
}
