/*!
A (partial) assignment of truth values to literals.

An assignment is maintained symmetrically.
Assigning a literal *l* the value true also assigns -*l* the value false, in a single update, and so the value of *l* and -*l* are always the negation of each other.

The symmetry holds by construction, as values are stored per atom:
- *values*\[a\] = true *if and only if* the literal a is true (and -a false).
- *values*\[a\] = false *if and only if* the literal -a is true (and a false).
- a is not a key of *values* *if and only if* neither a nor -a has a value.

Values are kept in a map keyed by atom, so the size of an assignment is proportional to the count of assigned atoms, regardless of how large those atoms are.

Alongside the values, a trail records each literal assigned true, in order of assignment.
A [checkpoint](Assignment::checkpoint) is a position on the trail, and [backtracking](Assignment::backtrack) to a checkpoint clears the value of every literal assigned after the checkpoint.
So, a search may explore one branch, backtrack, and explore a sibling branch on an assignment identical to the assignment the first branch began with, without copying the assignment.

```rust
# use trio_sat::structures::assignment::{Assignment, ValuationStatus};
let mut assignment = Assignment::default();

let checkpoint = assignment.checkpoint();
assignment.record_assignment(-2);

assert!(assignment.is_true(-2));
assert!(assignment.is_false(2));
assert_eq!(assignment.check_assignment(2), ValuationStatus::Conflict);

assignment.backtrack(checkpoint);
assert_eq!(assignment.value_of(2), None);
```
*/

use std::collections::BTreeMap;

use crate::structures::{
    atom::Atom,
    literal::{IntLiteral, Literal},
};

/// The status of a literal relative to an assignment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValuationStatus {
    /// The atom of the literal has no value.
    None,

    /// The literal is true.
    Set,

    /// The negation of the literal is true.
    Conflict,
}

/// An assignment, as a value for each atom together with a trail of assigned literals.
#[derive(Clone, Debug, Default)]
pub struct Assignment {
    /// The value of each assigned atom.
    values: BTreeMap<Atom, bool>,

    /// Literals assigned true, in order of assignment.
    trail: Vec<IntLiteral>,
}

impl Assignment {
    /// The value of an atom, if the atom has some value.
    pub fn value_of(&self, atom: Atom) -> Option<bool> {
        self.values.get(&atom).copied()
    }

    /// The value of a literal, if the atom of the literal has some value.
    pub fn value_of_literal(&self, literal: IntLiteral) -> Option<bool> {
        self.value_of(literal.atom())
            .map(|value| value == literal.polarity())
    }

    /// True if the literal is assigned true, false otherwise.
    pub fn is_true(&self, literal: IntLiteral) -> bool {
        self.value_of_literal(literal) == Some(true)
    }

    /// True if the literal is assigned false, false otherwise.
    pub fn is_false(&self, literal: IntLiteral) -> bool {
        self.value_of_literal(literal) == Some(false)
    }

    /// The status of the literal on the assignment.
    pub fn check_assignment(&self, literal: IntLiteral) -> ValuationStatus {
        match self.value_of_literal(literal) {
            None => ValuationStatus::None,
            Some(true) => ValuationStatus::Set,
            Some(false) => ValuationStatus::Conflict,
        }
    }

    /// Assigns the literal true, and so the negation of the literal false.
    ///
    /// # Soundness
    /// The atom of the literal should have no value, as checked by [check_assignment](Assignment::check_assignment).
    /// Recording an assigned atom overwrites the value of the atom, and the trail then holds the atom twice.
    pub fn record_assignment(&mut self, literal: IntLiteral) {
        debug_assert_eq!(self.check_assignment(literal), ValuationStatus::None);

        self.values.insert(literal.atom(), literal.polarity());
        self.trail.push(literal);
    }

    /// A checkpoint on the trail, to [backtrack](Assignment::backtrack) to.
    pub fn checkpoint(&self) -> usize {
        self.trail.len()
    }

    /// Clears the value of every literal assigned after the given checkpoint.
    pub fn backtrack(&mut self, checkpoint: usize) {
        for literal in self.trail.drain(checkpoint..) {
            self.values.remove(&literal.atom());
        }
    }

    /// The literals assigned true, in order of assignment.
    pub fn trail(&self) -> &[IntLiteral] {
        &self.trail
    }

    /// A count of assigned atoms.
    pub fn assigned_count(&self) -> usize {
        self.trail.len()
    }

    /// The literals assigned true, ordered by atom.
    pub fn model(&self) -> Vec<IntLiteral> {
        let mut model = self.trail.clone();
        model.sort_unstable_by_key(|literal| literal.atom());
        model
    }
}
