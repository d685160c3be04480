//! Procedures to identify and eliminate pure literals.
//!
//! A literal is pure, relative to some clauses, if the literal occurs in some clause and its negation occurs in no clause.
//! Assigning a pure literal true falsifies no literal in any clause, and so preserves satisfiability.
//!
//! ```rust
//! # use trio_sat::context::Counters;
//! # use trio_sat::procedures::pure::eliminate_pure;
//! # use trio_sat::structures::assignment::Assignment;
//! let mut assignment = Assignment::default();
//! let mut counters = Counters::default();
//!
//! let remaining = eliminate_pure(vec![vec![1, 2], vec![1, -2]], &mut assignment, &mut counters);
//!
//! assert!(remaining.is_empty());
//! assert!(assignment.is_true(1));
//! assert_eq!(assignment.value_of(2), None);
//! ```
use std::collections::BTreeSet;

use crate::{
    context::Counters,
    misc::log::targets::{self},
    structures::{
        assignment::{Assignment, ValuationStatus},
        atom::Atom,
        clause::CClause,
        literal::{IntLiteral, Literal},
    },
};

/// The atoms of the clauses which occur with a single polarity, as a pair `(negative, positive)`.
///
/// An atom in `negative` occurs only in negative literals, so its negative literal is pure, and likewise for `positive`.
/// Both are ascending.
pub fn pure_literals<'l>(
    clauses: impl Iterator<Item = impl Iterator<Item = &'l IntLiteral>>,
) -> (Vec<Atom>, Vec<Atom>) {
    let mut the_true: BTreeSet<Atom> = BTreeSet::new();
    let mut the_false: BTreeSet<Atom> = BTreeSet::new();

    clauses.for_each(|literals| {
        for literal in literals {
            match literal.polarity() {
                true => the_true.insert(literal.atom()),
                false => the_false.insert(literal.atom()),
            };
        }
    });

    let pure_false: Vec<_> = the_false.difference(&the_true).copied().collect();
    let pure_true: Vec<_> = the_true.difference(&the_false).copied().collect();
    (pure_false, pure_true)
}

/// Assigns every pure literal true and drops every clause containing a pure literal.
///
/// The clauses are expected to be simplified against the assignment.
/// Still, a pure literal whose atom has some value is left as is, and the clauses containing the literal are kept.
pub fn eliminate_pure(
    mut clauses: Vec<CClause>,
    assignment: &mut Assignment,
    counters: &mut Counters,
) -> Vec<CClause> {
    let (f, t) = pure_literals(clauses.iter().map(|clause| clause.iter()));

    let mut pure: Vec<IntLiteral> = f
        .into_iter()
        .map(|atom| IntLiteral::new(atom, false))
        .chain(t.into_iter().map(|atom| IntLiteral::new(atom, true)))
        .filter(|literal| assignment.check_assignment(*literal) == ValuationStatus::None)
        .collect();

    if pure.is_empty() {
        return clauses;
    }

    pure.sort_unstable_by_key(|literal| literal.atom());

    for literal in &pure {
        assignment.record_assignment(*literal);
    }
    counters.pure_literals += pure.len();
    log::trace!(target: targets::PURE, "Pure literals: {pure:?}");

    // Any clause containing a pure literal now contains a true literal.
    clauses.retain(|clause| !clause.iter().any(|literal| assignment.is_true(*literal)));
    clauses
}
