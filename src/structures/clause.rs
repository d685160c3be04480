//! Clauses, aka. a collection of literals, interpreted as the disjunction of those literals.
//!
//! The canonical representation of a clause is as a vector of literals.
//!
//! ```rust
//! # use trio_sat::structures::clause::{CClause, Clause};
//! let clause: CClause = vec![23, -41, -3, 15, -4];
//!
//! assert_eq!(clause.atoms().max(), Some(41));
//! assert_eq!(clause.unit(), None);
//! assert!(!clause.is_tautology());
//! assert_eq!(clause.as_dimacs(true), "23 -41 -3 15 -4 0");
//!
//! assert_eq!(clause.canonical(), vec![-3, -4, 15, 23, -41]);
//! ```
//!
//! - The empty clause is always false (never true).
//! - Single literals are identified with the clause containing that literal (aka. a 'unit' clause, where the 'unit' is the literal).
//! - A clause containing some literal and its negation is a tautology, and is true on every assignment.
//!
//! # Order
//!
//! Clauses read from a formula keep the order in which literals first occur.
//! This order has no logical significance, though it fixes which literal a [search](crate::procedures::search) branches on.
//!
//! Clauses used during [resolution](crate::procedures::resolution) are in *canonical* form: literals are ordered by atom and then polarity (false before true), without duplicates.
//! Canonical clauses may be compared for equality, and so stored in a set.

use crate::structures::{
    atom::Atom,
    literal::{IntLiteral, Literal},
};

/// The clause trait.
pub trait Clause {
    /// Some string representation of the clause.
    fn as_string(&self) -> String;

    /// A string of the clause in DIMACS form, with the terminating `0` as optional.
    fn as_dimacs(&self, zero: bool) -> String;

    /// An iterator over all atoms in the clause, in the order stored.
    fn atoms(&self) -> impl Iterator<Item = Atom>;

    /// The literal of the clause, if the clause is a unit clause.
    fn unit(&self) -> Option<IntLiteral>;

    /// Whether the clause contains some literal and its negation.
    fn is_tautology(&self) -> bool;

    /// The clause in its canonical form.
    fn canonical(self) -> CClause;
}

/// The canonical implementation of a clause.
pub type CClause = Vec<IntLiteral>;

impl Clause for CClause {
    fn as_string(&self) -> String {
        let mut the_string = String::from("(");
        for (index, literal) in self.iter().enumerate() {
            if index > 0 {
                the_string.push_str(" ∨ ");
            }
            the_string.push_str(&literal.to_string());
        }
        the_string.push(')');
        the_string
    }

    fn as_dimacs(&self, zero: bool) -> String {
        let mut the_string = self
            .iter()
            .map(|literal| literal.to_string())
            .collect::<Vec<_>>()
            .join(" ");

        if zero {
            if !the_string.is_empty() {
                the_string.push(' ');
            }
            the_string.push('0');
        }
        the_string
    }

    fn atoms(&self) -> impl Iterator<Item = Atom> {
        self.iter().map(|literal| literal.atom())
    }

    fn unit(&self) -> Option<IntLiteral> {
        match self.as_slice() {
            [literal] => Some(*literal),
            _ => None,
        }
    }

    fn is_tautology(&self) -> bool {
        self.iter().any(|literal| self.contains(&literal.negate()))
    }

    fn canonical(mut self) -> CClause {
        self.sort_unstable_by_key(|literal| (literal.atom(), literal.polarity()));
        self.dedup();
        self
    }
}
