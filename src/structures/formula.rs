/*!
A formula 𝐅 is a collection of [clauses](crate::structures::clause), interpreted as the conjunction of those clauses.

A formula is built once, by adding clauses, and from then on is only read.
Each procedure works on clauses derived from the formula, and so the formula of a [context](crate::context) is unchanged by a solve.

```rust
# use trio_sat::structures::formula::Formula;
let mut formula = Formula::default();

assert!(formula.add_clause(&[1, -2, 1]).is_ok());
assert!(formula.add_clause(&[2, 3]).is_ok());

assert_eq!(formula.clause_count(), 2);
assert_eq!(formula.clauses()[0], vec![1, -2]);
assert_eq!(formula.max_atom(), 3);
```

Clauses are stored in the order added, and literals within a clause in the order they first occur.
*/

use std::collections::BTreeSet;

use crate::{
    structures::{
        atom::{Atom, ATOM_MAX},
        clause::{CClause, Clause},
        literal::{IntLiteral, Literal},
    },
    types::err::{self},
};

/// Ok results when adding a clause to a formula.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClauseOk {
    /// The clause was added to the formula.
    Added,

    /// The clause was a tautology.
    /// Still, the clause was added to the formula, as it is satisfied on any assignment.
    Tautology,
}

/// A formula, as a collection of clauses.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Formula {
    /// The clauses of the formula, in the order added.
    clauses: Vec<CClause>,

    /// The greatest atom in some clause of the formula, or zero.
    max_atom: Atom,
}

impl Formula {
    /// A formula from the given clauses.
    pub fn from_clauses<C: AsRef<[IntLiteral]>>(
        clauses: impl IntoIterator<Item = C>,
    ) -> Result<Self, err::BuildError> {
        let mut formula = Formula::default();
        for clause in clauses {
            formula.add_clause(clause.as_ref())?;
        }
        Ok(formula)
    }

    /// Adds a clause to the formula, removing any duplicate literals.
    pub fn add_clause(&mut self, literals: &[IntLiteral]) -> Result<ClauseOk, err::BuildError> {
        let mut clause: CClause = Vec::with_capacity(literals.len());

        for literal in literals {
            if *literal == 0 {
                return Err(err::BuildError::ZeroLiteral);
            }
            if literal.atom() > ATOM_MAX {
                return Err(err::BuildError::AtomOverflow);
            }
            if !clause.contains(literal) {
                clause.push(*literal);
            }
        }

        if let Some(max) = clause.atoms().max() {
            self.max_atom = self.max_atom.max(max);
        }

        let ok = match clause.is_tautology() {
            true => ClauseOk::Tautology,
            false => ClauseOk::Added,
        };
        self.clauses.push(clause);
        Ok(ok)
    }

    /// The clauses of the formula, in the order added.
    pub fn clauses(&self) -> &[CClause] {
        &self.clauses
    }

    /// A count of clauses in the formula.
    pub fn clause_count(&self) -> usize {
        self.clauses.len()
    }

    /// The greatest atom in some clause of the formula, or zero if there is no such atom.
    pub fn max_atom(&self) -> Atom {
        self.max_atom
    }

    /// A count of the distinct atoms in some clause of the formula.
    pub fn atom_count(&self) -> usize {
        self.clauses
            .iter()
            .flat_map(|clause| clause.atoms())
            .collect::<BTreeSet<Atom>>()
            .len()
    }

    /// True if the formula contains no clauses, false otherwise.
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// The formula in DIMACS form, with a problem line.
    pub fn as_dimacs(&self) -> String {
        let mut the_string = format!("p cnf {} {}\n", self.max_atom, self.clauses.len());
        for clause in &self.clauses {
            the_string.push_str(&clause.as_dimacs(true));
            the_string.push('\n');
        }
        the_string
    }
}

impl std::fmt::Display for Formula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, clause) in self.clauses.iter().enumerate() {
            if index > 0 {
                write!(f, " ∧ ")?;
            }
            write!(f, "{}", clause.as_string())?;
        }
        Ok(())
    }
}
