//! Literals are atoms paired with a (boolean) polarity.
//!
//! The representation of a literal is as a (non-zero) signed integer, where the absolute value of the integer is the atom and the sign of the integer is the polarity.
//! Negation is integer negation.
//!
//! ```rust
//! # use trio_sat::structures::literal::{IntLiteral, Literal};
//! let atom = 79;
//! let polarity = false;
//! let literal = IntLiteral::new(atom, polarity);
//!
//! assert_eq!(literal, -79);
//! assert!(!literal.polarity());
//! assert_eq!(literal.atom(), 79);
//! assert!(literal.negate().polarity());
//! ```
//!
//! The trait makes the atom/polarity reading of an integer explicit at the point of use, which is otherwise easy to confuse with the integer itself.

use crate::structures::atom::Atom;

/// Something which has methods for returning an atom and a polarity, etc.
pub trait Literal: std::cmp::Ord + std::hash::Hash + Copy {
    /// A fresh literal, specified by pairing an atom with a boolean.
    fn new(atom: Atom, polarity: bool) -> Self;

    /// The negation of the literal.
    fn negate(&self) -> Self;

    /// The atom of the literal.
    fn atom(&self) -> Atom;

    /// The polarity of the literal.
    fn polarity(&self) -> bool;
}

/// The representation of a literal as a signed integer.
pub type IntLiteral = i32;

impl Literal for IntLiteral {
    fn new(atom: Atom, polarity: bool) -> Self {
        match polarity {
            true => atom as IntLiteral,
            false => -(atom as IntLiteral),
        }
    }

    fn negate(&self) -> Self {
        -self
    }

    fn atom(&self) -> Atom {
        self.unsigned_abs()
    }

    fn polarity(&self) -> bool {
        self.is_positive()
    }
}
