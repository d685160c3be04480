//! Key structures, such as literals, clauses, and formulas.
//!
//! Most structures are given as a 'canonical' representation, together with a trait or methods to capture the key features of the structure.
//!
//! # Structures without a trait
//!
//! ## Formulas
//!
//! A [formula] is a collection of clauses, interpreted as the conjunction of those clauses (and so is the conjunction of disjunctions over literals in some language).
//!
//! ## Assignments
//!
//! An [assignment] maps literals to truth values, symmetrically, with a trail to undo assignments made during a search.
//!
//! ## (Boolean) values
//!
//! A (boolean) value is one of two things, [true] and [false].

pub mod assignment;
pub mod atom;
pub mod clause;
pub mod formula;
pub mod literal;
