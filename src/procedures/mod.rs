//! Procedures to determine the satisfiability of a formula.
//!
//! Leaves first:
//! - [simplify] reduces clauses against an assignment.
//! - [propagation] and [pure] extend an assignment by forced and safe literals.
//! - [search] is the backtracking search shared by DP and DPLL.
//! - [resolution] saturates clauses under resolution.
//! - [solve] dispatches on an algorithm.
//! - [bounded] runs a solve on a worker thread, within a time limit.
//!
//! For the most part these are accessed via a [context](crate::context), and primarily placed here for documentation.

pub mod bounded;
pub mod propagation;
pub mod pure;
pub mod resolution;
pub mod search;
pub mod simplify;
pub mod solve;
