//! Generic structures, not specific to satisfiability.

pub mod interrupt;
