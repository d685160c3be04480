/// Counts of things which happen during a solve.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Counters {
    /// Case splits made during a search.
    pub decisions: usize,

    /// Literals assigned by unit propagation.
    pub propagations: usize,

    /// Branches of a search closed by a conflict.
    pub conflicts: usize,

    /// Literals assigned by pure literal elimination.
    pub pure_literals: usize,

    /// Rounds of resolution.
    pub rounds: usize,

    /// Distinct clauses derived by resolution.
    pub resolvents: usize,
}
