use std::str::FromStr;

/// The procedure used to determine satisfiability.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, clap::ValueEnum)]
#[allow(clippy::upper_case_acronyms)]
pub enum Algorithm {
    /// Davis-Putnam style search: unit propagation, pure literal elimination, and case splits.
    DP,

    /// DPLL search: unit propagation, pure literal elimination, and case splits.
    ///
    /// The search procedure is shared with [DP](Algorithm::DP).
    DPLL,

    /// Saturation of the formula under resolution, until the empty clause or a fixpoint is found.
    Resolution,
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DP => write!(f, "DP"),
            Self::DPLL => write!(f, "DPLL"),
            Self::Resolution => write!(f, "Resolution"),
        }
    }
}

impl Algorithm {
    /// The minimum Algorithm type.
    pub const MIN: Algorithm = Algorithm::DP;

    /// The maximum Algorithm type.
    pub const MAX: Algorithm = Algorithm::Resolution;

    /// The stem used when naming files related to the algorithm, e.g. a benchmark summary.
    pub fn file_stem(&self) -> &'static str {
        match self {
            Self::DP => "dp",
            Self::DPLL => "dpll",
            Self::Resolution => "resolution",
        }
    }
}

impl FromStr for Algorithm {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dp" => Ok(Self::DP),

            "dpll" => Ok(Self::DPLL),

            "res" | "resolution" => Ok(Self::Resolution),

            _unknown_string => Err(()),
        }
    }
}
