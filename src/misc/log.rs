/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information for extending the library and/or fixing issues.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [parsing](crate::builder)
    pub const PARSE: &str = "parse";

    /// Logs related to [unit propagation](crate::procedures::propagation)
    pub const PROPAGATION: &str = "propagation";

    /// Logs related to [pure literal elimination](crate::procedures::pure)
    pub const PURE: &str = "pure";

    /// Logs related to [search](crate::procedures::search)
    pub const SEARCH: &str = "search";

    /// Logs related to [resolution](crate::procedures::resolution)
    pub const RESOLUTION: &str = "resolution";

    /// Logs related to the [bounded harness](crate::procedures::bounded)
    pub const HARNESS: &str = "harness";

    /// Logs related to [batches](crate::batch)
    pub const BATCH: &str = "batch";
}
