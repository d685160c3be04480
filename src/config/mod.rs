/*!
Configuration of a context.

All configuration for a context is contained within a [Config].
Each configurable value is a [ConfigOption], which pairs the value with a name and bounds, so front ends (such as the CLI) may validate a requested value before it is set.

```rust
# use trio_sat::config::{Algorithm, Config};
let mut config = Config::default();

assert!(config.algorithm.set(Algorithm::Resolution));
assert!(config.time_limit.set(std::time::Duration::from_secs(5)));
assert!(!config.resolution_check_interval.set(0));

assert_eq!(config.time_limit(), Some(std::time::Duration::from_secs(5)));
```
*/

use std::time::Duration;

mod algorithm;
pub use algorithm::Algorithm;

mod config_option;
pub use config_option::ConfigOption;

/// The default time limit for a solve, in seconds.
pub const DEFAULT_TIME_LIMIT_SECS: u64 = 60;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// The procedure used to determine satisfiability.
    pub algorithm: ConfigOption<Algorithm>,

    /// The time to wait for an interrupted solve to stop before the solve is abandoned.
    pub grace: ConfigOption<Duration>,

    /// Eliminate pure literals at each node of a search.
    pub pure_literals: ConfigOption<bool>,

    /// The number of pairs of clauses resolved between checks for an interrupt during a round of resolution.
    pub resolution_check_interval: ConfigOption<usize>,

    /// The time limit for a solve.
    /// A limit of zero is no limit.
    pub time_limit: ConfigOption<Duration>,

    /// The stack size of the thread a solve runs on, in bytes.
    /// Search recurses once per decision, and so deep searches require a large stack.
    pub worker_stack: ConfigOption<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            algorithm: ConfigOption {
                name: "algorithm",
                min: Algorithm::MIN,
                max: Algorithm::MAX,
                value: Algorithm::DPLL,
            },

            grace: ConfigOption {
                name: "grace",
                min: Duration::from_millis(0),
                max: Duration::from_secs(60),
                value: Duration::from_secs(1),
            },

            pure_literals: ConfigOption {
                name: "pure_literals",
                min: false,
                max: true,
                value: true,
            },

            resolution_check_interval: ConfigOption {
                name: "resolution_check_interval",
                min: 1,
                max: usize::MAX,
                value: 4096,
            },

            time_limit: ConfigOption {
                name: "time_limit",
                min: Duration::from_secs(0),
                max: Duration::MAX,
                value: Duration::from_secs(DEFAULT_TIME_LIMIT_SECS),
            },

            worker_stack: ConfigOption {
                name: "worker_stack",
                min: 1 << 20,
                max: usize::MAX,
                value: 256 << 20,
            },
        }
    }
}

impl Config {
    /// The time limit of a solve, if some limit is set.
    pub fn time_limit(&self) -> Option<Duration> {
        match self.time_limit.value.is_zero() {
            true => None,
            false => Some(self.time_limit.value),
        }
    }
}
