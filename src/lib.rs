//! A library for deciding the satisfiability of boolean formulas written in conjunctive normal form, by three classical procedures.
//!
//! trio_sat is a reference library, rather than a competitive solver.
//! Each procedure is written to be read alongside the literature, and all three answer the same question of a formula:
//! - The Davis-Putnam style search, [DP](config::Algorithm::DP).
//! - The DPLL search, with unit propagation and pure literal elimination, [DPLL](config::Algorithm::DPLL).
//! - Resolution refutation, by saturating a formula under the resolution rule, [Resolution](config::Algorithm::Resolution).
//!
//! The two search labels share a single [procedure](procedures::search).
//!
//! # Orientation
//!
//! The library is designed around a [context].
//!
//! A context is built from a [configuration](config), and a formula is added to the context either through the [DIMACS](crate::context::Context::read_dimacs) representation of the formula or [programatically](crate::context::Context::add_clause).
//! A solve then takes place on a worker thread, bounded by the time limit of the configuration, and results in one of three [reports](reports::Report):
//! - Satisfiable.
//! - Unsatisfiable.
//! - Inconclusive, due to a timeout or some fault during the solve.
//!
//! Useful starting points may be:
//! - The [structures] to familiarise yourself with the representation of literals, clauses, formulas, and assignments.
//! - The [procedures] to inspect simplification, propagation, search, and saturation.
//! - The [bounded](procedures::bounded) harness to see how a solve is isolated and interrupted.
//! - The [batch] module for benchmarking a folder of formulas.
//!
//! # Examples
//!
//! + Parse and solve a DIMACS formula.
//!
//! ```rust
//! # use trio_sat::config::{Algorithm, Config};
//! # use trio_sat::context::Context;
//! # use trio_sat::reports::Report;
//! let mut the_context = Context::from_config(Config::default());
//!
//! let dimacs = b"
//!  1  2 0
//! -1  2 0
//! -1 -2 0
//!  1 -2 0
//! ";
//!
//! assert!(the_context.read_dimacs(dimacs.as_slice()).is_ok());
//! assert_eq!(the_context.solve(), Ok(Report::Unsatisfiable));
//! ```
//!
//! + Solve the same formula by resolution.
//!
//! ```rust
//! # use trio_sat::config::{Algorithm, Config};
//! # use trio_sat::context::Context;
//! # use trio_sat::reports::Report;
//! let mut config = Config::default();
//! config.algorithm.value = Algorithm::Resolution;
//!
//! let mut the_context = Context::from_config(config);
//! assert!(the_context.add_clause(vec![1, 2]).is_ok());
//! assert!(the_context.add_clause(vec![-1, 2]).is_ok());
//!
//! assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made throughout the library, with targets listed in [misc::log].
//! No logger is installed by the library.
//! The CLI installs [env_logger](https://docs.rs/env_logger/latest/env_logger/) when built with the `log` feature, and so, for example:
//!
//! ```sh
//! RUST_LOG=search=debug,resolution=info cargo run --features log -- formula.cnf
//! ```

pub mod batch;
pub mod builder;
pub mod config;
pub mod context;
pub mod generic;
pub mod misc;
pub mod procedures;
pub mod reports;
pub mod structures;
pub mod types;
