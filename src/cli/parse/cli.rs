use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, Command};

use trio_sat::config::{self, Algorithm};

pub fn cli() -> Command {
    Command::new("trio_cli")
        .about("Determines whether a formula is satisfiable or unsatisfiable, by DP, DPLL, or resolution")
        .version(env!("CARGO_PKG_VERSION"))

        .arg(Arg::new("paths")
            .required(true)
            .trailing_var_arg(true)
            .num_args(1..)
            .value_parser(value_parser!(PathBuf))
            .help("The DIMACS form CNF files to parse (as a single formula), or a single folder to benchmark."))

        .arg(Arg::new("algorithm")
            .short('a')
            .long("algorithm")
            .value_parser(value_parser!(Algorithm))
            .required(false)
            .num_args(1)
            .help(format!("The procedure used to determine satisfiability.
Default: {}

DP and DPLL share a single search, and differ only in the name of a benchmark summary.", Algorithm::DPLL)))

        .arg(Arg::new("time_limit")
            .short('t')
            .long("time-limit")
            .value_parser(value_parser!(u64))
            .required(false)
            .num_args(1)
            .help(format!("The time limit for each solve, in seconds.
Default: {}

A limit of 0 is no limit.
A solve which passes the limit is reported as TIMEOUT.", config::DEFAULT_TIME_LIMIT_SECS)))

        .arg(Arg::new("grace")
            .long("grace")
            .value_parser(value_parser!(u64))
            .required(false)
            .num_args(1)
            .help("The time to wait for an interrupted solve to stop, in milliseconds."))

        .arg(Arg::new("no_pure")
            .long("no-pure")
            .action(ArgAction::SetTrue)
            .required(false)
            .help("Do not eliminate pure literals during a search."))

        .arg(Arg::new("model")
            .short('m')
            .long("model")
            .action(ArgAction::SetTrue)
            .required(false)
            .help("Display a model on finding a formula is satisfiable by search."))

        .arg(Arg::new("no_summary")
            .long("no-summary")
            .action(ArgAction::SetTrue)
            .required(false)
            .help("Do not write a JSON summary of a benchmark to the benchmarked folder."))

        .arg(Arg::new("detail")
            .short('d')
            .long("detail")
            .value_parser(value_parser!(u8))
            .required(false)
            .num_args(1)
            .help("The level of detail to display, from 0 to 2."))
}
