#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = Jemalloc;

use std::path::Path;

use trio_sat::{
    batch::{self},
    config::Config,
    context::Context,
    reports::Report,
};

mod config_io;
mod misc;
mod parse;

use config_io::ConfigIO;
use misc::{error_message, exit, exit_code, load_dimacs, print_summary};

fn main() {
    #[cfg(feature = "log")]
    env_logger::init();

    let matches = parse::cli::cli().get_matches();

    let config = parse::config::config_from_args(&matches);
    let config_io = ConfigIO::from_args(&matches);

    if config_io.detail > 0 {
        match config.time_limit() {
            Some(limit) => println!("c {} with a time limit of {}s", config.algorithm.value, limit.as_secs()),
            None => println!("c {} without a time limit", config.algorithm.value),
        }
    }

    let code = match config_io.batch_folder() {
        Some(folder) => benchmark(folder, &config, &config_io),
        None => solve(config, &config_io),
    };
    std::process::exit(code)
}

fn solve(config: Config, config_io: &ConfigIO) -> i32 {
    let mut the_context = Context::from_config(config);

    for path in &config_io.paths {
        if let Err(e) = load_dimacs(&mut the_context, path, config_io.detail) {
            println!("c Error loading {}: {}", path.display(), error_message(&e));
            return exit::ERROR;
        }
    }

    let report = match the_context.solve() {
        Ok(report) => report,
        Err(e) => {
            println!("c Context error: {e:?}");
            return exit::ERROR;
        }
    };

    if config_io.detail > 0 {
        if let Some(elapsed) = the_context.elapsed() {
            println!("c Time: {:.2}s", elapsed.as_secs_f64());
        }
        if config_io.detail > 1 {
            println!("c {:?}", the_context.counters);
        }
    }

    match report {
        Report::Satisfiable => {
            if config_io.show_model {
                match the_context.valuation_string() {
                    Some(valuation) if valuation.is_empty() => println!("v 0"),
                    Some(valuation) => println!("v {valuation} 0"),
                    None => println!("c No model, as the formula was solved by resolution"),
                }
            }
        }

        Report::Inconclusive(reason) => println!("c RESULT INCONCLUSIVE ({reason})"),

        Report::Unsatisfiable => {}
    }

    println!("s {report}");
    exit_code(report)
}

fn benchmark(folder: &Path, config: &Config, config_io: &ConfigIO) -> i32 {
    let algorithm = config.algorithm.value;

    if config_io.detail > 0 {
        println!("c Running {algorithm} benchmark in: {}", folder.display());
    }

    let results = batch::run_batch(folder, config, |record| {
        println!("c {}: {} in {:.2}s", record.filename, record.status, record.time);
    });

    let results = match results {
        Ok(results) => results,
        Err(e) => {
            println!("c Error running benchmark: {e:?}");
            return exit::ERROR;
        }
    };

    if config_io.write_summary {
        match batch::write_summary(folder, algorithm, &results) {
            Ok(path) => println!("c Summary written to {}", path.display()),
            Err(e) => {
                println!("c Error writing summary: {e:?}");
                return exit::ERROR;
            }
        }
    }

    print_summary(&results, &algorithm.to_string());
    0
}
