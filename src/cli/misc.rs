use std::path::Path;

use trio_sat::{
    batch::BatchResults,
    context::Context,
    reports::Report,
    types::err::{self},
};

/// Exit codes, following the convention of SAT competitions.
pub mod exit {
    pub const SATISFIABLE: i32 = 10;
    pub const UNSATISFIABLE: i32 = 20;
    pub const INCONCLUSIVE: i32 = 30;
    pub const ERROR: i32 = 1;
}

pub fn exit_code(report: Report) -> i32 {
    match report {
        Report::Satisfiable => exit::SATISFIABLE,
        Report::Unsatisfiable => exit::UNSATISFIABLE,
        Report::Inconclusive(_) => exit::INCONCLUSIVE,
    }
}

pub fn load_dimacs(context: &mut Context, path: &Path, detail: u8) -> Result<(), err::ErrorKind> {
    let info = context.read_dimacs_file(path)?;

    if detail > 0 {
        println!("c Parsed {}: {info}", path.display());
    }
    if detail > 1 {
        for line in &info.skipped_lines {
            println!("c Skipped line {line}");
        }
    }
    Ok(())
}

pub fn error_message(error: &err::ErrorKind) -> String {
    match error {
        err::ErrorKind::Parse(err::ParseError::Line(line)) => format!("unreadable line {line}"),
        err::ErrorKind::Parse(err::ParseError::NoFile) => "no such file".to_string(),
        err::ErrorKind::Parse(err::ParseError::UnknownExtension(extension)) => {
            format!("unsupported extension '{extension}'")
        }
        err::ErrorKind::Io(message) => message.clone(),
        other => format!("{other:?}"),
    }
}

pub fn print_summary(results: &BatchResults, heading: &str) {
    let summary = &results.summary;
    println!("c");
    println!("c --- {heading} Benchmark Summary ---");
    println!("c SATISFIABLE: {}", summary.satisfiable);
    println!("c UNSATISFIABLE: {}", summary.unsatisfiable);
    println!("c TIMEOUT: {}", summary.timeout);
    println!("c Total files tested: {}", summary.total_files);
    println!("c Total benchmark time: {:.2}s", summary.total_time);
    if summary.total_files > 0 {
        println!("c Average time per file: {:.2}s", summary.average_time);
    }
}
