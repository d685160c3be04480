/*!
Benchmarking of a folder of formulas.

# Overview

A batch:
1. Finds each `.cnf` file in a folder (and each `.cnf.xz` file, with the `xz` feature).
2. Orders the files by the first number in each file name, with any file name without a number last, and ties broken by file name.
3. Solves each file in turn, as configured, noting a [Record] of the report and time of each solve.
4. Summarises the records.

Files are solved strictly in sequence, and a file which cannot be read is recorded as inconclusive rather than ending the batch.

The [results](BatchResults) of a batch may be [written](write_summary) as JSON to `benchmark_<algorithm>_results.json` in the folder of the batch, with the shape:

```json
{
    "results": [
        { "filename": "uf20-01.cnf", "status": "SATISFIABLE", "time": 0.01 }
    ],
    "summary": {
        "SATISFIABLE": 1,
        "UNSATISFIABLE": 0,
        "TIMEOUT": 0,
        "total_files": 1,
        "average_time": 0.01,
        "total_time": 0.01
    }
}
```

Times are in seconds, rounded to two decimal places.
The time of a file which timed out is the time limit.

# Order

```rust
# use std::path::Path;
# use trio_sat::batch::batch_order;
let mut names = vec!["f10.cnf", "notes.cnf", "f9.cnf", "f010.cnf", "f1.cnf"];
names.sort_by(|a, b| batch_order(Path::new(a), Path::new(b)));

assert_eq!(names, vec!["f1.cnf", "f9.cnf", "f010.cnf", "f10.cnf", "notes.cnf"]);
```
*/

use std::{
    cmp::Ordering,
    path::{Path, PathBuf},
    time::{Duration, Instant},
};

use serde::Serialize;

use crate::{
    config::{Algorithm, Config},
    context::Context,
    misc::log::targets::{self},
    reports::{Inconclusive, Report},
    types::err::{self},
};

/// The record of a single file of a batch.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Record {
    /// The name of the file, without the folder.
    pub filename: String,

    /// The label of the report.
    pub status: &'static str,

    /// Seconds taken by the solve, rounded to two decimal places.
    pub time: f64,

    #[serde(skip)]
    pub report: Report,

    #[serde(skip)]
    pub elapsed: Duration,
}

/// A summary of the records of a batch.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Summary {
    #[serde(rename = "SATISFIABLE")]
    pub satisfiable: usize,

    #[serde(rename = "UNSATISFIABLE")]
    pub unsatisfiable: usize,

    #[serde(rename = "TIMEOUT")]
    pub timeout: usize,

    pub total_files: usize,

    /// The mean time of a solve, in seconds.
    pub average_time: f64,

    /// The time of the whole batch, in seconds.
    pub total_time: f64,
}

/// The records of a batch, together with a summary.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct BatchResults {
    pub results: Vec<Record>,
    pub summary: Summary,
}

/// Seconds, rounded to two decimal places.
pub fn round_seconds(duration: Duration) -> f64 {
    round_two(duration.as_secs_f64())
}

fn round_two(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// The first maximal run of ascii digits in the string, if any.
fn first_number(name: &str) -> Option<&str> {
    let start = name.find(|c: char| c.is_ascii_digit())?;
    let rest = &name[start..];
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    Some(&rest[..end])
}

/// Compares two strings of ascii digits by the numbers they represent, without limit on size.
fn compare_digits(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// The order of files in a batch.
pub fn batch_order(a: &Path, b: &Path) -> Ordering {
    let a_name = a.file_name().map(|n| n.to_string_lossy()).unwrap_or_default();
    let b_name = b.file_name().map(|n| n.to_string_lossy()).unwrap_or_default();

    let by_number = match (first_number(&a_name), first_number(&b_name)) {
        (Some(a_number), Some(b_number)) => compare_digits(a_number, b_number),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };

    by_number.then_with(|| a_name.cmp(&b_name))
}

/// The formula files of the folder, in batch order.
pub fn ordered_formulas(folder: &Path) -> Result<Vec<PathBuf>, err::BatchError> {
    if !folder.is_dir() {
        return Err(err::BatchError::UnreadableFolder);
    }

    let Some(folder_str) = folder.to_str() else {
        return Err(err::BatchError::UnreadableFolder);
    };
    let escaped = PathBuf::from(glob::Pattern::escape(folder_str));

    #[allow(unused_mut)]
    let mut extensions = vec!["*.cnf"];
    #[cfg(feature = "xz")]
    extensions.push("*.cnf.xz");

    let mut formulas = Vec::default();
    for extension in extensions {
        let pattern = escaped.join(extension);
        let Some(pattern) = pattern.to_str() else {
            return Err(err::BatchError::Pattern);
        };

        let entries = glob::glob(pattern).map_err(|_| err::BatchError::Pattern)?;
        for entry in entries {
            match entry {
                Ok(path) if path.is_file() => formulas.push(path),
                Ok(_) => {}
                Err(e) => log::warn!(target: targets::BATCH, "Unreadable entry: {e}"),
            }
        }
    }

    formulas.sort_by(|a, b| batch_order(a, b));
    Ok(formulas)
}

/// Solves a single file, as configured.
///
/// A file which cannot be read is reported as inconclusive.
pub fn solve_file(path: &Path, config: &Config) -> Record {
    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    let start = Instant::now();
    let mut the_context = Context::from_config(config.clone());

    let (report, elapsed) = match the_context.read_dimacs_file(path) {
        Ok(info) => {
            log::debug!(target: targets::BATCH, "{filename}: {info}");
            match the_context.solve() {
                Ok(report) => (report, the_context.elapsed().unwrap_or_else(|| start.elapsed())),
                Err(e) => {
                    log::warn!(target: targets::BATCH, "{filename}: solve failed: {e:?}");
                    (Report::Inconclusive(Inconclusive::Fault), start.elapsed())
                }
            }
        }

        Err(e) => {
            log::warn!(target: targets::BATCH, "{filename}: unreadable: {e:?}");
            (Report::Inconclusive(Inconclusive::Fault), start.elapsed())
        }
    };

    Record {
        filename,
        status: report.label(),
        time: round_seconds(elapsed),
        report,
        elapsed,
    }
}

/// Summarises the records, with the total time of the batch.
pub fn summarise(records: &[Record], total: Duration) -> Summary {
    let mut summary = Summary {
        total_files: records.len(),
        total_time: round_seconds(total),
        ..Default::default()
    };

    for record in records {
        match record.report {
            Report::Satisfiable => summary.satisfiable += 1,
            Report::Unsatisfiable => summary.unsatisfiable += 1,
            Report::Inconclusive(_) => summary.timeout += 1,
        }
    }

    if !records.is_empty() {
        let seconds: f64 = records.iter().map(|r| r.elapsed.as_secs_f64()).sum();
        summary.average_time = round_two(seconds / records.len() as f64);
    }

    summary
}

/// Solves each formula file of the folder in batch order, as configured.
///
/// The callback is called with each record as the record is made.
pub fn run_batch(
    folder: &Path,
    config: &Config,
    mut on_record: impl FnMut(&Record),
) -> Result<BatchResults, err::BatchError> {
    let formulas = ordered_formulas(folder)?;
    log::info!(target: targets::BATCH, "{} formulas in {}", formulas.len(), folder.display());

    let start = Instant::now();
    let mut results = Vec::with_capacity(formulas.len());

    for path in formulas {
        let record = solve_file(&path, config);
        on_record(&record);
        results.push(record);
    }

    let summary = summarise(&results, start.elapsed());
    Ok(BatchResults { results, summary })
}

/// The name of the summary file of a batch by the algorithm.
pub fn summary_file_name(algorithm: Algorithm) -> String {
    format!("benchmark_{}_results.json", algorithm.file_stem())
}

/// The results as pretty JSON, indented by four spaces.
pub fn to_json(results: &BatchResults) -> Result<String, err::BatchError> {
    let mut bytes = Vec::default();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut bytes, formatter);

    results
        .serialize(&mut serializer)
        .map_err(|_| err::BatchError::Serialize)?;

    String::from_utf8(bytes).map_err(|_| err::BatchError::Serialize)
}

/// Writes the results to the summary file of the folder, returning the path of the file.
pub fn write_summary(
    folder: &Path,
    algorithm: Algorithm,
    results: &BatchResults,
) -> Result<PathBuf, err::BatchError> {
    let path = folder.join(summary_file_name(algorithm));
    let json = to_json(results)?;

    std::fs::write(&path, json).map_err(|e| {
        log::error!(target: targets::BATCH, "Failed to write {}: {e}", path.display());
        err::BatchError::Write
    })?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_in_names() {
        assert_eq!(first_number("uf20-91.cnf"), Some("20"));
        assert_eq!(first_number("hole6.cnf"), Some("6"));
        assert_eq!(first_number("formula.cnf"), None);
    }

    #[test]
    fn digit_comparison() {
        assert_eq!(compare_digits("9", "10"), Ordering::Less);
        assert_eq!(compare_digits("010", "10"), Ordering::Equal);
        assert_eq!(
            compare_digits("123456789012345678901234567890", "99"),
            Ordering::Greater
        );
    }

    #[test]
    fn ties_by_name() {
        assert_eq!(
            batch_order(Path::new("b-1.cnf"), Path::new("a-1.cnf")),
            Ordering::Greater
        );
        assert_eq!(
            batch_order(Path::new("x.cnf"), Path::new("y.cnf")),
            Ordering::Less
        );
    }

    #[test]
    fn rounding() {
        assert_eq!(round_seconds(Duration::from_millis(1234)), 1.23);
        assert_eq!(round_seconds(Duration::from_millis(1236)), 1.24);
        assert_eq!(round_seconds(Duration::ZERO), 0.0);
    }

    #[test]
    fn empty_summary() {
        let summary = summarise(&[], Duration::ZERO);
        assert_eq!(summary.total_files, 0);
        assert_eq!(summary.average_time, 0.0);
    }
}
