use std::path::{Path, PathBuf};

use trio_sat::{
    config::{Algorithm, Config},
    context::Context,
    reports::Report,
};

fn cnf_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("cnf")
}

fn fixtures(collection: &str) -> Vec<PathBuf> {
    let pattern = cnf_path().join(collection).join("*.cnf");
    let paths: Vec<PathBuf> = glob::glob(pattern.to_str().unwrap())
        .expect("bad glob")
        .filter_map(Result::ok)
        .collect();
    assert!(!paths.is_empty(), "no fixtures in {collection}");
    paths
}

fn solve_path(path: &Path, algorithm: Algorithm) -> Report {
    let mut config = Config::default();
    config.algorithm.value = algorithm;

    let mut the_context = Context::from_config(config);
    let info = the_context.read_dimacs_file(path).unwrap();
    assert!(info.skipped_lines.is_empty(), "{}", path.display());

    if let Some(expected) = info.expected_clauses {
        assert_eq!(expected, info.added_clauses, "{}", path.display());
    }

    the_context.solve().unwrap()
}

mod collections {

    use super::*;

    const ALGORITHMS: [Algorithm; 3] = [Algorithm::DP, Algorithm::DPLL, Algorithm::Resolution];

    #[test]
    fn satisfiable() {
        for path in fixtures("sat") {
            for algorithm in ALGORITHMS {
                assert_eq!(
                    solve_path(&path, algorithm),
                    Report::Satisfiable,
                    "{algorithm} on {}",
                    path.display()
                );
            }
        }
    }

    #[test]
    fn unsatisfiable() {
        for path in fixtures("unsat") {
            for algorithm in ALGORITHMS {
                assert_eq!(
                    solve_path(&path, algorithm),
                    Report::Unsatisfiable,
                    "{algorithm} on {}",
                    path.display()
                );
            }
        }
    }

    #[test]
    fn model_of_fixture() {
        let path = cnf_path().join("sat").join("implication_1.cnf");

        let mut the_context = Context::from_config(Config::default());
        assert!(the_context.read_dimacs_file(&path).is_ok());
        assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
        assert_eq!(the_context.valuation_string(), Some("1 2 3 4".to_string()));
    }
}
