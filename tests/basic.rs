use trio_sat::{
    config::{Algorithm, Config},
    context::Context,
    reports::Report,
    structures::formula::ClauseOk,
};

const ALGORITHMS: [Algorithm; 3] = [Algorithm::DP, Algorithm::DPLL, Algorithm::Resolution];

fn context_for(algorithm: Algorithm) -> Context {
    let mut config = Config::default();
    config.algorithm.value = algorithm;
    Context::from_config(config)
}

mod basic {

    use super::*;

    #[test]
    fn one_literal() {
        for algorithm in ALGORITHMS {
            let mut the_context = context_for(algorithm);
            assert!(the_context.add_clause(vec![1]).is_ok());
            assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
            assert_eq!(the_context.report(), Some(Report::Satisfiable));
        }
    }

    #[test]
    fn conflict() {
        for algorithm in ALGORITHMS {
            let mut the_context = context_for(algorithm);
            assert!(the_context.add_clause(vec![1, 2]).is_ok());
            assert!(the_context.add_clause(vec![-1, -2]).is_ok());
            assert!(the_context.add_clause(vec![1, -2]).is_ok());
            assert!(the_context.add_clause(vec![-1, 2]).is_ok());
            assert_eq!(the_context.solve(), Ok(Report::Unsatisfiable));
        }
    }

    #[test]
    fn no_clauses() {
        for algorithm in ALGORITHMS {
            let mut the_context = context_for(algorithm);
            assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
        }
    }

    #[test]
    fn empty_clause() {
        for algorithm in ALGORITHMS {
            let mut the_context = context_for(algorithm);
            assert!(the_context.add_clause(vec![1, 2]).is_ok());
            assert!(the_context.add_clause(Vec::<i32>::new()).is_ok());
            assert_eq!(the_context.solve(), Ok(Report::Unsatisfiable));
        }
    }

    #[test]
    fn duplicates() {
        let mut the_context = context_for(Algorithm::DPLL);
        assert!(the_context.add_clause(vec![1, 2, 2, 1]).is_ok());
        assert_eq!(the_context.formula.clause_count(), 1);
        assert_eq!(the_context.formula.clauses()[0], vec![1, 2]);
    }

    #[test]
    fn tautology_kept() {
        for algorithm in ALGORITHMS {
            let mut the_context = context_for(algorithm);
            assert_eq!(the_context.add_clause(vec![1, 2, -1]), Ok(ClauseOk::Tautology));
            assert_eq!(the_context.formula.clause_count(), 1);
            assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
        }
    }

    #[test]
    fn zero_is_not_a_literal() {
        let mut the_context = context_for(Algorithm::DPLL);
        assert!(the_context.add_clause(vec![1, 0, 2]).is_err());
        assert!(the_context.formula.is_empty());
    }

    #[test]
    fn assumption_by_unit() {
        let mut the_context = context_for(Algorithm::DPLL);

        assert!(the_context.add_clause(vec![1, 2]).is_ok());
        assert!(the_context.add_clause(vec![-1]).is_ok());
        assert_eq!(the_context.solve(), Ok(Report::Satisfiable));

        let the_valuation = the_context.valuation_string().unwrap();
        assert!(the_valuation.contains("-1"));
        assert!(the_valuation.contains('2'));
    }

    #[test]
    fn resolution_has_no_model() {
        let mut the_context = context_for(Algorithm::Resolution);
        assert!(the_context.add_clause(vec![1, 2]).is_ok());
        assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
        assert_eq!(the_context.model(), None);
    }

    #[test]
    fn adding_clears_report() {
        let mut the_context = context_for(Algorithm::DP);
        assert!(the_context.add_clause(vec![1]).is_ok());
        assert_eq!(the_context.solve(), Ok(Report::Satisfiable));

        assert!(the_context.add_clause(vec![-1]).is_ok());
        assert_eq!(the_context.report(), None);
        assert_eq!(the_context.solve(), Ok(Report::Unsatisfiable));
    }

    #[test]
    fn large_atoms() {
        for algorithm in ALGORITHMS {
            let mut the_context = context_for(algorithm);
            assert!(the_context.add_clause(vec![2147483647]).is_ok());
            assert!(the_context.add_clause(vec![1]).is_ok());
            assert_eq!(the_context.solve(), Ok(Report::Satisfiable));

            if algorithm != Algorithm::Resolution {
                assert_eq!(the_context.model(), Some([1, 2147483647].as_slice()));
            }
        }
    }

    #[test]
    fn counters_recorded() {
        let mut the_context = context_for(Algorithm::DPLL);
        assert!(the_context.add_clause(vec![1, 2]).is_ok());
        assert!(the_context.add_clause(vec![-1, 2]).is_ok());
        assert!(the_context.add_clause(vec![1, -2]).is_ok());
        assert!(the_context.add_clause(vec![-1, -2]).is_ok());
        assert_eq!(the_context.solve(), Ok(Report::Unsatisfiable));

        assert_eq!(the_context.counters.decisions, 2);
        assert_eq!(the_context.counters.conflicts, 2);
        assert!(the_context.elapsed().is_some());
    }
}

mod dimacs {

    use super::*;

    #[test]
    fn solve_dimacs() {
        let dimacs = b"c example
p cnf 5 5
 1  2       0
 1 -2       0
-1  2       0
 1  2  3    0
       3 -4 0
";

        for algorithm in ALGORITHMS {
            let mut the_context = context_for(algorithm);
            let info = the_context.read_dimacs(dimacs.as_slice()).unwrap();

            assert_eq!(info.expected_clauses, Some(5));
            assert_eq!(info.added_clauses, 5);
            assert_eq!(info.added_atoms, 4);
            assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
        }
    }
}
