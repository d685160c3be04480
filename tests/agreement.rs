use rand::{rngs::StdRng, Rng, SeedableRng};

use trio_sat::{
    config::Algorithm,
    procedures::bounded::run_bounded,
    reports::Report,
    structures::{clause::CClause, formula::Formula, literal::Literal},
};

/// A random formula over at most `atoms` atoms, with clauses of one to `width` literals.
fn random_formula(rng: &mut StdRng, atoms: u32, clauses: usize, width: usize) -> Formula {
    let clauses = (0..clauses).map(|_| {
        let size = rng.gen_range(1..=width);
        (0..size)
            .map(|_| i32::new(rng.gen_range(1..=atoms), rng.gen_bool(0.5)))
            .collect::<CClause>()
    });
    Formula::from_clauses(clauses).unwrap()
}

/// Satisfiability by enumeration of every assignment.
fn brute_force(formula: &Formula) -> bool {
    let atoms = formula.max_atom();
    (0..(1_u32 << atoms)).any(|bits| {
        formula.clauses().iter().all(|clause| {
            clause.iter().any(|literal| {
                let value = (bits >> (literal.atom() - 1)) & 1 == 1;
                value == literal.polarity()
            })
        })
    })
}

mod agreement {

    use super::*;

    #[test]
    fn random_formulas() {
        let mut rng = StdRng::seed_from_u64(73);

        for _ in 0..96 {
            let atoms = rng.gen_range(1..=5);
            let clause_count = rng.gen_range(0..=4 * atoms as usize);
            let formula = random_formula(&mut rng, atoms, clause_count, 3);

            let expected = Report::from(brute_force(&formula));

            for algorithm in [Algorithm::DP, Algorithm::DPLL, Algorithm::Resolution] {
                let outcome = run_bounded(&formula, algorithm, None);
                assert_eq!(outcome.report, expected, "{algorithm} on {}", formula.as_dimacs());

                if let Some(model) = outcome.model {
                    for clause in formula.clauses() {
                        assert!(clause.iter().any(|literal| model.contains(literal)));
                    }
                }
            }
        }
    }

    #[test]
    fn resolution_on_binary_formulas() {
        let mut rng = StdRng::seed_from_u64(41);

        for _ in 0..48 {
            let atoms = rng.gen_range(6..=8);
            let clause_count = rng.gen_range(atoms as usize..=3 * atoms as usize);
            let formula = random_formula(&mut rng, atoms, clause_count, 2);

            let expected = Report::from(brute_force(&formula));

            for algorithm in [Algorithm::DP, Algorithm::DPLL, Algorithm::Resolution] {
                let outcome = run_bounded(&formula, algorithm, None);
                assert_eq!(outcome.report, expected, "{algorithm} on {}", formula.as_dimacs());
            }
        }
    }

    #[test]
    fn search_labels_identical() {
        let mut rng = StdRng::seed_from_u64(19);

        for _ in 0..32 {
            let formula = random_formula(&mut rng, 8, 24, 3);

            let dp = run_bounded(&formula, Algorithm::DP, None);
            let dpll = run_bounded(&formula, Algorithm::DPLL, None);

            assert_eq!(dp.report, dpll.report);
            assert_eq!(dp.model, dpll.model);
            assert_eq!(dp.counters, dpll.counters);
        }
    }
}
