use trio_sat::{
    context::Counters,
    generic::interrupt::Interrupt,
    procedures::{
        propagation::propagate,
        pure::eliminate_pure,
        resolution::{resolve, saturate},
        search::{search_formula, split_literal, SearchConfig},
        simplify::simplify,
    },
    structures::{assignment::Assignment, clause::CClause, formula::Formula},
    types::err::{PropagationError, SolveError},
};

fn classic() -> Vec<CClause> {
    vec![vec![1, 2], vec![-1, 2], vec![1, -2], vec![-1, -2]]
}

mod simplification {

    use super::*;

    #[test]
    fn satisfied_dropped_false_removed() {
        let mut assignment = Assignment::default();
        assignment.record_assignment(2);
        assignment.record_assignment(-3);

        let clauses = vec![vec![1, 2], vec![1, 3], vec![-2, 3, 4], vec![-3, 4]];
        assert_eq!(
            simplify(&clauses, &assignment),
            vec![vec![1], vec![4]]
        );
    }

    #[test]
    fn idempotent() {
        let mut assignment = Assignment::default();
        assignment.record_assignment(-1);
        assignment.record_assignment(4);

        let clauses = vec![vec![1, 2, -4], vec![-1, 5], vec![3, -5, 1], vec![-4]];
        let once = simplify(&clauses, &assignment);
        let twice = simplify(&once, &assignment);

        assert_eq!(once, twice);
        assert_eq!(once, vec![vec![2], vec![3, -5], vec![]]);
    }

    #[test]
    fn input_unchanged() {
        let mut assignment = Assignment::default();
        assignment.record_assignment(1);

        let clauses = vec![vec![-1, 2]];
        let _ = simplify(&clauses, &assignment);
        assert_eq!(clauses, vec![vec![-1, 2]]);
    }
}

mod propagation {

    use super::*;

    #[test]
    fn unit_chain() {
        let mut assignment = Assignment::default();
        let mut counters = Counters::default();

        let result = propagate(
            vec![vec![1], vec![-1, 2]],
            &mut assignment,
            &Interrupt::default(),
            &mut counters,
        );

        assert_eq!(result, Ok(vec![]));
        assert!(assignment.is_true(1));
        assert!(assignment.is_true(2));
        assert_eq!(counters.propagations, 2);
    }

    #[test]
    fn conflict() {
        let mut assignment = Assignment::default();
        let mut counters = Counters::default();

        let result = propagate(
            vec![vec![1], vec![-1]],
            &mut assignment,
            &Interrupt::default(),
            &mut counters,
        );

        assert!(matches!(result, Err(PropagationError::Conflict(_))));
    }

    #[test]
    fn no_clauses() {
        let mut assignment = Assignment::default();
        let mut counters = Counters::default();

        let result = propagate(vec![], &mut assignment, &Interrupt::default(), &mut counters);
        assert_eq!(result, Ok(vec![]));
        assert_eq!(assignment.assigned_count(), 0);
    }

    #[test]
    fn empty_clause() {
        let mut assignment = Assignment::default();
        let mut counters = Counters::default();

        let result = propagate(
            vec![vec![1, 2], vec![]],
            &mut assignment,
            &Interrupt::default(),
            &mut counters,
        );
        assert_eq!(result, Err(PropagationError::EmptyClause));
    }

    #[test]
    fn first_unit_first() {
        let mut assignment = Assignment::default();
        let mut counters = Counters::default();

        let result = propagate(
            vec![vec![2, 3], vec![-3], vec![1], vec![-2, -1]],
            &mut assignment,
            &Interrupt::default(),
            &mut counters,
        );

        // -3 forces 2, and then 1 falsifies the last clause.
        assert_eq!(result, Err(PropagationError::Conflict(1)));
        assert_eq!(assignment.trail(), &[-3, 2, 1]);
    }

    #[test]
    fn interrupted() {
        let interrupt = Interrupt::default();
        interrupt.raise();

        let mut assignment = Assignment::default();
        let mut counters = Counters::default();
        let result = propagate(vec![vec![1]], &mut assignment, &interrupt, &mut counters);

        assert_eq!(result, Err(PropagationError::Interrupted));
    }
}

mod pure {

    use super::*;

    #[test]
    fn pure_without_branching() {
        let formula = Formula::from_clauses([vec![1, 2], vec![1, -2]]).unwrap();
        let mut counters = Counters::default();

        let (satisfiable, assignment) = search_formula(
            &formula,
            SearchConfig::default(),
            &Interrupt::default(),
            &mut counters,
        )
        .unwrap();

        assert!(satisfiable);
        assert!(assignment.is_true(1));
        assert_eq!(counters.decisions, 0);
        assert_eq!(counters.pure_literals, 1);
    }

    #[test]
    fn eliminated_clauses() {
        let mut assignment = Assignment::default();
        let mut counters = Counters::default();

        let remaining = eliminate_pure(
            vec![vec![1, 2], vec![-1, 2, 3], vec![1, -3], vec![-1, 3]],
            &mut assignment,
            &mut counters,
        );

        assert!(assignment.is_true(2));
        assert_eq!(remaining, vec![vec![1, -3], vec![-1, 3]]);
    }

    #[test]
    fn disabled() {
        let formula = Formula::from_clauses([vec![1, 2], vec![1, -2]]).unwrap();
        let mut counters = Counters::default();
        let config = SearchConfig {
            pure_literals: false,
        };

        let (satisfiable, _) =
            search_formula(&formula, config, &Interrupt::default(), &mut counters).unwrap();

        assert!(satisfiable);
        assert_eq!(counters.pure_literals, 0);
        assert_eq!(counters.decisions, 1);
    }
}

mod search {

    use super::*;

    #[test]
    fn split_on_first_literal() {
        assert_eq!(split_literal(&[vec![-3, 1], vec![2]]), Some(-3));
        assert_eq!(split_literal(&[]), None);
    }

    #[test]
    fn unsatisfiable_classic() {
        let formula = Formula::from_clauses(classic()).unwrap();
        let mut counters = Counters::default();

        let (satisfiable, assignment) = search_formula(
            &formula,
            SearchConfig::default(),
            &Interrupt::default(),
            &mut counters,
        )
        .unwrap();

        assert!(!satisfiable);
        assert_eq!(assignment.assigned_count(), 0);
    }

    #[test]
    fn model_satisfies() {
        let clauses = vec![
            vec![1, 2, 3],
            vec![-1, -2],
            vec![-2, -3],
            vec![-1, -3],
            vec![2, -4],
            vec![4, 5, -1],
        ];
        let formula = Formula::from_clauses(&clauses).unwrap();
        let mut counters = Counters::default();

        let (satisfiable, assignment) = search_formula(
            &formula,
            SearchConfig::default(),
            &Interrupt::default(),
            &mut counters,
        )
        .unwrap();

        assert!(satisfiable);
        for clause in &clauses {
            assert!(clause.iter().any(|literal| assignment.is_true(*literal)));
        }
    }

    #[test]
    fn interrupted() {
        let interrupt = Interrupt::default();
        interrupt.raise();

        let formula = Formula::from_clauses(classic()).unwrap();
        let mut counters = Counters::default();
        let result = search_formula(&formula, SearchConfig::default(), &interrupt, &mut counters);

        assert!(matches!(result, Err(SolveError::Interrupted)));
    }
}

mod resolution {

    use super::*;

    #[test]
    fn complementary_units() {
        assert_eq!(resolve(&vec![1], &vec![-1]), vec![Vec::<i32>::new()]);

        let mut counters = Counters::default();
        let result = saturate(&[vec![1], vec![-1]], &Interrupt::default(), 1, &mut counters);
        assert_eq!(result, Ok(false));
    }

    #[test]
    fn classic_unsatisfiable() {
        let mut counters = Counters::default();
        let result = saturate(&classic(), &Interrupt::default(), 16, &mut counters);
        assert_eq!(result, Ok(false));
    }

    #[test]
    fn tautologies_discarded() {
        assert!(resolve(&vec![1, 2], &vec![-1, -2]).is_empty());
        assert_eq!(resolve(&vec![1, 2], &vec![-1, 3]), vec![vec![2, 3]]);
    }

    #[test]
    fn resolvents_canonical() {
        assert_eq!(resolve(&vec![3, 1, -2], &vec![-1, 2, 4]).len(), 0);
        assert_eq!(resolve(&vec![3, 1], &vec![-1, -2, 3]), vec![vec![-2, 3]]);
    }

    #[test]
    fn satisfiable_fixpoint() {
        let mut counters = Counters::default();
        let result = saturate(
            &[vec![1, 2], vec![-1, 2]],
            &Interrupt::default(),
            16,
            &mut counters,
        );

        assert_eq!(result, Ok(true));
        assert_eq!(counters.rounds, 2);
        assert_eq!(counters.resolvents, 1);
    }

    #[test]
    fn no_clauses() {
        let mut counters = Counters::default();
        assert_eq!(
            saturate(&[], &Interrupt::default(), 16, &mut counters),
            Ok(true)
        );
    }

    #[test]
    fn empty_input_clause() {
        let mut counters = Counters::default();
        let result = saturate(&[vec![1], vec![]], &Interrupt::default(), 16, &mut counters);

        assert_eq!(result, Ok(false));
        assert_eq!(counters.rounds, 0);
    }

    #[test]
    fn interrupted() {
        let interrupt = Interrupt::default();
        interrupt.raise();

        let mut counters = Counters::default();
        let result = saturate(&classic(), &interrupt, 16, &mut counters);
        assert_eq!(result, Err(SolveError::Interrupted));
    }
}
