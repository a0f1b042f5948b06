use stoat_sat::{
    config::{Config, Engine},
    context::Context,
    reports::Report,
};

const ENGINES: [Engine; 4] = [
    Engine::RandomDpll,
    Engine::TwoClauseDpll,
    Engine::OptimizedDpll,
    Engine::Cdcl,
];

fn context_over(clauses: &[&[i32]]) -> Context {
    let mut the_context = Context::from_config(Config::default());
    for clause in clauses {
        the_context
            .add_clause_ints(clause)
            .expect("well-formed clause");
    }
    the_context
}

mod basic {
    use super::*;

    #[test]
    fn chained_implications_are_satisfiable() {
        let clauses: &[&[i32]] = &[&[1], &[-1, 2], &[1, -2, 3], &[-3, -4], &[-3, -2]];

        for engine in ENGINES {
            let mut ctx = context_over(clauses);
            let outcome = ctx.solve_with(engine, true);

            let Report::Satisfiable(valuation) = outcome.report else {
                panic!("{engine} failed a satisfiable formula");
            };
            assert!(
                ctx.formula.satisfied_by(&valuation),
                "{engine} returned a non-satisfying valuation"
            );
        }
    }

    #[test]
    fn contradictory_units_are_unsatisfiable() {
        for engine in ENGINES {
            let mut ctx = context_over(&[&[1], &[-1]]);
            let outcome = ctx.solve_with(engine, true);
            assert_eq!(outcome.report, Report::Unsatisfiable, "{engine}");
        }
    }

    #[test]
    fn all_polarity_pairs_are_unsatisfiable() {
        for engine in ENGINES {
            let mut ctx = context_over(&[&[1, 2], &[-1, 2], &[1, -2], &[-1, -2]]);
            let outcome = ctx.solve_with(engine, true);
            assert_eq!(outcome.report, Report::Unsatisfiable, "{engine}");
        }
    }

    #[test]
    fn a_lone_unit_is_assigned_true() {
        for engine in ENGINES {
            let mut ctx = context_over(&[&[5]]);
            let outcome = ctx.solve_with(engine, true);

            let Report::Satisfiable(valuation) = outcome.report else {
                panic!("{engine} failed a unit formula");
            };
            assert_eq!(valuation.of(5), Some(true), "{engine}");
        }
    }

    #[test]
    fn satisfying_valuations_are_total() {
        // Atom 4 is unconstrained once 3 is false, but still receives a
        // value.
        let clauses: &[&[i32]] = &[&[1], &[-1, 2], &[1, -2, 3], &[-3, -4], &[-3, -2]];

        for engine in ENGINES {
            let mut ctx = context_over(clauses);
            let outcome = ctx.solve_with(engine, true);

            let Report::Satisfiable(valuation) = outcome.report else {
                panic!("{engine} failed a satisfiable formula");
            };
            for atom in ctx.formula.atoms() {
                assert!(valuation.of(*atom).is_some(), "{engine} left {atom} open");
            }
        }
    }

    #[test]
    fn the_empty_formula_is_satisfiable() {
        for engine in ENGINES {
            let mut ctx = context_over(&[]);
            let outcome = ctx.solve_with(engine, true);
            assert!(outcome.report.is_satisfiable(), "{engine}");
        }
    }
}
