/*!
Uniform random k-CNF formulas.

Each clause draws k distinct atoms uniformly from 1..=atom_count, each with
uniformly random polarity. Random formulas at a clause/atom ratio above the
3-CNF satisfiability threshold (≈4.26) are mostly unsatisfiable, which the
test suite leans on.
*/

use rand::Rng;

use crate::structures::{clause::CClause, formula::Formula, literal::CLiteral};

/// A uniform random k-CNF formula over the given stream.
pub fn random_k_cnf<R: Rng>(
    rng: &mut R,
    atom_count: u32,
    clause_count: usize,
    k: usize,
) -> Formula {
    assert!(
        k as u32 <= atom_count,
        "a clause of {k} distinct atoms needs as many atoms"
    );

    let mut formula = Formula::new();
    while formula.clause_count() < clause_count {
        let mut clause = CClause::with_capacity(k);
        while clause.len() < k {
            let atom = rng.gen_range(1..=atom_count);
            let polarity = rng.gen_bool(0.5);
            if !clause.iter().any(|literal| literal.atom() == atom) {
                clause.push(CLiteral::new(atom, polarity));
            }
        }
        formula.add_clause(clause);
    }

    formula
}

#[cfg(test)]
mod random_tests {
    use super::*;
    use crate::generic::pcg::Pcg32;
    use rand::SeedableRng;

    #[test]
    fn shape() {
        let mut rng = Pcg32::seed_from_u64(7);
        let formula = random_k_cnf(&mut rng, 20, 86, 3);

        assert_eq!(formula.clause_count(), 86);
        for clause in formula.clauses() {
            assert_eq!(clause.len(), 3);
            let mut atoms = clause.iter().map(|literal| literal.atom()).collect::<Vec<_>>();
            atoms.sort_unstable();
            atoms.dedup();
            assert_eq!(atoms.len(), 3);
        }
        assert!(formula.atom_max() <= 20);
    }

    #[test]
    fn reproducible_for_a_seed() {
        let mut first_rng = Pcg32::seed_from_u64(11);
        let mut second_rng = Pcg32::seed_from_u64(11);
        let first = random_k_cnf(&mut first_rng, 12, 30, 3);
        let second = random_k_cnf(&mut second_rng, 12, 30, 3);

        assert_eq!(first.as_dimacs(), second.as_dimacs());
    }
}
