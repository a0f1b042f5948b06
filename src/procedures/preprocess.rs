/*!
Procedures to identify and eliminate pure literals.

A pure literal is an atom appearing with only one polarity across the live
clauses of a formula. Such an atom can be assigned that polarity without
search: doing so satisfies (and removes) every clause the atom appears in
and falsifies nothing.

Elimination repeats to a fixed point, as removing the clauses of one pure
literal may strip the sole occurrences of another atom's opposing polarity.
*/

use std::collections::BTreeSet;

use crate::{
    misc::log::targets,
    structures::{
        atom::Atom,
        clause::{simplify_by_literal, TrackedClause},
        literal::CLiteral,
        valuation::Valuation,
    },
};

// General order for pairs related to booleans is 0 is false, 1 is true.
/// Given live clauses, returns the pure atoms relative to those clauses as a
/// pair: atoms occurring only with negative polarity, then atoms occurring
/// only with positive polarity.
pub fn pure_literals(clauses: &[TrackedClause]) -> (Vec<Atom>, Vec<Atom>) {
    let mut the_true: BTreeSet<Atom> = BTreeSet::new();
    let mut the_false: BTreeSet<Atom> = BTreeSet::new();

    for clause in clauses {
        for literal in clause.live_literals() {
            match literal.polarity() {
                true => the_true.insert(literal.atom()),
                false => the_false.insert(literal.atom()),
            };
        }
    }

    let pure_false: Vec<_> = the_false.difference(&the_true).copied().collect();
    let pure_true: Vec<_> = the_true.difference(&the_false).copied().collect();
    (pure_false, pure_true)
}

/// Assigns every pure literal its sole polarity and simplifies, repeated to
/// a fixed point.
pub fn eliminate_pure(clauses: &mut Vec<TrackedClause>, valuation: &mut Valuation) {
    loop {
        let (pure_false, pure_true) = pure_literals(clauses);
        if pure_false.is_empty() && pure_true.is_empty() {
            break;
        }

        for (atoms, polarity) in [(pure_false, false), (pure_true, true)] {
            for atom in atoms {
                let literal = CLiteral::new(atom, polarity);
                log::debug!(target: targets::PREPROCESSING, "Pure literal {literal}");
                valuation.set(literal);
                simplify_by_literal(literal, clauses);
            }
        }
    }
}
