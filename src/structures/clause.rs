/*!
Clauses, and the twin original/live representation used during a solve.

A clause is a disjunction of literals. The canonical representation is a
vector of literals ([CClause]). Duplicate literals are logically redundant
but permitted in storage, as nothing requires a clause to be de-duplicated.

# Tracked clauses

During search each clause carries two views at once:

- The **original** literal set, immutable for the lifetime of the solve and
  shared (via [Rc]) with the permanent clause repository. Justifications and
  restoration after a backjump are reconstructed from this view.
- The **live** literal set: the original literals together with one active
  bit per literal position. A literal is deactivated when the search path
  falsifies it, so the live set shrinks monotonically along a path, and is
  recomputed from the valuation when a backjump unassigns an atom beneath
  it. The live set is always a subset of the original set.

Storing active bits beside a shared original avoids reallocating literal
vectors on every simplification step.
*/

use std::rc::Rc;

use crate::structures::{literal::CLiteral, valuation::Valuation};

/// The canonical representation of a clause.
#[allow(non_camel_case_types)]
pub type CClause = Vec<CLiteral>;

/// The clause in DIMACS form: integer literals, zero terminated.
pub fn as_dimacs(clause: &[CLiteral]) -> String {
    let mut string = String::new();
    for literal in clause {
        string.push_str(&format!("{literal} "));
    }
    string.push('0');
    string
}

/// A clause under search: a shared original literal set with an active bit
/// for each literal position.
#[derive(Clone, Debug)]
pub struct TrackedClause {
    /// The original literal set, never mutated.
    source: Rc<CClause>,

    /// One bit per literal position: true while the search path has not
    /// falsified the literal.
    active: Vec<bool>,
}

impl TrackedClause {
    /// A tracked clause with every literal live.
    pub fn fresh(source: Rc<CClause>) -> Self {
        let active = vec![true; source.len()];
        TrackedClause { source, active }
    }

    /// A tracked clause whose live set is computed against the given
    /// valuation: a literal is live exactly when the valuation does not
    /// falsify it.
    pub fn under(source: Rc<CClause>, valuation: &Valuation) -> Self {
        let active = source
            .iter()
            .map(|literal| !valuation.falsifies(*literal))
            .collect();
        TrackedClause { source, active }
    }

    /// Recomputes the live set against the given valuation.
    ///
    /// Equivalent to replacing the clause with [under](TrackedClause::under)
    /// on the same source.
    pub fn refresh_under(&mut self, valuation: &Valuation) {
        for (index, literal) in self.source.iter().enumerate() {
            self.active[index] = !valuation.falsifies(*literal);
        }
    }

    /// The original literal set.
    pub fn source(&self) -> &Rc<CClause> {
        &self.source
    }

    /// The count of live literals.
    pub fn live_len(&self) -> usize {
        self.active.iter().filter(|bit| **bit).count()
    }

    /// An iterator over the live literals, in original order.
    pub fn live_literals(&self) -> impl Iterator<Item = CLiteral> + '_ {
        self.source
            .iter()
            .zip(&self.active)
            .filter_map(|(literal, bit)| match bit {
                true => Some(*literal),
                false => None,
            })
    }

    /// Whether the literal is in the live set.
    pub fn contains_live(&self, literal: CLiteral) -> bool {
        self.live_literals().any(|live| live == literal)
    }

    /// Removes the literal from the live set (at every position it occupies).
    pub fn deactivate(&mut self, literal: CLiteral) {
        for (index, source_literal) in self.source.iter().enumerate() {
            if *source_literal == literal {
                self.active[index] = false;
            }
        }
    }

    /// The sole live literal, if the clause is unit.
    pub fn unit_literal(&self) -> Option<CLiteral> {
        let mut live = self.live_literals();
        let first = live.next()?;
        match live.next() {
            None => Some(first),
            Some(_) => None,
        }
    }
}

/// Simplifies the live clause set on the assumption the given literal holds:
/// every clause whose live set contains the literal is satisfied and removed,
/// and the negation of the literal is pruned from the remaining live sets.
///
/// Original literal sets are untouched. Used identically by every engine.
pub fn simplify_by_literal(literal: CLiteral, clauses: &mut Vec<TrackedClause>) {
    clauses.retain(|clause| !clause.contains_live(literal));
    let negation = literal.negate();
    for clause in clauses.iter_mut() {
        clause.deactivate(negation);
    }
}

#[cfg(test)]
mod clause_tests {
    use super::*;

    fn tracked(ints: &[i32]) -> TrackedClause {
        let literals = ints
            .iter()
            .map(|int| CLiteral::from_int(*int).expect("non-zero"))
            .collect::<CClause>();
        TrackedClause::fresh(Rc::new(literals))
    }

    #[test]
    fn live_shrinks_original_does_not() {
        let mut clause = tracked(&[1, -2, 3]);
        assert_eq!(clause.live_len(), 3);

        clause.deactivate(CLiteral::new(2, false));
        assert_eq!(clause.live_len(), 2);
        assert!(!clause.contains_live(CLiteral::new(2, false)));
        assert_eq!(clause.source().len(), 3);
    }

    #[test]
    fn unit_detection() {
        let mut clause = tracked(&[1, -2]);
        assert!(clause.unit_literal().is_none());

        clause.deactivate(CLiteral::new(1, true));
        assert_eq!(clause.unit_literal(), Some(CLiteral::new(2, false)));

        clause.deactivate(CLiteral::new(2, false));
        assert!(clause.unit_literal().is_none());
        assert_eq!(clause.live_len(), 0);
    }

    #[test]
    fn simplification_removes_and_prunes() {
        let mut clauses = vec![tracked(&[1, 2]), tracked(&[-1, 2]), tracked(&[-2, 3])];

        simplify_by_literal(CLiteral::new(1, true), &mut clauses);

        // [1, 2] is satisfied, -1 is pruned from [-1, 2].
        assert_eq!(clauses.len(), 2);
        assert_eq!(clauses[0].unit_literal(), Some(CLiteral::new(2, true)));
        assert_eq!(clauses[1].live_len(), 2);
    }

    #[test]
    fn dimacs_form() {
        let literals = vec![
            CLiteral::new(1, true),
            CLiteral::new(2, false),
            CLiteral::new(3, true),
        ];
        assert_eq!(as_dimacs(&literals), "1 -2 3 0");
    }
}
