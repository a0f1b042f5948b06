/*!
The DPLL engines: one backtracking skeleton, three decision rules.

# Overview

A branch of the search owns a snapshot of the live clauses and the
valuation. Taking a branch runs unit propagation to a fixed point and then
checks for termination:

- No live clauses: every original clause is satisfied, and the (totalised)
  valuation is returned.
- An empty live clause: the branch is falsified, and search resumes from
  the most recently deferred branch.

Otherwise a decision literal is chosen and two successor branches are
staged: the chosen literal first, its negation to be explored only if the
whole subtree under the chosen literal is falsified.

The recursion of the textbook presentation is replaced by an explicit stack
of deferred branches, so the depth of the search is not bounded by the call
stack.

# Decision rules

- [Random](DecisionHeuristic::Random): a uniformly random unassigned atom,
  with polarity drawn from the configured lean.
- [TwoClause](DecisionHeuristic::TwoClause): the atom occurring most often
  among live two-literal clauses (ties to the first encountered), positive
  branch first; the random rule when no two-literal clause is live.
- [ShortestClause](DecisionHeuristic::ShortestClause): a uniformly random
  live literal of the (first) shortest live clause, branching on the
  literal's own sign first. Solves with this rule begin with pure literal
  elimination (see [preprocess](crate::procedures::preprocess)).

# Budget

Every branch taken counts one iteration. With the timeout flag set, a solve
which exceeds [Config::iteration_limit](crate::config::Config) returns
[TimedOut](Report::TimedOut) in place of an answer.
*/

use std::time::Instant;

use rand::Rng;

use crate::{
    context::GenericContext,
    misc::log::targets,
    procedures::preprocess,
    reports::{Report, SolveReport},
    structures::{
        atom::Atom,
        clause::{simplify_by_literal, TrackedClause},
        literal::CLiteral,
        valuation::Valuation,
    },
};

/// The decision rule of a DPLL solve.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DecisionHeuristic {
    Random,
    TwoClause,
    ShortestClause,
}

/// A deferred branch of the search.
struct Branch {
    clauses: Vec<TrackedClause>,
    valuation: Valuation,
}

impl<R: rand::Rng + rand::SeedableRng> GenericContext<R> {
    /// Determines the satisfiability of the formula of the context by
    /// backtracking search under the given decision rule.
    pub(crate) fn dpll_search(
        &mut self,
        heuristic: DecisionHeuristic,
        timeout: bool,
    ) -> SolveReport {
        let start = Instant::now();
        let limit = self.config.iteration_limit;
        let lean = self.config.polarity_lean;
        let mut iterations = 0;

        let mut clauses = self.formula.tracked_clauses();
        let mut valuation = Valuation::new(self.formula.atom_max());

        if heuristic == DecisionHeuristic::ShortestClause {
            preprocess::eliminate_pure(&mut clauses, &mut valuation);
        }

        let mut branches = vec![Branch { clauses, valuation }];

        while let Some(branch) = branches.pop() {
            let Branch {
                mut clauses,
                mut valuation,
            } = branch;

            iterations += 1;
            if timeout && iterations > limit {
                return SolveReport::new(Report::TimedOut, iterations, start.elapsed());
            }

            propagate_units(&mut clauses, &mut valuation);

            if clauses.is_empty() {
                valuation.totalise(self.formula.atoms());
                return SolveReport::new(
                    Report::Satisfiable(valuation),
                    iterations,
                    start.elapsed(),
                );
            }

            if clauses.iter().any(|clause| clause.live_len() == 0) {
                continue;
            }

            let decision = match heuristic {
                DecisionHeuristic::Random => {
                    random_decision(&mut self.rng, lean, self.formula.atoms(), &valuation)
                }

                DecisionHeuristic::TwoClause => two_clause_decision(&clauses).or_else(|| {
                    random_decision(&mut self.rng, lean, self.formula.atoms(), &valuation)
                }),

                DecisionHeuristic::ShortestClause => {
                    shortest_clause_decision(&mut self.rng, &clauses)
                }
            };

            // Live clauses remain with nothing left to decide on.
            let Some(decision) = decision else {
                continue;
            };
            log::trace!(target: targets::DECISION, "Branching on {decision}");

            for literal in [decision.negate(), decision] {
                let mut branch_clauses = clauses.clone();
                let mut branch_valuation = valuation.clone();
                branch_valuation.set(literal);
                simplify_by_literal(literal, &mut branch_clauses);
                branches.push(Branch {
                    clauses: branch_clauses,
                    valuation: branch_valuation,
                });
            }
        }

        SolveReport::new(Report::Unsatisfiable, iterations, start.elapsed())
    }
}

/// Unit propagation to a fixed point: while some live clause is unit, the
/// sole live literal is forced and the clause set simplified by it.
fn propagate_units(clauses: &mut Vec<TrackedClause>, valuation: &mut Valuation) {
    while let Some(unit) = clauses.iter().find_map(TrackedClause::unit_literal) {
        // Simplification strips assigned atoms from every live set, so the
        // atom of a unit literal is always unassigned.
        debug_assert!(valuation.of(unit.atom()).is_none());
        log::trace!(target: targets::PROPAGATION, "Forced {unit}");
        valuation.set(unit);
        simplify_by_literal(unit, clauses);
    }
}

/// A uniformly random unassigned atom with polarity drawn from the lean, or
/// nothing if every atom is assigned.
fn random_decision<R: Rng>(
    rng: &mut R,
    polarity_lean: f64,
    atoms: &[Atom],
    valuation: &Valuation,
) -> Option<CLiteral> {
    let unassigned: Vec<Atom> = atoms
        .iter()
        .copied()
        .filter(|atom| valuation.of(*atom).is_none())
        .collect();
    if unassigned.is_empty() {
        return None;
    }
    let atom = unassigned[rng.gen_range(0..unassigned.len())];
    Some(CLiteral::new(atom, rng.gen_bool(polarity_lean)))
}

/// The atom occurring most often among live two-literal clauses, asserted
/// positively, or nothing if no two-literal clause is live.
///
/// Counts are kept in encounter order and ties resolve to the earlier atom,
/// so the rule is deterministic for a fixed clause order.
fn two_clause_decision(clauses: &[TrackedClause]) -> Option<CLiteral> {
    let mut occurrences: Vec<(Atom, usize)> = Vec::new();
    for clause in clauses.iter().filter(|clause| clause.live_len() == 2) {
        for literal in clause.live_literals() {
            match occurrences
                .iter_mut()
                .find(|(atom, _)| *atom == literal.atom())
            {
                Some((_, count)) => *count += 1,
                None => occurrences.push((literal.atom(), 1)),
            }
        }
    }

    let mut best: Option<(Atom, usize)> = None;
    for (atom, count) in occurrences {
        if best.map_or(true, |(_, best_count)| count > best_count) {
            best = Some((atom, count));
        }
    }
    best.map(|(atom, _)| CLiteral::new(atom, true))
}

/// A uniformly random live literal of the (first) shortest live clause,
/// with its own sign.
fn shortest_clause_decision<R: Rng>(rng: &mut R, clauses: &[TrackedClause]) -> Option<CLiteral> {
    let shortest = clauses.iter().min_by_key(|clause| clause.live_len())?;
    let live: Vec<CLiteral> = shortest.live_literals().collect();
    Some(live[rng.gen_range(0..live.len())])
}

#[cfg(test)]
mod dpll_tests {
    use super::*;
    use std::rc::Rc;

    fn tracked(clauses: &[&[i32]]) -> Vec<TrackedClause> {
        clauses
            .iter()
            .map(|ints| {
                let literals = ints
                    .iter()
                    .map(|int| CLiteral::from_int(*int).expect("non-zero"))
                    .collect();
                TrackedClause::fresh(Rc::new(literals))
            })
            .collect()
    }

    #[test]
    fn propagation_chains() {
        let mut clauses = tracked(&[&[1], &[-1, 2], &[-2, 3]]);
        let mut valuation = Valuation::new(3);

        propagate_units(&mut clauses, &mut valuation);

        assert!(clauses.is_empty());
        assert_eq!(valuation.of(1), Some(true));
        assert_eq!(valuation.of(2), Some(true));
        assert_eq!(valuation.of(3), Some(true));
    }

    #[test]
    fn propagation_exposes_an_empty_clause() {
        let mut clauses = tracked(&[&[1], &[-1]]);
        let mut valuation = Valuation::new(1);

        propagate_units(&mut clauses, &mut valuation);

        assert_eq!(clauses.len(), 1);
        assert_eq!(clauses[0].live_len(), 0);
    }

    #[test]
    fn two_clause_counts_live_pairs_only() {
        // 2 occurs in both live pairs, 1 and 3 in one each; the triple is
        // ignored by the rule.
        let clauses = tracked(&[&[1, 2], &[-2, 3], &[1, 3, 4]]);
        assert_eq!(two_clause_decision(&clauses), Some(CLiteral::new(2, true)));

        let no_pairs = tracked(&[&[1, 2, 3]]);
        assert_eq!(two_clause_decision(&no_pairs), None);
    }

    #[test]
    fn two_clause_tie_takes_first_encountered() {
        let clauses = tracked(&[&[3, 1], &[3, 1]]);
        assert_eq!(two_clause_decision(&clauses), Some(CLiteral::new(3, true)));
    }
}
