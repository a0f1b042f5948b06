/*!
The conflict-driven clause-learning engine.

# Overview

A state machine over decision levels, level 0 being the state before any
decision. One pass of the loop is:

- **Conflicts**: while some live clause has an empty live set, analyse it
  against the implication graph ([analysis](crate::procedures::analysis)),
  learn the resulting clause, [backjump](crate::procedures::backjump) to
  the level it asserts at, and re-run propagation. A conflict with no
  decisions on the trail settles the formula as unsatisfiable.
- **Terminal check**: with every atom assigned and no live clause
  remaining, the valuation satisfies the formula.
- **Decide**: a uniformly random unassigned atom is assigned a random
  polarity at a fresh level, recorded as a decision vertex, and
  propagation runs.

Propagation records every forced literal as an implied vertex at the
current level, with an edge from the negation of every other literal of the
justifying clause's original literal set. Edges whose source vertex is not
on the trail (a literal falsified before the trail began, through
preprocessing) are skipped by the graph's fail-soft edge contract.

# Preprocessing

Pure literal elimination to a fixed point, then unit propagation at level
0. Pure assignments need no justification and are not recorded in the
graph; level 0 propagations are.

# Learning fallback

When analysis is degenerate (see [analysis](crate::procedures::analysis)),
or the learnt clause fails to assert below the current level, the engine
learns the negation of the current decision sequence instead and backjumps
one level. The weaker clause keeps the solve sound and strictly decreasing
in level over a run of consecutive conflicts, so the loop cannot stall.
*/

use std::rc::Rc;
use std::time::Instant;

use crate::{
    context::GenericContext,
    graph::{ImplicationGraph, VertexId},
    misc::log::targets,
    procedures::{analysis, backjump, preprocess},
    reports::{Report, SolveReport},
    structures::{
        atom::Atom,
        clause::{simplify_by_literal, TrackedClause},
        literal::CLiteral,
        valuation::Valuation,
    },
};

impl<R: rand::Rng + rand::SeedableRng> GenericContext<R> {
    /// Determines the satisfiability of the formula of the context by
    /// conflict-driven clause-learning.
    pub(crate) fn cdcl_search(&mut self, timeout: bool) -> SolveReport {
        let start = Instant::now();
        let limit = self.config.iteration_limit;
        let lean = self.config.polarity_lean;
        let mut iterations = 0;

        let mut live = self.formula.tracked_clauses();
        let mut permanent = self.formula.permanent_clauses();
        let mut valuation = Valuation::new(self.formula.atom_max());
        let mut graph = ImplicationGraph::new();
        let mut decisions: Vec<CLiteral> = Vec::new();
        let mut level: usize = 0;

        preprocess::eliminate_pure(&mut live, &mut valuation);
        propagate_recorded(&mut live, &mut valuation, &mut graph, level);

        loop {
            iterations += 1;
            if timeout && iterations > limit {
                return SolveReport::new(Report::TimedOut, iterations, start.elapsed());
            }

            while let Some(position) = live.iter().position(|clause| clause.live_len() == 0) {
                // A conflict forced by level 0 facts alone settles the
                // formula.
                let Some(last_decision) = decisions.last().copied() else {
                    return SolveReport::new(Report::Unsatisfiable, iterations, start.elapsed());
                };

                let conflict_source = live[position].source().clone();
                log::debug!(target: targets::ANALYSIS, "Conflict in {conflict_source:?} at level {level}");

                let mut learnt =
                    analysis::learned_clause(&mut graph, &conflict_source, last_decision, level);
                let mut target = backjump::backjump_level(&graph, &learnt);

                if learnt.is_empty() || target >= level {
                    log::debug!(target: targets::ANALYSIS, "Degenerate analysis, negating the decision sequence");
                    learnt = decisions.iter().map(CLiteral::negate).collect();
                    target = level - 1;
                }

                backjump::backjump(
                    target,
                    &mut graph,
                    &mut valuation,
                    &mut live,
                    &mut decisions,
                    &permanent,
                );
                level = target;

                let source = Rc::new(learnt);
                permanent.push(source.clone());
                live.push(TrackedClause::under(source, &valuation));

                propagate_recorded(&mut live, &mut valuation, &mut graph, level);
            }

            let unassigned: Vec<Atom> = self
                .formula
                .atoms()
                .iter()
                .copied()
                .filter(|atom| valuation.of(*atom).is_none())
                .collect();

            if unassigned.is_empty() {
                // With conflicts handled eagerly a full valuation leaves no
                // live clause behind.
                debug_assert!(live.is_empty());
                let report = match live.is_empty() {
                    true => Report::Satisfiable(valuation),
                    false => Report::Unsatisfiable,
                };
                return SolveReport::new(report, iterations, start.elapsed());
            }

            let atom = unassigned[self.rng.gen_range(0..unassigned.len())];
            let decision = CLiteral::new(atom, self.rng.gen_bool(lean));
            level += 1;
            log::trace!(target: targets::DECISION, "Decision {decision} at level {level}");

            graph.add_vertex(VertexId::Literal(decision), true, level);
            decisions.push(decision);
            valuation.set(decision);
            simplify_by_literal(decision, &mut live);

            propagate_recorded(&mut live, &mut valuation, &mut graph, level);
        }
    }
}

/// Unit propagation to a fixed point, recording each forced literal as an
/// implied vertex at the given level justified by its (now unit) clause.
fn propagate_recorded(
    clauses: &mut Vec<TrackedClause>,
    valuation: &mut Valuation,
    graph: &mut ImplicationGraph,
    level: usize,
) {
    loop {
        let Some((unit, source)) = clauses.iter().find_map(|clause| {
            clause
                .unit_literal()
                .map(|literal| (literal, clause.source().clone()))
        }) else {
            break;
        };

        // Live literals are never assigned: simplification strips assigned
        // atoms, and clause restoration recomputes live sets.
        debug_assert!(valuation.of(unit.atom()).is_none());
        log::trace!(target: targets::PROPAGATION, "Forced {unit} at level {level}");

        graph.add_vertex(VertexId::Literal(unit), false, level);
        for literal in source.iter().filter(|literal| **literal != unit) {
            graph.add_edge(VertexId::Literal(literal.negate()), VertexId::Literal(unit));
        }

        valuation.set(unit);
        simplify_by_literal(unit, clauses);
    }
}
