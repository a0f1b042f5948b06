/*!
Backjumping: unwinding the trail to the level a learnt clause asserts at.

The target is the second-highest distinct decision level among the literals
of the learnt clause, or level zero when the clause spans fewer than two
levels. Every vertex above the target is removed from the graph, the atoms
beneath the removed literal vertices are unassigned, live clauses are
refreshed against the reduced valuation, and clauses of the permanent
repository mentioning a freed atom are restored to the live set so later
propagation sees them again.

A restored clause would be inert (or worse, misread as falsified) if some
still-assigned literal already satisfies it, so satisfied clauses are left
out of the live set; they return if their satisfying assignment is later
undone.
*/

use std::collections::{BTreeSet, HashSet};
use std::rc::Rc;

use crate::{
    graph::{ImplicationGraph, VertexId},
    misc::log::targets,
    structures::{
        atom::Atom,
        clause::{CClause, TrackedClause},
        literal::CLiteral,
        valuation::Valuation,
    },
};

/// The second-highest distinct level among the (negations of the) literals
/// of the learnt clause, or zero below two distinct levels.
pub(crate) fn backjump_level(graph: &ImplicationGraph, learnt: &[CLiteral]) -> usize {
    let mut levels: BTreeSet<usize> = BTreeSet::new();
    for literal in learnt {
        if let Some(level) = graph.level_of(VertexId::Literal(literal.negate())) {
            levels.insert(level);
        }
    }

    let mut descending = levels.into_iter().rev();
    match (descending.next(), descending.next()) {
        (Some(_), Some(second_highest)) => second_highest,
        _ => 0,
    }
}

/// Unwinds decisions, assignments, graph vertices, and the live clause set
/// to the given level.
pub(crate) fn backjump(
    target: usize,
    graph: &mut ImplicationGraph,
    valuation: &mut Valuation,
    live: &mut Vec<TrackedClause>,
    decisions: &mut Vec<CLiteral>,
    permanent: &[Rc<CClause>],
) {
    log::debug!(target: targets::BACKJUMP, "Backjump to level {target}");

    let mut freed: HashSet<Atom> = HashSet::new();
    for vertex in graph.vertices_above(target) {
        graph.remove_vertex(vertex);
        if let VertexId::Literal(literal) = vertex {
            valuation.clear(literal.atom());
            freed.insert(literal.atom());
        }
    }
    decisions.truncate(target);

    for clause in live.iter_mut() {
        clause.refresh_under(valuation);
    }

    for source in permanent {
        if !source.iter().any(|literal| freed.contains(&literal.atom())) {
            continue;
        }
        if live.iter().any(|clause| Rc::ptr_eq(clause.source(), source)) {
            continue;
        }
        if valuation.satisfies_clause(source) {
            continue;
        }
        live.push(TrackedClause::under(source.clone(), valuation));
    }
}
