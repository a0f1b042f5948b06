/*!
Conflict analysis: from an empty live clause to a learnt clause.

# Overview

When unit propagation empties the live set of some clause the assignment
prefix which led there cannot be extended to a satisfying assignment, and
the implication graph is analysed to learn a clause recording the cause:

1. A synthetic [conflict vertex](VertexId::Conflict) is added at the
   current level, with an edge from the negation of every literal of the
   conflicting clause's *original* literal set.
2. Considering every directed path from the most recent decision vertex to
   the conflict vertex, the first unique implication point (UIP) is the
   vertex on all of those paths which lies closest to the conflict. Rather
   than enumerate the paths, the UIP is obtained as the conflict vertex's
   immediate dominator relative to the decision
   ([closest_common_vertex](ImplicationGraph::closest_common_vertex)).
3. The graph vertices are partitioned: set B holds the vertices which both
   are reachable from the UIP and reach the conflict vertex, set A holds
   every other vertex, the UIP itself included, by fiat.
4. The learnt clause is the negation of every A-vertex with at least one
   edge crossing into B.

The learnt clause is entailed by the formula, is falsified by the
assignment in force at the conflict, and contains the negation of the UIP.

# Degenerate conflicts

A clause restored after a backjump may force literals whose justifying
vertices all lie below the current level, and a conflict reached through
such vertices can be unreachable from the current decision. No UIP exists
then, and an empty clause is returned so the caller can fall back to a
decision-sequence clause (see [cdcl](crate::procedures::cdcl)).
*/

use std::collections::HashSet;

use crate::{
    graph::{ImplicationGraph, VertexId},
    misc::log::targets,
    structures::{clause::CClause, literal::CLiteral},
};

/// Analyses the conflict of the given clause, leaving the conflict vertex in
/// the graph for the subsequent backjump to clear.
///
/// Returns the learnt clause, empty if the analysis was degenerate.
pub(crate) fn learned_clause(
    graph: &mut ImplicationGraph,
    conflict: &CClause,
    last_decision: CLiteral,
    level: usize,
) -> CClause {
    graph.add_vertex(VertexId::Conflict, false, level);
    for literal in conflict {
        graph.add_edge(VertexId::Literal(literal.negate()), VertexId::Conflict);
    }

    let decision_vertex = VertexId::Literal(last_decision);
    let Some(uip) = graph.closest_common_vertex(decision_vertex, VertexId::Conflict) else {
        log::debug!(target: targets::ANALYSIS, "Conflict out of reach of decision {last_decision}");
        return vec![];
    };
    log::debug!(target: targets::ANALYSIS, "UIP {uip}");

    let crossing_set: HashSet<VertexId> = graph
        .vertex_ids()
        .filter(|vertex| {
            *vertex != uip && graph.reaches(uip, *vertex) && graph.reaches(*vertex, VertexId::Conflict)
        })
        .collect();

    let mut learnt = vec![];
    for vertex in graph.vertex_ids() {
        let VertexId::Literal(literal) = vertex else {
            continue;
        };
        if crossing_set.contains(&vertex) {
            continue;
        }
        if graph
            .successors(vertex)
            .iter()
            .any(|successor| crossing_set.contains(successor))
        {
            learnt.push(literal.negate());
        }
    }

    log::debug!(target: targets::ANALYSIS, "Learnt clause {learnt:?}");
    learnt
}

#[cfg(test)]
mod analysis_tests {
    use super::*;

    fn literal(int: i32) -> CLiteral {
        CLiteral::from_int(int).expect("non-zero")
    }

    /// 1 is decided, forcing 2 (clause -1 2), which forces 3 (clause -2 3),
    /// emptying the clause (-2 -3). The UIP is 2 and the learnt clause its
    /// negation.
    #[test]
    fn chain_conflict_learns_uip_negation() {
        let mut graph = ImplicationGraph::new();
        graph.add_vertex(VertexId::Literal(literal(1)), true, 1);
        graph.add_vertex(VertexId::Literal(literal(2)), false, 1);
        graph.add_edge(VertexId::Literal(literal(1)), VertexId::Literal(literal(2)));
        graph.add_vertex(VertexId::Literal(literal(3)), false, 1);
        graph.add_edge(VertexId::Literal(literal(2)), VertexId::Literal(literal(3)));

        let conflict = vec![literal(-2), literal(-3)];
        let learnt = learned_clause(&mut graph, &conflict, literal(1), 1);

        assert_eq!(learnt, vec![literal(-2)]);

        // The learnt clause is falsified by the assignment in force: the
        // negation of each of its literals is on the trail.
        for learnt_literal in &learnt {
            assert!(graph.contains(VertexId::Literal(learnt_literal.negate())));
        }
    }

    /// Forced literals from two levels meet in a conflict: 1 decided at
    /// level 1 forces 2; 3 decided at level 2 forces 4 through (-3 4) and
    /// the clause (-2 -4) empties. The UIP is 4, and the earlier-level
    /// vertex 2 crosses into the conflict side.
    #[test]
    fn cross_level_conflict_keeps_earlier_reason() {
        let mut graph = ImplicationGraph::new();
        graph.add_vertex(VertexId::Literal(literal(1)), true, 1);
        graph.add_vertex(VertexId::Literal(literal(2)), false, 1);
        graph.add_edge(VertexId::Literal(literal(1)), VertexId::Literal(literal(2)));

        graph.add_vertex(VertexId::Literal(literal(3)), true, 2);
        graph.add_vertex(VertexId::Literal(literal(4)), false, 2);
        graph.add_edge(VertexId::Literal(literal(3)), VertexId::Literal(literal(4)));

        let conflict = vec![literal(-2), literal(-4)];
        let learnt = learned_clause(&mut graph, &conflict, literal(3), 2);

        let mut sorted = learnt.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, vec![literal(-2), literal(-4)]);
    }

    /// A conflict with no path from the decision yields no clause.
    #[test]
    fn unreachable_conflict_is_degenerate() {
        let mut graph = ImplicationGraph::new();
        graph.add_vertex(VertexId::Literal(literal(1)), true, 1);
        graph.add_vertex(VertexId::Literal(literal(2)), true, 2);

        let conflict = vec![literal(-1)];
        let learnt = learned_clause(&mut graph, &conflict, literal(2), 2);

        assert!(learnt.is_empty());
    }
}
