/*!
The implication graph (aka. the trail) built during a CDCL solve.

A mutable directed graph whose vertices are *literals* (not atoms), each
tagged with the decision level it was assigned at and a flag distinguishing
decision vertices (chosen nondeterministically) from implied vertices
(forced by unit propagation). An edge u→v records that the falsity of u
contributed to forcing v.

One further vertex is admitted: the synthetic [conflict
vertex](VertexId::Conflict), introduced during conflict analysis with an
edge from the negation of every literal of the conflicting clause.

The graph is mutated only by adding a vertex, adding an edge between
existing vertices, and removing a vertex (which strips its incident edges).
It is discarded and rebuilt fresh for every independent solve call.

Vertices are stored in a [StableGraph] so removal neither shifts the
indicies held in the side map nor scans the full graph, and the path,
reachability, and dominator queries of conflict analysis are delegated to
[petgraph::algo].
*/

use std::collections::HashMap;

use petgraph::{
    algo::{all_simple_paths, dominators, has_path_connecting},
    stable_graph::{NodeIndex, StableGraph},
};

use crate::{misc::log::targets, structures::literal::CLiteral};

/// The identity of a vertex: a literal on the trail, or the synthetic
/// conflict vertex of an analysis in progress.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum VertexId {
    Literal(CLiteral),
    Conflict,
}

impl std::fmt::Display for VertexId {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Literal(literal) => write!(f, "{literal}"),
            Self::Conflict => write!(f, "⊥"),
        }
    }
}

/// What the graph records about a vertex.
#[derive(Clone, Copy, Debug)]
struct VertexInfo {
    id: VertexId,
    decision: bool,
    level: usize,
}

/// The implication graph.
#[derive(Debug, Default)]
pub struct ImplicationGraph {
    graph: StableGraph<VertexInfo, ()>,
    index: HashMap<VertexId, NodeIndex>,
}

impl ImplicationGraph {
    pub fn new() -> Self {
        ImplicationGraph::default()
    }

    /// Inserts a vertex with no edges, tagged with the given decision flag
    /// and level.
    ///
    /// A no-op returning false if the vertex already exists.
    pub fn add_vertex(&mut self, id: VertexId, decision: bool, level: usize) -> bool {
        if self.index.contains_key(&id) {
            return false;
        }
        let node = self.graph.add_node(VertexInfo {
            id,
            decision,
            level,
        });
        self.index.insert(id, node);
        log::trace!(target: targets::GRAPH, "+Vertex {id} @{level} (decision: {decision})");
        true
    }

    /// Inserts an edge between two existing vertices, reporting false
    /// without effect if either endpoint is absent.
    ///
    /// Idempotent: repeating an edge does not create a parallel edge.
    pub fn add_edge(&mut self, from: VertexId, to: VertexId) -> bool {
        let (Some(from_node), Some(to_node)) = (self.index.get(&from), self.index.get(&to)) else {
            return false;
        };
        self.graph.update_edge(*from_node, *to_node, ());
        log::trace!(target: targets::GRAPH, "+Edge {from} → {to}");
        true
    }

    /// Deletes a vertex, stripping every incident edge. Reports false if the
    /// vertex was absent.
    pub fn remove_vertex(&mut self, id: VertexId) -> bool {
        match self.index.remove(&id) {
            Some(node) => {
                self.graph.remove_node(node);
                log::trace!(target: targets::GRAPH, "-Vertex {id}");
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, id: VertexId) -> bool {
        self.index.contains_key(&id)
    }

    /// The level a vertex was added at, if present.
    pub fn level_of(&self, id: VertexId) -> Option<usize> {
        let node = self.index.get(&id)?;
        self.graph.node_weight(*node).map(|info| info.level)
    }

    /// Whether the vertex records a decision, if present.
    pub fn is_decision(&self, id: VertexId) -> Option<bool> {
        let node = self.index.get(&id)?;
        self.graph.node_weight(*node).map(|info| info.decision)
    }

    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Every simple directed path between two vertices, as vertex identity
    /// sequences including both endpoints.
    ///
    /// Empty if either endpoint is absent, or no path exists.
    pub fn all_paths(&self, from: VertexId, to: VertexId) -> Vec<Vec<VertexId>> {
        let (Some(from_node), Some(to_node)) = (self.index.get(&from), self.index.get(&to)) else {
            return vec![];
        };
        all_simple_paths::<Vec<NodeIndex>, _>(&self.graph, *from_node, *to_node, 0, None)
            .map(|path| {
                path.iter()
                    .map(|node| self.graph[*node].id)
                    .collect::<Vec<_>>()
            })
            .collect()
    }

    /// The vertices of the graph, in insertion order.
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.graph.node_indices().map(|node| self.graph[node].id)
    }

    /// The vertices tagged with a level strictly above the given level.
    pub fn vertices_above(&self, level: usize) -> Vec<VertexId> {
        self.graph
            .node_indices()
            .filter_map(|node| {
                let info = &self.graph[node];
                match info.level > level {
                    true => Some(info.id),
                    false => None,
                }
            })
            .collect()
    }

    /// Whether a directed path connects the two vertices.
    /// Trivially true when the vertices coincide.
    pub(crate) fn reaches(&self, from: VertexId, to: VertexId) -> bool {
        let (Some(from_node), Some(to_node)) = (self.index.get(&from), self.index.get(&to)) else {
            return false;
        };
        has_path_connecting(&self.graph, *from_node, *to_node, None)
    }

    /// The vertex common to every path from `source` to `sink` which lies
    /// closest to `sink`: the immediate dominator of `sink` relative to
    /// `source`.
    ///
    /// Nothing if either vertex is absent or `sink` cannot be reached.
    pub(crate) fn closest_common_vertex(
        &self,
        source: VertexId,
        sink: VertexId,
    ) -> Option<VertexId> {
        let (Some(source_node), Some(sink_node)) = (self.index.get(&source), self.index.get(&sink))
        else {
            return None;
        };
        let dominance = dominators::simple_fast(&self.graph, *source_node);
        dominance
            .immediate_dominator(*sink_node)
            .map(|node| self.graph[node].id)
    }

    /// The successors of a vertex, in edge insertion order.
    pub(crate) fn successors(&self, id: VertexId) -> Vec<VertexId> {
        match self.index.get(&id) {
            Some(node) => self
                .graph
                .neighbors(*node)
                .map(|successor| self.graph[successor].id)
                .collect(),
            None => vec![],
        }
    }
}

#[cfg(test)]
mod graph_tests {
    use super::*;

    fn literal(int: i32) -> VertexId {
        VertexId::Literal(CLiteral::from_int(int).expect("non-zero"))
    }

    #[test]
    fn vertex_insertion_is_idempotent() {
        let mut graph = ImplicationGraph::new();
        assert!(graph.add_vertex(literal(1), true, 1));
        assert!(!graph.add_vertex(literal(1), false, 2));

        // The original tags survive the ignored reinsertion.
        assert_eq!(graph.level_of(literal(1)), Some(1));
        assert_eq!(graph.is_decision(literal(1)), Some(true));
    }

    #[test]
    fn edges_require_both_endpoints() {
        let mut graph = ImplicationGraph::new();
        graph.add_vertex(literal(1), true, 1);

        assert!(!graph.add_edge(literal(1), literal(2)));
        assert!(!graph.add_edge(literal(2), literal(1)));

        graph.add_vertex(literal(2), false, 1);
        assert!(graph.add_edge(literal(1), literal(2)));
    }

    #[test]
    fn removal_strips_incident_edges() {
        let mut graph = ImplicationGraph::new();
        graph.add_vertex(literal(1), true, 1);
        graph.add_vertex(literal(2), false, 1);
        graph.add_vertex(literal(3), false, 1);
        graph.add_edge(literal(1), literal(2));
        graph.add_edge(literal(2), literal(3));

        assert!(graph.remove_vertex(literal(2)));
        assert!(!graph.contains(literal(2)));
        assert!(graph.all_paths(literal(1), literal(3)).is_empty());
        assert!(!graph.remove_vertex(literal(2)));
    }

    #[test]
    fn paths_through_a_diamond() {
        let mut graph = ImplicationGraph::new();
        for (id, decision) in [
            (literal(1), true),
            (literal(2), false),
            (literal(3), false),
            (literal(4), false),
        ] {
            graph.add_vertex(id, decision, 1);
        }
        graph.add_edge(literal(1), literal(2));
        graph.add_edge(literal(1), literal(3));
        graph.add_edge(literal(2), literal(4));
        graph.add_edge(literal(3), literal(4));

        let mut paths = graph.all_paths(literal(1), literal(4));
        paths.sort();
        assert_eq!(
            paths,
            vec![
                vec![literal(1), literal(2), literal(4)],
                vec![literal(1), literal(3), literal(4)],
            ]
        );

        // Both the source and the merge vertex lie on every path; the merge
        // vertex is the closer to the sink.
        assert_eq!(
            graph.closest_common_vertex(literal(1), literal(4)),
            Some(literal(1))
        );

        graph.add_vertex(VertexId::Conflict, false, 1);
        graph.add_edge(literal(4), VertexId::Conflict);
        assert_eq!(
            graph.closest_common_vertex(literal(1), VertexId::Conflict),
            Some(literal(4))
        );
    }

    #[test]
    fn paths_to_absent_vertices_are_empty() {
        let mut graph = ImplicationGraph::new();
        graph.add_vertex(literal(1), true, 1);
        assert!(graph.all_paths(literal(1), VertexId::Conflict).is_empty());
    }
}
