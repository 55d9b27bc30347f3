use crate::components::Components;
use crate::formula::Formula;
use crate::graph::{ImplicationGraph, VertexIdx};
use crate::SatResult;
use log::{debug, trace};

/// Decides a 2-SAT formula by finding the strongly connected components of its implication
/// graph (Kosaraju): the formula is unsatisfiable exactly when some variable shares a component
/// with its own negation.
pub struct Solver {
    graph: ImplicationGraph,
    components: Option<Components>,
}

/// Vertices in the order their depth-first exploration finished.
#[derive(Debug, Clone)]
pub struct FinishOrder {
    sequence: Vec<VertexIdx>,
    position: Vec<usize>,
}

impl FinishOrder {
    pub fn sequence(&self) -> &[VertexIdx] {
        &self.sequence
    }

    pub fn position(&self, vertex: VertexIdx) -> usize {
        self.position[vertex.index()]
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}

impl Solver {
    pub fn new(formula: Formula) -> Self {
        let graph = ImplicationGraph::from_formula(&formula);
        debug!(
            "implication graph: {} vertices, {} edges from {} clauses",
            graph.num_vertices(),
            graph.num_edges(),
            formula.num_clauses()
        );
        Self {
            graph,
            components: None,
        }
    }

    pub fn graph(&self) -> &ImplicationGraph {
        &self.graph
    }

    pub fn solve(&mut self) -> SatResult {
        let order = self.finish_order();
        let components = self.discover_components(&order);
        let result = match components.contradiction() {
            Some(variable) => {
                debug!("variable {} shares a component with its negation", variable.0);
                SatResult::Unsatisfiable
            }
            None => SatResult::Satisfiable,
        };
        self.components = Some(components);
        result
    }

    /// Components found by the most recent `solve`.
    pub fn components(&self) -> Option<&Components> {
        self.components.as_ref()
    }

    /// Depth-first search over the transposed graph from every unexplored vertex in turn,
    /// recording each vertex once all of its predecessors have been explored.
    pub fn finish_order(&self) -> FinishOrder {
        let graph = &self.graph;
        let mut explored = vec![false; graph.num_vertices()];
        let mut sequence = Vec::with_capacity(graph.num_vertices());
        // (vertex, index of the next in-edge to follow)
        let mut stack: Vec<(VertexIdx, usize)> = vec![];

        for root in graph.vertices() {
            if explored[root.index()] {
                continue;
            }
            explored[root.index()] = true;
            stack.push((root, 0));

            while let Some((vertex, next)) = stack.last_mut() {
                let vertex = *vertex;
                match graph.predecessors(vertex).get(*next) {
                    Some(&w) => {
                        *next += 1;
                        if !explored[w.index()] {
                            explored[w.index()] = true;
                            stack.push((w, 0));
                        }
                    }
                    None => {
                        stack.pop();
                        sequence.push(vertex);
                    }
                }
            }
        }

        let mut position = vec![0; sequence.len()];
        for (t, vertex) in sequence.iter().enumerate() {
            position[vertex.index()] = t;
        }
        debug!("finish order covers {} vertices", sequence.len());

        FinishOrder { sequence, position }
    }

    /// Depth-first search over the forward graph, starting from vertices in decreasing finish
    /// order. Each search that starts at an unexplored vertex claims everything it reaches that
    /// no earlier search claimed, with the start vertex as leader.
    pub fn discover_components(&self, order: &FinishOrder) -> Components {
        let graph = &self.graph;
        let mut explored = vec![false; graph.num_vertices()];
        let mut leaders = vec![None; graph.num_vertices()];
        let mut stack = vec![];

        for &root in order.sequence().iter().rev() {
            if explored[root.index()] {
                continue;
            }
            trace!("leader {}", graph.literal(root));
            explored[root.index()] = true;
            stack.push(root);

            while let Some(vertex) = stack.pop() {
                leaders[vertex.index()] = Some(root);
                for &w in graph.successors(vertex) {
                    if !explored[w.index()] {
                        explored[w.index()] = true;
                        stack.push(w);
                    }
                }
            }
        }

        debug_assert!(leaders.iter().all(Option::is_some));
        Components::new(graph.num_variables(), leaders.into_iter().flatten().collect())
    }
}
