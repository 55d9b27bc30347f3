//! Implication graph over the `2n` literals of a formula.
//!
//! Vertices live in an arena: the positive literal `v` sits at index `v - 1` and its negation
//! at `n + v - 1`. Every vertex exists from construction on, including literals no clause
//! mentions. Edges are stored twice, once in each orientation.

use crate::formula::{Clause, Formula, Literal, Variable};

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct VertexIdx(pub(crate) usize);

impl VertexIdx {
    pub fn index(&self) -> usize {
        self.0
    }
}

#[derive(Clone, Debug)]
pub struct ImplicationGraph {
    num_variables: usize,
    forward: Vec<Vec<VertexIdx>>,
    transposed: Vec<Vec<VertexIdx>>,
}

impl ImplicationGraph {
    /// A graph with a vertex for every literal of `num_variables` variables and no edges.
    pub fn new(num_variables: usize) -> Self {
        Self {
            num_variables,
            forward: vec![vec![]; 2 * num_variables],
            transposed: vec![vec![]; 2 * num_variables],
        }
    }

    pub fn from_formula(formula: &Formula) -> Self {
        let mut graph = Self::new(formula.num_variables());
        for clause in formula.clauses() {
            graph.add_clause(clause);
        }
        graph
    }

    /// Adds `!a -> b` and `!b -> a` for the clause `(a | b)`.
    ///
    /// The clause's literals must be within range, which `Formula` guarantees.
    pub fn add_clause(&mut self, clause: &Clause) {
        let a = clause.first();
        let b = clause.second();
        self.add_implication(self.idx(&a.negated()), self.idx(&b));
        self.add_implication(self.idx(&b.negated()), self.idx(&a));
    }

    pub fn add_implication(&mut self, from: VertexIdx, to: VertexIdx) {
        self.forward[from.0].push(to);
        self.transposed[to.0].push(from);
    }

    /// The vertex of `literal`, or `None` if its variable is out of range.
    pub fn vertex(&self, literal: &Literal) -> Option<VertexIdx> {
        if (1..=self.num_variables).contains(&literal.idx()) {
            Some(self.idx(literal))
        } else {
            None
        }
    }

    pub(crate) fn idx(&self, literal: &Literal) -> VertexIdx {
        debug_assert!((1..=self.num_variables).contains(&literal.idx()));
        vertex_for(literal, self.num_variables)
    }

    pub fn literal(&self, vertex: VertexIdx) -> Literal {
        literal_for(vertex, self.num_variables)
    }

    pub fn successors(&self, vertex: VertexIdx) -> &[VertexIdx] {
        &self.forward[vertex.0]
    }

    pub fn predecessors(&self, vertex: VertexIdx) -> &[VertexIdx] {
        &self.transposed[vertex.0]
    }

    pub fn vertices(&self) -> impl Iterator<Item = VertexIdx> {
        (0..self.num_vertices()).map(VertexIdx)
    }

    pub fn num_variables(&self) -> usize {
        self.num_variables
    }

    pub fn num_vertices(&self) -> usize {
        self.forward.len()
    }

    pub fn num_edges(&self) -> usize {
        self.forward.iter().map(Vec::len).sum()
    }
}

pub(crate) fn vertex_for(literal: &Literal, num_variables: usize) -> VertexIdx {
    match literal {
        Literal::Positive(v) => VertexIdx(v.0 - 1),
        Literal::Negative(v) => VertexIdx(num_variables + v.0 - 1),
    }
}

pub(crate) fn literal_for(vertex: VertexIdx, num_variables: usize) -> Literal {
    if vertex.0 < num_variables {
        Literal::Positive(Variable(vertex.0 + 1))
    } else {
        Literal::Negative(Variable(vertex.0 - num_variables + 1))
    }
}
