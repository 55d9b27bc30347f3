use crate::formula::{Literal, Variable};
use crate::graph::{literal_for, vertex_for, VertexIdx};

/// Strongly connected components of an implication graph, as one leader per literal.
///
/// Leaders partition the literals: every literal has exactly one, and a leader is a member of
/// its own component.
#[derive(Clone, Debug)]
pub struct Components {
    num_variables: usize,
    leaders: Vec<VertexIdx>,
}

impl Components {
    pub(crate) fn new(num_variables: usize, leaders: Vec<VertexIdx>) -> Self {
        debug_assert_eq!(leaders.len(), 2 * num_variables);
        Self {
            num_variables,
            leaders,
        }
    }

    pub fn num_variables(&self) -> usize {
        self.num_variables
    }

    /// Panics if `literal` is outside the variable range.
    pub fn leader(&self, literal: &Literal) -> Literal {
        let leader = self.leaders[vertex_for(literal, self.num_variables).index()];
        literal_for(leader, self.num_variables)
    }

    pub fn same_component(&self, a: &Literal, b: &Literal) -> bool {
        self.leaders[vertex_for(a, self.num_variables).index()]
            == self.leaders[vertex_for(b, self.num_variables).index()]
    }

    /// Number of components.
    pub fn len(&self) -> usize {
        self.leaders
            .iter()
            .enumerate()
            .filter(|(idx, leader)| leader.index() == *idx)
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.leaders.is_empty()
    }

    /// Members of each component, leader first, in order of leader index.
    pub fn groups(&self) -> Vec<Vec<Literal>> {
        let mut slots = vec![None; self.leaders.len()];
        let mut groups: Vec<Vec<Literal>> = vec![];
        for (idx, leader) in self.leaders.iter().enumerate() {
            if leader.index() == idx {
                slots[idx] = Some(groups.len());
                groups.push(vec![literal_for(*leader, self.num_variables)]);
            }
        }
        for (idx, leader) in self.leaders.iter().enumerate() {
            if leader.index() != idx {
                if let Some(slot) = slots[leader.index()] {
                    groups[slot].push(literal_for(VertexIdx(idx), self.num_variables));
                }
            }
        }
        groups
    }

    /// Component sizes, largest first.
    pub fn sizes(&self) -> Vec<usize> {
        let mut sizes = vec![0; self.leaders.len()];
        for leader in &self.leaders {
            sizes[leader.index()] += 1;
        }
        sizes.retain(|size| *size > 0);
        sizes.sort_unstable_by(|a, b| b.cmp(a));
        sizes
    }

    /// The first variable whose positive and negative literal share a component, if any.
    pub fn contradiction(&self) -> Option<Variable> {
        (1..=self.num_variables).map(Variable).find(|v| {
            self.same_component(&Literal::Positive(*v), &Literal::Negative(*v))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formula::{n, p};

    // x1 and !x2 together; x2 and !x1 together; x3 and !x3 alone
    fn sample() -> Components {
        // vertices: 1 2 3 -1 -2 -3
        let leaders = vec![0, 3, 2, 3, 0, 5].into_iter().map(VertexIdx).collect();
        Components::new(3, leaders)
    }

    #[test]
    fn leaders_and_membership() {
        let c = sample();
        assert_eq!(c.leader(&n(2)), p(1));
        assert_eq!(c.leader(&p(2)), n(1));
        assert!(c.same_component(&p(1), &n(2)));
        assert!(!c.same_component(&p(3), &n(3)));
        assert_eq!(c.len(), 4);
        assert_eq!(c.contradiction(), None);
    }

    #[test]
    fn groups_partition_literals() {
        let c = sample();
        let groups = c.groups();
        assert_eq!(groups, vec![vec![p(1), n(2)], vec![p(3)], vec![n(1), p(2)], vec![n(3)]]);
        assert_eq!(groups.iter().map(Vec::len).sum::<usize>(), 6);
    }

    #[test]
    fn sizes_largest_first() {
        assert_eq!(sample().sizes(), vec![2, 2, 1, 1]);
    }

    #[test]
    fn contradiction_found() {
        // 1 and -1 share leader 1; 2 and -2 apart
        let leaders = vec![0, 1, 0, 3].into_iter().map(VertexIdx).collect();
        let c = Components::new(2, leaders);
        assert_eq!(c.contradiction(), Some(Variable(1)));
    }

    #[test]
    fn no_variables() {
        let c = Components::new(0, vec![]);
        assert!(c.is_empty());
        assert_eq!(c.len(), 0);
        assert_eq!(c.contradiction(), None);
    }
}
