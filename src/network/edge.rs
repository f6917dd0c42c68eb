use super::node::NodeId;

use std::collections::HashSet;

/// Undirected network link. Endpoints are kept sorted (`from <= to`), so
/// a link and its reversal hash and compare as the same value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
}

impl Edge {
    /// Build the canonical form of the link between `a` and `b`
    pub fn new(a: NodeId, b: NodeId) -> Self {
        let (from, to) = if a <= b { (a, b) } else { (b, a) };
        Edge { from, to }
    }

    /// Whether `node` is one of the two endpoints
    pub fn contains_node(&self, node: NodeId) -> bool {
        self.from == node || self.to == node
    }

    /// The endpoint across from `node`; `None` when the link does not
    /// touch it
    pub fn other_node(&self, node: NodeId) -> Option<NodeId> {
        match node {
            n if n == self.from => Some(self.to),
            n if n == self.to => Some(self.from),
            _ => None,
        }
    }
}

/// The edge set of the network, deduplicated regardless of endpoint order.
/// Keeps construction order so the backbone edges come first.
#[derive(Debug, Clone, Default)]
pub struct EdgeSet {
    edges: HashSet<Edge>,
    order: Vec<Edge>,
}

impl EdgeSet {
    pub fn new() -> Self {
        EdgeSet::default()
    }

    /// Add an edge to the set.
    /// Returns true if newly inserted, false if it already existed
    pub fn add(&mut self, edge: Edge) -> bool {
        if self.edges.insert(edge) {
            self.order.push(edge);
            true
        } else {
            false
        }
    }

    pub fn contains(&self, edge: &Edge) -> bool {
        self.edges.contains(edge)
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Edges in construction order (backbone first, then augmentation)
    pub fn edges(&self) -> &[Edge] {
        &self.order
    }

    /// All nodes one hop away from `node`
    pub fn neighbors_of(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.order.iter().filter_map(move |e| e.other_node(node))
    }

    /// Number of edges incident to a given node
    pub fn degree(&self, node: NodeId) -> usize {
        self.order.iter().filter(|e| e.contains_node(node)).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_canonical_form() {
        let e1 = Edge::new(NodeId(2), NodeId(9));
        let e2 = Edge::new(NodeId(9), NodeId(2));

        assert_eq!(e1, e2, "Edges should be equal regardless of order");
        assert_eq!(e1.from, NodeId(2));
        assert_eq!(e1.to, NodeId(9));
    }

    #[test]
    fn test_other_node() {
        let edge = Edge::new(NodeId(1), NodeId(4));

        assert_eq!(edge.other_node(NodeId(1)), Some(NodeId(4)));
        assert_eq!(edge.other_node(NodeId(4)), Some(NodeId(1)));
        assert_eq!(edge.other_node(NodeId(2)), None);
    }

    #[test]
    fn test_no_duplicate_edges() {
        let mut set = EdgeSet::new();

        assert!(set.add(Edge::new(NodeId(0), NodeId(1))));
        assert!(!set.add(Edge::new(NodeId(1), NodeId(0))), "reversed duplicate");
        assert_eq!(set.len(), 1);
        assert_eq!(set.edges().len(), 1);
    }

    #[test]
    fn test_construction_order_preserved() {
        let mut set = EdgeSet::new();
        let e1 = Edge::new(NodeId(0), NodeId(1));
        let e2 = Edge::new(NodeId(1), NodeId(2));
        let e3 = Edge::new(NodeId(0), NodeId(2));

        set.add(e1);
        set.add(e2);
        set.add(e3);

        assert_eq!(set.edges(), &[e1, e2, e3]);
    }

    #[test]
    fn test_neighbors_and_degree() {
        let mut set = EdgeSet::new();
        set.add(Edge::new(NodeId(0), NodeId(1)));
        set.add(Edge::new(NodeId(0), NodeId(2)));
        set.add(Edge::new(NodeId(2), NodeId(3)));

        let neighbors: Vec<_> = set.neighbors_of(NodeId(0)).collect();
        assert_eq!(neighbors, vec![NodeId(1), NodeId(2)]);

        assert_eq!(set.degree(NodeId(0)), 2);
        assert_eq!(set.degree(NodeId(2)), 2);
        assert_eq!(set.degree(NodeId(3)), 1);
        assert_eq!(set.degree(NodeId(4)), 0);
    }
}
