use std::fmt;

/// Node identifier. Nodes are stored in a `Vec` and the id is the index,
/// assigned at sampling time and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl NodeId {
    pub const fn index(&self) -> usize {
        self.0
    }
}

/// Classification of a node in the poisoning scenario
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NodeStatus {
    /// Not (yet) a revealed target
    #[default]
    Clean,
    /// Revealed target that the defense has identified
    Identified,
    /// Revealed target that slipped past identification
    Unidentified,
}

impl NodeStatus {
    /// Is this node a revealed poisoning target?
    pub fn is_malicious(&self) -> bool {
        matches!(self, NodeStatus::Identified | NodeStatus::Unidentified)
    }
}

/// A node of the illustrative network.
///
/// Position is fixed at sampling time; `status` and `affected` are owned by
/// the scenario state machine and change as the reveal advances.
#[derive(Debug, Clone, PartialEq)]
pub struct NetworkNode {
    pub id: NodeId,
    pub x: f32,
    pub y: f32,
    pub status: NodeStatus,
    /// One hop away from a revealed target, under the current reveal prefix
    pub affected: bool,
}

impl NetworkNode {
    pub fn new(id: NodeId, x: f32, y: f32) -> Self {
        NetworkNode {
            id,
            x,
            y,
            status: NodeStatus::Clean,
            affected: false,
        }
    }

    /// Euclidean distance to another node
    pub fn distance_to(&self, other: &NetworkNode) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance() {
        let a = NetworkNode::new(NodeId(0), 0.0, 0.0);
        let b = NetworkNode::new(NodeId(1), 3.0, 4.0);

        assert_eq!(a.distance_to(&b), 5.0);
        assert_eq!(b.distance_to(&a), 5.0);
        assert_eq!(a.distance_to(&a), 0.0);
    }

    #[test]
    fn test_new_node_is_clean() {
        let node = NetworkNode::new(NodeId(7), 1.0, 2.0);

        assert_eq!(node.status, NodeStatus::Clean);
        assert!(!node.affected);
        assert!(!node.status.is_malicious());
    }

    #[test]
    fn test_malicious_statuses() {
        assert!(NodeStatus::Identified.is_malicious());
        assert!(NodeStatus::Unidentified.is_malicious());
        assert!(!NodeStatus::Clean.is_malicious());
    }
}
