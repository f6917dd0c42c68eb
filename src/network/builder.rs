use super::edge::{Edge, EdgeSet};
use super::node::{NetworkNode, NodeId};

/// Number of nearest neighbors each node is wired to after the backbone pass
const NEAREST_NEIGHBORS: usize = 2;

/// Build the connective edge set over the sampled nodes: a greedy
/// closest-pair spanning backbone, then nearest-neighbor augmentation.
///
/// Both passes scan all pairs; fine for the couple dozen nodes this
/// illustration uses, not meant for large graphs.
pub fn build_edges(nodes: &[NetworkNode]) -> EdgeSet {
    let mut edges = EdgeSet::new();

    if nodes.len() < 2 {
        return edges;
    }

    grow_backbone(nodes, &mut edges);
    augment_nearest(nodes, &mut edges);

    log::debug!("built {} edges over {} nodes", edges.len(), nodes.len());
    edges
}

/// Prim-style growth from node 0: repeatedly connect the globally closest
/// (visited, unvisited) pair until every node is reached.
///
/// First-found wins on distance ties (scan order), and the result is always
/// a connected tree of exactly `N - 1` edges.
fn grow_backbone(nodes: &[NetworkNode], edges: &mut EdgeSet) {
    let mut visited = vec![false; nodes.len()];
    visited[0] = true;
    let mut remaining = nodes.len() - 1;

    while remaining > 0 {
        let mut best: Option<(usize, usize, f32)> = None;

        for v in 0..nodes.len() {
            if !visited[v] {
                continue;
            }
            for u in 0..nodes.len() {
                if visited[u] {
                    continue;
                }
                let dist = nodes[v].distance_to(&nodes[u]);
                if best.is_none_or(|(_, _, d)| dist < d) {
                    best = Some((v, u, dist));
                }
            }
        }

        // remaining > 0 guarantees at least one (visited, unvisited) pair
        if let Some((v, u, _)) = best {
            edges.add(Edge::new(NodeId(v), NodeId(u)));
            visited[u] = true;
            remaining -= 1;
        }
    }
}

/// Wire every node to its two geometrically nearest others, skipping edges
/// the backbone already provides.
fn augment_nearest(nodes: &[NetworkNode], edges: &mut EdgeSet) {
    for (i, node) in nodes.iter().enumerate() {
        let mut by_distance: Vec<(usize, f32)> = nodes
            .iter()
            .enumerate()
            .filter(|(j, _)| *j != i)
            .map(|(j, other)| (j, node.distance_to(other)))
            .collect();

        by_distance.sort_by(|a, b| a.1.total_cmp(&b.1));

        for &(j, _) in by_distance.iter().take(NEAREST_NEIGHBORS) {
            edges.add(Edge::new(NodeId(i), NodeId(j)));
        }
    }
}
