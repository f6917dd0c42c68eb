use super::node::{NetworkNode, NodeId};

use rand::Rng;
use serde::Deserialize;
use std::f32::consts::TAU;

/// Geometry and limits for annulus rejection sampling
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct SamplerConfig {
    /// Requested node count (the actual count can come out lower)
    pub count: usize,
    pub center_x: f32,
    pub center_y: f32,
    /// Inner radius of the annulus
    pub inner_radius: f32,
    /// Outer-radius jitter: radius is drawn from [inner, inner + jitter)
    pub radius_jitter: f32,
    /// Minimum pairwise separation between accepted nodes
    pub min_distance: f32,
    /// Candidate draws per slot before giving up
    pub max_attempts: usize,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        SamplerConfig {
            count: 25,
            center_x: 175.0,
            center_y: 150.0,
            inner_radius: 60.0,
            radius_jitter: 80.0,
            min_distance: 25.0,
            max_attempts: 100,
        }
    }
}

/// Scatter nodes in the annulus, keeping every pair at least
/// `min_distance` apart.
///
/// Each slot gets a bounded number of candidate draws. If a slot cannot be
/// placed, sampling stops early and the shorter node list is returned;
/// downstream code works off the actual count, not the requested one.
pub fn sample(config: &SamplerConfig, rng: &mut impl Rng) -> Vec<NetworkNode> {
    let mut nodes: Vec<NetworkNode> = Vec::with_capacity(config.count);

    for _ in 0..config.count {
        match place_one(config, &nodes, rng) {
            Some((x, y)) => nodes.push(NetworkNode::new(NodeId(nodes.len()), x, y)),
            None => {
                log::warn!(
                    "node placement stalled after {} attempts; stopping at {} of {} nodes",
                    config.max_attempts,
                    nodes.len(),
                    config.count
                );
                break;
            }
        }
    }

    nodes
}

/// Try to place a single node, returning its position or None after
/// `max_attempts` rejected candidates
fn place_one(
    config: &SamplerConfig,
    accepted: &[NetworkNode],
    rng: &mut impl Rng,
) -> Option<(f32, f32)> {
    for _ in 0..config.max_attempts {
        let angle = rng.random::<f32>() * TAU;
        let radius = config.inner_radius + rng.random::<f32>() * config.radius_jitter;
        let x = config.center_x + radius * angle.cos();
        let y = config.center_y + radius * angle.sin();

        let too_close = accepted.iter().any(|node| {
            let dx = node.x - x;
            let dy = node.y - y;
            (dx * dx + dy * dy).sqrt() < config.min_distance
        });

        if !too_close {
            return Some((x, y));
        }
    }

    None
}
