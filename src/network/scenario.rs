use super::builder::build_edges;
use super::edge::EdgeSet;
use super::node::{NetworkNode, NodeId, NodeStatus};
use super::sampler::{SamplerConfig, sample};

use rand::Rng;

/// How many of the leading schedule positions count as identified;
/// later reveals slip past the defense as unidentified
const IDENTIFIED_PREFIX: usize = 2;

/// Where the scenario is along its reveal schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScenarioPhase {
    /// Nothing revealed yet
    Idle,
    /// Part of the schedule is active
    Revealing,
    /// Every scheduled target is revealed; further advances are no-ops
    Done,
}

/// The poisoning scenario: a fixed topology plus the reveal state machine
/// that mutates per-node status over time.
///
/// Topology (`nodes` positions, `edges`) is built once and never changes;
/// `reset()` only rewinds the reveal.
#[derive(Debug, Clone)]
pub struct PoisonScenario {
    nodes: Vec<NetworkNode>,
    edges: EdgeSet,
    /// Ordered target list; entries pointing past the actual node count
    /// (possible after a sampling shortfall) are ignored at apply time
    schedule: Vec<NodeId>,
    /// How much of the schedule is active, in [0, schedule.len()]
    reveal_step: usize,
}

impl PoisonScenario {
    pub fn new(nodes: Vec<NetworkNode>, edges: EdgeSet, schedule: Vec<NodeId>) -> Self {
        PoisonScenario {
            nodes,
            edges,
            schedule,
            reveal_step: 0,
        }
    }

    /// Sample a fresh topology and wire it up. Invoked once at startup.
    pub fn generate(
        sampler: &SamplerConfig,
        schedule: Vec<NodeId>,
        rng: &mut impl Rng,
    ) -> Self {
        let nodes = sample(sampler, rng);
        let edges = build_edges(&nodes);
        PoisonScenario::new(nodes, edges, schedule)
    }

    pub fn nodes(&self) -> &[NetworkNode] {
        &self.nodes
    }

    pub fn edges(&self) -> &EdgeSet {
        &self.edges
    }

    pub fn schedule(&self) -> &[NodeId] {
        &self.schedule
    }

    pub fn reveal_step(&self) -> usize {
        self.reveal_step
    }

    pub fn phase(&self) -> ScenarioPhase {
        if self.reveal_step == 0 {
            ScenarioPhase::Idle
        } else if self.reveal_step < self.schedule.len() {
            ScenarioPhase::Revealing
        } else {
            ScenarioPhase::Done
        }
    }

    /// Advance the reveal by one scheduled target and reapply node state.
    /// Saturates once the whole schedule is active; returns whether the
    /// step actually moved.
    pub fn advance(&mut self) -> bool {
        if self.reveal_step >= self.schedule.len() {
            return false;
        }
        self.reveal_step += 1;
        self.apply_reveal();
        true
    }

    /// Recompute node state from the current reveal prefix.
    ///
    /// Affected flags are cleared and rebuilt every time, so they are a
    /// function of the active prefix alone and never accumulate across
    /// steps. Statuses are only ever written for prefix members, which
    /// keeps repeated application at a fixed step idempotent.
    pub fn apply_reveal(&mut self) {
        for node in &mut self.nodes {
            node.affected = false;
        }

        for (i, &target) in self.schedule.iter().enumerate().take(self.reveal_step) {
            if target.index() >= self.nodes.len() {
                continue;
            }

            self.nodes[target.index()].status = if i < IDENTIFIED_PREFIX {
                NodeStatus::Identified
            } else {
                NodeStatus::Unidentified
            };

            for neighbor in self.edges.neighbors_of(target) {
                self.nodes[neighbor.index()].affected = true;
            }
        }
    }

    /// Rewind to the clean state: step 0, every node clean and unaffected.
    /// The topology is kept as-is.
    pub fn reset(&mut self) {
        self.reveal_step = 0;
        for node in &mut self.nodes {
            node.status = NodeStatus::Clean;
            node.affected = false;
        }
    }
}
