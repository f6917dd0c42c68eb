// sim/session.rs

use crate::contrastive::{ClusterNode, ContrastiveConfig, discretize, node_position, place_clusters};
use crate::descent::{DescentConfig, Segment, generate_path};
use crate::network::{EdgeSet, NetworkNode, NodeId, PoisonScenario, PulseClock, ScenarioPhase};
use crate::sim::config::SimConfig;

use bevy::prelude::Resource;
use rand::Rng;

/// One run of the poisoned-network illustration: the generated topology,
/// the reveal state machine, and the pulse clock the renderer reads.
#[derive(Debug, Clone, Resource)]
pub struct NetworkSession {
    scenario: PoisonScenario,
    pulse: PulseClock,
}

impl NetworkSession {
    /// Generate topology from config. Called once at startup; `reset()`
    /// afterwards rewinds the scenario without touching the layout.
    pub fn generate(config: &SimConfig, rng: &mut impl Rng) -> Self {
        let schedule = config.schedule.iter().copied().map(NodeId).collect();
        let scenario = PoisonScenario::generate(&config.sampler, schedule, rng);

        NetworkSession {
            scenario,
            pulse: PulseClock::new(),
        }
    }

    // === Query methods (for Bevy systems to read state) ===

    pub fn nodes(&self) -> &[NetworkNode] {
        self.scenario.nodes()
    }

    pub fn edges(&self) -> &EdgeSet {
        self.scenario.edges()
    }

    pub fn phase(&self) -> ScenarioPhase {
        self.scenario.phase()
    }

    pub fn reveal_step(&self) -> usize {
        self.scenario.reveal_step()
    }

    pub fn pulse(&self) -> &PulseClock {
        &self.pulse
    }

    // === Mutation methods (driven by the plugin's timers and input) ===

    /// Reveal the next scheduled target; no-op once the schedule is spent
    pub fn advance(&mut self) -> bool {
        self.scenario.advance()
    }

    /// Step the free-running pulse counter
    pub fn tick_pulse(&mut self) {
        self.pulse.advance();
    }

    /// Rewind the scenario to its clean state, keeping the topology
    pub fn reset(&mut self) {
        self.scenario.reset();
    }
}

/// One run of the gradient-walk illustration: a pre-generated path plus a
/// playback cursor that reveals it segment by segment.
#[derive(Debug, Clone, Resource)]
pub struct DescentSession {
    config: DescentConfig,
    segments: Vec<Segment>,
    revealed: usize,
}

impl DescentSession {
    pub fn generate(config: &DescentConfig, rng: &mut impl Rng) -> Self {
        DescentSession {
            config: *config,
            segments: generate_path(config, rng),
            revealed: 0,
        }
    }

    pub fn config(&self) -> &DescentConfig {
        &self.config
    }

    /// The prefix of the path that playback has uncovered so far
    pub fn revealed_segments(&self) -> &[Segment] {
        &self.segments[..self.revealed]
    }

    /// Total segments in the generated path, revealed or not
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Current tip of the revealed walk
    pub fn tip(&self) -> (f32, f32) {
        if self.revealed == 0 {
            self.config.start_point()
        } else {
            self.segments[self.revealed - 1].end
        }
    }

    pub fn is_finished(&self) -> bool {
        self.revealed >= self.segments.len()
    }

    /// Uncover one more segment; no-op at the end of the path
    pub fn step_reveal(&mut self) -> bool {
        if self.is_finished() {
            return false;
        }
        self.revealed += 1;
        true
    }

    /// Throw the path away and start a fresh walk from the beginning
    pub fn replay(&mut self, rng: &mut impl Rng) {
        self.segments = generate_path(&self.config, rng);
        self.revealed = 0;
    }
}

/// One run of the cluster-migration illustration: placed clusters plus a
/// playback clock that drives the staggered migration.
#[derive(Debug, Clone, Resource)]
pub struct ContrastiveSession {
    config: ContrastiveConfig,
    nodes: Vec<ClusterNode>,
    progress: f32,
}

impl ContrastiveSession {
    pub fn generate(config: &ContrastiveConfig, rng: &mut impl Rng) -> Self {
        ContrastiveSession {
            config: *config,
            nodes: place_clusters(config, rng),
            progress: 0.0,
        }
    }

    pub fn config(&self) -> &ContrastiveConfig {
        &self.config
    }

    pub fn nodes(&self) -> &[ClusterNode] {
        &self.nodes
    }

    /// Continuous playback progress in `[0, 1]`; drives color blending
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Where a node currently sits, with motion quantized to the
    /// configured step count
    pub fn position_of(&self, node: &ClusterNode) -> (f32, f32) {
        let discrete = discretize(self.progress, self.config.motion_steps);
        node_position(node, discrete, &self.config)
    }

    pub fn is_finished(&self) -> bool {
        self.progress >= 1.0
    }

    /// Advance playback by a frame delta; saturates at the end
    pub fn tick(&mut self, delta_secs: f32) {
        let duration = self.config.duration_ms as f32 / 1000.0;
        self.progress = (self.progress + delta_secs / duration).min(1.0);
    }

    /// Re-place every cluster and restart playback from zero
    pub fn replay(&mut self, rng: &mut impl Rng) {
        self.nodes = place_clusters(&self.config, rng);
        self.progress = 0.0;
    }
}
