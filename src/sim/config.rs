use crate::contrastive::ContrastiveConfig;
use crate::descent::DescentConfig;
use crate::network::SamplerConfig;

use bevy::prelude::*;
use serde::Deserialize;

const SCENARIO_JSON: &str = include_str!("../../assets/scenario.json");

/// All scenario tunables, loaded once at startup from the embedded JSON.
/// Defaults mirror the reference animation exactly.
#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub sampler: SamplerConfig,
    /// Ordered node indices revealed as poisoning targets
    pub schedule: Vec<usize>,
    /// Reveal-advance timer period, in milliseconds
    pub advance_ms: u64,
    /// Pulse-clock timer period, in milliseconds
    pub pulse_ms: u64,
    pub descent: DescentConfig,
    pub contrastive: ContrastiveConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        SimConfig {
            sampler: SamplerConfig::default(),
            schedule: vec![5, 8, 12, 15, 18],
            advance_ms: 1000,
            pulse_ms: 50,
            descent: DescentConfig::default(),
            contrastive: ContrastiveConfig::default(),
        }
    }
}

impl SimConfig {
    /// Load the embedded scenario configuration
    pub fn load() -> Result<Self, String> {
        Self::from_json(SCENARIO_JSON)
    }

    fn from_json(json: &str) -> Result<Self, String> {
        let config: SimConfig =
            serde_json::from_str(json).map_err(|e| format!("bad scenario config: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), String> {
        if self.sampler.count == 0 {
            return Err("sampler.count must be at least 1".to_string());
        }
        if self.sampler.min_distance <= 0.0 {
            return Err("sampler.min_distance must be positive".to_string());
        }
        if self.sampler.max_attempts == 0 {
            return Err("sampler.max_attempts must be at least 1".to_string());
        }
        if self.schedule.is_empty() {
            return Err("reveal schedule is empty".to_string());
        }
        if self.advance_ms == 0 || self.pulse_ms == 0 {
            return Err("timer periods must be positive".to_string());
        }
        if self.descent.max_segments == 0 {
            return Err("descent.max_segments must be at least 1".to_string());
        }
        if self.contrastive.duration_ms == 0 {
            return Err("contrastive.duration_ms must be positive".to_string());
        }
        if self.contrastive.motion_steps == 0 {
            return Err("contrastive.motion_steps must be at least 1".to_string());
        }
        Ok(())
    }
}
