//! Two-phase stochastic walk across a loss-landscape plot: alternating
//! gradient-ascent and gradient-descent segments with decaying step size,
//! wandering until the tip lands in the goal disc.

use rand::Rng;
use serde::Deserialize;
use std::f32::consts::{FRAC_PI_2, PI};

/// Step parameters for one phase of the walk (ascent or descent)
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PhaseParams {
    pub step_size: f32,
    /// Heading jitter around the base angle, in degrees
    pub randomness_deg: f32,
    /// Exponential step-size decay per step taken in this phase
    pub decay_rate: f32,
    pub base_angle_deg: f32,
}

/// Geometry and parameters for the whole walk
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct DescentConfig {
    pub ascent: PhaseParams,
    pub descent: PhaseParams,
    pub width: f32,
    pub height: f32,
    pub margin: f32,
    pub goal_radius: f32,
    /// Hard cap so a walk that never finds the goal still terminates
    pub max_segments: usize,
    /// Playback period per revealed segment, in milliseconds
    pub animation_ms: u64,
}

impl Default for DescentConfig {
    fn default() -> Self {
        DescentConfig {
            ascent: PhaseParams {
                step_size: 60.0,
                randomness_deg: 30.0,
                decay_rate: 0.08,
                base_angle_deg: 70.0,
            },
            descent: PhaseParams {
                step_size: 50.0,
                randomness_deg: 25.0,
                decay_rate: 0.2,
                base_angle_deg: 240.0,
            },
            width: 450.0,
            height: 300.0,
            margin: 40.0,
            goal_radius: 40.0,
            max_segments: 30,
            animation_ms: 50,
        }
    }
}

/// Axis-aligned clamp region for segment endpoints
#[derive(Debug, Clone, Copy)]
pub struct PlotBounds {
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,
}

impl DescentConfig {
    /// Clamp region, inset a hair from the plot margin
    pub fn bounds(&self) -> PlotBounds {
        PlotBounds {
            min_x: self.margin + 5.0,
            max_x: self.width - self.margin - 5.0,
            min_y: self.margin + 5.0,
            max_y: self.height - self.margin - 5.0,
        }
    }

    /// Walk origin, low on the left side of the plot
    pub fn start_point(&self) -> (f32, f32) {
        (self.margin + 20.0, self.height - self.margin - 100.0)
    }

    /// Center of the goal disc, opposite the start
    pub fn goal_point(&self) -> (f32, f32) {
        (self.width - self.margin - 20.0, self.height - self.margin - 100.0)
    }
}

/// One straight piece of the walk. Coordinates are plot-space
/// (y grows downward, like the network sampler's space).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: (f32, f32),
    pub end: (f32, f32),
    /// Even-indexed segments climb; odd-indexed ones descend
    pub ascent: bool,
}

/// Step length after `k` previous steps of the same phase
fn step_length(phase: &PhaseParams, k: usize) -> f32 {
    phase.step_size * (-phase.decay_rate * k as f32).exp()
}

/// Draw a heading for the phase: base angle plus uniform jitter, clamped
/// so ascent always points up-plot and descent down-plot.
///
/// Plot y grows downward, so "up" is the negative-angle quadrant.
fn draw_heading(phase: &PhaseParams, ascent: bool, rng: &mut impl Rng) -> f32 {
    let base = if ascent {
        -(90.0 - phase.base_angle_deg).to_radians()
    } else {
        (360.0 - phase.base_angle_deg).to_radians()
    };
    let jitter = (rng.random::<f32>() - 0.5) * phase.randomness_deg.to_radians();

    let (lo, hi) = if ascent { (-FRAC_PI_2, 0.0) } else { (0.0, PI) };
    (base + jitter).clamp(lo, hi)
}

/// Generate the full walk: segments alternate ascent/descent, each phase
/// keeps its own decay counter, and generation stops once the tip enters
/// the goal disc or the segment cap is hit.
pub fn generate_path(config: &DescentConfig, rng: &mut impl Rng) -> Vec<Segment> {
    let bounds = config.bounds();
    let (goal_x, goal_y) = config.goal_point();
    let near_goal = |(x, y): (f32, f32)| {
        ((goal_x - x).powi(2) + (goal_y - y).powi(2)).sqrt() <= config.goal_radius
    };

    let mut segments = Vec::new();
    let mut current = config.start_point();
    let mut ascent_steps = 0usize;
    let mut descent_steps = 0usize;

    while segments.len() < config.max_segments && !near_goal(current) {
        let ascent = segments.len() % 2 == 0;
        let (phase, k) = if ascent {
            (&config.ascent, ascent_steps)
        } else {
            (&config.descent, descent_steps)
        };

        let length = step_length(phase, k);
        let angle = draw_heading(phase, ascent, rng);
        let end = (
            (current.0 + length * angle.cos()).clamp(bounds.min_x, bounds.max_x),
            (current.1 + length * angle.sin()).clamp(bounds.min_y, bounds.max_y),
        );

        segments.push(Segment {
            start: current,
            end,
            ascent,
        });
        current = end;
        if ascent {
            ascent_steps += 1;
        } else {
            descent_steps += 1;
        }
    }

    log::debug!("descent walk generated with {} segments", segments.len());
    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_step_length_decays() {
        let phase = DescentConfig::default().descent;
        let mut previous = f32::INFINITY;
        for k in 0..10 {
            let len = step_length(&phase, k);
            assert!(len < previous);
            previous = len;
        }
        assert_eq!(step_length(&phase, 0), phase.step_size);
    }

    #[test]
    fn test_headings_respect_phase_quadrants() {
        let config = DescentConfig::default();
        let mut rng = StdRng::seed_from_u64(5);

        for _ in 0..200 {
            let up = draw_heading(&config.ascent, true, &mut rng);
            assert!((-FRAC_PI_2..=0.0).contains(&up), "ascent heading {}", up);

            let down = draw_heading(&config.descent, false, &mut rng);
            assert!((0.0..=PI).contains(&down), "descent heading {}", down);
        }
    }

    #[test]
    fn test_walk_terminates_and_stays_in_bounds() {
        let config = DescentConfig::default();
        let bounds = config.bounds();

        for seed in 0..25 {
            let mut rng = StdRng::seed_from_u64(seed);
            let segments = generate_path(&config, &mut rng);

            assert!(!segments.is_empty(), "seed {}", seed);
            assert!(segments.len() <= config.max_segments, "seed {}", seed);

            for segment in &segments {
                assert!(segment.end.0 >= bounds.min_x && segment.end.0 <= bounds.max_x);
                assert!(segment.end.1 >= bounds.min_y && segment.end.1 <= bounds.max_y);
            }
        }
    }

    #[test]
    fn test_segments_alternate_and_chain() {
        let config = DescentConfig::default();
        let mut rng = StdRng::seed_from_u64(17);
        let segments = generate_path(&config, &mut rng);

        assert_eq!(segments[0].start, config.start_point());
        for (i, segment) in segments.iter().enumerate() {
            assert_eq!(segment.ascent, i % 2 == 0, "segment {} phase", i);
            if i > 0 {
                assert_eq!(segment.start, segments[i - 1].end, "segment {} chains", i);
            }
        }
    }

    #[test]
    fn test_walk_ends_near_goal_or_at_cap() {
        let config = DescentConfig::default();
        let (gx, gy) = config.goal_point();

        for seed in 0..25 {
            let mut rng = StdRng::seed_from_u64(seed);
            let segments = generate_path(&config, &mut rng);
            let tip = segments.last().unwrap().end;
            let dist = ((gx - tip.0).powi(2) + (gy - tip.1).powi(2)).sqrt();

            assert!(
                dist <= config.goal_radius || segments.len() == config.max_segments,
                "seed {}: stopped {} from goal after {} segments",
                seed,
                dist,
                segments.len()
            );
        }
    }
}
