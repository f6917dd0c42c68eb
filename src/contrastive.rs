//! Cluster-migration illustration: three node groups placed on a coarse
//! grid (malicious, affected, safe), then a phased playback where the
//! affected cluster migrates into the safe cluster while the malicious
//! one is pushed away.

use rand::Rng;
use serde::Deserialize;
use std::collections::HashSet;
use std::f32::consts::{FRAC_PI_4, TAU};

/// Grid geometry and cluster layout for the illustration
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct ContrastiveConfig {
    pub cell_size: f32,
    pub grid_width: i32,
    pub grid_height: i32,
    pub offset_x: f32,
    pub offset_y: f32,
    /// Cluster centers, in grid cells
    pub devil_cluster: (i32, i32),
    pub affected_cluster: (i32, i32),
    pub positive_cluster: (i32, i32),
    pub devil_count: usize,
    pub affected_count: usize,
    pub positive_count: usize,
    /// Full playback duration, in milliseconds
    pub duration_ms: u64,
    /// Motion is quantized to this many discrete steps over the playback
    pub motion_steps: u32,
}

impl Default for ContrastiveConfig {
    fn default() -> Self {
        ContrastiveConfig {
            cell_size: 12.0,
            grid_width: 20,
            grid_height: 16,
            offset_x: 30.0,
            offset_y: 30.0,
            devil_cluster: (4, 8),
            affected_cluster: (6, 8),
            positive_cluster: (14, 8),
            devil_count: 3,
            affected_count: 6,
            positive_count: 5,
            duration_ms: 3000,
            motion_steps: 8,
        }
    }
}

impl ContrastiveConfig {
    /// Map grid coordinates to plot-space screen coordinates
    pub fn grid_to_screen(&self, gx: f32, gy: f32) -> (f32, f32) {
        (
            gx * self.cell_size + self.offset_x,
            gy * self.cell_size + self.offset_y,
        )
    }

    /// Plot size in screen units
    pub fn plot_size(&self) -> (f32, f32) {
        (
            self.offset_x * 2.0 + self.grid_width as f32 * self.cell_size,
            self.offset_y * 2.0 + self.grid_height as f32 * self.cell_size,
        )
    }
}

/// Which group a node belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClusterRole {
    /// Malicious source of the poisoning
    Devil,
    /// Clean class the affected nodes migrate toward
    Positive,
    /// Mislabeled nodes, pulled from their cluster into the positive one
    Affected,
}

/// One placed node of the illustration. `grid` is the start cell;
/// affected nodes also carry the destination cell they migrate to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClusterNode {
    pub role: ClusterRole,
    /// Index within the node's own group; staggers per-node motion
    pub index: usize,
    pub grid: (f32, f32),
    pub target_grid: Option<(f32, f32)>,
}

/// Pick the free cell nearest `target` on a small ring scan, mark it
/// occupied, and return it. When every ring cell is taken the node falls
/// back to a jittered off-grid spot (not marked, it occupies no cell).
fn claim_cell(
    target: (i32, i32),
    occupied: &mut HashSet<(i32, i32)>,
    rng: &mut impl Rng,
) -> (f32, f32) {
    let mut candidates: Vec<((i32, i32), i32)> = Vec::new();

    for step in 0..=3 {
        let r = 0.4 * step as f32;
        for k in 0..8 {
            let theta = k as f32 * FRAC_PI_4;
            let dx = (r * theta.cos()).round() as i32;
            let dy = (r * theta.sin()).round() as i32;
            let cell = (target.0 + dx, target.1 + dy);
            if !occupied.contains(&cell) {
                candidates.push((cell, dx * dx + dy * dy));
            }
        }
    }

    candidates.sort_by_key(|&(_, d)| d);
    match candidates.first() {
        Some(&(cell, _)) => {
            occupied.insert(cell);
            (cell.0 as f32, cell.1 as f32)
        }
        None => (
            target.0 as f32 + rng.random::<f32>() - 0.5,
            target.1 as f32 + rng.random::<f32>() - 0.5,
        ),
    }
}

/// Place all three clusters. Start cells never collide; affected nodes
/// additionally get a destination cell inside the positive cluster
/// (destinations are not reserved, arrivals may share a neighborhood).
pub fn place_clusters(config: &ContrastiveConfig, rng: &mut impl Rng) -> Vec<ClusterNode> {
    let mut occupied = HashSet::new();
    let mut nodes = Vec::new();

    for index in 0..config.devil_count {
        nodes.push(ClusterNode {
            role: ClusterRole::Devil,
            index,
            grid: claim_cell(config.devil_cluster, &mut occupied, rng),
            target_grid: None,
        });
    }

    for index in 0..config.positive_count {
        nodes.push(ClusterNode {
            role: ClusterRole::Positive,
            index,
            grid: claim_cell(config.positive_cluster, &mut occupied, rng),
            target_grid: None,
        });
    }

    for index in 0..config.affected_count {
        let start = claim_cell(config.affected_cluster, &mut occupied, rng);
        let target = find_destination(config.positive_cluster, &occupied, rng);
        nodes.push(ClusterNode {
            role: ClusterRole::Affected,
            index,
            grid: start,
            target_grid: Some(target),
        });
    }

    nodes
}

/// Like `claim_cell` but read-only: destinations are aim points, not
/// reservations
fn find_destination(
    target: (i32, i32),
    occupied: &HashSet<(i32, i32)>,
    rng: &mut impl Rng,
) -> (f32, f32) {
    let mut scratch = occupied.clone();
    claim_cell(target, &mut scratch, rng)
}

/// Quantize playback progress to the configured motion steps, so the
/// nodes hop cell-to-cell instead of gliding
pub fn discretize(progress: f32, steps: u32) -> f32 {
    (progress.clamp(0.0, 1.0) * steps as f32).floor() / steps as f32
}

/// Screen position of a node at a given discretized progress.
///
/// Devils drift left with a little vertical wobble, positives jitter in
/// place, and affected nodes walk their start cell toward the destination
/// cell with a per-index stagger.
pub fn node_position(
    node: &ClusterNode,
    discrete: f32,
    config: &ContrastiveConfig,
) -> (f32, f32) {
    let cell = config.cell_size;
    let phase = node.index as f32;

    match node.role {
        ClusterRole::Devil => {
            let (x, y) = config.grid_to_screen(node.grid.0, node.grid.1);
            (
                x - discrete * 1.5 * cell,
                y + (discrete * TAU + phase).sin() * cell * 0.2,
            )
        }
        ClusterRole::Positive => {
            let (x, y) = config.grid_to_screen(node.grid.0, node.grid.1);
            (
                x + (discrete * TAU).sin() * cell * 0.2,
                y + (discrete * TAU + phase).cos() * cell * 0.15,
            )
        }
        ClusterRole::Affected => {
            let progress = (discrete - phase * 0.15).clamp(0.0, 1.0);
            let target = node.target_grid.unwrap_or(node.grid);
            let gx = node.grid.0 + (target.0 - node.grid.0) * progress;
            let gy = node.grid.1 + (target.1 - node.grid.1) * progress;
            let (x, y) = config.grid_to_screen(gx, gy);
            (
                x + (progress * TAU + phase).sin() * 1.5,
                y + (progress * TAU + phase).cos() * 1.5,
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn chebyshev(a: (f32, f32), b: (i32, i32)) -> f32 {
        (a.0 - b.0 as f32).abs().max((a.1 - b.1 as f32).abs())
    }

    #[test]
    fn test_all_groups_fully_placed() {
        let config = ContrastiveConfig::default();
        let mut rng = StdRng::seed_from_u64(1);
        let nodes = place_clusters(&config, &mut rng);

        let count = |role| nodes.iter().filter(|n| n.role == role).count();
        assert_eq!(count(ClusterRole::Devil), 3);
        assert_eq!(count(ClusterRole::Positive), 5);
        assert_eq!(count(ClusterRole::Affected), 6);
    }

    #[test]
    fn test_start_cells_do_not_collide() {
        let config = ContrastiveConfig::default();

        for seed in 0..10 {
            let mut rng = StdRng::seed_from_u64(seed);
            let nodes = place_clusters(&config, &mut rng);

            let cells: Vec<(i32, i32)> = nodes
                .iter()
                .map(|n| (n.grid.0.round() as i32, n.grid.1.round() as i32))
                .collect();
            let unique: HashSet<_> = cells.iter().collect();
            assert_eq!(unique.len(), cells.len(), "seed {}: duplicate start cell", seed);
        }
    }

    #[test]
    fn test_nodes_cluster_near_their_centers() {
        let config = ContrastiveConfig::default();
        let mut rng = StdRng::seed_from_u64(4);
        let nodes = place_clusters(&config, &mut rng);

        for node in &nodes {
            let center = match node.role {
                ClusterRole::Devil => config.devil_cluster,
                ClusterRole::Positive => config.positive_cluster,
                ClusterRole::Affected => config.affected_cluster,
            };
            // The ring scan only reaches one cell out
            assert!(
                chebyshev(node.grid, center) <= 1.0 + 1e-3,
                "{:?} node {} strayed to {:?}",
                node.role,
                node.index,
                node.grid
            );
        }
    }

    #[test]
    fn test_affected_targets_sit_in_positive_cluster() {
        let config = ContrastiveConfig::default();
        let mut rng = StdRng::seed_from_u64(9);
        let nodes = place_clusters(&config, &mut rng);

        for node in nodes.iter().filter(|n| n.role == ClusterRole::Affected) {
            let target = node.target_grid.expect("affected nodes carry a target");
            assert!(chebyshev(target, config.positive_cluster) <= 1.0 + 1e-3);
        }
    }

    #[test]
    fn test_discretize_quantizes_to_steps() {
        assert_eq!(discretize(0.0, 8), 0.0);
        assert_eq!(discretize(0.12, 8), 0.0);
        assert_eq!(discretize(0.13, 8), 0.125);
        assert_eq!(discretize(0.5, 8), 0.5);
        assert_eq!(discretize(1.0, 8), 1.0);
        // Out-of-range progress clamps instead of overshooting
        assert_eq!(discretize(1.7, 8), 1.0);
    }

    #[test]
    fn test_devils_drift_left_monotonically() {
        let config = ContrastiveConfig::default();
        let node = ClusterNode {
            role: ClusterRole::Devil,
            index: 0,
            grid: (4.0, 8.0),
            target_grid: None,
        };

        let mut previous = f32::INFINITY;
        for step in 0..=8 {
            let d = step as f32 / 8.0;
            let (x, _) = node_position(&node, d, &config);
            assert!(x < previous, "x should fall as the devil is repelled");
            previous = x;
        }
    }

    #[test]
    fn test_first_affected_node_reaches_its_target() {
        let config = ContrastiveConfig::default();
        let node = ClusterNode {
            role: ClusterRole::Affected,
            index: 0,
            grid: (6.0, 8.0),
            target_grid: Some((14.0, 8.0)),
        };

        let (x, y) = node_position(&node, 1.0, &config);
        let (tx, ty) = config.grid_to_screen(14.0, 8.0);
        // Only residual jitter separates the node from its destination
        assert!((x - tx).abs() <= 2.0);
        assert!((y - ty).abs() <= 2.0);
    }

    #[test]
    fn test_staggered_nodes_lag_behind() {
        let config = ContrastiveConfig::default();
        let make = |index| ClusterNode {
            role: ClusterRole::Affected,
            index,
            grid: (6.0, 8.0),
            target_grid: Some((14.0, 8.0)),
        };

        // Halfway through, a late-staggered node has covered less ground
        let (x0, _) = node_position(&make(0), 0.5, &config);
        let (x5, _) = node_position(&make(5), 0.5, &config);
        assert!(x5 < x0);

        // A large stagger pins the node at its start early on
        let (x, _) = node_position(&make(5), 0.1, &config);
        let (sx, _) = config.grid_to_screen(6.0, 8.0);
        assert!((x - sx).abs() <= 2.0);
    }

    #[test]
    fn test_positive_nodes_stay_near_home() {
        let config = ContrastiveConfig::default();
        let node = ClusterNode {
            role: ClusterRole::Positive,
            index: 2,
            grid: (14.0, 8.0),
            target_grid: None,
        };
        let (hx, hy) = config.grid_to_screen(14.0, 8.0);

        for step in 0..=8 {
            let d = step as f32 / 8.0;
            let (x, y) = node_position(&node, d, &config);
            assert!((x - hx).abs() <= config.cell_size * 0.25);
            assert!((y - hy).abs() <= config.cell_size * 0.25);
        }
    }
}
