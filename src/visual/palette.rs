use crate::network::NodeStatus;

use bevy::prelude::*;

// Reference palette of the published figure
pub const BACKGROUND: Color = Color::srgb(1.0, 1.0, 1.0);
pub const LINKS: Color = Color::srgb(0.871, 0.722, 0.529); // burlywood
pub const NORMAL: Color = Color::srgb(0.0, 0.255, 0.416);
pub const AFFECTED: Color = Color::srgb(0.8, 0.6, 0.6);
pub const IDENTIFIED: Color = Color::srgb(0.6, 0.0, 0.0);
pub const UNIDENTIFIED: Color = Color::srgb(0.408, 0.157, 0.376);

// Gradient-walk plot
pub const ASCENT: Color = Color::srgb(0.863, 0.149, 0.149);
pub const DESCENT: Color = Color::srgb(0.145, 0.388, 0.922);
pub const GOAL: Color = Color::srgb(0.290, 0.871, 0.502);
pub const CONTOUR: Color = Color::srgb(0.533, 0.533, 0.533);
pub const AXIS: Color = Color::srgb(0.1, 0.1, 0.1);

// Cluster-migration plot
pub const DEVIL: Color = Color::srgb(0.6, 0.0, 0.0);
pub const POSITIVE: Color = NORMAL;
pub const MIGRANT_START: Color = Color::srgb(1.0, 0.412, 0.706); // hot pink
pub const GRID: Color = Color::srgb(0.867, 0.867, 0.867);

/// Linear blend between two colors in sRGB space
pub fn blend(from: Color, to: Color, t: f32) -> Color {
    let a = from.to_srgba();
    let b = to.to_srgba();
    let t = t.clamp(0.0, 1.0);
    Color::srgb(
        a.red + (b.red - a.red) * t,
        a.green + (b.green - a.green) * t,
        a.blue + (b.blue - a.blue) * t,
    )
}

/// Migrating nodes fade from their poisoned tint to the positive class
/// color as playback advances
pub fn migrant_color(progress: f32) -> Color {
    blend(MIGRANT_START, POSITIVE, progress)
}

/// Fill color for a node given its scenario state
pub fn node_color(status: NodeStatus, affected: bool) -> Color {
    match status {
        NodeStatus::Identified => IDENTIFIED,
        NodeStatus::Unidentified => UNIDENTIFIED,
        NodeStatus::Clean if affected => AFFECTED,
        NodeStatus::Clean => NORMAL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_affected_only_tints_clean_nodes() {
        assert_eq!(node_color(NodeStatus::Clean, true), AFFECTED);
        assert_eq!(node_color(NodeStatus::Clean, false), NORMAL);
        // Revealed targets keep their status color even when flagged
        assert_eq!(node_color(NodeStatus::Identified, true), IDENTIFIED);
        assert_eq!(node_color(NodeStatus::Unidentified, true), UNIDENTIFIED);
    }

    fn assert_close(a: Color, b: Color) {
        let (a, b) = (a.to_srgba(), b.to_srgba());
        assert!((a.red - b.red).abs() < 1e-5, "{:?} vs {:?}", a, b);
        assert!((a.green - b.green).abs() < 1e-5, "{:?} vs {:?}", a, b);
        assert!((a.blue - b.blue).abs() < 1e-5, "{:?} vs {:?}", a, b);
    }

    #[test]
    fn test_migrant_color_spans_the_blend() {
        assert_close(migrant_color(0.0), MIGRANT_START);
        assert_close(migrant_color(1.0), POSITIVE);
        // Out-of-range progress clamps to the endpoints
        assert_close(migrant_color(1.5), POSITIVE);
        assert_close(migrant_color(-0.5), MIGRANT_START);
    }
}
