use bevy::camera::ScalingMode;
use bevy::prelude::*;

/// World extent the camera always keeps in view, whatever the window aspect
const VIEW_WIDTH: f32 = 1300.0;
const VIEW_HEIGHT: f32 = 420.0;

/// Gap between adjacent illustration panels, in world units
const PANEL_GAP: f32 = 50.0;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PanelLayout>()
            .add_systems(Startup, setup_camera);
    }
}

/// A rectangular drawing region. Illustration code works in plot space
/// (origin top-left, y growing downward, like the reference SVGs);
/// `project` maps plot coordinates into Bevy world space.
#[derive(Debug, Clone, Copy)]
pub struct Panel {
    /// World position of the panel's top-left corner
    pub origin: Vec2,
    pub size: Vec2,
}

impl Panel {
    pub fn project(&self, x: f32, y: f32) -> Vec2 {
        Vec2::new(self.origin.x + x, self.origin.y - y)
    }
}

/// Three panels in a row: poisoned network, gradient walk, cluster
/// migration, the row centered on the world origin.
#[derive(Resource, Debug, Clone, Copy)]
pub struct PanelLayout {
    pub network: Panel,
    pub descent: Panel,
    pub contrastive: Panel,
}

impl Default for PanelLayout {
    fn default() -> Self {
        let network_size = Vec2::new(350.0, 300.0);
        let descent_size = Vec2::new(450.0, 300.0);
        let contrastive_size = Vec2::new(300.0, 252.0);

        let total_width =
            network_size.x + PANEL_GAP + descent_size.x + PANEL_GAP + contrastive_size.x;
        let left = -total_width * 0.5;
        let top = network_size.y.max(descent_size.y) * 0.5;

        PanelLayout {
            network: Panel {
                origin: Vec2::new(left, top),
                size: network_size,
            },
            descent: Panel {
                origin: Vec2::new(left + network_size.x + PANEL_GAP, top),
                size: descent_size,
            },
            contrastive: Panel {
                origin: Vec2::new(
                    left + network_size.x + PANEL_GAP + descent_size.x + PANEL_GAP,
                    top,
                ),
                size: contrastive_size,
            },
        }
    }
}

#[derive(Component)]
pub struct MainCamera;

fn setup_camera(mut commands: Commands) {
    let projection = Projection::Orthographic(OrthographicProjection {
        scaling_mode: ScalingMode::AutoMin {
            min_width: VIEW_WIDTH,
            min_height: VIEW_HEIGHT,
        },
        ..OrthographicProjection::default_2d()
    });

    commands.spawn((Camera2d, projection, MainCamera));
}
