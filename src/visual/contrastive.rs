use crate::camera::PanelLayout;
use crate::contrastive::ClusterRole;
use crate::input::ControlEvent;
use crate::sim::{ContrastiveSession, SimConfig};
use crate::visual::network::load_scenario_config;
use crate::visual::palette;

use bevy::prelude::*;

const DEVIL_RADIUS: f32 = 7.0;
const NODE_RADIUS: f32 = 5.0;

pub struct ContrastivePlugin;

impl Plugin for ContrastivePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Startup,
            setup_contrastive_session.after(load_scenario_config),
        )
        .add_systems(
            Update,
            (advance_playback, handle_replay, draw_contrastive).chain(),
        );
    }
}

fn setup_contrastive_session(mut commands: Commands, config: Res<SimConfig>) {
    let mut rng = rand::rng();
    let session = ContrastiveSession::generate(&config.contrastive, &mut rng);

    info!(
        "contrastive clusters placed with {} nodes",
        session.nodes().len()
    );

    commands.insert_resource(session);
}

fn advance_playback(time: Res<Time>, mut session: ResMut<ContrastiveSession>) {
    if !session.is_finished() {
        session.tick(time.delta_secs());
    }
}

fn handle_replay(
    mut events: MessageReader<ControlEvent>,
    mut session: ResMut<ContrastiveSession>,
) {
    for event in events.read() {
        if *event == ControlEvent::ReplayContrastive {
            let mut rng = rand::rng();
            session.replay(&mut rng);
            info!("contrastive migration replayed");
        }
    }
}

fn draw_contrastive(
    session: Res<ContrastiveSession>,
    layout: Res<PanelLayout>,
    mut gizmos: Gizmos,
) {
    let panel = layout.contrastive;
    let config = session.config();
    let (width, height) = config.plot_size();

    // Background grid over the full cell range
    for col in 0..=config.grid_width {
        let x = config.offset_x + col as f32 * config.cell_size;
        gizmos.line_2d(
            panel.project(x, config.offset_y),
            panel.project(x, height - config.offset_y),
            palette::GRID,
        );
    }
    for row in 0..=config.grid_height {
        let y = config.offset_y + row as f32 * config.cell_size;
        gizmos.line_2d(
            panel.project(config.offset_x, y),
            panel.project(width - config.offset_x, y),
            palette::GRID,
        );
    }

    for node in session.nodes() {
        let (x, y) = session.position_of(node);
        let center = Isometry2d::from_translation(panel.project(x, y));

        match node.role {
            ClusterRole::Devil => {
                gizmos.circle_2d(center, DEVIL_RADIUS, palette::DEVIL);
            }
            ClusterRole::Positive => {
                gizmos.circle_2d(center, NODE_RADIUS, palette::POSITIVE);
            }
            ClusterRole::Affected => {
                let color = palette::migrant_color(session.progress());
                gizmos.circle_2d(center, NODE_RADIUS, color);
            }
        }
    }
}
