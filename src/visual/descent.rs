use crate::camera::PanelLayout;
use crate::input::ControlEvent;
use crate::sim::{DescentSession, SimConfig};
use crate::visual::network::load_scenario_config;
use crate::visual::palette;

use bevy::prelude::*;
use std::time::Duration;

/// Relative sizes of the loss-contour ellipses around the goal
const CONTOUR_SCALES: [f32; 3] = [0.3, 0.6, 0.9];
const CONTOUR_HALF_SIZE: Vec2 = Vec2::new(120.0, 80.0);

const TIP_RADIUS: f32 = 4.0;

pub struct DescentPlugin;

impl Plugin for DescentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Startup,
            setup_descent_session.after(load_scenario_config),
        )
        .add_systems(
            Update,
            (step_playback, handle_replay, draw_descent).chain(),
        );
    }
}

/// Per-segment playback period
#[derive(Resource)]
struct PlaybackTimer(Timer);

fn setup_descent_session(mut commands: Commands, config: Res<SimConfig>) {
    let mut rng = rand::rng();
    let session = DescentSession::generate(&config.descent, &mut rng);

    info!(
        "gradient walk generated with {} segments",
        session.segment_count()
    );

    commands.insert_resource(PlaybackTimer(Timer::new(
        Duration::from_millis(config.descent.animation_ms),
        TimerMode::Repeating,
    )));
    commands.insert_resource(session);
}

fn step_playback(
    time: Res<Time>,
    mut timer: ResMut<PlaybackTimer>,
    mut session: ResMut<DescentSession>,
) {
    if timer.0.tick(time.delta()).just_finished() {
        session.step_reveal();
    }
}

fn handle_replay(mut events: MessageReader<ControlEvent>, mut session: ResMut<DescentSession>) {
    for event in events.read() {
        if *event == ControlEvent::ReplayDescent {
            let mut rng = rand::rng();
            session.replay(&mut rng);
            info!("gradient walk replayed");
        }
    }
}

fn draw_descent(session: Res<DescentSession>, layout: Res<PanelLayout>, mut gizmos: Gizmos) {
    let panel = layout.descent;
    let config = session.config();

    // Plot axes along the left and bottom margins
    let origin = panel.project(config.margin, config.height - config.margin);
    gizmos.line_2d(
        origin,
        panel.project(config.width - config.margin, config.height - config.margin),
        palette::AXIS,
    );
    gizmos.line_2d(origin, panel.project(config.margin, config.margin), palette::AXIS);

    // Loss contours ring the goal
    let (gx, gy) = config.goal_point();
    let goal = panel.project(gx, gy);
    for scale in CONTOUR_SCALES {
        gizmos.ellipse_2d(
            Isometry2d::from_translation(goal),
            CONTOUR_HALF_SIZE * scale,
            palette::CONTOUR,
        );
    }
    gizmos.circle_2d(Isometry2d::from_translation(goal), config.goal_radius, palette::GOAL);

    // Walk origin
    let (sx, sy) = config.start_point();
    gizmos.circle_2d(
        Isometry2d::from_translation(panel.project(sx, sy)),
        TIP_RADIUS,
        palette::AXIS,
    );

    // Revealed prefix of the walk, ascent red / descent blue
    for segment in session.revealed_segments() {
        let color = if segment.ascent {
            palette::ASCENT
        } else {
            palette::DESCENT
        };
        gizmos.line_2d(
            panel.project(segment.start.0, segment.start.1),
            panel.project(segment.end.0, segment.end.1),
            color,
        );
    }

    let (tx, ty) = session.tip();
    gizmos.circle_2d(
        Isometry2d::from_translation(panel.project(tx, ty)),
        TIP_RADIUS,
        palette::ASCENT,
    );
}
