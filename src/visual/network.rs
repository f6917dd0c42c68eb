use crate::camera::PanelLayout;
use crate::input::ControlEvent;
use crate::sim::{NetworkSession, SimConfig};
use crate::visual::palette;

use bevy::prelude::*;
use std::time::Duration;

/// Base radius of a clean node, in plot units (reference figure: r = 6)
const NODE_RADIUS: f32 = 6.0;

/// Revealed targets render larger, like the reference devil glyph
const TARGET_RADIUS: f32 = 9.0;

pub struct NetworkPlugin;

impl Plugin for NetworkPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (load_scenario_config, setup_network_session).chain())
            .add_systems(
                Update,
                (
                    advance_scenario,
                    tick_pulse,
                    handle_scenario_controls,
                    draw_network,
                )
                    .chain(),
            );
    }
}

/// Periodic reveal-advance; fires every `advance_ms`
#[derive(Resource)]
struct ScenarioTimer(Timer);

/// Periodic pulse tick; fires every `pulse_ms`, independent of the reveal
#[derive(Resource)]
struct PulseTimer(Timer);

/// Load the embedded scenario config and make it available to every
/// illustration. Bad embedded data is a build mistake, not a runtime
/// condition, so it stops the app here.
pub fn load_scenario_config(mut commands: Commands) {
    match SimConfig::load() {
        Ok(config) => {
            info!(
                "scenario config loaded: {} nodes requested, {} scheduled targets",
                config.sampler.count,
                config.schedule.len()
            );
            commands.insert_resource(config);
        }
        Err(e) => {
            error!("failed to load scenario config: {}", e);
            panic!("cannot continue without scenario config");
        }
    }
}

fn setup_network_session(mut commands: Commands, config: Res<SimConfig>) {
    let mut rng = rand::rng();
    let session = NetworkSession::generate(&config, &mut rng);

    info!(
        "network generated: {} nodes, {} edges",
        session.nodes().len(),
        session.edges().len()
    );
    if session.nodes().len() < config.sampler.count {
        warn!(
            "placement shortfall: {} of {} nodes placed",
            session.nodes().len(),
            config.sampler.count
        );
    }

    commands.insert_resource(session);
    commands.insert_resource(ScenarioTimer(Timer::new(
        Duration::from_millis(config.advance_ms),
        TimerMode::Repeating,
    )));
    commands.insert_resource(PulseTimer(Timer::new(
        Duration::from_millis(config.pulse_ms),
        TimerMode::Repeating,
    )));
}

fn advance_scenario(
    time: Res<Time>,
    mut timer: ResMut<ScenarioTimer>,
    mut session: ResMut<NetworkSession>,
) {
    if !timer.0.tick(time.delta()).just_finished() {
        return;
    }

    if session.advance() {
        info!("reveal advanced to step {}", session.reveal_step());
    }
}

fn tick_pulse(time: Res<Time>, mut timer: ResMut<PulseTimer>, mut session: ResMut<NetworkSession>) {
    // A long frame can span several pulse periods; catch up tick by tick
    // so the oscillation phase stays consistent
    for _ in 0..timer.0.tick(time.delta()).times_finished_this_tick() {
        session.tick_pulse();
    }
}

fn handle_scenario_controls(
    mut events: MessageReader<ControlEvent>,
    mut session: ResMut<NetworkSession>,
) {
    for event in events.read() {
        if *event == ControlEvent::ResetScenario {
            session.reset();
            info!("scenario reset");
        }
    }
}

/// Immediate-mode render of the latest snapshot: links underneath, nodes
/// on top, revealed targets scaled by the pulse clock.
fn draw_network(session: Res<NetworkSession>, layout: Res<PanelLayout>, mut gizmos: Gizmos) {
    let panel = layout.network;
    let nodes = session.nodes();

    for edge in session.edges().edges() {
        let a = &nodes[edge.from.index()];
        let b = &nodes[edge.to.index()];
        gizmos.line_2d(
            panel.project(a.x, a.y),
            panel.project(b.x, b.y),
            palette::LINKS,
        );
    }

    for node in nodes {
        let position = panel.project(node.x, node.y);
        let color = palette::node_color(node.status, node.affected);
        let scale = session.pulse().scale_for(node.status);

        if node.status.is_malicious() {
            gizmos.circle_2d(Isometry2d::from_translation(position), TARGET_RADIUS * scale, color);
            gizmos.circle_2d(
                Isometry2d::from_translation(position),
                TARGET_RADIUS * scale * 0.5,
                color,
            );
        } else {
            gizmos.circle_2d(Isometry2d::from_translation(position), NODE_RADIUS, color);
        }
    }
}
