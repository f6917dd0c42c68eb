use bevy::prelude::*;

pub struct InputPlugin;
impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<ControlEvent>()
            .add_systems(Update, collect_control_events);
    }
}

/// Host-side controls for the illustrations. Decoupled from key codes so
/// the visual plugins only ever react to intent.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlEvent {
    /// Rewind the poisoning scenario to its clean state (topology kept)
    ResetScenario,
    /// Generate and replay a fresh gradient walk
    ReplayDescent,
    /// Re-place the contrastive clusters and replay the migration
    ReplayContrastive,
}

fn collect_control_events(
    keys: Res<ButtonInput<KeyCode>>,
    mut out: MessageWriter<ControlEvent>,
) {
    if keys.just_pressed(KeyCode::KeyR) {
        out.write(ControlEvent::ResetScenario);
    }
    if keys.just_pressed(KeyCode::KeyN) {
        out.write(ControlEvent::ReplayDescent);
    }
    if keys.just_pressed(KeyCode::KeyC) {
        out.write(ControlEvent::ReplayContrastive);
    }
}
