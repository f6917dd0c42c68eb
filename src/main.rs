use bevy::prelude::*;

mod camera;
mod contrastive;
mod descent;
mod input;
mod network;
mod sim;
mod visual;

use bevy::window::WindowResolution;
use camera::CameraPlugin;
use input::InputPlugin;
use visual::{ContrastivePlugin, DescentPlugin, NetworkPlugin};

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Poisoned Network".into(),
            resolution: WindowResolution::new(1400, 520),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .insert_resource(ClearColor(visual::palette::BACKGROUND))
    .add_plugins(CameraPlugin)
    .add_plugins(InputPlugin)
    .add_plugins(NetworkPlugin)
    .add_plugins(DescentPlugin)
    .add_plugins(ContrastivePlugin);

    app.run();
}
