use std::path::PathBuf;

use bevy::prelude::*;
use sandbox_simulation::{logger, setup_scene, DeterministicRng, SandboxConfig, SandboxPlugin};

mod input;
mod rendering;

use input::ClientInputPlugin;
use rendering::MarkerRenderingPlugin;

fn main() {
    logger::init_logger();

    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = SandboxConfig::load_or_default(config_path.as_deref());

    App::new()
        // Bevy defaults (rendering, input, time, etc.)
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Sandbox".to_string(),
                resolution: (config.viewport_width, config.viewport_height).into(),
                ..default()
            }),
            ..default()
        }))
        // Simulation (headless ECS logic)
        .add_plugins(SandboxPlugin)
        .insert_resource(config.boundary())
        .insert_resource(DeterministicRng::new(config.seed))
        .insert_resource(config)
        // Collaborators: keyboard/resize/clock → simulation, simulation → gizmos
        .add_plugins((ClientInputPlugin, MarkerRenderingPlugin))
        .add_systems(Startup, (spawn_camera, setup_scene))
        .run();
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}
