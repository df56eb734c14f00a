//! Headless sandbox
//!
//! Запускает симуляцию без окна: скриптованный input, фиксированная delta 16ms.
//! Usage: `sandbox_simulation [config.json]`

use std::path::PathBuf;

use sandbox_simulation::logger::{self, LogLevel};
use sandbox_simulation::{
    create_sandbox_app, FrameDriver, Player, PlayerInput, Position, RecordingRenderer, SandboxConfig,
};

const FRAME_MS: f32 = 16.0;

/// (кадров, raw direction) — что "зажато" на каждом отрезке
const SCRIPT: &[(u64, (f32, f32))] = &[
    (60, (1.0, 0.0)),   // вправо 1 sec
    (60, (1.0, 1.0)),   // диагональ вниз-вправо
    (30, (0.0, 0.0)),   // отпустили
    (120, (-1.0, -1.0)), // вверх-влево до упора
];

fn main() {
    logger::init_logger();
    if let Some(level) = std::env::var("SANDBOX_LOG").ok().and_then(|v| LogLevel::parse(&v)) {
        logger::set_log_level(level);
    }

    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = SandboxConfig::load_or_default(config_path.as_deref());
    logger::log_info(&format!("Starting headless sandbox (seed: {})", config.seed));

    let mut driver = FrameDriver::new(create_sandbox_app(&config));

    for &(frames, (x, y)) in SCRIPT {
        {
            let mut input = driver.app_mut().world_mut().resource_mut::<PlayerInput>();
            if x == 0.0 && y == 0.0 {
                input.release();
            } else {
                input.press(x, y);
            }
        }

        driver.run_frames(frames, FRAME_MS);
        log_player_position(&mut driver);
    }

    let mut renderer = RecordingRenderer::default();
    driver.render(&mut renderer);
    logger::log_info(&format!("Rendered {} marker(s)", renderer.markers.len()));

    driver.stop();
}

fn log_player_position(driver: &mut FrameDriver) {
    let world = driver.app_mut().world_mut();
    let mut query = world.query_filtered::<&Position, bevy::prelude::With<Player>>();

    for position in query.iter(world) {
        logger::log_info(&format!("Player at ({:.1}, {:.1})", position.0.x, position.0.y));
    }
}
