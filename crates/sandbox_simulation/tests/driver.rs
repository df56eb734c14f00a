//! FrameDriver: явный stop/continue вместо self-rescheduling loop

use bevy::prelude::{AppExit, EventWriter, Local, Update, Vec2};
use sandbox_simulation::*;

fn create_driver() -> FrameDriver {
    FrameDriver::new(create_headless_app(7))
}

/// Система: просит остановку на N-м кадре (счётчик в Local)
fn stop_on_third_frame(mut frames: Local<u32>, mut stop: EventWriter<StopSimulation>) {
    *frames += 1;
    if *frames == 3 {
        stop.write(StopSimulation);
    }
}

#[test]
fn test_tick_sets_frame_clock() {
    let mut driver = create_driver();

    assert!(driver.tick(16.5));
    assert_eq!(driver.app().world().resource::<FrameClock>().delta_ms(), 16.5);

    // Отрицательная delta → 0
    driver.tick(-5.0);
    assert_eq!(driver.app().world().resource::<FrameClock>().delta_ms(), 0.0);
    assert_eq!(driver.frame_count(), 2);
}

#[test]
fn test_stopped_driver_ignores_ticks() {
    let mut driver = create_driver();
    driver.run_frames(5, 16.0);

    driver.stop();

    assert!(!driver.is_running());
    assert!(!driver.tick(16.0));
    assert_eq!(driver.run_frames(10, 16.0), 0);
    assert_eq!(driver.frame_count(), 5);
}

#[test]
fn test_stop_event_from_world() {
    let mut driver = create_driver();
    driver.app_mut().add_systems(Update, stop_on_third_frame);

    let ran = driver.run_frames(100, 16.0);

    assert_eq!(ran, 3);
    assert!(!driver.is_running());
}

#[test]
fn test_app_exit_stops_driver() {
    let mut driver = create_driver();
    driver.tick(16.0);

    driver.app_mut().world_mut().send_event(AppExit::Success);

    assert!(!driver.tick(16.0));
    assert_eq!(driver.frame_count(), 2);
}

#[test]
fn test_render_hands_markers_in_spawn_order() {
    let mut driver = create_driver();
    let world = driver.app_mut().world_mut();
    spawn_player(&mut world.commands(), Vec2::new(10.0, 20.0), 100.0, 16.0);
    world.flush();
    world.spawn((Npc, Position::new(300.0, 40.0)));

    let mut renderer = RecordingRenderer::default();
    driver.render(&mut renderer);

    assert_eq!(
        renderer.markers,
        vec![
            Marker {
                position: Vec2::new(10.0, 20.0),
                radius: 16.0,
                is_player: true,
            },
            Marker {
                position: Vec2::new(300.0, 40.0),
                radius: DEFAULT_COLLISION_RADIUS,
                is_player: false,
            },
        ]
    );
}
