//! Client-side collaborators: keyboard, window resize, frame clock
//!
//! Всё пишется в resources/events симуляции ДО SandboxSet::Input,
//! симуляция про Bevy Input/Window ничего не знает.

use bevy::prelude::*;
use bevy::window::WindowResized;
use sandbox_simulation::{FrameClock, PlayerInput, SandboxSet, ViewportResized};

pub struct ClientInputPlugin;

impl Plugin for ClientInputPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (feed_frame_clock, read_keyboard, forward_window_resize).before(SandboxSet::Input),
        );
    }
}

/// Bevy Time → FrameClock (миллисекунды)
fn feed_frame_clock(time: Res<Time>, mut clock: ResMut<FrameClock>) {
    clock.set_delta_ms(time.delta_secs() * 1000.0);
}

/// Стрелки / WASD → PlayerInput (polled раз в кадр), Escape → выход
fn read_keyboard(
    keys: Res<ButtonInput<KeyCode>>,
    mut input: ResMut<PlayerInput>,
    mut exit: EventWriter<AppExit>,
) {
    let held = |primary: KeyCode, alt: KeyCode| keys.pressed(primary) || keys.pressed(alt);

    input.apply_held(
        held(KeyCode::ArrowLeft, KeyCode::KeyA),
        held(KeyCode::ArrowRight, KeyCode::KeyD),
        held(KeyCode::ArrowUp, KeyCode::KeyW),
        held(KeyCode::ArrowDown, KeyCode::KeyS),
    );

    if keys.just_pressed(KeyCode::Escape) {
        exit.write(AppExit::Success);
    }
}

/// WindowResized → ViewportResized (boundary source)
fn forward_window_resize(
    mut resized: EventReader<WindowResized>,
    mut viewport: EventWriter<ViewportResized>,
) {
    if let Some(last) = resized.read().last() {
        viewport.write(ViewportResized {
            width: last.width,
            height: last.height,
        });
    }
}
