//! Movement systems: boundary source + per-frame шаг Mover

use bevy::prelude::*;

use super::boundary::Boundary;
use super::components::{MoveDirection, MovementSpeed, Position};
use super::events::ViewportResized;
use super::mover;
use crate::actor::Character;
use crate::driver::FrameClock;
use crate::logger;

/// Система: resize viewport → новый Boundary
///
/// Берём только последний resize за кадр, промежуточные не важны.
pub fn apply_viewport_resize(
    mut events: EventReader<ViewportResized>,
    mut boundary: ResMut<Boundary>,
) {
    let Some(resize) = events.read().last().copied() else {
        return;
    };

    let updated = Boundary::from_extent(resize.width, resize.height);
    if *boundary != updated {
        *boundary = updated;
        logger::log(&format!(
            "Boundary updated: x=[{}, {}] y=[{}, {}]",
            updated.min_x(),
            updated.max_x(),
            updated.min_y(),
            updated.max_y()
        ));
    }
}

/// Система: один шаг Mover для каждого Character
///
/// delta берётся из FrameClock (его выставляет frame driver),
/// не из Bevy Time — так headless тики полностью детерминированы.
pub fn move_characters(
    mut query: Query<(&mut Position, &MoveDirection, &MovementSpeed), With<Character>>,
    clock: Res<FrameClock>,
    boundary: Res<Boundary>,
) {
    let delta_ms = clock.delta_ms();

    for (mut position, direction, speed) in query.iter_mut() {
        let next = mover::step(position.0, direction.get(), speed.get(), delta_ms, &boundary);

        // Не трогаем компонент если ничего не поменялось (Changed<Position> остаётся тихим)
        if next != position.0 {
            position.0 = next;
        }
    }
}
