//! Player input — polled input state
//!
//! # Архитектура
//!
//! ```text
//! Input source (client keyboard / headless тест)
//!     ↓ press(x, y) / release()
//! PlayerInput (Resource) — читается ОДИН раз за кадр
//!     ↓
//! apply_player_input (ECS system)
//!     ↓
//! MoveDirection::set (нормализация) на всех Player
//! ```
//!
//! Никаких callback'ов на событие клавиши и глобального keyboard state:
//! источник пишет в resource, система читает в своём SandboxSet::Input.

use bevy::prelude::*;

use crate::actor::Player;
use crate::movement::MoveDirection;

/// Raw direction от input source
///
/// # Coordinate System
/// Canvas: `x` вправо, `y` вниз.
/// - ArrowUp / W: `(0, -1)`
/// - ArrowDown / S: `(0, 1)`
/// - ArrowLeft / A: `(-1, 0)`
/// - ArrowRight / D: `(1, 0)`
/// - Up + Right: `(1, -1)` — нормализуется уже в MoveDirection
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct PlayerInput {
    raw_direction: Vec2,
}

impl PlayerInput {
    /// "Direction pressed": raw axis combination, не обязательно unit
    pub fn press(&mut self, x: f32, y: f32) {
        self.raw_direction = Vec2::new(x, y);
    }

    /// "Direction released": сброс в (0, 0)
    pub fn release(&mut self) {
        self.raw_direction = Vec2::ZERO;
    }

    pub fn raw_direction(&self) -> Vec2 {
        self.raw_direction
    }

    /// Комбинация зажатых направлений → raw axis в {-1, 0, 1}²
    ///
    /// Противоположные клавиши гасят друг друга.
    pub fn axes_from_held(left: bool, right: bool, up: bool, down: bool) -> Vec2 {
        let axis = |negative: bool, positive: bool| (positive as i8 - negative as i8) as f32;
        Vec2::new(axis(left, right), axis(up, down))
    }

    /// Применяет зажатые направления: что-то зажато → press, ничего → release
    pub fn apply_held(&mut self, left: bool, right: bool, up: bool, down: bool) {
        let raw = Self::axes_from_held(left, right, up, down);
        if raw == Vec2::ZERO {
            self.release();
        } else {
            self.press(raw.x, raw.y);
        }
    }
}

/// Система: PlayerInput → MoveDirection для player-controlled entity
pub fn apply_player_input(
    input: Res<PlayerInput>,
    mut players: Query<&mut MoveDirection, With<Player>>,
) {
    let raw = input.raw_direction();

    for mut direction in players.iter_mut() {
        direction.set(raw.x, raw.y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_and_release() {
        let mut input = PlayerInput::default();

        input.press(1.0, -1.0);
        assert_eq!(input.raw_direction(), Vec2::new(1.0, -1.0));

        input.release();
        assert_eq!(input.raw_direction(), Vec2::ZERO);
    }

    #[test]
    fn test_axes_from_held() {
        assert_eq!(PlayerInput::axes_from_held(false, true, true, false), Vec2::new(1.0, -1.0));
        assert_eq!(PlayerInput::axes_from_held(true, false, false, true), Vec2::new(-1.0, 1.0));
        // Left + Right гасят друг друга
        assert_eq!(PlayerInput::axes_from_held(true, true, false, false), Vec2::ZERO);
    }

    #[test]
    fn test_apply_held_releases_when_nothing_held() {
        let mut input = PlayerInput::default();

        input.apply_held(false, false, false, true);
        assert_eq!(input.raw_direction(), Vec2::new(0.0, 1.0));

        input.apply_held(false, false, false, false);
        assert_eq!(input.raw_direction(), Vec2::ZERO);
    }
}
