//! Movement компоненты: позиция, направление, скорость

use bevy::prelude::*;

use super::mover::{finite_non_negative, normalize_direction};

/// Позиция персонажа (canvas coordinates)
///
/// Пишет только `move_characters` (через Mover), остальные системы читают.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct Position(pub Vec2);

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self(Vec2::new(x, y))
    }
}

/// Направление движения
///
/// Инвариант: длина ровно 1 или ровно 0.
/// Поле приватное — записать можно только через `set` (нормализует).
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct MoveDirection {
    value: Vec2,
}

impl MoveDirection {
    /// Raw input (например (1, 1) для диагонали) → unit vector, (0, 0) → zero
    pub fn set(&mut self, x: f32, y: f32) {
        self.value = normalize_direction(x, y);
    }

    pub fn get(&self) -> Vec2 {
        self.value
    }

    pub fn is_idle(&self) -> bool {
        self.value == Vec2::ZERO
    }
}

impl From<Vec2> for MoveDirection {
    fn from(raw: Vec2) -> Self {
        Self {
            value: normalize_direction(raw.x, raw.y),
        }
    }
}

/// Скорость движения (distance/sec)
///
/// Инвариант: speed конечная и >= 0. Отрицательное, бесконечное или NaN значение молча становится 0.
#[derive(Component, Clone, Copy, Debug, PartialEq, Reflect)]
#[reflect(Component)]
pub struct MovementSpeed {
    speed: f32,
}

impl Default for MovementSpeed {
    fn default() -> Self {
        Self { speed: 200.0 } // 200 px/s — базовая скорость маркера
    }
}

impl MovementSpeed {
    pub fn new(speed: f32) -> Self {
        let mut value = Self { speed: 0.0 };
        value.set(speed);
        value
    }

    pub fn set(&mut self, speed: f32) {
        self.speed = finite_non_negative(speed);
    }

    pub fn get(&self) -> f32 {
        self.speed
    }
}
