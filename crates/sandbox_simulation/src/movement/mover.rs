//! Mover — чистая 2D математика перемещения
//!
//! Без ECS, без состояния: на вход позиция/направление/скорость/delta,
//! на выход новая позиция внутри boundary.
//!
//! Единицы: speed — distance/sec, delta — миллисекунды (как отдаёт frame driver).

use bevy::math::Vec2;

use super::boundary::Boundary;

/// Радиус маркера по умолчанию (pixels)
pub const DEFAULT_COLLISION_RADIUS: f32 = 32.0;

/// Нормализует raw direction: ненулевой вектор → длина 1, ноль → ноль.
///
/// Диагональ (1, 1) превращается в (0.7071, 0.7071), поэтому диагональное
/// движение не быстрее осевого.
pub fn normalize_direction(x: f32, y: f32) -> Vec2 {
    let len = (x * x + y * y).sqrt();
    if len > 0.0 {
        Vec2::new(x / len, y / len)
    } else {
        Vec2::ZERO
    }
}

/// Один шаг движения: `position + direction * speed * (delta_ms / 1000)`,
/// затем clamp по каждой оси отдельно.
///
/// Гарантии:
/// - результат всегда внутри `boundary` (включительно)
/// - нулевое направление / нулевая скорость / `delta_ms == 0` → только clamp входа
/// - бесконечная граница оси не клампит
///
/// Отрицательный `delta_ms` считается нулём (время назад не идёт).
/// Бесконечная / NaN скорость или delta тоже считаются нулём.
pub fn step(position: Vec2, direction: Vec2, speed: f32, delta_ms: f32, boundary: &Boundary) -> Vec2 {
    let delta_secs = finite_non_negative(delta_ms) / 1000.0;
    let displacement = direction * finite_non_negative(speed) * delta_secs;

    boundary.clamp(position + displacement)
}

/// `value` если конечное и >= 0, иначе 0
pub(crate) fn finite_non_negative(value: f32) -> f32 {
    if value.is_finite() {
        value.max(0.0)
    } else {
        0.0
    }
}

/// Касаются ли два маркера радиуса `radius`: distance < radius * 2 (строго).
///
/// Симметрично, без side effects. Используется только для логирования —
/// никакого collision response нет.
pub fn is_colliding(a: Vec2, b: Vec2, radius: f32) -> bool {
    a.distance(b) < radius * 2.0
}
