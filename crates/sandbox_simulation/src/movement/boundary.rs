//! Boundary — axis-aligned прямоугольник, в котором живут персонажи

use bevy::prelude::*;

/// Границы мира (canvas coordinates: origin top-left, y вниз)
///
/// Каждая граница опциональна: `f32::NEG_INFINITY` / `f32::INFINITY` = без ограничения.
/// Инвариант: `min_x <= max_x`, `min_y <= max_y` (конструкторы меняют местами перевёрнутые границы).
/// Поля приватные — собрать Boundary можно только через конструкторы.
///
/// Resource: один на мир, обновляется boundary source (resize viewport),
/// Mover только читает.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Resource)]
pub struct Boundary {
    min_x: f32,
    max_x: f32,
    min_y: f32,
    max_y: f32,
}

impl Default for Boundary {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl Boundary {
    /// Без ограничений по обеим осям
    pub const fn unbounded() -> Self {
        Self {
            min_x: f32::NEG_INFINITY,
            max_x: f32::INFINITY,
            min_y: f32::NEG_INFINITY,
            max_y: f32::INFINITY,
        }
    }

    pub fn new(min_x: f32, max_x: f32, min_y: f32, max_y: f32) -> Self {
        let (min_x, max_x) = ordered(min_x, max_x);
        let (min_y, max_y) = ordered(min_y, max_y);
        Self { min_x, max_x, min_y, max_y }
    }

    /// `[0, width] x [0, height]` — размер canvas/viewport
    pub fn from_extent(width: f32, height: f32) -> Self {
        Self::new(0.0, width.max(0.0), 0.0, height.max(0.0))
    }

    pub fn min_x(&self) -> f32 {
        self.min_x
    }

    pub fn max_x(&self) -> f32 {
        self.max_x
    }

    pub fn min_y(&self) -> f32 {
        self.min_y
    }

    pub fn max_y(&self) -> f32 {
        self.max_y
    }

    /// Ширина/высота (inf для неограниченной оси)
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.max_x - self.min_x, self.max_y - self.min_y)
    }

    /// Clamp по каждой оси независимо.
    ///
    /// Не используем `f32::clamp` — он паникует на NaN границах.
    pub fn clamp(&self, point: Vec2) -> Vec2 {
        Vec2::new(
            point.x.max(self.min_x).min(self.max_x),
            point.y.max(self.min_y).min(self.max_y),
        )
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min_x && point.x <= self.max_x && point.y >= self.min_y && point.y <= self.max_y
    }

    /// Обе оси ограничены с двух сторон
    pub fn is_finite(&self) -> bool {
        self.min_x.is_finite() && self.max_x.is_finite() && self.min_y.is_finite() && self.max_y.is_finite()
    }

    /// Сужает прямоугольник на `margin` с каждой стороны.
    ///
    /// Если margin больше половины размера — ось схлопывается в центр.
    pub fn inset(&self, margin: f32) -> Self {
        let margin = margin.max(0.0);
        let (min_x, max_x) = shrink(self.min_x, self.max_x, margin);
        let (min_y, max_y) = shrink(self.min_y, self.max_y, margin);
        Self { min_x, max_x, min_y, max_y }
    }

    pub fn center(&self) -> Option<Vec2> {
        if !self.is_finite() {
            return None;
        }
        Some(Vec2::new((self.min_x + self.max_x) * 0.5, (self.min_y + self.max_y) * 0.5))
    }
}

fn ordered(a: f32, b: f32) -> (f32, f32) {
    if a > b {
        (b, a)
    } else {
        (a, b)
    }
}

fn shrink(min: f32, max: f32, margin: f32) -> (f32, f32) {
    let (lo, hi) = (min + margin, max - margin);
    if lo <= hi {
        (lo, hi)
    } else {
        let mid = (min + max) * 0.5;
        (mid, mid)
    }
}
