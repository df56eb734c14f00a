//! Movement events

use bevy::prelude::*;

/// Event: viewport/canvas изменил размер
///
/// Генерируется:
/// - Client (WindowResized)
/// - Headless driver / тесты напрямую
///
/// Обрабатывается:
/// - apply_viewport_resize: заменяет Boundary на `[0, width] x [0, height]`
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct ViewportResized {
    pub width: f32,
    pub height: f32,
}
