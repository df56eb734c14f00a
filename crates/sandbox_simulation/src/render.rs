//! Render collaborator interface
//!
//! Симуляция не рисует сама: отдаёт (position, radius) каждого персонажа
//! реализации MarkerRenderer. Client — gizmos, тесты — запись в Vec.

use bevy::prelude::*;

use crate::actor::{Character, Player};
use crate::collision::CollisionRadius;
use crate::movement::Position;

/// Получатель маркеров для отрисовки (один вызов на персонажа за кадр)
pub trait MarkerRenderer {
    fn draw_marker(&mut self, position: Vec2, radius: f32, is_player: bool);
}

/// Один маркер, как его видит renderer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    pub position: Vec2,
    pub radius: f32,
    pub is_player: bool,
}

/// Renderer который просто копит маркеры (headless / тесты)
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub markers: Vec<Marker>,
}

impl MarkerRenderer for RecordingRenderer {
    fn draw_marker(&mut self, position: Vec2, radius: f32, is_player: bool) {
        self.markers.push(Marker {
            position,
            radius,
            is_player,
        });
    }
}

/// Отдаёт renderer'у всех Character мира (headless, нужен `&mut World`)
pub fn render_markers(world: &mut World, renderer: &mut impl MarkerRenderer) {
    let mut query = world.query_filtered::<(Entity, &Position, &CollisionRadius, Has<Player>), With<Character>>();
    draw_markers(query.iter(world), renderer);
}

/// Общая часть для headless и client: сортировка + вызовы draw_marker
///
/// Порядок — по Entity index, чтобы вывод был стабильным между прогонами.
pub fn draw_markers<'a>(
    characters: impl IntoIterator<Item = (Entity, &'a Position, &'a CollisionRadius, bool)>,
    renderer: &mut impl MarkerRenderer,
) {
    let mut markers: Vec<_> = characters.into_iter().collect();
    markers.sort_by_key(|(entity, ..)| entity.index());

    for (_, position, radius, is_player) in markers {
        renderer.draw_marker(position.0, radius.0, is_player);
    }
}
