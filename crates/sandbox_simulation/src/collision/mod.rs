//! Collision domain — только detection + logging
//!
//! Никакого response/resolution: игрок проходит сквозь NPC,
//! мы лишь сообщаем о начале касания (CollisionDetected).

use bevy::prelude::*;

use crate::actor::{Character, Player};
use crate::logger;
use crate::movement::{is_colliding, Position, DEFAULT_COLLISION_RADIUS};

/// Радиус маркера персонажа
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct CollisionRadius(pub f32);

impl Default for CollisionRadius {
    fn default() -> Self {
        Self(DEFAULT_COLLISION_RADIUS)
    }
}

impl CollisionRadius {
    pub fn new(radius: f32) -> Self {
        Self(radius.max(0.0))
    }
}

/// Текущие контакты игрока (для one-time события)
///
/// Проблема: пока игрок стоит внутри NPC, check возвращает true каждый frame.
/// Решение: храним, с кем уже касаемся, и шлём event только на переходе
/// not-touching → touching. Когда разошлись — удаляем из списка.
#[derive(Component, Debug, Clone, Default)]
pub struct Contacts {
    pub touching: Vec<Entity>,
}

/// Event: игрок начал касаться другого персонажа
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollisionDetected {
    pub player: Entity,
    pub other: Entity,
}

/// Система: collision check игрок ↔ все остальные Character
///
/// Радиус берётся игрока (`distance < player_radius * 2`).
pub fn detect_collisions(
    mut players: Query<(Entity, &Position, &CollisionRadius, &mut Contacts), With<Player>>,
    characters: Query<(Entity, &Position), With<Character>>,
    mut collisions: EventWriter<CollisionDetected>,
) {
    for (player, player_pos, radius, mut contacts) in players.iter_mut() {
        for (other, other_pos) in characters.iter() {
            if other == player {
                continue;
            }

            let colliding = is_colliding(player_pos.0, other_pos.0, radius.0);
            let known = contacts.touching.contains(&other);

            match (colliding, known) {
                (true, false) => {
                    contacts.touching.push(other);
                    collisions.write(CollisionDetected { player, other });
                    logger::log_info(&format!(
                        "Collision: {:?} touches {:?} at ({:.1}, {:.1})",
                        player, other, player_pos.0.x, player_pos.0.y
                    ));
                }
                (false, true) => {
                    contacts.touching.retain(|e| *e != other);
                }
                _ => {}
            }
        }

        // Despawned entities не должны висеть в contacts
        contacts.touching.retain(|e| characters.contains(*e));
    }
}
