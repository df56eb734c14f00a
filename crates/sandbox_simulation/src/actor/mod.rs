//! Actor domain — персонажи sandbox и их spawn helpers
//!
//! - Character: базовый маркер (Required Components: Position, MoveDirection, MovementSpeed, CollisionRadius)
//! - Player: управляется PlayerInput
//! - Npc: стоит на месте, участвует только в collision check

use bevy::prelude::*;
use rand::Rng;

use crate::collision::{CollisionRadius, Contacts};
use crate::movement::{Boundary, MoveDirection, MovementSpeed, Position};

/// Персонаж (игрок или NPC) — всё, что Mover двигает и renderer рисует
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
#[require(Position, MoveDirection, MovementSpeed, CollisionRadius)]
pub struct Character;

/// Marker component для player-controlled entity
///
/// Input systems используют `With<Player>` filter.
/// Collision check идёт от игрока ко всем остальным Character.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
#[require(Character, Contacts)]
pub struct Player;

/// Неподвижный персонаж (цель для collision logging)
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
#[require(Character)]
pub struct Npc;

/// Spawn игрока
pub fn spawn_player(commands: &mut Commands, position: Vec2, speed: f32, radius: f32) -> Entity {
    commands
        .spawn((
            Player,
            Position(position),
            MovementSpeed::new(speed),
            CollisionRadius::new(radius),
        ))
        .id()
}

/// Spawn `count` NPC в случайных точках внутри boundary (отступ = radius от краёв)
///
/// Boundary должен быть конечным — в бесконечном прямоугольнике
/// равномерно не расставить, тогда все NPC встают в (0, 0).
pub fn spawn_npcs<R: Rng>(
    commands: &mut Commands,
    rng: &mut R,
    boundary: &Boundary,
    count: usize,
    radius: f32,
) -> Vec<Entity> {
    let area = boundary.inset(radius);

    (0..count)
        .map(|_| {
            let position = random_point(rng, &area);
            commands
                .spawn((
                    Npc,
                    Position(position),
                    MovementSpeed::new(0.0),
                    CollisionRadius::new(radius),
                ))
                .id()
        })
        .collect()
}

fn random_point<R: Rng>(rng: &mut R, area: &Boundary) -> Vec2 {
    if !area.is_finite() {
        return Vec2::ZERO;
    }

    Vec2::new(
        sample_axis(rng, area.min_x(), area.max_x()),
        sample_axis(rng, area.min_y(), area.max_y()),
    )
}

fn sample_axis<R: Rng>(rng: &mut R, min: f32, max: f32) -> f32 {
    // gen_range паникует на пустом диапазоне
    if min < max {
        rng.gen_range(min..=max)
    } else {
        min
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_random_point_inside_area() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let area = Boundary::from_extent(800.0, 600.0).inset(32.0);

        for _ in 0..200 {
            assert!(area.contains(random_point(&mut rng, &area)));
        }
    }

    #[test]
    fn test_random_point_degenerate_area() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        assert_eq!(random_point(&mut rng, &Boundary::unbounded()), Vec2::ZERO);

        let line = Boundary::new(5.0, 5.0, 0.0, 10.0);
        assert_eq!(random_point(&mut rng, &line).x, 5.0);
    }
}
