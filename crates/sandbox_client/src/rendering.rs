use bevy::prelude::*;
use sandbox_simulation::{draw_markers, Boundary, Character, CollisionRadius, MarkerRenderer, Player, Position};

pub struct MarkerRenderingPlugin;

impl Plugin for MarkerRenderingPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PostUpdate, (draw_boundary, draw_character_markers));
    }
}

/// MarkerRenderer поверх gizmos
///
/// Симуляция в canvas coordinates (origin top-left, y вниз),
/// Camera2d — origin в центре, y вверх. Переводим через центр boundary.
struct GizmoMarkers<'a, 'w, 's> {
    gizmos: &'a mut Gizmos<'w, 's>,
    origin: Vec2,
}

impl MarkerRenderer for GizmoMarkers<'_, '_, '_> {
    fn draw_marker(&mut self, position: Vec2, radius: f32, is_player: bool) {
        let color = if is_player {
            Color::srgb(0.2, 0.6, 1.0) // Blue
        } else {
            Color::srgb(0.8, 0.2, 0.2) // Red
        };
        self.gizmos.circle_2d(canvas_to_screen(position, self.origin), radius, color);
    }
}

fn canvas_to_screen(position: Vec2, origin: Vec2) -> Vec2 {
    Vec2::new(position.x - origin.x, origin.y - position.y)
}

fn canvas_origin(boundary: &Boundary) -> Vec2 {
    boundary.center().unwrap_or(Vec2::ZERO)
}

/// Рамка boundary (только если конечный)
fn draw_boundary(boundary: Res<Boundary>, mut gizmos: Gizmos) {
    if !boundary.is_finite() {
        return;
    }

    gizmos.rect_2d(Vec2::ZERO, boundary.size(), Color::srgb(0.3, 0.5, 0.3));
}

fn draw_character_markers(
    characters: Query<(Entity, &Position, &CollisionRadius, Has<Player>), With<Character>>,
    boundary: Res<Boundary>,
    mut gizmos: Gizmos,
) {
    let mut renderer = GizmoMarkers {
        gizmos: &mut gizmos,
        origin: canvas_origin(&boundary),
    };
    draw_markers(characters.iter(), &mut renderer);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canvas_to_screen() {
        let origin = canvas_origin(&Boundary::from_extent(800.0, 600.0));

        assert_eq!(canvas_to_screen(Vec2::new(400.0, 300.0), origin), Vec2::ZERO);
        // Левый верхний угол canvas → левый верх экрана
        assert_eq!(canvas_to_screen(Vec2::ZERO, origin), Vec2::new(-400.0, 300.0));
    }
}
