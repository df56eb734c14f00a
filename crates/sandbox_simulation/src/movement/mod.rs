//! Movement domain — позиция, направление, скорость, границы
//!
//! Содержит:
//! - mover (чистая математика: step / normalize_direction / is_colliding)
//! - Boundary (resource, axis-aligned прямоугольник)
//! - Position / MoveDirection / MovementSpeed (components)
//! - ViewportResized (event от boundary source)
//! - apply_viewport_resize / move_characters (systems)

pub mod boundary;
pub mod components;
pub mod events;
pub mod mover;
pub mod systems;

// Re-export all components and events
pub use boundary::*;
pub use components::*;
pub use events::*;
pub use mover::{is_colliding, normalize_direction, step, DEFAULT_COLLISION_RADIUS};
pub use systems::*;
