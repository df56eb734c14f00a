//! Sandbox Simulation Core
//!
//! 2D character-movement sandbox на Bevy 0.16 ECS.
//!
//! Слои:
//! - movement::mover — чистая математика (step, normalize_direction, is_colliding)
//! - ECS — компоненты/системы, которые кормят Mover раз в кадр
//! - collaborators — input source, frame driver, boundary source, renderer
//!   (headless: FrameDriver + RecordingRenderer, окно: sandbox_client)

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// Публичные модули
pub mod actor;
pub mod collision;
pub mod config;
pub mod driver;
pub mod input;
pub mod logger;
pub mod movement;
pub mod render;

// Re-export базовых типов для удобства
pub use actor::{spawn_npcs, spawn_player, Character, Npc, Player};
pub use collision::{CollisionDetected, CollisionRadius, Contacts};
pub use config::{ConfigError, SandboxConfig};
pub use driver::{FrameClock, FrameDriver, StopSimulation};
pub use input::PlayerInput;
pub use logger::{log, log_info, log_warning};
pub use movement::{
    is_colliding, normalize_direction, step, Boundary, MoveDirection, MovementSpeed, Position, ViewportResized,
    DEFAULT_COLLISION_RADIUS,
};
pub use render::{draw_markers, Marker, MarkerRenderer, RecordingRenderer};

/// Порядок систем внутри кадра: input → movement → collision
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SandboxSet {
    Input,
    Movement,
    Collision,
}

/// Главный plugin симуляции
pub struct SandboxPlugin;

impl Plugin for SandboxPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<Position>()
            .register_type::<MoveDirection>()
            .register_type::<MovementSpeed>()
            .register_type::<CollisionRadius>()
            .register_type::<Boundary>()
            .init_resource::<Boundary>()
            .init_resource::<PlayerInput>()
            .init_resource::<FrameClock>()
            .add_event::<ViewportResized>()
            .add_event::<CollisionDetected>()
            .add_event::<StopSimulation>()
            .configure_sets(
                Update,
                (SandboxSet::Input, SandboxSet::Movement, SandboxSet::Collision).chain(),
            )
            .add_systems(
                Update,
                (movement::apply_viewport_resize, input::apply_player_input)
                    .chain()
                    .in_set(SandboxSet::Input),
            )
            .add_systems(Update, movement::move_characters.in_set(SandboxSet::Movement))
            .add_systems(Update, collision::detect_collisions.in_set(SandboxSet::Collision));
    }
}

/// Детерминистичный RNG resource (seeded)
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

/// Создаёт minimal Bevy App для headless симуляции (без сцены)
pub fn create_headless_app(seed: u64) -> App {
    let mut app = App::new();
    logger::init_logger();
    app.add_plugins(MinimalPlugins)
        .add_plugins(SandboxPlugin)
        .insert_resource(DeterministicRng::new(seed));

    app
}

/// Headless App со сценой из конфига: boundary, игрок в старте, NPC по seed
pub fn create_sandbox_app(config: &SandboxConfig) -> App {
    let mut app = create_headless_app(config.seed);
    app.insert_resource(config.boundary())
        .insert_resource(config.clone());
    setup_scene(app.world_mut());

    app
}

/// Spawn игрока и NPC по SandboxConfig + Boundary из мира
///
/// Используется и headless, и клиентом (Startup).
pub fn setup_scene(world: &mut World) {
    let config = world.get_resource::<SandboxConfig>().cloned().unwrap_or_default();
    let boundary = world.get_resource::<Boundary>().copied().unwrap_or_else(|| config.boundary());

    let mut rng = world
        .remove_resource::<DeterministicRng>()
        .unwrap_or_else(|| DeterministicRng::new(config.seed));

    let (player, npcs) = {
        let mut commands = world.commands();
        let player = spawn_player(
            &mut commands,
            boundary.clamp(config.start_position()),
            config.player_speed,
            config.marker_radius,
        );
        let npcs = spawn_npcs(&mut commands, &mut rng.rng, &boundary, config.npc_count, config.marker_radius);
        (player, npcs)
    };

    world.insert_resource(rng);
    world.flush();

    logger::log_info(&format!(
        "Scene ready: player {:?}, {} npc(s), seed {}",
        player,
        npcs.len(),
        config.seed
    ));
}

/// Snapshot мира для сравнения детерминизма
pub fn world_snapshot<T: Component>(world: &mut World) -> Vec<u8>
where
    T: std::fmt::Debug,
{
    let mut snapshot = Vec::new();

    let mut query = world.query::<(Entity, &T)>();
    let mut entities: Vec<_> = query.iter(world).collect();

    // Сортируем по Entity ID для детерминизма
    entities.sort_by_key(|(entity, _)| entity.index());

    // Сериализуем в байты через Debug (простейший способ)
    for (entity, component) in entities {
        snapshot.extend_from_slice(&entity.index().to_le_bytes());
        snapshot.extend_from_slice(format!("{:?}", component).as_bytes());
    }

    snapshot
}
