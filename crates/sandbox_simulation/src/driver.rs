//! Frame driver — явный цикл вместо self-rescheduling render loop
//!
//! Архитектура:
//! - FrameDriver владеет Bevy App и флагом running
//! - Каждый tick: FrameClock.delta_ms = delta → app.update()
//! - Остановка: stop() снаружи, StopSimulation event изнутри мира или AppExit
//! - Остановленный driver игнорирует tick'и (детерминированное завершение)

use bevy::prelude::*;

use crate::logger;
use crate::render::{render_markers, MarkerRenderer};

/// Elapsed time текущего кадра (миллисекунды)
///
/// Выставляется frame driver collaborator'ом перед каждым update:
/// headless — FrameDriver::tick, client — из Bevy Time.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameClock {
    delta_ms: f32,
}

impl FrameClock {
    pub fn new(delta_ms: f32) -> Self {
        let mut clock = Self::default();
        clock.set_delta_ms(delta_ms);
        clock
    }

    /// Отрицательная delta → 0
    pub fn set_delta_ms(&mut self, delta_ms: f32) {
        self.delta_ms = delta_ms.max(0.0);
    }

    pub fn delta_ms(&self) -> f32 {
        self.delta_ms
    }
}

/// Event: запрос остановить driver изнутри симуляции
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct StopSimulation;

/// Headless driver
pub struct FrameDriver {
    app: App,
    running: bool,
    frames: u64,
}

impl FrameDriver {
    pub fn new(app: App) -> Self {
        logger::log("FrameDriver started");
        Self {
            app,
            running: true,
            frames: 0,
        }
    }

    /// Один кадр. Возвращает true если driver ещё работает.
    pub fn tick(&mut self, delta_ms: f32) -> bool {
        if !self.running {
            return false;
        }

        self.app
            .world_mut()
            .get_resource_or_insert_with(FrameClock::default)
            .set_delta_ms(delta_ms);
        self.app.update();
        self.frames += 1;

        if self.stop_requested() {
            self.stop();
        }

        self.running
    }

    /// До `count` кадров с фиксированной delta; возвращает сколько реально прошло
    pub fn run_frames(&mut self, count: u64, delta_ms: f32) -> u64 {
        let start = self.frames;
        for _ in 0..count {
            if !self.tick(delta_ms) {
                break;
            }
        }
        self.frames - start
    }

    pub fn stop(&mut self) {
        if self.running {
            self.running = false;
            logger::log_info(&format!("FrameDriver stopped after {} frames", self.frames));
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    /// Отдаёт позиции всех персонажей render collaborator'у
    pub fn render(&mut self, renderer: &mut impl MarkerRenderer) {
        render_markers(self.app.world_mut(), renderer);
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }

    fn stop_requested(&self) -> bool {
        let stop_event = self
            .app
            .world()
            .get_resource::<Events<StopSimulation>>()
            .is_some_and(|events| !events.is_empty());

        stop_event || self.app.should_exit().is_some()
    }
}
