//! Level layouts
//!
//! Levels 1-3 are hand-authored. Later levels are generated from a seeded
//! RNG, growing the enemy and obstacle counts with the level index.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::geometry::Obstacle;
use super::ship::Enemy;
use crate::tuning::Tuning;

/// Highest enemy count a generated level can have
pub const MAX_GENERATED_ENEMIES: u32 = 3;

/// Attempts at placing a generated obstacle clear of the player spawn
const SPAWN_REROLLS: usize = 16;

/// Raw rectangle as authored: (x, y, width, height)
type RectSpec = (f32, f32, f32, f32);

const LEVEL_1_OBSTACLES: [RectSpec; 5] = [
    (200.0, 150.0, 80.0, 200.0),
    (500.0, 100.0, 60.0, 300.0),
    (350.0, 400.0, 120.0, 40.0),
    (100.0, 500.0, 200.0, 40.0),
    (600.0, 500.0, 80.0, 40.0),
];

const LEVEL_2_OBSTACLES: [RectSpec; 5] = [
    (150.0, 150.0, 100.0, 200.0),
    (550.0, 100.0, 80.0, 250.0),
    (300.0, 350.0, 150.0, 50.0),
    (50.0, 450.0, 200.0, 40.0),
    (650.0, 450.0, 100.0, 40.0),
];

const LEVEL_3_OBSTACLES: [RectSpec; 5] = [
    (200.0, 100.0, 60.0, 300.0),
    (540.0, 100.0, 60.0, 300.0),
    (350.0, 300.0, 100.0, 60.0),
    (100.0, 500.0, 150.0, 40.0),
    (550.0, 500.0, 150.0, 40.0),
];

/// Enemy spawn point shared by the fixed levels
const FIXED_ENEMY_SPAWN: Vec2 = Vec2::new(400.0, 200.0);

/// Enemies and obstacles for one level
#[derive(Debug, Clone)]
pub struct LevelData {
    pub enemies: Vec<Enemy>,
    pub obstacles: Vec<Obstacle>,
}

impl LevelData {
    /// Build a level from raw rectangles, dropping any with no usable area
    pub fn from_specs(enemies: Vec<Enemy>, rects: &[RectSpec], level: u32) -> Self {
        let obstacles = rects
            .iter()
            .enumerate()
            .filter_map(|(i, &(x, y, w, h))| match Obstacle::new(x, y, w, h) {
                Ok(obstacle) => Some(obstacle),
                Err(err) => {
                    log::warn!("Level {}: dropping obstacle #{}: {}", level, i, err);
                    None
                }
            })
            .collect();
        Self { enemies, obstacles }
    }
}

/// Supplies the content of each level
pub trait LevelSource {
    fn level(&mut self, index: u32, tuning: &Tuning) -> LevelData;
}

/// Standard levels: fixed layouts for 1-3, seeded generation beyond
#[derive(Debug, Clone)]
pub struct GeneratedLevels {
    rng: Pcg32,
}

impl GeneratedLevels {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    fn spawn_enemy(&mut self, pos: Vec2, tuning: &Tuning) -> Enemy {
        // Stagger the first volley so enemies don't fire in lockstep
        let cooldown = self.rng.random_range(0..=tuning.enemy_fire_interval);
        Enemy::new(pos, cooldown, tuning)
    }

    fn random_rect(&mut self, width: i32, height: i32) -> RectSpec {
        let x = self.rng.random_range(50..=width - 100);
        let y = self.rng.random_range(100..=height - 100);
        let w = self.rng.random_range(40..=120);
        let h = self.rng.random_range(40..=200);
        (x as f32, y as f32, w as f32, h as f32)
    }

    fn fixed(&mut self, index: u32, rects: &[RectSpec], tuning: &Tuning) -> LevelData {
        let enemies = vec![self.spawn_enemy(FIXED_ENEMY_SPAWN, tuning)];
        LevelData::from_specs(enemies, rects, index)
    }

    fn generate(&mut self, index: u32, tuning: &Tuning) -> LevelData {
        let width = tuning.screen_width as i32;
        let height = tuning.screen_height as i32;

        let enemy_count = (1 + index / 3).min(MAX_GENERATED_ENEMIES);
        let mut enemies = Vec::with_capacity(enemy_count as usize);
        for _ in 0..enemy_count {
            let x = self.rng.random_range(50..=width - 50);
            let y = self.rng.random_range(50..=height / 2);
            let enemy = self.spawn_enemy(Vec2::new(x as f32, y as f32), tuning);
            enemies.push(enemy);
        }

        // Keep a one-step margin around the spawn so the player can always move
        let spawn = tuning.player_spawn();
        let clearance = tuning.player_radius + tuning.player_speed;
        let blocks_spawn = |&(x, y, w, h): &RectSpec| {
            Obstacle::new(x, y, w, h).is_ok_and(|o| o.overlaps_square(spawn, clearance))
        };

        let obstacle_count = 3 + index / 2;
        let mut rects = Vec::with_capacity(obstacle_count as usize);
        for _ in 0..obstacle_count {
            let rect = (0..SPAWN_REROLLS)
                .map(|_| self.random_rect(width, height))
                .find(|rect| !blocks_spawn(rect));
            match rect {
                Some(rect) => rects.push(rect),
                None => log::debug!("Level {}: no spawn-clear spot for an obstacle", index),
            }
        }

        log::debug!(
            "Generated level {}: {} enemies, {} obstacles",
            index,
            enemy_count,
            rects.len()
        );
        LevelData::from_specs(enemies, &rects, index)
    }
}

impl LevelSource for GeneratedLevels {
    fn level(&mut self, index: u32, tuning: &Tuning) -> LevelData {
        match index {
            0 | 1 => self.fixed(1, &LEVEL_1_OBSTACLES, tuning),
            2 => self.fixed(2, &LEVEL_2_OBSTACLES, tuning),
            3 => self.fixed(3, &LEVEL_3_OBSTACLES, tuning),
            _ => self.generate(index, tuning),
        }
    }
}
