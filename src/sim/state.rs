//! Game state and phase bookkeeping
//!
//! Everything the frame step reads or mutates lives on [`GameState`]. The
//! level source is a type parameter so tests can script level content.

use serde::{Deserialize, Serialize};

use super::cannonball::Cannonball;
use super::geometry::Obstacle;
use super::level::{GeneratedLevels, LevelSource};
use super::ship::{Enemy, Player};
use crate::tuning::Tuning;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, nothing simulates
    MainMenu,
    /// Active gameplay
    Playing,
    Paused,
    /// Every enemy of the level has been sunk, waiting for Continue
    LevelComplete,
    /// Player ship sunk, waiting for restart
    GameOver,
}

/// Notable things that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    LevelStarted { level: u32 },
    LevelCleared { level: u32 },
    /// Enemy at this roster index took a hit and is still afloat
    EnemyHit { index: usize, health: u32 },
    /// Enemy at this roster index started sinking
    EnemySunk { index: usize },
    PlayerHit { health: u32 },
    Paused,
    Resumed,
    GameOver { level: u32, score: u64 },
    /// Returned to the title screen, progress discarded
    ReturnedToMenu,
    QuitRequested,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<L: LevelSource = GeneratedLevels> {
    /// Current level (1-based)
    pub level: u32,
    pub score: u64,
    pub phase: GamePhase,
    /// Frames simulated since the game was created
    pub frame: u64,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub obstacles: Vec<Obstacle>,
    /// Live cannonballs from both factions, in firing order
    pub cannonballs: Vec<Cannonball>,
    /// Enemies the current level started with
    pub spawned_enemies: usize,
    pub tuning: Tuning,
    pub levels: L,
}

impl GameState<GeneratedLevels> {
    /// New game on the title screen with default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_levels(Tuning::default(), GeneratedLevels::new(seed))
    }
}

impl<L: LevelSource> GameState<L> {
    pub fn with_levels(tuning: Tuning, levels: L) -> Self {
        let mut state = Self {
            level: 1,
            score: 0,
            phase: GamePhase::MainMenu,
            frame: 0,
            player: Player::new(&tuning),
            enemies: Vec::new(),
            obstacles: Vec::new(),
            cannonballs: Vec::new(),
            spawned_enemies: 0,
            tuning,
            levels,
        };
        state.load_level(1);
        state
    }

    /// Discard all progress: fresh player, level 1, zero score.
    /// The phase is left to the caller.
    pub fn reset(&mut self) {
        self.score = 0;
        self.player = Player::new(&self.tuning);
        self.load_level(1);
    }

    /// Replace enemies and obstacles with the content of level `index`
    pub fn load_level(&mut self, index: u32) {
        let data = self.levels.level(index, &self.tuning);
        self.level = index;
        self.spawned_enemies = data.enemies.len();
        self.enemies = data.enemies;
        self.obstacles = data.obstacles;
        self.cannonballs.clear();
        log::info!(
            "Level {} loaded: {} enemies, {} obstacles",
            index,
            self.spawned_enemies,
            self.obstacles.len()
        );
    }

    /// Advance to the next level, awarding the level bonus
    pub fn continue_level(&mut self) {
        let next = self.level + 1;
        self.load_level(next);
        self.player.respawn(&self.tuning);
        let bonus = u64::from(next).saturating_mul(self.tuning.level_bonus);
        self.score = self.score.saturating_add(bonus);
    }

    /// Every enemy this level spawned is sinking or gone
    pub fn level_cleared(&self) -> bool {
        self.spawned_enemies > 0 && self.enemies.iter().all(|e| !e.is_active())
    }
}
