//! Fixed-step simulation tick
//!
//! One call advances the game by exactly one frame. Input arrives as a
//! snapshot, so a replay of the same inputs with the same seed reproduces
//! the same game.

use glam::Vec2;

use super::collision::{self, Hit};
use super::level::LevelSource;
use super::ship::{Frame, Ship};
use super::state::{GameEvent, GamePhase, GameState};

/// Keys held during this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Controls {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub aim_up: bool,
    pub aim_down: bool,
    pub aim_left: bool,
    pub aim_right: bool,
    pub fire: bool,
}

fn axis(negative: bool, positive: bool) -> f32 {
    positive as i32 as f32 - negative as i32 as f32
}

impl Controls {
    /// Raw movement direction, each component in {-1, 0, 1}
    pub fn move_vector(&self) -> Vec2 {
        Vec2::new(axis(self.left, self.right), axis(self.up, self.down))
    }

    /// Raw aiming direction, each component in {-1, 0, 1}
    pub fn aim_vector(&self) -> Vec2 {
        Vec2::new(
            axis(self.aim_left, self.aim_right),
            axis(self.aim_up, self.aim_down),
        )
    }
}

/// Menu choices that change the game phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    StartGame,
    Resume,
    MainMenu,
    ContinueLevel,
    Quit,
}

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub controls: Controls,
    /// Pause toggle (edge, not level)
    pub pause: bool,
    /// Restart after game over (edge)
    pub restart: bool,
    /// Menu button activated this frame
    pub action: Option<MenuAction>,
}

/// Advance the game by one frame and report what happened
pub fn tick<L: LevelSource>(state: &mut GameState<L>, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if input.pause {
        match state.phase {
            GamePhase::Playing => {
                state.phase = GamePhase::Paused;
                events.push(GameEvent::Paused);
            }
            GamePhase::Paused => {
                state.phase = GamePhase::Playing;
                events.push(GameEvent::Resumed);
            }
            _ => {}
        }
    }

    if let Some(action) = input.action {
        apply_action(state, action, &mut events);
    }

    if input.restart && state.phase == GamePhase::GameOver {
        state.reset();
        state.phase = GamePhase::Playing;
        log::info!("Restarting from level 1");
        events.push(GameEvent::LevelStarted { level: state.level });
    }

    if state.phase == GamePhase::Playing {
        step(state, input, &mut events);
    }
    events
}

fn apply_action<L: LevelSource>(
    state: &mut GameState<L>,
    action: MenuAction,
    events: &mut Vec<GameEvent>,
) {
    match (state.phase, action) {
        (GamePhase::MainMenu, MenuAction::StartGame) => {
            state.phase = GamePhase::Playing;
            log::info!("Game started");
            events.push(GameEvent::LevelStarted { level: state.level });
        }
        (GamePhase::MainMenu, MenuAction::Quit) => {
            log::info!("Quit requested");
            events.push(GameEvent::QuitRequested);
        }
        (GamePhase::Paused, MenuAction::Resume) => {
            state.phase = GamePhase::Playing;
            events.push(GameEvent::Resumed);
        }
        (GamePhase::Paused, MenuAction::MainMenu) => {
            state.reset();
            state.phase = GamePhase::MainMenu;
            log::info!("Returned to main menu");
            events.push(GameEvent::ReturnedToMenu);
        }
        (GamePhase::LevelComplete, MenuAction::ContinueLevel) => {
            state.continue_level();
            state.phase = GamePhase::Playing;
            events.push(GameEvent::LevelStarted { level: state.level });
        }
        (phase, action) => {
            log::debug!("Ignoring {:?} during {:?}", action, phase);
        }
    }
}

/// Simulate one frame of active play
fn step<L: LevelSource>(state: &mut GameState<L>, input: &TickInput, events: &mut Vec<GameEvent>) {
    state.frame += 1;

    let player_frame = Frame {
        controls: &input.controls,
        target: None,
        obstacles: &state.obstacles,
        cannonballs: &state.cannonballs,
        tuning: &state.tuning,
    };
    if let Some(cb) = state.player.update(&player_frame) {
        log::debug!("Player fired");
        state.cannonballs.push(cb);
    }

    let target = state.player.is_alive().then(|| state.player.position());
    for i in 0..state.enemies.len() {
        // Rebuilt per enemy so the cap sees shots fired earlier this frame
        let enemy_frame = Frame {
            controls: &input.controls,
            target,
            obstacles: &state.obstacles,
            cannonballs: &state.cannonballs,
            tuning: &state.tuning,
        };
        if let Some(cb) = state.enemies[i].update(&enemy_frame) {
            log::debug!("Enemy {} fired", i);
            state.cannonballs.push(cb);
        }
    }

    for cb in &mut state.cannonballs {
        cb.advance(&state.obstacles, &state.tuning);
    }

    let result = collision::resolve(
        &mut state.cannonballs,
        &mut state.player,
        &mut state.enemies,
        &state.tuning,
    );
    state.score += result.score;
    for hit in result.hits {
        let event = match hit {
            Hit::Enemy { index } => {
                let enemy = &state.enemies[index];
                if enemy.dying {
                    GameEvent::EnemySunk { index }
                } else {
                    GameEvent::EnemyHit {
                        index,
                        health: enemy.hull.health,
                    }
                }
            }
            Hit::Player => GameEvent::PlayerHit {
                health: state.player.hull.health,
            },
        };
        log::debug!("{:?}", event);
        events.push(event);
    }

    state.cannonballs.retain(|cb| cb.alive);
    state.enemies.retain(|enemy| enemy.is_alive());

    // A sunk player loses even if the last enemy went down the same frame
    if !state.player.is_alive() {
        state.phase = GamePhase::GameOver;
        log::info!("Game over at level {} with score {}", state.level, state.score);
        events.push(GameEvent::GameOver {
            level: state.level,
            score: state.score,
        });
    } else if state.level_cleared() {
        state.phase = GamePhase::LevelComplete;
        log::info!("Level {} cleared", state.level);
        events.push(GameEvent::LevelCleared { level: state.level });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::cannonball::{Cannonball, Owner};
    use crate::sim::level::LevelData;
    use crate::sim::ship::Enemy;
    use crate::tuning::Tuning;

    /// One enemy per level at a fixed spot, no obstacles
    #[derive(Debug, Clone)]
    struct ScriptedLevels {
        enemy_pos: Vec2,
        cooldown: u32,
    }

    impl LevelSource for ScriptedLevels {
        fn level(&mut self, _index: u32, tuning: &Tuning) -> LevelData {
            LevelData {
                enemies: vec![Enemy::new(self.enemy_pos, self.cooldown, tuning)],
                obstacles: Vec::new(),
            }
        }
    }

    fn scripted() -> GameState<ScriptedLevels> {
        let tuning = Tuning::default();
        let levels = ScriptedLevels {
            enemy_pos: Vec2::new(400.0, 200.0),
            cooldown: tuning.enemy_fire_interval,
        };
        let mut state = GameState::with_levels(tuning, levels);
        state.phase = GamePhase::Playing;
        state
    }

    fn idle() -> TickInput {
        TickInput::default()
    }

    fn act(action: MenuAction) -> TickInput {
        TickInput {
            action: Some(action),
            ..Default::default()
        }
    }

    fn shoot_enemy<L: LevelSource>(state: &mut GameState<L>, index: usize) {
        let pos = state.enemies[index].position();
        let cb = Cannonball::fire(pos, 0.0, Owner::Player, &state.tuning);
        state.cannonballs.push(cb);
    }

    #[test]
    fn test_move_and_aim_vectors() {
        let controls = Controls {
            left: true,
            down: true,
            aim_up: true,
            aim_down: true,
            aim_right: true,
            ..Default::default()
        };
        assert_eq!(controls.move_vector(), Vec2::new(-1.0, 1.0));
        // Opposing keys cancel
        assert_eq!(controls.aim_vector(), Vec2::new(1.0, 0.0));
        assert_eq!(Controls::default().move_vector(), Vec2::ZERO);
    }

    #[test]
    fn test_start_game_from_menu() {
        let mut state = GameState::new(9);
        let events = tick(&mut state, &idle());
        assert!(events.is_empty());
        assert_eq!(state.frame, 0);

        let events = tick(&mut state, &act(MenuAction::StartGame));
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(events[0], GameEvent::LevelStarted { level: 1 });
        assert_eq!(state.frame, 1);
    }

    #[test]
    fn test_pause_toggle_freezes_simulation() {
        let mut state = scripted();
        let pause = TickInput {
            pause: true,
            ..Default::default()
        };
        tick(&mut state, &pause);
        assert_eq!(state.phase, GamePhase::Paused);
        let frame = state.frame;

        for _ in 0..10 {
            tick(&mut state, &idle());
        }
        assert_eq!(state.frame, frame);

        let events = tick(&mut state, &pause);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(events, vec![GameEvent::Resumed]);
        assert_eq!(state.frame, frame + 1);
    }

    #[test]
    fn test_resume_and_main_menu_from_pause() {
        let mut state = scripted();
        state.phase = GamePhase::Paused;
        tick(&mut state, &act(MenuAction::Resume));
        assert_eq!(state.phase, GamePhase::Playing);

        state.score = 40;
        state.phase = GamePhase::Paused;
        let events = tick(&mut state, &act(MenuAction::MainMenu));
        assert_eq!(state.phase, GamePhase::MainMenu);
        assert_eq!(state.score, 0);
        assert_eq!(events, vec![GameEvent::ReturnedToMenu]);
    }

    #[test]
    fn test_quit_only_from_main_menu() {
        let mut state = GameState::new(1);
        let events = tick(&mut state, &act(MenuAction::Quit));
        assert_eq!(events, vec![GameEvent::QuitRequested]);

        let mut state = scripted();
        let events = tick(&mut state, &act(MenuAction::Quit));
        assert!(!events.contains(&GameEvent::QuitRequested));
    }

    #[test]
    fn test_level_transition() {
        let mut state = GameState::new(5);
        state.phase = GamePhase::Playing;
        assert_eq!(state.enemies.len(), 1);

        for shot in 1..=3 {
            shoot_enemy(&mut state, 0);
            let events = tick(&mut state, &idle());
            assert_eq!(state.score, shot);
            if shot < 3 {
                assert_eq!(state.phase, GamePhase::Playing);
                assert!(matches!(events[0], GameEvent::EnemyHit { index: 0, .. }));
            } else {
                assert!(events.contains(&GameEvent::EnemySunk { index: 0 }));
                assert!(events.contains(&GameEvent::LevelCleared { level: 1 }));
            }
        }
        assert!(state.enemies[0].dying);
        assert_eq!(state.phase, GamePhase::LevelComplete);

        // Frozen while waiting for Continue
        let frame = state.frame;
        tick(&mut state, &idle());
        assert_eq!(state.frame, frame);

        state.player.hull.pos = glam::Vec2::new(120.0, 80.0);
        let events = tick(&mut state, &act(MenuAction::ContinueLevel));
        assert_eq!(events[0], GameEvent::LevelStarted { level: 2 });
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.level, 2);
        assert_eq!(state.score, 3 + 20);
        assert_eq!(state.player.hull.health, state.tuning.max_health);
        assert_eq!(state.player.hull.pos, state.tuning.player_spawn());
        assert_eq!(state.enemies.len(), 1);
    }

    #[test]
    fn test_continue_clears_cannonballs() {
        let mut state = scripted();
        state.phase = GamePhase::LevelComplete;
        state.cannonballs.push(Cannonball::fire(
            Vec2::new(100.0, 100.0),
            0.0,
            Owner::Enemy,
            &state.tuning,
        ));
        tick(&mut state, &act(MenuAction::ContinueLevel));
        assert_eq!(state.level, 2);
        assert!(state.cannonballs.is_empty());
    }

    #[test]
    fn test_dying_enemy_removed_after_animation() {
        let mut state = scripted();
        let tuning = state.tuning.clone();
        for _ in 0..tuning.max_health {
            state.enemies[0].hit(&tuning);
        }
        state.spawned_enemies = 2;
        state
            .enemies
            .push(Enemy::new(Vec2::new(100.0, 100.0), 500, &tuning));

        for _ in 0..tuning.enemy_death_duration {
            tick(&mut state, &idle());
        }
        assert_eq!(state.enemies.len(), 1);
        assert_eq!(state.enemies[0].position(), Vec2::new(100.0, 100.0));
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_game_over_and_restart() {
        let mut state = scripted();
        state.player.hull.health = 1;
        let pos = state.player.position();
        state
            .cannonballs
            .push(Cannonball::fire(pos, 0.0, Owner::Enemy, &state.tuning));
        state.score = 12;

        let events = tick(&mut state, &idle());
        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(events.contains(&GameEvent::GameOver {
            level: 1,
            score: 12
        }));

        let restart = TickInput {
            restart: true,
            ..Default::default()
        };
        let events = tick(&mut state, &restart);
        assert_eq!(events[0], GameEvent::LevelStarted { level: 1 });
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.level, 1);
        assert!(state.player.is_alive());
        assert_eq!(state.player.hull.health, state.tuning.max_health);
    }

    #[test]
    fn test_restart_ignored_while_playing() {
        let mut state = scripted();
        state.score = 7;
        let restart = TickInput {
            restart: true,
            ..Default::default()
        };
        tick(&mut state, &restart);
        assert_eq!(state.score, 7);
    }

    #[test]
    fn test_player_death_beats_level_clear() {
        let mut state = scripted();
        let tuning = state.tuning.clone();
        state.player.hull.health = 1;
        state.enemies[0].hull.health = 1;

        shoot_enemy(&mut state, 0);
        let pos = state.player.position();
        state
            .cannonballs
            .push(Cannonball::fire(pos, 0.0, Owner::Enemy, &tuning));

        let events = tick(&mut state, &idle());
        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(!events.iter().any(|e| matches!(e, GameEvent::LevelCleared { .. })));
    }

    #[test]
    fn test_player_fire_respects_cap_across_frames() {
        let mut state = scripted();
        // Aim straight up into open water
        state.player.hull.turret = -std::f32::consts::FRAC_PI_2;
        let fire = TickInput {
            controls: Controls {
                fire: true,
                ..Default::default()
            },
            ..Default::default()
        };
        for _ in 0..(state.tuning.player_fire_interval * 4) {
            tick(&mut state, &fire);
            let mine = state
                .cannonballs
                .iter()
                .filter(|cb| cb.owner == Owner::Player)
                .count();
            assert!(mine <= state.tuning.max_cannonballs);
        }
    }
}
