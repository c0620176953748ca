//! Demo autopilot
//!
//! Produces the input a simple player would: clicks through menus, keeps
//! the ship under the nearest enemy, sidesteps incoming fire and shoots when
//! the turret lines up. Used by the headless driver and as a soak test.

use std::f32::consts::FRAC_PI_4;

use glam::Vec2;

use crate::sim::{Controls, GamePhase, GameState, LevelSource, MenuAction, Owner, Ship, TickInput};
use crate::ui::{Choice, Menu};
use crate::{angle_difference, angle_of, unit_vector};

/// Horizontal distance at which the ship stops chasing its target
const CHASE_DEADZONE: f32 = 40.0;
/// Enemy cannonballs closer than this trigger a sidestep
const DODGE_RADIUS: f32 = 120.0;
/// Fire once the turret is within this many radians of the target
const FIRE_TOLERANCE: f32 = 0.3;
/// Scroll steps taken while reading the instructions page
const READING_SCROLL: i32 = 3;

/// Progress through the one-time look at the instructions page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tour {
    Pending,
    Opened,
    Read,
    Done,
}

/// Raw input for one frame, before the menu interprets the pointer
#[derive(Debug, Clone, Default)]
pub struct Gesture {
    pub input: TickInput,
    /// Pointer click position
    pub click: Option<Vec2>,
    /// Mouse-wheel steps (positive scrolls down)
    pub scroll: i32,
}

impl Gesture {
    /// Let the menu turn the pointer part of the gesture into a [`MenuAction`]
    pub fn resolve(self, phase: GamePhase, menu: &mut Menu, screen: Vec2) -> TickInput {
        let Gesture {
            mut input,
            click,
            scroll,
        } = self;
        if scroll != 0 {
            menu.scroll(scroll, screen);
        }
        if let Some(pointer) = click {
            input.action = menu.click(phase, pointer, screen);
        }
        input
    }
}

/// Scripted player for demos
#[derive(Debug, Clone)]
pub struct Autopilot {
    /// Restart after a game over instead of idling on the banner
    pub restart: bool,
    tour: Tour,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Autopilot {
    pub fn new(restart: bool) -> Self {
        Self {
            restart,
            tour: Tour::Pending,
        }
    }

    /// Decide this frame's gesture
    pub fn plan<L: LevelSource>(&mut self, state: &GameState<L>, menu: &Menu) -> Gesture {
        match state.phase {
            GamePhase::MainMenu | GamePhase::Paused | GamePhase::LevelComplete => {
                self.navigate(state.phase, menu, state.tuning.screen())
            }
            GamePhase::GameOver => Gesture {
                input: TickInput {
                    restart: self.restart,
                    ..Default::default()
                },
                ..Default::default()
            },
            GamePhase::Playing => Gesture {
                input: TickInput {
                    controls: self.fight(state),
                    ..Default::default()
                },
                ..Default::default()
            },
        }
    }

    /// Click through the menus, reading the instructions page once on the way
    fn navigate(&mut self, phase: GamePhase, menu: &Menu, screen: Vec2) -> Gesture {
        if menu.instructions_open {
            if self.tour == Tour::Opened {
                self.tour = Tour::Read;
                return Gesture {
                    scroll: READING_SCROLL,
                    ..Default::default()
                };
            }
            self.tour = Tour::Done;
            return press(menu, phase, screen, Choice::CloseInstructions);
        }

        let wanted = match phase {
            GamePhase::MainMenu if self.tour == Tour::Pending => {
                self.tour = Tour::Opened;
                Choice::ShowInstructions
            }
            GamePhase::MainMenu => Choice::Action(MenuAction::StartGame),
            GamePhase::Paused => Choice::Action(MenuAction::Resume),
            GamePhase::LevelComplete => Choice::Action(MenuAction::ContinueLevel),
            GamePhase::Playing | GamePhase::GameOver => return Gesture::default(),
        };
        press(menu, phase, screen, wanted)
    }

    fn fight<L: LevelSource>(&self, state: &GameState<L>) -> Controls {
        let mut controls = Controls::default();
        let me = state.player.position();

        let Some(target) = state
            .enemies
            .iter()
            .filter(|e| e.is_active())
            .map(|e| e.position())
            .min_by(|a, b| a.distance_squared(me).total_cmp(&b.distance_squared(me)))
        else {
            return controls;
        };

        // Aim with the 8-way keys nearest to the true bearing
        let bearing = angle_of(target - me);
        let octant = (bearing / FRAC_PI_4).round();
        let aim = unit_vector(octant * FRAC_PI_4);
        controls.aim_right = aim.x > 0.5;
        controls.aim_left = aim.x < -0.5;
        controls.aim_down = aim.y > 0.5;
        controls.aim_up = aim.y < -0.5;

        let error = angle_difference(bearing, state.player.hull.turret).abs();
        controls.fire = error < FIRE_TOLERANCE;

        match incoming(state, me) {
            Some(threat) => {
                // Step sideways, away from the ball's side
                if threat.x >= me.x {
                    controls.left = true;
                } else {
                    controls.right = true;
                }
            }
            None => {
                let dx = target.x - me.x;
                controls.right = dx > CHASE_DEADZONE;
                controls.left = dx < -CHASE_DEADZONE;
            }
        }
        controls
    }
}

/// Closest enemy cannonball heading toward `me` within dodge range
fn incoming<L: LevelSource>(state: &GameState<L>, me: Vec2) -> Option<Vec2> {
    state
        .cannonballs
        .iter()
        .filter(|cb| cb.alive && cb.owner == Owner::Enemy)
        .filter(|cb| cb.pos.distance(me) < DODGE_RADIUS && cb.vel.dot(me - cb.pos) > 0.0)
        .map(|cb| cb.pos)
        .min_by(|a, b| a.distance_squared(me).total_cmp(&b.distance_squared(me)))
}

/// Click the center of the button offering `choice`, if it is on screen
fn press(menu: &Menu, phase: GamePhase, screen: Vec2, choice: Choice) -> Gesture {
    let click = menu
        .buttons(phase, screen)
        .into_iter()
        .find(|b| b.choice == choice)
        .map(|b| b.center());
    Gesture {
        click,
        ..Default::default()
    }
}
