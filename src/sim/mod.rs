//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - One fixed step per frame
//! - Seeded RNG only (inside the level source)
//! - Stable iteration order (list order for ships and cannonballs)
//! - No rendering or platform dependencies

pub mod cannonball;
pub mod collision;
pub mod geometry;
pub mod level;
pub mod ship;
pub mod state;
pub mod tick;

pub use cannonball::{Cannonball, Owner};
pub use collision::{CollisionResult, Hit, resolve};
pub use geometry::{Edge, GeometryError, Obstacle};
pub use level::{GeneratedLevels, LevelData, LevelSource};
pub use ship::{Enemy, Frame, Hull, Player, Ship};
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{Controls, MenuAction, TickInput, tick};
