//! Cannonball vs ship collision resolution
//!
//! Pairwise circle tests. The owner tag on each cannonball decides which
//! side it can damage, so a ship can never be hit by its own faction's fire.

use super::cannonball::{Cannonball, Owner};
use super::geometry::circles_overlap;
use super::ship::{Enemy, Player, Ship};
use crate::tuning::Tuning;

/// A hit registered during one resolution pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    /// Player fire struck the enemy at this roster index
    Enemy { index: usize },
    Player,
}

/// Outcome of one resolution pass
#[derive(Debug, Clone, Default)]
pub struct CollisionResult {
    /// Points earned by the player this pass
    pub score: u64,
    pub hits: Vec<Hit>,
}

/// Resolve every live cannonball against the ships it may damage.
///
/// Player fire hits at most one enemy per ball. Hit cannonballs are marked
/// dead but stay in the list; the caller sweeps them afterwards.
pub fn resolve(
    cannonballs: &mut [Cannonball],
    player: &mut Player,
    enemies: &mut [Enemy],
    tuning: &Tuning,
) -> CollisionResult {
    let mut result = CollisionResult::default();

    for cb in cannonballs.iter_mut().filter(|cb| cb.alive) {
        match cb.owner {
            Owner::Player => {
                let struck = enemies.iter_mut().enumerate().find(|(_, enemy)| {
                    enemy.is_targetable()
                        && circles_overlap(cb.pos, cb.radius, enemy.position(), enemy.hull.radius)
                });
                if let Some((index, enemy)) = struck {
                    enemy.hit(tuning);
                    cb.alive = false;
                    result.score += 1;
                    result.hits.push(Hit::Enemy { index });
                }
            }
            Owner::Enemy => {
                if player.is_targetable()
                    && circles_overlap(cb.pos, cb.radius, player.position(), player.hull.radius)
                {
                    player.hit(tuning);
                    cb.alive = false;
                    result.hits.push(Hit::Player);
                }
            }
        }
    }

    result
}
