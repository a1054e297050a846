//! Greedy score-bucket pairing with rematch avoidance.
//!
//! Swiss intent without full optimality: players are paired nearest-score
//! first with no backtracking, and a rematch is the fallback rather than a
//! failure, so every round pairs everyone (minus at most one bye).

use std::cmp::Reverse;

use serde::{Deserialize, Serialize};

use crate::error::{TournamentError, TournamentResult};
use crate::player::{PlayerId, PlayerRegistry};

/// One round's pairings: the match list in pairing order, plus at most one
/// bye when the pool was odd.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    pub matches: Vec<(PlayerId, PlayerId)>,
    pub bye: Option<PlayerId>,
}

impl Round {
    /// The match containing `id`, if the player was paired this round
    pub fn match_for(&self, id: PlayerId) -> Option<(PlayerId, PlayerId)> {
        self.matches
            .iter()
            .copied()
            .find(|&(p1, p2)| p1 == id || p2 == id)
    }

    pub fn is_paired(&self, id: PlayerId) -> bool {
        self.match_for(id).is_some()
    }
}

/// Pair the full registry for one round.
///
/// The pool is ordered by descending win count, ties by ascending id, so an
/// identical registry snapshot always produces an identical round. The head
/// of the pool anchors each match and [`find_best_opponent`] picks its
/// partner; a single leftover player takes the bye.
pub fn pair_round(registry: &PlayerRegistry) -> TournamentResult<Round> {
    let mut pool = registry.ids();
    if pool.is_empty() {
        return Err(TournamentError::PairingImpossible);
    }
    pool.sort_by_key(|&id| (Reverse(registry.win_count(id)), id));

    let mut matches = Vec::with_capacity(pool.len() / 2);
    while pool.len() >= 2 {
        let anchor = pool.remove(0);
        // Pool still holds a candidate, so an opponent always exists
        let opponent = best_opponent(anchor, &pool, registry);
        pool.retain(|&id| id != opponent);
        log::trace!("paired {anchor} vs {opponent}");
        matches.push((anchor, opponent));
    }

    let bye = pool.pop();
    if let Some(id) = bye {
        log::debug!("player {id} has a bye this round");
    }
    Ok(Round { matches, bye })
}

/// Pick the best opponent for `anchor` from `pool`, or `None` when the pool
/// is empty.
///
/// Candidates are ranked by absolute win-count difference; the sort is
/// stable, so the pool's score-then-id order breaks ties. The first
/// candidate the anchor has not yet faced is taken. Only when every
/// candidate is a rematch does the closest-scored one get accepted - a
/// repeat pairing beats leaving players without a game.
pub fn find_best_opponent(
    anchor: PlayerId,
    pool: &[PlayerId],
    registry: &PlayerRegistry,
) -> Option<PlayerId> {
    if pool.is_empty() {
        return None;
    }
    Some(best_opponent(anchor, pool, registry))
}

/// `pool` must be non-empty
fn best_opponent(anchor: PlayerId, pool: &[PlayerId], registry: &PlayerRegistry) -> PlayerId {
    let anchor_wins = registry.win_count(anchor);

    let mut ranked = pool.to_vec();
    ranked.sort_by_key(|&id| registry.win_count(id).abs_diff(anchor_wins));

    ranked
        .iter()
        .copied()
        .find(|&id| !registry.has_played(anchor, id))
        .unwrap_or(ranked[0])
}

#[cfg(test)]
#[path = "pairing_tests.rs"]
mod pairing_tests;
