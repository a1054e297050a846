//! Final standings derivation

use serde::{Deserialize, Serialize};

use crate::player::{PlayerId, PlayerRegistry};
use crate::tournament::ByePolicy;

/// One row of the final table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandingsEntry {
    pub id: PlayerId,
    pub points: f64,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    pub byes: u32,
    pub rating: Option<u32>,
}

/// Rank all players by points (win = 1.0, draw = 0.5, bye per policy),
/// descending, with ties broken by ascending id. Pure function of registry
/// state.
pub fn standings(registry: &PlayerRegistry, policy: ByePolicy) -> Vec<StandingsEntry> {
    let mut table: Vec<StandingsEntry> = registry
        .iter()
        .map(|p| StandingsEntry {
            id: p.id,
            points: p.points(policy),
            wins: p.wins,
            losses: p.losses,
            draws: p.draws,
            byes: p.byes,
            rating: p.rating,
        })
        .collect();

    table.sort_by(|a, b| {
        b.points
            .partial_cmp(&a.points)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.id.cmp(&b.id))
    });
    table
}

#[cfg(test)]
#[path = "standings_tests.rs"]
mod standings_tests;
