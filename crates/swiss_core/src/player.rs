//! Player registry: identities, ratings, and cumulative records

use std::collections::{BTreeMap, BTreeSet};
use std::ops::RangeInclusive;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::TournamentResult;
use crate::outcome::{Outcome, RoundResults};
use crate::tournament::{ByePolicy, TournamentConfig};

/// Unique player identifier, stable for the tournament's lifetime.
/// Players are numbered `0..player_count`.
pub type PlayerId = u32;

/// Rating range players draw from when created as rated
pub const DEFAULT_RATING_RANGE: RangeInclusive<u32> = 1000..=2000;

/// A tournament participant.
///
/// The rating is drawn once at creation and never changes; unrated players
/// keep `None` for the whole run even though the simulator substitutes a
/// default strength for them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub rating: Option<u32>,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    /// Rounds sat out without an opponent. Kept separate from `wins` so a
    /// bye point is a standings policy, not a falsified game record.
    pub byes: u32,
    /// Every opponent faced so far, one entry per paired round
    pub opponents: BTreeSet<PlayerId>,
}

impl Player {
    fn new(id: PlayerId, rating: Option<u32>) -> Self {
        Self {
            id,
            rating,
            wins: 0,
            losses: 0,
            draws: 0,
            byes: 0,
            opponents: BTreeSet::new(),
        }
    }

    pub fn is_rated(&self) -> bool {
        self.rating.is_some()
    }

    /// Number of rounds in which this player was actually paired
    pub fn games_played(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    pub fn has_played(&self, opponent: PlayerId) -> bool {
        self.opponents.contains(&opponent)
    }

    /// Standings points: win = 1.0, draw = 0.5. A bye contributes a full
    /// point only under [`ByePolicy::FullPoint`].
    pub fn points(&self, policy: ByePolicy) -> f64 {
        let base = self.wins as f64 + 0.5 * self.draws as f64;
        match policy {
            ByePolicy::NoPoints => base,
            ByePolicy::FullPoint => base + self.byes as f64,
        }
    }
}

/// All participants, keyed by id.
///
/// A `BTreeMap` keeps iteration in ascending id order, which the pairing
/// engine relies on for reproducible tie-breaking.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerRegistry {
    players: BTreeMap<PlayerId, Player>,
}

impl PlayerRegistry {
    /// Create the player set for a tournament.
    ///
    /// Each player independently becomes rated with probability
    /// `rated_fraction`; rated players draw a rating uniformly from the
    /// configured range. Only the expectation of the rated count is
    /// honored - the draws are memoryless per player.
    pub fn create(config: &TournamentConfig, rng: &mut impl Rng) -> TournamentResult<Self> {
        config.validate()?;

        let mut players = BTreeMap::new();
        for id in 0..config.players {
            let rating = if rng.gen_bool(config.rated_fraction) {
                Some(rng.gen_range(config.rating_range.clone()))
            } else {
                None
            };
            players.insert(id, Player::new(id, rating));
        }

        log::debug!(
            "created {} players, {} rated",
            players.len(),
            players.values().filter(|p| p.is_rated()).count()
        );
        Ok(Self { players })
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn get(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(&id)
    }

    pub fn contains(&self, id: PlayerId) -> bool {
        self.players.contains_key(&id)
    }

    /// All player ids in ascending order
    pub fn ids(&self) -> Vec<PlayerId> {
        self.players.keys().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.values()
    }

    pub fn win_count(&self, id: PlayerId) -> u32 {
        self.players.get(&id).map(|p| p.wins).unwrap_or(0)
    }

    pub fn has_played(&self, a: PlayerId, b: PlayerId) -> bool {
        self.players.get(&a).map(|p| p.has_played(b)).unwrap_or(false)
    }

    /// Apply a fully resolved round in one step.
    ///
    /// Callers resolve every match first (see
    /// [`crate::outcome::OutcomeResolver`]); by the time results reach here
    /// they are complete and unambiguous, so the whole round lands
    /// atomically - there is no partial-update path.
    pub fn apply(&mut self, results: &RoundResults) {
        for game in &results.games {
            match game.outcome {
                Outcome::Player1Win => {
                    self.bump(game.p1, |p| p.wins += 1);
                    self.bump(game.p2, |p| p.losses += 1);
                }
                Outcome::Player2Win => {
                    self.bump(game.p2, |p| p.wins += 1);
                    self.bump(game.p1, |p| p.losses += 1);
                }
                Outcome::Draw => {
                    self.bump(game.p1, |p| p.draws += 1);
                    self.bump(game.p2, |p| p.draws += 1);
                }
            }
            let (p1, p2) = (game.p1, game.p2);
            self.bump(p1, |p| {
                p.opponents.insert(p2);
            });
            self.bump(p2, |p| {
                p.opponents.insert(p1);
            });
        }

        // A bye leaves the game record and opponent history untouched
        if let Some(id) = results.bye {
            self.bump(id, |p| p.byes += 1);
        }
    }

    fn bump(&mut self, id: PlayerId, f: impl FnOnce(&mut Player)) {
        if let Some(player) = self.players.get_mut(&id) {
            f(player);
        }
    }
}

#[cfg(test)]
#[path = "player_tests.rs"]
mod player_tests;
