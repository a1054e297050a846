//! Outcome resolution: externally reported results and rating-based
//! simulation behind one resolver seam.

use std::collections::BTreeSet;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{TournamentError, TournamentResult};
use crate::pairing::Round;
use crate::player::{PlayerId, PlayerRegistry};

/// Strength assumed for unrated players during simulation. Their stored
/// rating stays `None`; this value never escapes the probability model.
pub const DEFAULT_UNRATED_RATING: i32 = 1400;

/// Result of a single match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Player1Win,
    Player2Win,
    Draw,
}

/// One resolved match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub p1: PlayerId,
    pub p2: PlayerId,
    pub outcome: Outcome,
}

/// A complete set of results for one round: exactly one outcome per match,
/// plus the bye carried through for record keeping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResults {
    pub games: Vec<GameRecord>,
    pub bye: Option<PlayerId>,
}

/// Resolves a round's matches into outcomes.
///
/// Implementations must return a result for every match or fail without
/// side effects; registry updates happen only after a full resolution, via
/// [`PlayerRegistry::apply`].
pub trait OutcomeResolver {
    fn resolve(
        &mut self,
        round: &Round,
        registry: &PlayerRegistry,
    ) -> TournamentResult<RoundResults>;
}

/// Interactive-mode resolver: consumes winner ids and drawn pairs that the
/// outer layer has already syntax-checked.
///
/// Every match must appear exactly once across the two sets. A match
/// claimed by both sides, claimed as both win and draw, or claimed by
/// neither fails with [`TournamentError::AmbiguousResult`] so the caller
/// can re-collect input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportedOutcomes {
    winners: BTreeSet<PlayerId>,
    draws: BTreeSet<(PlayerId, PlayerId)>,
}

impl ReportedOutcomes {
    pub fn new(
        winners: BTreeSet<PlayerId>,
        draws: impl IntoIterator<Item = (PlayerId, PlayerId)>,
    ) -> Self {
        // Draw pairs are stored lower-id-first so lookups are order-blind
        let draws = draws
            .into_iter()
            .map(|(a, b)| (a.min(b), a.max(b)))
            .collect();
        Self { winners, draws }
    }

    fn is_draw(&self, p1: PlayerId, p2: PlayerId) -> bool {
        self.draws.contains(&(p1.min(p2), p1.max(p2)))
    }
}

impl OutcomeResolver for ReportedOutcomes {
    fn resolve(
        &mut self,
        round: &Round,
        _registry: &PlayerRegistry,
    ) -> TournamentResult<RoundResults> {
        let mut games = Vec::with_capacity(round.matches.len());
        for &(p1, p2) in &round.matches {
            let w1 = self.winners.contains(&p1);
            let w2 = self.winners.contains(&p2);
            let drawn = self.is_draw(p1, p2);

            let outcome = match (w1, w2, drawn) {
                (true, false, false) => Outcome::Player1Win,
                (false, true, false) => Outcome::Player2Win,
                (false, false, true) => Outcome::Draw,
                (true, true, _) => {
                    return Err(TournamentError::AmbiguousResult {
                        p1,
                        p2,
                        reason: "both players reported as winners".into(),
                    })
                }
                (true, _, true) | (_, true, true) => {
                    return Err(TournamentError::AmbiguousResult {
                        p1,
                        p2,
                        reason: "reported as both a win and a draw".into(),
                    })
                }
                (false, false, false) => {
                    return Err(TournamentError::AmbiguousResult {
                        p1,
                        p2,
                        reason: "no result reported".into(),
                    })
                }
            };
            games.push(GameRecord { p1, p2, outcome });
        }

        Ok(RoundResults {
            games,
            bye: round.bye,
        })
    }
}

/// Step-function probability model over the rating difference.
///
/// Buckets are checked widest gap first; the favorite's win probability is
/// non-decreasing and the draw probability non-increasing as the gap grows,
/// and the three probabilities always sum to 1. Thresholds are tunable
/// policy - the monotonicity and normalization are the contract. No
/// probability reaches exactly 0 or 1, so upsets stay possible at any gap.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutcomeModel {
    /// Rating substituted for unrated players
    pub default_rating: i32,
    /// `(gap threshold, favorite win prob, draw prob)`, widest first; a
    /// bucket applies when `|diff| > threshold`
    pub buckets: Vec<(u32, f64, f64)>,
    /// `(win prob, draw prob)` for near-equal ratings, symmetric per side
    pub base: (f64, f64),
}

impl Default for OutcomeModel {
    fn default() -> Self {
        Self {
            default_rating: DEFAULT_UNRATED_RATING,
            buckets: vec![(300, 0.80, 0.10), (100, 0.65, 0.15)],
            base: (0.40, 0.20),
        }
    }
}

impl OutcomeModel {
    /// Outcome probabilities `(p1 win, draw, p2 win)` for a rating
    /// difference `diff = r1 - r2`.
    pub fn probabilities(&self, diff: i32) -> (f64, f64, f64) {
        let gap = diff.unsigned_abs();

        let (favorite_win, mut draw) = self
            .buckets
            .iter()
            .find(|&&(threshold, _, _)| gap > threshold)
            .map(|&(_, win, d)| (win, d))
            .unwrap_or(self.base);

        let mut underdog_win = 1.0 - favorite_win - draw;
        if underdog_win < 0.0 {
            // Degenerate configuration; renormalize against the favorite
            underdog_win = 0.0;
            draw = 1.0 - favorite_win;
        }

        if diff >= 0 {
            (favorite_win, draw, underdog_win)
        } else {
            (underdog_win, draw, favorite_win)
        }
    }
}

/// Simulation-mode resolver: draws each outcome from the probability model
/// using its own random source.
#[derive(Debug, Clone)]
pub struct SimulatedOutcomes<R: Rng> {
    rng: R,
    model: OutcomeModel,
}

impl<R: Rng> SimulatedOutcomes<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            model: OutcomeModel::default(),
        }
    }

    pub fn with_model(rng: R, model: OutcomeModel) -> Self {
        Self { rng, model }
    }

    fn effective_rating(&self, registry: &PlayerRegistry, id: PlayerId) -> i32 {
        registry
            .get(id)
            .and_then(|p| p.rating)
            .map(|r| r as i32)
            .unwrap_or(self.model.default_rating)
    }
}

impl<R: Rng> OutcomeResolver for SimulatedOutcomes<R> {
    fn resolve(
        &mut self,
        round: &Round,
        registry: &PlayerRegistry,
    ) -> TournamentResult<RoundResults> {
        let mut games = Vec::with_capacity(round.matches.len());
        for &(p1, p2) in &round.matches {
            let diff = self.effective_rating(registry, p1) - self.effective_rating(registry, p2);
            let (p1_win, draw, _) = self.model.probabilities(diff);

            let roll: f64 = self.rng.gen();
            let outcome = if roll < p1_win {
                Outcome::Player1Win
            } else if roll < p1_win + draw {
                Outcome::Draw
            } else {
                Outcome::Player2Win
            };

            log::trace!("simulated {p1} vs {p2}: diff {diff}, roll {roll:.3}");
            games.push(GameRecord { p1, p2, outcome });
        }

        Ok(RoundResults {
            games,
            bye: round.bye,
        })
    }
}

#[cfg(test)]
#[path = "outcome_tests.rs"]
mod outcome_tests;
