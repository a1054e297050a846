//! Tournament configuration and the round-by-round driver

use std::ops::RangeInclusive;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{TournamentError, TournamentResult};
use crate::outcome::{OutcomeResolver, RoundResults};
use crate::pairing::{pair_round, Round};
use crate::player::{PlayerRegistry, DEFAULT_RATING_RANGE};
use crate::standings::{standings, StandingsEntry};

/// What a bye is worth in the standings.
///
/// The default awards nothing; the full-point variant is an explicit
/// opt-in and lives in the dedicated bye counter either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ByePolicy {
    #[default]
    NoPoints,
    FullPoint,
}

/// Setup parameters for one tournament run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TournamentConfig {
    pub players: u32,
    pub rounds: u32,
    /// Probability that each player is created rated, in `[0, 1]`
    pub rated_fraction: f64,
    pub rating_range: RangeInclusive<u32>,
    pub bye_policy: ByePolicy,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            players: 10,
            rounds: 3,
            rated_fraction: 0.8,
            rating_range: DEFAULT_RATING_RANGE,
            bye_policy: ByePolicy::default(),
        }
    }
}

impl TournamentConfig {
    pub fn new(players: u32, rounds: u32, rated_fraction: f64) -> Self {
        Self {
            players,
            rounds,
            rated_fraction,
            ..Default::default()
        }
    }

    /// Check setup parameters before anything is created
    pub fn validate(&self) -> TournamentResult<()> {
        if self.players < 2 {
            return Err(TournamentError::InvalidConfiguration(format!(
                "need at least 2 players, got {}",
                self.players
            )));
        }
        if self.rounds < 1 {
            return Err(TournamentError::InvalidConfiguration(
                "need at least 1 round".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.rated_fraction) {
            return Err(TournamentError::InvalidConfiguration(format!(
                "rated fraction must be between 0.0 and 1.0, got {}",
                self.rated_fraction
            )));
        }
        if self.rating_range.is_empty() {
            return Err(TournamentError::InvalidConfiguration(format!(
                "empty rating range {:?}",
                self.rating_range
            )));
        }
        Ok(())
    }
}

/// A played round: its pairings and the results that resolved them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// 1-based round number
    pub number: u32,
    pub round: Round,
    pub results: RoundResults,
}

/// A single tournament run: fixed player set, fixed round count, strictly
/// sequential rounds.
///
/// The driver owns the registry for the whole run. Each round is paired
/// from the updated registry, resolved in full, then applied as one step -
/// a resolver error leaves the registry untouched so the caller can retry.
#[derive(Debug, Clone)]
pub struct Tournament {
    config: TournamentConfig,
    registry: PlayerRegistry,
    history: Vec<RoundRecord>,
    cursor: u32,
}

impl Tournament {
    pub fn new(config: TournamentConfig, rng: &mut impl Rng) -> TournamentResult<Self> {
        let registry = PlayerRegistry::create(&config, rng)?;
        Ok(Self {
            config,
            registry,
            history: Vec::new(),
            cursor: 0,
        })
    }

    pub fn config(&self) -> &TournamentConfig {
        &self.config
    }

    pub fn registry(&self) -> &PlayerRegistry {
        &self.registry
    }

    /// Rounds completed so far
    pub fn current_round(&self) -> u32 {
        self.cursor
    }

    pub fn is_complete(&self) -> bool {
        self.cursor >= self.config.rounds
    }

    pub fn history(&self) -> &[RoundRecord] {
        &self.history
    }

    /// Pairings the next round would use. Pairing is deterministic, so this
    /// matches what [`Tournament::play_round`] will produce.
    pub fn pair_next_round(&self) -> TournamentResult<Round> {
        pair_round(&self.registry)
    }

    /// Pair, resolve, and apply the next round.
    pub fn play_round(
        &mut self,
        resolver: &mut dyn OutcomeResolver,
    ) -> TournamentResult<&RoundRecord> {
        if self.is_complete() {
            return Err(TournamentError::InvalidConfiguration(format!(
                "all {} rounds already played",
                self.config.rounds
            )));
        }

        let round = pair_round(&self.registry)?;
        let results = resolver.resolve(&round, &self.registry)?;

        self.registry.apply(&results);
        self.cursor += 1;
        log::debug!("round {} complete", self.cursor);
        self.history.push(RoundRecord {
            number: self.cursor,
            round,
            results,
        });
        Ok(&self.history[self.history.len() - 1])
    }

    /// Play every remaining round with the given resolver
    pub fn run(&mut self, resolver: &mut dyn OutcomeResolver) -> TournamentResult<()> {
        while !self.is_complete() {
            self.play_round(resolver)?;
        }
        Ok(())
    }

    /// Final (or current) standings under the configured bye policy
    pub fn final_standings(&self) -> Vec<StandingsEntry> {
        standings(&self.registry, self.config.bye_policy)
    }
}

#[cfg(test)]
#[path = "tournament_tests.rs"]
mod tournament_tests;
