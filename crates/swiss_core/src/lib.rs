//! Swiss-style tournament core.
//!
//! This crate provides the decision logic for a multi-round Swiss
//! tournament:
//! - Player registry with rated/unrated players and cumulative records
//! - Greedy score-bucket pairing with rematch avoidance and bye handling
//! - Outcome resolution, either from reported results or simulated from
//!   ratings
//! - Final standings
//!
//! It does no I/O. The surrounding binary collects setup numbers and round
//! results, hands them in as validated values, and displays whatever comes
//! back. Randomness is always an explicit parameter so runs can be seeded.

pub mod error;
pub mod outcome;
pub mod pairing;
pub mod player;
pub mod standings;
pub mod tournament;

pub use error::{TournamentError, TournamentResult};
pub use outcome::{
    GameRecord, Outcome, OutcomeModel, OutcomeResolver, ReportedOutcomes, RoundResults,
    SimulatedOutcomes, DEFAULT_UNRATED_RATING,
};
pub use pairing::{find_best_opponent, pair_round, Round};
pub use player::{Player, PlayerId, PlayerRegistry, DEFAULT_RATING_RANGE};
pub use standings::{standings, StandingsEntry};
pub use tournament::{ByePolicy, RoundRecord, Tournament, TournamentConfig};
