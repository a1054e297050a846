//! Error types for tournament setup and round resolution

use thiserror::Error;

use crate::player::PlayerId;

/// Main error type for tournament operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TournamentError {
    /// Setup parameters are out of range - fatal, nothing has been created
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Reported round results conflict with themselves or leave a match
    /// unresolved - the caller should re-collect results and retry
    #[error("ambiguous result for match {p1} vs {p2}: {reason}")]
    AmbiguousResult {
        p1: PlayerId,
        p2: PlayerId,
        reason: String,
    },

    /// The pairing pool was empty at entry. Unreachable for a validated
    /// tournament (player count >= 2); treated as an internal failure.
    #[error("pairing impossible: no players available to pair")]
    PairingImpossible,
}

/// Result type alias for tournament operations
pub type TournamentResult<T> = Result<T, TournamentError>;
