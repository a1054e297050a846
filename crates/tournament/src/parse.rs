//! Strict parsing boundary for interactively entered round results.
//!
//! Raw strings stop here. The core only ever sees validated id sets, so
//! every syntax problem, unknown id, bye violation, or winner/draw overlap
//! is rejected before anything can touch the registry.

use std::collections::BTreeSet;

use thiserror::Error;

use swiss_core::{PlayerId, PlayerRegistry, ReportedOutcomes, Round};

/// Problems with the raw result strings the user typed
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("'{0}' is not a player id")]
    NotANumber(String),

    #[error("unknown player id {0}")]
    UnknownPlayer(PlayerId),

    #[error("player {0} was not paired this round")]
    NotPaired(PlayerId),

    #[error("player {0} had a bye and cannot have a result")]
    ByePlayer(PlayerId),

    #[error("player {0} listed more than once")]
    Duplicate(PlayerId),

    #[error("invalid draw '{0}', expected a pair like '0-1'")]
    BadDrawPair(String),

    #[error("{0} and {1} did not play each other this round")]
    NotAMatch(PlayerId, PlayerId),

    #[error("player {0} appears in both winners and draws")]
    WinnerAndDraw(PlayerId),
}

/// Parse and cross-validate both result strings for a round.
///
/// `winners_input` is comma-separated ids (`"0,2"`), `draws_input` is
/// comma-separated pairs (`"1-3,4-5"`); both may be blank.
pub fn parse_round_results(
    winners_input: &str,
    draws_input: &str,
    round: &Round,
    registry: &PlayerRegistry,
) -> Result<ReportedOutcomes, InputError> {
    let winners = parse_winners(winners_input, round, registry)?;
    let draws = parse_draws(draws_input, round, registry)?;

    for &(a, b) in &draws {
        for id in [a, b] {
            if winners.contains(&id) {
                return Err(InputError::WinnerAndDraw(id));
            }
        }
    }

    Ok(ReportedOutcomes::new(winners, draws))
}

pub fn parse_winners(
    input: &str,
    round: &Round,
    registry: &PlayerRegistry,
) -> Result<BTreeSet<PlayerId>, InputError> {
    let mut winners = BTreeSet::new();
    for token in tokens(input) {
        let id = parse_id(token, round, registry)?;
        if !winners.insert(id) {
            return Err(InputError::Duplicate(id));
        }
    }
    Ok(winners)
}

pub fn parse_draws(
    input: &str,
    round: &Round,
    registry: &PlayerRegistry,
) -> Result<BTreeSet<(PlayerId, PlayerId)>, InputError> {
    let mut draws = BTreeSet::new();
    for token in tokens(input) {
        let (a_raw, b_raw) = token
            .split_once('-')
            .ok_or_else(|| InputError::BadDrawPair(token.to_string()))?;
        let a = parse_id(a_raw.trim(), round, registry)?;
        let b = parse_id(b_raw.trim(), round, registry)?;

        // Order-blind: the pair must be one of this round's matches
        let pair = (a.min(b), a.max(b));
        let played = round
            .match_for(a)
            .map(|(x, y)| (x.min(y), x.max(y)));
        if played != Some(pair) {
            return Err(InputError::NotAMatch(a, b));
        }
        if !draws.insert(pair) {
            return Err(InputError::Duplicate(pair.0));
        }
    }
    Ok(draws)
}

fn tokens(input: &str) -> impl Iterator<Item = &str> {
    input.split(',').map(str::trim).filter(|t| !t.is_empty())
}

fn parse_id(token: &str, round: &Round, registry: &PlayerRegistry) -> Result<PlayerId, InputError> {
    let id: PlayerId = token
        .parse()
        .map_err(|_| InputError::NotANumber(token.to_string()))?;
    if !registry.contains(id) {
        return Err(InputError::UnknownPlayer(id));
    }
    if round.bye == Some(id) {
        return Err(InputError::ByePlayer(id));
    }
    if !round.is_paired(id) {
        return Err(InputError::NotPaired(id));
    }
    Ok(id)
}

#[cfg(test)]
#[path = "parse_tests.rs"]
mod parse_tests;
