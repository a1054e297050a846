use super::*;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::outcome::GameRecord;
use crate::tournament::TournamentConfig;

fn rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(7)
}

#[test]
fn create_assigns_sequential_ids() {
    let config = TournamentConfig::new(8, 3, 0.5);
    let registry = PlayerRegistry::create(&config, &mut rng()).unwrap();

    assert_eq!(registry.len(), 8);
    assert_eq!(registry.ids(), (0..8).collect::<Vec<_>>());
}

#[test]
fn create_starts_everyone_at_zero() {
    let config = TournamentConfig::new(4, 1, 1.0);
    let registry = PlayerRegistry::create(&config, &mut rng()).unwrap();

    for player in registry.iter() {
        assert_eq!(player.wins, 0);
        assert_eq!(player.losses, 0);
        assert_eq!(player.draws, 0);
        assert_eq!(player.byes, 0);
        assert!(player.opponents.is_empty());
    }
}

#[test]
fn zero_fraction_creates_no_rated_players() {
    let config = TournamentConfig::new(20, 1, 0.0);
    let registry = PlayerRegistry::create(&config, &mut rng()).unwrap();

    assert!(registry.iter().all(|p| p.rating.is_none()));
}

#[test]
fn full_fraction_rates_everyone_within_range() {
    let config = TournamentConfig::new(20, 1, 1.0);
    let registry = PlayerRegistry::create(&config, &mut rng()).unwrap();

    for player in registry.iter() {
        let rating = player.rating.expect("every player should be rated");
        assert!(config.rating_range.contains(&rating));
    }
}

#[test]
fn create_rejects_invalid_setup() {
    let mut r = rng();

    let too_few = TournamentConfig::new(1, 3, 0.5);
    assert!(matches!(
        PlayerRegistry::create(&too_few, &mut r),
        Err(crate::error::TournamentError::InvalidConfiguration(_))
    ));

    let no_rounds = TournamentConfig::new(4, 0, 0.5);
    assert!(PlayerRegistry::create(&no_rounds, &mut r).is_err());

    let bad_fraction = TournamentConfig::new(4, 3, 1.5);
    assert!(PlayerRegistry::create(&bad_fraction, &mut r).is_err());
}

#[test]
fn apply_win_updates_both_sides() {
    let config = TournamentConfig::new(2, 1, 0.0);
    let mut registry = PlayerRegistry::create(&config, &mut rng()).unwrap();

    registry.apply(&RoundResults {
        games: vec![GameRecord {
            p1: 0,
            p2: 1,
            outcome: Outcome::Player1Win,
        }],
        bye: None,
    });

    let winner = registry.get(0).unwrap();
    let loser = registry.get(1).unwrap();
    assert_eq!((winner.wins, winner.losses), (1, 0));
    assert_eq!((loser.wins, loser.losses), (0, 1));
    assert!(winner.has_played(1));
    assert!(loser.has_played(0));
}

#[test]
fn apply_draw_credits_both_sides() {
    let config = TournamentConfig::new(2, 1, 0.0);
    let mut registry = PlayerRegistry::create(&config, &mut rng()).unwrap();

    registry.apply(&RoundResults {
        games: vec![GameRecord {
            p1: 0,
            p2: 1,
            outcome: Outcome::Draw,
        }],
        bye: None,
    });

    assert_eq!(registry.get(0).unwrap().draws, 1);
    assert_eq!(registry.get(1).unwrap().draws, 1);
}

#[test]
fn bye_touches_only_the_bye_counter() {
    let config = TournamentConfig::new(3, 1, 0.0);
    let mut registry = PlayerRegistry::create(&config, &mut rng()).unwrap();

    registry.apply(&RoundResults {
        games: vec![GameRecord {
            p1: 0,
            p2: 1,
            outcome: Outcome::Player2Win,
        }],
        bye: Some(2),
    });

    let idle = registry.get(2).unwrap();
    assert_eq!(idle.byes, 1);
    assert_eq!(idle.games_played(), 0);
    assert!(idle.opponents.is_empty());
}

#[test]
fn record_invariant_holds_across_rounds() {
    let config = TournamentConfig::new(3, 2, 0.0);
    let mut registry = PlayerRegistry::create(&config, &mut rng()).unwrap();

    registry.apply(&RoundResults {
        games: vec![GameRecord {
            p1: 0,
            p2: 1,
            outcome: Outcome::Player1Win,
        }],
        bye: Some(2),
    });
    registry.apply(&RoundResults {
        games: vec![GameRecord {
            p1: 0,
            p2: 2,
            outcome: Outcome::Draw,
        }],
        bye: Some(1),
    });

    // wins + losses + draws equals rounds actually paired, byes excluded
    assert_eq!(registry.get(0).unwrap().games_played(), 2);
    assert_eq!(registry.get(1).unwrap().games_played(), 1);
    assert_eq!(registry.get(2).unwrap().games_played(), 1);
}

#[test]
fn points_follow_bye_policy() {
    let mut player = Player::new(0, None);
    player.wins = 2;
    player.draws = 1;
    player.byes = 1;

    assert_eq!(player.points(ByePolicy::NoPoints), 2.5);
    assert_eq!(player.points(ByePolicy::FullPoint), 3.5);
}
