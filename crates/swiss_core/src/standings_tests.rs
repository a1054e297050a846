use super::*;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::outcome::{GameRecord, Outcome, RoundResults};
use crate::tournament::TournamentConfig;

fn registry_after(games: Vec<GameRecord>, bye: Option<PlayerId>, n: u32) -> PlayerRegistry {
    let config = TournamentConfig::new(n, 1, 0.0);
    let mut registry = PlayerRegistry::create(&config, &mut ChaCha8Rng::seed_from_u64(2)).unwrap();
    registry.apply(&RoundResults { games, bye });
    registry
}

#[test]
fn sorted_by_points_then_id() {
    let registry = registry_after(
        vec![
            GameRecord {
                p1: 0,
                p2: 1,
                outcome: Outcome::Player2Win,
            },
            GameRecord {
                p1: 2,
                p2: 3,
                outcome: Outcome::Draw,
            },
        ],
        None,
        4,
    );

    let table = standings(&registry, ByePolicy::NoPoints);
    let order: Vec<(PlayerId, f64)> = table.iter().map(|e| (e.id, e.points)).collect();
    // 1 leads with a win; 2 and 3 tie at half a point, lower id first
    assert_eq!(order, vec![(1, 1.0), (2, 0.5), (3, 0.5), (0, 0.0)]);
}

#[test]
fn bye_scores_nothing_by_default() {
    let registry = registry_after(
        vec![GameRecord {
            p1: 0,
            p2: 1,
            outcome: Outcome::Player1Win,
        }],
        Some(2),
        3,
    );

    let table = standings(&registry, ByePolicy::NoPoints);
    let bye_row = table.iter().find(|e| e.id == 2).unwrap();
    assert_eq!(bye_row.points, 0.0);
    assert_eq!(bye_row.byes, 1);
}

#[test]
fn full_point_bye_policy_counts_in_standings() {
    let registry = registry_after(
        vec![GameRecord {
            p1: 0,
            p2: 1,
            outcome: Outcome::Player1Win,
        }],
        Some(2),
        3,
    );

    let table = standings(&registry, ByePolicy::FullPoint);
    // 0 and 2 both sit at 1.0; the id breaks the tie
    let order: Vec<PlayerId> = table.iter().map(|e| e.id).collect();
    assert_eq!(order, vec![0, 2, 1]);
    assert_eq!(table[1].points, 1.0);
    // The game record itself stays clean
    assert_eq!(table[1].wins, 0);
}

#[test]
fn standings_are_a_pure_view() {
    let registry = registry_after(vec![], None, 2);

    let before = registry.clone();
    let _ = standings(&registry, ByePolicy::NoPoints);
    assert_eq!(registry.ids(), before.ids());
    assert_eq!(
        registry.iter().collect::<Vec<_>>(),
        before.iter().collect::<Vec<_>>()
    );
}
