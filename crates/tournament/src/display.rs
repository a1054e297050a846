//! Table and pairing output for the terminal

use swiss_core::{Outcome, PlayerId, PlayerRegistry, Round, RoundRecord, StandingsEntry};

fn annotate(registry: &PlayerRegistry, id: PlayerId) -> String {
    match registry.get(id).and_then(|p| p.rating) {
        Some(rating) => format!("(Rated: {rating})"),
        None => format!("(Unrated, Wins: {})", registry.win_count(id)),
    }
}

/// Board-by-board pairings with rating annotations, plus the bye notice
pub fn print_pairings(round: &Round, registry: &PlayerRegistry) {
    if round.matches.is_empty() {
        println!("No matches this round.");
    }
    for (board, &(p1, p2)) in round.matches.iter().enumerate() {
        println!(
            "Board {}: {} {} vs {} {}",
            board + 1,
            p1,
            annotate(registry, p1),
            p2,
            annotate(registry, p2)
        );
    }
    if let Some(id) = round.bye {
        println!("Player {id} has a bye this round.");
    }
}

pub fn print_results(record: &RoundRecord) {
    println!("Round {} results:", record.number);
    for game in &record.results.games {
        match game.outcome {
            Outcome::Player1Win => println!("  {} defeats {}", game.p1, game.p2),
            Outcome::Player2Win => println!("  {} defeats {}", game.p2, game.p1),
            Outcome::Draw => println!("  {} draws {}", game.p1, game.p2),
        }
    }
}

pub fn print_standings(table: &[StandingsEntry]) {
    println!("\n=== Final Standings ===");
    println!(
        "{:<8} {:>8} {:>4} {:>4} {:>4} {:>4}  {}",
        "Player", "Points", "W", "L", "D", "Bye", "Rating"
    );
    println!("{}", "-".repeat(52));
    for entry in table {
        let rating = entry
            .rating
            .map(|r| r.to_string())
            .unwrap_or_else(|| "unrated".to_string());
        println!(
            "{:<8} {:>8.1} {:>4} {:>4} {:>4} {:>4}  {}",
            entry.id, entry.points, entry.wins, entry.losses, entry.draws, entry.byes, rating
        );
    }
    println!();
}
