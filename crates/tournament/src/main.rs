//! Swiss tournament CLI.
//!
//! Collects setup numbers (flags or interactive prompts), runs the rounds
//! either interactively or simulated from ratings, and prints the final
//! standings.

use anyhow::Result;
use clap::Parser;
use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;

use swiss_core::{
    ByePolicy, ReportedOutcomes, Round, SimulatedOutcomes, Tournament, TournamentConfig,
    TournamentError,
};

mod display;
mod parse;
mod prompt;

/// Multi-round Swiss tournament runner
///
/// Pairs players by score each round while avoiding rematches. Results are
/// entered by hand or, with --simulate, drawn from the players' ratings.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of players (prompted for when omitted)
    #[arg(short, long)]
    players: Option<u32>,

    /// Number of rounds (prompted for when omitted)
    #[arg(short, long)]
    rounds: Option<u32>,

    /// Fraction of players created rated, 0.0 to 1.0 (prompted for when omitted)
    #[arg(long)]
    rated: Option<f64>,

    /// Simulate results from ratings instead of prompting for them
    #[arg(short, long)]
    simulate: bool,

    /// Seed for player creation and simulation (entropy when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Award a full standings point for a bye
    #[arg(long)]
    bye_point: bool,

    /// Print the final standings as JSON
    #[arg(long)]
    json: bool,

    /// Enable verbose logging (use -vv for trace output)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = match args.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .init();

    let players = match args.players {
        Some(n) => n,
        None => prompt::prompt_players()?,
    };
    let rounds = match args.rounds {
        Some(n) => n,
        None => prompt::prompt_rounds()?,
    };
    let rated = match args.rated {
        Some(f) => f,
        None => prompt::prompt_rated_fraction()?,
    };

    let mut config = TournamentConfig::new(players, rounds, rated);
    if args.bye_point {
        config.bye_policy = ByePolicy::FullPoint;
    }
    config.validate()?;

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    debug!("seed: {:?}", args.seed);

    let mut tournament = Tournament::new(config, &mut rng)?;
    println!(
        "\nStarting Swiss tournament: {players} players, {rounds} rounds ({:.0}% rated)",
        rated * 100.0
    );

    if args.simulate {
        run_simulated(&mut tournament, SimulatedOutcomes::new(rng))?;
    } else {
        run_interactive(&mut tournament)?;
    }

    let table = tournament.final_standings();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&table)?);
    } else {
        display::print_standings(&table);
    }
    Ok(())
}

fn run_simulated(
    tournament: &mut Tournament,
    mut sim: SimulatedOutcomes<StdRng>,
) -> Result<()> {
    while !tournament.is_complete() {
        let number = tournament.current_round() + 1;
        println!("\n--- Simulating Round {number} ---");

        // Pairing is deterministic, so the preview matches the played round
        let pairings = tournament.pair_next_round()?;
        display::print_pairings(&pairings, tournament.registry());

        let record = tournament.play_round(&mut sim)?;
        display::print_results(record);
    }
    Ok(())
}

fn run_interactive(tournament: &mut Tournament) -> Result<()> {
    while !tournament.is_complete() {
        let number = tournament.current_round() + 1;
        println!("\n--- Round {number} Pairings ---");

        let pairings = tournament.pair_next_round()?;
        display::print_pairings(&pairings, tournament.registry());

        loop {
            let mut reported = collect_results(&pairings, tournament, number)?;
            match tournament.play_round(&mut reported) {
                Ok(record) => {
                    display::print_results(record);
                    break;
                }
                Err(err @ TournamentError::AmbiguousResult { .. }) => {
                    println!("Invalid results: {err}. Try again.");
                }
                Err(err) => return Err(err.into()),
            }
        }
    }
    Ok(())
}

/// Prompt for one round's results until they parse cleanly
fn collect_results(
    round: &Round,
    tournament: &Tournament,
    number: u32,
) -> Result<ReportedOutcomes> {
    loop {
        let winners_input = prompt::read_trimmed(&format!(
            "Enter the winners for round {number} (comma-separated ids, blank if none): "
        ))?;
        let draws_input = prompt::read_trimmed(&format!(
            "Enter drawn matches for round {number} (pairs like '0-1,2-3', blank if none): "
        ))?;

        match parse::parse_round_results(
            &winners_input,
            &draws_input,
            round,
            tournament.registry(),
        ) {
            Ok(reported) => return Ok(reported),
            Err(err) => println!("{err}. Try again."),
        }
    }
}
