//! Blocking stdin prompts for tournament setup and round results

use std::io::{self, Write};

/// Print a prompt and read one trimmed line
pub fn read_trimmed(prompt: &str) -> io::Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

pub fn prompt_players() -> io::Result<u32> {
    loop {
        let input = read_trimmed("Enter the total number of players (at least 2): ")?;
        match input.parse::<u32>() {
            Ok(n) if n >= 2 => return Ok(n),
            Ok(_) => println!("Number of players must be at least 2."),
            Err(_) => println!("Invalid input. Please enter a whole number."),
        }
    }
}

pub fn prompt_rounds() -> io::Result<u32> {
    loop {
        let input = read_trimmed("Enter the number of rounds (at least 1): ")?;
        match input.parse::<u32>() {
            Ok(n) if n >= 1 => return Ok(n),
            Ok(_) => println!("Number of rounds must be at least 1."),
            Err(_) => println!("Invalid input. Please enter a whole number."),
        }
    }
}

pub fn prompt_rated_fraction() -> io::Result<f64> {
    loop {
        let input =
            read_trimmed("Enter the fraction of rated players (0.0 to 1.0, e.g. 0.75): ")?;
        match input.parse::<f64>() {
            Ok(f) if (0.0..=1.0).contains(&f) => return Ok(f),
            Ok(_) => println!("Rated fraction must be between 0.0 and 1.0."),
            Err(_) => println!("Invalid input. Please enter a number like 0.8 or 0."),
        }
    }
}
