#![cfg(feature = "std")]

use std::io::{self, BufRead, Write};
use std::string::String;

use crate::core::{GameState, GuessOutcome, MAX_HINTS};

use super::{Action, Player};

/// What a line typed at the prompt asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Guess(char),
    Hint,
    Help,
    Quit,
}

/// Parse one line of player input.
pub fn parse_command(input: &str) -> Result<Command, String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("Empty input".to_string());
    }
    if input == "?" || input.eq_ignore_ascii_case("hint") {
        return Ok(Command::Hint);
    }
    if input.eq_ignore_ascii_case("help") {
        return Ok(Command::Help);
    }
    if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("exit") {
        return Ok(Command::Quit);
    }
    let mut chars = input.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) if ch.is_alphabetic() => Ok(Command::Guess(ch)),
        (Some(ch), None) => Err(format!("'{}' is not a letter", ch)),
        _ => Err(format!("'{}' - guess one letter at a time", input)),
    }
}

/// Interactive player reading commands from a line-based reader (stdin by default).
pub struct CliPlayer {
    input: Box<dyn BufRead>,
}

impl CliPlayer {
    pub fn new() -> Self {
        Self::from_reader(Box::new(io::BufReader::new(io::stdin())))
    }

    /// Read commands from `input` instead of stdin.
    pub fn from_reader(input: Box<dyn BufRead>) -> Self {
        Self { input }
    }
}

impl Default for CliPlayer {
    fn default() -> Self {
        Self::new()
    }
}

/// Display the board: masked answer, lives, wrong letters and hints left.
pub fn print_game_view(state: &GameState) {
    let spaced: Vec<String> = state.masked_answer().chars().map(|c| c.to_string()).collect();
    println!("\n    Word:   {}", spaced.join(" "));
    println!(
        "    Lives:  {} {}",
        state.lives(),
        "♥".repeat(state.lives() as usize)
    );
    if !state.wrong_letters().is_empty() {
        let wrong: String = state.wrong_letters().iter().collect();
        println!("    Wrong:  {}", wrong);
    }
    let hints_left = MAX_HINTS.saturating_sub(state.hints_used());
    let available = if state.can_use_hint() { "" } else { " (not available)" };
    println!("    Hints:  {} left{}", hints_left, available);
}

impl Player for CliPlayer {
    fn next_action(&mut self, state: &GameState) -> Action {
        loop {
            print_game_view(state);
            print!("\nGuess a letter ('hint', 'help' or 'quit'): ");
            let _ = io::stdout().flush();
            let mut line = String::new();
            match self.input.read_line(&mut line) {
                Ok(0) | Err(_) => return Action::Quit,
                Ok(_) => {}
            }
            match parse_command(&line) {
                Ok(Command::Guess(ch)) => return Action::Guess(ch.to_string()),
                Ok(Command::Hint) => return Action::Hint,
                Ok(Command::Quit) => return Action::Quit,
                Ok(Command::Help) => print_help(),
                Err(e) => println!("✗ Invalid input: {}", e),
            }
        }
    }

    fn handle_outcome(&mut self, guess: &str, outcome: GuessOutcome, state: &GameState) {
        let letter = guess.to_uppercase();
        match outcome {
            GuessOutcome::Correct => println!("\n✓ Yes! '{}' is in the answer.", letter),
            GuessOutcome::Solved => println!("\n🎉 '{}' completes it: {}", letter, state.answer()),
            GuessOutcome::Wrong => println!(
                "\n✗ No '{}'. {} lives left.",
                letter,
                state.lives()
            ),
            GuessOutcome::Lost => println!("\n💀 No '{}'. You are out of lives.", letter),
            GuessOutcome::AlreadyGuessed | GuessOutcome::AlreadyMissed => {
                println!("\n• You already tried '{}'.", letter)
            }
            GuessOutcome::Invalid | GuessOutcome::GameOver => println!("\n✗ {}", outcome),
        }
    }

    fn handle_hint(&mut self, revealed: Option<char>, state: &GameState) {
        match revealed {
            Some(ch) => println!(
                "\n💡 Hint: '{}' revealed for one life. {} lives left.",
                ch,
                state.lives()
            ),
            None => println!("\n✗ No hint available (you need at least 2 lives and a hint left)."),
        }
    }
}

fn print_help() {
    println!("\n╔════════════════════════════════════════════════════════╗");
    println!("║                     HANGMAN HELP                       ║");
    println!("╠════════════════════════════════════════════════════════╣");
    println!("║ Type a single letter and press ENTER to guess it.      ║");
    println!("║                                                        ║");
    println!("║ Commands:                                              ║");
    println!("║   hint or ?  - reveal a letter, costs one life         ║");
    println!("║   help       - show this message                       ║");
    println!("║   quit       - give up the current game                ║");
    println!("║                                                        ║");
    println!("║ A wrong guess costs a life. Repeating a letter is      ║");
    println!("║ free. Hints need at least two lives, max three a game. ║");
    println!("╚════════════════════════════════════════════════════════╝\n");
}
