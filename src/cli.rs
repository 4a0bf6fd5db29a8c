use crate::game_state::{AutoSolveReport, FeedbackInput, GameInterface, Progress, UserAction};
use crate::solver::{MISS, Outcome};
use clap::Parser;
use std::io::BufRead;
use std::path::PathBuf;

/// Hangman Solver CLI options
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited dictionary file
    #[arg(short = 'i', long = "input")]
    pub dictionary_path: Option<PathBuf>,

    /// Use the full-screen terminal interface
    #[arg(short = 't', long = "tui")]
    pub tui: bool,

    /// Solve a known word automatically and print every guess
    #[arg(short = 's', long = "solve", value_name = "WORD")]
    pub solve: Option<String>,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

// UI Input/Output functions

fn parse_word_length(input: &str) -> Option<UserAction> {
    match input {
        "EXIT" | "QUIT" => Some(UserAction::Exit),
        "NEXT" | "NEW" => Some(UserAction::NewGame),
        _ => input
            .parse::<usize>()
            .ok()
            .filter(|&n| n > 0)
            .map(UserAction::WordLength),
    }
}

/// Positions separated by spaces or commas; `0`, `-`, `N` or `NO` mean a miss.
fn parse_positions(input: &str) -> Option<Vec<usize>> {
    match input {
        "0" | "-" | "N" | "NO" => return Some(MISS.to_vec()),
        "" => return None,
        _ => {}
    }
    input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .map(|part| part.parse::<usize>().ok())
        .collect()
}

fn read_trimmed_line<R: BufRead>(reader: &mut R) -> Option<String> {
    let mut input = String::new();
    match reader.read_line(&mut input) {
        Ok(0) => None,
        Ok(_) => Some(input.trim().to_uppercase()),
        Err(e) => {
            log::warn!("failed to read input: {e}");
            None
        }
    }
}

pub fn read_word_length<R: BufRead>(reader: &mut R) -> Option<UserAction> {
    println!("\nEnter the word length ('next' for a new game, 'exit' to quit):");
    let Some(input) = read_trimmed_line(reader) else {
        return Some(UserAction::Exit);
    };

    let action = parse_word_length(&input);
    if action.is_none() {
        println!("Invalid length. Please enter a positive number.");
    }
    action
}

pub fn read_feedback<R: BufRead>(
    reader: &mut R,
    letter: char,
    word_length: usize,
) -> Option<FeedbackInput> {
    println!(
        "Where does {letter} appear? Positions 1-{word_length} separated by spaces, or 0 if it doesn't:"
    );
    let Some(input) = read_trimmed_line(reader) else {
        return Some(FeedbackInput::Exit);
    };

    match input.as_str() {
        "EXIT" | "QUIT" => Some(FeedbackInput::Exit),
        "NEXT" | "NEW" => Some(FeedbackInput::NewGame),
        _ => match parse_positions(&input) {
            Some(positions) => Some(FeedbackInput::Positions(positions)),
            None => {
                println!("Invalid feedback. Enter numbers like '1 4', or 0 for a miss.");
                None
            }
        },
    }
}

pub fn display_welcome(word_count: usize) {
    println!("Hangman solver ready. Loaded {word_count} words.");
}

pub fn display_progress(progress: &Progress) {
    let status = &progress.status;
    let spaced: Vec<String> = status.pattern.chars().map(String::from).collect();
    println!(
        "\nPattern: {}  ({} candidates)",
        spaced.join(" "),
        status.candidate_count
    );
    if !progress.guessed.is_empty() {
        let guessed: String = progress.guessed.iter().collect();
        println!("Guessed: {guessed}");
    }
    if !status.candidate_sample.is_empty() {
        println!("Candidates: {}", status.candidate_sample.join(", "));
    }
}

pub fn display_suggestion(letter: char) {
    println!("Suggested letter: {letter}");
}

pub fn display_error(message: &str) {
    println!("{message}");
}

pub fn display_no_words(word_length: usize) {
    println!("No words of length {word_length} in the dictionary. Try another length.");
}

pub fn display_solution_found(solution: &str) {
    println!("Word solved: {solution}");
}

pub fn display_no_match() {
    println!("No words match that feedback. Check your inputs or the word isn't in the dictionary.");
}

pub fn display_letters_exhausted(progress: &Progress) {
    println!(
        "Out of letters to suggest with {} candidates left.",
        progress.status.candidate_count
    );
}

pub fn display_new_game_message() {
    println!("New game started.");
}

pub fn display_exit_message() {
    println!("Exiting.");
}

pub fn display_auto_solve(target: &str, report: &AutoSolveReport) {
    println!("Solving for: {}", target.to_uppercase());
    for (i, (letter, positions)) in report.guesses.iter().enumerate() {
        let result = if positions[..] == MISS {
            "miss".to_string()
        } else {
            let list: Vec<String> = positions.iter().map(ToString::to_string).collect();
            format!("at {}", list.join(", "))
        };
        println!("Guess {}: {letter} -> {result}", i + 1);
    }
    match &report.outcome {
        Outcome::Solved(word) => {
            println!("Word solved: {word} ({} misses)", report.misses());
        }
        Outcome::NoMatch => display_no_match(),
        Outcome::LetterExhaustion => println!("Ran out of letters to suggest."),
        Outcome::Continue(letter) => println!("Stopped before guessing {letter}."),
    }
}

/// CLI implementation of the GameInterface trait
/// This struct wraps a BufRead reader and implements the game interface for CLI interaction
pub struct CliInterface<R: BufRead> {
    reader: R,
}

impl<R: BufRead> CliInterface<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> GameInterface for CliInterface<R> {
    fn display_welcome(&mut self, word_count: usize) {
        display_welcome(word_count);
    }

    fn read_word_length(&mut self) -> Option<UserAction> {
        read_word_length(&mut self.reader)
    }

    fn display_progress(&mut self, progress: &Progress) {
        display_progress(progress);
    }

    fn display_suggestion(&mut self, letter: char) {
        display_suggestion(letter);
    }

    fn read_feedback(&mut self, letter: char, word_length: usize) -> Option<FeedbackInput> {
        read_feedback(&mut self.reader, letter, word_length)
    }

    fn display_error(&mut self, message: &str) {
        display_error(message);
    }

    fn display_no_words(&mut self, word_length: usize) {
        display_no_words(word_length);
    }

    fn display_solution_found(&mut self, solution: &str) {
        display_solution_found(solution);
    }

    fn display_no_match(&mut self) {
        display_no_match();
    }

    fn display_letters_exhausted(&mut self, progress: &Progress) {
        display_letters_exhausted(progress);
    }

    fn display_new_game_message(&mut self) {
        display_new_game_message();
    }

    fn display_exit_message(&mut self) {
        display_exit_message();
    }
}
