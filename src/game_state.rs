use crate::solver::{ConstraintSolver, MISS, Outcome, SolverError, Status, positions_of};
use crate::{debug_log, info_log};

/// What the user asked for at the word-length prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    WordLength(usize),
    NewGame,
    Exit,
}

/// What the user reported for the suggested letter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackInput {
    /// One-indexed positions, `[0]` for a miss.
    Positions(Vec<usize>),
    NewGame,
    Exit,
}

/// Everything a front-end needs to show between prompts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Progress {
    pub status: Status,
    pub guessed: Vec<char>,
}

impl Progress {
    pub fn from_solver(solver: &ConstraintSolver<'_>) -> Self {
        Self {
            status: solver.get_status(),
            guessed: solver.guessed_letters().to_vec(),
        }
    }
}

/// Presentation layer driven by [`game_loop`].
///
/// The read methods return `None` for input that should just be asked for again.
pub trait GameInterface {
    fn display_welcome(&mut self, word_count: usize);
    fn read_word_length(&mut self) -> Option<UserAction>;
    fn display_progress(&mut self, progress: &Progress);
    fn display_suggestion(&mut self, letter: char);
    fn read_feedback(&mut self, letter: char, word_length: usize) -> Option<FeedbackInput>;
    fn display_error(&mut self, message: &str);
    fn display_no_words(&mut self, word_length: usize);
    fn display_solution_found(&mut self, solution: &str);
    fn display_no_match(&mut self);
    fn display_letters_exhausted(&mut self, progress: &Progress);
    fn display_new_game_message(&mut self);
    fn display_exit_message(&mut self);
}

enum SessionEnd {
    Finished,
    NewGame,
    Exit,
}

pub fn game_loop<I: GameInterface>(dictionary: &[String], interface: &mut I) {
    let mut solver = ConstraintSolver::new();
    interface.display_welcome(dictionary.len());

    loop {
        let word_length = match interface.read_word_length() {
            Some(UserAction::WordLength(n)) => n,
            Some(UserAction::NewGame) => {
                interface.display_new_game_message();
                continue;
            }
            Some(UserAction::Exit) => break,
            None => continue,
        };

        let outcome = match solver.start(word_length, dictionary) {
            Ok(outcome) => outcome,
            Err(SolverError::NoWords { word_length }) => {
                interface.display_no_words(word_length);
                continue;
            }
            Err(e) => {
                interface.display_error(&e.to_string());
                continue;
            }
        };
        info_log!("game_loop() - session started for length {}", word_length);

        match play_session(&mut solver, outcome, interface) {
            SessionEnd::Exit => break,
            SessionEnd::NewGame => interface.display_new_game_message(),
            SessionEnd::Finished => {}
        }
    }

    interface.display_exit_message();
}

fn play_session<I: GameInterface>(
    solver: &mut ConstraintSolver<'_>,
    mut outcome: Outcome,
    interface: &mut I,
) -> SessionEnd {
    loop {
        let letter = match outcome {
            Outcome::Continue(letter) => letter,
            Outcome::Solved(word) => {
                interface.display_progress(&Progress::from_solver(solver));
                interface.display_solution_found(&word);
                return SessionEnd::Finished;
            }
            Outcome::NoMatch => {
                interface.display_no_match();
                return SessionEnd::Finished;
            }
            Outcome::LetterExhaustion => {
                interface.display_letters_exhausted(&Progress::from_solver(solver));
                return SessionEnd::Finished;
            }
        };

        interface.display_progress(&Progress::from_solver(solver));
        interface.display_suggestion(letter);

        outcome = loop {
            let positions = match interface.read_feedback(letter, solver.word_length()) {
                Some(FeedbackInput::Positions(positions)) => positions,
                Some(FeedbackInput::NewGame) => return SessionEnd::NewGame,
                Some(FeedbackInput::Exit) => return SessionEnd::Exit,
                None => continue,
            };
            match solver.submit_feedback(letter, &positions) {
                Ok(next) => break next,
                Err(e) => {
                    debug_log!("play_session() - rejected feedback: {}", e);
                    interface.display_error(&e.to_string());
                }
            }
        };
    }
}

/// Letters tried by [`auto_solve`] and how the session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoSolveReport {
    pub guesses: Vec<(char, Vec<usize>)>,
    pub outcome: Outcome,
}

impl AutoSolveReport {
    pub fn misses(&self) -> usize {
        self.guesses
            .iter()
            .filter(|(_, positions)| positions[..] == MISS)
            .count()
    }
}

/// Plays a whole session against a known `target`, answering each suggestion
/// truthfully.
///
/// # Errors
///
/// Whatever [`ConstraintSolver::start`] reports for the target's length.
pub fn auto_solve(dictionary: &[String], target: &str) -> Result<AutoSolveReport, SolverError> {
    let target = target.trim().to_uppercase();
    let mut solver = ConstraintSolver::new();
    let mut outcome = solver.start(target.chars().count(), dictionary)?;
    let mut guesses = Vec::new();

    while let Outcome::Continue(letter) = outcome {
        let positions = positions_of(&target, letter);
        outcome = solver.submit_feedback(letter, &positions)?;
        guesses.push((letter, positions));
    }

    Ok(AutoSolveReport { guesses, outcome })
}
