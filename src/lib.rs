// Library interface for hangman-solver
// This allows integration tests to access internal modules

pub mod cli;
pub mod dictionary;
pub mod game_state;
pub mod logging;
pub mod priority;
pub mod solver;
pub mod tui;

// Re-export commonly used items for easier testing
pub use dictionary::{load_dictionary, load_dictionary_from_file, load_dictionary_from_str};
pub use game_state::{AutoSolveReport, GameInterface, auto_solve, game_loop};
pub use priority::PriorityTable;
pub use solver::{ConstraintSolver, Outcome, SessionState, SolverError, Status, positions_of};
