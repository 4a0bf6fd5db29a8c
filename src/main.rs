use hangman_solver::cli::{CliInterface, display_auto_solve, parse_cli};
use hangman_solver::logging::init_logging;
use hangman_solver::tui::TuiInterface;
use hangman_solver::{auto_solve, game_loop, load_dictionary};
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = parse_cli();
    if let Err(e) = init_logging(cli.tui) {
        eprintln!("Logging disabled: {e}");
    }

    let dictionary = load_dictionary(cli.dictionary_path.as_deref());

    if let Some(target) = cli.solve {
        return match auto_solve(&dictionary, &target) {
            Ok(report) => {
                display_auto_solve(&target, &report);
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("{e}");
                ExitCode::FAILURE
            }
        };
    }

    if cli.tui {
        match TuiInterface::new() {
            Ok(mut interface) => game_loop(&dictionary, &mut interface),
            Err(e) => {
                eprintln!("Failed to start the terminal UI: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        let stdin = io::stdin();
        let mut interface = CliInterface::new(stdin.lock());
        game_loop(&dictionary, &mut interface);
    }

    ExitCode::SUCCESS
}
