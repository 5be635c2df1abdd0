//! The `run` command: evaluate a program and print its moves.

use crate::{run_program, ReplayOutcome};

use super::{read_file, report_and_exit, RunOptions};

/// Evaluate the file named in `options`, printing one move per line.
///
/// Exits with status 1 after reporting the first error.
pub fn run_file(options: &RunOptions) {
    let content = read_file(&options.path);

    let moves = match run_program(&content, &options.config) {
        Ok(moves) => moves,
        Err(e) => report_and_exit(&content, &options.path, options.color, &e),
    };

    for direction in &moves {
        println!("{direction}");
    }

    if options.replay {
        let outcome = options.board.replay(
            &moves,
            options.config.player,
            options.config.goal,
            options.max_moves,
        );
        println!();
        println!("{}", format_replay(&outcome));
    }
}

/// One-line summary of a replay, as printed by `seek run --replay`.
pub fn format_replay(outcome: &ReplayOutcome) -> String {
    let plural = if outcome.moves_applied == 1 { "" } else { "s" };
    let verdict = if outcome.won { "goal reached" } else { "goal not reached" };
    format!(
        "replay: {verdict} at {} after {} move{plural}",
        outcome.final_position, outcome.moves_applied
    )
}
