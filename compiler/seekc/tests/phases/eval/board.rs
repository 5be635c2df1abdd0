use pretty_assertions::assert_eq;
use seekc::commands::format_replay;
use seekc::{evaluate_seek_lang, Board, Position, ReplayOutcome};

use crate::common::{Down, Left, Right, Up};

#[test]
fn default_board_is_three_by_three() {
    assert_eq!(Board::default(), Board::new(3, 3));
}

#[test]
fn replay_stops_on_reaching_goal() {
    let outcome = Board::default().replay(
        &[Right, Right, Up, Up],
        Position::new(0, 0),
        Position::new(2, 0),
        Board::DEFAULT_MAX_MOVES,
    );
    assert_eq!(
        outcome,
        ReplayOutcome {
            final_position: Position::new(2, 0),
            moves_applied: 2,
            won: true,
        }
    );
}

#[test]
fn replay_clamps_to_edges() {
    let outcome = Board::default().replay(
        &[Left, Down, Left, Up],
        Position::new(0, 0),
        Position::new(2, 2),
        10,
    );
    assert_eq!(outcome.final_position, Position::new(0, 1));
    assert_eq!(outcome.moves_applied, 4);
    assert!(!outcome.won);
}

#[test]
fn replay_stops_at_max_moves() {
    let moves = vec![Up; 20];
    let outcome = Board::new(1, 50).replay(&moves, Position::new(0, 0), Position::new(0, 40), 10);
    assert_eq!(outcome.moves_applied, 10);
    assert_eq!(outcome.final_position, Position::new(0, 10));
    assert!(!outcome.won);
}

#[test]
fn program_output_replays_to_the_goal() {
    let walk = "for goal_x - player_x do right end\nfor goal_y - player_y do up end";
    let moves = evaluate_seek_lang(walk, Position::new(0, 0), Position::new(2, 2)).unwrap();
    let outcome = Board::default().replay(&moves, Position::new(0, 0), Position::new(2, 2), 10);
    assert!(outcome.won);
    assert_eq!(outcome.moves_applied, 4);
}

#[test]
fn replay_summary_line() {
    let won = ReplayOutcome {
        final_position: Position::new(2, 1),
        moves_applied: 3,
        won: true,
    };
    assert_eq!(format_replay(&won), "replay: goal reached at (2, 1) after 3 moves");

    let lost = ReplayOutcome {
        final_position: Position::new(0, 1),
        moves_applied: 1,
        won: false,
    };
    assert_eq!(
        format_replay(&lost),
        "replay: goal not reached at (0, 1) after 1 move"
    );
}
