use pretty_assertions::assert_eq;
use seek_diagnostic::emitter::ColorMode;
use seekc::commands::{parse_board, parse_position, parse_run_options, RunOptions};
use seekc::{Board, Position, StepBudget};

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(ToString::to_string).collect()
}

#[test]
fn path_only_uses_defaults() {
    let options = parse_run_options(&args(&["walk.seek"])).unwrap();
    assert_eq!(options, RunOptions::new("walk.seek"));
    assert_eq!(options.max_moves, 10);
    assert_eq!(options.color, ColorMode::Auto);
}

#[test]
fn all_options_in_any_order() {
    let options = parse_run_options(&args(&[
        "--goal=2,1",
        "walk.seek",
        "--player=0, 1",
        "--budget=50",
        "--replay",
        "--board=4x5",
        "--max-moves=7",
        "--color=never",
    ]))
    .unwrap();

    assert_eq!(options.path, "walk.seek");
    assert_eq!(options.config.player, Position::new(0, 1));
    assert_eq!(options.config.goal, Position::new(2, 1));
    assert_eq!(options.config.step_budget, StepBudget::new(50).unwrap());
    assert!(options.replay);
    assert_eq!(options.board, Board::new(4, 5));
    assert_eq!(options.max_moves, 7);
    assert_eq!(options.color, ColorMode::Never);
}

#[test]
fn zero_budget_is_rejected() {
    let err = parse_run_options(&args(&["walk.seek", "--budget=0"])).unwrap_err();
    assert!(err.contains("positive"), "{err}");
}

#[test]
fn malformed_values_are_rejected() {
    for bad in [
        "--player=1",
        "--goal=a,b",
        "--player=-1,0",
        "--goal=0,-2",
        "--budget=-3",
        "--board=3",
        "--board=0x3",
        "--max-moves=lots",
        "--color=sometimes",
        "--verbose",
    ] {
        assert!(
            parse_run_options(&args(&["walk.seek", bad])).is_err(),
            "{bad} should be rejected"
        );
    }
}

#[test]
fn missing_or_extra_paths_are_rejected() {
    assert!(parse_run_options(&args(&["--replay"])).is_err());
    assert!(parse_run_options(&args(&["a.seek", "b.seek"])).is_err());
}

#[test]
fn position_and_board_parsers() {
    assert_eq!(parse_position("3,4"), Ok(Position::new(3, 4)));
    assert_eq!(parse_position(" 1 , 2 "), Ok(Position::new(1, 2)));
    assert_eq!(parse_board("2X7"), Ok(Board::new(2, 7)));
    assert!(parse_board("x3").is_err());
}

#[test]
fn negative_coordinates_use_the_position_message() {
    for value in ["-1,2", "2,-1", " -1 , -1 "] {
        assert_eq!(
            parse_position(value),
            Err(format!("invalid position '{value}': expected X,Y"))
        );
    }
    assert_eq!(parse_position("0,0"), Ok(Position::new(0, 0)));
}
