//! Option parsing for `seek run`.
//!
//! Options use the `--flag=value` form. Parsing never exits; errors come
//! back as messages so the caller decides how to report them.

use seek_diagnostic::emitter::ColorMode;
use seek_eval::{Position, StepBudget};

use crate::{Board, RunConfig};

/// Everything `seek run` needs besides the source text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    pub path: String,
    pub config: RunConfig,
    pub replay: bool,
    pub board: Board,
    pub max_moves: usize,
    pub color: ColorMode,
}

impl RunOptions {
    pub fn new(path: impl Into<String>) -> Self {
        RunOptions {
            path: path.into(),
            config: RunConfig::default(),
            replay: false,
            board: Board::default(),
            max_moves: Board::DEFAULT_MAX_MOVES,
            color: ColorMode::Auto,
        }
    }
}

/// Parse the arguments following `run`: one file path plus options in any
/// order.
pub fn parse_run_options(args: &[String]) -> Result<RunOptions, String> {
    let mut path = None;
    let mut options = RunOptions::new(String::new());

    for arg in args {
        if let Some(value) = arg.strip_prefix("--player=") {
            options.config.player = parse_position(value)?;
        } else if let Some(value) = arg.strip_prefix("--goal=") {
            options.config.goal = parse_position(value)?;
        } else if let Some(value) = arg.strip_prefix("--budget=") {
            let budget = value
                .parse::<u64>()
                .ok()
                .and_then(StepBudget::new)
                .ok_or_else(|| format!("invalid budget '{value}': expected a positive integer"))?;
            options.config = options.config.with_step_budget(budget);
        } else if arg == "--replay" {
            options.replay = true;
        } else if let Some(value) = arg.strip_prefix("--board=") {
            options.board = parse_board(value)?;
        } else if let Some(value) = arg.strip_prefix("--max-moves=") {
            options.max_moves = value
                .parse()
                .map_err(|_| format!("invalid max moves '{value}': expected a non-negative integer"))?;
        } else if let Some(value) = arg.strip_prefix("--color=") {
            options.color = ColorMode::parse(value).ok_or_else(|| {
                format!("invalid color mode '{value}': expected auto, always or never")
            })?;
        } else if arg.starts_with('-') {
            return Err(format!("unknown option '{arg}'"));
        } else if path.is_none() {
            path = Some(arg.clone());
        } else {
            return Err(format!("unexpected argument '{arg}'"));
        }
    }

    options.path = path.ok_or_else(|| "missing file path".to_string())?;
    Ok(options)
}

/// Parse `X,Y` into a position. Whitespace around either number is allowed;
/// both coordinates must be non-negative.
pub fn parse_position(value: &str) -> Result<Position, String> {
    let invalid = || format!("invalid position '{value}': expected X,Y");
    let (x, y) = value.split_once(',').ok_or_else(invalid)?;
    let x = x.trim().parse::<i64>().map_err(|_| invalid())?;
    let y = y.trim().parse::<i64>().map_err(|_| invalid())?;
    if x < 0 || y < 0 {
        return Err(invalid());
    }
    Ok(Position::new(x, y))
}

/// Parse `WxH` into a board. Both dimensions must be positive.
pub fn parse_board(value: &str) -> Result<Board, String> {
    let invalid = || format!("invalid board '{value}': expected WIDTHxHEIGHT, e.g. 3x3");
    let (w, h) = value.split_once(['x', 'X']).ok_or_else(invalid)?;
    let width = w.trim().parse::<u32>().map_err(|_| invalid())?;
    let height = h.trim().parse::<u32>().map_err(|_| invalid())?;
    if width == 0 || height == 0 {
        return Err(invalid());
    }
    Ok(Board::new(width, height))
}
