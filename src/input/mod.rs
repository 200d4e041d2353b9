//! Keyboard input
//!
//! Turns one line typed by the player into a [`UserCommand`]. Move syntax is
//! checked here so obviously bad input never reaches the server; whether
//! the move is legal is the server's call.

use chess_engine::MoveRequest;
use regex::Regex;
use std::sync::LazyLock;

/// Two squares separated by one whitespace character, either case
static MOVE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-hA-H][1-8]\s[a-hA-H][1-8]$").expect("move pattern is a valid regex")
});

pub const PROMPT: &str = "Enter move: ";
pub const RESIGN_PROMPT: &str = "Are you sure you want to resign (enter 'yes' to confirm)? ";
pub const INVALID_INPUT: &str = "TRY AGAIN: input was invalid";

pub const HELP_TEXT: [&str; 4] = [
    "==========================================================",
    "The accepted format of a move is:",
    "\t$ current_tile new_tile",
    "==========================================================",
];

/// What the player asked for
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UserCommand {
    Help,
    Resign,
    Move(MoveRequest),
    Invalid,
}

/// Check the `"e2 e4"` shape without consulting the board
pub fn is_valid_move_syntax(input: &str) -> bool {
    MOVE_PATTERN.is_match(input)
}

pub fn parse_user_input(line: &str) -> UserCommand {
    let line = line.trim_end_matches(['\r', '\n']);
    let lowered = line.trim().to_ascii_lowercase();

    match lowered.as_str() {
        "help" => UserCommand::Help,
        "resign" => UserCommand::Resign,
        _ if is_valid_move_syntax(line) => match MoveRequest::parse(line) {
            Ok(request) => UserCommand::Move(request),
            Err(_) => UserCommand::Invalid,
        },
        _ => UserCommand::Invalid,
    }
}

/// Only an exact (case-insensitive) "yes" confirms
pub fn is_confirmation(line: &str) -> bool {
    line.trim().eq_ignore_ascii_case("yes")
}
