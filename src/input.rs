// src/input.rs
use lazy_static::lazy_static;
use regex::Regex;

use crate::error::CommandError;
use crate::record::DEFAULT_RECORD_FILENAME;

lazy_static! {
    // "3 4", "3,4", "3, 4" or the compact "34"
    static ref CELL_SEPARATED: Regex = Regex::new(r"^(-?\d+)\s*[,\s]\s*(-?\d+)$").expect("valid cell regex");
    static ref CELL_COMPACT: Regex = Regex::new(r"^(\d)(\d)$").expect("valid cell regex");
}

#[derive(Debug, PartialEq, Eq)]
pub enum UserInput {
    Click { row: i8, col: i8 },
    Command(Command),
}

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Reset, History, Info, Help, Quit,
    Save(String),
}

/// Parses one line typed at the prompt.
pub fn parse_user_input(input: &str) -> Result<UserInput, CommandError> {
    let trimmed_input = input.trim();

    let mut parts = trimmed_input.splitn(2, char::is_whitespace);
    let command_word = parts.next().unwrap_or("").to_lowercase();
    let argument = parts.next().unwrap_or("").trim();

    match command_word.as_str() {
        "reset" | "new" => return Ok(UserInput::Command(Command::Reset)),
        "history" => return Ok(UserInput::Command(Command::History)),
        "info" => return Ok(UserInput::Command(Command::Info)),
        "help" | "?" => return Ok(UserInput::Command(Command::Help)),
        "quit" | "exit" => return Ok(UserInput::Command(Command::Quit)),
        "save" => {
            let filename = if argument.is_empty() { DEFAULT_RECORD_FILENAME } else { argument }.to_string();
            return Ok(UserInput::Command(Command::Save(filename)));
        }
        _ => {} // Not a command word, try a cell
    }

    parse_cell(trimmed_input)
        .map(|(row, col)| UserInput::Click { row, col })
}

/// Reads a `row col` pair. Range checking is left to the game, which
/// rejects off-board cells itself.
fn parse_cell(input: &str) -> Result<(i8, i8), CommandError> {
    let caps = CELL_SEPARATED
        .captures(input)
        .or_else(|| CELL_COMPACT.captures(input))
        .ok_or_else(|| CommandError::UnknownCommand(input.to_string()))?;
    let number = |i: usize| -> Result<i8, CommandError> {
        caps[i].parse::<i8>()
            .map_err(|_| CommandError::InvalidArgument(format!("coordinate '{}' is out of range", &caps[i])))
    };
    Ok((number(1)?, number(2)?))
}
