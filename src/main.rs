// src/main.rs
use clap::Parser;
use std::error::Error;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use shogi_quest::input::{parse_user_input, Command, UserInput};
use shogi_quest::{
    new_game, reset, save_record, CommandError, GameState, Outcome, DEFAULT_RECORD_FILENAME,
};

#[derive(Parser, Debug)]
#[command(name = "shogi_quest")]
#[command(about = "Two-player Shogi on a single terminal")]
struct Args {
    /// File the game record is written to on game over or quit
    #[arg(short, long, default_value = DEFAULT_RECORD_FILENAME)]
    record: PathBuf,

    /// Never write the record automatically
    #[arg(long)]
    no_autosave: bool,

    /// Log filter used when RUST_LOG is not set (e.g. "debug")
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn init_logging(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr) // Keep stdout for the board
        .init();
}

/// Prints the prompt and reads one line. `Ok(None)` on end of input.
fn read_command_line(game: &GameState) -> Result<Option<String>, CommandError> {
    print!("\n{}. Enter a cell (row col) or command: ", game.status_line());
    io::stdout().flush()?;
    let mut input_line = String::new();
    match io::stdin().read_line(&mut input_line)? {
        0 => Ok(None),
        _ => Ok(Some(input_line)),
    }
}

fn autosave(game: &GameState, args: &Args) {
    if args.no_autosave { return; }
    match save_record(game, &args.record) {
        Ok(()) => println!("Game record saved to '{}'.", args.record.display()),
        Err(e) => {
            warn!(error = %e, path = %args.record.display(), "failed to save game record");
            eprintln!("Warning: Failed to save game record: {}", e);
        }
    }
}

fn print_history(game: &GameState) {
    if game.history().is_empty() {
        println!("No moves yet.");
        return;
    }
    println!("Move History:");
    for (i, mv) in game.history().iter().enumerate() {
        println!("{:>3}. {}: {}", i + 1, mv.player, mv);
    }
}

// --- Main Game Loop ---

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    init_logging(&args.log_level);

    let mut game = new_game();
    let mut record_saved = false;

    println!("==============================");
    println!("|        SHOGI QUEST         |");
    println!("==============================");
    print_help();

    'game_loop: loop {
        println!("------------------------------------------");
        println!("{}", game);

        if let Some(winner) = game.winner() {
            println!("=== GAME OVER: {} wins by king capture. Type 'reset' to play again. ===", winner);
            if !record_saved {
                autosave(&game, &args);
                record_saved = true;
            }
        }

        let input_line = match read_command_line(&game) {
            Ok(Some(line)) => line,
            Ok(None) => {
                println!("\nEnd of input detected. Quitting game.");
                if !record_saved { autosave(&game, &args); }
                break 'game_loop;
            }
            Err(e) => {
                eprintln!("Error reading input: {}. Try again or use 'quit'/'exit'.", e);
                continue 'game_loop;
            }
        };

        let input_trimmed = input_line.trim();
        if input_trimmed.is_empty() { continue 'game_loop; }

        match parse_user_input(input_trimmed) {
            Ok(UserInput::Click { row, col }) => match game.play(row, col) {
                Ok((next, outcome)) => {
                    match outcome {
                        Outcome::Selected(pos) => {
                            println!("Selected {}: {} destination(s).", pos, next.destinations().len())
                        }
                        Outcome::Deselected => println!("Selection cleared."),
                        Outcome::Moved(mv) => println!("{}: {}", mv.player, mv),
                        Outcome::Won(_) => {}
                    }
                    game = next;
                }
                // The engine ignores the click; tell the player why
                Err(e) => {
                    debug!(row, col, error = %e, "input rejected");
                    println!("Ignored: {}", e);
                }
            },

            Ok(UserInput::Command(command)) => match command {
                Command::Reset => {
                    game = reset();
                    record_saved = false;
                    println!("Board reset.");
                }
                Command::History => print_history(&game),
                Command::Info => match game.selected_info() {
                    Some(info) => println!("{}: {}", info.name, info.description),
                    None => println!("No description available."),
                },
                Command::Help => print_help(),
                Command::Quit => {
                    println!("Quit command received.");
                    if !record_saved { autosave(&game, &args); }
                    println!("Exiting game.");
                    break 'game_loop;
                }
                Command::Save(filename) => {
                    match save_record(&game, Path::new(&filename)).map_err(CommandError::from) {
                        Ok(()) => println!("Game record saved to '{}'.", filename),
                        Err(e) => println!("Error: {}", e),
                    }
                }
            },

            Err(e) => println!("Input Error: {}", e),
        }
    }

    println!("\nGame session finished.");
    Ok(())
}

/// Prints available commands.
fn print_help() {
    println!("\nAvailable Commands:");
    println!("  <row> <col>    Click a cell (also '34' or '3,4'). Rows and columns run 0-8.");
    println!("                 Click your own piece to select it, click it again to deselect,");
    println!("                 then click a marked destination (<*>) to move or capture.");
    println!("                 Pieces entering the far three rows promote automatically.");
    println!("  history        Show the move history.");
    println!("  info           Describe the selected piece.");
    println!("  reset          Restore the starting position and clear the history.");
    println!("  save [file]    Save the game record as JSON (default: {}).", DEFAULT_RECORD_FILENAME);
    println!("  help           Show this help message.");
    println!("  quit / exit    Exit the game (saves the record unless --no-autosave).");
    println!();
}
