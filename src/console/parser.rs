//! Command parser for the console front end.

use crate::notation::parse_move;

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Command {
    NewGame,
    Show,
    /// `move e2e4`, or a bare `e2e4` / `e2-e4`
    Move(Option<String>),
    /// Select-then-target input, one square per click
    Click(Option<String>),
    Undo,
    Moves,
    History,
    Turn,
    Fen,
    Position {
        fen: Option<String>,
    },
    Perft {
        depth: Option<u32>,
    },
    Set {
        name: String,
        value: Option<String>,
    },
    Help,
    Quit,
    Unknown(String),
}

/// Parse one line of input (simple whitespace tokenizer)
pub fn parse_command(line: &str) -> Command {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Command::Unknown(String::new());
    }

    let parts: Vec<&str> = trimmed.split_whitespace().collect();
    match parts[0] {
        "new" | "newgame" => Command::NewGame,
        "board" | "show" | "d" => Command::Show,
        "move" | "m" => Command::Move(parts.get(1).map(|s| s.to_string())),
        "click" | "c" => Command::Click(parts.get(1).map(|s| s.to_string())),
        "undo" | "u" => Command::Undo,
        "moves" => Command::Moves,
        "history" | "h" => Command::History,
        "turn" => Command::Turn,
        "fen" => Command::Fen,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        "position" => {
            // position startpos | position fen <placement> [side ...]
            if parts.len() >= 3 && parts[1] == "fen" {
                Command::Position {
                    fen: Some(parts[2..].join(" ")),
                }
            } else if parts.len() == 2 && parts[1] == "startpos" {
                Command::Position { fen: None }
            } else {
                Command::Unknown(trimmed.to_string())
            }
        }
        "perft" => Command::Perft {
            depth: parts.get(1).and_then(|v| v.parse::<u32>().ok()),
        },
        "set" => {
            // set <name> [value...]
            match parts.get(1) {
                Some(name) => {
                    let value = if parts.len() > 2 {
                        Some(parts[2..].join(" "))
                    } else {
                        None
                    };
                    Command::Set {
                        name: name.to_string(),
                        value,
                    }
                }
                None => Command::Unknown(trimmed.to_string()),
            }
        }
        other if parts.len() == 1 && parse_move(other).is_ok() => {
            Command::Move(Some(other.to_string()))
        }
        _ => Command::Unknown(trimmed.to_string()),
    }
}
