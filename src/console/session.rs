//! Console session: owns one game, turns commands into response lines.

use super::options::Options;
use super::parser::{parse_command, Command};
use crate::board::{Piece, BOARD_SIZE};
use crate::game::Game;
use crate::notation::{move_notation, parse_move, parse_square, square_name};
use std::io::{self, BufRead, Write};
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Waiting for a move or for the first click
    Idle,
    /// A piece of the side to move has been clicked; the next click is the target
    Selected { row: usize, col: usize },
}

pub struct Session {
    state: SessionState,
    game: Game,
    options: Options,
    running: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self::with_game(Game::new(), Options::default())
    }

    pub fn with_options(options: Options) -> Self {
        Self::with_game(Game::new(), options)
    }

    pub fn with_game(game: Game, options: Options) -> Self {
        Self {
            state: SessionState::Idle,
            game,
            options,
            running: true,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    fn trace(&self, res: &mut Vec<String>, msg: impl AsRef<str>) {
        if self.options.debug {
            res.push(format!("info string {}", msg.as_ref()));
        }
    }

    pub fn handle_command(&mut self, cmd: Command) -> Vec<String> {
        let mut res = Vec::new();
        match cmd {
            Command::NewGame => {
                self.game = Game::new();
                self.state = SessionState::Idle;
                self.trace(&mut res, "new game");
                res.extend(self.render());
            }
            Command::Show => {
                res.extend(self.render());
            }
            Command::Move(None) => {
                res.push("info string error: move needs an argument like e2e4".to_string());
            }
            Command::Move(Some(text)) => match parse_move(&text) {
                Ok(((sr, sc), (tr, tc))) => {
                    self.play(sr, sc, tr, tc, &mut res);
                }
                Err(e) => {
                    res.push(format!("info string invalid move {}: {}", text, e));
                }
            },
            Command::Click(None) => {
                res.push("info string error: click needs a square like e2".to_string());
            }
            Command::Click(Some(text)) => match parse_square(&text) {
                Ok((row, col)) => self.click(row, col, &mut res),
                Err(e) => {
                    res.push(format!("info string invalid square {}: {}", text, e));
                }
            },
            Command::Undo => {
                if self.game.history().is_empty() {
                    self.trace(&mut res, "nothing to undo");
                } else {
                    self.game.undo();
                    self.trace(
                        &mut res,
                        format!("undone, {} moves in history", self.game.history().len()),
                    );
                }
                res.extend(self.render());
            }
            Command::Moves => {
                let moves: Vec<String> = self
                    .game
                    .generate_moves()
                    .iter()
                    .map(|m| m.notation())
                    .collect();
                if moves.is_empty() {
                    res.push("info string no moves available".to_string());
                } else {
                    self.trace(&mut res, format!("{} candidate moves", moves.len()));
                    res.push(moves.join(" "));
                }
            }
            Command::History => {
                let list = self.game.move_list();
                if list.is_empty() {
                    res.push("info string no moves yet".to_string());
                }
                for (i, notation) in list.iter().enumerate() {
                    res.push(format!("{}. {}", i + 1, notation));
                }
            }
            Command::Turn => {
                res.push(self.turn_text().to_string());
            }
            Command::Fen => {
                res.push(self.game.to_fen());
            }
            Command::Position { fen } => {
                // keep the current game if the FEN is invalid
                let game = match fen {
                    None => Ok(Game::new()),
                    Some(f) => Game::from_fen(&f),
                };
                match game {
                    Ok(g) => {
                        self.game = g;
                        self.state = SessionState::Idle;
                        self.trace(&mut res, format!("position set: {}", self.game.to_fen()));
                    }
                    Err(e) => {
                        res.push(format!("info string FEN parse error: {}", e));
                    }
                }
            }
            Command::Perft { depth: None } => {
                res.push("info string error: perft needs a depth".to_string());
            }
            Command::Perft { depth: Some(depth) } => {
                let start = Instant::now();
                let nodes = self.game.perft(depth);
                let elapsed_ms = start.elapsed().as_millis();
                self.trace(&mut res, format!("perft time {} ms", elapsed_ms));
                res.push(format!("perft {} nodes {}", depth, nodes));
            }
            Command::Set { name, value } => match self.options.set_option(&name, value.as_deref()) {
                Ok(()) => {
                    res.push(format!(
                        "info string {} set to {}",
                        name,
                        value.as_deref().unwrap_or("true")
                    ));
                }
                Err(e) => {
                    res.push(format!("info string error: {}", e));
                }
            },
            Command::Help => {
                res.extend(help_lines());
                res.extend(self.options.describe());
            }
            Command::Quit => {
                self.running = false;
            }
            Command::Unknown(s) => {
                res.push(format!("info string unknown command: {}", s));
            }
        }
        res
    }

    fn play(&mut self, sr: usize, sc: usize, tr: usize, tc: usize, res: &mut Vec<String>) {
        if self.game.try_make_move(sr, sc, tr, tc) {
            let last = self.game.history().last().copied();
            if let Some(mv) = last {
                if mv.is_capture() {
                    self.trace(res, format!("{:?} takes {:?}", mv.moved_piece, mv.captured_piece));
                }
            }
            res.push(self.game.last_move_notation().to_string());
            self.trace(res, format!("{} to move", self.turn_text()));
        } else {
            res.push(format!("illegal move {}", move_notation(sr, sc, tr, tc)));
        }
    }

    // First click picks up a piece of the side to move (anything else is ignored);
    // the second click tries the move and drops the selection either way.
    fn click(&mut self, row: usize, col: usize, res: &mut Vec<String>) {
        match self.state {
            SessionState::Idle => {
                if self.game.can_select(row, col) {
                    self.state = SessionState::Selected { row, col };
                    res.push(format!("selected {}", square_name(row, col)));
                } else {
                    self.trace(res, format!("nothing to select on {}", square_name(row, col)));
                }
            }
            SessionState::Selected { row: sr, col: sc } => {
                self.state = SessionState::Idle;
                self.play(sr, sc, row, col, res);
            }
        }
    }

    fn turn_text(&self) -> &'static str {
        if self.game.white_to_move() {
            "White"
        } else {
            "Black"
        }
    }

    fn cell_text(&self, piece: Piece) -> String {
        if piece.is_empty() {
            ".".to_string()
        } else if self.options.glyphs {
            piece.glyph().to_string()
        } else {
            piece.to_char().to_string()
        }
    }

    /// Board diagram (rank 8 on top) followed by the side to move.
    pub fn render(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(BOARD_SIZE + 2);
        for (r, row) in self.game.board().rows().iter().enumerate() {
            let cells: Vec<String> = row.iter().map(|&p| self.cell_text(p)).collect();
            if self.options.coordinates {
                lines.push(format!("{} {}", BOARD_SIZE - r, cells.join(" ")));
            } else {
                lines.push(cells.join(" "));
            }
        }
        if self.options.coordinates {
            lines.push("  a b c d e f g h".to_string());
        }
        lines.push(format!("turn {}", self.turn_text()));
        lines
    }
}

fn help_lines() -> Vec<String> {
    [
        "commands:",
        "  new                      start a new game",
        "  board | show | d         print the board",
        "  move <e2e4> | <e2e4>     play a move",
        "  click <square>           select a piece, then click its target",
        "  undo                     take back the last move",
        "  moves                    list moves for the side to move",
        "  history                  list played moves",
        "  turn                     show the side to move",
        "  fen                      print the position as FEN",
        "  position startpos | position fen <fen>",
        "  perft <depth>            count move-tree leaves",
        "  set <option> <value>     glyphs, coordinates, debug",
        "  quit",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// Read commands from `reader` until EOF or `quit`, writing responses to `writer`.
pub fn run_session<R: BufRead, W: Write>(
    session: &mut Session,
    mut reader: R,
    mut writer: W,
) -> io::Result<()> {
    for line in session.render() {
        writeln!(writer, "{}", line)?;
    }
    writer.flush()?;

    let mut buf = String::new();
    while session.is_running() {
        buf.clear();
        let n = reader.read_line(&mut buf)?;
        if n == 0 {
            // EOF reached
            break;
        }
        let line = buf.trim();
        if line.is_empty() {
            continue;
        }

        for r in process_line(line, session) {
            writeln!(writer, "{}", r)?;
        }
        writer.flush()?;
    }

    Ok(())
}

pub fn run_console_loop(session: &mut Session) -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(session, stdin.lock(), stdout.lock())
}

pub fn process_line(line: &str, session: &mut Session) -> Vec<String> {
    let cmd = parse_command(line);
    session.handle_command(cmd)
}
