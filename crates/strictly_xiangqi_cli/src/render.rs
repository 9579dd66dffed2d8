//! Text presenter for boards and game status.

use crate::config::{DisplayConfig, Glyphs};
use strictly_xiangqi::{Board, Coordinate, Game, GameState, Piece, Side};

const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Draws the board from Black's back rank (10) down to Red's (1), with
/// file letters above and below and the river between ranks 6 and 5.
pub fn render_board(board: &Board, display: &DisplayConfig) -> String {
    let files = file_header();
    let mut lines = vec![files.clone()];
    for rank in (1..=Coordinate::RANKS as i16).rev() {
        let cells: String = (0..Coordinate::FILES as i16)
            .map(|file| {
                let cell = Coordinate::new(file, rank)
                    .ok()
                    .and_then(|square| board.get(square))
                    .map(|piece| piece_cell(piece, display))
                    .unwrap_or_else(|| empty_cell(display).to_string());
                format!(" {cell}")
            })
            .collect();
        lines.push(format!("{rank:>3}{cells}"));
        if rank == 6 {
            lines.push(format!("    {:~^26}", " river "));
        }
    }
    lines.push(files);
    lines.join("\n")
}

/// One-line summary: whose turn, check, or the result.
pub fn render_status(game: &Game) -> String {
    match game.state() {
        GameState::InProgress => {
            let side = game.turn();
            let turn = format!("Turn {}: {} to move", game.turn_counter(), side);
            match game.threat(side) {
                Some(threat) => format!("{turn} ({side} is in check: {threat})"),
                None => turn,
            }
        }
        state => format!("Game over: {state}"),
    }
}

fn file_header() -> String {
    let letters: Vec<String> = (b'a'..=b'i').map(|c| format!("{:>2}", c as char)).collect();
    format!("   {}", letters.join(" "))
}

fn piece_cell(piece: Piece, display: &DisplayConfig) -> String {
    let glyph = match display.glyphs() {
        Glyphs::Letters => piece.glyph(),
        Glyphs::Chinese => piece.chinese().to_string(),
    };
    if *display.color() && piece.side == Side::Red {
        format!("{RED}{glyph}{RESET}")
    } else {
        glyph
    }
}

/// Empty squares take the same two columns as a piece.
fn empty_cell(display: &DisplayConfig) -> &'static str {
    match display.glyphs() {
        Glyphs::Letters => " .",
        Glyphs::Chinese => "＋",
    }
}
