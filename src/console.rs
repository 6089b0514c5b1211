use std::io::{self, BufRead, Write};

use checkers::boards::checkers_board::{CheckersBoard, Color, Field, Square};
use log::{debug, info, warn};

pub fn render_to_string(board: &CheckersBoard) -> String {
    let mut board_representation = String::new();
    board_representation.push_str("    A   B   C   D   E   F   G   H  \n");
    board_representation.push_str("  ┌───┬───┬───┬───┬───┬───┬───┬───┐\n");

    // Row 0 is rank 8, so the board prints top down.
    for row in 0..8u8 {
        let rank = 8 - row;
        board_representation.push_str(&format!("{} │", rank));
        for col in 0..8 {
            let symbol = match board.square(Field::new(row, col)) {
                Square::Empty => ' ',
                Square::Occupied(piece) => piece.to_char(),
            };
            board_representation.push_str(&format!(" {} │", symbol));
        }
        board_representation.push_str(&format!(" {}\n", rank));

        if row < 7 {
            board_representation.push_str("  ├───┼───┼───┼───┼───┼───┼───┼───┤\n");
        }
    }

    board_representation.push_str("  └───┴───┴───┴───┴───┴───┴───┴───┘\n");
    board_representation.push_str("    A   B   C   D   E   F   G   H  \n");

    board_representation
}

/// The side that has won, counting a side without any legal move as beaten.
pub fn outcome(board: &CheckersBoard) -> Option<Color> {
    board
        .winner()
        .or_else(|| (!board.has_legal_move()).then(|| board.turn().opposite()))
}

/// Reads moves and commands line by line until the game ends or input runs out.
///
/// Besides move notation the loop understands `moves`, `undo`, `layout` and `quit`.
pub fn play<R: BufRead, W: Write>(board: &mut CheckersBoard, input: R, out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", render_to_string(board))?;
    let mut lines = input.lines();

    loop {
        if let Some(winner) = outcome(board) {
            info!("game over after {} plies, {} wins", board.ply(), winner);
            writeln!(out, "{} wins", winner)?;
            return Ok(());
        }

        write!(out, "{} to move> ", board.turn())?;
        out.flush()?;
        let Some(line) = lines.next() else {
            return Ok(());
        };
        let line = line?;

        match line.trim() {
            "" => continue,
            "quit" | "exit" => return Ok(()),
            "undo" => match board.undo() {
                Some(action) => {
                    info!("took back {}", action);
                    writeln!(out, "{}", render_to_string(board))?;
                }
                None => writeln!(out, "nothing to undo")?,
            },
            "moves" => {
                let moves: Vec<String> = board.legal_moves().map(|action| action.as_notation()).collect();
                writeln!(out, "{}", moves.join(" "))?;
            }
            "layout" => writeln!(out, "{}", board.to_layout())?,
            notation => {
                let mover = board.turn();
                match board.play_notation(notation) {
                    Ok(action) => {
                        info!("{} played {}", mover, action);
                        debug!("layout {} hash {:016x}", board.to_layout(), board.hash());
                        writeln!(out, "{}", render_to_string(board))?;
                    }
                    Err(err) => {
                        warn!("{}", err);
                        writeln!(out, "{}", err)?;
                    }
                }
            }
        }
    }
}
