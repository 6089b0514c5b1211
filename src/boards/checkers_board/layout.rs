use super::error::CheckersError;
use super::{CheckersBoard, Field, Piece, Square};

pub const INITIAL_LAYOUT: &str = "-P-P-P-P/P-P-P-P-/-P-P-P-P/8/8/p-p-p-p-/-p-p-p-p/p-p-p-p-";

/// Parses a layout string into the 64 board slots.
///
/// Rows run from rank 8 down to rank 1 and are separated by '/'. A row is either
/// eight symbols out of `P p K k -` or a single digit giving a run of empty squares.
/// Whitespace is ignored, so a layout may be written one row per line.
pub fn parse_layout(layout: &str) -> Result<[Square; 64], CheckersError> {
    let cleaned: String = layout.chars().filter(|c| !c.is_whitespace()).collect();
    let rows: Vec<&str> = cleaned.split('/').collect();
    if rows.len() != 8 {
        return Err(CheckersError::Layout(format!("expected 8 rows, found {}", rows.len())));
    }

    let mut squares = [Square::Empty; 64];
    let mut index = 0;

    for (row_index, row) in rows.iter().enumerate() {
        let symbols: Vec<char> = row.chars().collect();

        if symbols.len() == 1 {
            match symbols[0].to_digit(10) {
                Some(run @ 1..=8) => index += run as usize,
                _ => {
                    return Err(CheckersError::Layout(format!(
                        "row {} is neither 8 squares nor an empty run: {}",
                        row_index + 1,
                        row
                    )))
                }
            }
            continue;
        }

        if symbols.len() != 8 {
            return Err(CheckersError::Layout(format!(
                "row {} has {} squares: {}",
                row_index + 1,
                symbols.len(),
                row
            )));
        }

        for c in symbols {
            match c {
                '-' => {}
                _ => match Piece::from_char(c) {
                    Some(piece) => squares[index] = Square::Occupied(piece),
                    None => return Err(CheckersError::Layout(format!("invalid piece character: {}", c))),
                },
            }
            index += 1;
        }
    }

    Ok(squares)
}

pub fn from_layout(layout: &str) -> Result<CheckersBoard, CheckersError> {
    parse_layout(layout).map(CheckersBoard::from_squares)
}

pub fn to_layout(board: &CheckersBoard) -> String {
    let mut rows = Vec::with_capacity(8);

    for row in 0..8 {
        let symbols: String = (0..8)
            .map(|col| match board.square(Field::new(row, col)) {
                Square::Occupied(piece) => piece.to_char(),
                Square::Empty => '-',
            })
            .collect();

        if symbols.chars().all(|c| c == '-') {
            rows.push("8".to_string());
        } else {
            rows.push(symbols);
        }
    }

    rows.join("/")
}
