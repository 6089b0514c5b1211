use crate::boards::checkers_board::{Action, CheckersBoard, CheckersError};

/// Number of move paths of exactly `depth` plies from the current position.
///
/// Moves are played and taken back on `board` itself, so it is left as it was.
pub fn perft(board: &mut CheckersBoard, depth: u8) -> Result<u64, CheckersError> {
    if depth == 0 {
        return Ok(1u64);
    }

    let mut node_count = 0u64;
    for mv in board.generate_legal_moves() {
        board.apply(mv)?;
        node_count += perft(board, depth - 1)?;
        board.undo();
    }
    Ok(node_count)
}

/// Per root move counts at `depth`, sorted by notation.
pub fn divide(board: &mut CheckersBoard, depth: u8) -> Result<Vec<(Action, u64)>, CheckersError> {
    let mut result = Vec::new();
    for mv in board.generate_legal_moves() {
        board.apply(mv.clone())?;
        let count = perft(board, depth.saturating_sub(1))?;
        board.undo();
        result.push((mv, count));
    }
    result.sort_by_key(|(mv, _)| mv.as_notation());
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boards::checkers_board::{Color, INITIAL_LAYOUT};

    #[test]
    fn test_perft() {
        let mut board = CheckersBoard::from_layout(INITIAL_LAYOUT).unwrap();
        assert_eq!(perft(&mut board, 0).unwrap(), 1u64);
        assert_eq!(perft(&mut board, 1).unwrap(), 7u64);
        assert_eq!(perft(&mut board, 2).unwrap(), 49u64);
        assert_eq!(perft(&mut board, 3).unwrap(), 302u64);
        assert_eq!(board.to_layout(), INITIAL_LAYOUT);
        assert_eq!(board.ply(), 0);
    }

    #[test]
    fn test_divide() {
        let mut board = CheckersBoard::from_layout(INITIAL_LAYOUT).unwrap();
        let counts = divide(&mut board, 2).unwrap();
        assert_eq!(counts.len(), 7);
        assert_eq!(counts.iter().map(|(_, c)| c).sum::<u64>(), 49);
        assert_eq!(counts[0].0.as_notation(), "A3B4");
    }

    #[test]
    fn test_perft_forced_capture() {
        let mut board = CheckersBoard::from_layout("8/8/-P------/--p-----/8/8/8/8")
            .unwrap()
            .with_turn(Color::Black);
        assert_eq!(perft(&mut board, 1).unwrap(), 1);
        assert_eq!(perft(&mut board, 2).unwrap(), 0);
    }
}
