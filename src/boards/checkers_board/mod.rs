pub mod error;
pub mod layout;
pub mod model;
pub mod notation;
pub mod squares;
pub mod zobrist_hash;
pub use error::{CheckersError, IllegalMoveReason};
pub use layout::INITIAL_LAYOUT;
pub use model::{Action, Capabilities, Color, Field, Move, MultiJump, Piece, PieceKind, Rules, Square};
pub use squares::SQUARE_TABLE;
pub use zobrist_hash::{ZobristHash, ZOBRIST};

mod checkers_board;
mod jump_search;
mod move_generation;
#[cfg(test)]
pub mod test_utils;
mod validation;
pub use checkers_board::{CheckersBoard, HistoryEntry, StepRecord};
pub use jump_search::{JumpId, JumpNode, JumpTree};
pub use move_generation::LegalMoveGenerator;

#[cfg(test)]
mod tests {
    use super::test_utils::assert_moves;
    use super::*;

    fn field(name: &str) -> Field {
        Field::from_name(name).unwrap()
    }

    #[test]
    fn test_opening_exchange() {
        let mut board = CheckersBoard::from_layout(INITIAL_LAYOUT).unwrap();
        board.play_notation("C3B4").unwrap();
        board.play_notation("B6C5").unwrap();

        assert!(!board.has_capture(Color::Red));
        assert!(!board.has_capture(Color::Black));
        assert!(!board.game_over());
        assert_eq!(board.turn(), Color::Red);
        assert_eq!(board.ply(), 2);
    }

    #[test]
    fn test_move_from_empty_square() {
        let mut board = CheckersBoard::from_layout(INITIAL_LAYOUT).unwrap();
        let before = board.clone();
        let err = board.play_notation("E5D4").unwrap_err();
        assert_eq!(err.reason(), Some(IllegalMoveReason::NoPiece));
        assert_eq!(board, before);
    }

    #[test]
    fn test_illegal_move_leaves_board_untouched() {
        let mut board = CheckersBoard::from_layout("8/8/8/8/---P----/--p---p-/8/8").unwrap();
        let before = board.clone();
        let err = board.play_notation("G3H4").unwrap_err();
        assert_eq!(
            err,
            CheckersError::IllegalMove {
                notation: "G3H4".to_string(),
                reason: IllegalMoveReason::MissedCapture,
            }
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_multi_jump_promotes_and_undoes() {
        let mut board = CheckersBoard::from_layout("8/--P-----/8/--P-----/-p------/8/-------P/8").unwrap();
        let before = board.clone();
        assert_moves(board.legal_moves(), vec!["B4D6B8"]);

        assert_eq!(
            board.play_notation("B4B8").unwrap_err().reason(),
            Some(IllegalMoveReason::ShorterThanLongest)
        );
        let played = board.play_notation("B4D6B8").unwrap();
        assert_eq!(played.as_notation(), "B4D6B8");
        assert_eq!(played.captured().collect::<Vec<_>>(), vec![field("C5"), field("C7")]);
        assert!(board.is_king(field("B8")));
        assert_eq!(board.owner_of(field("B8")), Some(Color::Red));
        assert_eq!(board.piece_count(Color::Black), 1);
        assert_eq!(board.turn(), Color::Black);
        assert_eq!(board.hash(), ZOBRIST.calculate_hash(&board));

        board.undo();
        assert_eq!(board, before);
        assert!(!board.is_king(field("B4")));
    }

    #[test]
    fn test_capture_ends_the_game() {
        let mut board = CheckersBoard::from_layout("8/8/-P------/--p-----/8/8/8/8")
            .unwrap()
            .with_turn(Color::Black);
        board.play_notation("B6D4").unwrap();
        assert!(board.game_over());
        assert_eq!(board.winner(), Some(Color::Black));
        assert!(board.generate_legal_moves().is_empty());
    }

    #[test]
    fn test_play_and_undo_restore_everything() {
        let mut board = CheckersBoard::from_layout(INITIAL_LAYOUT).unwrap();
        let start = board.clone();
        for notation in ["C3D4", "F6E5", "D4F6", "G7E5"] {
            board.play_notation(notation).unwrap();
        }
        assert_eq!(board.piece_count(Color::Red), 11);
        assert_eq!(board.piece_count(Color::Black), 11);

        while board.undo().is_some() {}
        assert_eq!(board, start);
        assert_eq!(board.to_layout(), INITIAL_LAYOUT);
    }

    #[test]
    fn test_parse_move_does_not_play() {
        let board = CheckersBoard::from_layout(INITIAL_LAYOUT).unwrap();
        let action = board.parse_move("c3d4").unwrap();
        assert_eq!(action.as_notation(), "C3D4");
        assert_eq!(board.ply(), 0);
        assert!(matches!(board.parse_move("C3"), Err(CheckersError::Format(_))));
    }

    #[test]
    fn test_notation_round_trip_through_board() {
        let mut board = CheckersBoard::from_layout(INITIAL_LAYOUT).unwrap();
        for action in board.generate_legal_moves() {
            let reparsed = Action::from_notation(&action.as_notation()).unwrap();
            assert_eq!(board.check(&reparsed), Ok(action.clone()));
        }
        let played = board.play_notation("E3F4").unwrap();
        assert_eq!(played.to_string(), "E3F4");
    }
}
