pub mod boards;

pub use boards::checkers_board::{
    Action, CheckersBoard, CheckersError, Color, Field, IllegalMoveReason, Move, MultiJump, Piece, PieceKind, Rules,
    Square, INITIAL_LAYOUT,
};
pub use boards::perft::perft;
