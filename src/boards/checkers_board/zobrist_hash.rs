use super::{CheckersBoard, Color, Field, PieceKind, Square};
use lazy_static::lazy_static;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;

const BOARD_SIZE: usize = 8;

pub struct ZobristHash {
    piece_keys: [[[u64; BOARD_SIZE * BOARD_SIZE]; 2]; 2],
    side_to_move_key: u64,
}

impl ZobristHash {
    fn new(seed: u64) -> Self {
        let mut rng = Pcg64::seed_from_u64(seed);

        // Random numbers for men and kings on squares
        let mut piece_keys = [[[0; BOARD_SIZE * BOARD_SIZE]; 2]; 2];
        for color_keys in &mut piece_keys {
            for kind_keys in color_keys {
                for square_key in kind_keys {
                    *square_key = rng.gen();
                }
            }
        }

        let side_to_move_key = rng.gen();

        ZobristHash {
            piece_keys,
            side_to_move_key,
        }
    }

    fn piece_key(&self, square: Square, field: Field) -> u64 {
        match square {
            Square::Empty => 0,
            Square::Occupied(piece) => {
                let kind_index = match piece.kind {
                    PieceKind::Man => 0,
                    PieceKind::King => 1,
                };
                self.piece_keys[piece.color.index()][kind_index][field.index()]
            }
        }
    }

    /// Toggles `square` on `field`; applying it twice is a no-op.
    pub fn update_square(&self, hash: u64, square: Square, field: Field) -> u64 {
        hash ^ self.piece_key(square, field)
    }

    pub fn update_active_side(&self, hash: u64) -> u64 {
        hash ^ self.side_to_move_key
    }

    pub fn calculate_hash(&self, board: &CheckersBoard) -> u64 {
        let mut hash = 0;

        for (field, piece) in board.pieces_with_fields() {
            hash = self.update_square(hash, Square::Occupied(piece), field);
        }

        if board.turn() == Color::Black {
            hash ^= self.side_to_move_key;
        }

        hash
    }
}

lazy_static! {
    pub static ref ZOBRIST: ZobristHash = ZobristHash::new(42);
}
