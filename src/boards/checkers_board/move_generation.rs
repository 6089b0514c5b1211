use std::collections::VecDeque;

use super::{Action, CheckersBoard, Field, Move, Square};

/// Lazily walks the board in ascending square order and yields every legal action.
///
/// Each square is expanded only when the moves found so far run out. Cloning
/// the generator or calling [`LegalMoveGenerator::restart`] starts a fresh pass.
#[derive(Debug, Clone)]
pub struct LegalMoveGenerator<'a> {
    board: &'a CheckersBoard,
    next_square: usize,
    queued: VecDeque<Action>,
    either_side: bool,
}

impl<'a> LegalMoveGenerator<'a> {
    pub fn new(board: &'a CheckersBoard) -> Self {
        Self {
            board,
            next_square: 0,
            queued: VecDeque::new(),
            either_side: false,
        }
    }

    /// Also yields moves of the side that is not on turn, each judged as if it were.
    pub fn either_side(mut self) -> Self {
        self.either_side = true;
        self
    }

    pub fn restart(&mut self) {
        self.next_square = 0;
        self.queued.clear();
    }

    fn expand(&mut self, field: Field) {
        let piece = match self.board.square(field) {
            Square::Occupied(piece) => piece,
            Square::Empty => return,
        };
        if !self.either_side && piece.color != self.board.turn() {
            return;
        }

        for (d_row, d_col) in piece.capabilities().directions() {
            let Some(target) = field.offset(d_row, d_col) else {
                continue;
            };
            if !self.board.is_empty(target) {
                continue;
            }
            if let Ok(action) = self.board.check_as(&Action::Step(Move::new(field, target)), piece.color) {
                self.queued.push_back(action);
            }
        }

        let tree = self.board.jump_search_with(field, piece.color, piece.capabilities());
        for chain in tree.chains() {
            if let Ok(action) = self.board.check_as(&Action::Jump(chain), piece.color) {
                self.queued.push_back(action);
            }
        }
    }
}

impl Iterator for LegalMoveGenerator<'_> {
    type Item = Action;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(action) = self.queued.pop_front() {
                return Some(action);
            }
            if self.next_square >= 64 {
                return None;
            }
            let field = Field::new((self.next_square / 8) as u8, (self.next_square % 8) as u8);
            self.next_square += 1;
            self.expand(field);
        }
    }
}

impl CheckersBoard {
    pub fn legal_moves(&self) -> LegalMoveGenerator<'_> {
        LegalMoveGenerator::new(self)
    }

    pub fn generate_legal_moves(&self) -> Vec<Action> {
        self.legal_moves().collect()
    }

    pub fn has_legal_move(&self) -> bool {
        self.legal_moves().next().is_some()
    }
}
