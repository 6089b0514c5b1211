use super::error::{CheckersError, IllegalMoveReason};
use super::zobrist_hash::ZOBRIST;
use super::{layout, notation, Action, Color, Field, Move, Piece, PieceKind, Rules, Square};

/// What one applied step removed, so undo can put it back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepRecord {
    pub removed: Vec<(Field, Piece)>,
    pub promoted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub action: Action,
    pub steps: Vec<StepRecord>,
}

/// The 64 slots, side to move, live counts and the undo stack.
///
/// Every change goes through [`CheckersBoard::apply`] and [`CheckersBoard::undo`]
/// so the counts, the hash and the history stay in step with the squares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckersBoard {
    squares: [Square; 64],
    turn: Color,
    red_pieces: u8,
    black_pieces: u8,
    history: Vec<HistoryEntry>,
    rules: Rules,
    hash: u64,
}

impl CheckersBoard {
    /// Board with `squares` as given, red to move and default rules.
    pub fn from_squares(squares: [Square; 64]) -> Self {
        let count = |color: Color| {
            squares
                .iter()
                .filter(|square| matches!(square, Square::Occupied(piece) if piece.color == color))
                .count() as u8
        };
        let red_pieces = count(Color::Red);
        let black_pieces = count(Color::Black);
        let mut board = Self {
            squares,
            turn: Color::Red,
            red_pieces,
            black_pieces,
            history: Vec::new(),
            rules: Rules::default(),
            hash: 0,
        };
        board.hash = ZOBRIST.calculate_hash(&board);
        board
    }

    /// Delegates layout parsing to the `layout` module.
    pub fn from_layout(layout: &str) -> Result<Self, CheckersError> {
        layout::from_layout(layout)
    }

    pub fn to_layout(&self) -> String {
        layout::to_layout(self)
    }

    /// Sets the side to move of a freshly built position.
    pub fn with_turn(mut self, turn: Color) -> Self {
        debug_assert!(self.history.is_empty(), "turn can only be chosen before the first move");
        if self.turn != turn {
            self.turn = turn;
            self.hash = ZOBRIST.update_active_side(self.hash);
        }
        self
    }

    pub fn with_rules(mut self, rules: Rules) -> Self {
        self.rules = rules;
        self
    }
}

impl CheckersBoard {
    pub fn square(&self, field: Field) -> Square {
        self.squares[field.index()]
    }

    pub fn is_empty(&self, field: Field) -> bool {
        self.square(field) == Square::Empty
    }

    pub fn owner_of(&self, field: Field) -> Option<Color> {
        match self.square(field) {
            Square::Occupied(piece) => Some(piece.color),
            Square::Empty => None,
        }
    }

    pub fn is_king(&self, field: Field) -> bool {
        matches!(self.square(field), Square::Occupied(piece) if piece.is_king())
    }

    /// Squares holding a piece of `color`, in ascending index order.
    pub fn player_squares(&self, color: Color) -> Vec<Field> {
        Field::all().filter(|&field| self.owner_of(field) == Some(color)).collect()
    }

    pub fn pieces_with_fields(&self) -> impl Iterator<Item = (Field, Piece)> + '_ {
        Field::all().filter_map(move |field| match self.square(field) {
            Square::Occupied(piece) => Some((field, piece)),
            Square::Empty => None,
        })
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn rules(&self) -> Rules {
        self.rules
    }

    pub fn hash(&self) -> u64 {
        self.hash
    }

    pub fn piece_count(&self, color: Color) -> u8 {
        match color {
            Color::Red => self.red_pieces,
            Color::Black => self.black_pieces,
        }
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// The most recently applied action.
    pub fn peek(&self) -> Option<&Action> {
        self.history.last().map(|entry| &entry.action)
    }

    pub fn ply(&self) -> usize {
        self.history.len()
    }

    pub fn game_over(&self) -> bool {
        self.red_pieces == 0 || self.black_pieces == 0
    }

    /// The side with pieces left once the other has none.
    pub fn winner(&self) -> Option<Color> {
        if self.black_pieces == 0 && self.red_pieces > 0 {
            Some(Color::Red)
        } else if self.red_pieces == 0 && self.black_pieces > 0 {
            Some(Color::Black)
        } else {
            None
        }
    }
}

impl CheckersBoard {
    fn set_square(&mut self, field: Field, square: Square) {
        self.hash = ZOBRIST.update_square(self.hash, self.squares[field.index()], field);
        self.hash = ZOBRIST.update_square(self.hash, square, field);
        self.squares[field.index()] = square;
    }

    fn count_mut(&mut self, color: Color) -> &mut u8 {
        match color {
            Color::Red => &mut self.red_pieces,
            Color::Black => &mut self.black_pieces,
        }
    }

    fn switch_turn(&mut self) {
        self.turn = self.turn.opposite();
        self.hash = ZOBRIST.update_active_side(self.hash);
    }

    /// Applies an already validated action and records it for undo.
    ///
    /// Only the shape of the action is checked: the first step must start on a
    /// piece, every step must start where the previous one ended and land on an
    /// empty square (or the vacated origin), and every captured square must hold
    /// an opposing piece. Nothing is changed if that fails.
    pub fn apply(&mut self, action: Action) -> Result<(), CheckersError> {
        let steps = action.steps();
        if steps.is_empty() {
            return Err(CheckersError::illegal(action.as_notation(), IllegalMoveReason::UnmatchedPath));
        }
        let origin = action.from();
        let mover = match self.square(origin) {
            Square::Occupied(piece) => piece.color,
            Square::Empty => return Err(CheckersError::illegal(action.as_notation(), IllegalMoveReason::NoPiece)),
        };
        if steps.iter().any(|step| step.to != origin && !self.is_empty(step.to)) {
            return Err(CheckersError::illegal(action.as_notation(), IllegalMoveReason::OccupiedTarget));
        }
        let contiguous = steps.windows(2).all(|pair| pair[0].to == pair[1].from);
        let captures_opposing = action
            .captured()
            .all(|field| self.owner_of(field) == Some(mover.opposite()));
        if !contiguous || !captures_opposing {
            return Err(CheckersError::illegal(action.as_notation(), IllegalMoveReason::UnmatchedPath));
        }

        let records = steps.iter().map(|step| self.apply_step(step)).collect();
        self.history.push(HistoryEntry { action, steps: records });
        self.switch_turn();
        Ok(())
    }

    fn apply_step(&mut self, step: &Move) -> StepRecord {
        let mut removed = Vec::with_capacity(step.captures.len());
        for &field in &step.captures {
            if let Square::Occupied(piece) = self.square(field) {
                self.set_square(field, Square::Empty);
                *self.count_mut(piece.color) -= 1;
                removed.push((field, piece));
            }
        }

        let mut promoted = false;
        if let Square::Occupied(piece) = self.square(step.from) {
            promoted = step.promotion && !piece.is_king();
            let placed = if promoted { piece.promoted() } else { piece };
            self.set_square(step.from, Square::Empty);
            self.set_square(step.to, Square::Occupied(placed));
        }

        StepRecord { removed, promoted }
    }

    /// Takes back the most recent action, `None` when nothing has been played.
    pub fn undo(&mut self) -> Option<Action> {
        let entry = self.history.pop()?;

        for (step, record) in entry.action.steps().iter().zip(&entry.steps).rev() {
            if let Square::Occupied(piece) = self.square(step.to) {
                let restored = if record.promoted {
                    Piece::new(piece.color, PieceKind::Man)
                } else {
                    piece
                };
                self.set_square(step.to, Square::Empty);
                self.set_square(step.from, Square::Occupied(restored));
            }
            for &(field, piece) in &record.removed {
                self.set_square(field, Square::Occupied(piece));
                *self.count_mut(piece.color) += 1;
            }
        }

        self.switch_turn();
        Some(entry.action)
    }

    /// Validates `candidate`, re-derives its path from the jump search and plays it.
    ///
    /// Returns the action actually applied, which for captures carries the
    /// jumped squares of every step.
    pub fn play_move(&mut self, candidate: &Action) -> Result<Action, CheckersError> {
        let resolved = self
            .check(candidate)
            .map_err(|reason| CheckersError::illegal(candidate.as_notation(), reason))?;
        self.apply(resolved.clone())?;
        Ok(resolved)
    }

    pub fn play_notation(&mut self, notation: &str) -> Result<Action, CheckersError> {
        let candidate = notation::decode(notation)?;
        self.play_move(&candidate)
    }

    /// Decodes and validates `notation` without touching the board.
    pub fn parse_move(&self, notation: &str) -> Result<Action, CheckersError> {
        let candidate = notation::decode(notation)?;
        self.check(&candidate)
            .map_err(|reason| CheckersError::illegal(candidate.as_notation(), reason))
    }
}
