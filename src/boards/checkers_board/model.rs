use std::fmt;

use super::error::CheckersError;
use super::squares::SQUARE_TABLE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Black,
}

impl Color {
    pub fn opposite(&self) -> Self {
        match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Color::Red => 0,
            Color::Black => 1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Red => write!(f, "red"),
            Color::Black => write!(f, "black"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialOrd, Ord, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Man,
    King,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Square {
    Occupied(Piece),
    Empty,
}

/// Which diagonal directions a piece may travel in, computed once per piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    pub toward_row_0: bool,
    pub toward_row_7: bool,
}

impl Capabilities {
    /// Diagonal unit steps as (row delta, col delta) for every enabled direction.
    pub fn directions(&self) -> Vec<(i8, i8)> {
        let mut directions = Vec::with_capacity(4);
        if self.toward_row_0 {
            directions.push((-1, -1));
            directions.push((-1, 1));
        }
        if self.toward_row_7 {
            directions.push((1, -1));
            directions.push((1, 1));
        }
        directions
    }
}

impl Piece {
    pub fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    pub fn is_king(&self) -> bool {
        self.kind == PieceKind::King
    }

    /// Red men advance toward row 0, black men toward row 7, kings both ways.
    pub fn capabilities(&self) -> Capabilities {
        Capabilities {
            toward_row_0: self.color == Color::Red || self.is_king(),
            toward_row_7: self.color == Color::Black || self.is_king(),
        }
    }

    pub fn promoted(&self) -> Self {
        Self::new(self.color, PieceKind::King)
    }

    pub fn to_char(&self) -> char {
        match (self.color, self.kind) {
            (Color::Black, PieceKind::Man) => 'P',
            (Color::Black, PieceKind::King) => 'K',
            (Color::Red, PieceKind::Man) => 'p',
            (Color::Red, PieceKind::King) => 'k',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'P' => Some(Self::new(Color::Black, PieceKind::Man)),
            'K' => Some(Self::new(Color::Black, PieceKind::King)),
            'p' => Some(Self::new(Color::Red, PieceKind::Man)),
            'k' => Some(Self::new(Color::Red, PieceKind::King)),
            _ => None,
        }
    }
}

/// One of the 64 board squares. Row 0 is rank 8, column 0 is file A.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Hash)]
pub struct Field(u8);

impl Field {
    pub fn new(row: u8, col: u8) -> Self {
        assert!(row < 8 && col < 8, "field out of range: {row}/{col}");
        Self(row * 8 + col)
    }

    pub fn from_index(index: usize) -> Result<Self, CheckersError> {
        if index < 64 {
            Ok(Self(index as u8))
        } else {
            Err(CheckersError::Lookup(index.to_string()))
        }
    }

    pub fn from_name(name: &str) -> Result<Self, CheckersError> {
        SQUARE_TABLE.lookup(name)
    }

    pub fn all() -> impl Iterator<Item = Field> {
        (0..64u8).map(Field)
    }

    pub fn index(&self) -> usize {
        self.0 as usize
    }

    pub fn row(&self) -> u8 {
        self.0 / 8
    }

    pub fn col(&self) -> u8 {
        self.0 % 8
    }

    pub fn name(&self) -> &'static str {
        SQUARE_TABLE.name_of(*self)
    }

    pub fn is_promotion_row(&self) -> bool {
        self.row() == 0 || self.row() == 7
    }

    /// Steps by a row/col delta, `None` when that leaves the board.
    pub fn offset(&self, d_row: i8, d_col: i8) -> Option<Field> {
        let row = self.row() as i8 + d_row;
        let col = self.col() as i8 + d_col;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Field::new(row as u8, col as u8))
        } else {
            None
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A single relocation step. Capture steps carry the jumped square.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Field,
    pub to: Field,
    pub captures: Vec<Field>,
    pub promotion: bool,
}

impl Move {
    pub fn new(from: Field, to: Field) -> Self {
        Self {
            from,
            to,
            captures: Vec::new(),
            promotion: to.is_promotion_row(),
        }
    }

    pub fn capture(from: Field, to: Field, captured: Field) -> Self {
        Self {
            captures: vec![captured],
            ..Self::new(from, to)
        }
    }

    pub fn is_capture(&self) -> bool {
        !self.captures.is_empty()
    }

    /// Same squares travelled, regardless of what the step captures.
    pub fn same_path(&self, other: &Move) -> bool {
        self.from == other.from && self.to == other.to
    }

    pub fn as_notation(&self) -> String {
        format!("{}{}", self.from.name(), self.to.name())
    }
}

/// Every capture step of one turn, in the order they are taken.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MultiJump {
    pub steps: Vec<Move>,
}

impl MultiJump {
    pub fn new(steps: Vec<Move>) -> Self {
        debug_assert!(!steps.is_empty(), "a multi-jump needs at least one step");
        Self { steps }
    }

    pub fn from(&self) -> Field {
        self.steps[0].from
    }

    pub fn to(&self) -> Field {
        self.steps[self.steps.len() - 1].to
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn as_notation(&self) -> String {
        let mut notation = match self.steps.first() {
            Some(first) => first.from.name().to_string(),
            None => return String::new(),
        };
        for step in &self.steps {
            notation.push_str(step.to.name());
        }
        notation
    }
}

/// What a player submits for one turn: a single step or an explicit jump chain.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Action {
    Step(Move),
    Jump(MultiJump),
}

impl Action {
    pub fn from(&self) -> Field {
        match self {
            Action::Step(mv) => mv.from,
            Action::Jump(jump) => jump.from(),
        }
    }

    pub fn to(&self) -> Field {
        match self {
            Action::Step(mv) => mv.to,
            Action::Jump(jump) => jump.to(),
        }
    }

    pub fn steps(&self) -> &[Move] {
        match self {
            Action::Step(mv) => std::slice::from_ref(mv),
            Action::Jump(jump) => &jump.steps,
        }
    }

    pub fn step_count(&self) -> usize {
        self.steps().len()
    }

    pub fn is_capture(&self) -> bool {
        self.steps().iter().any(Move::is_capture)
    }

    pub fn captured(&self) -> impl Iterator<Item = Field> + '_ {
        self.steps().iter().flat_map(|step| step.captures.iter().copied())
    }

    pub fn as_notation(&self) -> String {
        match self {
            Action::Step(mv) => mv.as_notation(),
            Action::Jump(jump) => jump.as_notation(),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_notation())
    }
}

/// Capture rules applied by the validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    /// A capture must be taken over any simple move.
    pub require_jumps: bool,
    /// A capture must follow the longest chain available from its square.
    pub require_all_jumps: bool,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            require_jumps: true,
            require_all_jumps: true,
        }
    }
}
