use std::fmt;

/// Why a well-formed move was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalMoveReason {
    NoPiece,
    WrongTurn,
    OccupiedTarget,
    UnmatchedPath,
    AmbiguousPath,
    ShorterThanLongest,
    IllegalGeometry,
    BackwardMan,
    MissedCapture,
}

impl fmt::Display for IllegalMoveReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IllegalMoveReason::NoPiece => write!(f, "there is no piece on the source square"),
            IllegalMoveReason::WrongTurn => write!(f, "it is not this side's turn to move"),
            IllegalMoveReason::OccupiedTarget => write!(f, "target square is not empty"),
            IllegalMoveReason::UnmatchedPath => write!(f, "invalid path to target square"),
            IllegalMoveReason::AmbiguousPath => write!(f, "more than one jump chain reaches the target"),
            IllegalMoveReason::ShorterThanLongest => write!(f, "all jumps must be taken"),
            IllegalMoveReason::IllegalGeometry => write!(f, "pieces move one square diagonally"),
            IllegalMoveReason::BackwardMan => write!(f, "cannot move backwards as a normal piece"),
            IllegalMoveReason::MissedCapture => write!(f, "a jump is available and must be taken"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CheckersError {
    #[error("invalid layout: {0}")]
    Layout(String),

    #[error("invalid move notation: {0}")]
    Format(String),

    #[error("illegal move {notation}: {reason}")]
    IllegalMove {
        notation: String,
        reason: IllegalMoveReason,
    },

    #[error("unknown square: {0}")]
    Lookup(String),
}

impl CheckersError {
    pub fn illegal(notation: impl Into<String>, reason: IllegalMoveReason) -> Self {
        CheckersError::IllegalMove {
            notation: notation.into(),
            reason,
        }
    }

    pub fn reason(&self) -> Option<IllegalMoveReason> {
        match self {
            CheckersError::IllegalMove { reason, .. } => Some(*reason),
            _ => None,
        }
    }
}
