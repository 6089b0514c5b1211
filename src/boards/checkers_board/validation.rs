use super::error::IllegalMoveReason;
use super::jump_search::JumpTree;
use super::{Action, CheckersBoard, Color, Move, MultiJump, Square};

impl CheckersBoard {
    pub fn validate(&self, action: &Action) -> bool {
        self.check(action).is_ok()
    }

    /// Checks `action` for the side to move and returns the authoritative version of it.
    ///
    /// Captures come back as [`Action::Jump`] built from the jump search, with
    /// every jumped square filled in. Simple moves come back as [`Action::Step`].
    pub fn check(&self, action: &Action) -> Result<Action, IllegalMoveReason> {
        self.check_as(action, self.turn())
    }

    /// Like [`CheckersBoard::check`] but with `side` treated as the side to move.
    pub(crate) fn check_as(&self, action: &Action, side: Color) -> Result<Action, IllegalMoveReason> {
        if action.steps().is_empty() {
            return Err(IllegalMoveReason::UnmatchedPath);
        }
        let from = action.from();
        let to = action.to();

        let piece = match self.square(from) {
            Square::Occupied(piece) => piece,
            Square::Empty => return Err(IllegalMoveReason::NoPiece),
        };
        if piece.color != side {
            return Err(IllegalMoveReason::WrongTurn);
        }
        if to != from && !self.is_empty(to) {
            return Err(IllegalMoveReason::OccupiedTarget);
        }

        let tree = self.jump_search_with(from, piece.color, piece.capabilities());
        if self.rules().require_all_jumps && tree.longest_chain() > action.step_count() {
            return Err(IllegalMoveReason::ShorterThanLongest);
        }

        let step = match action {
            Action::Jump(_) => {
                return tree
                    .find_path(action.steps())
                    .map(|id| Action::Jump(tree.chain(id)))
                    .ok_or(IllegalMoveReason::UnmatchedPath);
            }
            Action::Step(step) => step,
        };

        if let Some(chain) = Self::chain_to_target(&tree, step)? {
            return Ok(Action::Jump(chain));
        }

        let d_row = to.row() as i8 - from.row() as i8;
        let d_col = to.col() as i8 - from.col() as i8;
        if d_row.abs() != 1 || d_col.abs() != 1 {
            return Err(IllegalMoveReason::IllegalGeometry);
        }

        let capabilities = piece.capabilities();
        if (d_row < 0 && !capabilities.toward_row_0) || (d_row > 0 && !capabilities.toward_row_7) {
            return Err(IllegalMoveReason::BackwardMan);
        }

        if self.rules().require_jumps && self.has_capture(side) {
            return Err(IllegalMoveReason::MissedCapture);
        }

        Ok(Action::Step(Move::new(from, to)))
    }

    /// The capture chain a from/to step stands for, if any.
    ///
    /// A direct jump to the target wins. Otherwise exactly one chain may end
    /// on the target; several are ambiguous.
    fn chain_to_target(tree: &JumpTree, step: &Move) -> Result<Option<MultiJump>, IllegalMoveReason> {
        let candidates = tree.ending_at(step.from, step.to);
        match candidates.as_slice() {
            [] => Ok(None),
            [only] => Ok(Some(tree.chain(*only))),
            [nearest, ..] => {
                let chain = tree.chain(*nearest);
                if chain.len() == 1 && chain.steps[0].same_path(step) {
                    Ok(Some(chain))
                } else {
                    Err(IllegalMoveReason::AmbiguousPath)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::layout::INITIAL_LAYOUT;
    use super::super::{Field, Rules};
    use super::*;

    fn field(name: &str) -> Field {
        Field::from_name(name).unwrap()
    }

    fn reason(board: &CheckersBoard, notation: &str) -> Option<IllegalMoveReason> {
        board.check(&Action::from_notation(notation).unwrap()).err()
    }

    #[test]
    fn test_simple_moves() {
        let board = CheckersBoard::from_layout(INITIAL_LAYOUT).unwrap();
        assert!(board.validate(&Action::from_notation("C3D4").unwrap()));
        assert!(board.validate(&Action::from_notation("C3B4").unwrap()));
        assert_eq!(reason(&board, "C3C4"), Some(IllegalMoveReason::IllegalGeometry));
        assert_eq!(reason(&board, "C3E5"), Some(IllegalMoveReason::IllegalGeometry));
        assert_eq!(reason(&board, "B2C3"), Some(IllegalMoveReason::OccupiedTarget));
        assert_eq!(reason(&board, "B6C5"), Some(IllegalMoveReason::WrongTurn));
        assert_eq!(reason(&board, "E5D4"), Some(IllegalMoveReason::NoPiece));
    }

    #[test]
    fn test_sideways_move_is_rejected() {
        let board = CheckersBoard::from_layout("8/8/8/8/8/--p-----/8/8").unwrap();
        assert_eq!(reason(&board, "C3D3"), Some(IllegalMoveReason::IllegalGeometry));
    }

    #[test]
    fn test_man_cannot_move_backwards() {
        let board = CheckersBoard::from_layout("8/8/8/8/---p----/8/8/-P------").unwrap();
        assert_eq!(reason(&board, "D4C3"), Some(IllegalMoveReason::BackwardMan));
        assert!(board.validate(&Action::from_notation("D4E5").unwrap()));

        let board = CheckersBoard::from_layout("8/8/8/8/---P----/8/8/-p------")
            .unwrap()
            .with_turn(Color::Black);
        assert_eq!(reason(&board, "D4E5"), Some(IllegalMoveReason::BackwardMan));
        assert!(board.validate(&Action::from_notation("D4C3").unwrap()));
    }

    #[test]
    fn test_king_moves_backwards() {
        let board = CheckersBoard::from_layout("8/8/8/8/---k----/8/8/-P------").unwrap();
        assert!(board.validate(&Action::from_notation("D4C3").unwrap()));
        assert!(board.validate(&Action::from_notation("D4E5").unwrap()));
    }

    #[test]
    fn test_mandatory_capture() {
        // Red can take D4 from C3, so moving the man on G3 is not allowed.
        let board = CheckersBoard::from_layout("8/8/8/8/---P----/--p---p-/8/8").unwrap();
        assert_eq!(reason(&board, "G3H4"), Some(IllegalMoveReason::MissedCapture));
        assert_eq!(reason(&board, "C3B4"), Some(IllegalMoveReason::MissedCapture));

        let relaxed = board.clone().with_rules(Rules {
            require_jumps: false,
            require_all_jumps: true,
        });
        assert!(relaxed.validate(&Action::from_notation("G3H4").unwrap()));
    }

    #[test]
    fn test_capture_resolves_to_jump_chain() {
        let board = CheckersBoard::from_layout("8/8/8/8/---P----/--p-----/8/8").unwrap();
        let resolved = board.check(&Action::from_notation("C3E5").unwrap()).unwrap();
        let Action::Jump(jump) = resolved else {
            panic!("a capture resolves to a jump chain");
        };
        assert_eq!(jump.len(), 1);
        assert_eq!(jump.steps[0].captures, vec![field("D4")]);
    }

    #[test]
    fn test_longest_chain_required() {
        // From C1 the only full chain is C1E3G5.
        let board = CheckersBoard::from_layout("8/8/8/8/-----P--/8/---P----/--p-----").unwrap();
        assert_eq!(reason(&board, "C1E3"), Some(IllegalMoveReason::ShorterThanLongest));
        assert_eq!(reason(&board, "C1B2"), Some(IllegalMoveReason::ShorterThanLongest));
        let resolved = board.check(&Action::from_notation("C1E3G5").unwrap()).unwrap();
        assert_eq!(resolved.as_notation(), "C1E3G5");
        assert_eq!(resolved.captured().collect::<Vec<_>>(), vec![field("D2"), field("F4")]);
        // Naming only the destination is a single step, shorter than the chain.
        assert_eq!(reason(&board, "C1G5"), Some(IllegalMoveReason::ShorterThanLongest));

        let partial = board.clone().with_rules(Rules {
            require_jumps: true,
            require_all_jumps: false,
        });
        assert!(partial.validate(&Action::from_notation("C1E3").unwrap()));
        let resolved = partial.check(&Action::from_notation("C1G5").unwrap()).unwrap();
        assert_eq!(resolved.as_notation(), "C1E3G5");
    }

    #[test]
    fn test_unmatched_path() {
        let board = CheckersBoard::from_layout("8/8/8/8/-----P--/8/---P----/--p-----").unwrap();
        assert_eq!(reason(&board, "C1E3C5"), Some(IllegalMoveReason::UnmatchedPath));
        assert_eq!(reason(&board, "C1A3C5"), Some(IllegalMoveReason::UnmatchedPath));
    }

    #[test]
    fn test_ambiguous_destination() {
        // The king on D2 can reach D6 going round either side of D4.
        let board = CheckersBoard::from_layout("8/8/8/--P-P---/8/--P-P---/---k----/8").unwrap();
        let partial = board.with_rules(Rules {
            require_jumps: true,
            require_all_jumps: false,
        });
        assert_eq!(reason(&partial, "D2D6"), Some(IllegalMoveReason::AmbiguousPath));
        assert!(partial.validate(&Action::from_notation("D2B4D6").unwrap()));
        assert!(partial.validate(&Action::from_notation("D2F4D6").unwrap()));
    }

    #[test]
    fn test_empty_jump_is_rejected() {
        let board = CheckersBoard::from_layout(INITIAL_LAYOUT).unwrap();
        let empty = Action::Jump(MultiJump { steps: vec![] });
        assert_eq!(board.check(&empty), Err(IllegalMoveReason::UnmatchedPath));
        assert!(!board.validate(&empty));
    }

    #[test]
    fn test_check_does_not_mutate() {
        let board = CheckersBoard::from_layout("8/8/8/--P-P---/8/--P-P---/---k----/8").unwrap();
        let before = board.clone();
        for notation in ["D2D6", "D2F4D6B4D2", "D2C1", "D2B4"] {
            let _ = board.check(&Action::from_notation(notation).unwrap());
        }
        assert_eq!(board, before);
    }
}
