use std::str::FromStr;

use super::error::CheckersError;
use super::{Action, Field, Move, MultiJump};

/// Decodes concatenated coordinates, e.g. "E5D4" or the jump run "E5C3A1".
///
/// Two coordinates give a single step; each further coordinate adds a step
/// starting where the previous one ended.
pub fn decode(notation: &str) -> Result<Action, CheckersError> {
    let notation = notation.trim();
    if !notation.is_ascii() || notation.len() < 4 || notation.len() % 2 != 0 {
        return Err(CheckersError::Format(notation.to_string()));
    }

    let fields = (0..notation.len())
        .step_by(2)
        .map(|i| {
            Field::from_name(&notation[i..i + 2])
                .map_err(|_| CheckersError::Format(format!("{} (unknown square {})", notation, &notation[i..i + 2])))
        })
        .collect::<Result<Vec<_>, _>>()?;

    if fields.len() == 2 {
        return Ok(Action::Step(Move::new(fields[0], fields[1])));
    }

    let steps = fields.windows(2).map(|pair| Move::new(pair[0], pair[1])).collect();
    Ok(Action::Jump(MultiJump::new(steps)))
}

impl Action {
    pub fn from_notation(notation: &str) -> Result<Self, CheckersError> {
        decode(notation)
    }
}

impl FromStr for Action {
    type Err = CheckersError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode(s)
    }
}
