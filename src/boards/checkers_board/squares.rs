use lazy_static::lazy_static;
use std::collections::HashMap;

use super::error::CheckersError;
use super::model::Field;

const FILES: &[u8; 8] = b"ABCDEFGH";

/// Index to coordinate mapping, built once and only read afterwards.
pub struct SquareTable {
    names: [String; 64],
    by_name: HashMap<String, Field>,
}

impl SquareTable {
    fn new() -> Self {
        let names: [String; 64] = std::array::from_fn(|index| {
            let row = index / 8;
            let col = index % 8;
            format!("{}{}", FILES[col] as char, 8 - row)
        });
        let by_name = Field::all().map(|field| (names[field.index()].clone(), field)).collect();
        Self { names, by_name }
    }

    pub fn name(&self, index: usize) -> Result<&str, CheckersError> {
        self.names
            .get(index)
            .map(String::as_str)
            .ok_or_else(|| CheckersError::Lookup(index.to_string()))
    }

    pub fn name_of(&self, field: Field) -> &str {
        &self.names[field.index()]
    }

    /// Case-insensitive, so "e5" and "E5" are the same square.
    pub fn lookup(&self, name: &str) -> Result<Field, CheckersError> {
        self.by_name
            .get(&name.to_ascii_uppercase())
            .copied()
            .ok_or_else(|| CheckersError::Lookup(name.to_string()))
    }
}

lazy_static! {
    pub static ref SQUARE_TABLE: SquareTable = SquareTable::new();
}
