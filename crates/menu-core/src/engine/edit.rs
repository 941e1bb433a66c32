//! Field edits and move directions accepted by the engine.
//!
//! One variant per updatable field, carrying the new value.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum MenuEdit {
    Name(String),
    Description(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum CategoryEdit {
    Name(String),
    Description(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum ItemEdit {
    Name(String),
    Description(String),
    Price(String),
    Image(Option<String>),
}

/// Single-step move relative to the display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// Neighbour index for an element at `index` in a sequence of `len`,
    /// or `None` at the boundary
    pub fn neighbour(self, index: usize, len: usize) -> Option<usize> {
        match self {
            Direction::Up => index.checked_sub(1),
            Direction::Down => (index + 1 < len).then_some(index + 1),
        }
    }
}
