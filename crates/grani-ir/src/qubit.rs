//! Grid qubit coordinates.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A qubit addressed by its position on a rectangular device grid.
///
/// The coordinate is an opaque addressing label for gate targets; it carries
/// no behaviour of its own.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct GridQubit {
    /// Row on the device grid.
    pub row: i32,
    /// Column on the device grid.
    pub col: i32,
}

impl GridQubit {
    /// Create a qubit at the given grid position.
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for GridQubit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for GridQubit {
    fn from((row, col): (i32, i32)) -> Self {
        GridQubit { row, col }
    }
}
