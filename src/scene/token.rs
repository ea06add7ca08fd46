use crate::foundation::core::{Point, Rgba8};

/// One of the two categories partitioning the tokens.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
pub enum Group {
    /// Every fourth token, starting at index 0.
    A,
    /// All remaining tokens.
    B,
}

impl Group {
    /// Both groups in band order.
    pub const ALL: [Group; 2] = [Group::A, Group::B];

    /// Group of the token at `index`.
    pub fn for_index(index: usize) -> Self {
        if index.is_multiple_of(4) { Self::A } else { Self::B }
    }

    /// Band position of the group in the moved layout (A on top).
    pub fn ordinal(self) -> usize {
        match self {
            Self::A => 0,
            Self::B => 1,
        }
    }
}

/// One animated circle.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Token {
    /// Stable identity, dense over `0..n`; doubles as the render key.
    pub index: usize,
    /// Visual radius.
    pub radius: f64,
    /// Category, fixed by `index`.
    pub group: Group,
    /// Fill color in this layout.
    pub color: Rgba8,
    /// Circle center in this layout.
    pub position: Point,
}
