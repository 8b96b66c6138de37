#![forbid(unsafe_code)]

//! Swipe records and the default direction token.
//!
//! The state manager treats directions as opaque: it stores whatever token the
//! gesture layer hands it and gives the same value back on undo. Any
//! `Clone + PartialEq + Debug` type works. [`SwipeDirection`] is provided for
//! the common four-way case and is the manager's default type parameter.

use std::fmt;

/// One of the four cardinal directions a card can leave the stack in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SwipeDirection {
    Left,
    Right,
    Up,
    Down,
}

impl SwipeDirection {
    /// All directions, in declaration order.
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::Left, Self::Right, Self::Up, Self::Down]
    }

    #[must_use]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }

    #[must_use]
    pub const fn is_vertical(self) -> bool {
        matches!(self, Self::Up | Self::Down)
    }

    /// The direction a card travels back along when a swipe is undone.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Up => "up",
            Self::Down => "down",
        }
    }
}

impl fmt::Display for SwipeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resolved card: the data-source index that left the stack and how it left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Swipe<D = SwipeDirection> {
    /// Data-source index of the swiped card.
    pub index: usize,
    /// Direction token supplied by the caller at swipe time.
    pub direction: D,
}

impl<D> Swipe<D> {
    #[must_use]
    pub const fn new(index: usize, direction: D) -> Self {
        Self { index, direction }
    }
}
