use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a card in an external catalog. The engine never looks inside it.
pub type CardId = u32;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    Upright,
    Reversed,
}

impl Orientation {
    pub fn from_reversed(is_reversed: bool) -> Self {
        if is_reversed {
            Self::Reversed
        } else {
            Self::Upright
        }
    }

    pub fn is_reversed(self) -> bool {
        matches!(self, Self::Reversed)
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Upright => f.write_str("upright"),
            Self::Reversed => f.write_str("reversed"),
        }
    }
}

/// One card as it travels through a shuffle: an id plus its orientation.
///
/// Units are values. Passes build new units instead of editing the ones
/// they were given, so a caller's sequence is never observed changing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct DrawUnit<Id = CardId> {
    pub card_id: Id,
    #[serde(default)]
    pub is_reversed: bool,
}

impl<Id> DrawUnit<Id> {
    pub fn upright(card_id: Id) -> Self {
        Self {
            card_id,
            is_reversed: false,
        }
    }

    pub fn orientation(&self) -> Orientation {
        Orientation::from_reversed(self.is_reversed)
    }
}

impl<Id: Clone> DrawUnit<Id> {
    /// The same card turned over.
    pub fn flipped(&self) -> Self {
        Self {
            card_id: self.card_id.clone(),
            is_reversed: !self.is_reversed,
        }
    }
}
