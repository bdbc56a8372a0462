use crate::{build, draw, full_shuffle, CardId, DrawError, DrawUnit, Orientation, Shuffler};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpreadError {
    #[error("spread {0:?} has no positions")]
    NoPositions(String),
    #[error("spread {spread:?} repeats position number {number}")]
    DuplicatePosition { spread: String, number: u32 },
    #[error("spread needs {expected} cards, got {actual}")]
    CardCount { expected: usize, actual: usize },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DealError {
    #[error("spread error: {0}")]
    Spread(#[from] SpreadError),
    #[error("draw error: {0}")]
    Draw(#[from] DrawError),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SpreadPosition {
    pub number: u32,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub thematic_note: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Spread {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub positions: Vec<SpreadPosition>,
}

/// A drawn card laid on one position of a spread.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Placement<Id = CardId> {
    pub position: SpreadPosition,
    pub card_id: Id,
    pub orientation: Orientation,
}

impl Spread {
    pub fn num_cards(&self) -> usize {
        self.positions.len()
    }

    /// Positions in the order cards are laid down.
    pub fn ordered_positions(&self) -> Vec<&SpreadPosition> {
        let mut positions: Vec<&SpreadPosition> = self.positions.iter().collect();
        positions.sort_by_key(|position| position.number);
        positions
    }

    pub fn validate(&self) -> Result<(), SpreadError> {
        if self.positions.is_empty() {
            return Err(SpreadError::NoPositions(self.name.clone()));
        }
        let mut seen = HashSet::new();
        for position in &self.positions {
            if !seen.insert(position.number) {
                return Err(SpreadError::DuplicatePosition {
                    spread: self.name.clone(),
                    number: position.number,
                });
            }
        }
        Ok(())
    }

    /// Maps the first drawn unit to the lowest-numbered position, and so on.
    pub fn place<Id: Clone>(
        &self,
        drawn: &[DrawUnit<Id>],
    ) -> Result<Vec<Placement<Id>>, SpreadError> {
        if drawn.len() != self.num_cards() {
            return Err(SpreadError::CardCount {
                expected: self.num_cards(),
                actual: drawn.len(),
            });
        }
        Ok(self
            .ordered_positions()
            .into_iter()
            .zip(drawn)
            .map(|(position, unit)| Placement {
                position: position.clone(),
                card_id: unit.card_id.clone(),
                orientation: unit.orientation(),
            })
            .collect())
    }
}

/// Shuffles a fresh deck and lays one card on each position of `spread`.
///
/// The spread and deck size are checked before any shuffling happens.
pub fn deal<Id, I, S>(
    spread: &Spread,
    ids: I,
    shuffler: &mut S,
) -> Result<Vec<Placement<Id>>, DealError>
where
    Id: Clone,
    I: IntoIterator<Item = Id>,
    S: Shuffler,
{
    spread.validate()?;
    let deck = build(ids);
    if deck.len() < spread.num_cards() {
        return Err(DrawError::InsufficientCards {
            requested: spread.num_cards(),
            available: deck.len(),
        }
        .into());
    }
    let shuffled = full_shuffle(shuffler, &deck);
    let drawn = draw(&shuffled, spread.num_cards())?;
    log::debug!(
        "dealt {} of {} cards into {:?}",
        drawn.len(),
        deck.len(),
        spread.name
    );
    Ok(spread.place(&drawn)?)
}
