use crate::DrawUnit;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DrawError {
    #[error("cannot draw {requested} cards from a deck of {available}")]
    InsufficientCards { requested: usize, available: usize },
}

/// Turns catalog ids into upright draw units, keeping their order.
///
/// An absent deck is just an empty iterator and builds an empty sequence.
pub fn build<Id, I>(ids: I) -> Vec<DrawUnit<Id>>
where
    I: IntoIterator<Item = Id>,
{
    ids.into_iter().map(DrawUnit::upright).collect()
}

/// Takes the first `count` units off the top of a shuffled sequence.
///
/// Asking for more cards than the sequence holds is a caller bug and is
/// reported rather than truncated.
pub fn draw<Id: Clone>(seq: &[DrawUnit<Id>], count: usize) -> Result<Vec<DrawUnit<Id>>, DrawError> {
    if count > seq.len() {
        return Err(DrawError::InsufficientCards {
            requested: count,
            available: seq.len(),
        });
    }
    Ok(seq[..count].to_vec())
}
