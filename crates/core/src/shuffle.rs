//! Hand-shuffle passes over a sequence of draw units.
//!
//! Every pass borrows its input and returns a freshly built sequence, so
//! the caller keeps sole ownership of what it passed in. Orientation only
//! changes when an overhand packet is flipped.

use crate::{DrawUnit, RandomSource, RngState, ShuffleConfig};
use std::ops::Range;

pub const OPENING_OVERHANDS: usize = 5;
pub const RIFFLES: usize = 2;
pub const CLOSING_OVERHANDS: usize = 2;

/// Riffles and cuts leave decks shorter than this untouched.
pub const MIN_SPLIT_LEN: usize = 4;

fn to_i64(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

/// One overhand pass.
///
/// Packets come off the front of the source and are dropped on top of the
/// destination, so the first packet taken ends up at the bottom. A flipped
/// packet is reversed and every card in it turned over.
pub fn overhand<Id: Clone>(
    seq: &[DrawUnit<Id>],
    config: &ShuffleConfig,
    rng: &mut impl RandomSource,
) -> Vec<DrawUnit<Id>> {
    let mut packets: Vec<(Range<usize>, bool)> = Vec::new();
    let mut start = 0;
    while start < seq.len() {
        let size = rng
            .range_inclusive(to_i64(config.packet_min), to_i64(config.packet_max))
            .max(1);
        let end = start
            .saturating_add(usize::try_from(size).unwrap_or(usize::MAX))
            .min(seq.len());
        let flip = rng.unit() < config.flip_probability;
        packets.push((start..end, flip));
        start = end;
    }

    let mut destination = Vec::with_capacity(seq.len());
    for (range, flip) in packets.iter().rev() {
        let packet = &seq[range.clone()];
        if *flip {
            destination.extend(packet.iter().rev().map(DrawUnit::flipped));
        } else {
            destination.extend_from_slice(packet);
        }
    }
    log::trace!(
        "overhand: {} cards, {} packets, {} flipped",
        seq.len(),
        packets.len(),
        packets.iter().filter(|(_, flip)| *flip).count()
    );
    destination
}

/// One riffle pass.
///
/// Splits near the middle and interleaves, taking from each half with
/// probability proportional to how many cards it still holds.
pub fn riffle<Id: Clone>(
    seq: &[DrawUnit<Id>],
    config: &ShuffleConfig,
    rng: &mut impl RandomSource,
) -> Vec<DrawUnit<Id>> {
    let len = seq.len();
    if len < MIN_SPLIT_LEN {
        return seq.to_vec();
    }

    let variance = to_i64(config.split_variance);
    let half = to_i64(len / 2);
    let split = half
        .saturating_add(rng.range_inclusive(-variance, variance))
        .clamp(1, to_i64(len - 1)) as usize;
    let (left, right) = seq.split_at(split);

    let mut result = Vec::with_capacity(len);
    let (mut l, mut r) = (0, 0);
    while l < left.len() && r < right.len() {
        let left_remaining = left.len() - l;
        let right_remaining = right.len() - r;
        let take_left = left_remaining as f64 / (left_remaining + right_remaining) as f64;
        if rng.unit() < take_left {
            result.push(left[l].clone());
            l += 1;
        } else {
            result.push(right[r].clone());
            r += 1;
        }
    }
    result.extend_from_slice(&left[l..]);
    result.extend_from_slice(&right[r..]);
    log::trace!("riffle: {} cards split at {}", len, split);
    result
}

/// Rotates the sequence so the card at a point in the middle band comes first.
pub fn cut<Id: Clone>(
    seq: &[DrawUnit<Id>],
    config: &ShuffleConfig,
    rng: &mut impl RandomSource,
) -> Vec<DrawUnit<Id>> {
    let len = seq.len();
    if len < MIN_SPLIT_LEN {
        return seq.to_vec();
    }

    let low = (len as f64 * config.cut_low).floor() as i64;
    let high = (len as f64 * config.cut_high).floor() as i64;
    let point = rng.range_inclusive(low, high).clamp(0, to_i64(len)) as usize;

    let mut result = Vec::with_capacity(len);
    result.extend_from_slice(&seq[point..]);
    result.extend_from_slice(&seq[..point]);
    log::trace!("cut: {} cards at {}", len, point);
    result
}

/// The three single passes a full shuffle is composed of.
pub trait Shuffler {
    fn overhand<Id: Clone>(&mut self, seq: &[DrawUnit<Id>]) -> Vec<DrawUnit<Id>>;
    fn riffle<Id: Clone>(&mut self, seq: &[DrawUnit<Id>]) -> Vec<DrawUnit<Id>>;
    fn cut<Id: Clone>(&mut self, seq: &[DrawUnit<Id>]) -> Vec<DrawUnit<Id>>;
}

/// Shuffles with the physical passes above, driven by a random source.
#[derive(Debug, Clone)]
pub struct PhysicalShuffler<R = RngState> {
    config: ShuffleConfig,
    rng: R,
}

impl PhysicalShuffler<RngState> {
    pub fn from_entropy(config: ShuffleConfig) -> Self {
        Self::with_rng(config, RngState::from_entropy())
    }
}

impl<R: RandomSource> PhysicalShuffler<R> {
    pub fn with_rng(config: ShuffleConfig, rng: R) -> Self {
        Self { config, rng }
    }

    pub fn config(&self) -> &ShuffleConfig {
        &self.config
    }
}

impl<R: RandomSource> Shuffler for PhysicalShuffler<R> {
    fn overhand<Id: Clone>(&mut self, seq: &[DrawUnit<Id>]) -> Vec<DrawUnit<Id>> {
        overhand(seq, &self.config, &mut self.rng)
    }

    fn riffle<Id: Clone>(&mut self, seq: &[DrawUnit<Id>]) -> Vec<DrawUnit<Id>> {
        riffle(seq, &self.config, &mut self.rng)
    }

    fn cut<Id: Clone>(&mut self, seq: &[DrawUnit<Id>]) -> Vec<DrawUnit<Id>> {
        cut(seq, &self.config, &mut self.rng)
    }
}

/// overhand × 5, riffle × 2, cut, overhand × 2, cut.
pub fn full_shuffle<S: Shuffler, Id: Clone>(
    shuffler: &mut S,
    seq: &[DrawUnit<Id>],
) -> Vec<DrawUnit<Id>> {
    let mut deck = seq.to_vec();
    for _ in 0..OPENING_OVERHANDS {
        deck = shuffler.overhand(&deck);
    }
    for _ in 0..RIFFLES {
        deck = shuffler.riffle(&deck);
    }
    deck = shuffler.cut(&deck);
    for _ in 0..CLOSING_OVERHANDS {
        deck = shuffler.overhand(&deck);
    }
    deck = shuffler.cut(&deck);
    log::debug!(
        "full shuffle of {} cards, {} reversed",
        deck.len(),
        deck.iter().filter(|unit| unit.is_reversed).count()
    );
    deck
}
