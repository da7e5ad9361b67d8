//! 7-bag randomizer feeding the Next preview
//!
//! All 7 kinds are shuffled and dealt out before the next shuffle, so any
//! seven consecutive draws starting on a bag boundary contain each kind once.

use crate::tetromino::TetrominoType;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use std::collections::VecDeque;

const BAG_SIZE: usize = 7;

#[derive(Debug, Clone)]
pub struct Bag {
    queue: VecDeque<TetrominoType>,
    rng: StdRng,
}

impl Default for Bag {
    fn default() -> Self {
        Self::new()
    }
}

impl Bag {
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// Deterministic sequence for a given seed
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        let mut bag = Self {
            queue: VecDeque::with_capacity(BAG_SIZE * 2),
            rng,
        };
        bag.refill();
        bag.refill();
        bag
    }

    pub fn next(&mut self) -> TetrominoType {
        if self.queue.len() <= BAG_SIZE {
            self.refill();
        }
        // refill above keeps the queue non-empty
        self.queue.pop_front().unwrap_or(TetrominoType::T)
    }

    /// Upcoming kinds without consuming them, at most one full bag ahead
    pub fn preview(&self, count: usize) -> impl Iterator<Item = TetrominoType> + '_ {
        self.queue.iter().copied().take(count.min(BAG_SIZE))
    }

    fn refill(&mut self) {
        let mut new_bag = TetrominoType::all();
        new_bag.shuffle(&mut self.rng);
        tracing::trace!(?new_bag, "refilled bag");
        self.queue.extend(new_bag);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_each_bag_contains_all_pieces() {
        let mut bag = Bag::with_seed(7);
        for _ in 0..5 {
            let unique: HashSet<_> = (0..BAG_SIZE).map(|_| bag.next()).collect();
            assert_eq!(unique.len(), BAG_SIZE);
        }
    }

    #[test]
    fn test_preview_matches_draws() {
        let mut bag = Bag::with_seed(42);
        let preview: Vec<_> = bag.preview(5).collect();
        assert_eq!(preview.len(), 5);
        let drawn: Vec<_> = (0..5).map(|_| bag.next()).collect();
        assert_eq!(preview, drawn);
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = Bag::with_seed(1234);
        let mut b = Bag::with_seed(1234);
        for _ in 0..30 {
            assert_eq!(a.next(), b.next());
        }
    }
}
