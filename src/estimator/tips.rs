//! Tip Selection
//!
//! Draws `TIP_COUNT` tips from the fixed pool without replacement. The pool
//! is shuffled with `SliceRandom::shuffle` (Fisher-Yates), so every ordered
//! selection is equally likely.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::model::{Tip, TIP_COUNT};

pub fn sample_tips<R: Rng + ?Sized>(rng: &mut R) -> [Tip; TIP_COUNT] {
    let mut pool = Tip::POOL;
    pool.shuffle(rng);
    [pool[0], pool[1], pool[2]]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::{HashMap, HashSet};

    #[test]
    fn test_tips_distinct_and_from_pool() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let tips = sample_tips(&mut rng);
            let unique: HashSet<Tip> = tips.iter().copied().collect();
            assert_eq!(unique.len(), TIP_COUNT);
            assert!(tips.iter().all(|t| Tip::POOL.contains(t)));
        }
    }

    #[test]
    fn test_same_seed_same_tips() {
        let a = sample_tips(&mut StdRng::seed_from_u64(42));
        let b = sample_tips(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_first_position_roughly_uniform() {
        // 10k draws: each tip should lead about 2000 times
        let mut rng = StdRng::seed_from_u64(2024);
        let mut leads: HashMap<Tip, usize> = HashMap::new();
        for _ in 0..10_000 {
            *leads.entry(sample_tips(&mut rng)[0]).or_default() += 1;
        }

        assert_eq!(leads.len(), Tip::POOL.len());
        for (tip, count) in leads {
            assert!(
                (1700..=2300).contains(&count),
                "{:?} led {} times",
                tip,
                count
            );
        }
    }
}
