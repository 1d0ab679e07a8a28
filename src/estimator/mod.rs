//! Footprint Estimator
//!
//! Maps a `LifestyleInput` to a `FootprintResult`:
//! - `emissions.rs` - per-category formulas
//! - `rating.rs` - threshold buckets on the total
//! - `tips.rs` - unbiased sampling from the advice pool
//! - `factors.rs` - the fixed constants used by all of the above
//!
//! The calculation performs no validation. Inputs are expected to be in range
//! (the wizard's form layer clamps them); out-of-range values produce
//! meaningless but finite numbers.

pub mod emissions;
pub mod factors;
pub mod rating;
pub mod tips;

pub use emissions::category_emissions;
pub use rating::rating_for_total;
pub use tips::sample_tips;

use rand::Rng;

use crate::model::{CategoryShares, FootprintResult, LifestyleInput};
use factors::UNITS_PER_TONNE;

/// Compute a footprint using the thread-local RNG for tip selection
pub fn compute(input: &LifestyleInput) -> FootprintResult {
    compute_with_rng(input, &mut rand::thread_rng())
}

/// Compute a footprint, drawing tips from `rng`.
///
/// Everything except `tips` is a deterministic function of `input`.
pub fn compute_with_rng<R: Rng + ?Sized>(input: &LifestyleInput, rng: &mut R) -> FootprintResult {
    let emissions = category_emissions(input);
    let total = emissions.total();

    let result = FootprintResult {
        total_carbon_tonnes: (total / UNITS_PER_TONNE).round() as u32,
        category_shares: CategoryShares::from_emissions(&emissions),
        rating: rating_for_total(total),
        tips: sample_tips(rng),
        emissions,
    };

    tracing::debug!(
        "Footprint computed: total={:.2} tonnes={} rating={:?}",
        total,
        result.total_carbon_tonnes,
        result.rating
    );

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_default_form_example() {
        let result = compute_with_rng(&LifestyleInput::default(), &mut StdRng::seed_from_u64(1));

        assert_relative_eq!(result.emissions.electricity, 93.75);
        assert_relative_eq!(result.emissions.transportation, 3000.0, epsilon = 1e-9);
        assert_relative_eq!(result.emissions.food, 1750.0, epsilon = 1e-9);
        assert_relative_eq!(result.emissions.goods, 1000.0);
        assert_relative_eq!(result.emissions.total(), 5843.75, epsilon = 1e-9);

        assert_eq!(result.rating, crate::model::Rating::Good);
        assert_eq!(result.total_carbon_tonnes, 6);
        assert_eq!(result.category_shares.electricity, 2);
        assert_eq!(result.category_shares.transportation, 51);
        assert_eq!(result.category_shares.food, 30);
        assert_eq!(result.category_shares.goods, 17);
    }

    #[test]
    fn test_tips_only_nondeterministic_part() {
        let input = LifestyleInput::default();
        let a = compute_with_rng(&input, &mut StdRng::seed_from_u64(3));
        let b = compute(&input);
        assert_eq!(a.emissions, b.emissions);
        assert_eq!(a.category_shares, b.category_shares);
        assert_eq!(a.rating, b.rating);
        assert_eq!(a.total_carbon_tonnes, b.total_carbon_tonnes);
    }
}
