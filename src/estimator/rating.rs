use super::factors::{AVERAGE_BELOW, EXCELLENT_BELOW, GOOD_BELOW};
use crate::model::Rating;

/// Bucket total emissions into a rating.
///
/// Thresholds are exclusive upper bounds:
/// - [0, 5000) → Excellent
/// - [5000, 10000) → Good
/// - [10000, 15000) → Average
/// - [15000, ∞) → Poor
pub fn rating_for_total(total: f64) -> Rating {
    if total < EXCELLENT_BELOW {
        Rating::Excellent
    } else if total < GOOD_BELOW {
        Rating::Good
    } else if total < AVERAGE_BELOW {
        Rating::Average
    } else {
        Rating::Poor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_boundaries() {
        assert_eq!(rating_for_total(0.0), Rating::Excellent);
        assert_eq!(rating_for_total(4999.99), Rating::Excellent);
        assert_eq!(rating_for_total(5000.0), Rating::Good);
        assert_eq!(rating_for_total(9999.99), Rating::Good);
        assert_eq!(rating_for_total(10_000.0), Rating::Average);
        assert_eq!(rating_for_total(14_999.99), Rating::Average);
        assert_eq!(rating_for_total(15_000.0), Rating::Poor);
        assert_eq!(rating_for_total(80_000.0), Rating::Poor);
    }
}
