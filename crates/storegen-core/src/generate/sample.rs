//! Shared sampling primitives for the generators.

use chrono::{Duration, NaiveDateTime};
use rand::Rng;

use crate::model::round2;

/// Pick a random timestamp between `start` and `end`, uniform over the
/// integer-second offset (both endpoints included).
pub fn date_between(rng: &mut impl Rng, start: NaiveDateTime, end: NaiveDateTime) -> NaiveDateTime {
    let span = (end - start).num_seconds();
    let offset = rng.random_range(0..=span);
    start + Duration::seconds(offset)
}

/// Weighted random selection over a static choice list.
///
/// Cumulative-distribution walk, O(n) per draw. The weight tables in
/// `catalog` sum to 1.0 but the total is recomputed anyway so a tweaked
/// table keeps its relative proportions.
pub fn weighted_pick<'a>(choices: &[(&'a str, f64)], rng: &mut impl Rng) -> &'a str {
    let total: f64 = choices.iter().map(|(_, w)| w).sum();
    let roll: f64 = rng.random::<f64>() * total;
    let mut cumulative = 0.0;
    for (value, weight) in choices {
        cumulative += weight;
        if roll < cumulative {
            return value;
        }
    }
    // Floating-point edge case — return the last value
    choices.last().map(|(v, _)| *v).unwrap_or("")
}

/// Uniform price in 5.00..=500.00, rounded to 2 decimals. Used for product
/// list prices and (independently re-sampled) order line unit prices.
pub fn uniform_price(rng: &mut impl Rng) -> f64 {
    round2(rng.random_range(5.0_f64..=500.0_f64))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_date_between_stays_in_range() {
        let (start, end) = catalog::date_window();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1_000 {
            let ts = date_between(&mut rng, start, end);
            assert!(ts >= start && ts <= end);
        }
    }

    #[test]
    fn test_date_between_is_deterministic() {
        let (start, end) = catalog::date_window();
        let mut rng1 = StdRng::seed_from_u64(7);
        let mut rng2 = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            assert_eq!(
                date_between(&mut rng1, start, end),
                date_between(&mut rng2, start, end)
            );
        }
    }

    #[test]
    fn test_date_between_degenerate_range() {
        let (start, _) = catalog::date_window();
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(date_between(&mut rng, start, start), start);
    }

    #[test]
    fn test_weighted_pick_respects_weights() {
        // 60% "delivered" over 10k draws should clearly dominate
        let mut rng = StdRng::seed_from_u64(42);
        let mut delivered = 0usize;
        for _ in 0..10_000 {
            if weighted_pick(&catalog::ORDER_STATUSES, &mut rng) == "delivered" {
                delivered += 1;
            }
        }
        assert!(
            delivered > 5_000 && delivered < 7_000,
            "expected ~6000 delivered, got {}",
            delivered
        );
    }

    #[test]
    fn test_weighted_pick_only_listed_values() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..1_000 {
            let status = weighted_pick(&catalog::ORDER_STATUSES, &mut rng);
            assert!(catalog::ORDER_STATUSES.iter().any(|(s, _)| *s == status));
        }
    }

    #[test]
    fn test_uniform_price_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1_000 {
            let price = uniform_price(&mut rng);
            assert!((5.0..=500.0).contains(&price));
            // already rounded to 2 decimals
            assert_eq!(price, round2(price));
        }
    }
}
