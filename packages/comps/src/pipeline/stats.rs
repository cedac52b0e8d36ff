//! Price statistics with linear-interpolation quantiles.

use crate::types::listing::ListingRecord;
use crate::types::stats::SalesStatistics;

/// Quantile `q` (clamped to `[0, 1]`) of `values`, interpolating linearly
/// between adjacent order statistics. `None` for an empty slice.
pub fn quantile(values: &[f64], q: f64) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let pos = (sorted.len() - 1) as f64 * q.clamp(0.0, 1.0);
    let base = pos.floor() as usize;
    let rest = pos - base as f64;

    match sorted.get(base + 1) {
        Some(next) => Some(sorted[base] + rest * (next - sorted[base])),
        None => Some(sorted[base]),
    }
}

pub fn summarize_prices(prices: &[f64]) -> SalesStatistics {
    SalesStatistics {
        count: prices.len(),
        p25: quantile(prices, 0.25),
        median: quantile(prices, 0.5),
        p75: quantile(prices, 0.75),
    }
}

pub fn compute_statistics(listings: &[ListingRecord]) -> SalesStatistics {
    let prices: Vec<f64> = listings.iter().map(|l| l.price).collect();
    summarize_prices(&prices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_interpolated_quartiles() {
        let stats = summarize_prices(&[10.0, 20.0, 30.0, 40.0]);
        assert_eq!(stats.count, 4);
        assert_eq!(stats.p25, Some(17.5));
        assert_eq!(stats.median, Some(25.0));
        assert_eq!(stats.p75, Some(32.5));
    }

    #[test]
    fn test_single_value() {
        let stats = summarize_prices(&[42.0]);
        assert_eq!(stats.p25, Some(42.0));
        assert_eq!(stats.median, Some(42.0));
        assert_eq!(stats.p75, Some(42.0));
    }

    #[test]
    fn test_empty_means_no_data() {
        let stats = summarize_prices(&[]);
        assert_eq!(stats, SalesStatistics::empty());
        assert!(stats.median.is_none());
    }

    #[test]
    fn test_unsorted_input() {
        assert_eq!(quantile(&[5.0, 1.0, 3.0], 0.5), Some(3.0));
    }

    proptest! {
        #[test]
        fn prop_ends_are_min_and_max(values in prop::collection::vec(0.0f64..10_000.0, 1..50)) {
            let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
            let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
            prop_assert_eq!(quantile(&values, 0.0), Some(min));
            prop_assert_eq!(quantile(&values, 1.0), Some(max));
        }

        #[test]
        fn prop_order_does_not_matter(values in prop::collection::vec(0.0f64..10_000.0, 1..50), q in 0.0f64..=1.0) {
            let mut reversed = values.clone();
            reversed.reverse();
            prop_assert_eq!(quantile(&values, q), quantile(&reversed, q));
        }

        #[test]
        fn prop_within_range(values in prop::collection::vec(0.0f64..10_000.0, 1..50), q in 0.0f64..=1.0) {
            let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
            let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
            let v = quantile(&values, q).unwrap();
            prop_assert!(v >= min - 1e-9 && v <= max + 1e-9);
        }
    }
}
