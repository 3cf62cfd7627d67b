//! Fixed price ranges for the bar-chart histogram.
//!
//! Each bucket matches `min <= price < max`. The upper bound of one bucket is
//! the lower bound of the next minus one, so prices in `[100, 101)`,
//! `[200, 201)` and so on belong to no bucket at all. Reports rely on these
//! exact bounds; do not close the gaps.

/// One histogram interval. `max == None` means unbounded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceBucket {
    pub min: f64,
    pub max: Option<f64>,
}

/// The ten buckets in output order.
pub const PRICE_BUCKETS: [PriceBucket; 10] = [
    PriceBucket::bounded(0.0, 100.0),
    PriceBucket::bounded(101.0, 200.0),
    PriceBucket::bounded(201.0, 300.0),
    PriceBucket::bounded(301.0, 400.0),
    PriceBucket::bounded(401.0, 500.0),
    PriceBucket::bounded(501.0, 600.0),
    PriceBucket::bounded(601.0, 700.0),
    PriceBucket::bounded(701.0, 800.0),
    PriceBucket::bounded(801.0, 900.0),
    PriceBucket::unbounded(901.0),
];

impl PriceBucket {
    pub const fn bounded(min: f64, max: f64) -> Self {
        Self {
            min,
            max: Some(max),
        }
    }

    pub const fn unbounded(min: f64) -> Self {
        Self { min, max: None }
    }

    #[cfg(test)]
    fn contains(&self, price: f64) -> bool {
        price >= self.min && self.max.map_or(true, |max| price < max)
    }

    /// Display label, e.g. `"101-200"` or `"901-Infinity"`.
    pub fn label(&self) -> String {
        match self.max {
            Some(max) => format!("{}-{}", self.min, max),
            None => format!("{}-Infinity", self.min),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bucket_for(price: f64) -> Option<usize> {
        PRICE_BUCKETS.iter().position(|b| b.contains(price))
    }

    #[test]
    fn labels_match_bucket_bounds() {
        let labels: Vec<String> = PRICE_BUCKETS.iter().map(PriceBucket::label).collect();
        assert_eq!(
            labels,
            vec![
                "0-100",
                "101-200",
                "201-300",
                "301-400",
                "401-500",
                "501-600",
                "601-700",
                "701-800",
                "801-900",
                "901-Infinity",
            ]
        );
    }

    #[test]
    fn lower_bound_is_inclusive() {
        assert_eq!(bucket_for(0.0), Some(0));
        assert_eq!(bucket_for(101.0), Some(1));
        assert_eq!(bucket_for(901.0), Some(9));
    }

    #[test]
    fn upper_bound_is_exclusive() {
        assert_eq!(bucket_for(99.99), Some(0));
        assert_eq!(bucket_for(899.5), Some(8));
    }

    #[test]
    fn round_hundreds_fall_into_the_gap() {
        for price in [100.0, 200.0, 300.0, 400.0, 500.0, 600.0, 700.0, 800.0, 900.0] {
            assert_eq!(bucket_for(price), None, "{price} should match no bucket");
        }
        assert_eq!(bucket_for(100.5), None);
        assert_eq!(bucket_for(900.99), None);
    }

    #[test]
    fn last_bucket_is_unbounded() {
        assert_eq!(bucket_for(1_000_000.0), Some(9));
    }

    #[test]
    fn buckets_do_not_overlap() {
        for price in (0..2000).map(|p| p as f64 / 2.0) {
            let hits = PRICE_BUCKETS.iter().filter(|b| b.contains(price)).count();
            assert!(hits <= 1, "{price} matched {hits} buckets");
        }
    }
}
