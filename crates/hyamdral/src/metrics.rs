//! Display-only statistics derived from real record counts by fixed
//! formulas. None of these numbers are measured or persisted anywhere;
//! they exist so the dashboard has plausible figures until a real
//! analytics backend lands, and every consumer goes through
//! [`EstimatedMetrics`] so that substitution will not touch view code.

use rand::Rng;

/// `products × 45 + 1200`
pub fn total_visits(total_products: usize) -> i64 {
    total_products as i64 * 45 + 1200
}

/// `products × 12 + 540`
pub fn total_clicks(total_products: usize) -> i64 {
    total_products as i64 * 12 + 540
}

/// Per-item view/click estimates derived from a sold count.
pub trait EstimatedMetrics {
    fn views(&self, sold_count: i64) -> i64;
    fn clicks(&self, sold_count: i64) -> i64;
}

/// Production estimator: `sold × 15 + random(0..500)` views and
/// `sold × 3 + random(0..100)` clicks. The random component makes the
/// per-item figures non-deterministic — two renders of the same data show
/// different numbers, and they are not reproducible afterwards.
#[derive(Debug, Default, Clone, Copy)]
pub struct SyntheticEstimator;

impl EstimatedMetrics for SyntheticEstimator {
    fn views(&self, sold_count: i64) -> i64 {
        sold_count * 15 + rand::thread_rng().gen_range(0..500)
    }

    fn clicks(&self, sold_count: i64) -> i64 {
        sold_count * 3 + rand::thread_rng().gen_range(0..100)
    }
}

/// Deterministic estimator with fixed offsets instead of random noise.
/// For tests and reproducible snapshots.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixedEstimator {
    pub views_offset: i64,
    pub clicks_offset: i64,
}

impl EstimatedMetrics for FixedEstimator {
    fn views(&self, sold_count: i64) -> i64 {
        sold_count * 15 + self.views_offset
    }

    fn clicks(&self, sold_count: i64) -> i64 {
        sold_count * 3 + self.clicks_offset
    }
}
