//! @ai:module:intent SDT metrics for a single condition
//! @ai:module:layer domain
//! @ai:module:public_api MetricUnit, RATE_CLIP, UNDEFINED_RATE
//! @ai:module:stateless true

use super::normal::normal_quantile;

/// Lower clipping bound for rates; the upper bound is `1 - RATE_CLIP`.
/// Keeps the normal quantile of every rate finite.
pub const RATE_CLIP: f64 = 1e-5;

/// Rate reported when a condition has no trials of the relevant kind.
pub const UNDEFINED_RATE: f64 = 0.5;

/// @ai:intent Trial outcome counts for one experimental condition
/// @ai:invariant counts never change after construction
///
/// Counts are unsigned, so negative trial counts cannot be represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MetricUnit {
    hits: u64,
    misses: u64,
    false_alarms: u64,
    correct_rejections: u64,
}

impl MetricUnit {
    /// @ai:intent Create a unit from the four outcome counts
    /// @ai:effects pure
    pub fn new(hits: u64, misses: u64, false_alarms: u64, correct_rejections: u64) -> Self {
        Self {
            hits,
            misses,
            false_alarms,
            correct_rejections,
        }
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }

    pub fn false_alarms(&self) -> u64 {
        self.false_alarms
    }

    pub fn correct_rejections(&self) -> u64 {
        self.correct_rejections
    }

    /// Trials on which the signal was present.
    pub fn signal_trials(&self) -> u64 {
        self.hits.saturating_add(self.misses)
    }

    /// Trials on which only noise was present.
    pub fn noise_trials(&self) -> u64 {
        self.false_alarms.saturating_add(self.correct_rejections)
    }

    /// @ai:intent Proportion of signal trials answered "signal"
    /// @ai:post RATE_CLIP <= result <= 1 - RATE_CLIP
    /// @ai:effects pure
    pub fn hit_rate(&self) -> f64 {
        bounded_rate(self.hits, self.misses)
    }

    /// @ai:intent Proportion of noise trials answered "signal"
    /// @ai:post RATE_CLIP <= result <= 1 - RATE_CLIP
    /// @ai:effects pure
    pub fn false_alarm_rate(&self) -> f64 {
        bounded_rate(self.false_alarms, self.correct_rejections)
    }

    /// @ai:intent Discriminability index d'
    /// @ai:effects pure
    pub fn d_prime(&self) -> f64 {
        normal_quantile(self.hit_rate()) - normal_quantile(self.false_alarm_rate())
    }

    /// @ai:intent Decision criterion c; zero means unbiased responding
    /// @ai:effects pure
    pub fn criterion(&self) -> f64 {
        -0.5 * (normal_quantile(self.hit_rate()) + normal_quantile(self.false_alarm_rate()))
    }
}

/// @ai:intent Ratio of positive responses clipped away from 0 and 1
/// @ai:effects pure
fn bounded_rate(positive: u64, negative: u64) -> f64 {
    let total = positive as f64 + negative as f64;

    if total == 0.0 {
        return UNDEFINED_RATE;
    }

    (positive as f64 / total).clamp(RATE_CLIP, 1.0 - RATE_CLIP)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_are_kept() {
        let unit = MetricUnit::new(10, 5, 8, 12);
        assert_eq!(unit.hits(), 10);
        assert_eq!(unit.misses(), 5);
        assert_eq!(unit.false_alarms(), 8);
        assert_eq!(unit.correct_rejections(), 12);
        assert_eq!(unit.signal_trials(), 15);
        assert_eq!(unit.noise_trials(), 20);
    }

    #[test]
    fn test_hit_rate() {
        let unit = MetricUnit::new(10, 5, 8, 12);
        assert_eq!(unit.hit_rate(), 10.0 / 15.0);
    }

    #[test]
    fn test_false_alarm_rate() {
        let unit = MetricUnit::new(10, 5, 8, 12);
        assert_eq!(unit.false_alarm_rate(), 8.0 / 20.0);
    }

    #[test]
    fn test_empty_denominators_default_to_half() {
        assert_eq!(MetricUnit::new(0, 0, 3, 7).hit_rate(), UNDEFINED_RATE);
        assert_eq!(MetricUnit::new(3, 7, 0, 0).false_alarm_rate(), UNDEFINED_RATE);
    }

    #[test]
    fn test_rates_are_clipped() {
        let perfect = MetricUnit::new(50, 0, 0, 50);
        assert_eq!(perfect.hit_rate(), 1.0 - RATE_CLIP);
        assert_eq!(perfect.false_alarm_rate(), RATE_CLIP);

        let inverted = MetricUnit::new(0, 50, 50, 0);
        assert_eq!(inverted.hit_rate(), RATE_CLIP);
        assert_eq!(inverted.false_alarm_rate(), 1.0 - RATE_CLIP);
    }

    #[test]
    fn test_rates_stay_in_bounds() {
        let counts = [0u64, 1, 2, 7, 100, 1_000_000];
        for &h in &counts {
            for &m in &counts {
                for &fa in &counts {
                    let unit = MetricUnit::new(h, m, fa, 3);
                    for rate in [unit.hit_rate(), unit.false_alarm_rate()] {
                        assert!((RATE_CLIP..=1.0 - RATE_CLIP).contains(&rate));
                    }
                }
            }
        }
    }

    #[test]
    fn test_d_prime_matches_quantile_difference() {
        let unit = MetricUnit::new(15, 5, 10, 10);
        let expected = normal_quantile(unit.hit_rate()) - normal_quantile(unit.false_alarm_rate());
        assert!((unit.d_prime() - expected).abs() < 1e-6);
        // hit 0.75, fa 0.5
        assert!((unit.d_prime() - 0.674_489_750_196_081_7).abs() < 1e-6);
    }

    #[test]
    fn test_criterion_matches_quantile_sum() {
        let unit = MetricUnit::new(10, 10, 5, 15);
        let expected =
            -0.5 * (normal_quantile(unit.hit_rate()) + normal_quantile(unit.false_alarm_rate()));
        assert!((unit.criterion() - expected).abs() < 1e-6);
        // hit 0.5, fa 0.25
        assert!((unit.criterion() - 0.337_244_875_098_040_8).abs() < 1e-6);
    }

    #[test]
    fn test_symmetric_performance_is_unbiased() {
        let unit = MetricUnit::new(75, 25, 25, 75);
        assert!(unit.criterion().abs() < 1e-9);
        assert!((unit.d_prime() - 2.0 * 0.674_489_750_196_081_7).abs() < 1e-6);
    }

    #[test]
    fn test_chance_performance_has_zero_d_prime() {
        let unit = MetricUnit::new(30, 30, 30, 30);
        assert!(unit.d_prime().abs() < 1e-12);
    }

    #[test]
    fn test_degenerate_unit_is_finite() {
        let unit = MetricUnit::new(0, 0, 0, 0);
        assert!(unit.d_prime().abs() < 1e-12);
        assert!(unit.criterion().abs() < 1e-12);

        let extreme = MetricUnit::new(100, 0, 0, 100);
        assert!(extreme.d_prime().is_finite());
        assert!(extreme.d_prime() > 8.0);
    }

    #[test]
    fn test_unit_is_shareable() {
        fn assert_send_sync<T: Send + Sync + Copy>() {}
        assert_send_sync::<MetricUnit>();
    }
}
