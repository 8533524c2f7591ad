//! @ai:module:intent Collect conditions and derive ROC geometry and AUC
//! @ai:module:layer domain
//! @ai:module:public_api CurveAggregator, trapezoidal_auc

use crate::detection::MetricUnit;
use crate::error::{Error, Result};
use crate::roc::types::{Condition, RocPoints};

/// @ai:intent Append-only collection of measured conditions
/// @ai:invariant insertion order is kept for storage; analysis always re-sorts
#[derive(Debug, Clone, Default)]
pub struct CurveAggregator {
    conditions: Vec<Condition>,
}

impl CurveAggregator {
    /// @ai:intent Create an empty aggregator
    /// @ai:effects pure
    pub fn new() -> Self {
        Self::default()
    }

    /// @ai:intent Append a condition; the label is opaque metadata
    /// @ai:effects mutates self
    pub fn add_condition(&mut self, unit: MetricUnit, label: Option<String>) {
        self.conditions.push(Condition { unit, label });
    }

    /// Stored conditions in insertion order.
    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    /// Labels in insertion order.
    pub fn labels(&self) -> impl Iterator<Item = Option<&str>> + '_ {
        self.conditions.iter().map(|c| c.label.as_deref())
    }

    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// @ai:intent ROC points ordered by false-alarm rate, ties broken by hit rate
    /// @ai:pre at least one condition is stored
    /// @ai:effects pure
    pub fn sorted_points(&self) -> Result<RocPoints> {
        if self.conditions.is_empty() {
            return Err(Error::EmptyInput);
        }

        let mut pairs: Vec<(f64, f64)> = self
            .conditions
            .iter()
            .map(|c| (c.unit.false_alarm_rate(), c.unit.hit_rate()))
            .collect();

        pairs.sort_by(|a, b| a.0.total_cmp(&b.0).then_with(|| a.1.total_cmp(&b.1)));

        Ok(RocPoints::from_sorted_pairs(pairs))
    }

    /// @ai:intent Area under the sorted ROC curve by the trapezoidal rule
    /// @ai:pre at least two conditions are stored
    /// @ai:effects pure
    pub fn compute_auc(&self) -> Result<f64> {
        let points = self.sorted_points()?;

        if points.len() < 2 {
            return Err(Error::InsufficientPoints {
                found: points.len(),
            });
        }

        Ok(trapezoidal_auc(points.false_alarm_rates(), points.hit_rates()))
    }
}

/// @ai:intent Trapezoidal integral of `y` over `x`
/// @ai:pre x and y have equal length and x is non-decreasing
/// @ai:effects pure
pub fn trapezoidal_auc(x: &[f64], y: &[f64]) -> f64 {
    debug_assert_eq!(x.len(), y.len());

    x.windows(2)
        .zip(y.windows(2))
        .map(|(xs, ys)| (xs[1] - xs[0]) * (ys[1] + ys[0]) / 2.0)
        .sum()
}
