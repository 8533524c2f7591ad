//! @ai:module:intent Value types for ROC aggregation
//! @ai:module:layer domain
//! @ai:module:public_api Condition, RocPoints
//! @ai:module:stateless true

use crate::detection::MetricUnit;
use serde::Serialize;

/// @ai:intent One measured condition with optional descriptive label
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    pub unit: MetricUnit,
    pub label: Option<String>,
}

impl Condition {
    /// @ai:intent Create an unlabeled condition
    /// @ai:effects pure
    pub fn new(unit: MetricUnit) -> Self {
        Self { unit, label: None }
    }

    /// @ai:intent Create a labeled condition
    /// @ai:effects pure
    pub fn labeled(unit: MetricUnit, label: impl Into<String>) -> Self {
        Self {
            unit,
            label: Some(label.into()),
        }
    }
}

/// @ai:intent ROC operating points sorted by false-alarm rate, then hit rate
/// @ai:invariant both sequences have the same length and stay paired
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RocPoints {
    false_alarm_rates: Vec<f64>,
    hit_rates: Vec<f64>,
}

impl RocPoints {
    pub(crate) fn from_sorted_pairs(pairs: Vec<(f64, f64)>) -> Self {
        let (false_alarm_rates, hit_rates) = pairs.into_iter().unzip();
        Self {
            false_alarm_rates,
            hit_rates,
        }
    }

    /// X coordinates of the curve.
    pub fn false_alarm_rates(&self) -> &[f64] {
        &self.false_alarm_rates
    }

    /// Y coordinates of the curve.
    pub fn hit_rates(&self) -> &[f64] {
        &self.hit_rates
    }

    pub fn len(&self) -> usize {
        self.false_alarm_rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.false_alarm_rates.is_empty()
    }

    /// @ai:intent Iterate `(false_alarm_rate, hit_rate)` pairs in curve order
    /// @ai:effects pure
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.false_alarm_rates
            .iter()
            .copied()
            .zip(self.hit_rates.iter().copied())
    }

    /// @ai:intent Split into `(false_alarm_rates, hit_rates)`
    /// @ai:effects pure
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
        (self.false_alarm_rates, self.hit_rates)
    }
}
