//! @ai:module:intent Presentation of ROC analysis results
//! @ai:module:layer infrastructure
//! @ai:module:public_api AnalysisReport, ConditionRow, SummaryReporter, ChartGenerator

pub mod charts;
pub mod summary;

pub use charts::{ChartGenerator, ChartGeneratorTrait};
pub use summary::{SummaryReporter, SummaryReporterTrait};

use crate::roc::{Condition, CurveAggregator, RocPoints};
use serde::Serialize;

/// @ai:intent Metrics of one stored condition, in insertion order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConditionRow {
    pub label: Option<String>,
    pub hits: u64,
    pub misses: u64,
    pub false_alarms: u64,
    pub correct_rejections: u64,
    pub hit_rate: f64,
    pub false_alarm_rate: f64,
    pub d_prime: f64,
    pub criterion: f64,
}

impl ConditionRow {
    /// @ai:intent Evaluate every metric of a condition
    /// @ai:effects pure
    pub fn from_condition(condition: &Condition) -> Self {
        let unit = &condition.unit;
        Self {
            label: condition.label.clone(),
            hits: unit.hits(),
            misses: unit.misses(),
            false_alarms: unit.false_alarms(),
            correct_rejections: unit.correct_rejections(),
            hit_rate: unit.hit_rate(),
            false_alarm_rate: unit.false_alarm_rate(),
            d_prime: unit.d_prime(),
            criterion: unit.criterion(),
        }
    }
}

/// @ai:intent Snapshot of an aggregator's analysis for display
///
/// Missing curve data is recorded rather than raised, so a report can be
/// built for any aggregator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub conditions: Vec<ConditionRow>,
    pub points: Option<RocPoints>,
    pub auc: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auc_unavailable: Option<String>,
}

impl AnalysisReport {
    /// @ai:intent Evaluate conditions, sorted points and AUC
    /// @ai:effects pure
    pub fn from_aggregator(aggregator: &CurveAggregator) -> Self {
        let conditions = aggregator
            .conditions()
            .iter()
            .map(ConditionRow::from_condition)
            .collect();

        let (auc, auc_unavailable) = match aggregator.compute_auc() {
            Ok(auc) => (Some(auc), None),
            Err(e) => (None, Some(e.to_string())),
        };

        Self {
            conditions,
            points: aggregator.sorted_points().ok(),
            auc,
            auc_unavailable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::MetricUnit;

    #[test]
    fn test_report_for_empty_aggregator() {
        let report = AnalysisReport::from_aggregator(&CurveAggregator::new());

        assert!(report.conditions.is_empty());
        assert!(report.points.is_none());
        assert!(report.auc.is_none());
        assert_eq!(report.auc_unavailable.as_deref(), Some("No conditions present"));
    }

    #[test]
    fn test_report_for_single_condition() {
        let mut aggregator = CurveAggregator::new();
        aggregator.add_condition(MetricUnit::new(40, 10, 20, 30), Some("A".to_string()));

        let report = AnalysisReport::from_aggregator(&aggregator);

        assert_eq!(report.conditions.len(), 1);
        assert_eq!(report.points.as_ref().map(|p| p.len()), Some(1));
        assert!(report.auc.is_none());
        assert!(report.auc_unavailable.unwrap().contains("found 1"));
    }

    #[test]
    fn test_report_rows_follow_insertion_order() {
        let mut aggregator = CurveAggregator::new();
        aggregator.add_condition(MetricUnit::new(40, 10, 20, 30), Some("A".to_string()));
        aggregator.add_condition(MetricUnit::new(30, 15, 10, 25), Some("B".to_string()));

        let report = AnalysisReport::from_aggregator(&aggregator);

        assert_eq!(report.conditions[0].label.as_deref(), Some("A"));
        assert_eq!(report.conditions[0].hit_rate, 0.8);
        assert_eq!(report.conditions[1].label.as_deref(), Some("B"));
        assert_eq!(report.auc, aggregator.compute_auc().ok());
        assert!(report.auc_unavailable.is_none());
    }

    #[test]
    fn test_report_serializes_to_json() {
        let mut aggregator = CurveAggregator::new();
        aggregator.add_condition(MetricUnit::new(40, 10, 20, 30), Some("A".to_string()));
        aggregator.add_condition(MetricUnit::new(30, 15, 10, 25), None);

        let json = serde_json::to_value(AnalysisReport::from_aggregator(&aggregator)).unwrap();

        assert_eq!(json["conditions"][0]["label"], "A");
        assert_eq!(json["points"]["false_alarm_rates"].as_array().unwrap().len(), 2);
        assert!(json["auc"].is_number());
        assert!(json.get("auc_unavailable").is_none());
    }
}
