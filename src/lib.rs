//! @ai:module:intent Signal detection theory metrics and ROC analysis library
//! @ai:module:layer application
//! @ai:module:public_api config, detection, error, report, roc
//!
//! # sdt-roc
//!
//! Computes hit rate, false-alarm rate, d' and criterion from trial outcome
//! counts, and combines several conditions into a sorted ROC curve with a
//! trapezoidal AUC.
//!
//! ```rust
//! use sdt_roc::{CurveAggregator, MetricUnit};
//!
//! let mut experiment = CurveAggregator::new();
//! experiment.add_condition(MetricUnit::new(40, 10, 20, 30), Some("A".to_string()));
//! experiment.add_condition(MetricUnit::new(30, 15, 10, 25), Some("B".to_string()));
//!
//! let points = experiment.sorted_points()?;
//! assert_eq!(points.len(), 2);
//! let auc = experiment.compute_auc()?;
//! assert!(auc > 0.0);
//! # Ok::<(), sdt_roc::Error>(())
//! ```

pub mod config;
pub mod detection;
pub mod error;
pub mod report;
pub mod roc;

pub use config::{ChartConfig, ConditionConfig, ExperimentConfig};
pub use detection::{normal_quantile, MetricUnit, RATE_CLIP, UNDEFINED_RATE};
pub use error::{Error, Result};
pub use report::{AnalysisReport, ChartGenerator, ConditionRow, SummaryReporter};
pub use roc::{trapezoidal_auc, Condition, CurveAggregator, RocPoints};
