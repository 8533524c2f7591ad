//! @ai:module:intent ROC aggregation across conditions
//! @ai:module:layer domain
//! @ai:module:public_api CurveAggregator, Condition, RocPoints, trapezoidal_auc

pub mod aggregator;
pub mod types;

pub use aggregator::{trapezoidal_auc, CurveAggregator};
pub use types::{Condition, RocPoints};
