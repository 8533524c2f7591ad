//! @ai:module:intent Per-condition signal detection metrics
//! @ai:module:layer domain
//! @ai:module:public_api MetricUnit, normal_quantile, RATE_CLIP, UNDEFINED_RATE

pub mod normal;
pub mod unit;

pub use normal::normal_quantile;
pub use unit::{MetricUnit, RATE_CLIP, UNDEFINED_RATE};
