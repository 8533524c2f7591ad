//! @ai:module:intent Standard normal quantile function
//! @ai:module:layer domain
//! @ai:module:public_api normal_quantile
//! @ai:module:stateless true

use statrs::function::erf::erfc_inv;
use std::f64::consts::SQRT_2;

/// @ai:intent Inverse CDF of the standard normal distribution
/// @ai:pre 0 < p < 1
/// @ai:post result is finite for p inside the open unit interval
/// @ai:effects pure
///
/// Uses the identity Φ⁻¹(p) = −√2 · erfc⁻¹(2p).
pub fn normal_quantile(p: f64) -> f64 {
    -SQRT_2 * erfc_inv(2.0 * p)
}
