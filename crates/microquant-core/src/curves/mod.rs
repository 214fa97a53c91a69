//! Response-curve families
//!
//! This module contains the curve algorithms used to shape a channel's
//! intensity response before it is rescaled into device space:
//! - Linear passthrough for unmodified response
//! - Polynomial (gamma-like) curves to emphasize dark or bright detail
//! - Exponential curves for aggressive highlight emphasis
//! - Logarithmic curves for cinematic-style shadow lift
//!
//! Every transform is pure and monotonic over the normalized domain
//! position `u` in `[0, 1]`. The raw curve images are not normalized here;
//! the quantization strategies rescale them through the curve's images at
//! the domain endpoints.

use serde::{Deserialize, Serialize};

use crate::error::{QuantizationError, Result};

/// Response-curve family, parameterized by a shape coefficient `k`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CurveFamily {
    /// Identity response, ignores `k`
    #[default]
    Linear,

    /// `u^k`: gamma-like response, `k < 1` lifts shadows, `k > 1` deepens them
    Polynomial,

    /// `exp(k * u)`: emphasizes bright detail
    Exponential,

    /// `ln(1 + k * u)`: lifts shadows, compresses highlights
    Logarithmic,
}

impl CurveFamily {
    /// Evaluate the raw (un-normalized) curve at normalized position `u`
    ///
    /// `u` is the sample's position within the statistical intensity range,
    /// 0.0 at the channel's global minimum and 1.0 at its global maximum.
    /// The output is monotonic non-decreasing in `u` for any coefficient
    /// accepted by [`CurveFamily::validate_coefficient`].
    #[inline]
    pub fn transform(self, u: f64, k: f64) -> f64 {
        match self {
            CurveFamily::Linear => u,
            CurveFamily::Polynomial => u.powf(k),
            CurveFamily::Exponential => (k * u).exp(),
            CurveFamily::Logarithmic => (1.0 + k * u).ln(),
        }
    }

    /// Check that `k` lies inside this family's valid coefficient domain
    ///
    /// Polynomial, exponential and logarithmic curves require a finite
    /// `k > 0` to stay monotonic. The linear family ignores `k` but still
    /// rejects non-finite values so a bad slider value cannot hide behind
    /// a family switch.
    pub fn validate_coefficient(self, k: f64) -> Result<()> {
        let valid = match self {
            CurveFamily::Linear => k.is_finite(),
            CurveFamily::Polynomial | CurveFamily::Exponential | CurveFamily::Logarithmic => {
                k.is_finite() && k > 0.0
            }
        };

        if valid {
            Ok(())
        } else {
            Err(QuantizationError::InvalidCoefficient {
                family: self,
                coefficient: k,
            })
        }
    }
}
