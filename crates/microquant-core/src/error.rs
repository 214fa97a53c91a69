//! Error types for the quantization engine
//!
//! Every failure is a configuration-time failure surfaced synchronously to
//! the caller that changed the configuration. The per-pixel `quantize` path
//! is total: out-of-range samples saturate, they never error.

use thiserror::Error;

use crate::curves::CurveFamily;

/// Error type for configuration and sample-access failures
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QuantizationError {
    /// Display code range with start above end
    #[error("invalid code range: start {start} exceeds end {end}")]
    InvalidCodeRange { start: u8, end: u8 },

    /// Window bounds that are NaN, infinite, or inverted
    #[error("invalid window [{start}, {end}]: bounds must be finite with start <= end")]
    InvalidWindow { start: f64, end: f64 },

    /// Curve coefficient outside the family's valid domain
    #[error("coefficient {coefficient} is outside the valid domain of the {family:?} family")]
    InvalidCoefficient {
        family: CurveFamily,
        coefficient: f64,
    },

    /// Bit resolution outside the supported 1..=64 range
    #[error("invalid bit resolution {0}: expected 1..=64")]
    InvalidBitResolution(u32),

    /// Channel statistics that are non-finite or inverted
    #[error("invalid channel statistics [{min}, {max}]: must be finite with min <= max")]
    InvalidStatistics { min: f64, max: f64 },

    /// Pixel encoding tag the factory does not recognize
    #[error("unsupported pixel type: {0}")]
    UnsupportedPixelType(String),

    /// Sample index beyond the plane's element count
    #[error("sample index {index} out of bounds for plane of {len} samples")]
    SampleOutOfBounds { index: usize, len: usize },

    /// Plane dimensions that disagree with the sample buffer length
    #[error("plane of {width}x{height} pixels expects {expected} samples, got {actual}")]
    PlaneSizeMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, QuantizationError>;
