//! Per-channel quantization settings, display windows and statistics

use serde::{Deserialize, Serialize};

use crate::curves::CurveFamily;
use crate::error::{QuantizationError, Result};
use crate::models::PixelType;

/// Per-channel quantization settings
///
/// Owned by the channel's rendering configuration and mutated by user
/// interaction. Every mutation must reach the channel's strategy through
/// [`crate::quantize::Quantizer::reconfigure`] (or the finer-grained
/// hooks) before the next `quantize` call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuantizationConfig {
    /// First display code of the output range, typically 0
    pub code_start: u8,

    /// Last display code of the output range, typically 255
    pub code_end: u8,

    /// Source bit resolution used as the nominal curve domain
    pub bit_resolution: u32,

    /// Response-curve family
    pub family: CurveFamily,

    /// Shape coefficient of the curve family
    pub coefficient: f64,

    /// Decile-trim noise reduction toggle
    pub noise_reduction: bool,
}

impl QuantizationConfig {
    /// Default settings for a channel of the given encoding: full 8-bit
    /// code range, linear response, noise reduction off
    pub fn for_pixel_type(pixel_type: PixelType) -> Self {
        Self {
            code_start: 0,
            code_end: 255,
            bit_resolution: pixel_type.range().bit_resolution,
            family: CurveFamily::default(),
            coefficient: 1.0,
            noise_reduction: false,
        }
    }

    /// Reject configurations the per-pixel path must never see
    pub fn validate(&self) -> Result<()> {
        if self.code_start > self.code_end {
            return Err(QuantizationError::InvalidCodeRange {
                start: self.code_start,
                end: self.code_end,
            });
        }
        if self.bit_resolution == 0 || self.bit_resolution > 64 {
            return Err(QuantizationError::InvalidBitResolution(self.bit_resolution));
        }
        self.family.validate_coefficient(self.coefficient)
    }
}

/// User-chosen display range of a channel
///
/// `start <= end` is not guaranteed by callers; the strategy validates the
/// window before caching any coefficient derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderingWindow {
    pub start: f64,
    pub end: f64,
}

impl RenderingWindow {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Reject NaN, infinite or inverted bounds
    pub fn validate(&self) -> Result<()> {
        if !self.start.is_finite() || !self.end.is_finite() || self.start > self.end {
            return Err(QuantizationError::InvalidWindow {
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }
}

/// Observed intensity extremes of a channel
///
/// Supplied externally (computed at import time) and treated as read-only
/// input to strategy setup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChannelStatistics {
    pub global_min: f64,
    pub global_max: f64,
}

impl ChannelStatistics {
    pub fn new(global_min: f64, global_max: f64) -> Self {
        Self {
            global_min,
            global_max,
        }
    }

    /// Reject non-finite or inverted extremes
    pub fn validate(&self) -> Result<()> {
        if !self.global_min.is_finite()
            || !self.global_max.is_finite()
            || self.global_min > self.global_max
        {
            return Err(QuantizationError::InvalidStatistics {
                min: self.global_min,
                max: self.global_max,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = QuantizationConfig::for_pixel_type(PixelType::Uint16);
        assert!(config.validate().is_ok());
        assert_eq!(config.code_start, 0);
        assert_eq!(config.code_end, 255);
        assert_eq!(config.bit_resolution, 16);
        assert_eq!(config.family, CurveFamily::Linear);
        assert!(!config.noise_reduction);
    }

    #[test]
    fn test_inverted_code_range_is_rejected() {
        let mut config = QuantizationConfig::for_pixel_type(PixelType::Uint8);
        config.code_start = 200;
        config.code_end = 100;
        assert!(matches!(
            config.validate(),
            Err(QuantizationError::InvalidCodeRange {
                start: 200,
                end: 100
            })
        ));
    }

    #[test]
    fn test_bad_coefficient_is_rejected() {
        let mut config = QuantizationConfig::for_pixel_type(PixelType::Uint8);
        config.family = CurveFamily::Polynomial;
        config.coefficient = -2.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_window_validation() {
        assert!(RenderingWindow::new(0.0, 100.0).validate().is_ok());
        assert!(RenderingWindow::new(50.0, 50.0).validate().is_ok());
        assert!(RenderingWindow::new(100.0, 0.0).validate().is_err());
        assert!(RenderingWindow::new(f64::NAN, 1.0).validate().is_err());
        assert!(RenderingWindow::new(0.0, f64::INFINITY).validate().is_err());
    }

    #[test]
    fn test_statistics_validation() {
        assert!(ChannelStatistics::new(-5.0, 5.0).validate().is_ok());
        assert!(ChannelStatistics::new(3.0, 3.0).validate().is_ok());
        assert!(ChannelStatistics::new(5.0, -5.0).validate().is_err());
        assert!(ChannelStatistics::new(f64::NAN, 0.0).validate().is_err());
    }

    #[test]
    fn test_config_round_trips_through_json() {
        let mut config = QuantizationConfig::for_pixel_type(PixelType::Int16);
        config.family = CurveFamily::Exponential;
        config.coefficient = 1.4;
        config.noise_reduction = true;

        let json = serde_json::to_string(&config).unwrap();
        let back: QuantizationConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
