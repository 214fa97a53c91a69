//! Algebraic ("on the fly") quantization strategy
//!
//! 32-bit integer and floating-point domains are intractably large to
//! tabulate, so every `quantize` call evaluates the mapping directly from
//! the cached scalar coefficients. Still O(1) per call, but with real
//! floating-point cost per pixel.
//!
//! The evaluation is the exact same [`Mapping::code_of`] the tabulated
//! strategy fills its table from, so the two strategies agree on every
//! raw value a tabulatable domain could present.

use crate::curves::CurveFamily;
use crate::error::Result;
use crate::models::{ChannelStatistics, PixelType, QuantizationConfig};

use super::mapping::Mapping;

/// Arithmetic strategy for domains too large to tabulate
#[derive(Debug, Clone)]
pub struct AlgebraicQuantizer {
    pixel_type: PixelType,
    mapping: Mapping,
}

impl AlgebraicQuantizer {
    pub(crate) fn new(
        pixel_type: PixelType,
        config: &QuantizationConfig,
        stats: ChannelStatistics,
    ) -> Result<Self> {
        Ok(Self {
            pixel_type,
            mapping: Mapping::new(config, stats)?,
        })
    }

    pub(crate) fn pixel_type(&self) -> PixelType {
        self.pixel_type
    }

    pub(crate) fn mapping(&self) -> &Mapping {
        &self.mapping
    }

    pub(crate) fn set_mapping(
        &mut self,
        family: CurveFamily,
        coefficient: f64,
        noise_reduction: bool,
    ) -> Result<()> {
        self.mapping.set_mapping(family, coefficient, noise_reduction)
    }

    pub(crate) fn set_window(&mut self, start: f64, end: f64) -> Result<()> {
        self.mapping.set_window(start, end)
    }

    pub(crate) fn reconfigure(
        &mut self,
        config: &QuantizationConfig,
        stats: ChannelStatistics,
    ) -> Result<()> {
        self.mapping.reconfigure(config, stats)
    }

    #[inline]
    pub(crate) fn quantize(&self, raw: f64) -> u8 {
        self.mapping.code_of(raw)
    }
}
