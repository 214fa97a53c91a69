//! Tabulated quantization strategy
//!
//! For 8-/16-bit integer encodings the native domain is small enough to
//! enumerate, so every reconfiguration rebuilds a full lookup table and
//! the per-pixel path becomes a single bounds-checked array read with no
//! floating point at all. Rebuild cost is O(domain size), amortized over
//! the many samples read per configuration change.

use crate::curves::CurveFamily;
use crate::error::Result;
use crate::models::{ChannelStatistics, PixelType, QuantizationConfig};

use super::mapping::Mapping;

/// Lookup-table strategy for tabulatable domains
#[derive(Debug, Clone)]
pub struct TabulatedQuantizer {
    pixel_type: PixelType,
    type_min: i64,
    lut: Vec<u8>,
    mapping: Mapping,
}

impl TabulatedQuantizer {
    pub(crate) fn new(
        pixel_type: PixelType,
        config: &QuantizationConfig,
        stats: ChannelStatistics,
    ) -> Result<Self> {
        let range = pixel_type.range();
        let mut quantizer = Self {
            pixel_type,
            type_min: range.type_min as i64,
            lut: Vec::new(),
            mapping: Mapping::new(config, stats)?,
        };
        quantizer.rebuild();
        Ok(quantizer)
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
        self.mapping
            .set_mapping(family, coefficient, noise_reduction)?;
        self.rebuild();
        Ok(())
    }

    pub(crate) fn set_window(&mut self, start: f64, end: f64) -> Result<()> {
        self.mapping.set_window(start, end)?;
        self.rebuild();
        Ok(())
    }

    pub(crate) fn reconfigure(
        &mut self,
        config: &QuantizationConfig,
        stats: ChannelStatistics,
    ) -> Result<()> {
        self.mapping.reconfigure(config, stats)?;
        self.rebuild();
        Ok(())
    }

    /// Bounds-checked table read
    ///
    /// Non-integer samples are resolved to the nearest table entry;
    /// samples beyond the native range clamp to the edge entries, which
    /// already hold the saturated codes. NaN saturates low, matching the
    /// arithmetic path.
    #[inline]
    pub(crate) fn quantize(&self, raw: f64) -> u8 {
        if raw.is_nan() {
            return self.lut[0];
        }
        let last = self.lut.len() as i64 - 1;
        let index = (raw.round() as i64 - self.type_min).clamp(0, last) as usize;
        self.lut[index]
    }

    /// Re-evaluate the full mapping once per distinct raw value
    ///
    /// The table allocation is kept across rebuilds.
    fn rebuild(&mut self) {
        let range = self.pixel_type.range();
        let len = (range.type_max - range.type_min) as usize + 1;
        self.lut.resize(len, 0);

        let type_min = self.type_min;
        for (offset, code) in self.lut.iter_mut().enumerate() {
            *code = self.mapping.code_of((type_min + offset as i64) as f64);
        }

        log::debug!(
            "rebuilt {}-entry lookup table for {} channel",
            len,
            self.pixel_type.tag()
        );
    }
}
