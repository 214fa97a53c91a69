//! Quantization strategies
//!
//! This module owns the mapping from raw sample values to display codes.
//! It is organized into submodules:
//! - `mapping`: the cached coefficient block and 3-step evaluation both
//!   strategies share
//! - `tabulated`: lookup-table strategy for 8-/16-bit integer domains
//! - `algebraic`: per-call arithmetic strategy for 32-bit integer and
//!   float domains
//! - `factory`: strategy selection and per-channel instance reuse

mod algebraic;
mod factory;
mod mapping;
mod tabulated;


pub use algebraic::AlgebraicQuantizer;
pub use factory::StrategyFactory;
pub use tabulated::TabulatedQuantizer;

use crate::curves::CurveFamily;
use crate::error::Result;
use crate::models::{ChannelStatistics, PixelType, QuantizationConfig, RenderingWindow};

/// One channel's live quantization strategy
///
/// The two variants share one contract: the reconfiguration hooks
/// recompute the cached coefficients synchronously (taking `&mut self`),
/// `quantize` only reads them (taking `&self`), so within a thread the
/// borrow checker enforces the reconfigure-before-quantize ordering. The
/// engine performs no locking of its own; strategies of different
/// channels are fully independent.
#[derive(Debug, Clone)]
pub enum Quantizer {
    /// Lookup-table strategy for 8-/16-bit integer encodings
    Tabulated(TabulatedQuantizer),

    /// Arithmetic strategy for 32-bit integer and float encodings
    Algebraic(AlgebraicQuantizer),
}

impl Quantizer {
    /// Build the strategy appropriate for the encoding
    ///
    /// The strategy starts in a consistent state: coefficients are
    /// computed from `config` with the window defaulted to the channel's
    /// full statistical range.
    pub fn new(
        pixel_type: PixelType,
        config: &QuantizationConfig,
        stats: ChannelStatistics,
    ) -> Result<Self> {
        let quantizer = if pixel_type.is_tabulatable() {
            Quantizer::Tabulated(TabulatedQuantizer::new(pixel_type, config, stats)?)
        } else {
            Quantizer::Algebraic(AlgebraicQuantizer::new(pixel_type, config, stats)?)
        };
        log::debug!(
            "built {} strategy for {} channel",
            if quantizer.is_tabulated() {
                "tabulated"
            } else {
                "algebraic"
            },
            pixel_type.tag()
        );
        Ok(quantizer)
    }

    /// Install a new curve family, coefficient and noise-reduction flag,
    /// recomputing the cached coefficients (and lookup table) before
    /// returning
    pub fn set_mapping(
        &mut self,
        family: CurveFamily,
        coefficient: f64,
        noise_reduction: bool,
    ) -> Result<()> {
        match self {
            Quantizer::Tabulated(q) => q.set_mapping(family, coefficient, noise_reduction),
            Quantizer::Algebraic(q) => q.set_mapping(family, coefficient, noise_reduction),
        }
    }

    /// Install a new display window, recomputing the decile coefficients
    /// (and lookup table) before returning
    pub fn set_window(&mut self, start: f64, end: f64) -> Result<()> {
        match self {
            Quantizer::Tabulated(q) => q.set_window(start, end),
            Quantizer::Algebraic(q) => q.set_window(start, end),
        }
    }

    /// Apply a full configuration (and possibly refreshed statistics) in
    /// one step, preserving the current window
    pub fn reconfigure(
        &mut self,
        config: &QuantizationConfig,
        stats: ChannelStatistics,
    ) -> Result<()> {
        match self {
            Quantizer::Tabulated(q) => q.reconfigure(config, stats),
            Quantizer::Algebraic(q) => q.reconfigure(config, stats),
        }
    }

    /// Map one raw sample to its display code
    ///
    /// Total over any `f64` input: out-of-window and out-of-range samples
    /// saturate to the effective code bounds, they are never errors.
    #[inline]
    pub fn quantize(&self, raw: f64) -> u8 {
        match self {
            Quantizer::Tabulated(q) => q.quantize(raw),
            Quantizer::Algebraic(q) => q.quantize(raw),
        }
    }

    /// Native encoding this strategy was built for
    pub fn pixel_type(&self) -> PixelType {
        match self {
            Quantizer::Tabulated(q) => q.pixel_type(),
            Quantizer::Algebraic(q) => q.pixel_type(),
        }
    }

    /// Lowest representable sample value of the native encoding
    pub fn pixels_type_min(&self) -> f64 {
        self.pixel_type().range().type_min
    }

    /// Highest representable sample value of the native encoding
    pub fn pixels_type_max(&self) -> f64 {
        self.pixel_type().range().type_max
    }

    /// Currently applied display window
    pub fn window(&self) -> RenderingWindow {
        self.mapping().window()
    }

    /// Currently applied per-channel settings
    pub fn config(&self) -> &QuantizationConfig {
        self.mapping().config()
    }

    /// Statistics the strategy was set up with
    pub fn stats(&self) -> ChannelStatistics {
        self.mapping().stats()
    }

    pub fn is_tabulated(&self) -> bool {
        matches!(self, Quantizer::Tabulated(_))
    }

    fn mapping(&self) -> &mapping::Mapping {
        match self {
            Quantizer::Tabulated(q) => q.mapping(),
            Quantizer::Algebraic(q) => q.mapping(),
        }
    }
}
