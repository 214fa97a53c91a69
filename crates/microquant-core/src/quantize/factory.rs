//! Strategy selection and per-channel instance reuse
//!
//! Construction is not free (the tabulated variant allocates a full
//! lookup table), so the factory keeps one live strategy per channel and
//! reconfigures it in place across repeated calls. A pooled instance is
//! replaced only when the channel's pixel type changes.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::error::Result;
use crate::models::{ChannelStatistics, PixelType, QuantizationConfig};

use super::Quantizer;

/// Pool of per-channel quantization strategies
#[derive(Debug, Default)]
pub struct StrategyFactory {
    pool: HashMap<usize, Quantizer>,
}

impl StrategyFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Strategy for `channel`, built on first use and reused afterwards
    ///
    /// The returned strategy is already reconfigured to `config` and
    /// `stats`. Reuse keeps the table allocation and the current window;
    /// a pixel type change discards the instance and builds the variant
    /// the new encoding needs.
    pub fn get(
        &mut self,
        channel: usize,
        config: &QuantizationConfig,
        pixel_type: PixelType,
        stats: ChannelStatistics,
    ) -> Result<&mut Quantizer> {
        match self.pool.entry(channel) {
            Entry::Occupied(entry) => {
                let slot = entry.into_mut();
                if slot.pixel_type() == pixel_type {
                    slot.reconfigure(config, stats)?;
                } else {
                    log::debug!(
                        "channel {} pixel type changed from {} to {}, replacing strategy",
                        channel,
                        slot.pixel_type().tag(),
                        pixel_type.tag()
                    );
                    *slot = Quantizer::new(pixel_type, config, stats)?;
                }
                Ok(slot)
            }
            Entry::Vacant(entry) => {
                let quantizer = Quantizer::new(pixel_type, config, stats)?;
                Ok(entry.insert(quantizer))
            }
        }
    }

    /// Drop the strategy of a channel that is no longer rendered
    pub fn release(&mut self, channel: usize) -> Option<Quantizer> {
        self.pool.remove(&channel)
    }

    /// Number of live strategies
    pub fn len(&self) -> usize {
        self.pool.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pool.is_empty()
    }
}
