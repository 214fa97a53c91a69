//! Data models for the quantization engine
//!
//! Core data structures for pixel encodings, channel statistics, display
//! windows and per-channel quantization settings.

mod config;
mod pixel;

pub use config::{ChannelStatistics, QuantizationConfig, RenderingWindow};
pub use pixel::{PixelType, PixelTypeRange};
