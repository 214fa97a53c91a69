//! Microquant Core Library
//!
//! Core functionality for quantizing raw microscope sample values into
//! integer display codes.
//!
//! A microscope plane stores one numeric sample per pixel, encoded as an
//! unsigned/signed 8-, 16- or 32-bit integer or as a 32-/64-bit float.
//! Rendering a channel means mapping every sample through a user-adjustable
//! display window and response curve into a small display code that a
//! compositor turns into a visible color. This crate owns exactly that
//! mapping; plane storage, channel compositing and color lookup tables are
//! the caller's concern.

pub mod curves;
pub mod error;
pub mod models;
pub mod plane;
pub mod quantize;

// Re-export commonly used types
pub use curves::CurveFamily;
pub use error::{QuantizationError, Result};
pub use models::{
    ChannelStatistics, PixelType, PixelTypeRange, QuantizationConfig, RenderingWindow,
};
pub use plane::{Plane, SampleBuf};
pub use quantize::{Quantizer, StrategyFactory};
