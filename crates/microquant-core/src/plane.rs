//! In-memory sample buffers
//!
//! A plane is a single (channel, z, t) slice of a microscope stack: one
//! numeric sample per pixel, stored in the channel's native encoding. The
//! engine itself only ever consumes a single numeric value per `quantize`
//! call; these types exist so callers have a typed, bounds-checked way to
//! hand samples over without the engine knowing about stacks or time
//! points.

use crate::error::{QuantizationError, Result};
use crate::models::PixelType;

/// Raw samples in their native encoding
#[derive(Debug, Clone, PartialEq)]
pub enum SampleBuf {
    Uint8(Vec<u8>),
    Int8(Vec<i8>),
    Uint16(Vec<u16>),
    Int16(Vec<i16>),
    Uint32(Vec<u32>),
    Int32(Vec<i32>),
    Float32(Vec<f32>),
    Float64(Vec<f64>),
}

impl SampleBuf {
    /// Number of samples in the buffer
    pub fn len(&self) -> usize {
        match self {
            SampleBuf::Uint8(v) => v.len(),
            SampleBuf::Int8(v) => v.len(),
            SampleBuf::Uint16(v) => v.len(),
            SampleBuf::Int16(v) => v.len(),
            SampleBuf::Uint32(v) => v.len(),
            SampleBuf::Int32(v) => v.len(),
            SampleBuf::Float32(v) => v.len(),
            SampleBuf::Float64(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Native encoding of the stored samples
    pub fn pixel_type(&self) -> PixelType {
        match self {
            SampleBuf::Uint8(_) => PixelType::Uint8,
            SampleBuf::Int8(_) => PixelType::Int8,
            SampleBuf::Uint16(_) => PixelType::Uint16,
            SampleBuf::Int16(_) => PixelType::Int16,
            SampleBuf::Uint32(_) => PixelType::Uint32,
            SampleBuf::Int32(_) => PixelType::Int32,
            SampleBuf::Float32(_) => PixelType::Float32,
            SampleBuf::Float64(_) => PixelType::Float64,
        }
    }

    /// Sample at `index` widened to `f64`, or `None` past the end
    ///
    /// Every supported encoding widens into `f64` without loss of the
    /// values the engine cares about (integers up to 32 bits are exact,
    /// `f32` widens exactly).
    pub fn get(&self, index: usize) -> Option<f64> {
        match self {
            SampleBuf::Uint8(v) => v.get(index).map(|&s| f64::from(s)),
            SampleBuf::Int8(v) => v.get(index).map(|&s| f64::from(s)),
            SampleBuf::Uint16(v) => v.get(index).map(|&s| f64::from(s)),
            SampleBuf::Int16(v) => v.get(index).map(|&s| f64::from(s)),
            SampleBuf::Uint32(v) => v.get(index).map(|&s| f64::from(s)),
            SampleBuf::Int32(v) => v.get(index).map(|&s| f64::from(s)),
            SampleBuf::Float32(v) => v.get(index).map(|&s| f64::from(s)),
            SampleBuf::Float64(v) => v.get(index).copied(),
        }
    }
}

/// A single plane of raw samples
#[derive(Debug, Clone, PartialEq)]
pub struct Plane {
    /// Plane width in pixels
    pub width: u32,

    /// Plane height in pixels
    pub height: u32,

    samples: SampleBuf,
}

impl Plane {
    /// Build a plane, checking that the buffer holds exactly
    /// `width * height` samples
    pub fn new(width: u32, height: u32, samples: SampleBuf) -> Result<Self> {
        let expected = width as usize * height as usize;
        if samples.len() != expected {
            return Err(QuantizationError::PlaneSizeMismatch {
                width,
                height,
                expected,
                actual: samples.len(),
            });
        }
        Ok(Self {
            width,
            height,
            samples,
        })
    }

    /// Number of samples in the plane
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Native encoding of the plane's samples
    pub fn pixel_type(&self) -> PixelType {
        self.samples.pixel_type()
    }

    /// Sample at `index` widened to `f64`
    ///
    /// An index beyond the plane's element count is a bounds error, never
    /// a silent wrap.
    pub fn sample(&self, index: usize) -> Result<f64> {
        self.samples
            .get(index)
            .ok_or(QuantizationError::SampleOutOfBounds {
                index,
                len: self.samples.len(),
            })
    }
}
