//! Native pixel encodings and their numeric ranges

use serde::{Deserialize, Serialize};

use crate::error::{QuantizationError, Result};

/// Native encoding of a channel's raw samples
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PixelType {
    Uint8,
    Int8,
    Uint16,
    Int16,
    Uint32,
    Int32,
    Float32,
    Float64,
}

/// Numeric range and bit resolution of a native encoding
///
/// Derived once from the encoding tag, never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelTypeRange {
    /// Lowest representable sample value
    pub type_min: f64,

    /// Highest representable sample value
    pub type_max: f64,

    /// Bits of resolution of the encoding
    pub bit_resolution: u32,
}

impl PixelType {
    /// Parse an OME-style encoding tag
    ///
    /// Unknown tags are a configuration error; there is no fallback
    /// encoding.
    pub fn from_tag(tag: &str) -> Result<Self> {
        match tag {
            "uint8" => Ok(PixelType::Uint8),
            "int8" => Ok(PixelType::Int8),
            "uint16" => Ok(PixelType::Uint16),
            "int16" => Ok(PixelType::Int16),
            "uint32" => Ok(PixelType::Uint32),
            "int32" => Ok(PixelType::Int32),
            "float32" => Ok(PixelType::Float32),
            "float64" => Ok(PixelType::Float64),
            other => Err(QuantizationError::UnsupportedPixelType(other.to_string())),
        }
    }

    /// The encoding tag this type parses from
    pub fn tag(self) -> &'static str {
        match self {
            PixelType::Uint8 => "uint8",
            PixelType::Int8 => "int8",
            PixelType::Uint16 => "uint16",
            PixelType::Int16 => "int16",
            PixelType::Uint32 => "uint32",
            PixelType::Int32 => "int32",
            PixelType::Float32 => "float32",
            PixelType::Float64 => "float64",
        }
    }

    /// Numeric range and bit resolution of this encoding
    pub fn range(self) -> PixelTypeRange {
        match self {
            PixelType::Uint8 => PixelTypeRange {
                type_min: 0.0,
                type_max: u8::MAX as f64,
                bit_resolution: 8,
            },
            PixelType::Int8 => PixelTypeRange {
                type_min: i8::MIN as f64,
                type_max: i8::MAX as f64,
                bit_resolution: 8,
            },
            PixelType::Uint16 => PixelTypeRange {
                type_min: 0.0,
                type_max: u16::MAX as f64,
                bit_resolution: 16,
            },
            PixelType::Int16 => PixelTypeRange {
                type_min: i16::MIN as f64,
                type_max: i16::MAX as f64,
                bit_resolution: 16,
            },
            PixelType::Uint32 => PixelTypeRange {
                type_min: 0.0,
                type_max: u32::MAX as f64,
                bit_resolution: 32,
            },
            PixelType::Int32 => PixelTypeRange {
                type_min: i32::MIN as f64,
                type_max: i32::MAX as f64,
                bit_resolution: 32,
            },
            PixelType::Float32 => PixelTypeRange {
                type_min: -f64::from(f32::MAX),
                type_max: f64::from(f32::MAX),
                bit_resolution: 32,
            },
            PixelType::Float64 => PixelTypeRange {
                type_min: f64::MIN,
                type_max: f64::MAX,
                bit_resolution: 64,
            },
        }
    }

    /// Whether samples of this encoding are integers
    pub fn is_integer(self) -> bool {
        !matches!(self, PixelType::Float32 | PixelType::Float64)
    }

    /// Whether the native domain is small enough to enumerate into a
    /// lookup table (8-/16-bit integer encodings)
    pub fn is_tabulatable(self) -> bool {
        self.is_integer() && self.range().bit_resolution <= 16
    }
}
