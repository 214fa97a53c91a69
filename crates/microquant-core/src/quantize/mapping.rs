//! Cached mapping coefficients shared by both strategies
//!
//! The mapping from a raw sample to a display code runs in three steps:
//! 1. Normalize the sample against the channel's `[global_min, global_max]`
//!    and push it through the response curve, rescaled by the curve's
//!    images at the domain endpoints into the nominal range
//!    `[0, 2^bit_resolution - 1]`.
//! 2. Linearly rescale through the decile coefficients into device space.
//! 3. Round to nearest and clamp to the effective code bounds.
//!
//! Steps 1 and 2 depend only on scalar coefficients recomputed by the two
//! reconfiguration hooks; the per-sample evaluation never allocates and
//! never fails.

use crate::curves::CurveFamily;
use crate::error::Result;
use crate::models::{ChannelStatistics, QuantizationConfig, RenderingWindow};

/// Fraction of the statistical range carved off each end by the
/// noise-reduction trim, and of the code range given up with it
const DECILE: f64 = 10.0;

/// Cached coefficients of one channel's sample-to-code mapping
///
/// A `Mapping` is built in a consistent state and every mutating hook
/// recomputes the affected coefficients before returning, so `code_of`
/// can never observe coefficients that are stale relative to the last
/// applied configuration and window.
#[derive(Debug, Clone)]
pub(crate) struct Mapping {
    config: QuantizationConfig,
    stats: ChannelStatistics,
    window: RenderingWindow,

    // Normalized-map coefficients, recomputed on mapping changes
    ys_normalized: f64,
    a_normalized: f64,

    // Decile coefficients, recomputed on window changes
    anchor_lo: f64,
    anchor_hi: f64,
    a_decile: f64,
    b_decile: f64,
    code_floor: f64,
    code_ceil: f64,
    code_lo: u8,
    code_hi: u8,
}

impl Mapping {
    /// Build a mapping for a validated config against fixed channel
    /// statistics, with the window defaulting to the full statistical
    /// range
    pub(crate) fn new(config: &QuantizationConfig, stats: ChannelStatistics) -> Result<Self> {
        config.validate()?;
        stats.validate()?;

        let (ys_normalized, a_normalized) =
            normalized_coefficients(config.family, config.coefficient, config.bit_resolution);

        let mut mapping = Self {
            config: *config,
            stats,
            window: RenderingWindow::new(stats.global_min, stats.global_max),
            ys_normalized,
            a_normalized,
            anchor_lo: 0.0,
            anchor_hi: 0.0,
            a_decile: 0.0,
            b_decile: 0.0,
            code_floor: 0.0,
            code_ceil: 0.0,
            code_lo: 0,
            code_hi: 0,
        };
        mapping.recompute_decile();
        Ok(mapping)
    }

    /// Install a new curve family, coefficient and noise-reduction flag
    ///
    /// Recomputes the normalized-map coefficients, then refreshes the
    /// decile coefficients: both the trim flag and the curve shape feed
    /// the anchors' curve images.
    pub(crate) fn set_mapping(
        &mut self,
        family: CurveFamily,
        coefficient: f64,
        noise_reduction: bool,
    ) -> Result<()> {
        family.validate_coefficient(coefficient)?;

        self.config.family = family;
        self.config.coefficient = coefficient;
        self.config.noise_reduction = noise_reduction;

        let (ys, a) = normalized_coefficients(family, coefficient, self.config.bit_resolution);
        self.ys_normalized = ys;
        self.a_normalized = a;

        self.recompute_decile();
        Ok(())
    }

    /// Install a new display window
    ///
    /// Recomputes the decile coefficients against the channel's fixed
    /// statistics.
    pub(crate) fn set_window(&mut self, start: f64, end: f64) -> Result<()> {
        let window = RenderingWindow::new(start, end);
        window.validate()?;

        self.window = window;
        self.recompute_decile();
        Ok(())
    }

    /// Replace the whole configuration (and statistics) at once,
    /// preserving the current window
    pub(crate) fn reconfigure(
        &mut self,
        config: &QuantizationConfig,
        stats: ChannelStatistics,
    ) -> Result<()> {
        config.validate()?;
        stats.validate()?;

        self.config = *config;
        self.stats = stats;

        let (ys, a) =
            normalized_coefficients(config.family, config.coefficient, config.bit_resolution);
        self.ys_normalized = ys;
        self.a_normalized = a;

        self.recompute_decile();
        Ok(())
    }

    /// The 3-step sample-to-code evaluation
    ///
    /// Total over any `f64`: NaN and `-inf` saturate to the effective code
    /// start, `+inf` to the effective code end.
    #[inline]
    pub(crate) fn code_of(&self, raw: f64) -> u8 {
        // NaN fails this comparison and saturates low with everything at
        // or below the lower anchor
        if !(raw > self.anchor_lo) {
            return self.code_lo;
        }
        if raw >= self.anchor_hi {
            return self.code_hi;
        }

        let device = self.a_decile * self.normalized(raw) + self.b_decile;
        device.clamp(self.code_floor, self.code_ceil).round() as u8
    }

    pub(crate) fn config(&self) -> &QuantizationConfig {
        &self.config
    }

    pub(crate) fn stats(&self) -> ChannelStatistics {
        self.stats
    }

    pub(crate) fn window(&self) -> RenderingWindow {
        self.window
    }

    /// Curve image of `raw`, rescaled into the nominal domain
    /// `[0, 2^bit_resolution - 1]`
    #[inline]
    fn normalized(&self, raw: f64) -> f64 {
        let span = self.stats.global_max - self.stats.global_min;
        let u = if span > 0.0 {
            ((raw - self.stats.global_min) / span).clamp(0.0, 1.0)
        } else {
            0.0
        };
        let y = self.config.family.transform(u, self.config.coefficient);
        (y - self.ys_normalized) * self.a_normalized
    }

    /// Recompute the decile coefficients from the current window, trim
    /// flag and statistics
    fn recompute_decile(&mut self) {
        let cs = f64::from(self.config.code_start);
        let ce = f64::from(self.config.code_end);
        let (ws, we) = (self.window.start, self.window.end);

        let (anchor_lo, anchor_hi, code_floor, code_ceil) = if self.config.noise_reduction {
            let trim = (self.stats.global_max - self.stats.global_min) / DECILE;
            let trim_lo = self.stats.global_min + trim;
            let trim_hi = self.stats.global_max - trim;
            let code_trim = (ce - cs) / DECILE;

            // Which of window bound vs. trimmed bound anchors the remap
            // depends on how the window overlaps the trimmed interval
            let (lo, hi) = match (ws < trim_lo, we > trim_hi) {
                // Window fully inside the trimmed interval
                (false, false) => (ws, we),
                // Window start inside, end beyond the upper trim
                (false, true) => (ws, trim_hi),
                // Window start below the lower trim, end inside
                (true, false) => (trim_lo, we),
                // Window spans the whole trimmed interval
                (true, true) => (trim_lo, trim_hi),
            };
            (lo, hi, cs + code_trim, ce - code_trim)
        } else {
            (ws, we, cs, ce)
        };

        self.anchor_lo = anchor_lo;
        // A window entirely outside the trimmed interval leaves the
        // anchors inverted; collapse to a step at the lower anchor
        self.anchor_hi = anchor_hi.max(anchor_lo);
        self.code_floor = code_floor;
        self.code_ceil = code_ceil;
        self.code_lo = code_floor.round() as u8;
        self.code_hi = code_ceil.round() as u8;

        let y_lo = self.normalized(self.anchor_lo);
        let y_hi = self.normalized(self.anchor_hi);
        if y_hi > y_lo {
            self.a_decile = (code_ceil - code_floor) / (y_hi - y_lo);
            self.b_decile = code_floor - self.a_decile * y_lo;
        } else {
            // Degenerate interval: the saturation checks in `code_of`
            // produce the step, the linear part only needs to stay total
            self.a_decile = 0.0;
            self.b_decile = code_floor;
        }
    }
}

/// Coefficients of the normalize step: the curve's image at the lower
/// domain endpoint and the scale taking the image span onto the nominal
/// range `[0, 2^bit_resolution - 1]`
fn normalized_coefficients(
    family: CurveFamily,
    coefficient: f64,
    bit_resolution: u32,
) -> (f64, f64) {
    let nominal_max = 2f64.powi(bit_resolution as i32) - 1.0;
    let ys = family.transform(0.0, coefficient);
    let ye = family.transform(1.0, coefficient);
    let span = ye - ys;

    // The curve image span can collapse to zero in floating point for
    // subnormal coefficients, or overflow for huge ones; both cases fall
    // back to the degenerate step mapping
    let a = if span > 0.0 && span.is_finite() {
        nominal_max / span
    } else {
        0.0
    };
    (ys, a)
}
