use serde::{Deserialize, Serialize};

use crate::config::{MAX_SWEEP_STEPS, SPAN_TOLERANCE};
use crate::error::{HexFitError, Result};

/// Range of hexagon widths (face to face, pixels) to search.
///
/// `max_width == 0` is the exact-width sentinel: no sweep, `min_width` is
/// used as is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizeInterval {
    pub min_width: f64,
    pub max_width: f64,
}

impl SizeInterval {
    /// Build and validate an interval.
    pub fn new(min_width: f64, max_width: f64) -> Result<Self> {
        let interval = Self {
            min_width,
            max_width,
        };
        interval.validate()?;
        Ok(interval)
    }

    /// Single target width, no search.
    pub fn exact(width: f64) -> Result<Self> {
        Self::new(width, 0.0)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.min_width.is_finite() || self.min_width <= 0.0 {
            return Err(HexFitError::InvalidInterval(format!(
                "minimal width must be positive, got {}",
                self.min_width
            )));
        }
        if !self.max_width.is_finite() || self.max_width < 0.0 {
            return Err(HexFitError::InvalidInterval(format!(
                "maximal width must be 0 or positive, got {}",
                self.max_width
            )));
        }
        if !self.is_exact() && self.max_width < self.min_width {
            return Err(HexFitError::InvalidInterval(format!(
                "maximal width {} is below minimal width {}",
                self.max_width, self.min_width
            )));
        }
        Ok(())
    }

    pub fn is_exact(&self) -> bool {
        self.max_width == 0.0
    }

    /// Number of granularity steps between `min_width` and `max_width`.
    ///
    /// Rejects granularities that would make the sweep longer than
    /// `MAX_SWEEP_STEPS`.
    pub fn step_count(&self, granularity: f64) -> Result<usize> {
        if self.is_exact() {
            return Ok(0);
        }
        let steps = ((self.max_width - self.min_width) / granularity + SPAN_TOLERANCE).floor();
        if !steps.is_finite() || steps > MAX_SWEEP_STEPS as f64 {
            return Err(HexFitError::InvalidSize(format!(
                "granularity {} gives more than {} sweep steps over [{}, {}]",
                granularity, MAX_SWEEP_STEPS, self.min_width, self.max_width
            )));
        }
        Ok(steps as usize)
    }

    /// Widths visited by a sweep: `min_width + i·granularity` up to
    /// `max_width` inclusive. The exact sentinel yields `min_width` alone.
    pub fn sample_widths(&self, granularity: f64) -> Result<Vec<f64>> {
        if self.is_exact() {
            return Ok(vec![self.min_width]);
        }
        let steps = self.step_count(granularity)?;
        Ok((0..=steps)
            .map(|i| (self.min_width + i as f64 * granularity).min(self.max_width))
            .collect())
    }
}
