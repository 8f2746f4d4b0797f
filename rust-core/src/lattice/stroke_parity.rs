use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_STROKE_WIDTH;
use crate::error::{HexFitError, Result};

/// Width of the stroke drawn along the lattice edges, in whole pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct StrokeWidth(u32);

impl StrokeWidth {
    pub fn new(width: u32) -> Result<Self> {
        if width == 0 {
            return Err(HexFitError::InvalidSize(
                "stroke width must be at least one pixel".to_string(),
            ));
        }
        Ok(Self(width))
    }

    pub fn get(&self) -> u32 {
        self.0
    }

    pub fn is_odd(&self) -> bool {
        self.0 % 2 == 1
    }

    /// Origin shift applied on both axes: half a pixel for odd widths.
    pub fn parity_shift(&self) -> f64 {
        if self.is_odd() {
            0.5
        } else {
            0.0
        }
    }

    pub fn origin_shift(&self) -> Vector2<f64> {
        Vector2::repeat(self.parity_shift())
    }

    /// Extra margin keeping half the stroke inside the canvas.
    pub fn margin_allowance(&self) -> i32 {
        (self.0 / 2) as i32
    }
}

impl Default for StrokeWidth {
    fn default() -> Self {
        Self(DEFAULT_STROKE_WIDTH)
    }
}

impl TryFrom<u32> for StrokeWidth {
    type Error = HexFitError;

    fn try_from(width: u32) -> Result<Self> {
        Self::new(width)
    }
}

impl From<StrokeWidth> for u32 {
    fn from(width: StrokeWidth) -> u32 {
        width.0
    }
}

/// Half-pixel origin shift for a raw stroke width.
pub fn parity_shift(stroke_width: u32) -> Result<f64> {
    Ok(StrokeWidth::new(stroke_width)?.parity_shift())
}
