use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{HexFitError, Result};
use crate::lattice::drift::QuantizedPitches;
use crate::lattice::hex_geometry::{LatticeSpec, SQRT_3};

/// Signed deformation of the drawn hexagon, in percent.
///
/// Positive values mean rows are spaced further apart than a regular hexagon
/// of the realized width would need.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct StretchScore(pub f64);

impl StretchScore {
    pub fn percent(&self) -> f64 {
        self.0
    }

    pub fn magnitude(&self) -> f64 {
        self.0.abs()
    }
}

impl fmt::Display for StretchScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0.0 { '-' } else { '+' };
        write!(f, "{}{}%", sign, one_significant_digit(self.magnitude()))
    }
}

/// Render a non-negative value rounded to a single significant digit.
fn one_significant_digit(value: f64) -> String {
    if value == 0.0 || !value.is_finite() {
        return "0".to_string();
    }
    let decimals = -(value.log10().floor() as i32);
    if decimals >= 0 {
        format!("{:.*}", decimals as usize, value)
    } else {
        let unit = 10f64.powi(-decimals);
        format!("{}", (value / unit).round() * unit)
    }
}

/// Stretch from already-quantized pitches.
///
/// The realized ratio is the row spacing over the row stagger (half the
/// primary pitch); a regular hexagon has exactly `√3`.
pub fn stretch_from_pitches(pitches: &QuantizedPitches) -> Result<StretchScore> {
    if !pitches.is_renderable() {
        return Err(HexFitError::DegenerateResult(format!(
            "realized pitches {}x{} px collapse to nothing",
            pitches.primary, pitches.secondary
        )));
    }
    let realized_ratio = 2.0 * pitches.secondary / pitches.primary;
    Ok(StretchScore((realized_ratio / SQRT_3 - 1.0) * 100.0))
}

/// Stretch induced by quantizing both pitches of `lattice` independently.
pub fn evaluate_stretch(lattice: &LatticeSpec) -> Result<StretchScore> {
    stretch_from_pitches(&QuantizedPitches::new(lattice))
}
