use serde::{Deserialize, Serialize};

use crate::config::PITCH_TOLERANCE;
use crate::interfaces::{Axis, Orientation};
use crate::lattice::hex_geometry::{hexagon_vertices, LatticeSpec};
use nalgebra::Vector2;

/// Per-axis count of contiguous repeats before the quantized lattice drifts
/// one pixel away from the ideal one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriftScore {
    pub primary: u32,
    pub secondary: u32,
}

impl DriftScore {
    /// Overall quality: the worse of the two axes.
    pub fn quality(&self) -> u32 {
        self.primary.min(self.secondary)
    }

    pub fn axis(&self, axis: Axis) -> u32 {
        match axis {
            Axis::Primary => self.primary,
            Axis::Secondary => self.secondary,
        }
    }
}

/// Signed per-repeat error `p − round(p)` of a pitch repeated as a whole
/// number of pixels.
pub fn fractional_drift(pitch: f64) -> f64 {
    pitch - pitch.round()
}

/// Pitch actually repeated by the renderer: the ideal pitch rounded to whole
/// pixels. The parity shift never enters the step.
pub fn quantized_pitch(pitch: f64) -> f64 {
    pitch.round()
}

/// Quality of a single axis, capped at `k_max`.
///
/// The ideal centers sit at `k·p` from the raster origin while the renderer
/// draws them at `phase + k·round(p)`, so repeat `k` is off by
/// `phase − k·d` with `d = p − round(p)`. The axis quality is the number of
/// repeats whose offset stays within one pixel, minus one. With no shift
/// this is `floor(1/|d|) − 1`; a half-pixel shift lengthens the run of a
/// pitch rounded down (`d > 0`) and shortens the run of one rounded up.
///
/// A pitch with no fractional error never drifts and scores `k_max`.
pub fn axis_quality(pitch: f64, phase: f64, k_max: u32) -> u32 {
    let error = fractional_drift(pitch);
    if error.abs() < PITCH_TOLERANCE {
        return k_max;
    }
    let budget = if error > 0.0 { 1.0 + phase } else { 1.0 - phase };
    let repeats = (budget / error.abs() + PITCH_TOLERANCE).floor() - 1.0;
    repeats.clamp(0.0, k_max as f64) as u32
}

/// Score both axes of a lattice drawn with its origin `phase` pixels off the
/// raster origin.
pub fn evaluate_drift(lattice: &LatticeSpec, phase: f64, k_max: u32) -> DriftScore {
    DriftScore {
        primary: axis_quality(lattice.primary_pitch(), phase, k_max),
        secondary: axis_quality(lattice.secondary_pitch(), phase, k_max),
    }
}

/// The whole-pixel steps a renderer repeats for a lattice.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuantizedPitches {
    pub primary: f64,
    pub secondary: f64,
}

impl QuantizedPitches {
    pub fn new(lattice: &LatticeSpec) -> Self {
        Self {
            primary: quantized_pitch(lattice.primary_pitch()),
            secondary: quantized_pitch(lattice.secondary_pitch()),
        }
    }

    /// Sideways offset of every other row.
    pub fn stagger(&self) -> f64 {
        self.primary / 2.0
    }

    /// Center-to-vertex distance of the drawn hexagons, `2·S/3`.
    pub fn vertex_radius(&self) -> f64 {
        self.secondary * 2.0 / 3.0
    }

    /// Whole pixels a row reaches past its centers, `round(2·S/3)`.
    pub fn row_reach(&self) -> f64 {
        self.vertex_radius().round()
    }

    /// Both realized steps are at least one pixel wide.
    pub fn is_renderable(&self) -> bool {
        self.primary > 0.0 && self.secondary > 0.0
    }

    /// Vertex offsets of a drawn hexagon, in canvas space.
    pub fn vertex_offsets(&self, orientation: Orientation) -> [Vector2<f64>; 6] {
        hexagon_vertices(self.stagger(), self.vertex_radius(), orientation)
    }
}
