// Lattice module: Hexagonal lattice geometry and its pixel-quantization scores
// This module derives every lattice measurement from one apothem and rates how well it survives rounding to pixels

// ======================== MODULE DECLARATIONS ========================
pub mod drift;
pub mod hex_geometry;
pub mod stretch;
pub mod stroke_parity;


// ======================== LATTICE GEOMETRY ========================
pub use hex_geometry::{
    LatticeGeometry, // struct - side, width, height, primary and secondary pitch of one lattice
    LatticeSpec,     // struct - immutable (apothem, orientation) pair
    lattice_geometry, // fn(apothem: f64, orientation: Orientation) -> Result<LatticeGeometry> - derive all measurements
};
// LatticeSpec impl methods:
//   new(apothem: f64, orientation: Orientation) -> Result<Self>   - fails on apothem <= 0
//   from_width(width: f64, orientation: Orientation) -> Result<Self> - width is face to face, 2·apothem
//   apothem(), width(), side(), height() -> f64                   - hexagon measurements
//   primary_pitch(), secondary_pitch(), pitch(axis) -> f64        - center spacings 2·a and a·√3
//   geometry(&self) -> LatticeGeometry                            - all measurements at once
//   basis(&self) -> Matrix2<f64>                                  - primitive vectors in canvas space (columns)
//   vertex_offsets(&self) -> [Vector2<f64>; 6]                    - ideal vertices relative to a center

// ======================== DRIFT / QUALITY ========================
pub use drift::{
    DriftScore,       // struct - per-axis repeat counts before one pixel of drift
    QuantizedPitches, // struct - pixel steps the renderer actually repeats
    axis_quality,     // fn(pitch: f64, phase: f64, k_max: u32) -> u32 - repeats within one pixel, capped
    evaluate_drift,   // fn(lattice: &LatticeSpec, phase: f64, k_max: u32) -> DriftScore
    fractional_drift, // fn(pitch: f64) -> f64 - signed per-repeat rounding error
    quantized_pitch,  // fn(pitch: f64) -> f64 - realized whole-pixel step
};

// ======================== STRETCH ========================
pub use stretch::{
    StretchScore,         // struct - signed aspect deformation in percent
    evaluate_stretch,     // fn(lattice: &LatticeSpec) -> Result<StretchScore>
    stretch_from_pitches, // fn(pitches: &QuantizedPitches) -> Result<StretchScore>
};

// ======================== STROKE PARITY ========================
pub use stroke_parity::{
    StrokeWidth,  // struct - positive stroke width; odd widths shift the origin by half a pixel
    parity_shift, // fn(stroke_width: u32) -> Result<f64>
};
