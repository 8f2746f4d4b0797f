use nalgebra::{Matrix2, Vector2};
use serde::{Deserialize, Serialize};

use crate::error::{ensure_positive, HexFitError, Result};
use crate::interfaces::{Axis, Orientation};

pub(crate) const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// A regular hexagonal lattice fixed by a single size parameter.
///
/// Only the apothem and the orientation are stored; every other measurement
/// is recomputed from them on demand.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawLatticeSpec")]
pub struct LatticeSpec {
    apothem: f64,
    orientation: Orientation,
}

/// Unchecked serialized form, validated through [`LatticeSpec::new`].
#[derive(Deserialize)]
struct RawLatticeSpec {
    apothem: f64,
    orientation: Orientation,
}

impl TryFrom<RawLatticeSpec> for LatticeSpec {
    type Error = HexFitError;

    fn try_from(raw: RawLatticeSpec) -> Result<Self> {
        Self::new(raw.apothem, raw.orientation)
    }
}

/// All derived measurements of a [`LatticeSpec`], in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatticeGeometry {
    /// Edge length, `2·apothem/√3`.
    pub side: f64,
    /// Face-to-face distance, `2·apothem`.
    pub width: f64,
    /// Vertex-to-vertex distance, `2·side`.
    pub height: f64,
    /// Center spacing along the width axis, `2·apothem`.
    pub primary_pitch: f64,
    /// Spacing between consecutive rows, `apothem·√3`.
    pub secondary_pitch: f64,
}

impl LatticeSpec {
    /// Construct a lattice from its apothem. Fails on `apothem <= 0`.
    pub fn new(apothem: f64, orientation: Orientation) -> Result<Self> {
        let apothem = ensure_positive(apothem, "apothem")?;
        Ok(Self {
            apothem,
            orientation,
        })
    }

    /// Construct a lattice from the user-facing face-to-face width.
    pub fn from_width(width: f64, orientation: Orientation) -> Result<Self> {
        let width = ensure_positive(width, "hexagon width")?;
        Self::new(width / 2.0, orientation)
    }

    pub fn apothem(&self) -> f64 {
        self.apothem
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn width(&self) -> f64 {
        2.0 * self.apothem
    }

    pub fn side(&self) -> f64 {
        2.0 * self.apothem / SQRT_3
    }

    pub fn height(&self) -> f64 {
        2.0 * self.side()
    }

    pub fn primary_pitch(&self) -> f64 {
        2.0 * self.apothem
    }

    pub fn secondary_pitch(&self) -> f64 {
        self.apothem * SQRT_3
    }

    /// Center spacing along one lattice axis.
    pub fn pitch(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Primary => self.primary_pitch(),
            Axis::Secondary => self.secondary_pitch(),
        }
    }

    pub fn geometry(&self) -> LatticeGeometry {
        LatticeGeometry {
            side: self.side(),
            width: self.width(),
            height: self.height(),
            primary_pitch: self.primary_pitch(),
            secondary_pitch: self.secondary_pitch(),
        }
    }

    /// Primitive lattice vectors in canvas space, stored as columns.
    ///
    /// The first vector steps one hexagon along the width axis, the second
    /// steps to the next row (half a pitch sideways).
    pub fn basis(&self) -> Matrix2<f64> {
        let a1 = self.orientation.to_canvas(self.primary_pitch(), 0.0);
        let a2 = self
            .orientation
            .to_canvas(self.primary_pitch() / 2.0, self.secondary_pitch());
        Matrix2::from_columns(&[a1, a2])
    }

    /// Offsets of the six vertices from a hexagon center, in canvas space.
    pub fn vertex_offsets(&self) -> [Vector2<f64>; 6] {
        hexagon_vertices(self.apothem, self.side(), self.orientation)
    }
}

/// Derive every measurement from an apothem and an orientation.
///
/// The orientation only decides which canvas axis the measurements map to;
/// the returned values are the same for both.
pub fn lattice_geometry(apothem: f64, orientation: Orientation) -> Result<LatticeGeometry> {
    Ok(LatticeSpec::new(apothem, orientation)?.geometry())
}

/// Vertex offsets of a hexagon with the given half-width and circumradius,
/// starting at the top vertex (pointy-top) and going clockwise.
pub(crate) fn hexagon_vertices(
    half_width: f64,
    radius: f64,
    orientation: Orientation,
) -> [Vector2<f64>; 6] {
    let corners = [
        (0.0, -radius),
        (half_width, -radius / 2.0),
        (half_width, radius / 2.0),
        (0.0, radius),
        (-half_width, radius / 2.0),
        (-half_width, -radius / 2.0),
    ];
    corners.map(|(p, s)| orientation.to_canvas(p, s))
}
