use log::trace;
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::config::{MAX_PREALLOCATED_CENTERS, SPAN_TOLERANCE};
use crate::error::{HexFitError, Result};
use crate::interfaces::Orientation;
use crate::layout::bounding_box::BoundingBox2D;
use crate::lattice::{LatticeSpec, QuantizedPitches, StrokeWidth};

/// Signed margins in pixels, measured inward from the target edges.
///
/// Positive values keep the lattice that far inside the target. Negative
/// values let it run past the edge, where it is clipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Margins {
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    pub left: i32,
}

impl Margins {
    pub fn new(top: i32, right: i32, bottom: i32, left: i32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub fn uniform(margin: i32) -> Self {
        Self::new(margin, margin, margin, margin)
    }

    /// Add the same amount to every side.
    pub fn grow(&self, by: i32) -> Self {
        Self::new(
            self.top + by,
            self.right + by,
            self.bottom + by,
            self.left + by,
        )
    }

    /// Margins moved inward so half of the stroke stays inside each edge.
    pub fn with_stroke_allowance(&self, stroke: StrokeWidth) -> Self {
        self.grow(stroke.margin_allowance())
    }

    /// Net margin along the canvas x axis (left + right).
    pub fn horizontal(&self) -> i64 {
        self.left as i64 + self.right as i64
    }

    /// Net margin along the canvas y axis (top + bottom).
    pub fn vertical(&self) -> i64 {
        self.top as i64 + self.bottom as i64
    }
}

impl FromStr for Margins {
    type Err = String;

    /// Parse `"M"` (all sides) or `"T,R,B,L"`.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let values = s
            .split(',')
            .map(|v| v.trim().parse::<i32>())
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| format!("invalid margin in '{}': {}", s, e))?;
        match values.as_slice() {
            [m] => Ok(Margins::uniform(*m)),
            [t, r, b, l] => Ok(Margins::new(*t, *r, *b, *l)),
            _ => Err(format!("expected 1 or 4 margins, got {}", values.len())),
        }
    }
}

/// A width x height in whole pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PixelSize {
    pub width: u32,
    pub height: u32,
}

impl PixelSize {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let size = Self { width, height };
        size.validate()?;
        Ok(size)
    }

    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(HexFitError::InvalidSize(format!(
                "pixel size must be positive, got {}",
                self
            )));
        }
        Ok(())
    }
}

impl fmt::Display for PixelSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl FromStr for PixelSize {
    type Err = String;

    /// Parse `"WIDTHxHEIGHT"`.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (w, h) = s
            .split_once(['x', 'X'])
            .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{}'", s))?;
        let width = w.trim().parse().map_err(|e| format!("invalid width '{}': {}", w, e))?;
        let height = h.trim().parse().map_err(|e| format!("invalid height '{}': {}", h, e))?;
        PixelSize::new(width, height).map_err(|e| e.to_string())
    }
}

/// How the extent relates to the target and the lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExtentMode {
    /// The extent is the target, whatever the lattice does.
    #[default]
    Fixed,
    /// The extent is cropped to the lattice span plus margins, except on an
    /// axis whose net margin is negative.
    Auto,
}

/// Offset and spacing for a host image grid whose intersections fall on
/// hexagon centers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridGuide {
    pub spacing: Vector2<f64>,
    pub offset: Vector2<f64>,
}

/// Planned canvas region for one lattice.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasExtent {
    pub width: u32,
    pub height: u32,
    /// Hexagons per row (along the width axis).
    pub columns: u32,
    /// Rows of hexagons.
    pub rows: u32,
    /// Top-left of the extent relative to the target's top-left.
    pub origin: Vector2<f64>,
    /// Center of the first hexagon relative to the extent's top-left,
    /// parity shift included. Later centers are whole pitches away.
    pub first_center: Vector2<f64>,
    /// The lattice runs past the extent on at least one side.
    pub clipped: bool,
    pub pitches: QuantizedPitches,
    pub orientation: Orientation,
}

impl CanvasExtent {
    pub fn size(&self) -> PixelSize {
        PixelSize {
            width: self.width,
            height: self.height,
        }
    }

    pub fn hexagon_count(&self) -> u64 {
        self.columns as u64 * self.rows as u64
    }

    pub fn is_empty(&self) -> bool {
        self.hexagon_count() == 0
    }

    /// Every hexagon center, row by row, relative to the extent's top-left.
    /// Odd rows are shifted by half a primary pitch.
    pub fn centers(&self) -> Vec<Vector2<f64>> {
        let (p0, s0) = self
            .orientation
            .to_lattice(self.first_center.x, self.first_center.y);
        let capacity = usize::try_from(self.hexagon_count())
            .unwrap_or(usize::MAX)
            .min(MAX_PREALLOCATED_CENTERS);
        let mut centers = Vec::with_capacity(capacity);
        for row in 0..self.rows {
            let stagger = if row % 2 == 1 { self.pitches.stagger() } else { 0.0 };
            let s = s0 + row as f64 * self.pitches.secondary;
            for col in 0..self.columns {
                let p = p0 + stagger + col as f64 * self.pitches.primary;
                centers.push(self.orientation.to_canvas(p, s));
            }
        }
        centers
    }

    /// Box the drawn lattice occupies, relative to the extent's top-left.
    pub fn lattice_bounds(&self) -> BoundingBox2D {
        let (p0, s0) = self
            .orientation
            .to_lattice(self.first_center.x, self.first_center.y);
        let (span_p, span_s) = lattice_spans(self.columns, self.rows, &self.pitches);
        let min_p = p0 - self.pitches.stagger();
        let min_s = s0 - self.pitches.row_reach();
        BoundingBox2D::new(
            self.orientation.to_canvas(min_p, min_s),
            self.orientation.to_canvas(min_p + span_p, min_s + span_s),
        )
    }

    /// The extent as a box at its own top-left.
    pub fn bounds(&self) -> BoundingBox2D {
        BoundingBox2D::from_origin_size(Vector2::zeros(), self.width as f64, self.height as f64)
    }

    /// Image-grid spacing `(P/2, S)` anchored on the first center.
    pub fn grid_guide(&self) -> GridGuide {
        GridGuide {
            spacing: self
                .orientation
                .to_canvas(self.pitches.stagger(), self.pitches.secondary),
            offset: self.first_center,
        }
    }
}

/// Lattice spans `(primary, secondary)`: side to side across the staggered
/// rows, and row reach to row reach. Zero for an empty lattice.
fn lattice_spans(columns: u32, rows: u32, pitches: &QuantizedPitches) -> (f64, f64) {
    if columns == 0 || rows == 0 {
        return (0.0, 0.0);
    }
    let stagger = if rows > 1 { pitches.stagger() } else { 0.0 };
    (
        columns as f64 * pitches.primary + stagger,
        (rows - 1) as f64 * pitches.secondary + 2.0 * pitches.row_reach(),
    )
}

/// Whole rows whose reach-to-reach span `(rows-1)·S + 2·reach` fits in `room`.
fn rows_that_fit(room: f64, secondary: f64, reach: f64) -> u32 {
    if room < 2.0 * reach {
        return 0;
    }
    ((room - 2.0 * reach) / secondary + SPAN_TOLERANCE).floor() as u32 + 1
}

/// Whole columns whose span `columns·P + stagger` fits in `room`.
fn columns_that_fit(room: f64, primary: f64, stagger: f64) -> u32 {
    ((room - stagger) / primary + SPAN_TOLERANCE).floor().max(0.0) as u32
}

/// Plan the canvas extent for a lattice drawn with the given stroke.
///
/// Margins are insets: the lattice gets `target − margins` on each canvas
/// axis and holds as many whole rows and columns as fit in that room. With
/// a negative net margin the room is larger than the target and the lattice
/// is clipped at the target edge.
///
/// In [`ExtentMode::Fixed`] the extent is the target. In
/// [`ExtentMode::Auto`] an axis with a non-negative net margin is cropped to
/// the lattice span plus its margins and kept centered on the target.
///
/// Odd strokes shift every center by half a pixel. The pitches stay whole.
pub fn plan_extent(
    lattice: &LatticeSpec,
    stroke: StrokeWidth,
    margins: &Margins,
    target: PixelSize,
    mode: ExtentMode,
) -> Result<CanvasExtent> {
    target.validate()?;
    let pitches = QuantizedPitches::new(lattice);
    if !pitches.is_renderable() {
        return Err(HexFitError::DegenerateResult(format!(
            "a {} px hexagon has no pixel pitch to repeat",
            lattice.width()
        )));
    }
    let orientation = lattice.orientation();
    let shift = stroke.parity_shift();
    let reach = pitches.row_reach();

    let (target_p, target_s) = orientation.to_lattice(target.width as i64, target.height as i64);
    let (margin_p, margin_s) = orientation.to_lattice(margins.horizontal(), margins.vertical());
    let room_p = (target_p - margin_p).max(0) as f64;
    let room_s = (target_s - margin_s).max(0) as f64;

    let mut rows = rows_that_fit(room_s, pitches.secondary, reach);
    let stagger = if rows > 1 { pitches.stagger() } else { 0.0 };
    let mut columns = columns_that_fit(room_p, pitches.primary, stagger);
    if rows == 0 || columns == 0 {
        rows = 0;
        columns = 0;
    }
    let empty = rows == 0;
    let (span_p, span_s) = lattice_spans(columns, rows, &pitches);

    let cropped = |margin: i64| mode == ExtentMode::Auto && margin >= 0 && !empty;
    let extent_of = |target: i64, span: f64, margin: i64| {
        if cropped(margin) {
            (span - SPAN_TOLERANCE).ceil() + margin as f64 + 2.0 * shift
        } else {
            target as f64
        }
    };
    let origin_of = |target: i64, extent: f64, margin: i64| {
        if cropped(margin) {
            ((target as f64 - extent) / 2.0 + shift).floor()
        } else {
            0.0
        }
    };
    let extent_p = extent_of(target_p, span_p, margin_p);
    let extent_s = extent_of(target_s, span_s, margin_s);
    let origin = orientation.to_canvas(
        origin_of(target_p, extent_p, margin_p),
        origin_of(target_s, extent_s, margin_s),
    );

    // Center the lattice on whole pixels, then apply the parity shift
    let first_p = ((extent_p - span_p) / 2.0).floor() + pitches.stagger() + shift;
    let first_s = ((extent_s - span_s) / 2.0).floor() + reach + shift;

    let size = orientation.to_canvas(extent_p, extent_s);
    let mut extent = CanvasExtent {
        width: size.x as u32,
        height: size.y as u32,
        columns,
        rows,
        origin,
        first_center: orientation.to_canvas(first_p, first_s),
        clipped: false,
        pitches,
        orientation,
    };
    extent.clipped = !empty && !extent.bounds().contains_box(&extent.lattice_bounds());
    trace!(
        "Extent {}x{} for {} columns x {} rows, clipped: {}",
        extent.width,
        extent.height,
        columns,
        rows,
        extent.clipped
    );
    Ok(extent)
}
