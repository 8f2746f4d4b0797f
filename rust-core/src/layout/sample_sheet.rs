use log::debug;
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::{LABEL_FONT_BASE, LABEL_FONT_SCALE, MAX_SAMPLE_COUNT};
use crate::error::{HexFitError, Result};
use crate::layout::bounding_box::BoundingBox2D;
use crate::layout::canvas_extent::{plan_extent, ExtentMode, Margins, PixelSize};
use crate::lattice::StretchScore;
use crate::pipeline::BestFitResult;
use crate::search::{rank_candidates, sweep_candidates, SearchParams, SizeInterval};

/// Inputs of a sample sheet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SheetRequest {
    pub interval: SizeInterval,
    pub sheet: PixelSize,
    /// Number of samples to show, clamped to the number of candidates.
    pub sample_count: usize,
    #[serde(default)]
    pub params: SearchParams,
}

/// Square cells arranged in rows and columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetGrid {
    pub cell_size: u32,
    pub rows: u32,
    pub columns: u32,
}

/// Largest `count` equal squares that fit in a `width x height` rectangle.
///
/// Two layouts are tried: one filling the whole height and one filling the
/// whole width. The larger cell wins, ties go to the width-filling one.
pub fn square_fill(width: u32, height: u32, count: usize) -> SheetGrid {
    let (x, y, n) = (width as f64, height as f64, count.max(1) as f64);
    let ratio = x / y;
    let columns_guess = (n * ratio).sqrt();
    let rows_guess = n / columns_guess;

    // Fill the height
    let mut rows_h = rows_guess.ceil();
    let mut columns_h = (n / rows_h).ceil();
    while rows_h * ratio < columns_h {
        rows_h += 1.0;
        columns_h = (n / rows_h).ceil();
    }
    let cell_h = y / rows_h;

    // Fill the width
    let mut columns_w = columns_guess.ceil();
    let mut rows_w = (n / columns_w).ceil();
    while columns_w < rows_w * ratio {
        columns_w += 1.0;
        rows_w = (n / columns_w).ceil();
    }
    let cell_w = x / columns_w;

    let (cell, rows, columns) = if cell_h <= cell_w {
        (cell_w, rows_w, columns_w)
    } else {
        (cell_h, rows_h, columns_h)
    };
    SheetGrid {
        cell_size: cell.floor() as u32,
        rows: rows as u32,
        columns: columns as u32,
    }
}

/// Text shown in a sample cell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampleLabel {
    pub width: f64,
    pub quality: u32,
    pub stretch: StretchScore,
}

impl fmt::Display for SampleLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.width.fract() == 0.0 {
            writeln!(f, "width  :{:.0}", self.width)?;
        } else {
            writeln!(f, "width  :{:.1}", self.width)?;
        }
        writeln!(f, "stretch:{}", self.stretch)?;
        write!(f, "quality:{}", self.quality)
    }
}

/// One tile of the sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleCell {
    pub index: usize,
    pub bounds: BoundingBox2D,
    pub result: BestFitResult,
    pub label: SampleLabel,
    /// Top-left of the label text, sheet coordinates.
    pub label_anchor: Vector2<f64>,
    pub font_size: f64,
}

impl SampleCell {
    /// Top-left of the planned extent in sheet coordinates.
    pub fn extent_origin(&self) -> Vector2<f64> {
        self.bounds.min + self.result.extent.origin
    }

    /// Hexagon centers in sheet coordinates, before clipping to `bounds`.
    pub fn centers(&self) -> Vec<Vector2<f64>> {
        let origin = self.extent_origin();
        self.result
            .extent
            .centers()
            .into_iter()
            .map(|c| origin + c)
            .collect()
    }

    /// Centers that fall inside the cell once the lattice is clipped.
    pub fn visible_centers(&self) -> Vec<Vector2<f64>> {
        self.centers()
            .into_iter()
            .filter(|c| self.bounds.contains(*c))
            .collect()
    }

    /// Box of the whole lattice in sheet coordinates, overflow included.
    pub fn lattice_bounds(&self) -> BoundingBox2D {
        self.result
            .extent
            .lattice_bounds()
            .translate(self.extent_origin())
    }

    /// Part of the lattice drawn in this cell, `None` for an empty lattice.
    pub fn clip_region(&self) -> Option<BoundingBox2D> {
        if self.result.extent.is_empty() {
            return None;
        }
        self.lattice_bounds().clip_to(&self.bounds)
    }
}

/// A composed sheet: the grid and its cells, sorted by width.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleSheet {
    pub grid: SheetGrid,
    pub cells: Vec<SampleCell>,
    /// Region covered by the cells, from the sheet's top-left.
    pub background: PixelSize,
    /// Width of the separator lines drawn between cells.
    pub separator_width: u32,
}

/// Pick the best widths of an interval and lay them out on a sheet.
pub fn compose_sample_sheet(request: &SheetRequest) -> Result<SampleSheet> {
    request.interval.validate()?;
    if request.interval.is_exact() {
        return Err(HexFitError::InvalidInterval(
            "a sample sheet needs a maximal width above 0".to_string(),
        ));
    }
    request.sheet.validate()?;
    if request.sample_count == 0 || request.sample_count > MAX_SAMPLE_COUNT {
        return Err(HexFitError::InvalidSize(format!(
            "sample count must be between 1 and {}, got {}",
            MAX_SAMPLE_COUNT, request.sample_count
        )));
    }

    let mut selected = sweep_candidates(&request.interval, &request.params)?;
    if selected.is_empty() {
        return Err(HexFitError::DegenerateResult(format!(
            "no usable width in [{}, {}]",
            request.interval.min_width, request.interval.max_width
        )));
    }
    selected.sort_by(rank_candidates);
    selected.truncate(request.sample_count);
    selected.sort_by(|a, b| a.width().total_cmp(&b.width()));

    let grid = square_fill(request.sheet.width, request.sheet.height, selected.len());
    if grid.cell_size == 0 {
        return Err(HexFitError::DegenerateResult(format!(
            "{} samples do not fit on a {} sheet",
            selected.len(),
            request.sheet
        )));
    }
    debug!(
        "Sample sheet: {} cells of {} px in {} rows x {} columns",
        selected.len(),
        grid.cell_size,
        grid.rows,
        grid.columns
    );

    let stroke = request.params.stroke_width;
    let cell = grid.cell_size as f64;
    let cell_size = PixelSize::new(grid.cell_size, grid.cell_size)?;
    let inset = (0.5 * cell.sqrt()).floor() + stroke.get() as f64;
    let font_size = LABEL_FONT_SCALE * cell / 500.0 + LABEL_FONT_BASE;

    let cells = selected
        .iter()
        .enumerate()
        .map(|(index, candidate)| {
            let column = (index % grid.columns as usize) as f64;
            let row = (index / grid.columns as usize) as f64;
            let bounds = BoundingBox2D::from_origin_size(
                Vector2::new(column * cell, row * cell),
                cell,
                cell,
            );
            // Run one and a half apothems past every edge so the clipped cell shows no gaps
            let overflow = (1.5 * candidate.lattice.apothem()).floor() as i32;
            let margins = Margins::uniform(-overflow).with_stroke_allowance(stroke);
            let extent = plan_extent(
                &candidate.lattice,
                stroke,
                &margins,
                cell_size,
                ExtentMode::Fixed,
            )?;
            let result = BestFitResult::from_candidate(candidate, extent);
            Ok(SampleCell {
                index,
                bounds,
                label: result.label(),
                result,
                label_anchor: bounds.min + Vector2::repeat(inset),
                font_size,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(SampleSheet {
        background: PixelSize {
            width: grid.cell_size * grid.columns,
            height: grid.cell_size * grid.rows,
        },
        separator_width: 2 * stroke.get(),
        grid,
        cells,
    })
}
