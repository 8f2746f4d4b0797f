/// Walkthrough of the alignment search and canvas planning
///
/// This example scores a single hexagon size, sweeps an interval for the best one,
/// plans a canvas for it and composes a small sample sheet.
use hexgrid_fit::lattice::{evaluate_drift, evaluate_stretch, LatticeSpec, StrokeWidth};
use hexgrid_fit::layout::{compose_sample_sheet, ExtentMode, Margins, PixelSize, SheetRequest};
use hexgrid_fit::pipeline::{fit_grid, GridRequest};
use hexgrid_fit::search::{best_fit, SearchParams, SizeInterval};
use hexgrid_fit::Orientation;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Hexagon Grid Alignment Walkthrough ===\n");

    // Example 1: Score one lattice
    println!("1. Scoring a 20 px pointy-top hexagon:");
    let lattice = LatticeSpec::from_width(20.0, Orientation::PointyTop)?;
    let geometry = lattice.geometry();
    println!("   Side: {:.3}, height: {:.3}", geometry.side, geometry.height);
    println!(
        "   Pitches: {:.3} x {:.3}",
        geometry.primary_pitch, geometry.secondary_pitch
    );
    let stroke = StrokeWidth::new(2)?;
    let drift = evaluate_drift(&lattice, stroke.parity_shift(), 1000);
    println!(
        "   Quality: {} (primary {}, secondary {})",
        drift.quality(),
        drift.primary,
        drift.secondary
    );
    println!("   Stretch: {}\n", evaluate_stretch(&lattice)?);

    // Example 2: Sweep an interval
    println!("2. Searching widths 20..60 px:");
    let interval = SizeInterval::new(20.0, 60.0)?;
    for stroke_width in [2, 3] {
        let params = SearchParams {
            stroke_width: StrokeWidth::new(stroke_width)?,
            ..SearchParams::default()
        };
        let best = best_fit(&interval, &params)?;
        println!(
            "   Stroke {}: width {} with quality {} and stretch {}",
            stroke_width,
            best.width(),
            best.quality(),
            best.stretch
        );
    }
    println!();

    // Example 3: Plan a canvas
    println!("3. Planning a 640x480 canvas:");
    for extent_mode in [ExtentMode::Fixed, ExtentMode::Auto] {
        let result = fit_grid(&GridRequest {
            interval,
            params: SearchParams::default(),
            margins: Margins::uniform(4),
            target: PixelSize::new(640, 480)?,
            extent_mode,
        })?;
        let extent = result.extent;
        println!(
            "   {:?}: {}x{} canvas, {} x {} hexagons, first center ({}, {})",
            extent_mode,
            extent.width,
            extent.height,
            extent.columns,
            extent.rows,
            extent.first_center.x,
            extent.first_center.y
        );
    }
    println!();

    // Example 4: Compose a sample sheet
    println!("4. Composing a sample sheet:");
    let sheet = compose_sample_sheet(&SheetRequest {
        interval: SizeInterval::new(30.0, 90.0)?,
        sheet: PixelSize::new(1000, 600)?,
        sample_count: 6,
        params: SearchParams::default(),
    })?;
    println!(
        "   {} cells of {} px on {}",
        sheet.cells.len(),
        sheet.grid.cell_size,
        sheet.background
    );
    for cell in &sheet.cells {
        println!(
            "   - width {:>5} quality {:>4} stretch {}",
            cell.label.width, cell.label.quality, cell.label.stretch
        );
    }

    Ok(())
}
